mod frame;
mod null_renderer;
mod primitives;

pub use frame::GridFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};

use crate::error::SchedulerResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `GridFrame` so
/// drawing code remains isolated from scheduling and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &GridFrame) -> SchedulerResult<()>;
}
