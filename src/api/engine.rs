use crate::error::SchedulerResult;
use crate::render::Renderer;

use super::{GridStyle, PluginEvent, engine_core::EngineCore};

/// Main orchestration facade consumed by host applications.
///
/// `SchedulerEngine` coordinates the time axis, overlap layout, long-press
/// drag and pinch trackers, transient feedback, and renderer calls.
pub struct SchedulerEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) core: EngineCore,
}

impl<R: Renderer> core::fmt::Debug for SchedulerEngine<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SchedulerEngine").finish_non_exhaustive()
    }
}

impl<R: Renderer> SchedulerEngine<R> {
    #[must_use]
    pub fn grid_style(&self) -> GridStyle {
        self.core.style
    }

    pub fn set_grid_style(&mut self, style: GridStyle) -> SchedulerResult<()> {
        style.validate()?;
        self.core.style = style;
        self.invalidate_full();
        Ok(())
    }

    pub fn render(&mut self) -> SchedulerResult<()> {
        let frame = self.build_frame()?;
        self.renderer.render(&frame)?;
        self.clear_pending_invalidation();
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
