use crate::core::Viewport;
use crate::error::{SchedulerError, SchedulerResult};
use crate::render::{LinePrimitive, RectPrimitive, TextPrimitive};

/// Backend-agnostic scene for one day-grid draw pass.
///
/// The builder appends primitives in paint order: scaffold first, then cards,
/// then overlays. Backends may draw the vectors as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct GridFrame {
    pub viewport: Viewport,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl GridFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    pub fn validate(&self) -> SchedulerResult<()> {
        if !self.viewport.is_valid() {
            return Err(SchedulerError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        self.lines.iter().try_for_each(|line| line.validate())?;
        self.rects.iter().try_for_each(|rect| rect.validate())?;
        self.texts.iter().try_for_each(TextPrimitive::validate)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.rects.is_empty() && self.texts.is_empty()
    }
}
