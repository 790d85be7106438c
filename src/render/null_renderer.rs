use crate::error::SchedulerResult;
use crate::render::{GridFrame, Renderer};

/// Headless renderer for tests and engine-only embedding.
///
/// Every frame is validated and counted, so suites can assert on draw
/// activity without a drawing surface.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_calls: usize,
    pub last_line_count: usize,
    pub last_rect_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &GridFrame) -> SchedulerResult<()> {
        frame.validate()?;
        self.render_calls += 1;
        self.last_line_count = frame.lines.len();
        self.last_rect_count = frame.rects.len();
        self.last_text_count = frame.texts.len();
        Ok(())
    }
}
