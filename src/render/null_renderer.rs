use crate::error::ChartResult;
use crate::render::{PrimitiveCounts, RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates every frame so invalid geometry surfaces without a real
/// drawing backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_counts: PrimitiveCounts,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_counts = frame.counts();
        Ok(())
    }
}
