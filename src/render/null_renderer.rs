use crate::error::ChartResult;
use crate::render::{Annotation, HoverFrame, Renderer};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates every frame and tallies what a real surface would
/// paint, so tests can assert on the published output.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_grid_count: usize,
    pub last_baseline_count: usize,
    pub last_vertical_line_count: usize,
    pub last_date_label_count: usize,
    pub last_marker_count: usize,
    pub last_tooltip_count: usize,
}

impl NullRenderer {
    #[must_use]
    pub fn last_annotation_count(&self) -> usize {
        self.last_vertical_line_count
            + self.last_date_label_count
            + self.last_marker_count
            + self.last_tooltip_count
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &HoverFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_grid_count = frame.grid.len();
        self.last_baseline_count = frame.grid.iter().filter(|line| line.baseline).count();
        self.last_vertical_line_count = 0;
        self.last_date_label_count = 0;
        self.last_marker_count = 0;
        self.last_tooltip_count = 0;
        for annotation in &frame.annotations {
            match annotation {
                Annotation::VerticalLine { .. } => self.last_vertical_line_count += 1,
                Annotation::DateLabel { .. } => self.last_date_label_count += 1,
                Annotation::Marker { .. } => self.last_marker_count += 1,
                Annotation::Tooltip { .. } => self.last_tooltip_count += 1,
            }
        }
        Ok(())
    }
}
