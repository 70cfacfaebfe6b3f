use tracing::{debug, warn};

use crate::core::{
    BarGeometry, BarLabelAnchor, ChartFrame, Series, project_bar_labels, project_bar_tops,
    project_bars,
};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{BarChartConfig, XLabelFormatterFn, YLabelFormatterFn};

/// Label hooks that cannot travel through the serde contract.
#[derive(Default)]
pub(super) struct LabelPresentation {
    pub(super) x_label_formatter: Option<XLabelFormatterFn>,
    pub(super) y_label_formatter: Option<YLabelFormatterFn>,
}

/// Bar chart component: owns its renderer and a validated configuration.
///
/// Every frame is rebuilt from the configuration. Nothing is cached between
/// builds, so identical inputs always produce identical frames.
pub struct BarChart<R: Renderer> {
    renderer: R,
    pub(super) config: BarChartConfig,
    pub(super) series: Series,
    pub(super) frame: ChartFrame,
    pub(super) presentation: LabelPresentation,
}

impl<R: Renderer> BarChart<R> {
    pub fn new(renderer: R, config: BarChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let series = config.series().ok_or(ChartError::MissingDataset)?;
        let frame = config.frame();

        if series.is_empty() {
            warn!("bar chart configured with an empty series");
        }
        debug!(
            values = series.len(),
            labels = config.data.labels.len(),
            width = frame.width(),
            height = frame.height(),
            "bar chart configured"
        );

        Ok(Self {
            renderer,
            config,
            series,
            frame,
            presentation: LabelPresentation::default(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &BarChartConfig {
        &self.config
    }

    #[must_use]
    pub fn series(&self) -> &Series {
        &self.series
    }

    #[must_use]
    pub fn frame(&self) -> ChartFrame {
        self.frame
    }

    #[must_use]
    pub fn bar_percentage(&self) -> f64 {
        self.config.chart_config.bar_percentage
    }

    /// Bar rectangles in series order.
    #[must_use]
    pub fn bar_geometry(&self) -> Vec<BarGeometry> {
        project_bars(&self.series, &self.frame, self.bar_percentage())
    }

    #[must_use]
    pub fn bar_top_geometry(&self) -> Vec<BarGeometry> {
        project_bar_tops(&self.series, &self.frame, self.bar_percentage())
    }

    #[must_use]
    pub fn bar_label_geometry(&self) -> Vec<BarLabelAnchor> {
        project_bar_labels(&self.series, &self.frame, self.bar_percentage())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Builds the current frame and hands it to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }
}
