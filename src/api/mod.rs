mod bar_chart;
mod chart_config;
mod label_format;
mod label_formatter_controller;
mod render_frame_builder;

pub use bar_chart::BarChart;
pub use chart_config::{
    BarChartConfig, ChartData, ChartStyleConfig, DEFAULT_CHART_HEIGHT_PX, DEFAULT_CHART_WIDTH_PX,
    DEFAULT_DECIMAL_PLACES, Dataset, FrameStyle, MAX_DECIMAL_PLACES,
};
pub use label_format::{XLabelFormatterFn, YLabelFormatterFn, format_fixed, format_plain_number};
