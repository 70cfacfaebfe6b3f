pub mod axis;
pub mod bar_series;
pub mod baseline;
pub mod series;
pub mod types;

pub use axis::{
    CategoryLabelSlot, GridLine, ValueLabelSlot, category_label_slots, horizontal_grid_lines,
    value_label_slots,
};
pub use bar_series::{
    BASE_BAR_WIDTH_PX, BarGeometry, BarLabelAnchor, map_bar, project_bar_labels,
    project_bar_tops, project_bars,
};
pub use baseline::{PLOT_HEIGHT_RATIO, base_height, scaler, value_height};
pub use series::{Extremes, Series};
pub use types::{ChartFrame, Viewport};
