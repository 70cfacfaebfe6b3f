use serde::{Deserialize, Serialize};

/// Named groups of a bar chart scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartLayer {
    Background,
    Grid,
    HorizontalLabels,
    VerticalLabels,
    Bars,
    BarTops,
    BarText,
}

impl ChartLayer {
    /// Paint order, back to front.
    pub const CANONICAL_ORDER: [Self; 7] = [
        Self::Background,
        Self::Grid,
        Self::HorizontalLabels,
        Self::VerticalLabels,
        Self::Bars,
        Self::BarTops,
        Self::BarText,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Grid => "grid",
            Self::HorizontalLabels => "horizontal-labels",
            Self::VerticalLabels => "vertical-labels",
            Self::Bars => "bars",
            Self::BarTops => "bar-tops",
            Self::BarText => "bar-text",
        }
    }

    /// Position of the layer in [`Self::CANONICAL_ORDER`].
    #[must_use]
    pub fn paint_rank(self) -> usize {
        Self::CANONICAL_ORDER
            .iter()
            .position(|layer| *layer == self)
            .unwrap_or(Self::CANONICAL_ORDER.len())
    }
}
