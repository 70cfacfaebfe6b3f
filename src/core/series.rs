use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Smallest and largest value of a non-empty sample set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extremes {
    pub min: f64,
    pub max: f64,
}

impl Extremes {
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn of(values: &[f64]) -> Option<Self> {
        let min = values.iter().copied().map(OrderedFloat).min()?;
        let max = values.iter().copied().map(OrderedFloat).max()?;
        Some(Self {
            min: min.into_inner(),
            max: max.into_inner(),
        })
    }

    /// Extends both ends so the range always contains zero.
    #[must_use]
    pub fn including_zero(self) -> Self {
        Self {
            min: self.min.min(0.0),
            max: self.max.max(0.0),
        }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }
}

/// Ordered values driving one bar group.
///
/// `y_max` is not drawn. It only widens the normalization range so several
/// charts can share a common top value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Series {
    values: Vec<f64>,
    #[serde(default)]
    y_max: Option<f64>,
    #[serde(default)]
    from_zero: bool,
}

impl Series {
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            y_max: None,
            from_zero: false,
        }
    }

    #[must_use]
    pub fn with_y_max(mut self, y_max: Option<f64>) -> Self {
        self.y_max = y_max;
        self
    }

    #[must_use]
    pub fn with_from_zero(mut self, from_zero: bool) -> Self {
        self.from_zero = from_zero;
        self
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn y_max(&self) -> Option<f64> {
        self.y_max
    }

    #[must_use]
    pub fn from_zero(&self) -> bool {
        self.from_zero
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Values used for height normalization: the samples followed by `y_max`.
    ///
    /// Baseline, bars, bar tops, bar text and value labels all normalize
    /// against this set, so tops and labels stay aligned with their bars.
    #[must_use]
    pub fn normalization_values(&self) -> Vec<f64> {
        let mut values = Vec::with_capacity(self.values.len() + 1);
        values.extend_from_slice(&self.values);
        if let Some(y_max) = self.y_max {
            values.push(y_max);
        }
        values
    }
}
