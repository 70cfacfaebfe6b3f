use crate::render::Renderer;

use super::{BarChart, XLabelFormatterFn, YLabelFormatterFn};

impl<R: Renderer> BarChart<R> {
    /// Sets the hook applied to category label text (`formatXLabel`).
    pub fn set_x_label_formatter(&mut self, formatter: XLabelFormatterFn) {
        self.presentation.x_label_formatter = Some(formatter);
    }

    pub fn clear_x_label_formatter(&mut self) {
        self.presentation.x_label_formatter = None;
    }

    /// Sets the hook applied to fixed-precision value label text (`formatYLabel`).
    pub fn set_y_label_formatter(&mut self, formatter: YLabelFormatterFn) {
        self.presentation.y_label_formatter = Some(formatter);
    }

    pub fn clear_y_label_formatter(&mut self) {
        self.presentation.y_label_formatter = None;
    }

    pub(super) fn format_x_label(&self, label: &str) -> String {
        match &self.presentation.x_label_formatter {
            Some(formatter) => formatter(label),
            None => label.to_owned(),
        }
    }

    pub(super) fn format_y_label(&self, fixed: &str) -> String {
        match &self.presentation.y_label_formatter {
            Some(formatter) => formatter(fixed),
            None => fixed.to_owned(),
        }
    }
}
