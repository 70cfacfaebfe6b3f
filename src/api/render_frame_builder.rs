use tracing::{debug, trace};

use crate::core::axis::LABEL_FONT_SIZE_PX;
use crate::core::{
    BASE_BAR_WIDTH_PX, category_label_slots, horizontal_grid_lines, value_label_slots,
};
use crate::error::ChartResult;
use crate::render::{
    ChartLayer, Fill, GradientId, GroupNode, LineStrokeStyle, LinePrimitive, LinearGradient,
    RectPrimitive, RenderFrame, Renderer, SceneNode, TextAnchor, TextPrimitive,
};

use super::BarChart;
use super::label_format::{format_fixed, format_plain_number};

const GRID_LINE_OPACITY: f64 = 0.2;
const GRID_LINE_WIDTH_PX: f64 = 1.0;
const GRID_LINE_DASH: LineStrokeStyle = LineStrokeStyle::Dashed {
    dash_px: 5.0,
    gap_px: 10.0,
};
const AXIS_LABEL_OPACITY: f64 = 0.8;
const BAR_TOP_OPACITY: f64 = 0.6;

impl<R: Renderer> BarChart<R> {
    /// Builds the full scene for the current configuration.
    ///
    /// One group per `ChartLayer`, in paint order. Disabled layers produce
    /// empty groups.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let frame = RenderFrame::new(self.frame.viewport)
            .with_gradient(self.background_gradient())
            .with_gradient(self.fill_shadow_gradient())
            .with_group(self.background_group())
            .with_group(self.grid_group())
            .with_group(self.horizontal_label_group())
            .with_group(self.vertical_label_group())
            .with_group(self.bar_group())
            .with_group(self.bar_top_group())
            .with_group(self.bar_text_group());

        let counts = frame.counts();
        debug!(
            rects = counts.rects,
            lines = counts.lines,
            texts = counts.texts,
            "bar chart frame built"
        );
        Ok(frame)
    }

    fn background_gradient(&self) -> LinearGradient {
        let style = &self.config.chart_config;
        LinearGradient::new(
            GradientId::background(),
            0.0,
            self.frame.height(),
            self.frame.width(),
            0.0,
        )
        .with_stop(
            0.0,
            style
                .background_gradient_from
                .with_opacity(style.background_gradient_from_opacity),
        )
        .with_stop(
            1.0,
            style
                .background_gradient_to
                .with_opacity(style.background_gradient_to_opacity),
        )
    }

    fn fill_shadow_gradient(&self) -> LinearGradient {
        let style = &self.config.chart_config;
        let color = style.fill_shadow_color();
        LinearGradient::new(
            GradientId::fill_shadow(),
            0.0,
            0.0,
            0.0,
            self.frame.height(),
        )
        .with_stop(0.0, color.with_opacity(style.fill_shadow_gradient_opacity))
        .with_stop(1.0, color.with_opacity(0.0))
    }

    fn background_group(&self) -> GroupNode {
        let mut group = GroupNode::new(ChartLayer::Background);
        group.push(SceneNode::Rect(
            RectPrimitive::new(
                0.0,
                0.0,
                self.frame.width(),
                self.frame.height(),
                Fill::Gradient(GradientId::background()),
            )
            .with_corner_radius(self.config.style.border_radius),
        ));
        group
    }

    fn grid_group(&self) -> GroupNode {
        let mut group = GroupNode::new(ChartLayer::Grid);
        if !self.config.with_inner_lines {
            return group;
        }
        let color = self.config.chart_config.color(GRID_LINE_OPACITY);
        for line in horizontal_grid_lines(&self.frame, self.config.segments) {
            group.push(SceneNode::Line(
                LinePrimitive::new(line.x1, line.y, line.x2, line.y, GRID_LINE_WIDTH_PX, color)
                    .with_stroke_style(GRID_LINE_DASH),
            ));
        }
        trace!(lines = group.children.len(), "grid layer");
        group
    }

    fn horizontal_label_group(&self) -> GroupNode {
        let mut group = GroupNode::new(ChartLayer::HorizontalLabels);
        // Without samples `y_max` alone would invent a value axis.
        if !self.config.with_horizontal_labels || self.series.is_empty() {
            return group;
        }

        let color = self.config.chart_config.label_color(AXIS_LABEL_OPACITY);
        let decimal_places = self.config.effective_decimal_places();
        let values = self.series.normalization_values();
        let slots = value_label_slots(
            &values,
            &self.frame,
            self.config.segments,
            self.series.from_zero(),
            self.config.y_labels_offset,
        );
        for slot in slots {
            let fixed = format_fixed(slot.value, decimal_places);
            let text = format!(
                "{}{}{}",
                self.config.y_axis_label,
                self.format_y_label(&fixed),
                self.config.y_axis_suffix
            );
            if text.is_empty() {
                continue;
            }
            group.push(SceneNode::Text(
                TextPrimitive::new(text, slot.x, slot.y, LABEL_FONT_SIZE_PX, color, TextAnchor::End)
                    .with_rotation(self.config.horizontal_label_rotation),
            ));
        }
        trace!(labels = group.children.len(), "horizontal label layer");
        group
    }

    fn vertical_label_group(&self) -> GroupNode {
        let mut group = GroupNode::new(ChartLayer::VerticalLabels);
        if !self.config.with_vertical_labels {
            return group;
        }

        let color = self.config.chart_config.label_color(AXIS_LABEL_OPACITY);
        let rotation = self.config.vertical_label_rotation;
        let anchor = if rotation == 0.0 {
            TextAnchor::Middle
        } else {
            TextAnchor::Start
        };
        let labels = &self.config.data.labels;
        let slots = category_label_slots(
            labels.len(),
            &self.frame,
            BASE_BAR_WIDTH_PX,
            self.config.x_labels_offset,
            &self.config.hide_points_at_index,
        );
        for slot in slots {
            let text = format!(
                "{}{}",
                self.format_x_label(&labels[slot.index]),
                self.config.x_axis_label
            );
            if text.is_empty() {
                continue;
            }
            group.push(SceneNode::Text(
                TextPrimitive::new(text, slot.x, slot.y, LABEL_FONT_SIZE_PX, color, anchor)
                    .with_rotation(rotation),
            ));
        }
        trace!(labels = group.children.len(), "vertical label layer");
        group
    }

    fn bar_group(&self) -> GroupNode {
        let mut group = GroupNode::new(ChartLayer::Bars);
        let radius = self.config.chart_config.bar_radius;
        for bar in self.bar_geometry() {
            group.push(SceneNode::Rect(
                RectPrimitive::new(
                    bar.x,
                    bar.y,
                    bar.width,
                    bar.height,
                    Fill::Gradient(GradientId::fill_shadow()),
                )
                .with_corner_radius(radius),
            ));
        }
        trace!(bars = group.children.len(), "bar layer");
        group
    }

    fn bar_top_group(&self) -> GroupNode {
        let mut group = GroupNode::new(ChartLayer::BarTops);
        if !self.config.show_bar_tops {
            return group;
        }
        let color = self.config.chart_config.color(BAR_TOP_OPACITY);
        for top in self.bar_top_geometry() {
            group.push(SceneNode::Rect(RectPrimitive::new(
                top.x,
                top.y,
                top.width,
                top.height,
                Fill::Solid(color),
            )));
        }
        group
    }

    fn bar_text_group(&self) -> GroupNode {
        let mut group = GroupNode::new(ChartLayer::BarText);
        if !self.config.show_bar_text {
            return group;
        }
        let color = self.config.chart_config.bar_text_color;
        for anchor in self.bar_label_geometry() {
            group.push(SceneNode::Text(TextPrimitive::new(
                format_plain_number(anchor.value),
                anchor.x,
                anchor.y,
                LABEL_FONT_SIZE_PX,
                color,
                TextAnchor::Start,
            )));
        }
        group
    }
}
