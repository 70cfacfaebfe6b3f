use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    ChartLayer, Fill, GradientId, LinePrimitive, LinearGradient, RectPrimitive, TextPrimitive,
};

/// One element of the declarative scene tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SceneNode {
    Rect(RectPrimitive),
    Line(LinePrimitive),
    Text(TextPrimitive),
    Group(GroupNode),
}

/// Children painted together under one chart layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupNode {
    pub layer: ChartLayer,
    pub children: Vec<SceneNode>,
}

impl GroupNode {
    #[must_use]
    pub fn new(layer: ChartLayer) -> Self {
        Self {
            layer,
            children: Vec::new(),
        }
    }

    pub fn push(&mut self, node: SceneNode) {
        self.children.push(node);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.children.iter().filter_map(|node| match node {
            SceneNode::Rect(rect) => Some(rect),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.children.iter().filter_map(|node| match node {
            SceneNode::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.children.iter().filter_map(|node| match node {
            SceneNode::Text(text) => Some(text),
            _ => None,
        })
    }
}

/// Primitive totals across a whole tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PrimitiveCounts {
    pub rects: usize,
    pub lines: usize,
    pub texts: usize,
    pub groups: usize,
}

/// Backend-agnostic scene for one chart draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub defs: IndexMap<GradientId, LinearGradient>,
    pub nodes: Vec<SceneNode>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            defs: IndexMap::new(),
            nodes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_gradient(mut self, gradient: LinearGradient) -> Self {
        self.defs.insert(gradient.id.clone(), gradient);
        self
    }

    #[must_use]
    pub fn with_node(mut self, node: SceneNode) -> Self {
        self.nodes.push(node);
        self
    }

    #[must_use]
    pub fn with_group(self, group: GroupNode) -> Self {
        self.with_node(SceneNode::Group(group))
    }

    /// First top-level group painted for `layer`.
    #[must_use]
    pub fn group(&self, layer: ChartLayer) -> Option<&GroupNode> {
        self.nodes.iter().find_map(|node| match node {
            SceneNode::Group(group) if group.layer == layer => Some(group),
            _ => None,
        })
    }

    #[must_use]
    pub fn counts(&self) -> PrimitiveCounts {
        let mut counts = PrimitiveCounts::default();
        count_nodes(&self.nodes, &mut counts);
        counts
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        let counts = self.counts();
        counts.rects == 0 && counts.lines == 0 && counts.texts == 0
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.viewport.validate()?;
        for (id, gradient) in &self.defs {
            if *id != gradient.id {
                return Err(ChartError::InvalidData(format!(
                    "gradient registered as `{id}` carries id `{}`",
                    gradient.id
                )));
            }
            gradient.validate()?;
        }
        self.validate_nodes(&self.nodes)
    }

    fn validate_nodes(&self, nodes: &[SceneNode]) -> ChartResult<()> {
        for node in nodes {
            match node {
                SceneNode::Rect(rect) => {
                    rect.validate()?;
                    if let Fill::Gradient(id) = &rect.fill {
                        if !self.defs.contains_key(id) {
                            return Err(ChartError::InvalidData(format!(
                                "rect references undefined gradient `{id}`"
                            )));
                        }
                    }
                }
                SceneNode::Line(line) => line.validate()?,
                SceneNode::Text(text) => text.validate()?,
                SceneNode::Group(group) => self.validate_nodes(&group.children)?,
            }
        }
        Ok(())
    }
}

fn count_nodes(nodes: &[SceneNode], counts: &mut PrimitiveCounts) {
    for node in nodes {
        match node {
            SceneNode::Rect(_) => counts.rects += 1,
            SceneNode::Line(_) => counts.lines += 1,
            SceneNode::Text(_) => counts.texts += 1,
            SceneNode::Group(group) => {
                counts.groups += 1;
                count_nodes(&group.children, counts);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{GroupNode, RenderFrame, SceneNode};
    use crate::core::Viewport;
    use crate::render::{ChartLayer, Color, Fill, GradientId, LinearGradient, RectPrimitive};

    #[test]
    fn dangling_gradient_reference_fails_validation() {
        let frame = RenderFrame::new(Viewport::new(100.0, 100.0)).with_node(SceneNode::Rect(
            RectPrimitive::new(0.0, 0.0, 10.0, 10.0, Fill::Gradient(GradientId::fill_shadow())),
        ));
        let err = frame.validate().expect_err("missing def");
        assert!(format!("{err}").contains("undefined gradient"));
    }

    #[test]
    fn counts_descend_into_groups() {
        let mut group = GroupNode::new(ChartLayer::Bars);
        group.push(SceneNode::Rect(RectPrimitive::new(
            0.0,
            0.0,
            1.0,
            1.0,
            Fill::Solid(Color::BLACK),
        )));
        let frame = RenderFrame::new(Viewport::new(100.0, 100.0))
            .with_gradient(
                LinearGradient::new(GradientId::background(), 0.0, 100.0, 100.0, 0.0)
                    .with_stop(0.0, Color::WHITE),
            )
            .with_group(group)
            .with_group(GroupNode::new(ChartLayer::BarText));

        let counts = frame.counts();
        assert_eq!(counts.rects, 1);
        assert_eq!(counts.groups, 2);
        assert!(frame.group(ChartLayer::BarText).expect("group").is_empty());
        frame.validate().expect("valid frame");
    }
}
