use crate::element::model::Visual;
use crate::foundation::core::{Affine, Rgba, UNIT_SCALE, Vec2};
use crate::foundation::error::{ReelError, ReelResult};
use crate::scene::graph::{NodeId, SceneGraph};

/// One node of a [`SceneTree`].
#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode {
    /// Parent node; `None` only for the root.
    pub parent: Option<NodeId>,
    /// Translation relative to the parent.
    pub position: Vec2,
    /// Non-uniform scale.
    pub scale: Vec2,
    /// Counter-clockwise rotation in degrees.
    pub rotation_deg: f64,
    /// Color of the attached visual.
    pub color: Rgba,
    /// Attached visual, if any.
    pub visual: Option<Visual>,
}

impl SceneNode {
    fn new(parent: Option<NodeId>) -> Self {
        Self {
            parent,
            position: Vec2::ZERO,
            scale: UNIT_SCALE,
            rotation_deg: 0.0,
            color: Rgba::WHITE,
            visual: None,
        }
    }

    /// `translate(position) * rotate(rotation) * scale`.
    pub fn local_affine(&self) -> Affine {
        Affine::translate(self.position)
            * Affine::rotate(self.rotation_deg.to_radians())
            * Affine::scale_non_uniform(self.scale.x, self.scale.y)
    }
}

/// A visual resolved to world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldVisual {
    /// Node carrying the visual.
    pub node: NodeId,
    /// Local-to-world transform of that node.
    pub transform: Affine,
    /// Shape and size.
    pub visual: Visual,
    /// Fill color.
    pub color: Rgba,
}

/// In-memory [`SceneGraph`]; nodes are stored in creation order and parents always precede
/// their children.
#[derive(Clone, Debug)]
pub struct SceneTree {
    nodes: Vec<SceneNode>,
}

impl Default for SceneTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneTree {
    /// Tree holding only the root.
    pub fn new() -> Self {
        Self {
            nodes: vec![SceneNode::new(None)],
        }
    }

    /// Number of nodes including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` when only the root exists.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Look up a node.
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.0)
    }

    /// Product of local transforms from the root down to `id`.
    pub fn world_affine(&self, id: NodeId) -> Option<Affine> {
        let mut node = self.node(id)?;
        let mut world = node.local_affine();
        while let Some(parent) = node.parent {
            node = self.node(parent)?;
            world = node.local_affine() * world;
        }
        Some(world)
    }

    /// Every attached visual in creation order, resolved to world space.
    pub fn world_visuals(&self) -> Vec<WorldVisual> {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(i, n)| {
                let visual = n.visual?;
                let node = NodeId(i);
                Some(WorldVisual {
                    node,
                    transform: self.world_affine(node)?,
                    visual,
                    color: n.color,
                })
            })
            .collect()
    }
}

impl SceneGraph for SceneTree {
    fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn create_child_under(&mut self, parent: NodeId) -> ReelResult<NodeId> {
        if parent.0 >= self.nodes.len() {
            return Err(ReelError::validation(format!(
                "cannot create child under unknown node {}",
                parent.0
            )));
        }
        self.nodes.push(SceneNode::new(Some(parent)));
        Ok(NodeId(self.nodes.len() - 1))
    }

    fn set_position(&mut self, node: NodeId, position: Vec2) {
        if let Some(n) = self.nodes.get_mut(node.0) {
            n.position = position;
        }
    }

    fn set_scale(&mut self, node: NodeId, scale: Vec2) {
        if let Some(n) = self.nodes.get_mut(node.0) {
            n.scale = scale;
        }
    }

    fn set_rotation_degrees(&mut self, node: NodeId, degrees: f64) {
        if let Some(n) = self.nodes.get_mut(node.0) {
            n.rotation_deg = degrees;
        }
    }

    fn set_color(&mut self, node: NodeId, color: Rgba) {
        if let Some(n) = self.nodes.get_mut(node.0) {
            n.color = color;
        }
    }

    fn attach_visual(&mut self, node: NodeId, visual: Visual) {
        if let Some(n) = self.nodes.get_mut(node.0) {
            n.visual = Some(visual);
        }
    }

    fn reset(&mut self) {
        self.nodes.truncate(1);
        self.nodes[0] = SceneNode::new(None);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/tree.rs"]
mod tests;
