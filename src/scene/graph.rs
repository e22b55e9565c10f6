use crate::element::model::Visual;
use crate::foundation::core::{Rgba, Vec2};
use crate::foundation::error::ReelResult;

/// Handle to a node in a [`SceneGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Index of the node within its graph.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Render-facing collaborator the timeline writes sampled state into.
///
/// Nodes form a parent/child hierarchy; a node's transform is relative to its parent. Only
/// [`SceneGraph::create_child_under`] and [`SceneGraph::attach_visual`] change the structure, and
/// they are called once per element when it is bound. Setters on unknown nodes are ignored.
pub trait SceneGraph {
    /// The node every element chain hangs from.
    fn root(&self) -> NodeId;

    /// Create a new node with an identity transform under `parent`.
    fn create_child_under(&mut self, parent: NodeId) -> ReelResult<NodeId>;

    /// Set the translation of `node` relative to its parent.
    fn set_position(&mut self, node: NodeId, position: Vec2);

    /// Set the non-uniform scale of `node`.
    fn set_scale(&mut self, node: NodeId, scale: Vec2);

    /// Set the counter-clockwise rotation of `node` in degrees.
    fn set_rotation_degrees(&mut self, node: NodeId, degrees: f64);

    /// Set the color of the visual on `node`.
    fn set_color(&mut self, node: NodeId, color: Rgba);

    /// Attach a visual to `node`.
    fn attach_visual(&mut self, node: NodeId, visual: Visual);

    /// Drop every node except the root.
    fn reset(&mut self);
}
