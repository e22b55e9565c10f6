use crate::element::compose::{ComposedElement, compose_element, level_count};
use crate::element::model::Element;
use crate::foundation::error::ReelResult;
use crate::scene::graph::{NodeId, SceneGraph};

/// Nesting levels allocated for one element in a [`SceneGraph`].
///
/// Created once by [`RenderBinding::bind`]; per-frame work is only [`RenderBinding::apply`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderBinding {
    levels: Vec<NodeId>,
}

impl RenderBinding {
    /// Allocate one node per nesting level under the scene root, attach the visual to the
    /// innermost one and apply the element's `t = 0` state.
    #[tracing::instrument(skip_all, fields(element = element.name()))]
    pub fn bind<S: SceneGraph>(element: &Element, scene: &mut S) -> ReelResult<Self> {
        let count = level_count(element);
        let mut levels = Vec::with_capacity(count);
        let mut parent = scene.root();
        for _ in 0..count {
            parent = scene.create_child_under(parent)?;
            levels.push(parent);
        }
        scene.attach_visual(parent, element.visual());
        tracing::debug!(levels = count, "bound element");

        let binding = Self { levels };
        binding.apply(element, scene, 0.0);
        Ok(binding)
    }

    /// Nodes, outermost first.
    pub fn levels(&self) -> &[NodeId] {
        &self.levels
    }

    /// Node carrying the visual.
    pub fn leaf(&self) -> NodeId {
        self.levels[self.levels.len() - 1]
    }

    /// Sample `element` at `t` and write the result into the bound nodes.
    pub fn apply<S: SceneGraph>(&self, element: &Element, scene: &mut S, t: f64) -> ComposedElement {
        let composed = compose_element(element, t);
        for (node, level) in self.levels.iter().zip(&composed.levels) {
            scene.set_position(*node, level.position);
            scene.set_scale(*node, level.scale);
            scene.set_rotation_degrees(*node, level.rotation_deg);
        }
        scene.set_color(self.leaf(), composed.color);
        composed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/element/binding.rs"]
mod tests;
