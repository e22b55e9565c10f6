//! Scene collaborator: the node hierarchy sampled element state is written into.

pub(crate) mod graph;
pub(crate) mod tree;
