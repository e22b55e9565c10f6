//! Elements and how their spatial tracks compose into scene transforms.

pub(crate) mod binding;
pub(crate) mod compose;
pub(crate) mod model;
pub(crate) mod order;
