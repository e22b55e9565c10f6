//! Pure sampling: progressions, paths and timed tracks.
//!
//! Nothing in here touches a scene; every query is a deterministic function of time.

pub(crate) mod function;
pub(crate) mod path;
pub(crate) mod progression;
pub(crate) mod track;
