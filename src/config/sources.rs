//! Setting sources layered on top of the defaults.

pub(super) mod environment;
pub(super) mod global_file;
