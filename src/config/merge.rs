//! Layer ordering for tool settings.

pub(super) mod merge_policy;
