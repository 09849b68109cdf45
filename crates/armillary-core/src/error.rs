//! Error types for layout construction.

use thiserror::Error;

/// Errors raised while building drawable nodes.
///
/// Content is expected to be validated upstream; these variants mark contract
/// violations that cannot be recovered locally and are returned to the caller.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    /// A member-area entry that must be a member (because the visibility icon
    /// lane is active) is plain text instead.
    #[error("entry {index} is not a member but the visibility icon lane requires one")]
    NotAMember { index: usize },
}
