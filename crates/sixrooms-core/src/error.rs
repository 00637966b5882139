//! Engine errors.
//!
//! Only internal consistency violations are errors. Invalid references and
//! degenerate edit requests are silent no-ops in [`crate::mutate`].

/// Errors from building a six-room unit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    /// An explicit layout index outside the catalog.
    #[error("layout {index} does not exist (catalog has {available} layouts)")]
    UnknownLayout { index: usize, available: usize },

    /// A catalog layout produced the same unordered room pair twice.
    #[error("layout {layout} is corrupt: rooms {a} and {b} are joined twice")]
    DuplicateEdge { layout: usize, a: String, b: String },
}
