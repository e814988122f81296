//! Validation checks, one module per entity family. Each check runs to
//! completion and accumulates findings; nothing is fail-fast.

pub mod form;
pub mod metadata;
pub mod progress;
pub mod question;
