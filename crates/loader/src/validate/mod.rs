//! Policy validators for configuration directories and documents.
//!
//! Responsibilities:
//! - `FileSetValidator`: reject YAML files outside the three-file whitelist.
//! - `ContentValidator`: enforce the `services` shape, the `_defaults` block,
//!   and the ban on `exclude`.
//!
//! Does NOT handle:
//! - Merging documents (see `loader.rs` and `registry.rs`).
//!
//! Invariants:
//! - Validators are read-only; they never mutate documents or the filesystem.
//! - The first violation short-circuits; violations are never aggregated.

mod content;
mod file_set;

pub use content::ContentValidator;
pub use file_set::FileSetValidator;
