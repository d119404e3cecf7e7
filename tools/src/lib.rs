//! Producer and consumer tooling for MTI placement files.
//!
//! The codec crates are pure functions over byte buffers. This crate adds
//! the file-facing pieces around them:
//!
//! - Export placements to a file, replacing it atomically
//! - Import a file back into producer-space positions
//! - Inspect a file's header, contents, and warnings
//! - Resolve `@TYPE(...)` tags in producer names to type values
//!
//! # Design Principles
//!
//! - **Never clobber on failure** - An export either fully replaces the file or leaves it alone.
//! - **Human-readable output** - Reports carry a `status()` line and a pretty form.

mod error;
mod export;
mod import;
mod inspect;
mod logging;
mod placement_spec;
mod type_tag;

pub use error::ToolError;
pub use export::{export_file, write_atomic, ExportReport};
pub use import::{import_file, ImportReport};
pub use inspect::{format_inspect_pretty, inspect_bytes, Bounds, InspectReport};
pub use logging::{log_filter, log_filter_from_env};
pub use placement_spec::{load_placements, parse_placements, PlacementSpec};
pub use type_tag::{resolve_type_id, TypeTag};
