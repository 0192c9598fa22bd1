//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts (edits reuse it: they
//!   overwrite every editable field)
//! - Projection rows used by listings, search and detail pages

pub mod artist;
pub mod show;
pub mod venue;
