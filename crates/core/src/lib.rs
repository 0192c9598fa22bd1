//! Domain logic for the venue / artist / show booking directory.
//!
//! This crate has zero internal deps so the repository layer, the HTTP
//! layer and any future tooling can share it.

pub mod area;
pub mod error;
pub mod genres;
pub mod search;
pub mod show;
pub mod show_time;
pub mod types;
