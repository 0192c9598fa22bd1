//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod artist_repo;
pub mod show_repo;
pub mod venue_repo;

pub use artist_repo::ArtistRepo;
pub use show_repo::ShowRepo;
pub use venue_repo::VenueRepo;

/// Number of rows returned by the "recently listed" queries.
pub const RECENT_LIMIT: i64 = 10;
