//! Infrastructure layer for external integrations.
//!
//! - [`persistence`] - Link repository implementations (PostgreSQL and in-memory)

pub mod persistence;
