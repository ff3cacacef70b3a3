//! chatview-store - SQLite-backed blob store for cached chat transcripts
//!
//! The viewer persists one serialized message sequence under a fixed key;
//! this crate provides that key-value surface plus typed load/save on top.

pub mod connection;
pub mod messages;

pub use connection::*;
pub use messages::*;
