//! Join, aggregation and mutation services.
//!
//! The read-side services here are pure functions of one snapshot: they
//! never touch the network and recompute from scratch on every render.
//! [`records`] is the single write path, which keeps the snapshot in step
//! with the store after each accepted mutation.

pub mod dashboard;
pub mod listing;
pub mod lookup;
pub mod records;
pub mod search;
