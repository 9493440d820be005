//! Repository layer for the Order API.
//!
//! The only store in this service is an in-memory, append-only order list.
//! There is no persistence; order lifetime equals process lifetime.

pub mod orders;

pub use orders::OrderRepository;
