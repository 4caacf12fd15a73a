//! Storage abstractions for the service layer
//!
//! Contains the reusable in-memory map store shared by concrete stores,
//! so the backend can later be swapped for a persistent one without
//! touching services or routes.

pub mod memory_map_store;
