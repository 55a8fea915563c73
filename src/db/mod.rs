//! Persistence layer: the `EntityStore` seam and its in-memory backend.

pub mod memory;
pub mod traits;

pub use memory::MemoryStore;
pub use traits::EntityStore;
