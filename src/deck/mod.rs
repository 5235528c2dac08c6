//! Deck (stack) containers.
//!
//! A `Deck` keeps its cards in strict bottom-to-top order and lays them out
//! with a small vertical stagger per index plus bounded jitter.
//!
//! ## Key Types
//!
//! - `Deck`: Ordered card stack with pop/insert and scale
//! - `Placement`: Top or bottom insertion (from `core::config`)

mod stack;

pub use stack::Deck;

// Re-export placement from core for convenience
pub use crate::core::config::Placement;
