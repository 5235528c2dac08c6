//! Core types: identifiers, geometry, RNG, configuration, errors.
//!
//! These are the building blocks shared by the motion engine, cards, decks
//! and the transfer scene.

pub mod entity;
pub mod geometry;
pub mod rng;
pub mod config;
pub mod error;

pub use entity::{CardId, DeckId, TextureId};
pub use geometry::{DepthRank, Transform, Vec2};
pub use rng::FlightRng;
pub use config::{CurveConfig, Placement, SceneConfig, StackLayout};
pub use error::{ConfigError, FlightError};
