//! # card-flight
//!
//! Animation core for a deck-of-cards scene: several decks continuously
//! trade their top card along curved flight paths.
//!
//! ## Design Principles
//!
//! 1. **Host-Driven**: No clock, no rendering. The host calls
//!    `advance(dt)` once per frame and draws the `render_list()`.
//!
//! 2. **Single Ownership**: A card lives in exactly one deck or in the
//!    overlay layer. Hand-offs move the `Card` value.
//!
//! 3. **Frozen Randomness**: Each flight draws its curve parameters once,
//!    from a seeded ChaCha stream, so motion is smooth and reproducible.
//!
//! ## Modules
//!
//! - `core`: Identifiers, geometry, RNG, configuration, errors
//! - `motion`: Bell easing and randomized quadratic flight paths
//! - `cards`: Card entity and flight lifecycle
//! - `deck`: Ordered card stacks with staggered layout
//! - `scene`: Transfer scheduling, overlay layer, render snapshots

pub mod core;
pub mod motion;
pub mod cards;
pub mod deck;
pub mod scene;

// Re-export commonly used types
pub use crate::core::{
    CardId, DeckId, TextureId,
    DepthRank, Transform, Vec2,
    FlightRng,
    CurveConfig, Placement, SceneConfig, StackLayout,
    ConfigError, FlightError,
};

pub use crate::motion::{bell_ease, CurveParams, FlightPath, Pose};

pub use crate::cards::{Card, Flight, FlightRequest, FlightStatus, LandingHook, MIN_FLIGHT_DURATION};

pub use crate::deck::Deck;

pub use crate::scene::{
    FrameReport, InFlight, Landing, Layer, Overlay, RenderItem, Route, Scene, Transfer, TransferScene,
};
