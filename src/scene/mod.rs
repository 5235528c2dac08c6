//! Transfer orchestration.
//!
//! This module drives the whole animation:
//! - `TransferScene`: cycle timer, routes, decks and the overlay layer
//! - `Overlay`: owner of every card in flight
//! - `Route` / `FrameReport`: which decks trade cards and what happened
//! - `RenderItem`: per-card snapshot for the host's render pass
//!
//! ## Host Integration
//!
//! The host drives any [`Scene`] through three calls:
//!
//! ```
//! use card_flight::core::{SceneConfig, TextureId};
//! use card_flight::scene::{Scene, TransferScene};
//!
//! let mut scene = TransferScene::new(SceneConfig::default().with_cards_per_deck(3)).unwrap();
//! scene.load((0..3).map(|i| TextureId::new(i, 120.0, 180.0)).collect());
//!
//! let host: &mut dyn Scene = &mut scene;
//! host.resize(800.0, 600.0);
//! for _ in 0..60 {
//!     host.update(1.0 / 60.0);
//! }
//! host.teardown();
//! ```

mod overlay;
mod render;
mod route;
mod transfer;

pub use overlay::{InFlight, Landing, Overlay};
pub use render::{sort_for_paint, Layer, RenderItem};
pub use route::{FrameReport, Route, Transfer};
pub use transfer::{card_scale, TransferScene};

/// A scene driven by the host's render loop.
pub trait Scene {
    /// Advance by `dt` seconds since the previous frame.
    fn update(&mut self, dt: f32);

    /// React to a new viewport size.
    fn resize(&mut self, width: f32, height: f32);

    /// Release everything without running pending completion side effects.
    fn teardown(&mut self);
}
