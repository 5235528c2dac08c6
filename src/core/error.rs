//! Error types.

use thiserror::Error;

use super::entity::CardId;

/// Errors from starting a card flight.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FlightError {
    /// The card already has a motion record. Only one flight per card may
    /// exist at a time.
    #[error("{0} is already in flight")]
    AlreadyInFlight(CardId),
}

/// Errors from validating or parsing a `SceneConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be positive and finite, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} range is inverted: {low} > {high}")]
    InvertedRange {
        field: &'static str,
        low: f32,
        high: f32,
    },

    #[error("cards_per_deck must be at least 1")]
    EmptyDecks,

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}
