//! Scene configuration types.
//!
//! Hosts configure the scene at construction by providing:
//! - `CurveConfig`: Bounds on the randomized flight curve
//! - `StackLayout`: Stagger and jitter of cards within a deck
//! - `SceneConfig`: Combines all configuration with timing and placement
//!
//! Every struct has defaults matching the reference scene, so a config
//! file only needs the fields it changes.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Where a transferred card is reinserted into its destination deck.
///
/// Both policies are supported; the scene uses exactly one, chosen by
/// `SceneConfig::placement`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Append above the current top card, no restagger.
    #[default]
    Top,
    /// Insert under the current bottom card, restaggering every card above.
    Bottom,
}

/// Bounds for the randomized control point and end rotation of a flight.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveConfig {
    /// Smallest perpendicular offset of the control point.
    pub strength_min: f32,
    /// Largest perpendicular offset of the control point (exclusive).
    pub strength_max: f32,
    /// Half-width of the independent jitter on each control point axis.
    pub jitter: f32,
    /// Upward shift of the control point so flights always arc.
    pub upward_bias: f32,
    /// Largest absolute end rotation, in degrees.
    pub max_end_rotation_deg: f32,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            strength_min: 100.0,
            strength_max: 250.0,
            jitter: 25.0,
            upward_bias: 80.0,
            max_end_rotation_deg: 3.0,
        }
    }
}

/// Stagger and jitter of cards within a deck, as ratios of card size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackLayout {
    /// Fixed vertical step per index, as a fraction of card height.
    /// Also the base horizontal offset, as a fraction of card width.
    pub step_ratio: f32,
    /// Random extra offset on each axis, as a fraction of card height.
    pub jitter_ratio: f32,
    /// Largest absolute resting rotation, in degrees.
    pub max_rotation_deg: f32,
}

impl Default for StackLayout {
    fn default() -> Self {
        Self {
            step_ratio: 0.01,
            jitter_ratio: 0.05,
            max_rotation_deg: 3.0,
        }
    }
}

/// Complete scene configuration.
///
/// ## Example
///
/// ```
/// use card_flight::core::{Placement, SceneConfig};
///
/// let config = SceneConfig::default()
///     .with_cards_per_deck(5)
///     .with_placement(Placement::Bottom)
///     .with_seed(7);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.cards_per_deck, 5);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Cards created per deck when the scene loads.
    pub cards_per_deck: usize,

    /// Seconds between transfer cycles.
    pub move_interval: f32,

    /// Seconds a single flight takes.
    pub flight_duration: f32,

    /// Where landing cards are inserted.
    pub placement: Placement,

    /// Seed for all layout and curve randomness.
    /// Same seed produces an identical animation.
    pub seed: u64,

    /// Viewport size at which cards are drawn at scale 1.
    /// Smaller viewports scale cards down proportionally.
    pub reference_dimension: f32,

    /// Lower bound on the card scale.
    pub min_scale: f32,

    pub curve: CurveConfig,

    pub layout: StackLayout,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            cards_per_deck: 144,
            move_interval: 1.0,
            flight_duration: 2.0,
            placement: Placement::Top,
            seed: 42,
            reference_dimension: 768.0,
            min_scale: 0.4,
            curve: CurveConfig::default(),
            layout: StackLayout::default(),
        }
    }
}

impl SceneConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the number of cards per deck.
    #[must_use]
    pub fn with_cards_per_deck(mut self, count: usize) -> Self {
        self.cards_per_deck = count;
        self
    }

    /// Set the interval between transfer cycles.
    #[must_use]
    pub fn with_move_interval(mut self, seconds: f32) -> Self {
        self.move_interval = seconds;
        self
    }

    /// Set the duration of each flight.
    #[must_use]
    pub fn with_flight_duration(mut self, seconds: f32) -> Self {
        self.flight_duration = seconds;
        self
    }

    /// Set the insertion policy for landing cards.
    #[must_use]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Set the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cards_per_deck == 0 {
            return Err(ConfigError::EmptyDecks);
        }

        let positive = [
            ("move_interval", self.move_interval),
            ("flight_duration", self.flight_duration),
            ("reference_dimension", self.reference_dimension),
            ("min_scale", self.min_scale),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        if self.curve.strength_min > self.curve.strength_max {
            return Err(ConfigError::InvertedRange {
                field: "curve.strength",
                low: self.curve.strength_min,
                high: self.curve.strength_max,
            });
        }

        Ok(())
    }
}
