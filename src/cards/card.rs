//! Card entity with its flight lifecycle.
//!
//! A card is either **idle** (no motion record) or **in flight** (exactly one
//! `Flight` record). `start_flight` moves idle → in flight, `advance` moves
//! in flight → idle once raw progress reaches 1.

use crate::core::{CardId, DepthRank, FlightError, TextureId, Vec2};
use crate::motion::{CurveParams, FlightPath};

/// Shortest accepted flight. Shorter or non-finite durations are clamped up
/// to this so progress never divides by zero.
pub const MIN_FLIGHT_DURATION: f32 = 1.0e-3;

/// One-shot hook run when a flight lands.
///
/// It receives the card already back in the idle state, so it may start a
/// new flight right away.
pub type LandingHook = Box<dyn FnOnce(&mut Card)>;

/// Everything needed to start a flight.
///
/// ```
/// use card_flight::cards::FlightRequest;
/// use card_flight::core::{DepthRank, Vec2};
/// use card_flight::motion::CurveParams;
///
/// let request = FlightRequest::new(Vec2::new(300.0, 40.0), 2.0)
///     .with_ranks(DepthRank(5), DepthRank(12))
///     .with_curve(CurveParams::straight());
/// assert_eq!(request.duration, 2.0);
/// ```
pub struct FlightRequest {
    pub end: Vec2,
    pub duration: f32,
    pub start_rank: DepthRank,
    pub end_rank: DepthRank,
    pub curve: CurveParams,
    pub on_complete: Option<LandingHook>,
}

impl FlightRequest {
    /// A straight flight to `end` keeping rank 0. Use the `with_*` methods
    /// to set ranks, curve and hook.
    #[must_use]
    pub fn new(end: Vec2, duration: f32) -> Self {
        Self {
            end,
            duration,
            start_rank: DepthRank::default(),
            end_rank: DepthRank::default(),
            curve: CurveParams::straight(),
            on_complete: None,
        }
    }

    #[must_use]
    pub fn with_ranks(mut self, start: DepthRank, end: DepthRank) -> Self {
        self.start_rank = start;
        self.end_rank = end;
        self
    }

    #[must_use]
    pub fn with_curve(mut self, curve: CurveParams) -> Self {
        self.curve = curve;
        self
    }

    #[must_use]
    pub fn on_complete(mut self, hook: impl FnOnce(&mut Card) + 'static) -> Self {
        self.on_complete = Some(Box::new(hook));
        self
    }
}

impl std::fmt::Debug for FlightRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlightRequest")
            .field("end", &self.end)
            .field("duration", &self.duration)
            .field("start_rank", &self.start_rank)
            .field("end_rank", &self.end_rank)
            .field("curve", &self.curve)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

/// Motion record for a single flight. Lives from `start_flight` until the
/// card lands or the flight is cancelled.
pub struct Flight {
    path: FlightPath,
    elapsed: f32,
    duration: f32,
    on_complete: Option<LandingHook>,
}

impl Flight {
    /// Fixed geometry of this flight.
    #[must_use]
    pub fn path(&self) -> &FlightPath {
        &self.path
    }

    /// Seconds flown so far.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Total seconds the flight takes.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Raw progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        (self.elapsed / self.duration).min(1.0)
    }
}

impl std::fmt::Debug for Flight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Flight")
            .field("path", &self.path)
            .field("elapsed", &self.elapsed)
            .field("duration", &self.duration)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

/// Result of advancing a card by one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FlightStatus {
    /// No flight; nothing changed.
    Idle,
    /// Still flying, with raw progress in `[0, 1)`.
    Moving { progress: f32 },
    /// The flight finished during this advance. The card is idle again.
    Landed,
}

/// A card: identity, texture handle and its current visual state.
///
/// Cards are created once per pool slot and only ever moved between
/// containers, so the id and texture stay stable across transfers.
#[derive(Debug)]
pub struct Card {
    id: CardId,
    texture: TextureId,
    position: Vec2,
    rotation: f32,
    scale: f32,
    rank: DepthRank,
    flight: Option<Flight>,
}

impl Card {
    /// Create an idle card at the origin with scale 1.
    #[must_use]
    pub fn new(id: CardId, texture: TextureId) -> Self {
        Self {
            id,
            texture,
            position: Vec2::ZERO,
            rotation: 0.0,
            scale: 1.0,
            rank: DepthRank::default(),
            flight: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn texture(&self) -> TextureId {
        self.texture
    }

    /// Position in the coordinate space of the current owner.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Rotation in radians.
    #[must_use]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: f32) {
        self.rotation = rotation;
    }

    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    #[must_use]
    pub fn depth_rank(&self) -> DepthRank {
        self.rank
    }

    pub fn set_depth_rank(&mut self, rank: DepthRank) {
        self.rank = rank;
    }

    /// Drawn width: texture width times scale.
    #[must_use]
    pub fn card_width(&self) -> f32 {
        self.texture.width * self.scale
    }

    /// Drawn height: texture height times scale.
    #[must_use]
    pub fn card_height(&self) -> f32 {
        self.texture.height * self.scale
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.flight.is_some()
    }

    /// The active motion record, if any.
    #[must_use]
    pub fn flight(&self) -> Option<&Flight> {
        self.flight.as_ref()
    }

    /// Start a flight from the current pose.
    ///
    /// The current position and rotation become the flight's start values
    /// and the card takes `start_rank` immediately. Fails without touching
    /// the running flight if one exists.
    pub fn start_flight(&mut self, request: FlightRequest) -> Result<(), FlightError> {
        if self.flight.is_some() {
            return Err(FlightError::AlreadyInFlight(self.id));
        }

        let duration = if request.duration.is_finite() && request.duration >= MIN_FLIGHT_DURATION {
            request.duration
        } else {
            log::warn!(
                "{}: flight duration {} clamped to {}",
                self.id,
                request.duration,
                MIN_FLIGHT_DURATION
            );
            MIN_FLIGHT_DURATION
        };

        let path = FlightPath::new(
            self.position,
            self.rotation,
            request.end,
            (request.start_rank, request.end_rank),
            &request.curve,
        );

        self.rank = request.start_rank;
        self.flight = Some(Flight {
            path,
            elapsed: 0.0,
            duration,
            on_complete: request.on_complete,
        });

        Ok(())
    }

    /// Advance the flight by `dt` seconds.
    ///
    /// No-op when idle. Negative `dt` counts as zero. When raw progress
    /// reaches 1 the record is cleared before the landing hook runs.
    pub fn advance(&mut self, dt: f32) -> FlightStatus {
        let Some(flight) = self.flight.as_mut() else {
            return FlightStatus::Idle;
        };

        flight.elapsed += dt.max(0.0);
        let t = flight.progress();
        let pose = flight.path.sample(t);

        self.position = pose.position;
        self.rotation = pose.rotation;
        self.rank = pose.rank;

        if t < 1.0 {
            return FlightStatus::Moving { progress: t };
        }

        if let Some(hook) = self.flight.take().and_then(|f| f.on_complete) {
            hook(self);
        }
        FlightStatus::Landed
    }

    /// Drop the active flight without running its landing hook.
    ///
    /// Returns whether a flight was cancelled. The card keeps its current
    /// mid-flight pose.
    pub fn cancel_flight(&mut self) -> bool {
        self.flight.take().is_some()
    }
}
