//! Transfer routes and per-frame reports.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{CardId, DeckId};

/// A directed (source, destination) deck pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route {
    pub source: DeckId,
    pub destination: DeckId,
}

impl Route {
    #[must_use]
    pub const fn new(source: DeckId, destination: DeckId) -> Self {
        Self { source, destination }
    }

    /// The fixed rotation over `deck_count` decks: 0 → 1, 1 → 2, ..., n-1 → 0.
    ///
    /// Empty for fewer than two decks. Decks beyond `DeckId::MAX_COUNT` get
    /// no routes.
    ///
    /// ```
    /// use card_flight::core::DeckId;
    /// use card_flight::scene::Route;
    ///
    /// let routes = Route::rotation(3);
    /// assert_eq!(routes.len(), 3);
    /// assert_eq!(routes[2], Route::new(DeckId::new(2), DeckId::new(0)));
    /// ```
    #[must_use]
    pub fn rotation(deck_count: usize) -> SmallVec<[Route; 4]> {
        let count = deck_count.min(DeckId::MAX_COUNT);
        if count < 2 {
            return SmallVec::new();
        }
        if count < deck_count {
            log::warn!("{deck_count} decks exceed the id range, routing the first {count}");
        }
        (0..=u16::MAX)
            .take(count)
            .map(|i| {
                let next = if usize::from(i) + 1 == count { 0 } else { i + 1 };
                Route::new(DeckId::new(i), DeckId::new(next))
            })
            .collect()
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}

/// A card moving along a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub card: CardId,
    pub route: Route,
}

/// What happened during one `advance`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Flights started this frame, in route order.
    pub launched: SmallVec<[Transfer; 4]>,
    /// Flights that landed and were handed to their destination deck.
    pub landed: SmallVec<[Transfer; 4]>,
    /// Routes skipped this cycle because the source deck was empty.
    pub skipped: SmallVec<[Route; 4]>,
    /// Whether the cycle timer fired this frame.
    pub cycle_fired: bool,
}

impl FrameReport {
    /// True when nothing launched, landed or was skipped.
    #[must_use]
    pub fn is_quiet(&self) -> bool {
        !self.cycle_fired && self.launched.is_empty() && self.landed.is_empty()
    }
}
