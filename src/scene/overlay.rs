//! The shared overlay layer: owner of every card in flight.
//!
//! Cards enter by value from a deck (`launch`) and leave by value to their
//! destination (`advance` returns them as `Landing`s). Between those two
//! moves no deck holds the card.

use smallvec::SmallVec;

use crate::cards::{Card, FlightRequest, FlightStatus};
use crate::core::{CardId, FlightError, Placement};

use super::route::Route;

/// A card in flight together with where it is going.
#[derive(Debug)]
pub struct InFlight {
    card: Card,
    route: Route,
    placement: Placement,
}

impl InFlight {
    #[must_use]
    pub fn card(&self) -> &Card {
        &self.card
    }

    #[must_use]
    pub fn route(&self) -> Route {
        self.route
    }

    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement
    }
}

/// A card that finished its flight this frame, ready for reinsertion.
#[derive(Debug)]
pub struct Landing {
    pub card: Card,
    pub route: Route,
    pub placement: Placement,
}

/// Cards in flight, in launch order. Coordinates are shared-space.
#[derive(Debug, Default)]
pub struct Overlay {
    flights: Vec<InFlight>,
}

impl Overlay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `card` and start its flight.
    ///
    /// On failure the card is handed back untouched along with the error, so
    /// the caller can return it to where it came from.
    pub fn launch(
        &mut self,
        mut card: Card,
        route: Route,
        placement: Placement,
        request: FlightRequest,
    ) -> Result<(), (Card, FlightError)> {
        if let Err(err) = card.start_flight(request) {
            return Err((card, err));
        }
        self.flights.push(InFlight { card, route, placement });
        Ok(())
    }

    /// Advance every flight by `dt` and release the ones that landed.
    ///
    /// Flights are independent; the order of advancement does not matter.
    /// Landings come back in launch order. A card whose landing hook started
    /// a new flight stays in the overlay.
    pub fn advance(&mut self, dt: f32) -> SmallVec<[Landing; 4]> {
        let mut landed = SmallVec::new();
        let mut i = 0;
        while i < self.flights.len() {
            let card = &mut self.flights[i].card;
            if card.advance(dt) == FlightStatus::Landed && !card.is_in_flight() {
                let InFlight { card, route, placement } = self.flights.remove(i);
                landed.push(Landing { card, route, placement });
            } else {
                i += 1;
            }
        }
        landed
    }

    /// Cancel every flight without running landing hooks and release the
    /// cards.
    pub fn cancel_all(&mut self) -> Vec<Card> {
        self.flights
            .drain(..)
            .map(|mut flight| {
                flight.card.cancel_flight();
                flight.card
            })
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.flights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.flights.iter().any(|f| f.card.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InFlight> + '_ {
        self.flights.iter()
    }
}
