//! The transfer scene: decks trading their top cards on a fixed cycle.
//!
//! Every frame the scene first advances all cards in flight, handing landed
//! cards to their destination decks. It then accumulates time; each time the
//! cycle interval is reached it attempts one transfer per route, in route
//! order, skipping routes whose source deck is empty.
//!
//! ## Ownership
//!
//! A card is always owned by exactly one container:
//!
//! ```text
//!   source Deck --pop_top--> Overlay --landing--> destination Deck
//! ```
//!
//! Each arrow is a move of the `Card` value, so no state exists in which two
//! containers hold it.

use smallvec::SmallVec;

use crate::cards::{Card, FlightRequest};
use crate::core::{CardId, ConfigError, DeckId, FlightRng, SceneConfig, TextureId, Transform, Vec2};
use crate::deck::Deck;
use crate::motion::CurveParams;

use super::overlay::Overlay;
use super::render::{sort_for_paint, Layer, RenderItem};
use super::route::{FrameReport, Route, Transfer};
use super::Scene;

/// Deck-to-deck card transfer scene.
///
/// ## Usage
///
/// ```
/// use card_flight::core::{SceneConfig, TextureId};
/// use card_flight::scene::TransferScene;
///
/// let config = SceneConfig::default().with_cards_per_deck(5);
/// let mut scene = TransferScene::new(config).unwrap();
///
/// let textures = (0..3).map(|i| TextureId::new(i, 100.0, 150.0)).collect();
/// scene.load(textures);
/// scene.resize(1024.0, 768.0);
///
/// let report = scene.advance(1.0);
/// assert_eq!(report.launched.len(), 3);
/// assert_eq!(scene.in_flight_count(), 3);
/// ```
#[derive(Debug)]
pub struct TransferScene {
    config: SceneConfig,
    decks: Vec<Deck>,
    routes: SmallVec<[Route; 4]>,
    overlay: Overlay,
    /// Seconds since the last cycle fired.
    timer: f32,
    /// Source of per-load RNG streams.
    root_rng: FlightRng,
    curve_rng: FlightRng,
    textures: Vec<TextureId>,
    viewport: Option<(f32, f32)>,
    loaded: bool,
}

impl TransferScene {
    /// Create an unloaded scene. Call `load` to build the decks.
    pub fn new(config: SceneConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let root_rng = FlightRng::new(config.seed);
        let curve_rng = root_rng.for_context("curve");
        Ok(Self {
            config,
            decks: Vec::new(),
            routes: SmallVec::new(),
            overlay: Overlay::new(),
            timer: 0.0,
            root_rng,
            curve_rng,
            textures: Vec::new(),
            viewport: None,
            loaded: false,
        })
    }

    /// Build one deck per texture with a fresh card pool.
    ///
    /// Replaces any existing decks (tearing them down first). Card ids are
    /// allocated sequentially, deck by deck, bottom to top. Textures beyond
    /// `DeckId::MAX_COUNT` are dropped with a warning.
    pub fn load(&mut self, mut textures: Vec<TextureId>) {
        if self.loaded {
            self.teardown();
        }

        if textures.len() > DeckId::MAX_COUNT {
            log::warn!(
                "{} textures supplied, building decks for the first {}",
                textures.len(),
                DeckId::MAX_COUNT
            );
            textures.truncate(DeckId::MAX_COUNT);
        }

        let mut layout_rng = self.root_rng.fork();
        self.curve_rng = self.root_rng.fork();

        let per_deck = self.config.cards_per_deck;
        let mut next_id = 0u32;
        self.decks = textures
            .iter()
            .zip(0..=u16::MAX)
            .map(|(&texture, index)| {
                let cards = (0..per_deck)
                    .map(|_| {
                        let card = Card::new(CardId(next_id), texture);
                        next_id += 1;
                        card
                    })
                    .collect();
                Deck::new(
                    DeckId::new(index),
                    cards,
                    self.config.layout.clone(),
                    layout_rng.fork(),
                )
            })
            .collect();

        self.routes = Route::rotation(self.decks.len());
        self.textures = textures;
        self.timer = 0.0;
        self.loaded = true;

        log::debug!(
            "loaded {} decks of {} cards, {} routes",
            self.decks.len(),
            per_deck,
            self.routes.len()
        );

        if let Some((width, height)) = self.viewport {
            self.resize(width, height);
        }
    }

    /// Advance the scene by `dt` seconds.
    ///
    /// Does nothing until the scene is loaded.
    pub fn advance(&mut self, dt: f32) -> FrameReport {
        let mut report = FrameReport::default();
        if !self.loaded {
            return report;
        }

        for landing in self.overlay.advance(dt) {
            let id = landing.card.id();
            match self.decks.get_mut(landing.route.destination.index()) {
                Some(deck) => {
                    deck.land(landing.card, landing.placement);
                    log::debug!("{id} landed on {}", landing.route.destination);
                    report.landed.push(Transfer { card: id, route: landing.route });
                }
                None => log::error!("{id} landed on missing {}", landing.route.destination),
            }
        }

        self.timer += dt.max(0.0);
        if self.timer >= self.config.move_interval {
            self.timer = 0.0;
            report.cycle_fired = true;

            for route in self.routes.clone() {
                match self.transfer(route) {
                    Some(card) => report.launched.push(Transfer { card, route }),
                    None => report.skipped.push(route),
                }
            }
        }

        report
    }

    /// Move the top card of `route.source` into the overlay and start its
    /// flight toward `route.destination`.
    ///
    /// The target point and end rank are the destination's insertion slot at
    /// launch and stay frozen for the flight. On landing the card takes the
    /// slot the destination offers at that moment, so if the destination
    /// changed in between (its top popped in the same cycle, say) the final
    /// rank and height follow the current stack rather than `end_rank`.
    ///
    /// Returns the launched card, or `None` if the source is empty.
    fn transfer(&mut self, route: Route) -> Option<CardId> {
        let placement = self.config.placement;
        let (source, destination) = (route.source.index(), route.destination.index());
        if source == destination || destination >= self.decks.len() {
            log::error!("invalid route {route}");
            return None;
        }

        let Some(mut card) = self.decks.get_mut(source)?.pop_top() else {
            log::trace!("{route}: source empty, skipped");
            return None;
        };
        let id = card.id();

        let shared = self.decks[source].transform().to_shared(card.position());
        card.set_position(shared);

        let target_deck = &self.decks[destination];
        let target = target_deck
            .transform()
            .to_shared(target_deck.insertion_point(placement, &card));
        let end_rank = target_deck.insertion_rank(placement);

        let request = FlightRequest::new(target, self.config.flight_duration)
            .with_ranks(card.depth_rank(), end_rank)
            .with_curve(CurveParams::sample(&mut self.curve_rng, &self.config.curve));

        match self.overlay.launch(card, route, placement, request) {
            Ok(()) => {
                log::debug!("{id} launched {route} toward ({:.1}, {:.1})", target.x, target.y);
                Some(id)
            }
            Err((mut card, err)) => {
                log::error!("{route}: {err}; returning card to source");
                let local = self.decks[source].transform().to_local(card.position());
                card.set_position(local);
                self.decks[source].insert_at_top(card);
                None
            }
        }
    }

    /// Lay decks out for a `width` × `height` viewport.
    ///
    /// Cards scale down below the reference dimension, never below
    /// `min_scale`. Deck `i` is centered in the `i`-th horizontal slice, a
    /// third of the way down. Cards in flight are not touched.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Some((width, height));
        if !self.loaded || self.decks.is_empty() {
            return;
        }

        let scale = card_scale(width, height, self.config.reference_dimension, self.config.min_scale);
        let slice = width / self.decks.len() as f32;
        let y = height / 3.0;

        for (i, deck) in self.decks.iter_mut().enumerate() {
            deck.set_scale(scale);
            deck.set_transform(Transform::at(Vec2::new(slice * i as f32 + slice / 2.0, y)));
        }
    }

    /// Cancel every flight without landing it, drop all cards and decks, and
    /// return to the unloaded state.
    ///
    /// Safe to call at any time, any number of times.
    pub fn teardown(&mut self) {
        let cancelled = self.overlay.cancel_all().len();
        let stacked: usize = self.decks.iter_mut().map(|d| d.drain().len()).sum();
        self.decks.clear();
        self.routes.clear();
        self.timer = 0.0;
        self.loaded = false;

        if cancelled + stacked > 0 {
            log::debug!("teardown released {stacked} stacked and {cancelled} flying cards");
        }
    }

    /// Tear down and rebuild from the textures of the last `load`.
    pub fn reset(&mut self) {
        let textures = std::mem::take(&mut self.textures);
        self.teardown();
        if textures.is_empty() {
            return;
        }
        self.load(textures);
    }

    #[must_use]
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    #[must_use]
    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    #[must_use]
    pub fn deck(&self, id: DeckId) -> Option<&Deck> {
        self.decks.get(id.index())
    }

    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    #[must_use]
    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    /// Cards currently in flight.
    pub fn in_flight(&self) -> impl Iterator<Item = &Card> + '_ {
        self.overlay.iter().map(|f| f.card())
    }

    #[must_use]
    pub fn in_flight_count(&self) -> usize {
        self.overlay.len()
    }

    /// Seconds accumulated toward the next cycle.
    #[must_use]
    pub fn timer(&self) -> f32 {
        self.timer
    }

    /// Cards held by decks and the overlay together.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.decks.iter().map(Deck::len).sum::<usize>() + self.overlay.len()
    }

    /// Which container holds card `id`, if any.
    #[must_use]
    pub fn owner_of(&self, id: CardId) -> Option<Layer> {
        if self.overlay.contains(id) {
            return Some(Layer::Overlay);
        }
        self.decks
            .iter()
            .find(|d| d.iter().any(|c| c.id() == id))
            .map(|d| Layer::Deck(d.id()))
    }

    /// Every card in shared coordinates, sorted back to front.
    #[must_use]
    pub fn render_list(&self) -> Vec<RenderItem> {
        let mut items = Vec::with_capacity(self.total_cards());

        for deck in &self.decks {
            let transform = deck.transform();
            items.extend(deck.iter().map(|card| RenderItem {
                card: card.id(),
                texture: card.texture(),
                position: transform.to_shared(card.position()),
                rotation: card.rotation(),
                scale: card.scale(),
                rank: card.depth_rank(),
                layer: Layer::Deck(deck.id()),
            }));
        }

        items.extend(self.in_flight().map(|card| RenderItem {
            card: card.id(),
            texture: card.texture(),
            position: card.position(),
            rotation: card.rotation(),
            scale: card.scale(),
            rank: card.depth_rank(),
            layer: Layer::Overlay,
        }));

        sort_for_paint(&mut items);
        items
    }
}

impl Scene for TransferScene {
    fn update(&mut self, dt: f32) {
        self.advance(dt);
    }

    fn resize(&mut self, width: f32, height: f32) {
        TransferScene::resize(self, width, height);
    }

    fn teardown(&mut self) {
        TransferScene::teardown(self);
    }
}

/// Card scale for a viewport: proportional below `reference`, 1 above,
/// never below `min_scale`.
#[must_use]
pub fn card_scale(width: f32, height: f32, reference: f32, min_scale: f32) -> f32 {
    let min_dimension = width.min(height);
    let scale = if min_dimension < reference {
        min_dimension / reference
    } else {
        1.0
    };
    scale.max(min_scale)
}
