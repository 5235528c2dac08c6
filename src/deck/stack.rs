//! A deck: an ordered stack of cards with a staggered layout.
//!
//! Index 0 is the bottom card, the last index is the top. The deck owns its
//! cards by value: the vector is both the logical order and the render list,
//! so a card leaves both in the same operation.

use crate::cards::Card;
use crate::core::{DeckId, DepthRank, FlightRng, Placement, StackLayout, Transform, Vec2};

/// An ordered stack of cards.
///
/// ## Usage
///
/// ```
/// use card_flight::cards::Card;
/// use card_flight::core::{CardId, DeckId, FlightRng, Placement, StackLayout, TextureId};
/// use card_flight::deck::Deck;
///
/// let texture = TextureId::new(0, 100.0, 150.0);
/// let cards = (0..3).map(|i| Card::new(CardId(i), texture)).collect();
/// let mut deck = Deck::new(DeckId::new(0), cards, StackLayout::default(), FlightRng::new(1));
///
/// let top = deck.pop_top().unwrap();
/// assert_eq!(top.id(), CardId(2));
///
/// deck.insert(top, Placement::Bottom);
/// assert_eq!(deck.bottom_card().unwrap().id(), CardId(2));
/// assert_eq!(deck.top_card().unwrap().id(), CardId(1));
/// ```
#[derive(Debug)]
pub struct Deck {
    id: DeckId,
    cards: Vec<Card>,
    layout: StackLayout,
    scale: f32,
    transform: Transform,
    rng: FlightRng,
}

impl Deck {
    /// Build a deck from `cards`, bottom first, laying each out by index.
    #[must_use]
    pub fn new(id: DeckId, cards: Vec<Card>, layout: StackLayout, rng: FlightRng) -> Self {
        let mut deck = Self {
            id,
            cards: Vec::with_capacity(cards.len()),
            layout,
            scale: 1.0,
            transform: Transform::IDENTITY,
            rng,
        };

        for (index, mut card) in cards.into_iter().enumerate() {
            card.set_scale(deck.scale);
            let (_, height) = deck.card_size(&card);
            let y = height * deck.layout.step_ratio * index as f32
                + deck.rng.gen_unit() * height * deck.layout.jitter_ratio;
            deck.rest(&mut card, y);
            card.set_depth_rank(DepthRank::from_index(index));
            deck.cards.push(card);
        }

        deck
    }

    #[must_use]
    pub fn id(&self) -> DeckId {
        self.id
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at `index` (0 = bottom).
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    #[must_use]
    pub fn top_card(&self) -> Option<&Card> {
        self.cards.last()
    }

    #[must_use]
    pub fn bottom_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Cards bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    /// Local y of the bottom card, or 0 when empty.
    #[must_use]
    pub fn bottom_y(&self) -> f32 {
        self.cards.first().map_or(0.0, |c| c.position().y)
    }

    /// Local y of the top card, or 0 when empty.
    #[must_use]
    pub fn top_y(&self) -> f32 {
        self.cards.last().map_or(0.0, |c| c.position().y)
    }

    /// Scale applied to every member and every future insertion.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Placement of this deck's local space in the shared space.
    #[must_use]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    /// Remove and return the top card.
    ///
    /// Returns `None` on an empty deck without changing anything. The
    /// remaining cards keep their positions.
    pub fn pop_top(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Insert `card` according to `placement`.
    pub fn insert(&mut self, card: Card, placement: Placement) {
        match placement {
            Placement::Top => self.insert_at_top(card),
            Placement::Bottom => self.insert_at_bottom(card),
        }
    }

    /// Receive a card arriving from flight, its position in shared space.
    ///
    /// Like `insert`, except the card keeps the rotation it landed with and
    /// its horizontal offset, clamped to the jitter band. Only the vertical
    /// slot comes from the deck.
    pub fn land(&mut self, mut card: Card, placement: Placement) {
        card.set_scale(self.scale);
        let (width, height) = self.card_size(&card);
        let band = width * self.layout.step_ratio;
        let local = self.transform.to_local(card.position());
        let x = local.x.min(band + height * self.layout.jitter_ratio).max(band);
        let rotation = card.rotation();

        self.insert(card, placement);

        let slot = match placement {
            Placement::Top => self.cards.last_mut(),
            Placement::Bottom => self.cards.first_mut(),
        };
        if let Some(card) = slot {
            let y = card.position().y;
            card.set_position(Vec2::new(x, y));
            card.set_rotation(rotation);
        }
    }

    /// Insert `card` under the current bottom card.
    ///
    /// The new card takes the old bottom position; every existing card moves
    /// up by one stagger unit. The top card stays the top card.
    pub fn insert_at_bottom(&mut self, mut card: Card) {
        card.set_scale(self.scale);
        let (_, height) = self.card_size(&card);

        let y = self.bottom_y();
        self.rest(&mut card, y);

        let offset = height * self.layout.step_ratio + self.rng.gen_unit() * height * self.layout.jitter_ratio;
        for existing in &mut self.cards {
            let p = existing.position();
            existing.set_position(Vec2::new(p.x, p.y + offset));
        }

        self.cards.insert(0, card);
        self.rerank();
    }

    /// Append `card` one stagger step above the current top card.
    ///
    /// Existing cards are not moved.
    pub fn insert_at_top(&mut self, mut card: Card) {
        card.set_scale(self.scale);
        let y = self.top_slot_y(&card);
        self.rest(&mut card, y);
        card.set_depth_rank(DepthRank::from_index(self.cards.len()));
        self.cards.push(card);
    }

    /// Local position where `card` would land under `placement`.
    ///
    /// The horizontal coordinate is the center of the jitter band. `insert`
    /// draws fresh jitter there; `land` keeps the arrival offset.
    #[must_use]
    pub fn insertion_point(&self, placement: Placement, card: &Card) -> Vec2 {
        let (width, height) = self.card_size(card);
        let x = width * self.layout.step_ratio + height * self.layout.jitter_ratio / 2.0;
        let y = match placement {
            Placement::Top => self.top_slot_y(card),
            Placement::Bottom => self.bottom_y(),
        };
        Vec2::new(x, y)
    }

    /// Depth rank a card inserted under `placement` would take.
    #[must_use]
    pub fn insertion_rank(&self, placement: Placement) -> DepthRank {
        match placement {
            Placement::Top => DepthRank::from_index(self.cards.len()),
            Placement::Bottom => DepthRank(0),
        }
    }

    /// Apply `scale` to every card now and to all later insertions.
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
        for card in &mut self.cards {
            card.set_scale(scale);
        }
    }

    /// Remove every card, bottom first.
    pub fn drain(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    /// Card size at this deck's scale.
    fn card_size(&self, card: &Card) -> (f32, f32) {
        let texture = card.texture();
        (texture.width * self.scale, texture.height * self.scale)
    }

    fn top_slot_y(&self, card: &Card) -> f32 {
        match self.cards.last() {
            Some(top) => {
                let (_, height) = self.card_size(card);
                top.position().y + height * self.layout.step_ratio
            }
            None => 0.0,
        }
    }

    /// Give `card` its resting pose at local height `y` with fresh jitter.
    fn rest(&mut self, card: &mut Card, y: f32) {
        let (width, height) = self.card_size(card);
        let x = width * self.layout.step_ratio + self.rng.gen_unit() * height * self.layout.jitter_ratio;
        let rotation = self.rng.gen_symmetric(self.layout.max_rotation_deg).to_radians();
        card.set_position(Vec2::new(x, y));
        card.set_rotation(rotation);
    }

    fn rerank(&mut self) {
        for (index, card) in self.cards.iter_mut().enumerate() {
            card.set_depth_rank(DepthRank::from_index(index));
        }
    }
}
