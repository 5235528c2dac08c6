//! Render snapshot handed to the host each frame.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, DeckId, DepthRank, TextureId, Vec2};

/// Which container currently owns a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layer {
    Deck(DeckId),
    Overlay,
}

/// Everything the host needs to draw one card.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderItem {
    pub card: CardId,
    pub texture: TextureId,
    /// Shared-space position of the card's center.
    pub position: Vec2,
    pub rotation: f32,
    pub scale: f32,
    pub rank: DepthRank,
    pub layer: Layer,
}

impl RenderItem {
    /// Paint-order key: by rank, with overlay cards winning ties.
    #[must_use]
    pub fn paint_key(&self) -> (DepthRank, bool) {
        (self.rank, self.layer == Layer::Overlay)
    }
}

/// Sort `items` back to front. Stable, so equal keys keep insertion order.
pub fn sort_for_paint(items: &mut [RenderItem]) {
    items.sort_by_key(RenderItem::paint_key);
}
