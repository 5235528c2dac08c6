//! Identifiers for scene objects.
//!
//! Every card has a unique `CardId` that survives transfers between decks,
//! so the host can keep per-card render state (sprites, textures) keyed on it.
//! Decks are identified by `DeckId`, which doubles as their index in the scene.
//!
//! ## Usage
//!
//! ```
//! use card_flight::core::{CardId, DeckId};
//!
//! let card = CardId(7);
//! assert_eq!(card.raw(), 7);
//!
//! let deck = DeckId::new(2);
//! assert_eq!(deck.index(), 2);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card.
///
/// Allocated once when the scene loads its card pool. A card keeps its id
/// for its whole lifetime, across every flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Deck identifier. Equal to the deck's position in the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DeckId(pub u16);

impl DeckId {
    /// Most decks a scene can address.
    pub const MAX_COUNT: usize = u16::MAX as usize;

    /// Create a new deck ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Index of the deck in the scene's deck list.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for DeckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Deck({})", self.0)
    }
}

/// Opaque texture handle supplied by the asset provider.
///
/// The core never inspects the texture. It only carries the handle and the
/// pixel size, which drives card dimensions and stack stagger.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextureId {
    /// Host-assigned handle.
    pub handle: u32,
    /// Texture width in pixels.
    pub width: f32,
    /// Texture height in pixels.
    pub height: f32,
}

impl TextureId {
    /// Create a texture handle with its pixel size.
    #[must_use]
    pub const fn new(handle: u32, width: f32, height: f32) -> Self {
        Self { handle, width, height }
    }
}

impl std::fmt::Display for TextureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Texture({})", self.handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id_raw() {
        assert_eq!(CardId(42).raw(), 42);
        assert_eq!(CardId::from(3), CardId(3));
    }

    #[test]
    fn test_deck_index() {
        assert_eq!(DeckId::new(0).index(), 0);
        assert_eq!(DeckId::new(5).index(), 5);
    }

    #[test]
    fn test_max_count_fits_id() {
        assert!(u16::try_from(DeckId::MAX_COUNT - 1).is_ok());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CardId(42)), "Card(42)");
        assert_eq!(format!("{}", DeckId(1)), "Deck(1)");
        assert_eq!(format!("{}", TextureId::new(9, 10.0, 20.0)), "Texture(9)");
    }

    #[test]
    fn test_serialization() {
        let id = CardId(123);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: CardId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
