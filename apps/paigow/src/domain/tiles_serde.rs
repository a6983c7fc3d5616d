//! Serialization for tiles, sets and decks as their compact char identities.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::dealing::Deck;
use super::sets::Set;
use super::tiles_parsing::{parse_deck, parse_set};
use super::tiles_types::Tile;

// Tile serde (single char like "a", "P")
impl Serialize for Tile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.ch().to_string())
    }
}

impl<'de> Deserialize<'de> for Tile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Tile>()
            .map_err(|_| serde::de::Error::custom(format!("Invalid tile: {s}")))
    }
}

// Set serde (four chars, position order preserved)
impl Serialize for Set {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.chars())
    }
}

impl<'de> Deserialize<'de> for Set {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_set(&s).map_err(|e| serde::de::Error::custom(format!("Invalid set {s}: {e}")))
    }
}

// Deck serde (32-char permutation)
impl Serialize for Deck {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.chars())
    }
}

impl<'de> Deserialize<'de> for Deck {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_deck(&s).map_err(|e| serde::de::Error::custom(format!("Invalid deck: {e}")))
    }
}
