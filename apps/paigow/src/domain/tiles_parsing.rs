//! Parsing tiles, sets and decks from their compact char identities.

use std::collections::HashSet;
use std::str::FromStr;

use super::dealing::Deck;
use super::rules::{DECK_SIZE, TILES_PER_SET};
use super::sets::{make_set, Set};
use super::tiles_types::Tile;
use crate::errors::domain::{DomainError, ValidationKind};

impl FromStr for Tile {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => parse_tile(c),
            _ => Err(DomainError::validation(
                ValidationKind::InvalidTile,
                format!("Parse tile: {s}"),
            )),
        }
    }
}

pub fn parse_tile(c: char) -> Result<Tile, DomainError> {
    Tile::from_char(c).ok_or_else(|| {
        DomainError::validation(ValidationKind::InvalidTile, format!("Unknown tile char: {c}"))
    })
}

/// Parse any number of tile chars, rejecting duplicates.
pub fn parse_distinct_tiles(s: &str) -> Result<Vec<Tile>, DomainError> {
    let tiles = s.chars().map(parse_tile).collect::<Result<Vec<_>, _>>()?;
    let mut seen = HashSet::with_capacity(tiles.len());
    if let Some(dup) = tiles.iter().find(|t| !seen.insert(**t)) {
        return Err(DomainError::validation(
            ValidationKind::InvalidTile,
            format!("Tile {} appears more than once in {s}", dup.ch()),
        ));
    }
    Ok(tiles)
}

/// Parse a four-char set identity such as `"aAbc"`.
pub fn parse_set(s: &str) -> Result<Set, DomainError> {
    let tiles = parse_distinct_tiles(s).map_err(|e| match e {
        DomainError::Validation(_, detail) => {
            DomainError::validation(ValidationKind::InvalidSet, detail)
        }
        other => other,
    })?;
    let tiles: [Tile; TILES_PER_SET] = tiles.try_into().map_err(|v: Vec<Tile>| {
        DomainError::validation(
            ValidationKind::InvalidSet,
            format!("A set has {TILES_PER_SET} tiles, got {} in {s}", v.len()),
        )
    })?;
    Ok(make_set(tiles))
}

impl FromStr for Set {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_set(s)
    }
}

/// Parse a 32-char deck identity; it must be a permutation of every tile.
pub fn parse_deck(s: &str) -> Result<Deck, DomainError> {
    let tiles = parse_distinct_tiles(s).map_err(|e| match e {
        DomainError::Validation(_, detail) => {
            DomainError::validation(ValidationKind::InvalidDeck, detail)
        }
        other => other,
    })?;
    let tiles: [Tile; DECK_SIZE] = tiles.try_into().map_err(|v: Vec<Tile>| {
        DomainError::validation(
            ValidationKind::InvalidDeck,
            format!("A deck has {DECK_SIZE} tiles, got {}", v.len()),
        )
    })?;
    Ok(Deck::from_tiles(tiles))
}

impl FromStr for Deck {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_deck(s)
    }
}
