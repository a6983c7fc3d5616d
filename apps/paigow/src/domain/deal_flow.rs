//! Deal lifecycle: dealing, per-player readiness and submitted arrangements.
//!
//! Every function here validates before it mutates, so a rejected call
//! leaves the game exactly as it was.

use tracing::info;

use crate::domain::dealing::{deal_all, deal_sets, Deck};
use crate::domain::rules::SETS_PER_PLAYER;
use crate::domain::seed_derivation::derive_dealing_seed;
use crate::domain::sets::Set;
use crate::domain::state::{Deal, DealState, Game, GameState, PlayerId, PlayerInDeal};
use crate::errors::domain::{DomainError, StateKind, ValidationKind};

fn require_state(game: &Game, expected: GameState, action: &str) -> Result<(), DomainError> {
    if game.state == expected {
        return Ok(());
    }
    if game.state == GameState::GameOver {
        return Err(DomainError::invalid_state(
            StateKind::GameOver,
            format!("Cannot {action}: game is over"),
        ));
    }
    Err(DomainError::invalid_state(
        StateKind::PhaseMismatch,
        format!("Cannot {action} in {:?}", game.state),
    ))
}

/// Shuffle and deal the next deck. Only valid in `AboutToDeal`.
///
/// Every seated player gets their record at once, in `NotRequested`.
/// Returns the new deal number.
pub fn deal_tiles(game: &mut Game) -> Result<u32, DomainError> {
    require_state(game, GameState::AboutToDeal, "deal")?;

    let number = game.deal_number + 1;
    let deck = Deck::shuffled(derive_dealing_seed(game.seed, number));
    let hands = deal_all(&deck, game.players.len())?;

    game.deals.push(Deal {
        number,
        deck,
        settled: false,
    });
    game.deal_number = number;
    game.state = GameState::SettingTiles;
    for (seat, dealt) in hands.into_iter().enumerate() {
        let player = game.players[seat].id;
        if game.record_index(player, number).is_none() {
            game.records.push(new_record(player, number, dealt));
        }
    }

    info!(game_id = game.id, deal_number = number, "Tiles dealt");
    Ok(number)
}

fn new_record(player: PlayerId, deal_number: u32, dealt: [Set; SETS_PER_PLAYER]) -> PlayerInDeal {
    PlayerInDeal {
        player,
        deal_number,
        dealt,
        arranged: None,
        state: DealState::NotRequested,
        points: 0,
    }
}

/// Index of `player`'s record for the current deal, creating it from the
/// deck on first access.
///
/// The record starts in `NotRequested` whatever the player's kind. Computer
/// seats are not set here; callers working on the domain directly must
/// arrange and submit them themselves (the game flow service does so
/// right after dealing).
pub fn ensure_player_in_deal(game: &mut Game, player: PlayerId) -> Result<usize, DomainError> {
    game.player(player)?;
    let number = game.current_deal()?.number;
    if let Some(index) = game.record_index(player, number) {
        return Ok(index);
    }
    let deck = game.current_deal()?.deck;
    let dealt = deal_sets(&deck, usize::from(player), game.players.len())?;
    game.records.push(new_record(player, number, dealt));
    Ok(game.records.len() - 1)
}

/// The player asks to see their tiles: `NotRequested` becomes `Setting`.
/// Later states are left alone. Returns the dealt sets.
pub fn request_tiles(
    game: &mut Game,
    player: PlayerId,
) -> Result<[Set; SETS_PER_PLAYER], DomainError> {
    require_state(game, GameState::SettingTiles, "request tiles")?;
    let index = ensure_player_in_deal(game, player)?;
    let record = &mut game.records[index];
    if record.state == DealState::NotRequested {
        record.state = DealState::Setting;
    }
    Ok(record.dealt)
}

fn step(
    game: &mut Game,
    player: PlayerId,
    from: &[DealState],
    to: DealState,
    action: &str,
) -> Result<(), DomainError> {
    require_state(game, GameState::SettingTiles, action)?;
    game.player(player)?;
    let current = game
        .record(player, game.deal_number)
        .map_or(DealState::NotRequested, |r| r.state);
    if !from.contains(&current) {
        return Err(DomainError::invalid_state(
            StateKind::PhaseMismatch,
            format!("Cannot {action} while {current:?}"),
        ));
    }
    let index = ensure_player_in_deal(game, player)?;
    game.records[index].state = to;
    Ok(())
}

/// `Setting` to `Previewing`. Repeating it is harmless.
pub fn preview(game: &mut Game, player: PlayerId) -> Result<(), DomainError> {
    step(
        game,
        player,
        &[DealState::Setting, DealState::Previewing],
        DealState::Previewing,
        "preview",
    )
}

/// `Previewing` back to `Setting`. Repeating it is harmless.
pub fn unpreview(game: &mut Game, player: PlayerId) -> Result<(), DomainError> {
    step(
        game,
        player,
        &[DealState::Previewing, DealState::Setting],
        DealState::Setting,
        "unpreview",
    )
}

/// Match each submitted set to a distinct dealt set holding the same tiles.
fn match_dealt(
    dealt: &[Set; SETS_PER_PLAYER],
    submitted: &[Set; SETS_PER_PLAYER],
) -> Result<(), DomainError> {
    let mut used = [false; SETS_PER_PLAYER];
    for set in submitted {
        let found = dealt
            .iter()
            .enumerate()
            .find(|(i, d)| !used[*i] && d.same_tiles_as(set))
            .map(|(i, _)| i);
        match found {
            Some(i) => used[i] = true,
            None => {
                return Err(DomainError::validation(
                    ValidationKind::NotARearrangement,
                    format!("Set {} does not match a dealt set", set.chars()),
                ))
            }
        }
    }
    Ok(())
}

/// Store the player's arrangement, best tier first, and mark them `Ready`.
///
/// Each set must hold the same four tiles as one of the dealt sets. Tiers
/// may be reordered but tiles may not move between sets. Resubmitting
/// replaces the earlier arrangement while the deal is still being set.
pub fn submit_arrangement(
    game: &mut Game,
    player: PlayerId,
    sets: [Set; SETS_PER_PLAYER],
) -> Result<(), DomainError> {
    require_state(game, GameState::SettingTiles, "submit an arrangement")?;
    game.player(player)?;
    game.current_deal()?;

    // Validate against the dealt sets before creating or touching the record.
    let number = game.deal_number;
    let dealt = match game.record(player, number) {
        Some(r) => r.dealt,
        None => deal_sets(
            &game.current_deal()?.deck,
            usize::from(player),
            game.players.len(),
        )?,
    };
    match_dealt(&dealt, &sets)?;

    let index = ensure_player_in_deal(game, player)?;
    let record = &mut game.records[index];
    record.arranged = Some(sets);
    record.state = DealState::Ready;
    Ok(())
}

/// True once every seated player is `Ready` in the current deal.
pub fn all_ready(game: &Game) -> bool {
    game.deal_number > 0
        && game.players.iter().all(|p| {
            game.record(p.id, game.deal_number)
                .is_some_and(|r| r.state == DealState::Ready)
        })
}

/// Leave the settled deal behind: `ComparingHands` back to `AboutToDeal`.
pub fn advance_to_next_deal(game: &mut Game) -> Result<(), DomainError> {
    require_state(game, GameState::ComparingHands, "advance to the next deal")?;
    game.state = GameState::AboutToDeal;
    Ok(())
}
