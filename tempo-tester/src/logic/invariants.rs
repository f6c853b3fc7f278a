//! Checks run between every pair of consecutive snapshots of a simulated round.
use std::collections::BTreeSet;

use tempo_game::constants::BOARD_SIZE;
use tempo_game::{Catalog, GameSession, Outcome, Snapshot, TempoConfig};

/// Board and deck shape, checked once when a round starts.
pub fn check_layout(session: &GameSession, catalog: &Catalog) -> Vec<String> {
    let mut violations = Vec::new();
    let state = session.state();

    let board_ids: BTreeSet<_> = state.board.cells().iter().map(|card| card.id).collect();
    if board_ids.len() != BOARD_SIZE {
        violations.push(format!("board has {} distinct cards", board_ids.len()));
    }

    let mut deck_ids: Vec<_> = state.deck.cards().iter().map(|card| card.id).collect();
    deck_ids.sort_unstable();
    let mut catalog_ids: Vec<_> = catalog.iter().map(|card| card.id).collect();
    catalog_ids.sort_unstable();
    if deck_ids != catalog_ids {
        violations.push("deck is not a permutation of the catalog".to_string());
    }
    violations
}

/// Properties of one snapshot on its own.
pub fn check_snapshot(snapshot: &Snapshot, config: &TempoConfig) -> Vec<String> {
    let mut violations = Vec::new();

    if snapshot.lives > snapshot.starting_lives {
        violations.push(format!(
            "lives {} above starting {}",
            snapshot.lives, snapshot.starting_lives
        ));
    }
    if snapshot.lives == 0 && (!snapshot.game_over || snapshot.is_playing) {
        violations.push("no lives left but round not over".to_string());
    }
    if snapshot.game_over && snapshot.victory {
        violations.push("game over and victory at once".to_string());
    }
    if snapshot.victory && (snapshot.marked_count() != BOARD_SIZE || snapshot.is_playing) {
        violations.push("victory without a full, stopped board".to_string());
    }
    if snapshot.marked_count() == BOARD_SIZE && !snapshot.victory && !snapshot.game_over {
        violations.push("full board without victory".to_string());
    }

    let unique: BTreeSet<_> = snapshot.completed_lines.iter().collect();
    if unique.len() != snapshot.completed_lines.len() {
        violations.push("line recorded twice".to_string());
    }

    let expected = config.duration_for(snapshot.caller_index);
    if snapshot.duration_ms != expected {
        violations.push(format!(
            "duration {}ms at {:?}, expected {expected}ms",
            snapshot.duration_ms, snapshot.caller_index
        ));
    }
    violations
}

/// Properties of a transition between two snapshots of the same round.
pub fn check_transition(before: &Snapshot, after: &Snapshot) -> Vec<String> {
    let mut violations = Vec::new();
    if before.generation != after.generation {
        return violations;
    }

    for cell in before.cells.iter().filter(|cell| cell.marked) {
        if !after.cells.get(cell.index).is_some_and(|next| next.marked) {
            violations.push(format!("cell {} lost its mark", cell.index));
        }
    }
    if !before
        .completed_lines
        .iter()
        .all(|line| after.completed_lines.contains(line))
    {
        violations.push("completed line forgotten".to_string());
    }
    if after.caller_index < before.caller_index {
        violations.push(format!(
            "caller moved back from {:?} to {:?}",
            before.caller_index, after.caller_index
        ));
    }
    if after.lives > before.lives {
        violations.push("a life came back".to_string());
    }

    if matches!(before.outcome, Outcome::Victory | Outcome::GameOver) {
        let frozen = before.lives == after.lives
            && before.caller_index == after.caller_index
            && before.marked_count() == after.marked_count()
            && before.outcome == after.outcome
            && before.tally == after.tally;
        if !frozen {
            violations.push(format!("round changed after {}", before.outcome));
        }
    }
    violations
}
