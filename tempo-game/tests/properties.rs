use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

use tempo_game::{
    Catalog, GameSession, Marks, Outcome, TapOutcome, caller_duration, decode_to_seed,
};

#[test]
fn every_seed_deals_a_valid_round() {
    let catalog = Catalog::builtin().unwrap();
    let all_ids: Vec<_> = catalog.iter().map(|c| c.id).collect();
    for seed in 0..200_u64 {
        let session = GameSession::with_defaults(catalog.clone(), seed);
        let state = session.state();

        let board_ids: HashSet<_> = state.board.cells().iter().map(|c| c.id).collect();
        assert_eq!(board_ids.len(), 9, "seed {seed}: duplicate board card");

        let mut deck_ids: Vec<_> = state.deck.cards().iter().map(|c| c.id).collect();
        deck_ids.sort_unstable();
        assert_eq!(deck_ids, all_ids, "seed {seed}: deck is not a permutation");
    }
}

#[test]
fn same_seed_same_round() {
    let catalog = Catalog::builtin().unwrap();
    for seed in [0_u64, 1, 0xC0FFEE, u64::MAX] {
        let mut a = GameSession::with_defaults(catalog.clone(), seed);
        let mut b = GameSession::with_defaults(catalog.clone(), seed);
        assert_eq!(a.state(), b.state());
        assert_eq!(a.share_code(), b.share_code());

        a.start_game();
        b.start_game();
        assert_eq!(a.state().board, b.state().board);
        assert_eq!(a.state().deck, b.state().deck);
    }
}

#[test]
fn share_code_replays_board_and_deck() {
    let catalog = Catalog::builtin().unwrap();
    let original = GameSession::with_defaults(catalog.clone(), 99);
    let code = original.share_code().unwrap();
    let seed = decode_to_seed(&code).unwrap();

    let mut replay = GameSession::with_defaults(catalog, 1);
    replay.start_game_with_seed(seed);
    assert_eq!(replay.state().board, original.state().board);
    assert_eq!(replay.state().deck, original.state().deck);
    assert_eq!(replay.share_code(), Some(code));
}

#[test]
fn fresh_rounds_are_not_drawn_from_the_short_code_set() {
    const ROUNDS: usize = 20_000;
    let mut session = GameSession::with_defaults(Catalog::builtin().unwrap(), 0x5EED);
    let mut decks = HashSet::with_capacity(ROUNDS);
    let mut boards = HashSet::with_capacity(ROUNDS);
    for _ in 0..ROUNDS {
        session.start_game();
        let state = session.state();
        decks.insert(state.deck.cards().iter().map(|c| c.id).collect::<Vec<_>>());
        boards.insert(state.board.cells().iter().map(|c| c.id).collect::<Vec<_>>());
    }
    assert!(decks.len() > 6_400, "only {} distinct decks", decks.len());
    assert_eq!(decks.len(), ROUNDS);
    assert!(boards.len() > 6_400, "only {} distinct boards", boards.len());
}

#[test]
fn fresh_round_codes_decode_to_their_seed() {
    let catalog = Catalog::builtin().unwrap();
    let mut session = GameSession::with_defaults(catalog, 4);
    for _ in 0..50 {
        session.start_game();
        let seed = session.state().round_seed.unwrap();
        let code = session.share_code().unwrap();
        assert_eq!(decode_to_seed(&code), Some(seed), "{code}");
    }
}

#[test]
fn duration_ramp_floor() {
    assert_eq!(caller_duration(0).as_millis(), 10_000);
    assert_eq!(caller_duration(10).as_millis(), 8_500);
    assert_eq!(caller_duration(50).as_millis(), 3_500);
    for index in 0..200 {
        let expected = 10_000_u128.saturating_sub(150 * index as u128).max(3_500);
        assert_eq!(caller_duration(index).as_millis(), expected);
    }
}

#[test]
fn random_play_keeps_invariants() {
    let catalog = Catalog::builtin().unwrap();
    for seed in 0..40_u64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut session = GameSession::with_defaults(catalog.clone(), seed);
        let mut previous_marks = Marks::empty();
        let mut previous_lines = 0;
        let mut generation = session.state().generation;

        for _ in 0..400 {
            match rng.gen_range(0..10) {
                0..=4 => {
                    let cell = rng.gen_range(0..9);
                    let lives_before = session.state().lives;
                    let outcome = session.tap_cell(cell);
                    if outcome == TapOutcome::Mismatch {
                        assert_eq!(session.state().lives, lives_before - 1);
                    } else {
                        assert_eq!(session.state().lives, lives_before);
                    }
                }
                5 => {
                    session.advance(false);
                }
                6 if rng.gen_bool(0.05) => session.start_game(),
                _ => {
                    if let Some(deadline) = session.next_deadline() {
                        session.pump(deadline);
                    }
                }
            }

            let state = session.state();
            assert!(state.lives <= 3);
            assert!(!(state.game_over && state.victory));
            if state.lives == 0 {
                assert!(state.game_over && !state.is_playing);
            }
            if state.victory {
                assert!(state.marks.is_full() && !state.is_playing);
            }
            if state.generation == generation {
                assert!(state.marks.contains_all(previous_marks));
                assert!(state.completed_lines.len() >= previous_lines);
            } else {
                assert!(state.marks.is_empty());
                generation = state.generation;
            }
            previous_marks = state.marks;
            previous_lines = state.completed_lines.len();

            let snapshot = session.snapshot();
            assert_eq!(snapshot.marked_count(), state.marks.len());
            if matches!(snapshot.outcome, Outcome::Victory | Outcome::GameOver) {
                let frozen = session.state().clone();
                assert!(!session.advance(false));
                assert_eq!(session.tap_cell(0), TapOutcome::Ignored);
                let after = session.state();
                assert_eq!(after.caller, frozen.caller);
                assert_eq!(after.marks, frozen.marks);
                assert_eq!(after.lives, frozen.lives);
                session.start_game();
            }
        }
    }
}
