use rand::{rngs::StdRng, SeedableRng};

use super::super::{verify, Game, Sequence, Symbol, MAX_GAME_STEPS};

#[test]
fn symbol_masks_are_single_bit_flags() {
    assert_eq!(Symbol::Led1.mask(), 0b0000_0001);
    assert_eq!(Symbol::Led4.mask(), 0b0000_1000);
    assert_eq!(Symbol::Led8.mask(), 0b1000_0000);

    for (index, symbol) in [
        Symbol::Led1,
        Symbol::Led2,
        Symbol::Led3,
        Symbol::Led4,
        Symbol::Led5,
        Symbol::Led6,
        Symbol::Led7,
        Symbol::Led8,
    ]
    .into_iter()
    .enumerate()
    {
        assert_eq!(symbol.index(), index);
        assert_eq!(symbol.mask().count_ones(), 1);
        assert_eq!(Symbol::from_index(index), Some(symbol));
    }
    assert_eq!(Symbol::from_index(8), None);
}

#[test]
fn verify_is_reflexive_and_symmetric() {
    let a = Sequence::from_slice(&[Symbol::Led3, Symbol::Led1, Symbol::Led8]);
    let b = Sequence::from_slice(&[Symbol::Led3, Symbol::Led1, Symbol::Led7]);

    assert!(verify(&a, &a));
    assert_eq!(verify(&a, &b), verify(&b, &a));
    assert!(!verify(&a, &b));
}

#[test]
fn verify_rejects_size_mismatch() {
    let long = Sequence::from_slice(&[Symbol::Led2, Symbol::Led2]);
    let short = Sequence::from_slice(&[Symbol::Led2]);

    // Same prefix, different length
    assert!(!verify(&short, &long));
    assert!(!verify(&long, &short));
}

#[test]
fn verify_rejects_empty_against_non_empty() {
    let empty = Sequence::new();
    let target = Sequence::from_slice(&[Symbol::Led5]);

    assert!(!verify(&empty, &target));
}

#[test]
fn verify_rejects_positional_mismatch() {
    // Same symbols, different order
    let a = Sequence::from_slice(&[Symbol::Led3, Symbol::Led1]);
    let b = Sequence::from_slice(&[Symbol::Led1, Symbol::Led3]);

    assert!(!verify(&a, &b));
}

#[test]
fn next_target_preserves_prefix_and_grows_by_one() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut game = Game::new();
    game.state.start();

    for round in 1..=MAX_GAME_STEPS {
        let target = game.next_target(&mut rng);
        assert_eq!(target.len(), round);
        for i in 0..game.state.current_answer.len() {
            assert_eq!(target.get(i), game.state.current_answer.get(i));
        }
        game.state.record_answer(target);
        game.state.advance();
    }
}

#[test]
fn next_target_at_the_cap_replaces_only_the_last_symbol() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut game = Game::new();
    game.state.start();
    for _ in 1..=MAX_GAME_STEPS {
        let target = game.next_target(&mut rng);
        game.state.record_answer(target);
        game.state.advance();
    }
    assert_eq!(game.state.step, MAX_GAME_STEPS);
    assert_eq!(game.state.current_answer.len(), MAX_GAME_STEPS);

    // A round played at the plateau keeps the length and the 19-entry
    // prefix; only the final symbol is freshly drawn
    let plateau = game.next_target(&mut rng);
    assert_eq!(plateau.len(), MAX_GAME_STEPS);
    for i in 0..MAX_GAME_STEPS - 1 {
        assert_eq!(plateau.get(i), game.state.current_answer.get(i));
    }
}

#[test]
fn truncate_shortens_but_never_grows() {
    let mut sequence = Sequence::from_slice(&[Symbol::Led1, Symbol::Led2, Symbol::Led3]);

    sequence.truncate(5);
    assert_eq!(sequence.len(), 3);

    sequence.truncate(2);
    assert_eq!(
        sequence,
        Sequence::from_slice(&[Symbol::Led1, Symbol::Led2])
    );
}

#[test]
fn get_past_valid_prefix_is_none() {
    let sequence = Sequence::from_slice(&[Symbol::Led6]);

    assert_eq!(sequence.get(0), Some(Symbol::Led6));
    assert_eq!(sequence.get(1), None);
    assert_eq!(sequence.get(MAX_GAME_STEPS), None);
}

#[test]
#[should_panic(expected = "sequence capacity exceeded")]
fn push_past_capacity_fails_fast() {
    let mut sequence = Sequence::new();
    for _ in 0..=MAX_GAME_STEPS {
        sequence.push(Symbol::Led1);
    }
}

#[test]
fn clear_empties_the_sequence() {
    let mut sequence = Sequence::from_slice(&[Symbol::Led1, Symbol::Led2]);
    sequence.clear();

    assert!(sequence.is_empty());
    assert_eq!(sequence, Sequence::new());
}
