//! Computer heuristic tests.

use std::collections::BTreeSet;

use indigo::Suit::{Clubs, Diamonds, Hearts, Spades};
use indigo::{Card, ComputerStrategy, Move, MoveSource, Rank, Side, Suit, TurnView, select_card};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Collects every index picked over a range of seeds.
fn picks(hand: &[Card], top: Option<Card>) -> BTreeSet<usize> {
    (0..200)
        .map(|seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            select_card(hand, top, &mut rng).unwrap()
        })
        .collect()
}

#[test]
fn empty_hand_has_no_choice() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert_eq!(select_card(&[], None, &mut rng), None);
}

#[test]
fn lone_card_is_played() {
    let hand = [card(Spades, Rank::Two)];

    assert_eq!(picks(&hand, None), BTreeSet::from([0]));
    assert_eq!(
        picks(&hand, Some(card(Hearts, Rank::King))),
        BTreeSet::from([0])
    );
}

#[test]
fn single_matching_card_is_played() {
    let hand = [
        card(Diamonds, Rank::Three),
        card(Hearts, Rank::Three),
        card(Spades, Rank::Seven),
    ];

    assert_eq!(
        picks(&hand, Some(card(Clubs, Rank::Seven))),
        BTreeSet::from([2])
    );
}

#[test]
fn two_matching_cards_are_both_candidates() {
    // 3♦ shares the suit of 7♦ and 7♠ its rank.
    let hand = [
        card(Diamonds, Rank::Three),
        card(Hearts, Rank::Three),
        card(Spades, Rank::Seven),
    ];

    assert_eq!(
        picks(&hand, Some(card(Diamonds, Rank::Seven))),
        BTreeSet::from([0, 2])
    );
}

#[test]
fn shared_rank_is_preferred_on_empty_table() {
    let hand = [card(Diamonds, Rank::Three), card(Hearts, Rank::Three)];

    assert_eq!(picks(&hand, None), BTreeSet::from([0, 1]));
}

#[test]
fn shared_suit_beats_shared_rank() {
    let hand = [
        card(Spades, Rank::Two),
        card(Spades, Rank::Five),
        card(Hearts, Rank::Nine),
        card(Diamonds, Rank::Nine),
    ];

    assert_eq!(picks(&hand, None), BTreeSet::from([0, 1]));
}

#[test]
fn hand_is_the_pool_when_nothing_matches() {
    let hand = [
        card(Spades, Rank::Two),
        card(Hearts, Rank::Five),
        card(Diamonds, Rank::Nine),
        card(Hearts, Rank::Jack),
    ];

    // Nothing matches K♣; the hearts share a suit.
    assert_eq!(
        picks(&hand, Some(card(Clubs, Rank::King))),
        BTreeSet::from([1, 3])
    );
}

#[test]
fn groups_are_formed_within_the_candidates() {
    let hand = [
        card(Clubs, Rank::King),
        card(Clubs, Rank::Four),
        card(Hearts, Rank::Four),
        card(Diamonds, Rank::Eight),
        card(Spades, Rank::Eight),
    ];

    // Candidates for 4♦ are 4♣, 4♥ and 8♦. Their suits differ, the fours
    // share a rank. K♣ and 8♠ are outside the pool.
    assert_eq!(
        picks(&hand, Some(card(Diamonds, Rank::Four))),
        BTreeSet::from([1, 2])
    );
}

#[test]
fn any_pool_card_without_groups() {
    let hand = [
        card(Spades, Rank::Two),
        card(Hearts, Rank::Five),
        card(Diamonds, Rank::Nine),
    ];

    assert_eq!(picks(&hand, None), BTreeSet::from([0, 1, 2]));
}

#[test]
fn same_seed_same_choice() {
    let hand = [
        card(Spades, Rank::Two),
        card(Hearts, Rank::Five),
        card(Diamonds, Rank::Nine),
        card(Clubs, Rank::Jack),
    ];

    for seed in 0..20 {
        let first = select_card(&hand, None, &mut ChaCha8Rng::seed_from_u64(seed));
        let second = select_card(&hand, None, &mut ChaCha8Rng::seed_from_u64(seed));
        assert_eq!(first, second);
    }
}

#[test]
fn computer_strategy_plays_selected_card() {
    let hand = [
        card(Diamonds, Rank::Three),
        card(Hearts, Rank::Three),
        card(Spades, Rank::Seven),
    ];
    let turn = TurnView {
        side: Side::Computer,
        hand: &hand,
        top: Some(card(Clubs, Rank::Seven)),
    };
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    assert_eq!(
        ComputerStrategy::new().choose_move(&turn, &mut rng),
        Move::Play(2)
    );

    let empty = TurnView {
        side: Side::Computer,
        hand: &[],
        top: None,
    };
    assert_eq!(ComputerStrategy::new().choose_move(&empty, &mut rng), Move::Exit);
}
