//! Console text and input parsing tests.

use indigo::Suit::{Clubs, Diamonds, Hearts, Spades};
use indigo::{
    Card, Command, Deck, Game, GameEvent, Move, MoveSource, Rank, Score, Side, Suit, TurnView,
    parse_yes_no,
};
use rand::RngCore;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

struct AlwaysFirst;

impl MoveSource for AlwaysFirst {
    fn choose_move(&mut self, _turn: &TurnView<'_>, _rng: &mut dyn RngCore) -> Move {
        Move::Play(0)
    }
}

#[test]
fn card_text() {
    assert_eq!(card(Hearts, Rank::Ten).to_string(), "10♥");
    assert_eq!(card(Diamonds, Rank::Ace).to_string(), "A♦");
    assert_eq!(card(Spades, Rank::Queen).to_string(), "Q♠");
    assert_eq!(card(Clubs, Rank::Seven).to_string(), "7♣");
}

#[test]
fn card_points() {
    let scoring: Vec<Rank> = Rank::ALL
        .into_iter()
        .filter(|rank| rank.points() == 1)
        .collect();

    assert_eq!(
        scoring,
        [Rank::Ace, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King]
    );
    assert_eq!(card(Clubs, Rank::Nine).points(), 0);
}

#[test]
fn commands() {
    assert_eq!(Command::parse("1"), Some(Command::Card(1)));
    assert_eq!(Command::parse("6\n"), Some(Command::Card(6)));
    assert_eq!(Command::parse("0"), Some(Command::Card(0)));
    assert_eq!(Command::parse("exit"), Some(Command::Exit));
    assert_eq!(Command::parse("exit\r\n"), Some(Command::Exit));

    assert_eq!(Command::parse("10"), None);
    assert_eq!(Command::parse(" 3"), None);
    assert_eq!(Command::parse("EXIT"), None);
    assert_eq!(Command::parse("x"), None);
    assert_eq!(Command::parse(""), None);
}

#[test]
fn card_commands_map_to_hand_indices() {
    assert_eq!(Command::Card(1).card_index(6), Some(0));
    assert_eq!(Command::Card(6).card_index(6), Some(5));
    assert_eq!(Command::Card(0).card_index(6), None);
    assert_eq!(Command::Card(4).card_index(3), None);
    assert_eq!(Command::Exit.card_index(6), None);
}

#[test]
fn yes_no_answers() {
    assert_eq!(parse_yes_no("yes"), Some(true));
    assert_eq!(parse_yes_no("Yes\n"), Some(true));
    assert_eq!(parse_yes_no("NO"), Some(false));
    assert_eq!(parse_yes_no("n"), None);
    assert_eq!(parse_yes_no("maybe"), None);
}

#[test]
fn event_text() {
    let cases = [
        (
            GameEvent::InitialTable(vec![card(Hearts, Rank::Ace), card(Clubs, Rank::Ten)]),
            "Initial cards on the table: A♥ 10♣",
        ),
        (
            GameEvent::TableStatus {
                len: 3,
                top: Some(card(Spades, Rank::King)),
            },
            "3 cards on the table, and the top card is K♠",
        ),
        (
            GameEvent::TableStatus { len: 0, top: None },
            "No cards on the table",
        ),
        (
            GameEvent::HandShown {
                side: Side::Player,
                cards: vec![card(Hearts, Rank::Two), card(Diamonds, Rank::Jack)],
            },
            "Cards in hand: 1)2♥ 2)J♦ ",
        ),
        (
            GameEvent::HandShown {
                side: Side::Computer,
                cards: vec![card(Hearts, Rank::Two), card(Diamonds, Rank::Jack)],
            },
            "2♥ J♦",
        ),
        (
            GameEvent::CardPlayed {
                side: Side::Computer,
                card: card(Diamonds, Rank::Jack),
            },
            "Computer plays J♦",
        ),
        (
            GameEvent::Captured {
                side: Side::Player,
                cards: 4,
            },
            "Player wins cards",
        ),
        (
            GameEvent::Score(Score {
                player_points: 3,
                computer_points: 5,
                player_cards: 7,
                computer_cards: 11,
            }),
            "Score: Player 3 - Computer 5\nCards: Player 7 - Computer 11",
        ),
        (GameEvent::Separator, ""),
        (GameEvent::GameOver, "Game Over"),
    ];

    for (event, text) in cases {
        assert_eq!(event.to_string(), text);
    }
}

#[test]
fn first_turns_transcript() {
    let deck = Deck::from_cards(vec![
        card(Diamonds, Rank::Two),
        card(Diamonds, Rank::Three),
        card(Diamonds, Rank::Four),
        card(Diamonds, Rank::Five),
        card(Clubs, Rank::Six),
        card(Clubs, Rank::Seven),
        card(Clubs, Rank::Eight),
        card(Clubs, Rank::Nine),
        card(Clubs, Rank::Ten),
        card(Clubs, Rank::Jack),
        card(Hearts, Rank::Six),
        card(Hearts, Rank::Seven),
        card(Hearts, Rank::Eight),
        card(Hearts, Rank::Nine),
        card(Hearts, Rank::Ten),
        card(Spades, Rank::Queen),
    ])
    .unwrap();
    let mut game = Game::with_deck(deck, Side::Player, 1).unwrap();
    let mut events: Vec<GameEvent> = Vec::new();

    game.run(&mut AlwaysFirst, &mut AlwaysFirst, &mut events).unwrap();

    let lines: Vec<String> = events.iter().map(ToString::to_string).collect();
    let expected = [
        "Initial cards on the table: 2♦ 3♦ 4♦ 5♦",
        "",
        "4 cards on the table, and the top card is 5♦",
        "Cards in hand: 1)6♣ 2)7♣ 3)8♣ 4)9♣ 5)10♣ 6)J♣ ",
        "Player plays 6♣",
        "",
        "5 cards on the table, and the top card is 6♣",
        "6♥ 7♥ 8♥ 9♥ 10♥ Q♠",
        "Computer plays 6♥",
        "Computer wins cards",
        "Score: Player 0 - Computer 0\nCards: Player 0 - Computer 6",
        "",
        "No cards on the table",
    ];
    assert_eq!(&lines[..expected.len()], expected);

    assert_eq!(
        &lines[lines.len() - 3..],
        [
            "2 cards on the table, and the top card is Q♠",
            "Score: Player 0 - Computer 7\nCards: Player 0 - Computer 16",
            "Game Over",
        ]
    );
}
