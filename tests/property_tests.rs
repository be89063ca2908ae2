//! Property tests over seeded random play.

mod common;

use love_letter_arena::{
    check_action, legal_action, Action, Agent, Card, GameRng, IllegalAction, PlayerId,
    PlayerView, RandomAgent, RoundState, Table,
};
use proptest::prelude::*;

fn config() -> ProptestConfig {
    ProptestConfig::with_cases(64)
}

fn any_card() -> impl Strategy<Value = Card> {
    prop::sample::select(Card::ALL.to_vec())
}

/// Play a dealt round with random agents, checking invariants after every
/// step. Returns the number of turns taken.
fn play_checked(seats: usize, seed: u64) -> Result<u32, TestCaseError> {
    let mut rng = GameRng::new(seed);
    let mut round = RoundState::deal(seats, 1, PlayerId::new(0), &mut rng.fork())
        .map_err(|e| TestCaseError::fail(e.to_string()))?;
    let mut agents: Vec<RandomAgent> = (0..seats)
        .map(|i| RandomAgent::with_rng(format!("p{i}"), rng.fork()))
        .collect();

    while !round.is_round_over() {
        let actor = round.active_player();
        let drawn = round.begin_turn().map_err(|e| TestCaseError::fail(e.to_string()))?;

        let two_card_hands = PlayerId::all(seats)
            .filter(|&p| round.cards_in_hand(p).len() == 2)
            .count();
        prop_assert_eq!(two_card_hands, 1);

        let offered = round.offered_card(drawn);
        let view = PlayerView::new(&round, actor);
        let action = agents[actor.index()]
            .play_card(offered, &view)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert!(legal_action(&round, &action), "agent chose illegal {}", action);

        round.apply_action(&action).map_err(|e| TestCaseError::fail(e.to_string()))?;

        prop_assert_eq!(round.card_count(), Card::DECK_SIZE);
        for player in PlayerId::all(seats) {
            let held = round.cards_in_hand(player).len();
            if round.is_eliminated(player) {
                prop_assert_eq!(held, 0);
            } else if round.deck_size() == 0 {
                // A Prince on the empty deck leaves its target empty-handed.
                prop_assert!(held <= 1);
            } else {
                prop_assert_eq!(held, 1);
            }
        }
    }

    prop_assert!(!round.round_winner().winners().is_empty());
    Ok(round.turn())
}

proptest! {
    #![proptest_config(config())]

    /// Cards are conserved and hand sizes hold at every step of random play.
    #[test]
    fn prop_random_play_keeps_invariants(seats in 2usize..=4, seed in any::<u64>()) {
        common::init_logging();
        let turns = play_checked(seats, seed)?;
        prop_assert!(turns >= 1);
    }

    /// Checking an action never changes the round.
    #[test]
    fn prop_checker_is_pure(
        seed in any::<u64>(),
        card in any_card(),
        target in prop::option::of(0u8..4),
        guess in any_card(),
    ) {
        let mut round = RoundState::deal(3, 1, PlayerId::new(0), &mut GameRng::new(seed)).unwrap();
        round.begin_turn().unwrap();
        let before = round.clone();

        let target = target.map(PlayerId::new).filter(|_| card.requires_target());
        let guess = (card == Card::Guard).then_some(guess);
        let action = Action::from_parts(card, PlayerId::new(0), target, guess).unwrap();

        let first = legal_action(&round, &action);
        let second = legal_action(&round, &action);
        prop_assert_eq!(first, second);
        prop_assert_eq!(&round, &before);
    }

    /// A Guard guessing Guard is never legal, whatever the table.
    #[test]
    fn prop_guard_never_guesses_guard(seed in any::<u64>(), target in 1u8..3) {
        let mut round = RoundState::arranged(
            &[Card::Guard, Card::Priest, Card::Baron],
            vec![Card::Handmaid, Card::Guard],
            PlayerId::new(0),
        )
        .unwrap();
        round.begin_turn().unwrap();

        let action = Action::guard(PlayerId::new(0), Some(PlayerId::new(target)), Card::Guard);
        prop_assert_eq!(check_action(&round, &action), Err(IllegalAction::GuardGuessedGuard));

        // Any other guess at the same target is accepted.
        let guess = Card::ALL[1 + (seed % 7) as usize];
        prop_assert!(legal_action(&round, &Action::guard(PlayerId::new(0), Some(PlayerId::new(target)), guess)));
    }

    /// The random agent always answers with a legal action.
    #[test]
    fn prop_random_agent_answers_legally(seats in 2usize..=4, seed in any::<u64>()) {
        let mut round = RoundState::deal(seats, 1, PlayerId::new(0), &mut GameRng::new(seed)).unwrap();
        let drawn = round.begin_turn().unwrap();
        let offered = round.offered_card(drawn);
        let view = PlayerView::new(&round, PlayerId::new(0));

        let mut agent = RandomAgent::new("rando", seed);
        let action = agent.play_card(offered, &view).unwrap();

        prop_assert_eq!(action.actor(), PlayerId::new(0));
        prop_assert!(legal_action(&round, &action));
    }
}
