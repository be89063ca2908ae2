//! Random agent - plays a uniformly sampled legal action.
//!
//! The reference `Agent`. Every decision samples a whole action at random
//! (which card, which target, which guess) and resamples until the
//! legality checker accepts it. Because a target-requiring card may be
//! played without a target when nobody can be targeted, some legal action
//! always exists on the agent's turn, so the loop ends quickly; the hard
//! cap turns a rules bug into an error instead of a hang.

use tracing::trace;

use super::agent::Agent;
use crate::cards::Card;
use crate::core::error::AgentError;
use crate::core::player::PlayerId;
use crate::core::rng::GameRng;
use crate::games::love_letter::{check_action, Action, PlayerView, Table};

/// Agent that plays random legal actions.
///
/// Deterministic for a given seed:
///
/// ```
/// use love_letter_arena::agents::{Agent, RandomAgent};
///
/// let agent = RandomAgent::new("rando", 7);
/// assert_eq!(agent.name(), "rando");
/// ```
#[derive(Clone, Debug)]
pub struct RandomAgent {
    name: String,
    rng: GameRng,
    actions_seen: u32,
}

impl RandomAgent {
    /// Upper bound on samples per decision.
    pub const MAX_ATTEMPTS: u32 = 1000;

    /// Create a random agent with its own seeded generator.
    pub fn new(name: impl Into<String>, seed: u64) -> Self {
        Self::with_rng(name, GameRng::new(seed))
    }

    /// Create a random agent drawing from `rng`.
    pub fn with_rng(name: impl Into<String>, rng: GameRng) -> Self {
        Self {
            name: name.into(),
            rng,
            actions_seen: 0,
        }
    }

    /// Actions observed through `see` since the current round began.
    #[must_use]
    pub fn actions_seen(&self) -> u32 {
        self.actions_seen
    }

    /// Sample one candidate action, legal or not.
    fn sample(&mut self, me: PlayerId, offered: Card, held: Card, player_count: usize) -> Action {
        let play = if self.rng.gen_bool(0.5) { offered } else { held };

        // One extra slot stands for "no target".
        let pick = self.rng.gen_range_usize(0..player_count + 1);
        let target = (pick < player_count).then(|| PlayerId::new(pick as u8));

        let guess = Card::ALL[1 + self.rng.gen_range_usize(0..Card::ALL.len() - 1)];

        match play {
            Card::Guard => Action::guard(me, target, guess),
            Card::Priest => Action::priest(me, target),
            Card::Baron => Action::baron(me, target),
            Card::Handmaid => Action::handmaid(me),
            Card::Prince => Action::prince(me, target),
            Card::King => Action::king(me, target),
            Card::Countess => Action::countess(me),
            Card::Princess => Action::princess(me),
        }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn new_round(&mut self, _view: &PlayerView) -> Result<(), AgentError> {
        self.actions_seen = 0;
        Ok(())
    }

    fn see(&mut self, _action: &Action, _view: &PlayerView) -> Result<(), AgentError> {
        self.actions_seen += 1;
        Ok(())
    }

    fn play_card(&mut self, card: Card, view: &PlayerView) -> Result<Action, AgentError> {
        let me = view.me;
        let held = view.other_card(card).unwrap_or(card);
        let player_count = view.player_count();

        for attempt in 1..=Self::MAX_ATTEMPTS {
            let action = self.sample(me, card, held, player_count);
            match check_action(view, &action) {
                Ok(()) => {
                    trace!(agent = %self.name, seen = self.actions_seen, attempt, %action, "chose action");
                    return Ok(action);
                }
                Err(reason) => {
                    trace!(agent = %self.name, seen = self.actions_seen, attempt, %reason, "resampling")
                }
            }
        }

        Err(AgentError::RetriesExhausted(Self::MAX_ATTEMPTS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::love_letter::{legal_action, RoundState};

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);

    fn started(hands: &[Card], deck: Vec<Card>) -> (RoundState, Card) {
        let mut round = RoundState::arranged(hands, deck, P0).unwrap();
        let drawn = round.begin_turn().unwrap();
        (round, drawn)
    }

    #[test]
    fn test_returns_legal_action() {
        let (round, drawn) = started(&[Card::Guard, Card::Priest], vec![Card::Baron, Card::Guard]);
        let view = PlayerView::new(&round, P0);
        let mut agent = RandomAgent::new("rando", 1);

        for _ in 0..50 {
            let action = agent.play_card(drawn, &view).unwrap();
            assert!(legal_action(&round, &action));
            assert_ne!(action.guess(), Some(Card::Guard));
        }
    }

    #[test]
    fn test_respects_forced_countess() {
        let (round, drawn) = started(&[Card::Countess, Card::Guard], vec![Card::Guard, Card::King]);
        let offered = round.offered_card(drawn);
        assert_eq!(offered, Card::Countess);

        let view = PlayerView::new(&round, P0);
        let mut agent = RandomAgent::new("rando", 3);
        for _ in 0..20 {
            assert_eq!(agent.play_card(offered, &view).unwrap(), Action::countess(P0));
        }
    }

    #[test]
    fn test_plays_without_target_when_opponent_protected() {
        let mut round = RoundState::arranged(
            &[Card::King, Card::Guard],
            vec![Card::Baron, Card::Guard, Card::Handmaid, Card::Guard],
            P1,
        )
        .unwrap();
        round.begin_turn().unwrap();
        round.apply_action(&Action::guard(P1, Some(P0), Card::Princess)).unwrap();
        // Player 0 draws Handmaid, plays it; player 1 draws then faces a protected table.
        round.begin_turn().unwrap();
        round.apply_action(&Action::handmaid(P0)).unwrap();
        let drawn = round.begin_turn().unwrap();

        let view = PlayerView::new(&round, P1);
        let mut agent = RandomAgent::new("rando", 11);
        let action = agent.play_card(drawn, &view).unwrap();

        assert_eq!(action.target(), None);
        assert!(legal_action(&round, &action));
    }

    #[test]
    fn test_same_seed_same_choices() {
        let (round, drawn) = started(&[Card::Prince, Card::Priest], vec![Card::Baron, Card::Guard]);
        let view = PlayerView::new(&round, P0);

        let mut a = RandomAgent::new("a", 99);
        let mut b = RandomAgent::new("b", 99);
        for _ in 0..20 {
            assert_eq!(a.play_card(drawn, &view).unwrap(), b.play_card(drawn, &view).unwrap());
        }
    }

    #[test]
    fn test_counts_actions_seen_per_round() {
        let (round, _) = started(&[Card::Guard, Card::Priest], vec![Card::Baron, Card::Guard]);
        let view = PlayerView::new(&round, P1);
        let mut agent = RandomAgent::new("rando", 8);

        agent.new_round(&view).unwrap();
        agent.see(&Action::handmaid(P0), &view).unwrap();
        agent.see(&Action::countess(P0), &view).unwrap();
        assert_eq!(agent.actions_seen(), 2);

        agent.new_round(&view).unwrap();
        assert_eq!(agent.actions_seen(), 0);
    }

    #[test]
    fn test_exhausts_when_nothing_is_legal() {
        // A view of someone else's turn: nothing this agent builds is legal.
        let (round, drawn) = started(&[Card::Guard, Card::Priest], vec![Card::Baron, Card::Guard]);
        let view = PlayerView::new(&round, P1);
        let mut agent = RandomAgent::new("rando", 5);

        assert_eq!(
            agent.play_card(drawn, &view),
            Err(AgentError::RetriesExhausted(RandomAgent::MAX_ATTEMPTS))
        );
    }
}
