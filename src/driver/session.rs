//! Driving a whole match: rounds until a player reaches the token target.

use rustc_hash::FxHashMap;
use tracing::info;

use super::round::run_round;
use crate::agents::{Agent, RandomAgent};
use crate::core::config::MatchConfig;
use crate::core::error::RulesError;
use crate::core::player::PlayerMap;
use crate::core::rng::GameRng;
use crate::games::love_letter::{LoveLetter, MatchState, RoundState};
use crate::rules::{score_map, GameResult, MatchRules};

/// Identity given to seats filled by `fill_roster`.
pub const FILLER_NAME: &str = "rando";

/// Everything a finished match reports.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchOutcome {
    /// Match winners.
    pub result: GameResult,
    /// Final token count per seat.
    pub tokens: PlayerMap<u32>,
    /// Rounds played.
    pub rounds: u32,
    /// Agent identity to score: `1.0` for winners, `0.0` otherwise.
    pub scores: FxHashMap<String, f64>,
}

/// Play a match between `agents`, seated in order.
///
/// Rounds are dealt from forks of one generator seeded with
/// `config.seed`, so the same seed and the same agents replay the same
/// match. The match ends when someone reaches the token target or after
/// `config.max_rounds` rounds, whichever comes first.
pub fn run_match(agents: &mut [Box<dyn Agent>], config: &MatchConfig) -> Result<MatchOutcome, RulesError> {
    let player_count = agents.len();
    let mut state = MatchState::from_config(player_count, config)?;
    let mut rng = GameRng::new(config.seed);
    let rules = LoveLetter;

    info!(
        players = player_count,
        seed = config.seed,
        target = state.target(),
        "match started"
    );

    while !rules.is_match_over(&state) && state.rounds_played() < config.max_rounds {
        let first = state.next_first_player();
        let mut shuffle = rng.fork();
        let mut round = RoundState::deal(player_count, state.rounds_played() + 1, first, &mut shuffle)?;
        let result = run_round(agents, &mut round, config)?;
        state.record_round(first, &result);
    }

    let result = state.match_winner();
    let identities = seat_identities(agents);
    let scores = score_map(&result, &identities);

    info!(
        rounds = state.rounds_played(),
        result = ?result,
        cut_short = !rules.is_match_over(&state),
        "match over"
    );

    Ok(MatchOutcome {
        result,
        tokens: state.tokens().clone(),
        rounds: state.rounds_played(),
        scores,
    })
}

/// Pad `roster` with random agents up to `seats`.
pub fn fill_roster(mut roster: Vec<Box<dyn Agent>>, seats: usize, seed: u64) -> Vec<Box<dyn Agent>> {
    let mut rng = GameRng::new(seed);
    while roster.len() < seats {
        roster.push(Box::new(RandomAgent::with_rng(FILLER_NAME, rng.fork())));
    }
    roster
}

/// Score-map keys by seat. Names shared by several seats get `#seat`.
fn seat_identities(agents: &[Box<dyn Agent>]) -> Vec<String> {
    let names: Vec<&str> = agents.iter().map(|agent| agent.name()).collect();
    names
        .iter()
        .enumerate()
        .map(|(seat, name)| {
            if names.iter().filter(|other| *other == name).count() > 1 {
                format!("{name}#{seat}")
            } else {
                (*name).to_string()
            }
        })
        .collect()
}
