//! Driving one round with untrusted agents.

use std::time::Duration;

use tracing::{info, warn};

use super::deadline::call_agent;
use crate::agents::Agent;
use crate::cards::Card;
use crate::core::config::MatchConfig;
use crate::core::error::{AgentError, RulesError};
use crate::core::player::PlayerId;
use crate::games::love_letter::{check_action, Action, LoveLetter, PlayerView, RoundState, Table};
use crate::rules::{GameResult, MatchRules};

/// Play `round` to completion.
///
/// `agents[i]` sits in seat `i`. Every agent call runs under
/// `config.decision_timeout`; an agent that overruns it is replaced in its
/// slot by a stand-in until the overdue call returns. Agent misbehaviour
/// never fails the round; an `Err` here means the driver was handed an
/// inconsistent round.
pub fn run_round(
    agents: &mut [Box<dyn Agent>],
    round: &mut RoundState,
    config: &MatchConfig,
) -> Result<GameResult, RulesError> {
    if agents.len() != round.player_count() {
        return Err(RulesError::InvalidPlayerCount(agents.len()));
    }
    let rules = LoveLetter;

    for (seat, agent) in agents.iter_mut().enumerate() {
        let player = PlayerId::new(seat as u8);
        let view = PlayerView::new(round, player);
        let answer = call_agent(agent, config.decision_timeout, move |agent| agent.new_round(&view));
        if let Err(err) = answer {
            forfeit(round, agent.name(), player, &err);
        }
    }

    while !rules.is_round_over(round) {
        let actor = round.active_player();
        let drawn = round.begin_turn()?;
        let offered = round.offered_card(drawn);
        let view = PlayerView::new(round, actor);

        let agent = &mut agents[actor.index()];
        match decide(agent, offered, view, round, config.decision_timeout) {
            Ok(action) => {
                rules.apply_action(round, &action)?;
                notify(agents, round, action, config.decision_timeout);
            }
            Err(err) => forfeit(round, agent.name(), actor, &err),
        }
    }

    let result = rules.round_winner(round);
    info!(
        round = round.round(),
        turns = round.turn(),
        deck_left = round.deck_size(),
        result = ?result,
        "round over"
    );
    Ok(result)
}

/// Ask the active agent for an action and vet it.
fn decide(
    agent: &mut Box<dyn Agent>,
    offered: Card,
    view: PlayerView,
    round: &RoundState,
    timeout: Duration,
) -> Result<Action, AgentError> {
    let action = call_agent(agent, timeout, move |agent| agent.play_card(offered, &view))?;
    check_action(round, &action)?;
    Ok(action)
}

/// Show an applied action to every seat.
fn notify(agents: &mut [Box<dyn Agent>], round: &mut RoundState, action: Action, timeout: Duration) {
    for (seat, agent) in agents.iter_mut().enumerate() {
        let player = PlayerId::new(seat as u8);
        let view = PlayerView::new(round, player);
        if let Err(err) = call_agent(agent, timeout, move |agent| agent.see(&action, &view)) {
            forfeit(round, agent.name(), player, &err);
        }
    }
}

fn forfeit(round: &mut RoundState, name: &str, player: PlayerId, err: &AgentError) {
    if round.is_eliminated(player) {
        return;
    }
    if round.is_round_over() {
        warn!(agent = name, player = %player, error = %err, "agent fault after round end ignored");
        return;
    }
    warn!(agent = name, player = %player, error = %err, "agent eliminated for the round");
    round.eliminate(player, err.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::RandomAgent;

    #[test]
    fn test_roster_must_fill_table() {
        let mut agents: Vec<Box<dyn Agent>> = vec![Box::new(RandomAgent::new("solo", 1))];
        let mut round = RoundState::arranged(&[Card::Guard, Card::Priest], vec![Card::Baron], PlayerId::new(0)).unwrap();

        assert_eq!(
            run_round(&mut agents, &mut round, &MatchConfig::default()),
            Err(RulesError::InvalidPlayerCount(1))
        );
    }
}
