//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::OnceLock;

use love_letter_arena::{Action, Agent, AgentError, Card, PlayerView, RandomAgent};
use tracing_subscriber::{fmt, EnvFilter};

static LOGGING: OnceLock<()> = OnceLock::new();

/// Install a test subscriber once per binary.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// How a `Scripted` agent misbehaves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fault {
    PanicOnPlay,
    PanicOnNewRound,
    ErrorOnPlay,
    ErrorOnSee,
    /// Sleep this many milliseconds before answering.
    Slow(u64),
    /// Answer with an action for the wrong seat.
    WrongActor,
    /// Play a card it does not hold.
    PhantomCard,
    /// Attach a target to a card that takes none.
    Malformed,
}

/// Agent that misbehaves in one way and otherwise plays randomly.
pub struct Scripted {
    name: String,
    fault: Fault,
    fallback: RandomAgent,
}

impl Scripted {
    pub fn boxed(name: &str, fault: Fault) -> Box<dyn Agent> {
        Box::new(Self {
            name: name.to_string(),
            fault,
            fallback: RandomAgent::new(name, 17),
        })
    }
}

impl Agent for Scripted {
    fn name(&self) -> &str {
        &self.name
    }

    fn new_round(&mut self, _view: &PlayerView) -> Result<(), AgentError> {
        if self.fault == Fault::PanicOnNewRound {
            panic!("cannot start");
        }
        Ok(())
    }

    fn see(&mut self, _action: &Action, _view: &PlayerView) -> Result<(), AgentError> {
        if self.fault == Fault::ErrorOnSee {
            return Err(AgentError::Fault("lost track".to_string()));
        }
        Ok(())
    }

    fn play_card(&mut self, card: Card, view: &PlayerView) -> Result<Action, AgentError> {
        match self.fault {
            Fault::PanicOnPlay => panic!("scripted panic"),
            Fault::ErrorOnPlay => Err(AgentError::Fault("scripted error".to_string())),
            Fault::Slow(ms) => {
                std::thread::sleep(std::time::Duration::from_millis(ms));
                Ok(Action::handmaid(view.me))
            }
            Fault::WrongActor => {
                let other = view.opponents().next().unwrap_or(view.me);
                Ok(Action::countess(other))
            }
            Fault::PhantomCard => {
                let missing = Card::ALL
                    .iter()
                    .copied()
                    .find(|c| *c != card && !view.hand.contains(c))
                    .unwrap_or(Card::Princess);
                Action::from_parts(missing, view.me, None, (missing == Card::Guard).then_some(Card::Priest))
                    .map_err(AgentError::from)
            }
            Fault::Malformed => {
                let other = view.opponents().next().unwrap_or(view.me);
                Action::from_parts(Card::Handmaid, view.me, Some(other), None).map_err(AgentError::from)
            }
            Fault::PanicOnNewRound | Fault::ErrorOnSee => self.fallback.play_card(card, view),
        }
    }
}
