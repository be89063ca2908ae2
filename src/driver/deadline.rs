//! Running agent code under a deadline.
//!
//! Each call moves the seat's agent onto a worker thread together with an
//! owned view, and waits for the answer with `recv_timeout`. An agent that
//! overruns is left behind on its thread: the seat gets a `Detached`
//! stand-in that hands calls back to the real agent once the overdue call
//! has returned, and fails them until then.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::agents::Agent;
use crate::cards::Card;
use crate::core::error::AgentError;
use crate::games::love_letter::{Action, PlayerView};

/// Run `call` against the agent in `slot`, giving up after `timeout`.
///
/// On `AgentError::Timeout` the slot holds a `Detached` stand-in with the
/// same name.
pub(crate) fn call_agent<T, F>(slot: &mut Box<dyn Agent>, timeout: Duration, call: F) -> Result<T, AgentError>
where
    T: Send + 'static,
    F: FnOnce(&mut dyn Agent) -> Result<T, AgentError> + Send + 'static,
{
    let name = slot.name().to_string();
    let mut agent = std::mem::replace(slot, Box::new(Detached::lost(name.clone())));

    let (agent_tx, agent_rx) = mpsc::channel();
    let (result_tx, result_rx) = mpsc::channel();
    let spawned = thread::Builder::new()
        .name(format!("agent-{name}"))
        .spawn(move || {
            let result = guarded(|| call(agent.as_mut()));
            // Either receiver may already be gone; the agent is then dropped.
            let _ = agent_tx.send(agent);
            let _ = result_tx.send(result);
        });
    if let Err(err) = spawned {
        return Err(AgentError::Fault(format!("could not start agent thread: {err}")));
    }

    match result_rx.recv_timeout(timeout) {
        Ok(result) => {
            if let Ok(agent) = agent_rx.recv() {
                *slot = agent;
            }
            result
        }
        Err(RecvTimeoutError::Timeout) => {
            debug!(agent = %name, ?timeout, "agent overran its deadline; detaching");
            *slot = Box::new(Detached::waiting(name, agent_rx));
            Err(AgentError::Timeout)
        }
        Err(RecvTimeoutError::Disconnected) => {
            Err(AgentError::Fault("agent thread exited without answering".to_string()))
        }
    }
}

/// Seat stand-in for an agent still stuck in an overdue call.
struct Detached {
    name: String,
    pending: Option<Receiver<Box<dyn Agent>>>,
    agent: Option<Box<dyn Agent>>,
}

impl Detached {
    fn waiting(name: String, pending: Receiver<Box<dyn Agent>>) -> Self {
        Self {
            name,
            pending: Some(pending),
            agent: None,
        }
    }

    fn lost(name: String) -> Self {
        Self {
            name,
            pending: None,
            agent: None,
        }
    }

    /// The real agent, if its overdue call has come back.
    fn resume(&mut self) -> Result<&mut Box<dyn Agent>, AgentError> {
        if self.agent.is_none() {
            if let Some(Ok(agent)) = self.pending.as_ref().map(Receiver::try_recv) {
                debug!(agent = %self.name, "detached agent reclaimed");
                self.agent = Some(agent);
                self.pending = None;
            }
        }
        self.agent
            .as_mut()
            .ok_or_else(|| AgentError::Fault("agent is still busy with an overdue call".to_string()))
    }
}

impl Agent for Detached {
    fn name(&self) -> &str {
        &self.name
    }

    fn new_round(&mut self, view: &PlayerView) -> Result<(), AgentError> {
        self.resume()?.new_round(view)
    }

    fn see(&mut self, action: &Action, view: &PlayerView) -> Result<(), AgentError> {
        self.resume()?.see(action, view)
    }

    fn play_card(&mut self, card: Card, view: &PlayerView) -> Result<Action, AgentError> {
        self.resume()?.play_card(card, view)
    }
}

/// Run agent code, turning a panic into `AgentError::Fault`.
pub(crate) fn guarded<T>(call: impl FnOnce() -> Result<T, AgentError>) -> Result<T, AgentError> {
    panic::catch_unwind(AssertUnwindSafe(call))
        .unwrap_or_else(|payload| Err(AgentError::Fault(panic_message(payload.as_ref()))))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "agent panicked".to_string()
    }
}
