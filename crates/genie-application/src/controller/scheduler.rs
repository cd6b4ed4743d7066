use std::sync::Arc;

use genie_core::session::{ConversationState, ScheduledStep, SessionEvent};
use tokio::sync::{Mutex, broadcast};
use tokio_util::sync::CancellationToken;

/// State guarded by the controller's single lock.
pub(super) struct Shared {
    pub state: ConversationState,
    /// Token of the current transition chain; cancelled and replaced on reset.
    pub chain: CancellationToken,
}

/// Sends a batch of events to every subscriber.
///
/// Must be called while holding the state lock so batches from concurrent
/// timers never interleave.
pub(super) fn publish(events: &broadcast::Sender<SessionEvent>, batch: Vec<SessionEvent>) {
    for event in batch {
        // No subscribers is fine; the snapshot is still authoritative.
        let _ = events.send(event);
    }
}

/// Spawns one timer task per step.
///
/// Each task sleeps for the step's delay and then applies it, unless the
/// chain token is cancelled first.
pub(super) fn spawn_steps(
    shared: &Arc<Mutex<Shared>>,
    events: &broadcast::Sender<SessionEvent>,
    steps: Vec<ScheduledStep>,
    token: CancellationToken,
) {
    for step in steps {
        let shared = Arc::clone(shared);
        let events = events.clone();
        let token = token.clone();

        tracing::debug!(
            target: "genie::scheduler",
            action = step.action.name(),
            delay_ms = step.delay.as_millis() as u64,
            epoch = step.epoch,
            "Scheduling transition"
        );

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    tracing::debug!(
                        target: "genie::scheduler",
                        action = step.action.name(),
                        "Transition cancelled"
                    );
                }
                _ = tokio::time::sleep(step.delay) => {
                    let mut guard = shared.lock().await;
                    let effects = guard.state.apply(&step);
                    if effects.is_empty() {
                        tracing::debug!(
                            target: "genie::scheduler",
                            action = step.action.name(),
                            epoch = step.epoch,
                            "Stale transition ignored"
                        );
                    } else {
                        tracing::info!(
                            target: "genie::scheduler",
                            action = step.action.name(),
                            view = %guard.state.view(),
                            "Transition applied"
                        );
                    }
                    publish(&events, effects.events);
                }
            }
        });
    }
}
