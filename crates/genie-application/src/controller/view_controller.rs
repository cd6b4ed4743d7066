use std::sync::Arc;

use genie_core::config::GenieConfig;
use genie_core::error::Result;
use genie_core::quick_action::QuickActionSet;
use genie_core::session::{ConversationState, Effects, Outcome, SessionEvent, SessionSnapshot};
use tokio::sync::{Mutex, broadcast};
use tokio_util::sync::CancellationToken;

use super::scheduler::{Shared, publish, spawn_steps};

/// Buffered events per subscriber before it starts lagging.
pub const EVENT_CAPACITY: usize = 256;

/// Drives a [`ConversationState`] on the tokio runtime.
///
/// `ViewController` is responsible for:
/// - Serialising every operation through a single lock
/// - Firing scheduled transitions after their delays
/// - Cancelling the in-flight transition chain on reset
/// - Broadcasting [`SessionEvent`]s to renderers
///
/// Cloning is cheap; clones share the same session.
#[derive(Clone)]
pub struct ViewController {
    shared: Arc<Mutex<Shared>>,
    events: broadcast::Sender<SessionEvent>,
    quick_actions: Arc<QuickActionSet>,
}

impl ViewController {
    /// Creates a controller on the map view.
    ///
    /// # Arguments
    ///
    /// * `config` - Timings, initial karma and rule set selection
    /// * `quick_actions` - Buttons offered under the chat input
    ///
    /// An invalid timing configuration is reported but still honoured;
    /// arrival always shows the destination backdrop.
    pub fn new(config: &GenieConfig, quick_actions: QuickActionSet) -> Self {
        if let Err(e) = config.validate() {
            tracing::warn!(target: "genie::controller", "Questionable config: {}", e);
        }
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            shared: Arc::new(Mutex::new(Shared {
                state: ConversationState::new(config),
                chain: CancellationToken::new(),
            })),
            events,
            quick_actions: Arc::new(quick_actions),
        }
    }

    /// Creates a controller with the default configuration and actions.
    pub fn with_defaults() -> Self {
        Self::new(&GenieConfig::default(), QuickActionSet::default())
    }

    /// Subscribes to state change events.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    pub fn quick_actions(&self) -> &QuickActionSet {
        &self.quick_actions
    }

    /// Returns a copy of the current state.
    pub async fn snapshot(&self) -> SessionSnapshot {
        self.shared.lock().await.state.snapshot()
    }

    /// Picks a destination on the map and starts travelling there.
    pub async fn select_destination(&self, id: &str, name: &str) -> Outcome {
        tracing::info!(target: "genie::controller", id, name, "Destination selected");
        self.run(|state| state.select_destination(id, name)).await
    }

    /// Submits a chat utterance.
    pub async fn submit_utterance(&self, text: &str) -> Outcome {
        tracing::debug!(target: "genie::controller", text, "Utterance submitted");
        self.run(|state| state.submit_utterance(text)).await
    }

    /// Submits the canned text of a quick action.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no action has the given id.
    pub async fn run_quick_action(&self, action_id: &str) -> Result<Outcome> {
        let text = self.quick_actions.require(action_id)?.text.clone();
        tracing::debug!(target: "genie::controller", action_id, "Quick action");
        Ok(self.submit_utterance(&text).await)
    }

    /// Leaves the scrapbook for the chat.
    pub async fn back_to_chat(&self) -> Outcome {
        self.run(ConversationState::back_to_chat).await
    }

    /// Replaces the scrapbook photos with the traveller's own.
    pub async fn load_photos(&self, refs: Vec<String>) -> Outcome {
        self.run(move |state| state.load_photos(refs)).await
    }

    /// Replaces the scrapbook photos with the demo shots.
    pub async fn use_demo_photos(&self) -> Outcome {
        self.run(ConversationState::use_demo_photos).await
    }

    /// Returns the scrapbook to its upload screen.
    pub async fn retake_photos(&self) -> Outcome {
        self.run(ConversationState::retake_photos).await
    }

    /// Returns to the map, clearing the session.
    ///
    /// Every pending transition is cancelled before the state is cleared, so
    /// nothing scheduled earlier can fire afterwards.
    pub async fn reset(&self) -> Effects {
        let mut guard = self.shared.lock().await;
        guard.chain.cancel();
        guard.chain = CancellationToken::new();

        let effects = guard.state.reset();
        tracing::info!(
            target: "genie::controller",
            epoch = guard.state.epoch(),
            karma = guard.state.karma(),
            "Session reset"
        );
        publish(&self.events, effects.events.clone());
        effects
    }

    /// Applies an operation under the lock, publishes its events and
    /// schedules its delayed steps on the current chain.
    async fn run<F>(&self, op: F) -> Outcome
    where
        F: FnOnce(&mut ConversationState) -> Outcome,
    {
        let mut guard = self.shared.lock().await;
        match op(&mut guard.state) {
            Ok(effects) => {
                publish(&self.events, effects.events.clone());
                spawn_steps(
                    &self.shared,
                    &self.events,
                    effects.scheduled.clone(),
                    guard.chain.clone(),
                );
                Ok(effects)
            }
            Err(rejection) => {
                tracing::debug!(
                    target: "genie::controller",
                    view = %guard.state.view(),
                    %rejection,
                    "Operation rejected"
                );
                Err(rejection)
            }
        }
    }
}

impl Default for ViewController {
    fn default() -> Self {
        Self::with_defaults()
    }
}
