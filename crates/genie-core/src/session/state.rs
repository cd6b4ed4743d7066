//! The conversation and view state machine.
//!
//! `ConversationState` is synchronous and clock-free. Operations mutate the
//! state, return the events they produced and any [`ScheduledStep`]s the
//! caller has to fire later through [`ConversationState::apply`]. Every step
//! carries the epoch it was scheduled in; [`ConversationState::reset`] bumps
//! the epoch so steps from an abandoned chain are dropped.

use serde::Serialize;

use super::transition::{Effects, Outcome, Rejection, ScheduledAction, ScheduledStep};
use super::{ChatMessage, SessionEvent};
use crate::config::{GenieConfig, TimingConfig};
use crate::destination::{Background, Destination};
use crate::rules::{Reply, RuleBook, is_scrapbook_request, welcome_reply};
use crate::scrapbook::{PhotoSet, ScrapbookStage};
use crate::view::ViewMode;

/// Read-only copy of everything a renderer needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub view: ViewMode,
    pub messages: Vec<ChatMessage>,
    pub loading: bool,
    pub karma: u32,
    pub step: u32,
    pub background: Background,
    pub background_ref: &'static str,
    /// Display name of the place the traveller went to, if any.
    pub destination: Option<String>,
    pub scrapbook_stage: ScrapbookStage,
    pub photos: PhotoSet,
}

/// State owned by a single conversation controller.
#[derive(Debug, Clone)]
pub struct ConversationState {
    view: ViewMode,
    messages: Vec<ChatMessage>,
    loading: bool,
    karma: u32,
    step: u32,
    background: Background,
    destination: Option<String>,
    /// Backdrop to restore when leaving the scrapbook.
    background_before_scrapbook: Option<Background>,
    scrapbook_stage: ScrapbookStage,
    photos: PhotoSet,
    draft: String,
    epoch: u64,
    rules: RuleBook,
    timing: TimingConfig,
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::new(&GenieConfig::default())
    }
}

impl ConversationState {
    pub fn new(config: &GenieConfig) -> Self {
        Self {
            view: ViewMode::Map,
            messages: Vec::new(),
            loading: false,
            karma: config.initial_karma,
            step: 0,
            background: Background::Default,
            destination: None,
            background_before_scrapbook: None,
            scrapbook_stage: ScrapbookStage::Upload,
            photos: PhotoSet::default(),
            draft: String::new(),
            epoch: 0,
            rules: RuleBook::from_flag(config.extended_rules),
            timing: config.timing,
        }
    }

    // ============================================================================
    // Accessors
    // ============================================================================

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn karma(&self) -> u32 {
        self.karma
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn background(&self) -> Background {
        self.background
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn photos(&self) -> &PhotoSet {
        &self.photos
    }

    pub fn scrapbook_stage(&self) -> ScrapbookStage {
        self.scrapbook_stage
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn rules(&self) -> &RuleBook {
        &self.rules
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            view: self.view,
            messages: self.messages.clone(),
            loading: self.loading,
            karma: self.karma,
            step: self.step,
            background: self.background,
            background_ref: self.background.image_ref(),
            destination: self.destination.clone(),
            scrapbook_stage: self.scrapbook_stage,
            photos: self.photos.clone(),
        }
    }

    // ============================================================================
    // Operations
    // ============================================================================

    /// Starts the trip to a destination picked on the map.
    ///
    /// Unknown ids travel with the default backdrop. Ignored outside the map.
    pub fn select_destination(&mut self, id: &str, name: &str) -> Outcome {
        if !self.view.accepts_destination() {
            return Err(self.wrong_view(ViewMode::Map));
        }

        let mut effects = Effects::default();
        let background = Destination::background_for(id);
        self.destination = Some(name.to_string());
        self.set_view(ViewMode::Traveling, &mut effects);

        effects.schedule(
            self.timing.background_swap(),
            self.epoch,
            ScheduledAction::SwapBackground { background },
        );
        effects.schedule(
            self.timing.arrival(),
            self.epoch,
            ScheduledAction::Arrive {
                place_name: name.to_string(),
                background,
            },
        );
        Ok(effects)
    }

    /// Replaces the text sitting in the chat input.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Submits whatever is in the chat input.
    pub fn submit_draft(&mut self) -> Outcome {
        let text = self.draft.clone();
        self.submit_utterance(&text)
    }

    /// Handles a chat submission.
    ///
    /// The user message is appended immediately. Scrapbook requests start the
    /// scrapbook transition; anything else enters the pending window and gets
    /// its reply from [`ScheduledAction::DeliverReply`].
    pub fn submit_utterance(&mut self, text: &str) -> Outcome {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(Rejection::EmptyInput);
        }
        if self.loading {
            return Err(Rejection::Busy);
        }
        if !self.view.accepts_utterances() {
            return Err(self.wrong_view(ViewMode::Chat));
        }

        let mut effects = Effects::default();
        self.draft.clear();
        self.append(ChatMessage::user(text), &mut effects);

        if is_scrapbook_request(trimmed) {
            self.background_before_scrapbook = Some(self.background);
            self.set_view(ViewMode::Traveling, &mut effects);
            effects.schedule(
                self.timing.scrapbook_transition(),
                self.epoch,
                ScheduledAction::EnterScrapbook,
            );
            return Ok(effects);
        }

        self.set_loading(true, &mut effects);
        effects.schedule(
            self.timing.response_latency(),
            self.epoch,
            ScheduledAction::DeliverReply {
                utterance: trimmed.to_string(),
            },
        );
        Ok(effects)
    }

    /// Fires a previously scheduled step.
    ///
    /// Steps from an older epoch, or whose precondition no longer holds,
    /// produce no effects.
    pub fn apply(&mut self, step: &ScheduledStep) -> Effects {
        let mut effects = Effects::default();
        if step.epoch != self.epoch {
            return effects;
        }

        match &step.action {
            ScheduledAction::SwapBackground { background } => {
                if self.view == ViewMode::Traveling {
                    self.set_background(*background, &mut effects);
                }
            }
            ScheduledAction::Arrive {
                place_name,
                background,
            } => {
                if self.view == ViewMode::Traveling {
                    if self.background != *background {
                        self.set_background(*background, &mut effects);
                    }
                    self.set_view(ViewMode::Chat, &mut effects);
                    self.deliver(welcome_reply(place_name), &mut effects);
                }
            }
            ScheduledAction::DeliverReply { utterance } => {
                if self.loading && self.view == ViewMode::Chat {
                    let reply = self.rules.resolve(utterance);
                    self.deliver(reply, &mut effects);
                    self.set_loading(false, &mut effects);
                }
            }
            ScheduledAction::EnterScrapbook => {
                if self.view == ViewMode::Traveling {
                    self.set_view(ViewMode::Scrapbook, &mut effects);
                    self.set_background(Background::SCENIC, &mut effects);
                    self.replace_photos(ScrapbookStage::Upload, PhotoSet::default(), &mut effects);
                }
            }
        }
        effects
    }

    /// Leaves the scrapbook and restores the backdrop shown before it.
    pub fn back_to_chat(&mut self) -> Outcome {
        self.require_view(ViewMode::Scrapbook)?;

        let mut effects = Effects::default();
        let background = self.background_before_scrapbook.take().unwrap_or_default();
        self.set_view(ViewMode::Chat, &mut effects);
        self.set_background(background, &mut effects);
        Ok(effects)
    }

    /// Returns to the map and clears the session.
    ///
    /// Karma is kept. Every step scheduled before the reset becomes stale.
    pub fn reset(&mut self) -> Effects {
        let mut effects = Effects::default();
        self.epoch += 1;

        self.messages.clear();
        self.destination = None;
        self.background_before_scrapbook = None;
        self.draft.clear();
        effects.push(SessionEvent::SessionReset);

        self.set_loading(false, &mut effects);
        self.set_view(ViewMode::Map, &mut effects);
        self.set_background(Background::Default, &mut effects);
        if self.step != 0 {
            self.step = 0;
            effects.push(SessionEvent::StepChanged { step: 0 });
        }
        if !self.photos.is_empty() || self.scrapbook_stage != ScrapbookStage::Upload {
            self.replace_photos(ScrapbookStage::Upload, PhotoSet::default(), &mut effects);
        }
        effects
    }

    /// Replaces the photo set with the traveller's own pictures.
    pub fn load_photos(&mut self, refs: Vec<String>) -> Outcome {
        self.require_view(ViewMode::Scrapbook)?;
        if refs.is_empty() {
            return Err(Rejection::EmptySelection);
        }

        let mut effects = Effects::default();
        self.replace_photos(ScrapbookStage::View, PhotoSet::new(refs), &mut effects);
        Ok(effects)
    }

    /// Replaces the photo set with the demo shots.
    pub fn use_demo_photos(&mut self) -> Outcome {
        self.require_view(ViewMode::Scrapbook)?;

        let mut effects = Effects::default();
        self.replace_photos(ScrapbookStage::View, PhotoSet::demo(), &mut effects);
        Ok(effects)
    }

    /// Goes back to the upload screen of the scrapbook.
    pub fn retake_photos(&mut self) -> Outcome {
        self.require_view(ViewMode::Scrapbook)?;

        let mut effects = Effects::default();
        self.replace_photos(ScrapbookStage::Upload, PhotoSet::default(), &mut effects);
        Ok(effects)
    }

    // ============================================================================
    // Internal helpers
    // ============================================================================

    fn require_view(&self, expected: ViewMode) -> Result<(), Rejection> {
        if self.view == expected {
            Ok(())
        } else {
            Err(self.wrong_view(expected))
        }
    }

    fn wrong_view(&self, expected: ViewMode) -> Rejection {
        Rejection::WrongView {
            expected,
            actual: self.view,
        }
    }

    fn set_view(&mut self, to: ViewMode, effects: &mut Effects) {
        if self.view != to {
            let from = std::mem::replace(&mut self.view, to);
            effects.push(SessionEvent::ViewChanged { from, to });
        }
    }

    fn set_background(&mut self, background: Background, effects: &mut Effects) {
        self.background = background;
        effects.push(SessionEvent::background(background));
    }

    fn set_loading(&mut self, loading: bool, effects: &mut Effects) {
        if self.loading != loading {
            self.loading = loading;
            effects.push(SessionEvent::LoadingChanged { loading });
        }
    }

    fn append(&mut self, message: ChatMessage, effects: &mut Effects) {
        self.messages.push(message.clone());
        effects.push(SessionEvent::MessageAppended { message });
    }

    fn deliver(&mut self, reply: Reply, effects: &mut Effects) {
        self.append(ChatMessage::assistant(reply.content, reply.card), effects);

        if reply.karma_reward > 0 {
            self.karma = self.karma.saturating_add(reply.karma_reward);
            effects.push(SessionEvent::KarmaChanged {
                karma: self.karma,
                delta: reply.karma_reward,
            });
        }
        if let Some(step) = reply.step {
            self.step = step;
            effects.push(SessionEvent::StepChanged { step });
        }
    }

    fn replace_photos(&mut self, stage: ScrapbookStage, photos: PhotoSet, effects: &mut Effects) {
        self.scrapbook_stage = stage;
        self.photos = photos;
        effects.push(SessionEvent::PhotosChanged {
            stage,
            count: self.photos.len(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Card;
    use crate::session::MessageRole;

    /// Fires every scheduled step in delay order, collecting their effects.
    fn run_all(state: &mut ConversationState, effects: Effects) -> Vec<SessionEvent> {
        let mut events = effects.events;
        let mut steps = effects.scheduled;
        steps.sort_by_key(|s| s.delay);
        for step in steps {
            events.extend(state.apply(&step).events);
        }
        events
    }

    fn in_chat() -> ConversationState {
        let mut state = ConversationState::default();
        let effects = state.select_destination("paris", "Paris").unwrap();
        run_all(&mut state, effects);
        assert_eq!(state.view(), ViewMode::Chat);
        state
    }

    fn views(events: &[SessionEvent]) -> Vec<ViewMode> {
        events
            .iter()
            .filter_map(|e| match e {
                SessionEvent::ViewChanged { to, .. } => Some(*to),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let state = ConversationState::default();
        assert_eq!(state.view(), ViewMode::Map);
        assert!(state.messages().is_empty());
        assert_eq!(state.karma(), 120);
        assert_eq!(state.background(), Background::Default);
    }

    #[test]
    fn test_select_destination_schedules_swap_then_arrival() {
        let mut state = ConversationState::default();
        let effects = state.select_destination("paris", "Paris").unwrap();

        assert_eq!(state.view(), ViewMode::Traveling);
        assert_eq!(effects.scheduled.len(), 2);
        assert_eq!(effects.scheduled[0].delay.as_millis(), 1000);
        assert_eq!(
            effects.scheduled[0].action,
            ScheduledAction::SwapBackground {
                background: Background::Paris
            }
        );
        assert_eq!(effects.scheduled[1].delay.as_millis(), 2500);
    }

    #[test]
    fn test_arrival_appends_single_welcome() {
        let state = in_chat();
        assert_eq!(state.messages().len(), 1);
        let welcome = &state.messages()[0];
        assert_eq!(welcome.role, MessageRole::Assistant);
        assert!(welcome.content.contains("Welcome to Paris!"));
        assert!(matches!(
            &welcome.card,
            Some(Card::MoodItinerary { place, .. }) if place == "Paris"
        ));
        assert_eq!(state.background(), Background::Paris);
    }

    #[test]
    fn test_unknown_destination_selects_default_background_once() {
        let mut state = ConversationState::default();
        let effects = state.select_destination("atlantis", "Atlantis").unwrap();
        let events = run_all(&mut state, effects);

        let backgrounds: Vec<Background> = events
            .iter()
            .filter_map(|e| match e {
                SessionEvent::BackgroundChanged { background, .. } => Some(*background),
                _ => None,
            })
            .collect();
        assert_eq!(backgrounds, vec![Background::Default]);
        assert_eq!(state.view(), ViewMode::Chat);
    }

    #[test]
    fn test_select_destination_outside_map_is_rejected() {
        let mut state = ConversationState::default();
        state.select_destination("paris", "Paris").unwrap();
        let err = state.select_destination("tokyo", "Tokyo").unwrap_err();
        assert_eq!(
            err,
            Rejection::WrongView {
                expected: ViewMode::Map,
                actual: ViewMode::Traveling
            }
        );
    }

    #[test]
    fn test_arrival_shows_destination_backdrop_when_swap_is_late() {
        let mut config = GenieConfig::default();
        config.timing.background_swap_ms = 3000;
        config.timing.arrival_ms = 2500;
        let mut state = ConversationState::new(&config);

        let effects = state.select_destination("paris", "Paris").unwrap();
        let events = run_all(&mut state, effects);

        assert_eq!(state.view(), ViewMode::Chat);
        assert_eq!(state.background(), Background::Paris);
        let backgrounds = events
            .iter()
            .filter(|e| matches!(e, SessionEvent::BackgroundChanged { .. }))
            .count();
        assert_eq!(backgrounds, 1);
    }

    #[test]
    fn test_user_message_keeps_text_as_typed() {
        let mut state = in_chat();
        let effects = state.submit_utterance("  any scam here? ").unwrap();

        assert_eq!(state.messages().last().unwrap().content, "  any scam here? ");
        assert_eq!(
            effects.scheduled[0].action,
            ScheduledAction::DeliverReply {
                utterance: "any scam here?".to_string()
            }
        );
    }

    #[test]
    fn test_blank_input_has_no_side_effects() {
        let mut state = in_chat();
        let before = state.snapshot();
        for text in ["", "   ", "\t\n"] {
            assert_eq!(state.submit_utterance(text), Err(Rejection::EmptyInput));
        }
        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn test_scam_reply_adds_karma() {
        let mut state = in_chat();
        let karma_before = state.karma();

        let effects = state.submit_utterance("scam").unwrap();
        assert!(state.loading());
        assert_eq!(state.messages().last().unwrap().role, MessageRole::User);
        run_all(&mut state, effects);

        assert!(!state.loading());
        let reply = state.messages().last().unwrap();
        assert_eq!(reply.content, "⚠️ CAUTION: Alerts found.");
        assert!(matches!(
            &reply.card,
            Some(Card::ScamAlert { location, risk_level, report_count: 12, .. })
                if location == "Shinjuku" && risk_level == "High"
        ));
        assert_eq!(state.karma(), karma_before + 5);
    }

    #[test]
    fn test_submission_while_pending_is_rejected() {
        let mut state = in_chat();
        let pending = state.submit_utterance("budget").unwrap();
        assert_eq!(state.submit_utterance("scam"), Err(Rejection::Busy));

        run_all(&mut state, pending);
        assert!(state.submit_utterance("scam").is_ok());
    }

    #[test]
    fn test_scrapbook_request_goes_through_traveling() {
        let mut state = in_chat();
        let messages_before = state.messages().len();

        let effects = state.submit_utterance("I want a scrapbook").unwrap();
        assert!(!state.loading());
        let events = run_all(&mut state, effects);

        assert_eq!(views(&events), vec![ViewMode::Traveling, ViewMode::Scrapbook]);
        assert_eq!(state.background(), Background::SCENIC);
        // Only the user's own message was added.
        assert_eq!(state.messages().len(), messages_before + 1);
        assert!(state.messages().last().unwrap().is_user());
    }

    #[test]
    fn test_back_to_chat_restores_previous_background() {
        let mut state = in_chat();
        let effects = state.submit_utterance("memory lane").unwrap();
        run_all(&mut state, effects);

        state.back_to_chat().unwrap();
        assert_eq!(state.view(), ViewMode::Chat);
        assert_eq!(state.background(), Background::Paris);
    }

    #[test]
    fn test_reset_from_scrapbook() {
        let mut state = in_chat();
        let effects = state.submit_utterance("scrapbook").unwrap();
        run_all(&mut state, effects);
        state.use_demo_photos().unwrap();

        let effects = state.reset();
        assert_eq!(effects.events[0], SessionEvent::SessionReset);
        assert_eq!(state.view(), ViewMode::Map);
        assert!(state.messages().is_empty());
        assert_eq!(state.background(), Background::Default);
        assert!(state.photos().is_empty());
    }

    #[test]
    fn test_reset_keeps_karma_and_drops_stale_steps() {
        let mut state = in_chat();
        let pending = state.submit_utterance("check for scams").unwrap();
        state.reset();

        for step in &pending.scheduled {
            assert!(state.apply(step).is_empty());
        }
        assert!(state.messages().is_empty());
        assert_eq!(state.karma(), 120);

        let mut state = in_chat();
        let effects = state.submit_utterance("scam").unwrap();
        run_all(&mut state, effects);
        state.reset();
        assert_eq!(state.karma(), 125);
    }

    #[test]
    fn test_reset_mid_travel_cancels_arrival() {
        let mut state = ConversationState::default();
        let trip = state.select_destination("tokyo", "Tokyo").unwrap();
        state.reset();

        let events = run_all(&mut state, Effects {
            events: vec![],
            scheduled: trip.scheduled,
        });
        assert!(events.is_empty());
        assert_eq!(state.view(), ViewMode::Map);
        assert_eq!(state.background(), Background::Default);
    }

    #[test]
    fn test_mood_moves_step() {
        let mut state = in_chat();
        let effects = state.submit_utterance("Plan a trip based on my mood").unwrap();
        run_all(&mut state, effects);
        assert_eq!(state.step(), 1);
        state.reset();
        assert_eq!(state.step(), 0);
    }

    #[test]
    fn test_draft_is_cleared_on_submit() {
        let mut state = in_chat();
        state.set_draft("budget please");
        state.submit_draft().unwrap();
        assert_eq!(state.draft(), "");
        assert_eq!(state.messages().last().unwrap().content, "budget please");
    }

    #[test]
    fn test_photo_operations_need_scrapbook() {
        let mut state = in_chat();
        assert!(matches!(
            state.use_demo_photos(),
            Err(Rejection::WrongView { .. })
        ));

        let effects = state.submit_utterance("scrapbook").unwrap();
        run_all(&mut state, effects);
        assert_eq!(state.load_photos(vec![]), Err(Rejection::EmptySelection));

        state
            .load_photos(vec!["file:///a.jpg".into(), "file:///b.jpg".into()])
            .unwrap();
        assert_eq!(state.scrapbook_stage(), ScrapbookStage::View);
        assert_eq!(state.photos().len(), 2);

        state.retake_photos().unwrap();
        assert_eq!(state.scrapbook_stage(), ScrapbookStage::Upload);
        assert!(state.photos().is_empty());
    }

    #[test]
    fn test_extended_rules_flag() {
        let config = GenieConfig {
            extended_rules: true,
            ..GenieConfig::default()
        };
        let mut state = ConversationState::new(&config);
        let effects = state.select_destination("bali", "Bali").unwrap();
        run_all(&mut state, effects);

        let effects = state.submit_utterance("any flights to paris?").unwrap();
        run_all(&mut state, effects);
        assert!(matches!(
            state.messages().last().unwrap().card,
            Some(Card::FlightFinder { .. })
        ));
    }
}
