use std::time::Duration;

use genie_application::ViewController;
use genie_core::card::Card;
use genie_core::config::GenieConfig;
use genie_core::destination::Background;
use genie_core::quick_action::QuickActionSet;
use genie_core::session::{MessageRole, Rejection, SessionEvent};
use genie_core::view::ViewMode;
use tokio::sync::broadcast;
use tokio::time::sleep;

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Drains every event currently buffered for the receiver.
fn drain(rx: &mut broadcast::Receiver<SessionEvent>) -> Vec<SessionEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

fn view_sequence(events: &[SessionEvent]) -> Vec<ViewMode> {
    events
        .iter()
        .filter_map(|e| match e {
            SessionEvent::ViewChanged { to, .. } => Some(*to),
            _ => None,
        })
        .collect()
}

async fn arrive(controller: &ViewController, id: &str, name: &str) {
    controller.select_destination(id, name).await.unwrap();
    sleep(ms(2600)).await;
    assert_eq!(controller.snapshot().await.view, ViewMode::Chat);
}

#[tokio::test(start_paused = true)]
async fn test_travel_timeline() {
    let controller = ViewController::with_defaults();

    controller.select_destination("paris", "Paris").await.unwrap();
    assert_eq!(controller.snapshot().await.view, ViewMode::Traveling);
    assert_eq!(controller.snapshot().await.background, Background::Default);

    sleep(ms(1100)).await;
    let snapshot = controller.snapshot().await;
    assert_eq!(snapshot.view, ViewMode::Traveling);
    assert_eq!(snapshot.background, Background::Paris);
    assert!(snapshot.messages.is_empty());

    sleep(ms(1500)).await;
    let snapshot = controller.snapshot().await;
    assert_eq!(snapshot.view, ViewMode::Chat);
    assert_eq!(snapshot.messages.len(), 1);
    assert!(snapshot.messages[0].content.contains("Welcome to Paris!"));
    assert!(matches!(
        &snapshot.messages[0].card,
        Some(Card::MoodItinerary { place, .. }) if place == "Paris"
    ));
}

#[tokio::test(start_paused = true)]
async fn test_scam_reply_after_latency() {
    let controller = ViewController::with_defaults();
    arrive(&controller, "tokyo", "Tokyo").await;
    let karma_before = controller.snapshot().await.karma;

    controller.submit_utterance("scam").await.unwrap();
    let pending = controller.snapshot().await;
    assert!(pending.loading);
    assert_eq!(pending.messages.last().unwrap().role, MessageRole::User);

    sleep(ms(1100)).await;
    let snapshot = controller.snapshot().await;
    assert!(!snapshot.loading);
    let reply = snapshot.messages.last().unwrap();
    assert_eq!(reply.content, "⚠️ CAUTION: Alerts found.");
    assert!(matches!(
        &reply.card,
        Some(Card::ScamAlert { location, report_count: 12, .. }) if location == "Shinjuku"
    ));
    assert_eq!(snapshot.karma, karma_before + 5);
}

#[tokio::test(start_paused = true)]
async fn test_pending_submission_blocks_the_next() {
    let controller = ViewController::with_defaults();
    arrive(&controller, "bali", "Bali").await;

    controller.submit_utterance("budget").await.unwrap();
    assert_eq!(
        controller.submit_utterance("local").await,
        Err(Rejection::Busy)
    );

    sleep(ms(1100)).await;
    controller.submit_utterance("local").await.unwrap();
    sleep(ms(1100)).await;

    let contents: Vec<String> = controller
        .snapshot()
        .await
        .messages
        .into_iter()
        .skip(1)
        .map(|m| m.content)
        .collect();
    assert_eq!(
        contents,
        vec![
            "budget",
            "Here is the real cost.",
            "local",
            "Here is the local schedule."
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_scrapbook_request_event_sequence() {
    let controller = ViewController::with_defaults();
    arrive(&controller, "nyc", "New York").await;
    let mut rx = controller.subscribe();
    let before = controller.snapshot().await.messages.len();

    controller.submit_utterance("I want a scrapbook").await.unwrap();
    assert!(!controller.snapshot().await.loading);
    sleep(ms(2100)).await;

    let events = drain(&mut rx);
    assert_eq!(
        view_sequence(&events),
        vec![ViewMode::Traveling, ViewMode::Scrapbook]
    );
    assert!(!events
        .iter()
        .any(|e| matches!(e, SessionEvent::LoadingChanged { loading: true })));

    let snapshot = controller.snapshot().await;
    assert_eq!(snapshot.background, Background::SCENIC);
    assert_eq!(snapshot.messages.len(), before + 1);
}

#[tokio::test(start_paused = true)]
async fn test_reset_from_scrapbook() {
    let controller = ViewController::with_defaults();
    arrive(&controller, "paris", "Paris").await;
    controller.run_quick_action("scrapbook").await.unwrap().unwrap();
    sleep(ms(2100)).await;
    controller.use_demo_photos().await.unwrap();

    controller.reset().await;
    let snapshot = controller.snapshot().await;
    assert_eq!(snapshot.view, ViewMode::Map);
    assert!(snapshot.messages.is_empty());
    assert_eq!(snapshot.background, Background::Default);
    assert!(snapshot.photos.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_reset_mid_travel_cancels_arrival() {
    let controller = ViewController::with_defaults();
    controller.select_destination("tokyo", "Tokyo").await.unwrap();
    sleep(ms(500)).await;

    controller.reset().await;
    sleep(ms(3000)).await;

    let snapshot = controller.snapshot().await;
    assert_eq!(snapshot.view, ViewMode::Map);
    assert!(snapshot.messages.is_empty());
    assert_eq!(snapshot.background, Background::Default);
}

#[tokio::test(start_paused = true)]
async fn test_reset_then_reselect_is_not_overtaken_by_stale_arrival() {
    let controller = ViewController::with_defaults();
    controller.select_destination("tokyo", "Tokyo").await.unwrap();
    sleep(ms(2000)).await;

    controller.reset().await;
    controller.select_destination("paris", "Paris").await.unwrap();

    // The abandoned Tokyo arrival would have fired here.
    sleep(ms(600)).await;
    let snapshot = controller.snapshot().await;
    assert_eq!(snapshot.view, ViewMode::Traveling);
    assert!(snapshot.messages.is_empty());

    sleep(ms(2000)).await;
    let snapshot = controller.snapshot().await;
    assert_eq!(snapshot.view, ViewMode::Chat);
    assert_eq!(snapshot.messages.len(), 1);
    assert!(snapshot.messages[0].content.contains("Paris"));
}

#[tokio::test(start_paused = true)]
async fn test_reset_keeps_karma() {
    let controller = ViewController::with_defaults();
    arrive(&controller, "tokyo", "Tokyo").await;
    controller.run_quick_action("scam").await.unwrap().unwrap();
    sleep(ms(1100)).await;

    controller.reset().await;
    assert_eq!(controller.snapshot().await.karma, 125);
}

#[tokio::test(start_paused = true)]
async fn test_quick_action_matches_typed_text() {
    let controller = ViewController::with_defaults();
    arrive(&controller, "tokyo", "Tokyo").await;

    controller.run_quick_action("scam").await.unwrap().unwrap();
    let snapshot = controller.snapshot().await;
    assert_eq!(
        snapshot.messages.last().unwrap().content,
        "Check for scams in this area"
    );

    let err = controller.run_quick_action("teleport").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test(start_paused = true)]
async fn test_blank_input_is_silent() {
    let controller = ViewController::with_defaults();
    arrive(&controller, "bali", "Bali").await;
    let mut rx = controller.subscribe();
    let before = controller.snapshot().await;

    assert_eq!(
        controller.submit_utterance("   ").await,
        Err(Rejection::EmptyInput)
    );
    assert!(drain(&mut rx).is_empty());
    assert_eq!(controller.snapshot().await, before);
}

#[tokio::test(start_paused = true)]
async fn test_custom_timings() {
    let mut config = GenieConfig::default();
    config.timing.background_swap_ms = 10;
    config.timing.arrival_ms = 20;
    let controller = ViewController::new(&config, QuickActionSet::default());

    controller.select_destination("paris", "Paris").await.unwrap();
    sleep(ms(25)).await;
    assert_eq!(controller.snapshot().await.view, ViewMode::Chat);
}

#[tokio::test(start_paused = true)]
async fn test_late_background_swap_still_lands_on_destination_backdrop() {
    let mut config = GenieConfig::default();
    config.timing.background_swap_ms = 3000;
    config.timing.arrival_ms = 2500;
    let controller = ViewController::new(&config, QuickActionSet::default());

    controller.select_destination("paris", "Paris").await.unwrap();
    sleep(ms(4000)).await;

    let snapshot = controller.snapshot().await;
    assert_eq!(snapshot.view, ViewMode::Chat);
    assert_eq!(snapshot.background, Background::Paris);
}
