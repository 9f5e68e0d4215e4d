use super::*;

const DEBOUNCE: Duration = Duration::from_millis(300);

#[test]
fn timer_fires_once_after_deadline() {
    let start = Instant::now();
    let mut timer = Timer::new(DEBOUNCE);

    timer.arm_at(start, "a");

    assert_eq!(timer.fire_due(start + Duration::from_millis(299)), None);
    assert_eq!(timer.fire_due(start + DEBOUNCE), Some("a"));
    assert_eq!(timer.fire_due(start + Duration::from_secs(5)), None);
    assert!(!timer.is_armed());
}

#[test]
fn rearming_replaces_payload_and_restarts_countdown() {
    let start = Instant::now();
    let mut timer = Timer::new(DEBOUNCE);

    timer.arm_at(start, 1);
    let superseded = timer.arm_at(start + Duration::from_millis(200), 2);

    assert_eq!(superseded, Some(1));
    assert_eq!(timer.fire_due(start + DEBOUNCE), None);
    assert_eq!(timer.fire_due(start + Duration::from_millis(500)), Some(2));
}

#[test]
fn cancel_disarms() {
    let start = Instant::now();
    let mut timer = Timer::new(DEBOUNCE);

    timer.arm_at(start, ());
    assert!(timer.cancel().is_some());
    assert!(timer.cancel().is_none());
    assert_eq!(timer.fire_due(start + Duration::from_secs(1)), None);
    assert_eq!(timer.deadline(), None);
}

#[test]
fn blank_text_bypasses_and_drops_pending_trigger() {
    let mut scheduler = DebounceScheduler::new(DEBOUNCE);

    assert_eq!(scheduler.schedule(1, "ap"), Schedule::Armed);
    assert_eq!(scheduler.schedule(2, "   "), Schedule::Bypassed);

    assert!(!scheduler.is_pending());
    assert_eq!(scheduler.fire_due(Instant::now() + Duration::from_secs(1)), None);
}

#[test]
fn burst_of_edits_keeps_only_the_latest() {
    let mut scheduler = DebounceScheduler::new(DEBOUNCE);

    scheduler.schedule(1, "a");
    scheduler.schedule(2, "ap");
    scheduler.schedule(3, "app");

    assert_eq!(
        scheduler.pending(),
        Some(&PendingQuery {
            generation: 3,
            text: "app".to_string()
        })
    );
}

#[test]
fn default_window_is_300ms() {
    assert_eq!(
        DebounceScheduler::default().debounce(),
        Duration::from_millis(300)
    );
}

#[tokio::test(start_paused = true)]
async fn settled_resolves_after_quiet_period() {
    let mut scheduler = DebounceScheduler::new(DEBOUNCE);
    scheduler.schedule(7, "rust");

    let started = Instant::now();
    let settled = scheduler.settled().await;

    assert_eq!(settled.generation, 7);
    assert_eq!(settled.text, "rust");
    assert!(started.elapsed() >= DEBOUNCE);
}

#[tokio::test(start_paused = true)]
async fn settled_never_resolves_when_idle() {
    let mut scheduler = DebounceScheduler::new(DEBOUNCE);

    let result = tokio::time::timeout(Duration::from_secs(10), scheduler.settled()).await;

    assert!(result.is_err());
}

#[tokio::test(start_paused = true)]
async fn dropped_wait_leaves_timer_armed() {
    let mut scheduler = DebounceScheduler::new(DEBOUNCE);
    scheduler.schedule(1, "ap");

    let early = tokio::time::timeout(Duration::from_millis(100), scheduler.settled()).await;
    assert!(early.is_err());
    assert!(scheduler.is_pending());

    let settled = scheduler.settled().await;
    assert_eq!(settled.generation, 1);
}
