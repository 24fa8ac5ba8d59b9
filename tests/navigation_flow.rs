//! End-to-end navigator scenarios, driven with explicit instants so the
//! debounce and double-press windows are deterministic.

use std::time::{Duration, Instant};

use backstack::core::nav::{ContainerId, Navigator, Outcome, PushOptions, Rejection, Transition};
use backstack::core::screen::{BackDisposition, Screen, ScreenKey};

const LOCK: Duration = Duration::from_millis(400);
const DOUBLE_PRESS: Duration = Duration::from_millis(1000);

struct StubScreen {
    key: &'static str,
}

impl StubScreen {
    fn new(key: &'static str) -> Self {
        Self { key }
    }
}

impl Screen for StubScreen {
    fn key(&self) -> ScreenKey {
        ScreenKey::new(self.key)
    }
}

/// Intercepts back like the demo home screen: first press consumed,
/// a double press asks to pop.
struct DoubleTapExitScreen;

impl Screen for DoubleTapExitScreen {
    fn key(&self) -> ScreenKey {
        ScreenKey::new("home")
    }

    fn on_back(&mut self, double_press: bool) -> BackDisposition {
        if double_press {
            BackDisposition::Pop
        } else {
            BackDisposition::Handled
        }
    }
}

fn nav_with_home() -> (Navigator<StubScreen>, Instant) {
    let mut nav = Navigator::with_windows(LOCK, DOUBLE_PRESS);
    nav.set_default(ContainerId(42), StubScreen::new("home"));
    (nav, Instant::now())
}

#[test]
fn guarded_pushes_then_inclusive_remove_walkthrough() {
    let (mut nav, t0) = nav_with_home();
    assert_eq!(nav.back_stack(), (0, vec![]));

    // push(ScreenB) → (1, ["screen-b"])
    let outcome = nav.push_at(StubScreen::new("screen-b"), PushOptions::default(), t0);
    assert_eq!(outcome, Outcome::Applied);
    assert_eq!(nav.back_stack(), (1, vec!["screen-b".to_string()]));

    // push(ScreenC) within the window → dropped, history unchanged
    let outcome = nav.push_at(
        StubScreen::new("screen-c"),
        PushOptions::default(),
        t0 + Duration::from_millis(200),
    );
    assert_eq!(outcome, Outcome::Rejected(Rejection::TransitionInFlight));
    assert_eq!(nav.back_stack(), (1, vec!["screen-b".to_string()]));

    // After the window the same push lands
    let outcome = nav.push_at(StubScreen::new("screen-c"), PushOptions::default(), t0 + LOCK);
    assert_eq!(outcome, Outcome::Applied);
    assert_eq!(
        nav.back_stack(),
        (2, vec!["screen-b".to_string(), "screen-c".to_string()])
    );

    // remove_or_pop(ScreenB) pops down to and including it
    assert_eq!(nav.remove_or_pop(&ScreenKey::new("screen-b")), Outcome::Applied);
    assert_eq!(nav.back_stack(), (0, vec![]));
    assert_eq!(nav.current().unwrap().key(), ScreenKey::new("home"));
}

#[test]
fn history_count_is_pushes_minus_pops() {
    let (mut nav, t0) = nav_with_home();
    let keys = ["a", "b", "c", "d"];
    for (i, key) in keys.iter().copied().enumerate() {
        let outcome = nav.push_at(
            StubScreen::new(key),
            PushOptions::default(),
            t0 + LOCK * i as u32,
        );
        assert_eq!(outcome, Outcome::Applied);
    }
    assert_eq!(nav.back_stack().0, keys.len());

    for popped in 1..=2 {
        assert_eq!(nav.pop(), Outcome::Applied);
        assert_eq!(nav.back_stack().0, keys.len() - popped);
    }
}

#[test]
fn same_screen_push_is_observable_noop() {
    let (mut nav, t0) = nav_with_home();
    let outcome = nav.push_at(StubScreen::new("home"), PushOptions::default(), t0);
    assert_eq!(outcome, Outcome::Rejected(Rejection::SameScreen));
    assert_eq!(nav.back_stack(), (0, vec![]));

    // The rejection must not have consumed the gate.
    let outcome = nav.push_at(StubScreen::new("a"), PushOptions::default(), t0);
    assert_eq!(outcome, Outcome::Applied);
}

#[test]
fn pop_named_or_push_keeps_one_instance_live() {
    let (mut nav, t0) = nav_with_home();
    for (i, key) in ["settings", "a", "b"].into_iter().enumerate() {
        let outcome = nav.push_at(
            StubScreen::new(key),
            PushOptions::default(),
            t0 + LOCK * i as u32,
        );
        assert_eq!(outcome, Outcome::Applied);
    }

    // Already live: pops everything above, no second instance pushed.
    let outcome = nav.pop_named_or_push_at(
        StubScreen::new("settings"),
        PushOptions::default(),
        t0 + LOCK * 3,
    );
    assert_eq!(outcome, Outcome::Applied);
    assert_eq!(nav.back_stack(), (1, vec!["settings".to_string()]));
    assert_eq!(nav.current().unwrap().key(), ScreenKey::new("settings"));

    // Absent: behaves exactly as push.
    let outcome = nav.pop_named_or_push_at(
        StubScreen::new("about"),
        PushOptions::default(),
        t0 + LOCK * 4,
    );
    assert_eq!(outcome, Outcome::Applied);
    assert_eq!(
        nav.back_stack(),
        (2, vec!["settings".to_string(), "about".to_string()])
    );
}

#[test]
fn pop_walks_back_then_exits() {
    let (mut nav, t0) = nav_with_home();
    assert_eq!(
        nav.push_at(StubScreen::new("a"), PushOptions::default(), t0),
        Outcome::Applied
    );

    assert_eq!(nav.pop(), Outcome::Applied);
    assert_eq!(nav.current().unwrap().key(), ScreenKey::new("home"));
    // Nothing left to pop: the host window should terminate.
    assert_eq!(nav.pop(), Outcome::Exit);
}

#[test]
fn push_without_history_leaves_nothing_to_pop() {
    let (mut nav, t0) = nav_with_home();
    let opts = PushOptions {
        add_to_history: false,
        ..PushOptions::default()
    };
    assert_eq!(nav.push_at(StubScreen::new("a"), opts, t0), Outcome::Applied);
    assert_eq!(nav.back_stack(), (0, vec![]));
    assert_eq!(nav.pop(), Outcome::Exit);
}

#[test]
fn chapter_advance_replaces_without_history_growth() {
    let (mut nav, t0) = nav_with_home();
    assert_eq!(
        nav.push_at(StubScreen::new("reader"), PushOptions::default(), t0),
        Outcome::Applied
    );
    let before = nav.back_stack();

    // Same key is allowed here: replacing a screen with a fresh instance of
    // itself is the operation's main use.
    let outcome =
        nav.push_and_remove_current_at(StubScreen::new("reader"), None, t0 + LOCK);
    assert_eq!(outcome, Outcome::Applied);
    assert_eq!(nav.back_stack(), before);

    // Backing out skips the replaced instance entirely.
    assert_eq!(nav.pop(), Outcome::Applied);
    assert_eq!(nav.current().unwrap().key(), ScreenKey::new("home"));
}

#[test]
fn clearing_history_resets_to_a_single_base_screen() {
    let (mut nav, t0) = nav_with_home();
    for (i, key) in ["a", "b"].into_iter().enumerate() {
        assert_eq!(
            nav.push_at(StubScreen::new(key), PushOptions::default(), t0 + LOCK * i as u32),
            Outcome::Applied
        );
    }

    let outcome =
        nav.push_clearing_history_at(StubScreen::new("fresh"), None, t0 + LOCK * 2);
    assert_eq!(outcome, Outcome::Applied);
    assert_eq!(nav.back_stack(), (0, vec![]));
    assert_eq!(nav.current().unwrap().key(), ScreenKey::new("fresh"));
    assert_eq!(nav.take_transition().unwrap().kind, Transition::Fade);
    assert_eq!(nav.pop(), Outcome::Exit);
}

#[test]
fn early_release_reopens_the_gate() {
    let (mut nav, t0) = nav_with_home();
    assert_eq!(
        nav.push_at(StubScreen::new("a"), PushOptions::default(), t0),
        Outcome::Applied
    );
    let token = nav.take_transition().unwrap().token.unwrap();

    // Still locked mid-window...
    let outcome = nav.push_at(
        StubScreen::new("b"),
        PushOptions::default(),
        t0 + Duration::from_millis(100),
    );
    assert_eq!(outcome, Outcome::Rejected(Rejection::TransitionInFlight));

    // ...until the adapter reports the transition finished.
    nav.transition_finished(token);
    let outcome = nav.push_at(
        StubScreen::new("b"),
        PushOptions::default(),
        t0 + Duration::from_millis(150),
    );
    assert_eq!(outcome, Outcome::Applied);
}

#[test]
fn double_tap_back_exits_from_the_base_screen() {
    let mut nav = Navigator::with_windows(LOCK, DOUBLE_PRESS);
    nav.set_default(ContainerId(42), DoubleTapExitScreen);
    let t0 = Instant::now();

    // First press is consumed by the interceptor.
    assert_eq!(nav.back_pressed_at(t0), Outcome::Applied);
    // Second press within the window pops — and with an empty history
    // that means exit.
    assert_eq!(
        nav.back_pressed_at(t0 + Duration::from_millis(400)),
        Outcome::Exit
    );
}

#[test]
fn slow_second_press_stays_consumed() {
    let mut nav = Navigator::with_windows(LOCK, DOUBLE_PRESS);
    nav.set_default(ContainerId(42), DoubleTapExitScreen);
    let t0 = Instant::now();

    assert_eq!(nav.back_pressed_at(t0), Outcome::Applied);
    assert_eq!(
        nav.back_pressed_at(t0 + Duration::from_millis(1500)),
        Outcome::Applied
    );
}
