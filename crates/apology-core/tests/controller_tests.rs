// Host-side tests for the apology scene controller and its dismissal timer.

use apology_core::view::ViewStates;
use apology_core::{
    activate_object, Activation, InteractionState, ObjectId, ObjectKind, SceneCatalogue,
    SceneController, SceneError,
};
use rand::prelude::*;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn starts_hidden_with_zero_sorries() {
    let c = SceneController::new();
    assert_eq!(c.state(), InteractionState::new());
    assert_eq!(c.sorry_count(), 0);
    assert!(!c.message_visible());
    assert!(c.pending_dismissal().is_none());
}

#[test]
fn heart_activations_add_eight_each() {
    let mut c = SceneController::new();
    for n in 1..=20u64 {
        c.on_heart_activate(ms(n * 10));
        assert_eq!(c.sorry_count(), 8 * n as u32);
    }
}

#[test]
fn each_activation_hides_exactly_after_its_delay() {
    let cases = [
        (Activation::Heart, 3000, 8),
        (Activation::BigButton, 5000, 25),
        (Activation::Butterfly, 4000, 15),
    ];
    for (activation, delay_ms, reward) in cases {
        let mut c = SceneController::new();
        let start = ms(250);
        let task = c.activate(activation, start);
        assert_eq!(task.deadline, start + ms(delay_ms));
        assert_eq!(c.sorry_count(), reward);
        assert!(c.message_visible(), "{activation:?} should show the message");

        // Never sooner
        assert!(c.advance(start + ms(delay_ms - 1)).is_none());
        assert!(c.message_visible());

        let dismissed = c.advance(start + ms(delay_ms)).expect("dismissal due");
        assert_eq!(dismissed.generation, task.generation);
        assert!(!c.message_visible());
        // Fires once
        assert!(c.advance(start + ms(delay_ms + 1000)).is_none());
    }
}

#[test]
fn named_operations_match_activation_kinds() {
    let mut c = SceneController::new();
    c.on_heart_activate(ms(0));
    c.on_big_button_activate(ms(0));
    c.on_butterfly_activate(ms(0));
    assert_eq!(c.sorry_count(), 8 + 25 + 15);
}

#[test]
fn heart_click_scenario() {
    let mut c = SceneController::new();
    c.on_heart_activate(ms(0));
    assert_eq!(c.sorry_count(), 8);
    assert!(c.message_visible());
    c.advance(ms(3000));
    assert!(!c.message_visible());
    assert_eq!(c.sorry_count(), 8);
}

#[test]
fn butterfly_then_big_button_stays_visible_for_the_later_delay() {
    let mut c = SceneController::new();
    let t0 = ms(1_000);
    c.on_butterfly_activate(t0);
    c.on_big_button_activate(t0);
    assert_eq!(c.sorry_count(), 40);

    // The butterfly's 4000ms dismissal was superseded
    assert!(c.advance(t0 + ms(4000)).is_none());
    assert!(c.message_visible());
    assert!(c.advance(t0 + ms(4999)).is_none());
    assert!(c.message_visible());

    assert!(c.advance(t0 + ms(5000)).is_some());
    assert!(!c.message_visible());
}

#[test]
fn earlier_dismissal_cannot_hide_a_later_message() {
    let mut c = SceneController::new();
    c.on_heart_activate(ms(0));
    c.on_heart_activate(ms(2000));
    // The first heart's deadline passes without effect
    assert!(c.advance(ms(3000)).is_none());
    assert!(c.message_visible());
    assert!(c.advance(ms(5000)).is_some());
    assert!(!c.message_visible());
}

#[test]
fn most_recent_schedule_wins_even_when_shorter() {
    let mut c = SceneController::new();
    c.on_big_button_activate(ms(0));
    c.on_heart_activate(ms(1000));
    assert!(c.advance(ms(3999)).is_none());
    assert!(c.advance(ms(4000)).is_some());
    assert!(!c.message_visible());
    // The big button's slot was superseded, nothing left to fire
    assert!(c.advance(ms(5000)).is_none());
    assert!(c.pending_dismissal().is_none());
}

#[test]
fn stale_generation_expire_is_ignored() {
    let mut c = SceneController::new();
    let first = c.on_heart_activate(ms(0));
    let second = c.on_heart_activate(ms(1000));
    assert!(second.generation > first.generation);

    assert!(c.expire(first.generation, ms(3000)).is_none());
    assert!(c.message_visible());

    let d = c.expire(second.generation, ms(4000)).expect("current generation");
    assert_eq!(d.at, ms(4000));
    assert!(!c.message_visible());
    // Second fire of the same generation does nothing
    assert!(c.expire(second.generation, ms(4001)).is_none());
}

#[test]
fn early_expire_keeps_the_message_up() {
    let mut c = SceneController::new();
    let task = c.on_heart_activate(ms(0));
    assert_eq!(task.deadline, ms(3000));

    assert!(c.expire(task.generation, ms(1)).is_none());
    assert!(c.expire(task.generation, ms(2999)).is_none());
    assert!(c.message_visible());
    assert_eq!(c.pending_dismissal(), Some(task));

    // The frame loop still picks it up at the deadline
    let d = c.advance(ms(3000)).expect("due");
    assert_eq!(d.generation, task.generation);
    assert!(!c.message_visible());
}

#[test]
fn late_timer_after_early_miss_still_dismisses() {
    let mut c = SceneController::new();
    let task = c.on_big_button_activate(ms(200));
    assert!(c.expire(task.generation, ms(5199)).is_none());
    let d = c.expire(task.generation, ms(5200)).expect("deadline reached");
    assert_eq!(d.at, ms(5200));
    assert!(!c.message_visible());
}

#[test]
fn advance_without_pending_is_noop() {
    let mut c = SceneController::new();
    assert!(c.advance(ms(10_000)).is_none());
    assert_eq!(c.state(), InteractionState::new());
}

#[test]
fn sorry_count_never_decreases() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut c = SceneController::new();
    let mut now = Duration::ZERO;
    let mut last = 0;
    for _ in 0..500 {
        now += ms(rng.gen_range(0..2500));
        match rng.gen_range(0..4) {
            0 => {
                c.on_heart_activate(now);
            }
            1 => {
                c.on_big_button_activate(now);
            }
            2 => {
                c.on_butterfly_activate(now);
            }
            _ => {
                c.advance(now);
            }
        }
        assert!(c.sorry_count() >= last);
        last = c.sorry_count();
    }
}

#[test]
fn pure_transitions_return_next_state() {
    let s0 = InteractionState::new();
    let s1 = s0.activated(Activation::Heart);
    assert_eq!(
        s1,
        InteractionState {
            sorry_count: 8,
            message_visible: true
        }
    );
    let s2 = s1.dismissed();
    assert_eq!(
        s2,
        InteractionState {
            sorry_count: 8,
            message_visible: false
        }
    );
    // The original value is untouched
    assert_eq!(s0, InteractionState::new());
}

#[test]
fn counter_saturates_instead_of_wrapping() {
    let s = InteractionState {
        sorry_count: u32::MAX - 3,
        message_visible: false,
    };
    assert_eq!(s.activated(Activation::BigButton).sorry_count, u32::MAX);
}

#[test]
fn activate_object_routes_hearts_and_butterflies() {
    let catalogue = SceneCatalogue::standard();
    let mut c = SceneController::new();
    let mut views = ViewStates::new();

    let heart = catalogue.of_kind(ObjectKind::Heart).next().unwrap().id;
    let (activation, _) = activate_object(&mut c, &mut views, &catalogue, heart, ms(0)).unwrap();
    assert_eq!(activation, Activation::Heart);
    assert_eq!(c.sorry_count(), 8);
    assert!(!views.is_excited(heart, ms(0)));

    let butterfly = catalogue.of_kind(ObjectKind::Butterfly).next().unwrap().id;
    let (activation, task) =
        activate_object(&mut c, &mut views, &catalogue, butterfly, ms(100)).unwrap();
    assert_eq!(activation, Activation::Butterfly);
    assert_eq!(task.deadline, ms(4100));
    assert_eq!(c.sorry_count(), 23);
    assert!(views.is_excited(butterfly, ms(100)));
    assert!(views.is_excited(butterfly, ms(1099)));
    assert!(!views.is_excited(butterfly, ms(1100)));
}

#[test]
fn activate_object_rejects_decorations_and_unknown_ids() {
    let catalogue = SceneCatalogue::standard();
    let mut c = SceneController::new();
    let mut views = ViewStates::new();

    let tulip = catalogue.of_kind(ObjectKind::Tulip).next().unwrap().id;
    assert_eq!(
        activate_object(&mut c, &mut views, &catalogue, tulip, ms(0)),
        Err(SceneError::NotInteractive {
            id: tulip,
            kind: ObjectKind::Tulip
        })
    );
    let title = catalogue.of_kind(ObjectKind::TitleText).next().unwrap().id;
    assert!(activate_object(&mut c, &mut views, &catalogue, title, ms(0)).is_err());

    let unknown = ObjectId(999);
    assert_eq!(
        activate_object(&mut c, &mut views, &catalogue, unknown, ms(0)),
        Err(SceneError::UnknownObject(unknown))
    );
    assert_eq!(c.state(), InteractionState::new());
}
