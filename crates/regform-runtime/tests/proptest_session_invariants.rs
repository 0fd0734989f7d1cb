#![forbid(unsafe_code)]

//! Property-based invariant tests for [`FormSession`].
//!
//! For any sequence of user events:
//!
//! 1. The submit button state matches the submit gate over the current form.
//! 2. The selectors and the phone placeholder match what the engine derives
//!    from the current form, so a stored city is always an offered one.
//! 3. An accepted submit leaves an empty form and a clean view; a rejected
//!    submit leaves the form untouched.

use proptest::prelude::*;
use regform_core::{FieldId, Gender, RegistrationEngine, submit_gate_check};
use regform_runtime::{EventOutcome, FormEvent, FormSession, SessionConfig};

// ── Helpers ─────────────────────────────────────────────────────────────

fn field_strategy() -> impl Strategy<Value = FieldId> {
    proptest::sample::select(FieldId::ALL.to_vec())
}

fn gender_strategy() -> impl Strategy<Value = Gender> {
    proptest::sample::select(Gender::ALL.to_vec())
}

/// Place names from the reference data mixed with blanks and garbage.
fn place_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("USA".to_string()),
        Just("UK".to_string()),
        Just("IN".to_string()),
        Just("Texas".to_string()),
        Just("California".to_string()),
        Just("England".to_string()),
        Just("Karnataka".to_string()),
        Just("Austin".to_string()),
        Just("London".to_string()),
        Just("Bangalore".to_string()),
        "[A-Za-z ]{1,10}",
    ]
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("Jane".to_string()),
        Just("jane@proqa.com".to_string()),
        Just("9876543210".to_string()),
        Just("Strong@123!".to_string()),
        "[ -~]{0,16}",
    ]
}

fn event_strategy() -> impl Strategy<Value = FormEvent> {
    prop_oneof![
        4 => (field_strategy(), text_strategy()).prop_map(|(f, v)| FormEvent::Input(f, v)),
        2 => field_strategy().prop_map(FormEvent::Blur),
        2 => place_strategy().prop_map(FormEvent::SelectCountry),
        2 => place_strategy().prop_map(FormEvent::SelectState),
        2 => place_strategy().prop_map(FormEvent::SelectCity),
        1 => gender_strategy().prop_map(FormEvent::ToggleGender),
        1 => any::<bool>().prop_map(FormEvent::SetTerms),
        1 => Just(FormEvent::Submit),
    ]
}

fn config_strategy() -> impl Strategy<Value = SessionConfig> {
    (any::<bool>(), any::<bool>()).prop_map(|(live, gate_on_blur)| {
        SessionConfig::new()
            .live_validation(live)
            .gate_on_blur(gate_on_blur)
    })
}

fn session_for(config: SessionConfig) -> FormSession {
    FormSession::with_engine(RegistrationEngine::new(), config)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Submit button tracks the gate
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn submit_button_tracks_gate(
        config in config_strategy(),
        events in proptest::collection::vec(event_strategy(), 0..40),
    ) {
        let mut session = session_for(config);
        for event in events {
            let kind = event.kind();
            session.handle_event(event);
            prop_assert_eq!(
                session.view().submit_enabled,
                submit_gate_check(session.form()),
                "after {}", kind
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Selectors follow the form
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn selectors_follow_form(
        config in config_strategy(),
        events in proptest::collection::vec(event_strategy(), 0..40),
    ) {
        let mut session = session_for(config);
        for event in events {
            let kind = event.kind();
            session.handle_event(event);

            let engine = session.engine();
            let form = session.form();
            let view = session.view();
            prop_assert_eq!(&view.states, &engine.state_options(form), "after {}", kind);
            prop_assert_eq!(&view.cities, &engine.city_options(form), "after {}", kind);
            prop_assert_eq!(
                view.phone_placeholder.as_str(),
                engine.phone_placeholder(form),
                "after {}", kind
            );
            prop_assert!(form.state().is_empty() || engine.reference().has_state(form.country(), form.state()));
            prop_assert!(form.city().is_empty() || view.cities.offers(form.city()));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Submit outcomes
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn submit_resets_or_preserves(
        config in config_strategy(),
        events in proptest::collection::vec(event_strategy(), 0..40),
    ) {
        let mut session = session_for(config);
        for event in events {
            session.handle_event(event);
        }

        let before = session.form().clone();
        let gate_open = submit_gate_check(&before);
        match session.handle_event(FormEvent::Submit) {
            EventOutcome::Submitted => {
                prop_assert!(gate_open);
                prop_assert!(session.form().is_empty());
                prop_assert!(session.view().is_clean());
                prop_assert!(session.view().success_visible);
                prop_assert!(!session.view().submit_enabled);
            }
            EventOutcome::Rejected { blockers } => {
                prop_assert!(!gate_open);
                prop_assert!(!blockers.is_empty());
                prop_assert_eq!(session.form(), &before);
            }
            other => prop_assert!(false, "unexpected outcome {:?}", other),
        }
    }
}
