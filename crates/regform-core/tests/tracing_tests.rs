#![forbid(unsafe_code)]

//! Tracing instrumentation tests.
//!
//! Run with:
//!   cargo test -p regform-core --features tracing --test tracing_tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use regform_core::{FieldId, FormState, RegistrationEngine};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

// ============================================================================
// Test Infrastructure
// ============================================================================

#[derive(Debug, Clone)]
struct CapturedSpan {
    name: String,
    fields: HashMap<String, String>,
    parent_name: Option<String>,
}

#[derive(Debug, Clone)]
struct CapturedEvent {
    message: String,
    fields: HashMap<String, String>,
}

struct Capture {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

struct CaptureHandle {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl CaptureHandle {
    fn spans(&self) -> Vec<CapturedSpan> {
        self.spans.lock().unwrap().clone()
    }

    fn spans_named(&self, name: &str) -> Vec<CapturedSpan> {
        self.spans().into_iter().filter(|s| s.name == name).collect()
    }

    fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().unwrap().clone()
    }
}

struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S> tracing_subscriber::Layer<S> for Capture
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(Vec::new());
        attrs.record(&mut visitor);

        let parent_name = ctx
            .current_span()
            .id()
            .and_then(|id| ctx.span(id))
            .map(|span_ref| span_ref.name().to_string());

        self.spans.lock().unwrap().push(CapturedSpan {
            name: attrs.metadata().name().to_string(),
            fields: visitor.0.into_iter().collect(),
            parent_name,
        });
    }

    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);
        let mut fields: HashMap<String, String> = visitor.0.into_iter().collect();
        let message = fields.remove("message").unwrap_or_default();
        self.events
            .lock()
            .unwrap()
            .push(CapturedEvent { message, fields });
    }
}

fn with_capture<F>(f: F) -> CaptureHandle
where
    F: FnOnce(),
{
    let spans = Arc::new(Mutex::new(Vec::new()));
    let events = Arc::new(Mutex::new(Vec::new()));
    let layer = Capture {
        spans: spans.clone(),
        events: events.clone(),
    };
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    CaptureHandle { spans, events }
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn validate_field_emits_span_with_key() {
    let handle = with_capture(|| {
        let engine = RegistrationEngine::new();
        let _ = engine.validate_field(FieldId::ConfirmPassword, &FormState::new());
    });

    let spans = handle.spans_named("validate_field");
    assert_eq!(spans.len(), 1);
    assert_eq!(
        spans[0].fields.get("field").map(String::as_str),
        Some("confirmPassword")
    );
}

#[test]
fn invalid_field_emits_event_with_code() {
    let handle = with_capture(|| {
        let engine = RegistrationEngine::new();
        let _ = engine.validate_field(FieldId::Email, &FormState::new());
    });

    let events = handle.events();
    let invalid: Vec<_> = events.iter().filter(|e| e.message == "field invalid").collect();
    assert_eq!(invalid.len(), 1, "events: {events:?}");
    assert_eq!(invalid[0].fields.get("code").map(String::as_str), Some("required"));
}

#[test]
fn valid_field_emits_no_event() {
    let handle = with_capture(|| {
        let engine = RegistrationEngine::new();
        let mut form = FormState::new();
        form.set_text(FieldId::FirstName, "Jane");
        let _ = engine.validate_field(FieldId::FirstName, &form);
    });
    assert!(handle.events().is_empty());
}

#[test]
fn full_validate_nests_field_spans() {
    let handle = with_capture(|| {
        let engine = RegistrationEngine::new();
        let _ = engine.full_validate(&FormState::new());
    });

    let field_spans = handle.spans_named("validate_field");
    assert_eq!(field_spans.len(), FieldId::ALL.len());
    assert!(
        field_spans
            .iter()
            .all(|s| s.parent_name.as_deref() == Some("full_validate"))
    );
}

#[test]
fn country_change_span_nests_phone_validation() {
    let handle = with_capture(|| {
        let engine = RegistrationEngine::new();
        let mut form = FormState::new();
        let _ = engine.on_country_change(&mut form, "UK");
    });

    let country = handle.spans_named("country_selected");
    assert_eq!(country.len(), 1);
    assert_eq!(country[0].fields.get("country").map(String::as_str), Some("UK"));

    // Phone is re-validated after the cascade span has closed.
    let phone = handle.spans_named("validate_field");
    assert_eq!(phone.len(), 1);
    assert_eq!(phone[0].parent_name, None);
}

#[test]
fn gate_check_emits_span() {
    let handle = with_capture(|| {
        let engine = RegistrationEngine::new();
        assert!(!engine.check_form_validity(&FormState::new()));
    });
    assert_eq!(handle.spans_named("submit_gate_check").len(), 1);
}
