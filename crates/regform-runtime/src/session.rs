#![forbid(unsafe_code)]

//! Event-driven form session.
//!
//! A [`FormSession`] owns the single [`FormState`] of a form instance and its
//! [`FormView`]. The UI layer forwards user events through
//! [`FormSession::handle_event`] and redraws from [`FormSession::view`].
//!
//! # Event handling
//!
//! | Event | Effect |
//! |-------|--------|
//! | `Input` | store value, validate field, recompute gate (password also rescored) |
//! | `Blur` | validate field |
//! | `SelectCountry` | validate country, cascade reset, placeholder, re-validate phone, recompute gate |
//! | `SelectState` | validate state, city options, recompute gate |
//! | `SelectCity` | validate city, recompute gate |
//! | `ToggleGender` / `SetTerms` | validate, recompute gate |
//! | `Submit` | when the gate passes: success, reset, clear feedback; otherwise show every error unless live |
//!
//! # Example
//!
//! ```
//! use regform_core::FieldId;
//! use regform_runtime::{EventOutcome, FormEvent, FormSession};
//!
//! let mut session = FormSession::new();
//! session.handle_event(FormEvent::input(FieldId::Email, "jane@tempmail.com"));
//! assert_eq!(session.view().error(FieldId::Email), "Disposable emails are not allowed");
//!
//! let outcome = session.handle_event(FormEvent::Submit);
//! assert!(matches!(outcome, EventOutcome::Rejected { .. }));
//! ```

use regform_core::aggregate;
use regform_core::{FieldId, FormState, Gender, RegistrationEngine};

use crate::config::SessionConfig;
use crate::view::FormView;

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// A user interaction with the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The text of a free-text field changed.
    Input(FieldId, String),
    /// A field lost focus.
    Blur(FieldId),
    /// A country was picked (empty for the placeholder option).
    SelectCountry(String),
    /// A state was picked (empty for the placeholder option).
    SelectState(String),
    /// A city was picked (empty for the placeholder option).
    SelectCity(String),
    /// A gender checkbox was clicked.
    ToggleGender(Gender),
    /// The terms checkbox was set.
    SetTerms(bool),
    /// The form was submitted.
    Submit,
}

impl FormEvent {
    #[must_use]
    pub fn input(field: FieldId, value: impl Into<String>) -> Self {
        Self::Input(field, value.into())
    }

    #[must_use]
    pub fn select_country(country: impl Into<String>) -> Self {
        Self::SelectCountry(country.into())
    }

    #[must_use]
    pub fn select_state(state: impl Into<String>) -> Self {
        Self::SelectState(state.into())
    }

    #[must_use]
    pub fn select_city(city: impl Into<String>) -> Self {
        Self::SelectCity(city.into())
    }

    /// Short name for logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Input(..) => "input",
            Self::Blur(_) => "blur",
            Self::SelectCountry(_) => "select_country",
            Self::SelectState(_) => "select_state",
            Self::SelectCity(_) => "select_city",
            Self::ToggleGender(_) => "toggle_gender",
            Self::SetTerms(_) => "set_terms",
            Self::Submit => "submit",
        }
    }
}

/// What handling an event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// State or view changed.
    Updated,
    /// The event does not apply (e.g. text input on a checkbox, or a city
    /// not offered under the current state).
    Ignored,
    /// The form was accepted and reset.
    Submitted,
    /// Submission was refused; the form is unchanged.
    Rejected {
        /// Fields failing the submit gate, in form order.
        blockers: Vec<FieldId>,
    },
}

// ---------------------------------------------------------------------------
// FormSession
// ---------------------------------------------------------------------------

/// One live instance of the registration form.
#[derive(Debug, Clone)]
pub struct FormSession {
    engine: RegistrationEngine,
    config: SessionConfig,
    form: FormState,
    view: FormView,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSession {
    /// A session over the built-in reference data and default behavior.
    #[must_use]
    pub fn new() -> Self {
        Self::with_engine(RegistrationEngine::new(), SessionConfig::default())
    }

    /// A session over a configured engine.
    #[must_use]
    pub fn with_engine(engine: RegistrationEngine, config: SessionConfig) -> Self {
        let view = FormView::initial(engine.reference());
        Self {
            engine,
            config,
            form: FormState::new(),
            view,
        }
    }

    #[must_use]
    pub fn engine(&self) -> &RegistrationEngine {
        &self.engine
    }

    #[must_use]
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Current values.
    #[must_use]
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Current render state.
    #[must_use]
    pub fn view(&self) -> &FormView {
        &self.view
    }

    /// Apply one user event.
    pub fn handle_event(&mut self, event: FormEvent) -> EventOutcome {
        tracing::debug!(event = event.kind(), "handling form event");

        match event {
            FormEvent::Input(field, value) => self.on_input(field, value),
            FormEvent::Blur(field) => self.on_blur(field),
            FormEvent::SelectCountry(country) => self.on_country(&country),
            FormEvent::SelectState(state) => self.on_state(&state),
            FormEvent::SelectCity(city) => self.on_city(&city),
            FormEvent::ToggleGender(gender) => {
                self.form.toggle_gender(gender);
                self.validate(FieldId::Gender);
                self.refresh_gate();
                EventOutcome::Updated
            }
            FormEvent::SetTerms(accepted) => {
                self.form.set_terms(accepted);
                self.validate(FieldId::Terms);
                self.refresh_gate();
                EventOutcome::Updated
            }
            FormEvent::Submit => self.on_submit(),
        }
    }

    fn on_input(&mut self, field: FieldId, value: String) -> EventOutcome {
        if !self.form.set_text(field, value) {
            tracing::debug!(field = field.key(), "input ignored for non-text field");
            return EventOutcome::Ignored;
        }
        if self.config.live_validation {
            self.validate(field);
        }
        if field == FieldId::Password {
            self.view.strength = self.engine.score_password(self.form.password());
        }
        self.refresh_gate();
        EventOutcome::Updated
    }

    fn on_blur(&mut self, field: FieldId) -> EventOutcome {
        self.validate(field);
        if self.config.gate_on_blur {
            self.refresh_gate();
        }
        EventOutcome::Updated
    }

    fn on_country(&mut self, country: &str) -> EventOutcome {
        let change = self.engine.on_country_change(&mut self.form, country);
        tracing::debug!(
            country,
            states = change.states.options.len(),
            "country changed, state and city reset"
        );

        self.validate(FieldId::Country);
        self.view.phone_placeholder = change.phone_placeholder().to_string();
        self.view.states = change.states;
        self.view.cities = change.cities;
        self.view.apply(&change.phone_verdict);
        self.refresh_gate();
        EventOutcome::Updated
    }

    fn on_state(&mut self, state: &str) -> EventOutcome {
        let change = self.engine.on_state_change(&mut self.form, state);
        tracing::debug!(
            state,
            cities = change.cities.options.len(),
            "state changed, city reset"
        );

        self.validate(FieldId::State);
        self.view.cities = change.cities;
        self.refresh_gate();
        EventOutcome::Updated
    }

    fn on_city(&mut self, city: &str) -> EventOutcome {
        let accepted = self.engine.on_city_change(&mut self.form, city);
        self.validate(FieldId::City);
        self.refresh_gate();
        if accepted || city.is_empty() {
            EventOutcome::Updated
        } else {
            tracing::debug!(city, "city not offered under current state");
            EventOutcome::Ignored
        }
    }

    fn on_submit(&mut self) -> EventOutcome {
        let blockers = aggregate::gate_blockers(&self.form);
        if !blockers.is_empty() {
            tracing::debug!(blockers = blockers.len(), "submission rejected");
            if !self.config.live_validation {
                let report = self.engine.full_validate(&self.form);
                for verdict in report.verdicts() {
                    self.view.apply(verdict);
                }
            }
            return EventOutcome::Rejected { blockers };
        }

        tracing::info!(
            country = self.form.country(),
            state = self.form.state(),
            city = self.form.city(),
            "registration submitted"
        );

        self.form.reset();
        self.view = FormView::initial(self.engine.reference());
        self.view.success_visible = true;
        EventOutcome::Submitted
    }

    fn validate(&mut self, field: FieldId) {
        let verdict = self.engine.validate_field(field, &self.form);
        self.view.apply(&verdict);
    }

    fn refresh_gate(&mut self) {
        self.view.submit_enabled = self.engine.check_form_validity(&self.form);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
