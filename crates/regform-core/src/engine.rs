#![forbid(unsafe_code)]

//! The inbound surface used by a UI layer.
//!
//! [`RegistrationEngine`] owns an [`EngineConfig`] and exposes one call per
//! user-facing concern: field validation, country and state changes, password
//! scoring, and the submit gate. It holds no form state; the caller owns the
//! [`FormState`] and passes it in.

use crate::aggregate::{self, FormReport};
use crate::cascade::{self, Selector};
use crate::config::{ConfigResult, EngineConfig};
use crate::form::{FieldId, FormState};
use crate::reference::{PhoneRule, ReferenceData};
use crate::strength::{self, StrengthResult};
use crate::validation::{FieldRules, FieldVerdict};

/// Outputs of a country change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryChange {
    pub states: Selector,
    pub cities: Selector,
    pub phone_rule: PhoneRule,
    /// Phone verdict recomputed under the new rule.
    pub phone_verdict: FieldVerdict,
}

impl CountryChange {
    /// Placeholder text for the phone input.
    #[must_use]
    pub fn phone_placeholder(&self) -> &str {
        &self.phone_rule.example_format
    }
}

/// Outputs of a state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateChange {
    pub cities: Selector,
}

/// Validation and dependency engine.
#[derive(Debug, Clone, Default)]
pub struct RegistrationEngine {
    config: EngineConfig,
}

impl RegistrationEngine {
    /// Engine over the built-in reference data.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine over a validated configuration.
    pub fn with_config(config: EngineConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn reference(&self) -> &ReferenceData {
        &self.config.reference
    }

    #[must_use]
    pub fn rules(&self) -> FieldRules<'_> {
        self.config.rules()
    }

    /// Validate one field with its full rule.
    #[must_use]
    pub fn validate_field(&self, field: FieldId, form: &FormState) -> FieldVerdict {
        self.rules().validate(field, form)
    }

    /// Select a country: cascade reset, new state options, phone refresh.
    pub fn on_country_change(&self, form: &mut FormState, country: &str) -> CountryChange {
        let selection = cascade::on_country_selected(form, self.reference(), country);
        CountryChange {
            states: selection.states,
            cities: selection.cities,
            phone_rule: selection.phone_rule,
            phone_verdict: self.validate_field(FieldId::Phone, form),
        }
    }

    /// Select a state under the current country.
    pub fn on_state_change(&self, form: &mut FormState, state: &str) -> StateChange {
        let selection = cascade::on_state_selected(form, self.reference(), state);
        StateChange {
            cities: selection.cities,
        }
    }

    /// Select a city under the current state. Returns whether it was accepted.
    pub fn on_city_change(&self, form: &mut FormState, city: &str) -> bool {
        cascade::select_city(form, self.reference(), city)
    }

    /// Current state selector.
    #[must_use]
    pub fn state_options(&self, form: &FormState) -> Selector {
        cascade::state_options(form, self.reference())
    }

    /// Current city selector.
    #[must_use]
    pub fn city_options(&self, form: &FormState) -> Selector {
        cascade::city_options(form, self.reference())
    }

    /// Phone placeholder for the current country.
    #[must_use]
    pub fn phone_placeholder(&self, form: &FormState) -> &str {
        &self.reference().phone_rule_of(form.country()).example_format
    }

    #[must_use]
    pub fn score_password(&self, password: &str) -> StrengthResult {
        strength::score(password)
    }

    /// The submit gate (lenient policy).
    #[must_use]
    pub fn check_form_validity(&self, form: &FormState) -> bool {
        aggregate::submit_gate_check(form)
    }

    /// Every field under its full rule (strict policy).
    #[must_use]
    pub fn full_validate(&self, form: &FormState) -> FormReport {
        aggregate::full_validate(&self.rules(), form)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
