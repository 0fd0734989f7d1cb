#![forbid(unsafe_code)]

//! Render-ready state of the form.
//!
//! [`FormView`] is everything a UI layer draws besides the raw input values:
//! per-field error text, invalid highlighting, the dependent selectors, the
//! phone placeholder, the strength meter and the submit / success state.

use std::collections::{BTreeMap, HashSet};

use regform_core::{
    FieldId, FieldVerdict, InvalidTarget, ReferenceData, Selector, StrengthResult,
};

/// Render-ready form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    errors: BTreeMap<FieldId, String>,
    invalid: HashSet<InvalidTarget>,
    /// State selector.
    pub states: Selector,
    /// City selector.
    pub cities: Selector,
    /// Placeholder text of the phone input.
    pub phone_placeholder: String,
    /// Strength meter.
    pub strength: StrengthResult,
    /// Whether the submit control is enabled.
    pub submit_enabled: bool,
    /// Whether the success message is shown.
    pub success_visible: bool,
}

impl FormView {
    /// The initial view over `reference`: no errors, dependent selectors
    /// disabled, default placeholder, empty meter, submit disabled.
    #[must_use]
    pub fn initial(reference: &ReferenceData) -> Self {
        Self {
            errors: BTreeMap::new(),
            invalid: HashSet::new(),
            states: Selector::disabled(),
            cities: Selector::disabled(),
            phone_placeholder: reference.default_phone_rule().example_format.clone(),
            strength: StrengthResult::empty(),
            submit_enabled: false,
            success_visible: false,
        }
    }

    /// Error text shown for `field`, empty when none.
    #[must_use]
    pub fn error(&self, field: FieldId) -> &str {
        self.errors.get(&field).map_or("", String::as_str)
    }

    /// Error text by error slot key (`"lastNameError"`).
    #[must_use]
    pub fn error_by_slot(&self, slot: &str) -> Option<&str> {
        let key = slot.strip_suffix("Error")?;
        FieldId::from_key(key).map(|field| self.error(field))
    }

    /// Fields that currently show error text, in form order.
    pub fn fields_with_errors(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.errors.keys().copied()
    }

    /// Whether `target` is highlighted as invalid.
    #[must_use]
    pub fn is_invalid(&self, target: InvalidTarget) -> bool {
        self.invalid.contains(&target)
    }

    /// Whether the control (or group) of `field` is highlighted as invalid.
    #[must_use]
    pub fn is_field_invalid(&self, field: FieldId) -> bool {
        self.is_invalid(InvalidTarget::of(field))
    }

    /// Whether nothing is flagged and no error text is shown.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.invalid.is_empty()
    }

    /// Show a verdict: set or clear the error text and the invalid flag.
    pub fn apply(&mut self, verdict: &FieldVerdict) {
        if verdict.is_valid() {
            self.errors.remove(&verdict.field);
            self.invalid.remove(&verdict.target);
        } else {
            self.errors.insert(verdict.field, verdict.message());
            self.invalid.insert(verdict.target);
        }
    }

    /// Clear every error text and invalid flag.
    pub fn clear_feedback(&mut self) {
        self.errors.clear();
        self.invalid.clear();
    }
}
