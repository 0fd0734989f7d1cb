#![forbid(unsafe_code)]

//! Aggregate form validity.
//!
//! Two policies are kept deliberately separate:
//!
//! - [`full_validate`]: every field through its complete per-field rule, as
//!   used for per-keystroke feedback.
//! - [`submit_gate_check`]: the coarse check that enables the submit control.
//!   It requires gender, terms and a matching confirmation, and otherwise only
//!   non-empty (trimmed) text. It does *not* check email shape, disposable
//!   domains or phone format.
//!
//! Whether the gate's leniency is intended is an open product question; both
//! policies are preserved as observed. Both re-derive their answer from the
//! current [`FormState`] on every call.

use crate::form::{FieldId, FormState};
use crate::text;
use crate::validation::{FieldRules, FieldVerdict};

// ---------------------------------------------------------------------------
// FormReport
// ---------------------------------------------------------------------------

/// Verdicts for all fields under the full per-field rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormReport {
    verdicts: Vec<FieldVerdict>,
}

impl FormReport {
    /// All verdicts, in form order.
    #[must_use]
    pub fn verdicts(&self) -> &[FieldVerdict] {
        &self.verdicts
    }

    #[must_use]
    pub fn verdict(&self, field: FieldId) -> Option<&FieldVerdict> {
        self.verdicts.iter().find(|v| v.field == field)
    }

    /// Whether every field passes its full rule.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.verdicts.iter().all(FieldVerdict::is_valid)
    }

    /// Only the failing verdicts.
    pub fn errors(&self) -> impl Iterator<Item = &FieldVerdict> {
        self.verdicts.iter().filter(|v| !v.is_valid())
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }
}

// ---------------------------------------------------------------------------
// Policies
// ---------------------------------------------------------------------------

/// Strict policy: run every field's full rule.
#[must_use]
pub fn full_validate(rules: &FieldRules<'_>, form: &FormState) -> FormReport {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("full_validate").entered();

    FormReport {
        verdicts: rules.validate_all(form),
    }
}

/// Whether `field` passes the submit gate.
#[must_use]
pub fn passes_gate(field: FieldId, form: &FormState) -> bool {
    match field {
        FieldId::Gender => !form.gender().is_empty(),
        FieldId::Terms => form.terms(),
        FieldId::ConfirmPassword => form.confirm_password() == form.password(),
        other => form
            .text(other)
            .is_some_and(|value| !text::is_blank(value)),
    }
}

/// Fields currently blocking submission, in form order.
#[must_use]
pub fn gate_blockers(form: &FormState) -> Vec<FieldId> {
    FieldId::ALL
        .into_iter()
        .filter(|field| !passes_gate(*field, form))
        .collect()
}

/// Lenient policy: whether the submit control is enabled.
#[must_use]
pub fn submit_gate_check(form: &FormState) -> bool {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("submit_gate_check").entered();

    FieldId::ALL
        .into_iter()
        .all(|field| passes_gate(field, form))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
