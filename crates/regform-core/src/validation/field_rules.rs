#![forbid(unsafe_code)]

//! Per-field rule table.
//!
//! Each [`FieldId`] maps to a fixed validator chain. Chains read only the
//! field's own value plus the cross-field context they need: phone reads the
//! selected country, confirm-password reads the password.

use crate::form::{FieldId, FormState};
use crate::reference::ReferenceData;
use crate::text;

use super::validators::{
    And, AtLeastOne, Checked, EmailFormat, Matches, NotDisposable, Numeric, PhoneLength, Required,
    ValidationResult, Validator,
};

// ---------------------------------------------------------------------------
// InvalidTarget
// ---------------------------------------------------------------------------

/// The visual element that carries the invalid flag for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidTarget {
    /// The field's own input control.
    Control(FieldId),
    /// The region enclosing the gender checkboxes.
    GenderGroup,
}

impl InvalidTarget {
    /// Target flagged when `field` is invalid.
    #[must_use]
    pub const fn of(field: FieldId) -> Self {
        match field {
            FieldId::Gender => Self::GenderGroup,
            other => Self::Control(other),
        }
    }

    /// Stable element key of the target.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Control(field) => field.key(),
            Self::GenderGroup => "checkbox-group",
        }
    }
}

// ---------------------------------------------------------------------------
// FieldVerdict
// ---------------------------------------------------------------------------

/// Outcome of validating one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldVerdict {
    pub field: FieldId,
    pub result: ValidationResult,
    /// Element that should toggle its invalid flag to `!is_valid()`.
    pub target: InvalidTarget,
}

impl FieldVerdict {
    #[must_use]
    pub fn new(field: FieldId, result: ValidationResult) -> Self {
        Self {
            field,
            result,
            target: InvalidTarget::of(field),
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.result.is_valid()
    }

    /// Error text; empty when valid.
    #[must_use]
    pub fn message(&self) -> String {
        self.result.message()
    }
}

// ---------------------------------------------------------------------------
// FieldRules
// ---------------------------------------------------------------------------

/// The full per-keystroke rule set, bound to reference data and a denylist.
#[derive(Debug, Clone, Copy)]
pub struct FieldRules<'a> {
    reference: &'a ReferenceData,
    disposable_domains: &'a [String],
}

impl<'a> FieldRules<'a> {
    #[must_use]
    pub fn new(reference: &'a ReferenceData, disposable_domains: &'a [String]) -> Self {
        Self {
            reference,
            disposable_domains,
        }
    }

    /// Validate one field against the current form.
    #[must_use]
    pub fn validate(&self, field: FieldId, form: &FormState) -> FieldVerdict {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("validate_field", field = field.key()).entered();

        let result = match field {
            FieldId::FirstName
            | FieldId::LastName
            | FieldId::Country
            | FieldId::State
            | FieldId::City
            | FieldId::Password => Required.validate(text(form, field)),
            FieldId::Email => self.validate_email(text(form, field)),
            FieldId::Phone => self.validate_phone(text(form, field), form.country()),
            FieldId::ConfirmPassword => Required
                .validate(form.confirm_password())
                .and_then(|| {
                    Matches::new(form.password()).validate(text::trim(form.confirm_password()))
                }),
            FieldId::Terms => Checked.validate(&form.terms()),
            FieldId::Gender => AtLeastOne.validate(form.gender()),
        };

        #[cfg(feature = "tracing")]
        {
            if let Some(code) = result.code() {
                tracing::debug!(field = field.key(), code, "field invalid");
            }
        }

        FieldVerdict::new(field, result)
    }

    /// Validate every field, in form order.
    #[must_use]
    pub fn validate_all(&self, form: &FormState) -> Vec<FieldVerdict> {
        FieldId::ALL
            .into_iter()
            .map(|field| self.validate(field, form))
            .collect()
    }

    /// Email chain: required, then shape, then denylist.
    #[must_use]
    pub fn validate_email(&self, value: &str) -> ValidationResult {
        And::new(
            Required,
            And::new(EmailFormat, NotDisposable::new(self.disposable_domains)),
        )
        .validate(value)
    }

    /// Phone chain for `country`: required, then length, then numeric.
    ///
    /// The length check runs first, so a short non-numeric value reports the
    /// length error.
    #[must_use]
    pub fn validate_phone(&self, value: &str, country: &str) -> ValidationResult {
        let rule = self.reference.phone_rule_of(country);
        And::new(Required, And::new(PhoneLength::new(rule, country), Numeric)).validate(value)
    }
}

fn text(form: &FormState, field: FieldId) -> &str {
    form.text(field).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cascade;
    use crate::form::Gender;
    use crate::validation::{
        DEFAULT_DISPOSABLE_DOMAINS, ERROR_CODE_PHONE_LENGTH, ERROR_CODE_PHONE_NUMERIC,
        MSG_DISPOSABLE, MSG_EMAIL, MSG_MISMATCH, MSG_PHONE_NUMERIC, MSG_REQUIRED, MSG_SELECTION,
    };

    fn domains() -> Vec<String> {
        DEFAULT_DISPOSABLE_DOMAINS.iter().map(|d| d.to_string()).collect()
    }

    fn form_in(reference: &ReferenceData, country: &str) -> FormState {
        let mut form = FormState::new();
        cascade::on_country_selected(&mut form, reference, country);
        form
    }

    #[test]
    fn every_field_required_on_empty_form() {
        let reference = ReferenceData::builtin();
        let domains = domains();
        let rules = FieldRules::new(&reference, &domains);
        let form = FormState::new();
        for verdict in rules.validate_all(&form) {
            assert!(!verdict.is_valid(), "{} passed on empty form", verdict.field);
            let expected = if verdict.field == FieldId::Gender {
                MSG_SELECTION
            } else {
                MSG_REQUIRED
            };
            assert_eq!(verdict.message(), expected, "{}", verdict.field);
        }
    }

    #[test]
    fn names_only_need_content() {
        let reference = ReferenceData::builtin();
        let domains = domains();
        let rules = FieldRules::new(&reference, &domains);
        let mut form = FormState::new();
        form.set_text(FieldId::FirstName, "   ");
        assert_eq!(rules.validate(FieldId::FirstName, &form).message(), MSG_REQUIRED);
        form.set_text(FieldId::FirstName, "J4ne!");
        assert!(rules.validate(FieldId::FirstName, &form).is_valid());
    }

    #[test]
    fn email_rules() {
        let reference = ReferenceData::builtin();
        let domains = domains();
        let rules = FieldRules::new(&reference, &domains);
        assert_eq!(rules.validate_email("a@b").message(), MSG_EMAIL);
        assert_eq!(rules.validate_email("a@mailinator.com").message(), MSG_DISPOSABLE);
        assert!(rules.validate_email("a@b.com").is_valid());
        assert!(rules.validate_email("  jane.doe@proqa.com ").is_valid());
    }

    #[test]
    fn email_denylist_is_configurable() {
        let reference = ReferenceData::builtin();
        let domains = vec!["example.com".to_string()];
        let rules = FieldRules::new(&reference, &domains);
        assert!(rules.validate_email("a@mailinator.com").is_valid());
        assert_eq!(rules.validate_email("a@example.com").message(), MSG_DISPOSABLE);
    }

    #[test]
    fn phone_uses_selected_country() {
        let reference = ReferenceData::builtin();
        let domains = domains();
        let rules = FieldRules::new(&reference, &domains);

        assert_eq!(
            rules.validate_phone("123", "USA").message(),
            "Phone must be 10 digits for USA"
        );
        assert_eq!(
            rules.validate_phone("1234567890", "UK").message(),
            "Phone must be 11 digits for UK"
        );
        assert!(rules.validate_phone("07123456789", "UK").is_valid());
        assert!(rules.validate_phone("9876543210", "IN").is_valid());
    }

    #[test]
    fn phone_length_precedes_numeric() {
        let reference = ReferenceData::builtin();
        let domains = domains();
        let rules = FieldRules::new(&reference, &domains);

        let short = rules.validate_phone("12a456789", "USA");
        assert_eq!(short.code(), Some(ERROR_CODE_PHONE_LENGTH));

        let exact = rules.validate_phone("12a4567890", "USA");
        assert_eq!(exact.code(), Some(ERROR_CODE_PHONE_NUMERIC));
        assert_eq!(exact.message(), MSG_PHONE_NUMERIC);
    }

    #[test]
    fn phone_without_country_uses_default_rule() {
        let reference = ReferenceData::builtin();
        let domains = domains();
        let rules = FieldRules::new(&reference, &domains);
        assert!(rules.validate_phone("1234567890", "").is_valid());
        assert_eq!(rules.validate_phone("123", "").message(), "Phone must be 10 digits");
    }

    #[test]
    fn phone_field_reads_form_country() {
        let reference = ReferenceData::builtin();
        let domains = domains();
        let rules = FieldRules::new(&reference, &domains);
        let mut form = form_in(&reference, "UK");
        form.set_text(FieldId::Phone, "1234567890");
        assert_eq!(
            rules.validate(FieldId::Phone, &form).message(),
            "Phone must be 11 digits for UK"
        );
    }

    #[test]
    fn confirm_password() {
        let reference = ReferenceData::builtin();
        let domains = domains();
        let rules = FieldRules::new(&reference, &domains);
        let mut form = FormState::new();
        form.set_text(FieldId::Password, "Match123");
        form.set_text(FieldId::ConfirmPassword, "NoMatch");
        assert_eq!(rules.validate(FieldId::ConfirmPassword, &form).message(), MSG_MISMATCH);
        form.set_text(FieldId::ConfirmPassword, "Match123");
        assert!(rules.validate(FieldId::ConfirmPassword, &form).is_valid());
    }

    #[test]
    fn confirm_password_trims_confirmation_only() {
        let reference = ReferenceData::builtin();
        let domains = domains();
        let rules = FieldRules::new(&reference, &domains);
        let mut form = FormState::new();

        form.set_text(FieldId::Password, "abc");
        form.set_text(FieldId::ConfirmPassword, "abc ");
        assert!(rules.validate(FieldId::ConfirmPassword, &form).is_valid());

        // The password itself is compared untrimmed.
        form.set_text(FieldId::Password, " abc");
        form.set_text(FieldId::ConfirmPassword, " abc");
        assert_eq!(rules.validate(FieldId::ConfirmPassword, &form).message(), MSG_MISMATCH);

        form.set_text(FieldId::ConfirmPassword, "   ");
        assert_eq!(rules.validate(FieldId::ConfirmPassword, &form).message(), MSG_REQUIRED);
    }

    #[test]
    fn terms_and_gender() {
        let reference = ReferenceData::builtin();
        let domains = domains();
        let rules = FieldRules::new(&reference, &domains);
        let mut form = FormState::new();
        form.set_terms(true);
        form.set_gender(Gender::Other, true);
        assert!(rules.validate(FieldId::Terms, &form).is_valid());
        assert!(rules.validate(FieldId::Gender, &form).is_valid());
    }

    #[test]
    fn invalid_targets() {
        assert_eq!(InvalidTarget::of(FieldId::Gender), InvalidTarget::GenderGroup);
        assert_eq!(InvalidTarget::GenderGroup.key(), "checkbox-group");
        for field in FieldId::ALL.into_iter().filter(|f| *f != FieldId::Gender) {
            assert_eq!(InvalidTarget::of(field), InvalidTarget::Control(field));
            assert_eq!(InvalidTarget::of(field).key(), field.key());
        }
    }

    #[test]
    fn validation_is_idempotent() {
        let reference = ReferenceData::builtin();
        let domains = domains();
        let rules = FieldRules::new(&reference, &domains);
        let mut form = form_in(&reference, "USA");
        form.set_text(FieldId::Email, "a@yopmail.com");
        form.set_text(FieldId::Phone, "12345");
        for field in FieldId::ALL {
            assert_eq!(rules.validate(field, &form), rules.validate(field, &form));
        }
    }
}
