#![forbid(unsafe_code)]

//! Core validation types and built-in validators.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::reference::PhoneRule;
use crate::text;

// ---------------------------------------------------------------------------
// Error Codes
// ---------------------------------------------------------------------------

/// Error code for an empty required field.
pub const ERROR_CODE_REQUIRED: &str = "required";
/// Error code for a malformed email address.
pub const ERROR_CODE_EMAIL: &str = "email";
/// Error code for an email on a disposable domain.
pub const ERROR_CODE_DISPOSABLE: &str = "disposable";
/// Error code for a phone value of the wrong length.
pub const ERROR_CODE_PHONE_LENGTH: &str = "phone_length";
/// Error code for a phone value with non-digit characters.
pub const ERROR_CODE_PHONE_NUMERIC: &str = "phone_numeric";
/// Error code for a confirmation that differs from its source.
pub const ERROR_CODE_MISMATCH: &str = "mismatch";
/// Error code for a checkbox group with nothing selected.
pub const ERROR_CODE_SELECTION: &str = "selection";

/// Message for an empty required field.
pub const MSG_REQUIRED: &str = "Field is required";
/// Message for a malformed email address.
pub const MSG_EMAIL: &str = "Invalid email format";
/// Message for an email on a disposable domain.
pub const MSG_DISPOSABLE: &str = "Disposable emails are not allowed";
/// Message template for a phone value of the wrong length.
pub const MSG_PHONE_LENGTH: &str = "Phone must be {digits} digits for {country}";
/// Message for a phone value of the wrong length when no country is selected.
pub const MSG_PHONE_LENGTH_NO_COUNTRY: &str = "Phone must be {digits} digits";
/// Message for a phone value with non-digit characters.
pub const MSG_PHONE_NUMERIC: &str = "Phone must be numeric";
/// Message for mismatched passwords.
pub const MSG_MISMATCH: &str = "Passwords do not match";
/// Message for an empty gender group.
pub const MSG_SELECTION: &str = "Please select at least one gender";

/// Domains rejected by [`NotDisposable`] unless configured otherwise.
pub const DEFAULT_DISPOSABLE_DOMAINS: [&str; 4] = [
    "tempmail.com",
    "mailinator.com",
    "yopmail.com",
    "dispostable.com",
];

// ---------------------------------------------------------------------------
// ValidationError
// ---------------------------------------------------------------------------

/// A validation error with code, message template, and interpolation parameters.
///
/// ```rust
/// use regform_core::validation::ValidationError;
///
/// let error = ValidationError::new("phone_length", "Phone must be {digits} digits")
///     .with_param("digits", 11);
///
/// assert_eq!(error.format_message(), "Phone must be 11 digits");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Stable error code for programmatic handling.
    pub code: &'static str,
    /// Message template.
    pub message: String,
    /// Parameters substituted into `{key}` placeholders.
    pub params: HashMap<String, String>,
}

impl ValidationError {
    #[must_use]
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            params: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.insert(key.into(), value.to_string());
        self
    }

    /// The message with every `{key}` replaced by its parameter.
    #[must_use]
    pub fn format_message(&self) -> String {
        let mut result = self.message.clone();
        for (key, value) in &self.params {
            result = result.replace(&format!("{{{key}}}"), value);
        }
        result
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_message())
    }
}

impl std::error::Error for ValidationError {}

// ---------------------------------------------------------------------------
// ValidationResult
// ---------------------------------------------------------------------------

/// Verdict of a validation: valid, or invalid with an error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ValidationResult {
    #[default]
    Valid,
    Invalid(ValidationError),
}

impl ValidationResult {
    /// Shorthand for an invalid result without parameters.
    #[must_use]
    pub fn invalid(code: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid(ValidationError::new(code, message))
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    #[must_use]
    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            Self::Valid => None,
            Self::Invalid(e) => Some(e),
        }
    }

    /// Error code, if invalid.
    #[must_use]
    pub fn code(&self) -> Option<&'static str> {
        self.error().map(|e| e.code)
    }

    /// Rendered error text; empty when valid.
    #[must_use]
    pub fn message(&self) -> String {
        self.error()
            .map(ValidationError::format_message)
            .unwrap_or_default()
    }

    /// Return the first error of the two, if any.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match self {
            Self::Valid => other,
            Self::Invalid(_) => self,
        }
    }

    /// Run `next` only if this result is valid.
    #[must_use]
    pub fn and_then(self, next: impl FnOnce() -> Self) -> Self {
        match self {
            Self::Valid => next(),
            Self::Invalid(_) => self,
        }
    }
}

// ---------------------------------------------------------------------------
// Validator Trait
// ---------------------------------------------------------------------------

/// A check over values of type `T`.
///
/// Validators compose with [`And`]; the first failing validator decides the
/// reported error, so ordering inside a chain is significant.
pub trait Validator<T: ?Sized>: Send + Sync {
    fn validate(&self, value: &T) -> ValidationResult;

    /// Default error message for this validator.
    fn error_message(&self) -> &str;
}

// ---------------------------------------------------------------------------
// Built-in Validators
// ---------------------------------------------------------------------------

/// Rejects strings that are empty after trimming.
#[derive(Debug, Clone, Copy, Default)]
pub struct Required;

impl Validator<str> for Required {
    fn validate(&self, value: &str) -> ValidationResult {
        if text::is_blank(value) {
            ValidationResult::invalid(ERROR_CODE_REQUIRED, MSG_REQUIRED)
        } else {
            ValidationResult::Valid
        }
    }

    fn error_message(&self) -> &str {
        MSG_REQUIRED
    }
}

/// Requires a checkbox to be checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct Checked;

impl Validator<bool> for Checked {
    fn validate(&self, value: &bool) -> ValidationResult {
        if *value {
            ValidationResult::Valid
        } else {
            ValidationResult::invalid(ERROR_CODE_REQUIRED, MSG_REQUIRED)
        }
    }

    fn error_message(&self) -> &str {
        MSG_REQUIRED
    }
}

/// Requires at least one option of a checkbox group.
#[derive(Debug, Clone, Copy, Default)]
pub struct AtLeastOne;

impl<T: Send + Sync> Validator<BTreeSet<T>> for AtLeastOne {
    fn validate(&self, value: &BTreeSet<T>) -> ValidationResult {
        if value.is_empty() {
            ValidationResult::invalid(ERROR_CODE_SELECTION, MSG_SELECTION)
        } else {
            ValidationResult::Valid
        }
    }

    fn error_message(&self) -> &str {
        MSG_SELECTION
    }
}

/// Email shape check: `local@domain.tld` where no part contains whitespace or `@`.
///
/// Empty input passes; chain after [`Required`] for required fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailFormat;

impl EmailFormat {
    /// Whether `value` has exactly one `@`, a non-empty local part, and a
    /// domain containing a `.` with at least one character on each side.
    #[must_use]
    pub fn matches(value: &str) -> bool {
        if value.chars().any(text::is_space) {
            return false;
        }
        let Some((local, domain)) = value.split_once('@') else {
            return false;
        };
        if local.is_empty() || domain.contains('@') {
            return false;
        }
        let chars: Vec<char> = domain.chars().collect();
        chars.len() >= 3 && chars[1..chars.len() - 1].contains(&'.')
    }
}

impl Validator<str> for EmailFormat {
    fn validate(&self, value: &str) -> ValidationResult {
        let trimmed = text::trim(value);
        if trimmed.is_empty() || Self::matches(trimmed) {
            ValidationResult::Valid
        } else {
            ValidationResult::invalid(ERROR_CODE_EMAIL, MSG_EMAIL)
        }
    }

    fn error_message(&self) -> &str {
        MSG_EMAIL
    }
}

/// Rejects email addresses whose domain is on a denylist.
///
/// The domain is the text after the first `@`, compared exactly (no case
/// folding, no subdomain matching). Values without `@` pass.
#[derive(Debug, Clone, Copy)]
pub struct NotDisposable<'a> {
    pub domains: &'a [String],
}

impl<'a> NotDisposable<'a> {
    #[must_use]
    pub fn new(domains: &'a [String]) -> Self {
        Self { domains }
    }

    /// Domain part of `email`: everything after the first `@`.
    #[must_use]
    pub fn domain_of(email: &str) -> Option<&str> {
        email
            .split_once('@')
            .map(|(_, rest)| rest.split('@').next().unwrap_or(rest))
    }
}

impl Validator<str> for NotDisposable<'_> {
    fn validate(&self, value: &str) -> ValidationResult {
        let Some(domain) = Self::domain_of(text::trim(value)) else {
            return ValidationResult::Valid;
        };
        if self.domains.iter().any(|d| d == domain) {
            ValidationResult::Invalid(
                ValidationError::new(ERROR_CODE_DISPOSABLE, MSG_DISPOSABLE)
                    .with_param("domain", domain),
            )
        } else {
            ValidationResult::Valid
        }
    }

    fn error_message(&self) -> &str {
        MSG_DISPOSABLE
    }
}

/// Requires a phone value to have exactly the rule's length in UTF-16 code units.
#[derive(Debug, Clone, Copy)]
pub struct PhoneLength<'a> {
    pub rule: &'a PhoneRule,
    /// Selected country code, quoted in the message. May be empty.
    pub country: &'a str,
}

impl<'a> PhoneLength<'a> {
    #[must_use]
    pub fn new(rule: &'a PhoneRule, country: &'a str) -> Self {
        Self { rule, country }
    }
}

impl Validator<str> for PhoneLength<'_> {
    fn validate(&self, value: &str) -> ValidationResult {
        let len = text::input_len(text::trim(value));
        if len == self.rule.required_digits {
            return ValidationResult::Valid;
        }
        let template = if self.country.is_empty() {
            MSG_PHONE_LENGTH_NO_COUNTRY
        } else {
            MSG_PHONE_LENGTH
        };
        ValidationResult::Invalid(
            ValidationError::new(ERROR_CODE_PHONE_LENGTH, template)
                .with_param("digits", self.rule.required_digits)
                .with_param("country", self.country)
                .with_param("actual", len),
        )
    }

    fn error_message(&self) -> &str {
        MSG_PHONE_LENGTH
    }
}

/// Requires every character to be an ASCII decimal digit.
#[derive(Debug, Clone, Copy, Default)]
pub struct Numeric;

impl Validator<str> for Numeric {
    fn validate(&self, value: &str) -> ValidationResult {
        let trimmed = text::trim(value);
        if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
            ValidationResult::Valid
        } else {
            ValidationResult::invalid(ERROR_CODE_PHONE_NUMERIC, MSG_PHONE_NUMERIC)
        }
    }

    fn error_message(&self) -> &str {
        MSG_PHONE_NUMERIC
    }
}

/// Requires a value to equal a reference value exactly.
#[derive(Debug, Clone, Copy)]
pub struct Matches<'a> {
    pub expected: &'a str,
}

impl<'a> Matches<'a> {
    #[must_use]
    pub fn new(expected: &'a str) -> Self {
        Self { expected }
    }
}

impl Validator<str> for Matches<'_> {
    fn validate(&self, value: &str) -> ValidationResult {
        if value == self.expected {
            ValidationResult::Valid
        } else {
            ValidationResult::invalid(ERROR_CODE_MISMATCH, MSG_MISMATCH)
        }
    }

    fn error_message(&self) -> &str {
        MSG_MISMATCH
    }
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// Runs `first`, then `second` only if `first` passed.
#[derive(Debug, Clone)]
pub struct And<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> And<A, B> {
    #[must_use]
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T: ?Sized, A, B> Validator<T> for And<A, B>
where
    A: Validator<T>,
    B: Validator<T>,
{
    fn validate(&self, value: &T) -> ValidationResult {
        match self.first.validate(value) {
            ValidationResult::Valid => self.second.validate(value),
            err => err,
        }
    }

    fn error_message(&self) -> &str {
        self.first.error_message()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
