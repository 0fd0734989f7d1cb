#![forbid(unsafe_code)]

//! Field validation built from composable validators.
//!
//! This module provides:
//! - A core [`Validator`] trait and the [`ValidationResult`] verdict type
//! - Built-in validators for the registration rules (required, email shape,
//!   disposable domains, phone length, numeric, matching confirmation)
//! - [`FieldRules`], the per-field rule table with exhaustive dispatch over
//!   [`FieldId`](crate::form::FieldId)
//!
//! # Example
//!
//! ```rust
//! use regform_core::validation::{And, EmailFormat, Required, Validator};
//!
//! let email = And::new(Required, EmailFormat);
//! assert!(email.validate("a@b.com").is_valid());
//! assert_eq!(email.validate("a@b").message(), "Invalid email format");
//! assert_eq!(email.validate("   ").message(), "Field is required");
//! ```

mod field_rules;
mod validators;

pub use field_rules::{FieldRules, FieldVerdict, InvalidTarget};
pub use validators::{
    // Composition
    And,
    // Built-in validators
    AtLeastOne,
    Checked,
    // Defaults
    DEFAULT_DISPOSABLE_DOMAINS,
    // Error codes
    ERROR_CODE_DISPOSABLE,
    ERROR_CODE_EMAIL,
    ERROR_CODE_MISMATCH,
    ERROR_CODE_PHONE_LENGTH,
    ERROR_CODE_PHONE_NUMERIC,
    ERROR_CODE_REQUIRED,
    ERROR_CODE_SELECTION,
    EmailFormat,
    // Messages
    MSG_DISPOSABLE,
    MSG_EMAIL,
    MSG_MISMATCH,
    MSG_PHONE_LENGTH,
    MSG_PHONE_LENGTH_NO_COUNTRY,
    MSG_PHONE_NUMERIC,
    MSG_REQUIRED,
    MSG_SELECTION,
    Matches,
    NotDisposable,
    Numeric,
    PhoneLength,
    Required,
    // Core types
    ValidationError,
    ValidationResult,
    Validator,
};
