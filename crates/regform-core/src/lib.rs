#![forbid(unsafe_code)]

//! Validation and dependency engine for the registration form.
//!
//! # Role in regform
//! `regform-core` holds all logic of the form: per-field rules, the cascading
//! country → state → city selection, per-country phone rules, password
//! strength scoring, and the submit gate. It has no I/O and no global state.
//! Every operation is a synchronous, pure computation over a caller-owned
//! [`FormState`](form::FormState).
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`reference`] | Country / state / city hierarchy and phone rules |
//! | [`form`] | Field identifiers and the owned form state |
//! | [`validation`] | Composable validators and the per-field rule table |
//! | [`cascade`] | Dependent selector resets and option lists |
//! | [`strength`] | Advisory password strength meter |
//! | [`text`] | Browser whitespace and UTF-16 length |
//! | [`aggregate`] | Strict report and lenient submit gate |
//! | [`config`] | Engine configuration and loading |
//! | [`engine`] | The inbound surface for a UI layer |
//!
//! # Features
//!
//! | Feature | Effect |
//! |---------|--------|
//! | `tracing` | Debug spans around validation, cascades and gate checks |
//! | `serde` | JSON loading and saving of [`EngineConfig`](config::EngineConfig) |

pub mod aggregate;
pub mod cascade;
pub mod config;
pub mod engine;
pub mod form;
pub mod reference;
pub mod strength;
pub mod text;
pub mod validation;

pub use aggregate::{FormReport, full_validate, submit_gate_check};
pub use cascade::Selector;
pub use config::{ConfigError, ConfigResult, EngineConfig};
pub use engine::{CountryChange, RegistrationEngine, StateChange};
pub use form::{FieldId, FieldValue, FormState, Gender};
pub use reference::{PhoneRule, ReferenceData};
pub use strength::{ColorToken, StrengthLevel, StrengthResult};
pub use validation::{FieldRules, FieldVerdict, InvalidTarget, ValidationResult};
