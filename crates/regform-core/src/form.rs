#![forbid(unsafe_code)]

//! Field identifiers and the owned form state.
//!
//! [`FormState`] holds every current value of the registration form. The UI
//! layer owns exactly one instance and threads it through engine calls.
//!
//! Free-text fields are written with [`FormState::set_text`]. The geographic
//! selections (country, state, city) are only written through
//! [`crate::cascade`], which keeps them consistent with the reference data.

use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// FieldId
// ---------------------------------------------------------------------------

/// One of the eleven fields of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    Phone,
    Country,
    State,
    City,
    Password,
    ConfirmPassword,
    Terms,
    Gender,
}

impl FieldId {
    /// All fields, in form order.
    pub const ALL: [FieldId; 11] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Phone,
        Self::Country,
        Self::State,
        Self::City,
        Self::Password,
        Self::ConfirmPassword,
        Self::Terms,
        Self::Gender,
    ];

    /// Stable element key (`"firstName"`, `"confirmPassword"`, ...).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Country => "country",
            Self::State => "state",
            Self::City => "city",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::Terms => "terms",
            Self::Gender => "gender",
        }
    }

    /// Key of the element that displays this field's error text.
    #[must_use]
    pub fn error_slot(self) -> String {
        format!("{}Error", self.key())
    }

    /// Parse a stable element key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Whether the field carries a text value.
    #[must_use]
    pub const fn is_text(self) -> bool {
        !matches!(self, Self::Terms | Self::Gender)
    }

    /// Whether the field is one of the cascading selections.
    #[must_use]
    pub const fn is_geographic(self) -> bool {
        matches!(self, Self::Country | Self::State | Self::City)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ---------------------------------------------------------------------------
// Gender
// ---------------------------------------------------------------------------

/// A gender checkbox option. Several may be selected at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Self::Male, Self::Female, Self::Other];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

// ---------------------------------------------------------------------------
// FieldValue
// ---------------------------------------------------------------------------

/// The raw current value of a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Text input or select value. Empty means unset.
    Text(String),
    /// Checkbox state.
    Flag(bool),
    /// Selected options of a checkbox group.
    Selection(BTreeSet<Gender>),
}

impl FieldValue {
    /// Text content, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// FormState
// ---------------------------------------------------------------------------

/// Every current value of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    pub(crate) country: String,
    pub(crate) state: String,
    pub(crate) city: String,
    password: String,
    confirm_password: String,
    terms: bool,
    gender: BTreeSet<Gender>,
}

impl FormState {
    /// An empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw text of a text field, `None` for terms and gender.
    #[must_use]
    pub fn text(&self, field: FieldId) -> Option<&str> {
        let value = match field {
            FieldId::FirstName => &self.first_name,
            FieldId::LastName => &self.last_name,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::Country => &self.country,
            FieldId::State => &self.state,
            FieldId::City => &self.city,
            FieldId::Password => &self.password,
            FieldId::ConfirmPassword => &self.confirm_password,
            FieldId::Terms | FieldId::Gender => return None,
        };
        Some(value)
    }

    /// Current value of any field.
    #[must_use]
    pub fn value(&self, field: FieldId) -> FieldValue {
        match field {
            FieldId::Terms => FieldValue::Flag(self.terms),
            FieldId::Gender => FieldValue::Selection(self.gender.clone()),
            other => FieldValue::Text(self.text(other).unwrap_or_default().to_string()),
        }
    }

    /// Write a free-text field.
    ///
    /// Returns `false` (and changes nothing) for terms, gender and the
    /// geographic selections; those have dedicated entry points.
    pub fn set_text(&mut self, field: FieldId, value: impl Into<String>) -> bool {
        let slot = match field {
            FieldId::FirstName => &mut self.first_name,
            FieldId::LastName => &mut self.last_name,
            FieldId::Email => &mut self.email,
            FieldId::Phone => &mut self.phone,
            FieldId::Password => &mut self.password,
            FieldId::ConfirmPassword => &mut self.confirm_password,
            FieldId::Country
            | FieldId::State
            | FieldId::City
            | FieldId::Terms
            | FieldId::Gender => return false,
        };
        *slot = value.into();
        true
    }

    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    #[must_use]
    pub fn confirm_password(&self) -> &str {
        &self.confirm_password
    }

    #[must_use]
    pub fn terms(&self) -> bool {
        self.terms
    }

    pub fn set_terms(&mut self, accepted: bool) {
        self.terms = accepted;
    }

    #[must_use]
    pub fn gender(&self) -> &BTreeSet<Gender> {
        &self.gender
    }

    /// Check or uncheck one gender option.
    pub fn set_gender(&mut self, gender: Gender, selected: bool) {
        if selected {
            self.gender.insert(gender);
        } else {
            self.gender.remove(&gender);
        }
    }

    /// Flip one gender option; returns the new checked state.
    pub fn toggle_gender(&mut self, gender: Gender) -> bool {
        let selected = !self.gender.contains(&gender);
        self.set_gender(gender, selected);
        selected
    }

    /// Clear every value back to the initial empty form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether nothing has been entered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
