#![forbid(unsafe_code)]

//! Geographic hierarchy and per-country phone rules.
//!
//! Reference data is a read-only lookup table: country code → ordered states →
//! ordered cities, plus one [`PhoneRule`] per country. Lookups never fail.
//! Unknown keys produce an empty sequence or the default phone rule.
//!
//! # Example
//!
//! ```rust
//! use regform_core::reference::ReferenceData;
//!
//! let data = ReferenceData::builtin();
//! assert_eq!(data.states_of("USA"), vec!["California", "Texas"]);
//! assert_eq!(data.cities_of("USA", "Texas"), ["Houston", "Austin"]);
//! assert_eq!(data.phone_rule_of("UK").required_digits, 11);
//! assert!(data.states_of("Atlantis").is_empty());
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Digit count required when no country-specific rule applies.
pub const DEFAULT_PHONE_DIGITS: usize = 10;
/// Placeholder shown when no country-specific rule applies.
pub const DEFAULT_PHONE_EXAMPLE: &str = "1234567890";

// ---------------------------------------------------------------------------
// PhoneRule
// ---------------------------------------------------------------------------

/// Expected phone shape for one country.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhoneRule {
    /// Exact number of characters a phone value must have.
    pub required_digits: usize,
    /// Example value, used as the phone input placeholder.
    pub example_format: String,
}

impl PhoneRule {
    /// Create a phone rule.
    #[must_use]
    pub fn new(required_digits: usize, example_format: impl Into<String>) -> Self {
        Self {
            required_digits,
            example_format: example_format.into(),
        }
    }
}

impl Default for PhoneRule {
    fn default() -> Self {
        Self::new(DEFAULT_PHONE_DIGITS, DEFAULT_PHONE_EXAMPLE)
    }
}

// ---------------------------------------------------------------------------
// Hierarchy entries
// ---------------------------------------------------------------------------

/// A state (region) with its ordered cities.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StateEntry {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cities: Vec<String>,
}

impl StateEntry {
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, cities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            cities: cities.into_iter().map(Into::into).collect(),
        }
    }
}

/// A country with its phone rule and ordered states.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CountryEntry {
    /// Selection value, e.g. `"USA"`.
    pub code: String,
    pub phone_rule: PhoneRule,
    #[cfg_attr(feature = "serde", serde(default))]
    pub states: Vec<StateEntry>,
}

impl CountryEntry {
    #[must_use]
    pub fn new(code: impl Into<String>, phone_rule: PhoneRule) -> Self {
        Self {
            code: code.into(),
            phone_rule,
            states: Vec::new(),
        }
    }

    /// Append a state. Insertion order is the order offered to the user.
    #[must_use]
    pub fn with_state(mut self, state: StateEntry) -> Self {
        self.states.push(state);
        self
    }

    /// Look up a state by exact name.
    #[must_use]
    pub fn state(&self, name: &str) -> Option<&StateEntry> {
        self.states.iter().find(|s| s.name == name)
    }
}

// ---------------------------------------------------------------------------
// ReferenceData
// ---------------------------------------------------------------------------

/// The full lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReferenceData {
    countries: Vec<CountryEntry>,
    #[cfg_attr(feature = "serde", serde(default))]
    default_phone_rule: PhoneRule,
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ReferenceData {
    /// Reference data with no countries and the default phone rule.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            countries: Vec::new(),
            default_phone_rule: PhoneRule::default(),
        }
    }

    /// The built-in USA / UK / IN table.
    #[must_use]
    pub fn builtin() -> Self {
        Self::empty()
            .with_country(
                CountryEntry::new("USA", PhoneRule::new(10, "1234567890"))
                    .with_state(StateEntry::new(
                        "California",
                        ["Los Angeles", "San Francisco"],
                    ))
                    .with_state(StateEntry::new("Texas", ["Houston", "Austin"])),
            )
            .with_country(
                CountryEntry::new("UK", PhoneRule::new(11, "07123456789"))
                    .with_state(StateEntry::new("England", ["London", "Manchester"]))
                    .with_state(StateEntry::new("Scotland", ["Glasgow", "Edinburgh"])),
            )
            .with_country(
                CountryEntry::new("IN", PhoneRule::new(10, "9876543210"))
                    .with_state(StateEntry::new("Karnataka", ["Bangalore", "Mysore"]))
                    .with_state(StateEntry::new("Maharashtra", ["Mumbai", "Pune"])),
            )
    }

    /// Append a country.
    #[must_use]
    pub fn with_country(mut self, country: CountryEntry) -> Self {
        self.countries.push(country);
        self
    }

    /// Replace the rule used for unknown or unset countries.
    #[must_use]
    pub fn with_default_phone_rule(mut self, rule: PhoneRule) -> Self {
        self.default_phone_rule = rule;
        self
    }

    /// All countries in insertion order.
    #[must_use]
    pub fn countries(&self) -> &[CountryEntry] {
        &self.countries
    }

    /// Country codes in insertion order.
    pub fn country_codes(&self) -> impl Iterator<Item = &str> {
        self.countries.iter().map(|c| c.code.as_str())
    }

    /// Look up a country by code. The empty code never resolves.
    #[must_use]
    pub fn country(&self, code: &str) -> Option<&CountryEntry> {
        if code.is_empty() {
            return None;
        }
        self.countries.iter().find(|c| c.code == code)
    }

    /// Ordered state names of `country`, empty if unknown.
    #[must_use]
    pub fn states_of(&self, country: &str) -> Vec<&str> {
        self.country(country)
            .map(|c| c.states.iter().map(|s| s.name.as_str()).collect())
            .unwrap_or_default()
    }

    /// Ordered city names of `state` within `country`, empty if either is unknown.
    #[must_use]
    pub fn cities_of(&self, country: &str, state: &str) -> &[String] {
        self.country(country)
            .and_then(|c| c.state(state))
            .map(|s| s.cities.as_slice())
            .unwrap_or_default()
    }

    /// Phone rule for `country`, or the default rule.
    #[must_use]
    pub fn phone_rule_of(&self, country: &str) -> &PhoneRule {
        self.country(country)
            .map_or(&self.default_phone_rule, |c| &c.phone_rule)
    }

    /// The rule used for unknown or unset countries.
    #[must_use]
    pub fn default_phone_rule(&self) -> &PhoneRule {
        &self.default_phone_rule
    }

    /// Whether `state` is offered under `country`.
    #[must_use]
    pub fn has_state(&self, country: &str, state: &str) -> bool {
        self.country(country)
            .is_some_and(|c| c.state(state).is_some())
    }

    /// Whether `city` is offered under `state` within `country`.
    #[must_use]
    pub fn has_city(&self, country: &str, state: &str, city: &str) -> bool {
        self.cities_of(country, state).iter().any(|c| c == city)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
