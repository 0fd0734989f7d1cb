#![forbid(unsafe_code)]

//! Engine configuration.
//!
//! [`EngineConfig`] bundles the reference data and the disposable-domain
//! denylist. The default configuration is the built-in USA / UK / IN table
//! with the stock denylist.
//!
//! With the `serde` feature, a configuration can be loaded from JSON:
//!
//! ```json
//! {
//!   "reference": {
//!     "countries": [
//!       {
//!         "code": "USA",
//!         "phone_rule": { "required_digits": 10, "example_format": "1234567890" },
//!         "states": [ { "name": "Texas", "cities": ["Houston", "Austin"] } ]
//!       }
//!     ],
//!     "default_phone_rule": { "required_digits": 10, "example_format": "1234567890" }
//!   },
//!   "disposable_domains": ["mailinator.com"]
//! }
//! ```

use std::collections::HashSet;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::reference::ReferenceData;
use crate::validation::{DEFAULT_DISPOSABLE_DOMAINS, FieldRules};

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors raised while building or loading a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O failure while reading a configuration source.
    Io(std::io::Error),
    /// Malformed configuration document.
    #[cfg(feature = "serde")]
    Parse(String),
    /// Reference data that breaks a structural invariant.
    InvalidReference(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "serde")]
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
            Self::InvalidReference(msg) => write!(f, "invalid reference data: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "serde")]
            Self::Parse(_) => None,
            Self::InvalidReference(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Result type for configuration APIs.
pub type ConfigResult<T> = Result<T, ConfigError>;

// ---------------------------------------------------------------------------
// EngineConfig
// ---------------------------------------------------------------------------

/// Reference data plus the disposable-domain denylist.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineConfig {
    #[cfg_attr(feature = "serde", serde(default))]
    pub reference: ReferenceData,
    #[cfg_attr(feature = "serde", serde(default = "default_disposable_domains"))]
    pub disposable_domains: Vec<String>,
}

fn default_disposable_domains() -> Vec<String> {
    DEFAULT_DISPOSABLE_DOMAINS
        .iter()
        .map(|d| (*d).to_string())
        .collect()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reference: ReferenceData::builtin(),
            disposable_domains: default_disposable_domains(),
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the reference data.
    #[must_use]
    pub fn reference(mut self, reference: ReferenceData) -> Self {
        self.reference = reference;
        self
    }

    /// Add a domain to the denylist.
    #[must_use]
    pub fn disposable_domain(mut self, domain: impl Into<String>) -> Self {
        self.disposable_domains.push(domain.into());
        self
    }

    /// Replace the whole denylist.
    #[must_use]
    pub fn disposable_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disposable_domains = domains.into_iter().map(Into::into).collect();
        self
    }

    /// Whether `domain` is on the denylist.
    #[must_use]
    pub fn is_disposable(&self, domain: &str) -> bool {
        self.disposable_domains.iter().any(|d| d == domain)
    }

    /// Field rules bound to this configuration.
    #[must_use]
    pub fn rules(&self) -> FieldRules<'_> {
        FieldRules::new(&self.reference, &self.disposable_domains)
    }

    /// Check structural invariants of the reference data.
    ///
    /// Country codes must be non-empty and unique, state names unique within a
    /// country, city names unique within a state, and every phone rule must
    /// require at least one digit.
    pub fn validate(&self) -> ConfigResult<()> {
        let reference = &self.reference;
        if reference.default_phone_rule().required_digits == 0 {
            return Err(ConfigError::InvalidReference(
                "default phone rule requires zero digits".into(),
            ));
        }

        let mut codes = HashSet::new();
        for country in reference.countries() {
            if country.code.is_empty() {
                return Err(ConfigError::InvalidReference("empty country code".into()));
            }
            if !codes.insert(country.code.as_str()) {
                return Err(ConfigError::InvalidReference(format!(
                    "duplicate country {}",
                    country.code
                )));
            }
            if country.phone_rule.required_digits == 0 {
                return Err(ConfigError::InvalidReference(format!(
                    "phone rule for {} requires zero digits",
                    country.code
                )));
            }

            let mut states = HashSet::new();
            for state in &country.states {
                if state.name.is_empty() || !states.insert(state.name.as_str()) {
                    return Err(ConfigError::InvalidReference(format!(
                        "empty or duplicate state {:?} in {}",
                        state.name, country.code
                    )));
                }
                let mut cities = HashSet::new();
                for city in &state.cities {
                    if city.is_empty() || !cities.insert(city.as_str()) {
                        return Err(ConfigError::InvalidReference(format!(
                            "empty or duplicate city {:?} in {}/{}",
                            city, country.code, state.name
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl EngineConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ConfigError::Parse(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration.
    pub fn from_json_reader(reader: impl std::io::Read) -> ConfigResult<Self> {
        let config: Self = serde_json::from_reader(reader).map_err(|e| {
            if e.is_io() {
                ConfigError::Io(e.into())
            } else {
                ConfigError::Parse(format!("failed to parse config: {e}"))
            }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("failed to serialize config: {e}")))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{CountryEntry, PhoneRule, StateEntry};

    #[test]
    fn default_is_builtin() {
        let config = EngineConfig::default();
        assert_eq!(config.reference, ReferenceData::builtin());
        assert_eq!(config.disposable_domains.len(), 4);
        assert!(config.is_disposable("mailinator.com"));
        assert!(!config.is_disposable("example.com"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_methods() {
        let config = EngineConfig::new()
            .disposable_domain("trashmail.com")
            .reference(ReferenceData::empty());
        assert!(config.is_disposable("trashmail.com"));
        assert!(config.reference.countries().is_empty());

        let config = config.disposable_domains(["only.com"]);
        assert_eq!(config.disposable_domains, vec!["only.com"]);
    }

    #[test]
    fn rejects_duplicate_country() {
        let reference = ReferenceData::builtin()
            .with_country(CountryEntry::new("USA", PhoneRule::default()));
        let err = EngineConfig::new().reference(reference).validate().unwrap_err();
        assert!(err.to_string().contains("duplicate country USA"), "{err}");
    }

    #[test]
    fn rejects_zero_digit_rule() {
        let reference =
            ReferenceData::empty().with_country(CountryEntry::new("XX", PhoneRule::new(0, "")));
        assert!(EngineConfig::new().reference(reference).validate().is_err());

        let reference = ReferenceData::empty().with_default_phone_rule(PhoneRule::new(0, ""));
        assert!(EngineConfig::new().reference(reference).validate().is_err());
    }

    #[test]
    fn rejects_duplicate_state_and_city() {
        let reference = ReferenceData::empty().with_country(
            CountryEntry::new("XX", PhoneRule::default())
                .with_state(StateEntry::new("A", ["x"]))
                .with_state(StateEntry::new("A", ["y"])),
        );
        assert!(EngineConfig::new().reference(reference).validate().is_err());

        let reference = ReferenceData::empty().with_country(
            CountryEntry::new("XX", PhoneRule::default())
                .with_state(StateEntry::new("A", ["x", "x"])),
        );
        assert!(EngineConfig::new().reference(reference).validate().is_err());
    }

    #[test]
    fn rejects_empty_code() {
        let reference = ReferenceData::empty().with_country(CountryEntry::new("", PhoneRule::default()));
        let err = EngineConfig::new().reference(reference).validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidReference(_)));
    }

    #[test]
    fn io_error_source() {
        let err = ConfigError::from(std::io::Error::other("boom"));
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.to_string(), "I/O error: boom");
    }
}
