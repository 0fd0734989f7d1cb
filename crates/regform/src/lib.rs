#![forbid(unsafe_code)]

//! regform public facade crate.
//!
//! This crate provides the stable surface area for users. It re-exports the
//! engine and value types from `regform-core`, the event session from
//! `regform-runtime` (feature `runtime`, on by default), and offers a
//! lightweight prelude.
//!
//! ```
//! use regform::prelude::*;
//!
//! let mut session = FormSession::new();
//! session.handle_event(FormEvent::select_country("UK"));
//! assert_eq!(session.view().phone_placeholder, "07123456789");
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use regform_core::{
    ColorToken, ConfigError, CountryChange, EngineConfig, FieldId, FieldValue, FieldVerdict,
    FormReport, FormState, Gender, InvalidTarget, PhoneRule, ReferenceData, RegistrationEngine,
    Selector, StateChange, StrengthLevel, StrengthResult, ValidationResult,
};

#[cfg(feature = "runtime")]
pub use regform_runtime::{EventOutcome, FormEvent, FormSession, FormView, SessionConfig};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for regform.
#[derive(Debug)]
pub enum Error {
    /// I/O failure while reading configuration.
    Io(std::io::Error),
    /// Invalid or malformed configuration.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Config(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(io) => Self::Io(io),
            other => Self::Config(other),
        }
    }
}

/// Standard result type for regform APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Loading --------------------------------------------------------------

/// Build an engine from a JSON configuration file.
#[cfg(feature = "serde")]
pub fn engine_from_path(path: impl AsRef<std::path::Path>) -> Result<RegistrationEngine> {
    let file = std::fs::File::open(path)?;
    let config = EngineConfig::from_json_reader(std::io::BufReader::new(file))?;
    Ok(RegistrationEngine::with_config(config)?)
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        EngineConfig, Error, FieldId, FormState, Gender, ReferenceData, RegistrationEngine,
        Result, StrengthLevel,
    };

    #[cfg(feature = "runtime")]
    pub use crate::{EventOutcome, FormEvent, FormSession, SessionConfig};

    pub use crate::core;
    #[cfg(feature = "runtime")]
    pub use crate::runtime;
}

pub use regform_core as core;
#[cfg(feature = "runtime")]
pub use regform_runtime as runtime;
