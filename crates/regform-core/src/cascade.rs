#![forbid(unsafe_code)]

//! Cascading country → state → city selection.
//!
//! Selecting a parent always clears every dependent selection and recomputes
//! the child's option list from [`ReferenceData`]. A selector is enabled only
//! while its parent is selected and resolvable.
//!
//! # Example
//!
//! ```rust
//! use regform_core::cascade;
//! use regform_core::form::FormState;
//! use regform_core::reference::ReferenceData;
//!
//! let data = ReferenceData::builtin();
//! let mut form = FormState::new();
//!
//! let country = cascade::on_country_selected(&mut form, &data, "USA");
//! assert!(country.states.enabled);
//!
//! let state = cascade::on_state_selected(&mut form, &data, "Texas");
//! assert_eq!(state.cities.options, vec!["Houston", "Austin"]);
//! ```

use crate::form::FormState;
use crate::reference::{PhoneRule, ReferenceData};

// ---------------------------------------------------------------------------
// Selector
// ---------------------------------------------------------------------------

/// Render state of a dependent select control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    pub enabled: bool,
    /// Options in display order, excluding the "Select ..." placeholder.
    pub options: Vec<String>,
}

impl Selector {
    /// A disabled selector with no options.
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    /// An enabled selector offering `options`.
    #[must_use]
    pub fn enabled<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enabled: true,
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `value` is one of the offered options.
    #[must_use]
    pub fn offers(&self, value: &str) -> bool {
        self.enabled && self.options.iter().any(|o| o == value)
    }
}

/// Result of selecting a country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountrySelection {
    pub states: Selector,
    /// Always disabled: no state is selected right after a country change.
    pub cities: Selector,
    /// Phone rule now in force.
    pub phone_rule: PhoneRule,
}

/// Result of selecting a state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSelection {
    pub cities: Selector,
}

// ---------------------------------------------------------------------------
// Transitions
// ---------------------------------------------------------------------------

/// Select `country`, clearing state and city.
///
/// The country value is stored even when it does not resolve; the state
/// selector is then disabled.
pub fn on_country_selected(
    form: &mut FormState,
    reference: &ReferenceData,
    country: &str,
) -> CountrySelection {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("country_selected", country).entered();

    form.country = country.to_string();
    form.state.clear();
    form.city.clear();

    CountrySelection {
        states: state_options(form, reference),
        cities: Selector::disabled(),
        phone_rule: reference.phone_rule_of(country).clone(),
    }
}

/// Select `state` under the current country, clearing city.
///
/// A state that does not resolve within the current country (including the
/// empty placeholder) leaves the state unset and the city selector disabled.
pub fn on_state_selected(
    form: &mut FormState,
    reference: &ReferenceData,
    state: &str,
) -> StateSelection {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("state_selected", country = form.country(), state).entered();

    form.city.clear();
    if reference.has_state(&form.country, state) {
        form.state = state.to_string();
    } else {
        form.state.clear();
    }

    StateSelection {
        cities: city_options(form, reference),
    }
}

/// Select `city` if it is offered under the current state.
///
/// Returns `false` and clears the city when it is not offered.
pub fn select_city(form: &mut FormState, reference: &ReferenceData, city: &str) -> bool {
    if reference.has_city(&form.country, &form.state, city) {
        form.city = city.to_string();
        true
    } else {
        form.city.clear();
        false
    }
}

/// State selector derived from the current country.
#[must_use]
pub fn state_options(form: &FormState, reference: &ReferenceData) -> Selector {
    if reference.country(form.country()).is_some() {
        Selector::enabled(reference.states_of(form.country()))
    } else {
        Selector::disabled()
    }
}

/// City selector derived from the current country and state.
#[must_use]
pub fn city_options(form: &FormState, reference: &ReferenceData) -> Selector {
    if reference.has_state(form.country(), form.state()) {
        Selector::enabled(reference.cities_of(form.country(), form.state()).iter().cloned())
    } else {
        Selector::disabled()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
