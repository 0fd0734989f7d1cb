#![forbid(unsafe_code)]

//! Session behavior switches.

/// How a [`FormSession`](crate::FormSession) reacts to edits.
///
/// The default mirrors live in-browser validation: every input validates the
/// edited field and re-checks the submit gate, and blur validates only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Validate the edited field on every input event.
    ///
    /// When off, error text appears only on blur and on a rejected submit
    /// (the submit gate is still recomputed on input).
    pub live_validation: bool,
    /// Also recompute the submit gate on blur.
    pub gate_on_blur: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            live_validation: true,
            gate_on_blur: false,
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn live_validation(mut self, enabled: bool) -> Self {
        self.live_validation = enabled;
        self
    }

    #[must_use]
    pub fn gate_on_blur(mut self, enabled: bool) -> Self {
        self.gate_on_blur = enabled;
        self
    }
}
