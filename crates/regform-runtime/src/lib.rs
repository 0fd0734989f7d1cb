#![forbid(unsafe_code)]

//! regform Runtime
//!
//! This crate drives a live registration form from user events, on top of
//! the pure engine in `regform-core`.
//!
//! # Key Components
//!
//! - [`FormSession`] - Owns the form state and applies [`FormEvent`]s
//! - [`FormView`] - Error text, invalid flags, selectors, meter, submit state
//! - [`SessionConfig`] - Live or blur-only validation, gate on blur
//!
//! # Role in regform
//! `regform-runtime` is the event layer. It translates input, blur, select,
//! toggle and submit events into engine calls and keeps the render state in
//! sync. It logs through `tracing`: one debug event per handled event and per
//! cascade reset, and an info event per accepted submission.

pub mod config;
pub mod session;
pub mod view;

pub use config::SessionConfig;
pub use session::{EventOutcome, FormEvent, FormSession};
pub use view::FormView;
