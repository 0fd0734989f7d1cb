#![forbid(unsafe_code)]

//! Advisory password strength scoring.
//!
//! The score never gates form validity; it only drives the strength meter.
//!
//! | Level | Label | Color |
//! |-------|-------|-------|
//! | 0 | Empty | neutral `#e2e8f0` |
//! | 1 | Weak | red `#ef4444` |
//! | 2 | Fair | amber `#f59e0b` |
//! | 3 | Good | blue `#3b82f6` |
//! | 4 | Strong | green `#10b981` |

use std::fmt;

use crate::text;

/// Minimum length (exclusive) before character classes earn points.
pub const CLASS_BONUS_MIN_LEN: usize = 6;

const LABELS: [&str; 4] = ["Weak", "Fair", "Good", "Strong"];
const COLORS: [ColorToken; 4] = [
    ColorToken::Red,
    ColorToken::Amber,
    ColorToken::Blue,
    ColorToken::Green,
];

// ---------------------------------------------------------------------------
// ColorToken
// ---------------------------------------------------------------------------

/// Fixed palette for the strength meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    Neutral,
    Red,
    Amber,
    Blue,
    Green,
}

impl ColorToken {
    /// CSS hex color.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Neutral => "#e2e8f0",
            Self::Red => "#ef4444",
            Self::Amber => "#f59e0b",
            Self::Blue => "#3b82f6",
            Self::Green => "#10b981",
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

// ---------------------------------------------------------------------------
// StrengthLevel
// ---------------------------------------------------------------------------

/// Discrete strength level in `0..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum StrengthLevel {
    #[default]
    Empty = 0,
    Weak = 1,
    Fair = 2,
    Good = 3,
    Strong = 4,
}

impl StrengthLevel {
    /// Level for a raw score; scores above 4 saturate at `Strong`.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            0 => Self::Empty,
            1 => Self::Weak,
            2 => Self::Fair,
            3 => Self::Good,
            _ => Self::Strong,
        }
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self.value() {
            0 => "Empty",
            n => LABELS[usize::from(n) - 1],
        }
    }

    #[must_use]
    pub fn color(self) -> ColorToken {
        match self.value() {
            0 => ColorToken::Neutral,
            n => COLORS[usize::from(n) - 1],
        }
    }
}

// ---------------------------------------------------------------------------
// StrengthResult
// ---------------------------------------------------------------------------

/// Meter state for one password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthResult {
    pub level: StrengthLevel,
    pub label: &'static str,
    pub color: ColorToken,
}

impl Default for StrengthResult {
    fn default() -> Self {
        Self::empty()
    }
}

impl StrengthResult {
    #[must_use]
    pub fn from_level(level: StrengthLevel) -> Self {
        Self {
            level,
            label: level.label(),
            color: level.color(),
        }
    }

    /// An empty meter.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_level(StrengthLevel::Empty)
    }

    /// Bar width in percent (25 per level).
    #[must_use]
    pub fn width_percent(&self) -> u8 {
        self.level.value() * 25
    }
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Score `password`.
///
/// Non-empty passwords start at 1. Past six UTF-16 code units, each present class
/// adds one: an ASCII uppercase letter, an ASCII digit, and a character that
/// is neither an ASCII letter nor an ASCII digit.
///
/// ```rust
/// use regform_core::strength::{score, StrengthLevel};
///
/// assert_eq!(score("").level, StrengthLevel::Empty);
/// assert_eq!(score("abc").label, "Weak");
/// assert_eq!(score("Abcdefg1!").level, StrengthLevel::Strong);
/// ```
#[must_use]
pub fn score(password: &str) -> StrengthResult {
    if password.is_empty() {
        return StrengthResult::empty();
    }

    let mut points: u8 = 1;
    if text::input_len(password) > CLASS_BONUS_MIN_LEN {
        let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        let has_symbol = password.chars().any(|c| !c.is_ascii_alphanumeric());
        points += u8::from(has_upper) + u8::from(has_digit) + u8::from(has_symbol);
    }

    StrengthResult::from_level(StrengthLevel::from_score(points))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
