use serde::{Deserialize, Serialize};
use std::fmt;

/// Cap applied to numeric content when no `max` is given.
pub const DEFAULT_MAX: i64 = 99;

// ============================================================================
// Content Types
// ============================================================================

/// Content rendered inside the badge slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BadgeContent {
    Number(i64),
    Text(String),
}

impl BadgeContent {
    /// Falsy content (`0` or an empty string) is never clamped.
    pub fn is_truthy(&self) -> bool {
        match self {
            BadgeContent::Number(n) => *n != 0,
            BadgeContent::Text(s) => !s.is_empty(),
        }
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, BadgeContent::Number(0))
    }

    /// Numeric reading of text content, parsed after trimming. Only the
    /// spelled-out `Infinity` is accepted as non-finite; `inf`, `nan` and
    /// friends are not numbers here.
    pub fn parse_text_number(text: &str) -> Option<f64> {
        match text.trim() {
            "Infinity" | "+Infinity" => Some(f64::INFINITY),
            "-Infinity" => Some(f64::NEG_INFINITY),
            trimmed => trimmed.parse::<f64>().ok().filter(|v| v.is_finite()),
        }
    }

    /// Whether the content reads as a number greater than `max`. Numbers are
    /// compared as integers.
    pub fn exceeds(&self, max: i64) -> bool {
        match self {
            BadgeContent::Number(n) => *n > max,
            BadgeContent::Text(s) => Self::parse_text_number(s)
                .map(|value| value > max as f64)
                .unwrap_or(false),
        }
    }
}

impl fmt::Display for BadgeContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BadgeContent::Number(n) => write!(f, "{}", n),
            BadgeContent::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for BadgeContent {
    fn from(value: i64) -> Self {
        BadgeContent::Number(value)
    }
}

impl From<i32> for BadgeContent {
    fn from(value: i32) -> Self {
        BadgeContent::Number(value.into())
    }
}

impl From<u32> for BadgeContent {
    fn from(value: u32) -> Self {
        BadgeContent::Number(value.into())
    }
}

impl From<&str> for BadgeContent {
    fn from(value: &str) -> Self {
        BadgeContent::Text(value.to_string())
    }
}

impl From<String> for BadgeContent {
    fn from(value: String) -> Self {
        BadgeContent::Text(value)
    }
}

// ============================================================================
// Configuration Types
// ============================================================================

/// Data part of the badge configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgeConfig {
    pub badge_content: Option<BadgeContent>,
    pub invisible: bool,
    pub max: i64,
    pub show_zero: bool,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            badge_content: None,
            invisible: false,
            max: DEFAULT_MAX,
            show_zero: false,
        }
    }
}

impl BadgeConfig {
    pub fn with_content(content: impl Into<BadgeContent>) -> Self {
        Self {
            badge_content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn max(mut self, max: i64) -> Self {
        self.max = max;
        self
    }

    pub fn show_zero(mut self, show_zero: bool) -> Self {
        self.show_zero = show_zero;
        self
    }

    pub fn invisible(mut self, invisible: bool) -> Self {
        self.invisible = invisible;
        self
    }
}

// ============================================================================
// Derived State Types
// ============================================================================

/// Content and cap last shown while the badge was visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeSnapshot {
    pub badge_content: Option<BadgeContent>,
    pub max: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeState {
    pub badge_content: Option<BadgeContent>,
    pub max: i64,
    pub display_value: Option<BadgeContent>,
    pub invisible: bool,
}

impl BadgeState {
    pub fn snapshot(&self) -> BadgeSnapshot {
        BadgeSnapshot {
            badge_content: self.badge_content.clone(),
            max: self.max,
        }
    }
}

/// Configuration merged with the derived fields, used for class and prop
/// computation only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeOwnerState {
    pub badge_content: Option<BadgeContent>,
    pub invisible: bool,
    pub max: i64,
    pub show_zero: bool,
}

impl BadgeOwnerState {
    pub fn new(config: &BadgeConfig, state: &BadgeState) -> Self {
        Self {
            badge_content: state.badge_content.clone(),
            invisible: state.invisible,
            max: state.max,
            show_zero: config.show_zero,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
