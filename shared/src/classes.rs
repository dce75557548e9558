use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::BadgeOwnerState;

/// Prefix of generated class names unless configured otherwise.
pub const DEFAULT_CLASS_PREFIX: &str = "Base";

/// Slots that name a shared state rather than a component part.
/// These generate `"{prefix}-{state}"` instead of a component class.
pub const GLOBAL_STATE_CLASSES: &[&str] = &[
    "active",
    "checked",
    "completed",
    "disabled",
    "error",
    "expanded",
    "focused",
    "focusVisible",
    "open",
    "readOnly",
    "required",
    "selected",
];

/// Caller-supplied extra class names, keyed by class key (`root`, `badge`,
/// `invisible`).
pub type ClassOverrides = BTreeMap<String, String>;

// ============================================================================
// Class Name Configuration
// ============================================================================

/// Controls how utility class names are generated for every component
/// below the point it is provided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassNameConfig {
    pub disable_default_classes: bool,
    pub prefix: String,
}

impl Default for ClassNameConfig {
    fn default() -> Self {
        Self {
            disable_default_classes: false,
            prefix: DEFAULT_CLASS_PREFIX.to_string(),
        }
    }
}

impl ClassNameConfig {
    /// Configuration that emits no generated class names at all.
    pub fn without_default_classes() -> Self {
        Self {
            disable_default_classes: true,
            ..Self::default()
        }
    }

    pub fn utility_class(&self, component: &str, slot: &str) -> String {
        if GLOBAL_STATE_CLASSES.contains(&slot) {
            format!("{}-{}", self.prefix, slot)
        } else {
            format!("{}{}-{}", self.prefix, component, slot)
        }
    }

    /// Class generator for `component`, honouring `disable_default_classes`.
    pub fn override_fn<'a>(&'a self, component: &'a str) -> impl Fn(&str) -> String + 'a {
        move |slot| {
            if self.disable_default_classes {
                String::new()
            } else {
                self.utility_class(component, slot)
            }
        }
    }
}

// ============================================================================
// Class Composition
// ============================================================================

/// Builds the final class string of each slot.
///
/// Every present key contributes its generated class (when non-empty)
/// followed by the caller's override for that key.
pub fn compose_classes<F>(
    slots: &[(&str, Vec<Option<&str>>)],
    get_utility_class: F,
    classes: &ClassOverrides,
) -> BTreeMap<String, String>
where
    F: Fn(&str) -> String,
{
    slots
        .iter()
        .map(|(slot, keys)| {
            let mut parts: Vec<String> = Vec::new();
            for &key in keys.iter().flatten() {
                let utility_class = get_utility_class(key);
                if !utility_class.is_empty() {
                    parts.push(utility_class);
                }
                if let Some(extra) = classes.get(key).filter(|c| !c.is_empty()) {
                    parts.push(extra.clone());
                }
            }
            (slot.to_string(), parts.join(" "))
        })
        .collect()
}

// ============================================================================
// Badge Classes
// ============================================================================

pub const BADGE_COMPONENT: &str = "Badge";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeClassNames {
    pub root: String,
    pub badge: String,
}

/// Class name of a badge slot with the default configuration.
pub fn badge_class(slot: &str) -> String {
    ClassNameConfig::default().utility_class(BADGE_COMPONENT, slot)
}

pub fn badge_utility_classes(
    owner_state: &BadgeOwnerState,
    config: &ClassNameConfig,
    classes: &ClassOverrides,
) -> BadgeClassNames {
    let slots = [
        ("root", vec![Some("root")]),
        (
            "badge",
            vec![Some("badge"), owner_state.invisible.then_some("invisible")],
        ),
    ];

    let mut composed = compose_classes(&slots, config.override_fn(BADGE_COMPONENT), classes);

    BadgeClassNames {
        root: composed.remove("root").unwrap_or_default(),
        badge: composed.remove("badge").unwrap_or_default(),
    }
}
