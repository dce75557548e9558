use thiserror::Error;

use crate::types::BadgeConfig;

/// Shape problems in a badge configuration. Advisory only: rendering
/// carries on regardless.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigWarning {
    #[error("max must not be negative, got {0}")]
    NegativeMax(i64),
    #[error("both `component` and `slots.root` are set; `component` is used")]
    ConflictingRootElement,
    #[error("attribute names must not be empty")]
    EmptyAttributeName,
    #[error("`{0}` passed as a raw attribute; use the dedicated prop instead")]
    RawAttribute(String),
}

/// Parts of the component configuration that live outside `BadgeConfig`.
#[derive(Debug, Clone, Default)]
pub struct ValidationContext<'a> {
    pub has_component: bool,
    pub has_root_slot: bool,
    pub attribute_names: Vec<&'a str>,
}

pub fn validate_config(config: &BadgeConfig, context: &ValidationContext<'_>) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if config.max < 0 {
        warnings.push(ConfigWarning::NegativeMax(config.max));
    }
    if context.has_component && context.has_root_slot {
        warnings.push(ConfigWarning::ConflictingRootElement);
    }
    for name in &context.attribute_names {
        let name = name.trim();
        if name.is_empty() {
            warnings.push(ConfigWarning::EmptyAttributeName);
        } else if name == "class" || name == "style" {
            warnings.push(ConfigWarning::RawAttribute(name.to_string()));
        }
    }

    warnings
}

/// Logs each warning for `component` through the `log` facade.
pub fn report_warnings(component: &str, warnings: &[ConfigWarning]) {
    for warning in warnings {
        log::warn!("{}: {}", component, warning);
    }
}
