pub mod badge;
pub mod classes;
pub mod render;
pub mod slot_props;
pub mod types;
pub mod validation;

pub use badge::{clamp_display, use_badge};
pub use classes::{
    badge_class, badge_utility_classes, compose_classes, BadgeClassNames, ClassNameConfig,
    ClassOverrides,
};
pub use render::{render_badge, BadgeRender, BadgeRenderInput, BadgeSlotOverride};
pub use slot_props::{
    merge_slot_props, resolve_element, ElementKind, ElementType, MergeSlotProps, PropBag,
    SlotOverride, SlotProps, DEFAULT_TAG,
};
pub use types::{BadgeConfig, BadgeContent, BadgeOwnerState, BadgeSnapshot, BadgeState, DEFAULT_MAX};
pub use validation::{report_warnings, validate_config, ConfigWarning, ValidationContext};
