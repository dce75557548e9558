use crate::badge::use_badge;
use crate::classes::{badge_utility_classes, BadgeClassNames, ClassNameConfig, ClassOverrides};
use crate::slot_props::{merge_slot_props, resolve_element, ElementType, MergeSlotProps, PropBag, SlotOverride, SlotProps};
use crate::types::{BadgeConfig, BadgeOwnerState, BadgeSnapshot, BadgeState};

pub type BadgeSlotOverride = SlotOverride<BadgeOwnerState>;

/// Everything one badge render depends on. Unset references fall back to
/// the defaults (default tag, default class config, no overrides).
pub struct BadgeRenderInput<'a, C, H> {
    pub config: &'a BadgeConfig,
    pub previous: Option<&'a BadgeSnapshot>,
    pub class_config: Option<&'a ClassNameConfig>,
    pub classes: Option<&'a ClassOverrides>,
    pub component: Option<&'a ElementType<C>>,
    pub root_slot: Option<&'a ElementType<C>>,
    pub badge_slot: Option<&'a ElementType<C>>,
    pub root_slot_props: Option<&'a BadgeSlotOverride>,
    pub badge_slot_props: Option<&'a BadgeSlotOverride>,
    pub forwarded: Option<&'a PropBag>,
    pub node_ref: Option<H>,
}

impl<'a, C, H> BadgeRenderInput<'a, C, H> {
    pub fn new(config: &'a BadgeConfig) -> Self {
        Self {
            config,
            previous: None,
            class_config: None,
            classes: None,
            component: None,
            root_slot: None,
            badge_slot: None,
            root_slot_props: None,
            badge_slot_props: None,
            forwarded: None,
            node_ref: None,
        }
    }
}

/// Resolved elements and props of both slots.
#[derive(Debug, Clone)]
pub struct BadgeRender<C, H> {
    pub state: BadgeState,
    pub owner_state: BadgeOwnerState,
    pub classes: BadgeClassNames,
    pub root_element: ElementType<C>,
    pub root_props: SlotProps<BadgeOwnerState, H>,
    pub badge_element: ElementType<C>,
    pub badge_props: SlotProps<BadgeOwnerState, H>,
}

pub fn render_badge<C: Clone, H>(input: BadgeRenderInput<'_, C, H>) -> BadgeRender<C, H> {
    let state = use_badge(input.config, input.previous);
    let owner_state = BadgeOwnerState::new(input.config, &state);

    let default_class_config = ClassNameConfig::default();
    let default_classes = ClassOverrides::new();
    let classes = badge_utility_classes(
        &owner_state,
        input.class_config.unwrap_or(&default_class_config),
        input.classes.unwrap_or(&default_classes),
    );

    let root_element = resolve_element(&[input.component, input.root_slot]);
    let root_props = merge_slot_props(
        MergeSlotProps {
            element_kind: root_element.kind(),
            external_slot_props: input.root_slot_props,
            external_forwarded_props: input.forwarded,
            additional_props: None,
            owner_state: &owner_state,
            class_name: Some(classes.root.as_str()),
        },
        input.node_ref,
    );

    let badge_element = resolve_element(&[input.badge_slot]);
    let badge_props = merge_slot_props(
        MergeSlotProps {
            element_kind: badge_element.kind(),
            external_slot_props: input.badge_slot_props,
            external_forwarded_props: None,
            additional_props: None,
            owner_state: &owner_state,
            class_name: Some(classes.badge.as_str()),
        },
        None,
    );

    BadgeRender {
        state,
        owner_state,
        classes,
        root_element,
        root_props,
        badge_element,
        badge_props,
    }
}
