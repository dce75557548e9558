use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// Element rendered when no slot override is given.
pub const DEFAULT_TAG: &str = "span";

// ============================================================================
// Element Types
// ============================================================================

/// What a slot renders: a plain element by tag name, or a caller component.
#[derive(Clone)]
pub enum ElementType<C> {
    Builtin(Cow<'static, str>),
    Custom(C),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Builtin,
    Custom,
}

impl<C> ElementType<C> {
    pub fn tag(name: impl Into<Cow<'static, str>>) -> Self {
        ElementType::Builtin(name.into())
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            ElementType::Builtin(_) => ElementKind::Builtin,
            ElementType::Custom(_) => ElementKind::Custom,
        }
    }

    pub fn tag_name(&self) -> Option<&str> {
        match self {
            ElementType::Builtin(name) => Some(name.as_ref()),
            ElementType::Custom(_) => None,
        }
    }
}

impl<C> Default for ElementType<C> {
    fn default() -> Self {
        ElementType::Builtin(Cow::Borrowed(DEFAULT_TAG))
    }
}

impl<C> fmt::Debug for ElementType<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementType::Builtin(name) => f.debug_tuple("Builtin").field(name).finish(),
            ElementType::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Picks the first configured element type, falling back to the default tag.
pub fn resolve_element<C: Clone>(candidates: &[Option<&ElementType<C>>]) -> ElementType<C> {
    candidates
        .iter()
        .flatten()
        .next()
        .map(|element| (*element).clone())
        .unwrap_or_default()
}

// ============================================================================
// Property Bags
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropBag {
    pub class_name: Option<String>,
    pub style: BTreeMap<String, String>,
    pub attributes: BTreeMap<String, String>,
}

impl PropBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(property.into(), value.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Splits the bag into class parts, style and attributes, folding raw
    /// `class` and `style` attributes into the first two.
    fn normalize(&self) -> (Vec<String>, BTreeMap<String, String>, BTreeMap<String, String>) {
        let mut classes = Vec::new();
        let mut style = BTreeMap::new();
        let mut attributes = BTreeMap::new();

        classes.extend(self.class_name.clone());
        for (name, value) in &self.attributes {
            match name.as_str() {
                "class" => classes.push(value.clone()),
                "style" => style.extend(parse_style(value)),
                _ => {
                    attributes.insert(name.clone(), value.clone());
                }
            }
        }
        style.extend(self.style.clone());

        (classes, style, attributes)
    }
}

/// Parses an inline `style` attribute into property/value pairs.
pub fn parse_style(style: &str) -> BTreeMap<String, String> {
    style
        .split(';')
        .filter_map(|declaration| {
            let (property, value) = declaration.split_once(':')?;
            let property = property.trim();
            let value = value.trim();
            (!property.is_empty() && !value.is_empty())
                .then(|| (property.to_string(), value.to_string()))
        })
        .collect()
}

// ============================================================================
// Slot Overrides
// ============================================================================

/// Caller-supplied props for one slot, either fixed or derived from the
/// owner state.
pub enum SlotOverride<O> {
    Static(PropBag),
    Computed(Rc<dyn Fn(&O) -> PropBag>),
}

impl<O> SlotOverride<O> {
    pub fn computed(f: impl Fn(&O) -> PropBag + 'static) -> Self {
        SlotOverride::Computed(Rc::new(f))
    }

    pub fn resolve(&self, owner_state: &O) -> PropBag {
        match self {
            SlotOverride::Static(bag) => bag.clone(),
            SlotOverride::Computed(f) => f(owner_state),
        }
    }
}

impl<O> Clone for SlotOverride<O> {
    fn clone(&self) -> Self {
        match self {
            SlotOverride::Static(bag) => SlotOverride::Static(bag.clone()),
            SlotOverride::Computed(f) => SlotOverride::Computed(Rc::clone(f)),
        }
    }
}

impl<O> fmt::Debug for SlotOverride<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotOverride::Static(bag) => f.debug_tuple("Static").field(bag).finish(),
            SlotOverride::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl<O> From<PropBag> for SlotOverride<O> {
    fn from(bag: PropBag) -> Self {
        SlotOverride::Static(bag)
    }
}

// ============================================================================
// Merged Slot Props
// ============================================================================

/// Final props handed to a slot element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotProps<O, H> {
    pub class_name: Option<String>,
    pub style: BTreeMap<String, String>,
    pub attributes: BTreeMap<String, String>,
    /// Only set for custom element types.
    pub owner_state: Option<O>,
    #[serde(skip)]
    pub node_ref: Option<H>,
}

impl<O, H> SlotProps<O, H> {
    /// Inline `style` attribute value, if any style is set.
    pub fn style_attribute(&self) -> Option<String> {
        if self.style.is_empty() {
            return None;
        }
        let declarations: Vec<String> = self
            .style
            .iter()
            .map(|(property, value)| format!("{}: {}", property, value))
            .collect();
        Some(declarations.join("; "))
    }

    /// Same props with the output handle replaced.
    pub fn with_node_ref<R>(self, node_ref: Option<R>) -> SlotProps<O, R> {
        SlotProps {
            class_name: self.class_name,
            style: self.style,
            attributes: self.attributes,
            owner_state: self.owner_state,
            node_ref,
        }
    }
}

pub struct MergeSlotProps<'a, O> {
    pub element_kind: ElementKind,
    pub external_slot_props: Option<&'a SlotOverride<O>>,
    pub external_forwarded_props: Option<&'a PropBag>,
    pub additional_props: Option<&'a PropBag>,
    pub owner_state: &'a O,
    pub class_name: Option<&'a str>,
}

/// Merges the prop layers of a slot.
///
/// Class names are concatenated (generated, additional, forwarded, slot
/// override). For conflicting style properties and attributes additional
/// props win over forwarded props, which win over the slot override.
pub fn merge_slot_props<O: Clone, H>(params: MergeSlotProps<'_, O>, node_ref: Option<H>) -> SlotProps<O, H> {
    let slot_bag = params
        .external_slot_props
        .map(|slot| slot.resolve(params.owner_state))
        .unwrap_or_default();

    let layers = [
        Some(&slot_bag),
        params.external_forwarded_props,
        params.additional_props,
    ];
    let normalized: Vec<_> = layers.iter().flatten().map(|bag| bag.normalize()).collect();

    let mut style = BTreeMap::new();
    let mut attributes = BTreeMap::new();
    for (_, layer_style, layer_attributes) in &normalized {
        style.extend(layer_style.clone());
        attributes.extend(layer_attributes.clone());
    }

    let mut classes: Vec<String> = params.class_name.map(str::to_string).into_iter().collect();
    for (layer_classes, _, _) in normalized.iter().rev() {
        classes.extend(layer_classes.iter().cloned());
    }
    let class_name = join_class_names(&classes);

    let owner_state = match params.element_kind {
        ElementKind::Custom => Some(params.owner_state.clone()),
        ElementKind::Builtin => None,
    };

    SlotProps {
        class_name,
        style,
        attributes,
        owner_state,
        node_ref,
    }
}

fn join_class_names(classes: &[String]) -> Option<String> {
    let parts: Vec<&str> = classes
        .iter()
        .map(|class| class.trim())
        .filter(|class| !class.is_empty())
        .collect();
    (!parts.is_empty()).then(|| parts.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct Owner {
        active: bool,
    }

    fn params<'a>(
        element_kind: ElementKind,
        owner: &'a Owner,
        slot: Option<&'a SlotOverride<Owner>>,
        forwarded: Option<&'a PropBag>,
        additional: Option<&'a PropBag>,
    ) -> MergeSlotProps<'a, Owner> {
        MergeSlotProps {
            element_kind,
            external_slot_props: slot,
            external_forwarded_props: forwarded,
            additional_props: additional,
            owner_state: owner,
            class_name: Some("BaseBadge-root"),
        }
    }

    #[test]
    fn test_class_names_are_concatenated() {
        let owner = Owner { active: true };
        let slot = SlotOverride::Static(PropBag::new().class("from-slot"));
        let forwarded = PropBag::new().class("from-caller");
        let additional = PropBag::new().class("internal");

        let props: SlotProps<Owner, ()> = merge_slot_props(
            params(ElementKind::Builtin, &owner, Some(&slot), Some(&forwarded), Some(&additional)),
            None,
        );
        assert_eq!(
            props.class_name.as_deref(),
            Some("BaseBadge-root internal from-caller from-slot")
        );
    }

    #[test]
    fn test_conflicting_attributes_follow_precedence() {
        let owner = Owner { active: true };
        let slot = SlotOverride::Static(
            PropBag::new()
                .attr("id", "slot")
                .attr("title", "slot")
                .attr("data-slot", "yes")
                .style("color", "red"),
        );
        let forwarded = PropBag::new()
            .attr("id", "forwarded")
            .attr("title", "forwarded")
            .style("color", "blue")
            .style("margin", "0");
        let additional = PropBag::new().attr("id", "additional");

        let props: SlotProps<Owner, ()> = merge_slot_props(
            params(ElementKind::Builtin, &owner, Some(&slot), Some(&forwarded), Some(&additional)),
            None,
        );
        assert_eq!(props.attributes["id"], "additional");
        assert_eq!(props.attributes["title"], "forwarded");
        assert_eq!(props.attributes["data-slot"], "yes");
        assert_eq!(props.style["color"], "blue");
        assert_eq!(props.style_attribute().as_deref(), Some("color: blue; margin: 0"));
    }

    #[test]
    fn test_computed_override_sees_owner_state() {
        let owner = Owner { active: true };
        let slot = SlotOverride::computed(|owner: &Owner| {
            PropBag::new().attr("data-active", owner.active.to_string())
        });

        let props: SlotProps<Owner, ()> =
            merge_slot_props(params(ElementKind::Builtin, &owner, Some(&slot), None, None), None);
        assert_eq!(props.attributes["data-active"], "true");
    }

    #[test]
    fn test_owner_state_only_for_custom_elements() {
        let owner = Owner { active: false };

        let builtin: SlotProps<Owner, ()> =
            merge_slot_props(params(ElementKind::Builtin, &owner, None, None, None), None);
        assert_eq!(builtin.owner_state, None);

        let custom: SlotProps<Owner, ()> =
            merge_slot_props(params(ElementKind::Custom, &owner, None, None, None), None);
        assert_eq!(custom.owner_state, Some(owner));
    }

    #[test]
    fn test_raw_class_and_style_attributes_are_folded() {
        let owner = Owner { active: true };
        let forwarded = PropBag::new()
            .attr("class", "legacy")
            .attr("style", "color: red; padding : 2px;");

        let props: SlotProps<Owner, ()> =
            merge_slot_props(params(ElementKind::Builtin, &owner, None, Some(&forwarded), None), None);
        assert_eq!(props.class_name.as_deref(), Some("BaseBadge-root legacy"));
        assert_eq!(props.style["padding"], "2px");
        assert!(!props.attributes.contains_key("class"));
        assert!(!props.attributes.contains_key("style"));
    }

    #[test]
    fn test_node_ref_is_passed_through() {
        let owner = Owner { active: true };
        let props = merge_slot_props(params(ElementKind::Builtin, &owner, None, None, None), Some(7u32));
        assert_eq!(props.node_ref, Some(7));
    }

    #[test]
    fn test_with_node_ref_keeps_merged_props() {
        let owner = Owner { active: true };
        let forwarded = PropBag::new().class("inbox").attr("id", "mail");
        let props: SlotProps<Owner, ()> =
            merge_slot_props(params(ElementKind::Custom, &owner, None, Some(&forwarded), None), None);

        let bound = props.clone().with_node_ref(Some("root"));
        assert_eq!(bound.node_ref, Some("root"));
        assert_eq!(bound.class_name, props.class_name);
        assert_eq!(bound.attributes, props.attributes);
        assert_eq!(bound.owner_state, Some(owner));
    }

    #[test]
    fn test_empty_class_name_is_none() {
        let owner = Owner { active: true };
        let mut merge = params(ElementKind::Builtin, &owner, None, None, None);
        merge.class_name = Some("");
        let props: SlotProps<Owner, ()> = merge_slot_props(merge, None);
        assert_eq!(props.class_name, None);
    }

    #[test]
    fn test_resolve_element_order() {
        let custom: ElementType<&str> = ElementType::Custom("Link");
        let root: ElementType<&str> = ElementType::tag("div");

        let picked = resolve_element(&[Some(&custom), Some(&root)]);
        assert_eq!(picked.kind(), ElementKind::Custom);

        let picked = resolve_element(&[None, Some(&root)]);
        assert_eq!(picked.tag_name(), Some("div"));

        let picked: ElementType<&str> = resolve_element(&[None, None]);
        assert_eq!(picked.tag_name(), Some(DEFAULT_TAG));
    }

    #[test]
    fn test_parse_style_skips_malformed_declarations() {
        let style = parse_style("color: red;;nonsense; : 1px; top:0");
        assert_eq!(style.len(), 2);
        assert_eq!(style["color"], "red");
        assert_eq!(style["top"], "0");
    }
}
