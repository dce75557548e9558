use badge_shared::PropBag;
use leptos::Attribute;

/// Collects pass-through attributes and the caller's class into the bag
/// forwarded to a root slot.
///
/// Reactive attribute values are read here, so calling this inside a
/// reactive closure tracks them. Attributes that evaluate to "absent"
/// (`None`, `false`) are dropped.
pub fn forwarded_props(attributes: &[(&'static str, Attribute)], class: Option<&str>) -> PropBag {
    let mut bag = PropBag::new();
    if let Some(class) = class.filter(|class| !class.trim().is_empty()) {
        bag = bag.class(class);
    }

    for (name, value) in attributes {
        if let Some(value) = value.as_nameless_value_string() {
            bag = bag.attr(*name, value.to_string());
        }
    }

    bag
}

/// Names of the pass-through attributes, for advisory validation.
pub fn attribute_names<'a>(attributes: &'a [(&'static str, Attribute)]) -> Vec<&'a str> {
    attributes.iter().map(|(name, _)| *name).collect()
}
