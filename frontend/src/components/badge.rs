use std::rc::Rc;

use badge_shared::{
    render_badge, resolve_element, BadgeConfig, BadgeContent, BadgeOwnerState, BadgeRender,
    BadgeRenderInput, BadgeSlotOverride, BadgeSnapshot, BadgeState, ClassOverrides, ElementType,
    SlotProps, DEFAULT_MAX,
};
use leptos::html::AnyElement;
use leptos::*;

use crate::class_names::use_class_name_config;
use crate::utils::attributes::forwarded_props;

/// Merged props handed to a badge slot element.
pub type BadgeSlotProps = SlotProps<BadgeOwnerState, NodeRef<AnyElement>>;

/// Everything a custom slot component needs to render itself. The slot is
/// rendered once; `props` changes as the badge state changes.
pub struct SlotRenderProps {
    pub props: Signal<BadgeSlotProps>,
    pub children: View,
}

/// A caller-supplied renderer for a slot.
#[derive(Clone)]
pub struct SlotComponent(Rc<dyn Fn(SlotRenderProps) -> View>);

impl SlotComponent {
    pub fn new<F, V>(render: F) -> Self
    where
        F: Fn(SlotRenderProps) -> V + 'static,
        V: IntoView,
    {
        Self(Rc::new(move |props| render(props).into_view()))
    }

    pub fn render(&self, props: SlotRenderProps) -> View {
        (self.0)(props)
    }
}

pub type BadgeElement = ElementType<SlotComponent>;

/// Element overrides per slot.
#[derive(Clone, Default)]
pub struct BadgeSlots {
    pub root: Option<BadgeElement>,
    pub badge: Option<BadgeElement>,
}

/// Prop overrides per slot.
#[derive(Clone, Default)]
pub struct BadgeSlotOverrides {
    pub root: Option<BadgeSlotOverride>,
    pub badge: Option<BadgeSlotOverride>,
}

/// Derived state and merged props of one render, without output handles.
#[derive(Clone, PartialEq)]
struct BadgeView {
    state: BadgeState,
    root: SlotProps<BadgeOwnerState, ()>,
    badge: SlotProps<BadgeOwnerState, ()>,
}

/// Headless badge overlay attached to its children.
///
/// Renders the root slot around `children` followed by the badge slot
/// holding the display value. Hidden badges stay in the tree and get the
/// `invisible` class.
///
/// Both slot elements are created once. Later changes only update their
/// class, style, attributes and the display text, so children keep focus
/// and class transitions on the badge can run.
#[component]
pub fn Badge(
    #[prop(optional, into)] badge_content: MaybeSignal<Option<BadgeContent>>,
    #[prop(optional)] component: Option<BadgeElement>,
    #[prop(optional, into)] invisible: MaybeSignal<bool>,
    #[prop(default = MaybeSignal::Static(DEFAULT_MAX), into)] max: MaybeSignal<i64>,
    #[prop(optional, into)] show_zero: MaybeSignal<bool>,
    #[prop(optional)] slots: BadgeSlots,
    #[prop(optional)] slot_props: BadgeSlotOverrides,
    #[prop(optional)] classes: ClassOverrides,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] root_ref: Option<NodeRef<AnyElement>>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let class_names = use_class_name_config();
    let previous = store_value(None::<BadgeSnapshot>);

    let has_component = component.is_some();
    let has_root_slot = slots.root.is_some();
    let root_element = resolve_element(&[component.as_ref(), slots.root.as_ref()]);
    let badge_element = resolve_element(&[slots.badge.as_ref()]);

    let view_root = root_element.clone();
    let view_badge = badge_element.clone();
    let badge_view = create_memo(move |_| {
        let config = BadgeConfig {
            badge_content: badge_content.get(),
            invisible: invisible.get(),
            max: max.get(),
            show_zero: show_zero.get(),
        };

        #[cfg(debug_assertions)]
        validate(&config, has_component, has_root_slot, &attributes);

        let class_config = class_names.map(|ctx| ctx.get());
        let forwarded = forwarded_props(&attributes, class.as_deref());
        let previous_snapshot = previous.get_value();

        let rendered: BadgeRender<SlotComponent, ()> = render_badge(BadgeRenderInput {
            config: &config,
            previous: previous_snapshot.as_ref(),
            class_config: class_config.as_ref(),
            classes: Some(&classes),
            component: Some(&view_root),
            root_slot: None,
            badge_slot: Some(&view_badge),
            root_slot_props: slot_props.root.as_ref(),
            badge_slot_props: slot_props.badge.as_ref(),
            forwarded: Some(&forwarded),
            node_ref: None,
        });

        if !rendered.state.invisible {
            previous.set_value(Some(rendered.state.snapshot()));
        }

        BadgeView {
            state: rendered.state,
            root: rendered.root_props,
            badge: rendered.badge_props,
        }
    });

    let root_props: Signal<BadgeSlotProps> = Signal::derive(move || badge_view.with(|v| v.root.clone()).with_node_ref(root_ref));
    let badge_props: Signal<BadgeSlotProps> = Signal::derive(move || badge_view.with(|v| v.badge.clone()).with_node_ref(None));
    let display = move || {
        badge_view.with(|v| {
            v.state
                .display_value
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default()
        })
    };

    let children = children
        .map(|children| children().into_view())
        .unwrap_or_else(|| ().into_view());
    let badge = render_slot(&badge_element, badge_props, display.into_view());

    render_slot(&root_element, root_props, vec![children, badge].into_view())
}

#[cfg(debug_assertions)]
fn validate(
    config: &BadgeConfig,
    has_component: bool,
    has_root_slot: bool,
    attributes: &[(&'static str, Attribute)],
) {
    use badge_shared::{report_warnings, validate_config, ValidationContext};

    let context = ValidationContext {
        has_component,
        has_root_slot,
        attribute_names: crate::utils::attributes::attribute_names(attributes),
    };
    report_warnings("Badge", &validate_config(config, &context));
}

/// Renders one slot: a plain element whose class, style and attributes
/// follow `props`, or the caller's component.
///
/// Attribute names are taken from the first render; a name that only shows
/// up later is not added to a plain element.
fn render_slot(element: &BadgeElement, props: Signal<BadgeSlotProps>, children: View) -> View {
    match element {
        ElementType::Custom(component) => component.render(SlotRenderProps { props, children }),
        ElementType::Builtin(tag) => {
            let initial = props.get_untracked();
            let mut el = html::custom(html::Custom::new(tag.to_string()))
                .into_any()
                .attr("class", move || props.with(|p| p.class_name.clone()))
                .attr("style", move || props.with(|p| p.style_attribute()));

            for name in initial.attributes.into_keys() {
                let key = name.clone();
                el = el.attr(name, move || props.with(|p| p.attributes.get(&key).cloned()));
            }
            if let Some(node_ref) = initial.node_ref {
                el = el.node_ref(node_ref);
            }

            el.child(children).into_view()
        }
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use badge_shared::PropBag;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount(f: impl FnOnce() -> View + 'static) -> web_sys::Element {
        let document = leptos::document();
        let container = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&container).unwrap();
        leptos::mount_to(container.clone().unchecked_into(), f);
        container
    }

    #[wasm_bindgen_test]
    fn test_badge_renders_clamped_value() {
        let container = mount(|| {
            view! {
                <Badge badge_content=Some(BadgeContent::Number(150))>
                    <span class="anchor">"Inbox"</span>
                </Badge>
            }
            .into_view()
        });

        let root = container.query_selector(".BaseBadge-root").unwrap().unwrap();
        assert_eq!(root.tag_name().to_lowercase(), "span");
        assert!(root.query_selector(".anchor").unwrap().is_some());

        let badge = container.query_selector(".BaseBadge-badge").unwrap().unwrap();
        assert_eq!(badge.text_content().unwrap(), "99+");
        assert!(!badge.class_name().contains("BaseBadge-invisible"));
    }

    #[wasm_bindgen_test]
    fn test_zero_badge_is_invisible() {
        let container = mount(|| {
            view! {
                <Badge badge_content=Some(BadgeContent::Number(0))>
                    <span class="anchor">"Inbox"</span>
                </Badge>
            }
            .into_view()
        });

        let badge = container.query_selector(".BaseBadge-badge").unwrap().unwrap();
        assert!(badge.class_name().contains("BaseBadge-invisible"));
        assert!(container.query_selector(".anchor").unwrap().is_some());
    }

    #[wasm_bindgen_test]
    fn test_custom_root_slot_and_forwarded_attributes() {
        let container = mount(|| {
            let slots = BadgeSlots {
                root: Some(ElementType::tag("div")),
                badge: None,
            };
            let slot_props = BadgeSlotOverrides {
                root: None,
                badge: Some(PropBag::new().attr("role", "status").into()),
            };
            view! {
                <Badge
                    badge_content=Some(BadgeContent::Number(3))
                    slots=slots
                    slot_props=slot_props
                    class="inbox"
                    attr:id="inbox-badge"
                >
                    "Inbox"
                </Badge>
            }
            .into_view()
        });

        let root = container.query_selector("#inbox-badge").unwrap().unwrap();
        assert_eq!(root.tag_name().to_lowercase(), "div");
        assert_eq!(root.class_name(), "BaseBadge-root inbox");

        let badge = container.query_selector("[role=status]").unwrap().unwrap();
        assert_eq!(badge.text_content().unwrap(), "3");
    }

    #[wasm_bindgen_test]
    fn test_content_update_keeps_slot_elements() {
        let (count, set_count) = create_signal(5i64);
        let root_ref = create_node_ref::<AnyElement>();
        let container = mount(move || {
            let content = Signal::derive(move || Some(BadgeContent::Number(count.get())));
            view! {
                <Badge badge_content=content root_ref=root_ref>
                    <input class="anchor" />
                </Badge>
            }
            .into_view()
        });

        let root = container.query_selector(".BaseBadge-root").unwrap().unwrap();
        let badge = container.query_selector(".BaseBadge-badge").unwrap().unwrap();
        let anchor = container.query_selector(".anchor").unwrap().unwrap();
        let bound = root_ref.get_untracked().unwrap();

        set_count.set(6);
        let root_after = container.query_selector(".BaseBadge-root").unwrap().unwrap();
        let badge_after = container.query_selector(".BaseBadge-badge").unwrap().unwrap();
        assert!(root.is_same_node(Some(&root_after)));
        assert!(badge.is_same_node(Some(&badge_after)));
        assert_eq!(badge_after.text_content().unwrap(), "6");
        assert!(anchor.parent_node().unwrap().is_same_node(Some(&root)));

        // hiding keeps the same badge element and the last visible value
        set_count.set(0);
        let badge_hidden = container.query_selector(".BaseBadge-badge").unwrap().unwrap();
        assert!(badge.is_same_node(Some(&badge_hidden)));
        assert!(badge.class_name().contains("BaseBadge-invisible"));
        assert_eq!(badge.text_content().unwrap(), "6");

        let bound_after = root_ref.get_untracked().unwrap();
        assert!(bound.is_same_node(Some(&bound_after)));
    }

    #[wasm_bindgen_test]
    fn test_logging_reaches_the_console_logger() {
        crate::init_logging();
        assert!(log::max_level() >= log::LevelFilter::Warn);
        assert!(log::log_enabled!(log::Level::Warn));

        // a negative max is reported, never rejected
        let container = mount(|| {
            view! { <Badge badge_content=Some(BadgeContent::Number(3)) max=-1i64>"Inbox"</Badge> }
                .into_view()
        });
        let badge = container.query_selector(".BaseBadge-badge").unwrap().unwrap();
        assert_eq!(badge.text_content().unwrap(), "-1+");
    }

    #[wasm_bindgen_test]
    fn test_class_name_prefix_follows_context() {
        let ctx = std::rc::Rc::new(std::cell::Cell::new(None));
        let ctx_slot = ctx.clone();
        let container = mount(move || {
            crate::class_names::provide_class_name_config(badge_shared::ClassNameConfig::default());
            ctx_slot.set(crate::class_names::use_class_name_config());
            view! { <Badge badge_content=Some(BadgeContent::Number(1))>"Inbox"</Badge> }.into_view()
        });

        let root = container.query_selector(".BaseBadge-root").unwrap().unwrap();
        ctx.get().unwrap().set_prefix("Acme");
        assert_eq!(root.class_name(), "AcmeBadge-root");
        assert!(container.query_selector(".AcmeBadge-badge").unwrap().is_some());
    }
}
