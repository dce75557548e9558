use leptos::*;

use crate::class_names::{provide_class_name_config, use_class_name_config};
use crate::components::{Badge, BadgeSlots, SlotComponent};
use badge_shared::{BadgeContent, ClassNameConfig, ElementType};

/// Demo page showing counter badges in their common configurations.
#[component]
pub fn App() -> impl IntoView {
    provide_class_name_config(ClassNameConfig::default());

    let (count, set_count) = create_signal(5i64);
    let content = Signal::derive(move || Some(BadgeContent::Number(count.get())));

    view! {
        <main class="badge-demo">
            <section>
                <button on:click=move |_| set_count.update(|c| *c += 1)>"+1"</button>
                <button on:click=move |_| set_count.update(|c| *c = (*c - 1).max(0))>"-1"</button>
                <button on:click=move |_| set_count.set(150)>"150"</button>
                <DefaultClassesToggle />
            </section>

            <section>
                <Badge badge_content=content class="inbox" attr:id="inbox-badge">
                    <span class="icon">"Inbox"</span>
                </Badge>
                <Badge badge_content=content show_zero=true max=10i64>
                    <span class="icon">"Show zero, max 10"</span>
                </Badge>
                <Badge badge_content=Some(BadgeContent::from("new")) slots=link_slots()>
                    <span class="icon">"Releases"</span>
                </Badge>
            </section>
        </main>
    }
}

#[component]
fn DefaultClassesToggle() -> impl IntoView {
    let Some(ctx) = use_class_name_config() else {
        return view! {}.into_view();
    };
    let disabled = move || ctx.get().disable_default_classes;

    view! {
        <label>
            <input
                type="checkbox"
                prop:checked=disabled
                on:change=move |ev| ctx.set_disable_default_classes(event_target_checked(&ev))
            />
            " Disable default classes"
        </label>
        <button on:click=move |_| ctx.set_prefix("Demo")>"Use Demo prefix"</button>
    }
    .into_view()
}

/// Root rendered as a link by a custom slot component.
fn link_slots() -> BadgeSlots {
    let link = SlotComponent::new(|render| {
        let props = render.props;
        let class_name = move || props.with(|p| p.class_name.clone().unwrap_or_default());
        view! {
            <a href="#releases" class=class_name>
                {render.children}
            </a>
        }
    });

    BadgeSlots {
        root: Some(ElementType::Custom(link)),
        badge: None,
    }
}
