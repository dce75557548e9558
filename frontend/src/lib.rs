pub mod class_names;
pub mod components;
pub mod utils;

#[cfg(feature = "demo")]
pub mod app;

pub use badge_shared::{BadgeContent, ClassNameConfig, ClassOverrides, ElementType, PropBag, SlotOverride};
pub use class_names::{provide_class_name_config, use_class_name_config, ClassNameContext};
pub use components::{Badge, BadgeElement, BadgeSlotOverrides, BadgeSlots, SlotComponent};

#[cfg(feature = "demo")]
use wasm_bindgen::prelude::*;

/// Routes `log` records, including badge configuration warnings, to the
/// browser console. Apps embedding the components call this once at start.
pub fn init_logging() {
    wasm_logger::init(wasm_logger::Config::default());
}

#[cfg(feature = "demo")]
#[wasm_bindgen(start)]
pub fn main() {
    init_logging();
    console_error_panic_hook::set_once();
    leptos::mount_to_body(app::App);
}
