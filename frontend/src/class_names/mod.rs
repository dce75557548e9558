use badge_shared::ClassNameConfig;
use leptos::*;

/// Class name configuration shared by every component below the provider.
#[derive(Clone, Copy)]
pub struct ClassNameContext {
    pub config: RwSignal<ClassNameConfig>,
}

impl ClassNameContext {
    pub fn new(config: ClassNameConfig) -> Self {
        Self {
            config: create_rw_signal(config),
        }
    }

    /// Current configuration, tracked when read inside a reactive scope.
    pub fn get(&self) -> ClassNameConfig {
        self.config.get()
    }

    /// Turn the generated `Base*` class names on or off.
    pub fn set_disable_default_classes(&self, disable: bool) {
        self.config.update(|config| config.disable_default_classes = disable);
    }

    pub fn set_prefix(&self, prefix: &str) {
        self.config.update(|config| config.prefix = prefix.to_string());
    }
}

/// Provide a class name configuration to the component tree
pub fn provide_class_name_config(config: ClassNameConfig) {
    provide_context(ClassNameContext::new(config));
}

/// Use the class name configuration from within a component
pub fn use_class_name_config() -> Option<ClassNameContext> {
    use_context::<ClassNameContext>()
}
