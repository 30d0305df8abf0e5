use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::language::Language;

/// Cookie the translation script reads the target language from.
pub const COOKIE_NAME: &str = "googtrans";
/// Element the widget renders into.
pub const CONTAINER_ID: &str = "google_translate_element";
/// Id of the injected loader script.
pub const SCRIPT_ID: &str = "google-translate-script";
/// Global callback the loader invokes once it is ready.
pub const INIT_CALLBACK: &str = "googleTranslateElementInit";
const SCRIPT_SRC: &str = "//translate.google.com/translate_a/element.js";

/// Operations the widget needs from the page it is mounted on.
pub trait PageHost {
    /// Removes banners, frames and body classes/styles left by a previous
    /// translation.
    fn remove_artifacts(&mut self);
    fn clear_container(&mut self, container_id: &str);
    fn remove_script(&mut self, script_id: &str);
    fn expire_cookie(&mut self, name: &str);
    fn set_cookie(&mut self, name: &str, value: &str);
    fn inject_script(&mut self, script: &ScriptTag);
    /// Number of elements carrying `container_id`.
    fn container_count(&self, container_id: &str) -> usize;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WidgetLayout {
    Horizontal,
    Vertical,
    Simple,
}

/// Options handed to the widget constructor once the loader has run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetOptions {
    pub page_language: String,
    pub auto_display: bool,
    pub included_languages: String,
    pub layout: WidgetLayout,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            page_language: Language::English.code().to_string(),
            auto_display: false,
            included_languages: Language::included_codes(),
            layout: WidgetLayout::Horizontal,
        }
    }
}

/// The loader script to inject, with what the init callback needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptTag {
    pub id: String,
    pub src: String,
    pub container_id: String,
    pub options: WidgetOptions,
}

/// Mounts the translation widget for one language at a time.
///
/// # Example
///
/// ```ignore
/// let mut widget = TranslateWidget::new(host);
/// widget.mount(Language::French);
/// // ... user picks another language
/// widget.mount(Language::Arabic);
/// widget.unmount();
/// ```
pub struct TranslateWidget<H: PageHost> {
    host: H,
    options: WidgetOptions,
    mounted: Option<Language>,
}

impl<H: PageHost> TranslateWidget<H> {
    pub fn new(host: H) -> Self {
        Self::with_options(host, WidgetOptions::default())
    }

    pub fn with_options(host: H, options: WidgetOptions) -> Self {
        Self {
            host,
            options,
            mounted: None,
        }
    }

    /// Language currently mounted, if any.
    pub fn language(&self) -> Option<Language> {
        self.mounted
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Resets the page and loads the widget for `language`. A widget already
    /// mounted is unmounted first.
    pub fn mount(&mut self, language: Language) {
        self.unmount();

        self.host.remove_artifacts();
        self.host.clear_container(CONTAINER_ID);
        self.host.remove_script(SCRIPT_ID);

        self.host.expire_cookie(COOKIE_NAME);
        self.host.set_cookie(COOKIE_NAME, &language.cookie_value());

        let script = ScriptTag {
            id: SCRIPT_ID.to_string(),
            src: format!("{SCRIPT_SRC}?cb={INIT_CALLBACK}"),
            container_id: CONTAINER_ID.to_string(),
            options: self.options.clone(),
        };
        self.host.inject_script(&script);

        let containers = self.host.container_count(CONTAINER_ID);
        if containers > 1 {
            warn!(containers, "duplicate translate widget container detected");
        }

        debug!(%language, "translate widget mounted");
        self.mounted = Some(language);
    }

    /// Removes the widget's script and leftovers. Does nothing when not
    /// mounted.
    pub fn unmount(&mut self) {
        let Some(language) = self.mounted.take() else {
            return;
        };
        self.host.remove_artifacts();
        self.host.remove_script(SCRIPT_ID);
        debug!(%language, "translate widget unmounted");
    }
}
