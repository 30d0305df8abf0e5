//! # BatchForm Translate
//!
//! The language switcher: the set of supported page languages, the
//! selection state shared by the switcher, and an adapter that mounts the
//! third-party translation widget onto a page.
//!
//! The adapter never touches the page directly. Everything it does goes
//! through a [`PageHost`], so the lifecycle can be driven and checked without
//! a browser.

/// Supported languages and the selection state
pub mod language;
/// Widget lifecycle adapter
pub mod widget;

pub use language::{Language, LanguageSelection};
pub use widget::{PageHost, ScriptTag, TranslateWidget, WidgetLayout, WidgetOptions};
