#![forbid(unsafe_code)]

//! The shared default instance and its module-level surface.
//!
//! Most applications select one locale for their whole UI. For that
//! case a shared [`I18n`] with default locale [`EN`](crate::EN) is
//! created lazily on first use, and the free functions here forward to
//! it, so nothing needs to construct or pass around an instance.
//!
//! The instance lives in a `thread_local!`: the reactive cells are
//! single-threaded by construction (`Rc` storage), and the library's
//! execution model is cooperative single-threaded, where per-thread and
//! per-process are the same thing. It exists for the life of the thread
//! and has no teardown.

use crate::instance::{I18n, I18nError, Message};
use crate::table::Translations;
use glossia_reactive::ReadOnly;

thread_local! {
    static SHARED: I18n = I18n::default();
}

/// Default locale of the shared instance (always [`EN`](crate::EN)).
#[must_use]
pub fn default_locale() -> String {
    SHARED.with(|i18n| i18n.default_locale().to_string())
}

/// Read-only reactive view of the shared instance's current locale.
#[must_use]
pub fn locale() -> ReadOnly<String> {
    SHARED.with(I18n::locale)
}

/// Switch the shared instance's current locale.
pub fn set_locale(locale: impl Into<String>) {
    SHARED.with(|i18n| i18n.set_locale(locale));
}

/// Derive a reactive [`Message`] from the shared instance.
///
/// # Errors
///
/// [`I18nError::MissingDefaultTranslation`] if the table has no entry
/// for [`EN`](crate::EN).
pub fn message(translations: Translations) -> Result<Message, I18nError> {
    SHARED.with(|i18n| i18n.message(translations))
}

/// Resolve a table against the shared instance's current locale once.
///
/// # Errors
///
/// [`I18nError::MissingDefaultTranslation`] if the table has no entry
/// for [`EN`](crate::EN).
pub fn translate(translations: &Translations) -> Result<String, I18nError> {
    SHARED.with(|i18n| i18n.translate(translations))
}

/// Derive a reactive [`Message`](crate::Message) from the shared
/// instance, building the table inline.
///
/// ```
/// use glossia::{m, set_locale, EN};
///
/// set_locale(EN);
/// let msg = m! { "en" => "hello", "zh" => "你好" }?;
/// assert_eq!(msg.get(), "hello");
/// # Ok::<(), glossia::I18nError>(())
/// ```
#[macro_export]
macro_rules! m {
    ($($locale:expr => $text:expr),+ $(,)?) => {
        $crate::message($crate::translations! { $($locale => $text),+ })
    };
}

/// Resolve an inline table against the shared instance once.
///
/// ```
/// use glossia::{t, set_locale, ZH};
///
/// set_locale(ZH);
/// let text = t! { "en" => "hello", "zh" => "你好" }?;
/// assert_eq!(text, "你好");
/// # Ok::<(), glossia::I18nError>(())
/// ```
#[macro_export]
macro_rules! t {
    ($($locale:expr => $text:expr),+ $(,)?) => {
        $crate::translate(&$crate::translations! { $($locale => $text),+ })
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{translations, EN, ZH};

    // The shared instance persists across tests on the same thread, so
    // every test pins the locale it needs before asserting.

    #[test]
    fn shared_default_locale_is_en() {
        assert_eq!(default_locale(), EN);
    }

    #[test]
    fn forwarding_surface_resolves() {
        set_locale(EN);
        let table = translations! { "en" => "hello", "zh" => "你好" };
        assert_eq!(translate(&table).unwrap(), "hello");

        let msg = message(table.clone()).unwrap();
        set_locale(ZH);
        assert_eq!(msg.get(), "你好");
        assert_eq!(translate(&table).unwrap(), "你好");
    }

    #[test]
    fn locale_view_follows_set_locale() {
        set_locale(EN);
        let view = locale();
        assert_eq!(view.get(), "en");

        set_locale("fr");
        assert_eq!(view.get(), "fr");
    }

    #[test]
    fn macros_build_and_resolve_inline_tables() {
        set_locale(ZH);
        assert_eq!(t! { "en" => "hi", "zh" => "嗨" }.unwrap(), "嗨");

        let msg = m! { "en" => "bye", "zh" => "再见" }.unwrap();
        assert_eq!(msg.get(), "再见");
        set_locale(EN);
        assert_eq!(msg.get(), "bye");
    }

    #[test]
    fn shared_missing_default_errors() {
        set_locale(EN);
        assert!(t! { "zh" => "你好" }.is_err());
        assert!(message(translations! { "zh" => "你好" }).is_err());
    }
}
