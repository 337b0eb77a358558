#![forbid(unsafe_code)]

//! The i18n instance: one locale selection, many derived messages.
//!
//! # Invariants
//!
//! 1. **Fallback totality**: a message derived from a table that covers
//!    the default locale always resolves — unknown current locales fall
//!    back, they never error.
//!
//! 2. **Derivation-time validation**: coverage of the default locale is
//!    checked when a message or snapshot is derived, never at read time.
//!    Reads are infallible.
//!
//! 3. **Snapshot agreement**: [`I18n::translate`] returns exactly what a
//!    message derived from the same table would read at the same moment.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing default entry | Table lacks the default locale | `Err(MissingDefaultTranslation)` at derivation |
//! | Unknown current locale | No entry for the current tag | Falls back to the default entry |

use glossia_reactive::{Derived, ReadOnly, Value};
use tracing::{debug, trace};

use crate::table::Translations;

/// A reactive translated text. Reading it always yields the translation
/// for the owning instance's current locale, per the fallback rule.
pub type Message = Derived<String>;

/// Errors from deriving translations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    /// The translation table has no entry for the instance's default
    /// locale, so the fallback rule would have nowhere to land.
    MissingDefaultTranslation {
        /// The default locale the table failed to cover.
        locale: String,
    },
}

impl std::fmt::Display for I18nError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDefaultTranslation { locale } => {
                write!(f, "missing translation for default locale '{locale}'")
            }
        }
    }
}

impl std::error::Error for I18nError {}

/// One locale selection and the default it falls back to.
///
/// The default locale is fixed at construction; the current locale
/// starts equal to it and can be switched at any time with
/// [`set_locale`](Self::set_locale). Cloning an `I18n` shares the
/// locale cell — clones are handles to the same selection, not
/// independent instances.
///
/// # Example
///
/// ```
/// use glossia::{I18n, translations};
///
/// let i18n = I18n::new("en");
/// let text = i18n.translate(&translations! { "en" => "hello" })?;
/// assert_eq!(text, "hello");
/// # Ok::<(), glossia::I18nError>(())
/// ```
#[derive(Clone, Debug)]
pub struct I18n {
    default_locale: String,
    locale: Value<String>,
}

impl I18n {
    /// Create an instance whose default and current locale are both
    /// `default_locale`. The string is taken as-is.
    #[must_use]
    pub fn new(default_locale: impl Into<String>) -> Self {
        let default_locale = default_locale.into();
        Self {
            locale: Value::new(default_locale.clone()),
            default_locale,
        }
    }

    /// The default locale fixed at construction.
    #[must_use]
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Read-only reactive view of the current locale. Consumers can
    /// read and watch it, but only [`set_locale`](Self::set_locale)
    /// writes it.
    #[must_use]
    pub fn locale(&self) -> ReadOnly<String> {
        self.locale.read_only()
    }

    /// Switch the current locale. Every message derived from this
    /// instance re-resolves against the new tag on its next read.
    /// Setting the tag already in effect is a no-op.
    pub fn set_locale(&self, locale: impl Into<String>) {
        let locale = locale.into();
        debug!(locale = %locale, "locale selected");
        self.locale.set(locale);
    }

    /// Derive a reactive [`Message`] from a translation table.
    ///
    /// The table must cover [`default_locale`](Self::default_locale);
    /// otherwise this fails immediately, before any message exists. The
    /// table is moved into the message and resolved against the current
    /// locale on every read after a locale change.
    ///
    /// # Errors
    ///
    /// [`I18nError::MissingDefaultTranslation`] if the table has no
    /// entry for the default locale.
    pub fn message(&self, translations: Translations) -> Result<Message, I18nError> {
        let Some(fallback) = translations.get(&self.default_locale).map(str::to_string) else {
            return Err(I18nError::MissingDefaultTranslation {
                locale: self.default_locale.clone(),
            });
        };
        trace!(
            entries = translations.len(),
            default_locale = %self.default_locale,
            "message derived"
        );
        Ok(self.locale.map(move |tag| {
            translations
                .get(tag)
                .map_or_else(|| fallback.clone(), str::to_string)
        }))
    }

    /// Resolve a table against the current locale once, without
    /// creating a reactive message. Same precondition and fallback rule
    /// as [`message`](Self::message).
    ///
    /// # Errors
    ///
    /// [`I18nError::MissingDefaultTranslation`] if the table has no
    /// entry for the default locale.
    pub fn translate(&self, translations: &Translations) -> Result<String, I18nError> {
        match translations.get(&self.default_locale) {
            None => Err(I18nError::MissingDefaultTranslation {
                locale: self.default_locale.clone(),
            }),
            Some(fallback) => Ok(self
                .locale
                .with(|tag| translations.get(tag).unwrap_or(fallback).to_string())),
        }
    }
}

/// The default instance convention: English as the default locale.
impl Default for I18n {
    fn default() -> Self {
        Self::new(crate::EN)
    }
}
