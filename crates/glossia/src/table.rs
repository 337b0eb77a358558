#![forbid(unsafe_code)]

//! Per-message translation tables.

use std::collections::HashMap;

/// Translations for one logical message, keyed by locale tag.
///
/// Keys are unique and order is irrelevant. The table itself enforces
/// nothing about which locales are present; coverage of the default
/// locale is checked by [`I18n::message`](crate::I18n::message) and
/// [`I18n::translate`](crate::I18n::translate) at derivation time.
///
/// # Example
///
/// ```
/// use glossia::translations;
///
/// let table = translations! {
///     "en" => "hello",
///     "zh" => "你好",
/// };
/// assert_eq!(table.get("zh"), Some("你好"));
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translations {
    entries: HashMap<String, String>,
}

impl Translations {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a translation, replacing any previous entry for the tag.
    pub fn insert(&mut self, locale: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(locale.into(), text.into());
    }

    /// Look up the translation for a locale tag.
    #[must_use]
    pub fn get(&self, locale: &str) -> Option<&str> {
        self.entries.get(locale).map(String::as_str)
    }

    /// Whether the table has an entry for a locale tag.
    #[must_use]
    pub fn contains(&self, locale: &str) -> bool {
        self.entries.contains_key(locale)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the locale tags in the table, in no particular
    /// order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl From<HashMap<String, String>> for Translations {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Translations {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Build a [`Translations`] table from `locale => text` pairs.
///
/// ```
/// use glossia::translations;
///
/// let empty = translations! {};
/// assert!(empty.is_empty());
///
/// let table = translations! {
///     "en" => "goodbye",
///     "zh" => "再见",
/// };
/// assert_eq!(table.get("en"), Some("goodbye"));
/// ```
#[macro_export]
macro_rules! translations {
    () => {
        $crate::Translations::new()
    };
    ($($locale:expr => $text:expr),+ $(,)?) => {{
        let mut table = $crate::Translations::new();
        $(table.insert($locale, $text);)+
        table
    }};
}
