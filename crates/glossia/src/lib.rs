#![forbid(unsafe_code)]

//! Minimal reactive internationalization.
//!
//! Each localizable text carries its own translation table: a map from
//! locale tag to translated string. An [`I18n`] instance owns the
//! current locale; a [`Message`] derived from a table always resolves to
//! the translation for that locale, falling back to the instance's
//! default locale when the table has no entry for the current one.
//!
//! Locale tags are opaque strings — no validation, normalization, or
//! negotiation happens anywhere. The only enforced rule is that a table
//! must cover the default locale at the moment a message is derived
//! from it; everything else falls back silently.
//!
//! # Example
//!
//! ```
//! use glossia::{I18n, translations};
//!
//! let i18n = I18n::new("en");
//! let greeting = i18n.message(translations! {
//!     "en" => "hello",
//!     "zh" => "你好",
//! })?;
//!
//! assert_eq!(greeting.get(), "hello");
//!
//! i18n.set_locale("zh");
//! assert_eq!(greeting.get(), "你好");
//!
//! // Unknown locales fall back to the default.
//! i18n.set_locale("fr");
//! assert_eq!(greeting.get(), "hello");
//! # Ok::<(), glossia::I18nError>(())
//! ```
//!
//! A shared default instance (default locale [`EN`]) backs the
//! module-level functions [`message`], [`translate`], [`set_locale`],
//! and [`locale`] for applications that don't need more than one
//! locale selection.

pub mod instance;
pub mod shared;
pub mod table;

pub use glossia_reactive as reactive;

pub use instance::{I18n, I18nError, Message};
pub use shared::{default_locale, locale, message, set_locale, translate};
pub use table::Translations;

/// Conventional tag for Chinese. Any other string is accepted just as
/// well; the constant only guards against typos.
pub const ZH: &str = "zh";

/// Conventional tag for English. Also the default locale of the shared
/// instance behind the module-level functions.
pub const EN: &str = "en";
