//! The injected translation capability.
//!
//! Descriptor labels and lookup-table labels are localizable, but this
//! library doesn't own a locale subsystem. Callers hand in whatever
//! string-mapping service they have; rendering threads it through instead
//! of reaching for a global.

use std::borrow::Cow;

/// An opaque string-mapping service used at render time.
///
/// The contract is total: translation never fails, and an unknown string
/// comes back unchanged. All translatable strings in this library are
/// `'static` table literals, so the input is `'static` too.
pub trait Translate {
    /// Maps a raw table label to its localized form.
    fn translate(&self, msg: &'static str) -> Cow<'static, str> {
        Cow::Borrowed(msg)
    }
}

/// The identity translation: every label renders as declared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Untranslated;

impl Translate for Untranslated {}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::{Translate, Untranslated};

    #[test]
    fn identity_translation_returns_input() {
        assert_eq!(Untranslated.translate("Neutral"), "Neutral");
    }

    /// A custom impl can swap labels out wholesale.
    #[test]
    fn custom_translation_applies() {
        struct Shouty;
        impl Translate for Shouty {
            fn translate(&self, msg: &'static str) -> Cow<'static, str> {
                Cow::Owned(msg.to_uppercase())
            }
        }

        assert_eq!(Shouty.translate("Neutral"), "NEUTRAL");
    }
}
