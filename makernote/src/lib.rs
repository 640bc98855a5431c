//! # `makernote`
//!
//! A library to decode camera maker note tags into human-readable text.
//!
//! Maker notes are vendor-proprietary metadata blocks embedded in image
//! files, structured like a small IFD: typed tag/value entries. The outer
//! container parsing (TIFF/Exif directory walking, endianness, offsets)
//! belongs to whatever library feeds this one - what lives here is the
//! decoding engine that turns `(group, tag id, value)` triples into
//! symbolic, readable strings:
//!
//! - a total lookup service over statically declared tag tables, with a
//!   per-group "unknown tag" sentinel so resolution never fails
//! - a closed set of formatting rules, each guarding its value's
//!   type/count and degrading to the value's plain rendering on mismatch
//! - recursive resolution for composite tags whose payload is itself a
//!   nested sub-structure with its own table
//!
//! The design contract is "always produce text, never fail": partial or
//! malformed vendor data still yields readable output instead of aborting
//! extraction of the rest of a file's metadata.
//!
//! ```
//! use makernote::{render, translate::Untranslated, value::Value};
//! use makernote_types::group::MakerGroup;
//!
//! // lens type 8 as the outer parser would hand it over
//! let value = Value::short(8);
//! let text = render(MakerGroup::Samsung2, 0xa003, &value, &Untranslated);
//! assert_eq!(text, "Samsung NX 16mm F2.4 Pancake");
//! ```

#![forbid(unsafe_code)]

pub mod composite;
pub mod format;
pub mod translate;
pub mod value;

pub use composite::resolve_sub;
pub use format::{render, render_with};
pub use makernote_types::{
    descriptor::{FormatRule, TagDescriptor},
    group::MakerGroup,
    primitives::{Endianness, Primitive, PrimitiveCount, PrimitiveTy},
    tables::{lookup, tag_list},
};
pub use translate::{Translate, Untranslated};
pub use value::Value;

/// Internal utility methods.
pub(crate) mod util {
    /// Helper function to initialize the logger for testing.
    #[cfg(test)]
    pub fn logger() {
        _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::max())
            .format_file(true)
            .format_line_number(true)
            .try_init();
    }
}
