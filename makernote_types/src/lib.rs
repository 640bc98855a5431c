//! # `makernote_types`
//!
//! Static data for the `makernote` library: the primitive type model, the
//! maker group enumeration, the tag descriptor model, and the vendor tag
//! tables themselves.
//!
//! Everything in this crate is immutable, `'static`, declarative data.
//! The rendering machinery lives in the `makernote` crate.

#![forbid(unsafe_code)]

pub mod descriptor;
pub mod group;
pub mod primitives;
pub mod tables;

pub use descriptor::{FormatRule, LookupTable, SENTINEL_TAG_ID, TagDescriptor};
pub use group::MakerGroup;
pub use primitives::{Endianness, Primitive, PrimitiveCount, PrimitiveTy};
