//! The tag descriptor model.
//!
//! Every row in a tag table is a [`TagDescriptor`]: the tag's id, its
//! symbolic name, localizable text, the type/count it's expected to carry,
//! and the [`FormatRule`] that turns its value into display text.

use crate::{
    group::MakerGroup,
    primitives::{PrimitiveCount, PrimitiveTy},
};

/// The reserved tag id marking a group's "unknown tag" sentinel.
///
/// Each table declares exactly one descriptor with this id, always last.
/// Lookup never fails: ids with no exact match resolve to the sentinel,
/// and the sentinel itself is excluded from the searchable keyspace.
pub const SENTINEL_TAG_ID: u16 = 0xffff;

/// One row of a maker note tag table.
///
/// Descriptors are statically declared and immutable - they live for the
/// whole process and are shared freely across threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TagDescriptor {
    /// The tag's 16-bit id, unique within its group.
    ///
    /// [`SENTINEL_TAG_ID`] is reserved for the unknown-tag sentinel.
    pub id: u16,

    /// Stable symbolic identifier. Never localized.
    pub name: &'static str,

    /// Short human-readable label. Resolved through the caller's
    /// translation service at render time.
    pub label: &'static str,

    /// Longer human-readable description. Also localizable.
    pub description: &'static str,

    /// Which tag table this descriptor belongs to.
    pub group: MakerGroup,

    /// The primitive type the tag's value is expected to carry.
    pub ty: PrimitiveTy,

    /// How many primitives the tag's value is expected to carry.
    pub count: PrimitiveCount,

    /// How the tag's value gets rendered into text.
    pub rule: FormatRule,
}

impl TagDescriptor {
    /// Checks whether this descriptor is its group's unknown-tag sentinel.
    pub const fn is_sentinel(&self) -> bool {
        self.id == SENTINEL_TAG_ID
    }
}

/// An enumerated-lookup table: (raw value, label) pairs for one descriptor.
///
/// Raw values are unique within a table, and matching is exact - a scalar
/// not present in the table falls back to its plain numeric rendering.
pub type LookupTable = &'static [(i64, &'static str)];

/// How a tag's value becomes human-readable text.
///
/// Each variant validates the value's type and count itself before
/// applying its transform. On any mismatch it degrades to the value's
/// plain rendering, so rendering is total: no variant can fail.
///
/// This is a closed enum rather than function pointers so the dispatch
/// stays exhaustiveness-checked at compile time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatRule {
    /// The value's own default stringification.
    Plain,

    /// Exact-match lookup of a single scalar in a [`LookupTable`],
    /// emitting the (translated) label on a hit.
    Lookup(LookupTable),

    /// Four ASCII digits `abcd` rendered as the version string `ab.cd`.
    ExifVersion,

    /// A signed rational temperature, rendered as `<float> C`.
    CameraTemperature,

    /// A 35mm-equivalent focal length stored as tenths of a millimeter.
    ///
    /// Zero means the camera didn't know; it renders as a translated
    /// "Unknown".
    FocalLength35mm,

    /// An exposure time in seconds, preferring the `1/x s` form for
    /// sub-second values.
    ExposureTime,

    /// An aperture rendered as `F<number>`.
    FNumber,

    /// An exposure bias rendered as a signed `<float> EV`.
    ExposureBias,

    /// The Picture Wizard hue value: 65535 is the "no color shift"
    /// sentinel (rendered as a translated "Neutral"), anything else is a
    /// hue in degrees.
    PwColor,

    /// A value stored with a +4 offset, rendered as `raw - 4`.
    ///
    /// Samsung stores Picture Wizard saturation/sharpness/contrast this
    /// way, so 4 means 0.
    ValueMinus4,

    /// The value is a composite: its elements are sub-tag values resolved
    /// recursively through the named group's table.
    Composite(MakerGroup),
}
