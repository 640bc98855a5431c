//! Tag tables for each supported maker group.
//!
//! # `tables`
//!
//! This module is the parse/display table of the library: one statically
//! declared list of [`TagDescriptor`]s per [`MakerGroup`], plus the total
//! lookup service over them.
//!
//! ## For contributors
//!
//! <div class="warning">
//! The rest of this documentation is here to assist contributors to
//! `makernote_types`.
//!
//! It won't be helpful unless you're trying to add support for new tags.
//! </div>
//!
//! ### Adding new groups
//!
//! 1. add the group's name to [`MakerGroup`]
//! 2. create a new call to the `tag_table!` macro, naming the static
//!    something like `NEW_GROUP_TAGS`
//! 3. give the sentinel row a group-specific "unknown" symbolic name
//! 4. add all the group's tags (keep ids ascending - it makes diffs sane)
//! 5. wire the new static into [`MakerGroup::descriptors`] and give it
//!    its own `LazyLock` index
//!
//! ### Adding new tags
//!
//! Add a listing under the group's `tag_table!` call:
//!
//! ```no_compile
//! 0xa050 => {
//!     name: "YourNewTag",
//!     label: "Your New Tag",
//!     desc: "What the tag means",
//!     ty: Pt::Short,
//!     count: Pc::Any,
//!     rule: FormatRule::Plain,
//! },
//! ```

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::{
    descriptor::{FormatRule, LookupTable, SENTINEL_TAG_ID, TagDescriptor},
    group::MakerGroup,
    primitives::{PrimitiveCount, PrimitiveTy},
};

/// Declares one group's tag table as a static slice of descriptors.
///
/// The unknown-tag sentinel is appended automatically, so it's always
/// present exactly once and always last.
macro_rules! tag_table {
    (
        $(#[$meta:meta])*
        static $table:ident for $group:expr, unknown: ($unknown_name:expr, $unknown_desc:expr),
        $( $id:expr => {
            name: $name:expr,
            label: $label:expr,
            desc: $desc:expr,
            ty: $ty:expr,
            count: $count:expr,
            rule: $rule:expr,
        },
    )+) => {
        $(#[$meta])*
        pub static $table: &[TagDescriptor] = &[
            $(
                TagDescriptor {
                    id: $id,
                    name: $name,
                    label: $label,
                    description: $desc,
                    group: $group,
                    ty: $ty,
                    count: $count,
                    rule: $rule,
                },
            )+
            TagDescriptor {
                id: SENTINEL_TAG_ID,
                name: $unknown_name,
                label: $unknown_name,
                description: $unknown_desc,
                group: $group,
                ty: PrimitiveTy::Undefined,
                count: PrimitiveCount::Any,
                rule: FormatRule::Plain,
            },
        ];
    }
}

use crate::descriptor::FormatRule as Fr;
use crate::primitives::{PrimitiveCount as Pc, PrimitiveTy as Pt};

/// LensType, tag 0xa003.
pub static SAMSUNG2_LENS_TYPE: LookupTable = &[
    (0, "Built-in"),
    (1, "Samsung NX 30mm F2 Pancake"),
    (2, "Samsung NX 18-55mm F3.5-5.6 OIS"),
    (3, "Samsung NX 50-200mm F4-5.6 ED OIS"),
    (4, "Samsung NX 20-50mm F3.5-5.6 ED"),
    (5, "Samsung NX 20mm F2.8 Pancake"),
    (6, "Samsung NX 18-200mm F3.5-6.3 ED OIS"),
    (7, "Samsung NX 60mm F2.8 Macro ED OIS SSA"),
    (8, "Samsung NX 16mm F2.4 Pancake"),
    (9, "Samsung NX 85mm F1.4 ED SSA"),
    (10, "Samsung NX 45mm F1.8"),
    (11, "Samsung NX 45mm F1.8 2D/3D"),
    (12, "Samsung NX 12-24mm F4-5.6 ED"),
    (13, "Samsung NX 16-50mm F2-2.8 S ED OIS"),
    (14, "Samsung NX 10mm F3.5 Fisheye"),
    (15, "Samsung NX 16-50mm F3.5-5.6 Power Zoom ED OIS"),
    (20, "Samsung NX 50-150mm F2.8 S ED OIS"),
    (21, "Samsung NX 300mm F2.8 ED OIS"),
];

/// ColorSpace, tag 0xa011.
pub static SAMSUNG2_COLOR_SPACE: LookupTable = &[(0, "sRGB"), (1, "Adobe RGB")];

/// SmartRange, tag 0xa012.
pub static SAMSUNG2_SMART_RANGE: LookupTable = &[(0, "Off"), (1, "On")];

/// PictureWizard Mode, sub-tag 0x0000.
pub static SAMSUNG_PW_MODE: LookupTable = &[
    (0, "Standard"),
    (1, "Vivid"),
    (2, "Portrait"),
    (3, "Landscape"),
    (4, "Forest"),
    (5, "Retro"),
    (6, "Cool"),
    (7, "Calm"),
    (8, "Classic"),
    (9, "Custom1"),
    (10, "Custom2"),
    (11, "Custom3"),
];

tag_table! {
    /// The top-level Samsung "type 2" maker note table.
    static SAMSUNG2_TAGS for MakerGroup::Samsung2,
        unknown: ("(UnknownSamsung2MakerNoteTag)", "Unknown Samsung2MakerNote tag"),
    0x0001 => {
        name: "Version",
        label: "Version",
        desc: "Makernote version",
        ty: Pt::Undefined,
        count: Pc::Any,
        rule: Fr::ExifVersion,
    },
    0x0021 => {
        name: "PictureWizard",
        label: "Picture Wizard",
        desc: "Picture wizard composite tag",
        ty: Pt::Short,
        count: Pc::Any,
        rule: Fr::Composite(MakerGroup::SamsungPictureWizard),
    },
    0x0030 => {
        name: "LocalLocationName",
        label: "Local Location Name",
        desc: "Local location name",
        ty: Pt::Ascii,
        count: Pc::Any,
        rule: Fr::Plain,
    },
    0x0031 => {
        name: "LocationName",
        label: "Location Name",
        desc: "Location name",
        ty: Pt::Ascii,
        count: Pc::Any,
        rule: Fr::Plain,
    },
    0x0035 => {
        name: "Preview",
        label: "Pointer to a preview image",
        desc: "Offset to an IFD containing a preview image",
        ty: Pt::Long,
        count: Pc::Any,
        rule: Fr::Plain,
    },
    0x0043 => {
        name: "CameraTemperature",
        label: "Camera Temperature",
        desc: "Camera temperature",
        ty: Pt::SRational,
        count: Pc::Any,
        rule: Fr::CameraTemperature,
    },
    0xa001 => {
        name: "FirmwareName",
        label: "Firmware Name",
        desc: "Firmware name",
        ty: Pt::Ascii,
        count: Pc::Any,
        rule: Fr::Plain,
    },
    0xa003 => {
        name: "LensType",
        label: "Lens Type",
        desc: "Lens type",
        ty: Pt::Short,
        count: Pc::Any,
        rule: Fr::Lookup(SAMSUNG2_LENS_TYPE),
    },
    0xa004 => {
        name: "LensFirmware",
        label: "Lens Firmware",
        desc: "Lens firmware",
        ty: Pt::Ascii,
        count: Pc::Any,
        rule: Fr::Plain,
    },
    0xa010 => {
        name: "SensorAreas",
        label: "Sensor Areas",
        desc: "Sensor areas",
        ty: Pt::Long,
        count: Pc::Any,
        rule: Fr::Plain,
    },
    0xa011 => {
        name: "ColorSpace",
        label: "Color Space",
        desc: "Color space",
        ty: Pt::Short,
        count: Pc::Any,
        rule: Fr::Lookup(SAMSUNG2_COLOR_SPACE),
    },
    0xa012 => {
        name: "SmartRange",
        label: "Smart Range",
        desc: "Smart range",
        ty: Pt::Short,
        count: Pc::Any,
        rule: Fr::Lookup(SAMSUNG2_SMART_RANGE),
    },
    0xa013 => {
        name: "ExposureBiasValue",
        label: "Exposure Bias Value",
        desc: "Exposure bias value",
        ty: Pt::SRational,
        count: Pc::Any,
        rule: Fr::ExposureBias,
    },
    0xa014 => {
        name: "ISO",
        label: "ISO",
        desc: "ISO",
        ty: Pt::Long,
        count: Pc::Any,
        rule: Fr::Plain,
    },
    0xa018 => {
        name: "ExposureTime",
        label: "Exposure Time",
        desc: "Exposure time",
        ty: Pt::Rational,
        count: Pc::Any,
        rule: Fr::ExposureTime,
    },
    0xa019 => {
        name: "FNumber",
        label: "FNumber",
        desc: "The F number.",
        ty: Pt::Rational,
        count: Pc::Any,
        rule: Fr::FNumber,
    },
    0xa01a => {
        name: "FocalLengthIn35mmFormat",
        label: "Focal Length In 35mm Format",
        desc: "Focal length in 35mm format",
        ty: Pt::Long,
        count: Pc::Any,
        rule: Fr::FocalLength35mm,
    },
    0xa020 => {
        name: "EncryptionKey",
        label: "Encryption Key",
        desc: "Encryption key",
        ty: Pt::Long,
        count: Pc::Any,
        rule: Fr::Plain,
    },
    0xa021 => {
        name: "WB_RGGBLevelsUncorrected",
        label: "WB RGGB Levels Uncorrected",
        desc: "WB RGGB levels not corrected for WB_RGGBLevelsBlack",
        ty: Pt::Long,
        count: Pc::Any,
        rule: Fr::Plain,
    },
    0xa022 => {
        name: "WB_RGGBLevelsAuto",
        label: "WB RGGB Levels Auto",
        desc: "WB RGGB levels auto",
        ty: Pt::Long,
        count: Pc::Any,
        rule: Fr::Plain,
    },
    0xa023 => {
        name: "WB_RGGBLevelsIlluminator1",
        label: "WB RGGB Levels Illuminator1",
        desc: "WB RGGB levels illuminator1",
        ty: Pt::Long,
        count: Pc::Any,
        rule: Fr::Plain,
    },
    0xa024 => {
        name: "WB_RGGBLevelsIlluminator2",
        label: "WB RGGB Levels Illuminator2",
        desc: "WB RGGB levels illuminator2",
        ty: Pt::Long,
        count: Pc::Any,
        rule: Fr::Plain,
    },
    0xa028 => {
        name: "WB_RGGBLevelsBlack",
        label: "WB RGGB Levels Black",
        desc: "WB RGGB levels black",
        ty: Pt::SLong,
        count: Pc::Any,
        rule: Fr::Plain,
    },
    0xa030 => {
        name: "ColorMatrix",
        label: "Color Matrix",
        desc: "Color matrix",
        ty: Pt::SLong,
        count: Pc::Any,
        rule: Fr::Plain,
    },
    0xa031 => {
        name: "ColorMatrixSRGB",
        label: "Color Matrix sRGB",
        desc: "Color matrix sRGB",
        ty: Pt::SLong,
        count: Pc::Any,
        rule: Fr::Plain,
    },
    0xa032 => {
        name: "ColorMatrixAdobeRGB",
        label: "Color Matrix Adobe RGB",
        desc: "Color matrix Adobe RGB",
        ty: Pt::SLong,
        count: Pc::Any,
        rule: Fr::Plain,
    },
    0xa040 => {
        name: "ToneCurve1",
        label: "Tone Curve 1",
        desc: "Tone curve 1",
        ty: Pt::Long,
        count: Pc::Any,
        rule: Fr::Plain,
    },
    0xa041 => {
        name: "ToneCurve2",
        label: "Tone Curve 2",
        desc: "Tone curve 2",
        ty: Pt::Long,
        count: Pc::Any,
        rule: Fr::Plain,
    },
    0xa042 => {
        name: "ToneCurve3",
        label: "Tone Curve 3",
        desc: "Tone curve 3",
        ty: Pt::Long,
        count: Pc::Any,
        rule: Fr::Plain,
    },
    0xa043 => {
        name: "ToneCurve4",
        label: "Tone Curve 4",
        desc: "Tone curve 4",
        ty: Pt::Long,
        count: Pc::Any,
        rule: Fr::Plain,
    },
}

tag_table! {
    /// The Picture Wizard sub-table nested inside Samsung tag 0x0021.
    ///
    /// Sub-tag ids double as element offsets into the parent value's
    /// payload, so they start at zero and stay contiguous.
    static SAMSUNG_PW_TAGS for MakerGroup::SamsungPictureWizard,
        unknown: ("(UnknownSamsungPictureWizardTag)", "Unknown SamsungPictureWizard tag"),
    0x0000 => {
        name: "Mode",
        label: "Mode",
        desc: "Mode",
        ty: Pt::Short,
        count: Pc::Known(1),
        rule: Fr::Lookup(SAMSUNG_PW_MODE),
    },
    0x0001 => {
        name: "Color",
        label: "Color",
        desc: "Color",
        ty: Pt::Short,
        count: Pc::Known(1),
        rule: Fr::PwColor,
    },
    0x0002 => {
        name: "Saturation",
        label: "Saturation",
        desc: "Saturation",
        ty: Pt::Short,
        count: Pc::Known(1),
        rule: Fr::ValueMinus4,
    },
    0x0003 => {
        name: "Sharpness",
        label: "Sharpness",
        desc: "Sharpness",
        ty: Pt::Short,
        count: Pc::Known(1),
        rule: Fr::ValueMinus4,
    },
    0x0004 => {
        name: "Contrast",
        label: "Contrast",
        desc: "Contrast",
        ty: Pt::Short,
        count: Pc::Known(1),
        rule: Fr::ValueMinus4,
    },
}

/// Builds the id index for one table.
///
/// The sentinel stays out of the keyspace - it's the miss result, not a
/// searchable row.
fn index(rows: &'static [TagDescriptor]) -> FxHashMap<u16, &'static TagDescriptor> {
    rows.iter()
        .filter(|descriptor| !descriptor.is_sentinel())
        .map(|descriptor| (descriptor.id, descriptor))
        .collect()
}

static SAMSUNG2_INDEX: LazyLock<FxHashMap<u16, &'static TagDescriptor>> =
    LazyLock::new(|| index(SAMSUNG2_TAGS));

static SAMSUNG_PW_INDEX: LazyLock<FxHashMap<u16, &'static TagDescriptor>> =
    LazyLock::new(|| index(SAMSUNG_PW_TAGS));

impl MakerGroup {
    /// All descriptors in this group, in declaration order.
    ///
    /// The unknown-tag sentinel is always the last entry.
    pub fn descriptors(&self) -> &'static [TagDescriptor] {
        match self {
            MakerGroup::Samsung2 => SAMSUNG2_TAGS,
            MakerGroup::SamsungPictureWizard => SAMSUNG_PW_TAGS,
        }
    }

    /// Grabs this group's unknown-tag sentinel.
    pub fn sentinel(&self) -> &'static TagDescriptor {
        self.descriptors()
            .last()
            .unwrap_or_else(|| unreachable!("every table declares its sentinel row"))
    }

    fn index(&self) -> &'static FxHashMap<u16, &'static TagDescriptor> {
        match self {
            MakerGroup::Samsung2 => &SAMSUNG2_INDEX,
            MakerGroup::SamsungPictureWizard => &SAMSUNG_PW_INDEX,
        }
    }
}

/// Resolves a tag id within a group.
///
/// This is a total function: ids without an exact match resolve to the
/// group's unknown-tag sentinel, never an error.
///
/// ```
/// use makernote_types::{group::MakerGroup, tables::lookup};
///
/// let lens = lookup(MakerGroup::Samsung2, 0xa003);
/// assert_eq!(lens.name, "LensType");
///
/// let unknown = lookup(MakerGroup::Samsung2, 0xbeef);
/// assert!(unknown.is_sentinel());
/// ```
pub fn lookup(group: MakerGroup, id: u16) -> &'static TagDescriptor {
    group
        .index()
        .get(&id)
        .copied()
        .unwrap_or_else(|| group.sentinel())
}

/// All descriptors known for a group, declaration order, sentinel last.
///
/// Useful for printing a full schema or checking unknown-tag coverage.
pub fn tag_list(group: MakerGroup) -> &'static [TagDescriptor] {
    group.descriptors()
}
