//! Contains stuff related to tag groups.
//!
//! For more info, see the [`MakerGroup`] enumeration.

/// A maker group identifies which tag table a descriptor belongs to.
///
/// A vendor's maker note is structured like a small IFD: a list of
/// (tag id, type, count, value) entries. Most tags live directly in the
/// vendor's top-level group.
///
/// Some tags, though, are composite: their payload is itself an ordered
/// tuple of sub-values, and those sub-values get their own, secondary
/// table. The group keeps that parent/child relationship explicit -
/// resolution is always "look up this id *in that group*", never ad hoc
/// byte-offset logic inside a formatting rule.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub enum MakerGroup {
    /// The top-level Samsung maker note (the "type 2" layout used by NX
    /// cameras).
    #[doc(alias = "samsung2Id")]
    Samsung2,

    /// The Picture Wizard sub-structure nested inside Samsung's
    /// `PictureWizard` tag (0x0021).
    ///
    /// Its five sub-values (mode, color, saturation, sharpness, contrast)
    /// each have their own descriptor in this group.
    #[doc(alias = "samsungPwId")]
    SamsungPictureWizard,
}

impl MakerGroup {
    /// Checks whether this group describes sub-values nested inside a
    /// single parent tag, rather than a top-level maker note directory.
    pub const fn nested(&self) -> bool {
        match self {
            Self::Samsung2 => false,
            Self::SamsungPictureWizard => true,
        }
    }
}
