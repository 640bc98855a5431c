/// An enumeration of the possible types of a primitive.
///
/// These are the TIFF value types a maker note entry may carry, and each
/// tag descriptor names the one it expects.
#[repr(u16)]
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub enum PrimitiveTy {
    Byte = 1,
    Ascii = 2,
    Short = 3,
    Long = 4,
    Rational = 5,
    Undefined = 7,
    SShort = 8,
    SLong = 9,
    SRational = 10,
}

impl PrimitiveTy {
    /// Grabs the primitive type's size in bytes.
    ///
    /// ```
    /// use makernote_types::primitives::PrimitiveTy;
    ///
    /// let srational: PrimitiveTy = PrimitiveTy::SRational;
    /// assert_eq!(srational.size_bytes(), 8_u8);
    /// ```
    pub const fn size_bytes(&self) -> u8 {
        match self {
            PrimitiveTy::Byte | PrimitiveTy::Ascii | PrimitiveTy::Undefined => 1_u8,
            PrimitiveTy::Short | PrimitiveTy::SShort => 2_u8,
            PrimitiveTy::Long | PrimitiveTy::SLong => 4_u8,
            PrimitiveTy::Rational | PrimitiveTy::SRational => 8_u8,
        }
    }
}

impl TryFrom<u16> for PrimitiveTy {
    type Error = ();

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Byte),
            2 => Ok(Self::Ascii),
            3 => Ok(Self::Short),
            4 => Ok(Self::Long),
            5 => Ok(Self::Rational),
            7 => Ok(Self::Undefined),
            8 => Ok(Self::SShort),
            9 => Ok(Self::SLong),
            10 => Ok(Self::SRational),

            _ => Err(()),
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub enum Primitive {
    Byte(Byte),
    Ascii(Ascii),
    Short(Short),
    Long(Long),
    Rational(Rational),
    Undefined(Undefined),
    SShort(SShort),
    SLong(SLong),
    SRational(SRational),
}

impl Primitive {
    /// Grabs the type describing this primitive.
    pub fn ty(&self) -> PrimitiveTy {
        match self {
            Primitive::Byte(_) => PrimitiveTy::Byte,
            Primitive::Ascii(_) => PrimitiveTy::Ascii,
            Primitive::Short(_) => PrimitiveTy::Short,
            Primitive::Long(_) => PrimitiveTy::Long,
            Primitive::Rational(_) => PrimitiveTy::Rational,
            Primitive::Undefined(_) => PrimitiveTy::Undefined,
            Primitive::SShort(_) => PrimitiveTy::SShort,
            Primitive::SLong(_) => PrimitiveTy::SLong,
            Primitive::SRational(_) => PrimitiveTy::SRational,
        }
    }
}

/// A `u8` to represent a byte.
pub type Byte = u8;

/// A single ASCII code.
pub type Ascii = u8;

/// A `u16`.
pub type Short = u16;

/// A `u32`.
pub type Long = u32;

/// A fraction that can't be negative.
///
/// Both the numerator (top number) and denominator (bottom number) are always
/// positive numbers.
#[repr(C)]
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub struct Rational {
    pub numerator: u32,
    pub denominator: u32,
}

/// A byte with no defined meaning.
///
/// Maker notes love this type - most vendor blobs declare their opaque
/// payloads with it.
pub type Undefined = u8;

/// A signed short - just an `i16`.
pub type SShort = i16;

/// A signed long - just a `i32`.
pub type SLong = i32;

/// A signed fraction.
///
/// Both the numerator (top number) and denominator (bottom number) can be
/// negative.
#[repr(C)]
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub struct SRational {
    pub numerator: i32,
    pub denominator: i32,
}

/// The number of primitives a tag's value should have.
///
/// These are used to sanity-check values before a formatting rule applies
/// its transform.
#[repr(C)]
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub enum PrimitiveCount {
    /// There are `n` primitives.
    Known(u32),

    /// Any number of primitives.
    Any,
}

impl PrimitiveCount {
    /// Checks whether a real element count satisfies this expectation.
    ///
    /// ```
    /// use makernote_types::primitives::PrimitiveCount;
    ///
    /// assert!(PrimitiveCount::Known(1).matches(1));
    /// assert!(!PrimitiveCount::Known(1).matches(5));
    /// assert!(PrimitiveCount::Any.matches(5));
    /// ```
    pub const fn matches(&self, count: u32) -> bool {
        match self {
            PrimitiveCount::Known(n) => *n == count,
            PrimitiveCount::Any => true,
        }
    }
}

/// Byte order of a maker note payload.
///
/// Maker notes inherit this from the surrounding Exif blob: either `II`
/// (Intel, little-endian) or `MM` (Motorola, big-endian). The outer parser
/// already knows which one applies, so it's passed in when raw payload
/// bytes get decoded into primitives.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub enum Endianness {
    /// `II` for Intel, little-endian.
    Little,

    /// `MM` for Motorola. Big-endian.
    Big,
}
