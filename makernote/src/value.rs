//! The typed value a maker note entry carries.
//!
//! A [`Value`] is what the outer directory parser hands us per tag: a
//! primitive type plus the decoded elements. The rendering core only
//! borrows it - it never takes ownership, and it never mutates it.

use winnow::{
    Parser as _, Stateful,
    binary::{Endianness as WinnowEndianness, i16, i32, u8, u16, u32},
    error::EmptyError,
};

use makernote_types::primitives::{Endianness, Primitive, PrimitiveTy, Rational, SRational};

/// Decoding a raw payload may fail when the blob is shorter than its
/// declared type and count require.
pub type ValueResult = Result<Value, ValueError>;

#[derive(Clone, Debug, PartialEq, PartialOrd, Hash)]
pub enum ValueError {
    /// Couldn't decode a primitive - no more data.
    OuttaData { ty: PrimitiveTy },
}

impl core::fmt::Display for ValueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueError::OuttaData { ty } => write!(
                f,
                "Couldn't decode primitive - no more data in payload. ty: `{ty:?}`"
            ),
        }
    }
}

impl core::error::Error for ValueError {}

/// An already-decoded typed scalar or array.
///
/// Values are transient: the caller owns one for the duration of a single
/// render call. All elements share one primitive type.
#[derive(Clone, Debug, PartialEq)]
pub struct Value {
    ty: PrimitiveTy,
    items: Vec<Primitive>,
}

impl Value {
    /// Wraps already-decoded primitives.
    ///
    /// Elements whose type disagrees with `ty` are dropped - a value is
    /// homogeneous by construction.
    pub fn new(ty: PrimitiveTy, items: impl IntoIterator<Item = Primitive>) -> Self {
        Self {
            ty,
            items: items.into_iter().filter(|p| p.ty() == ty).collect(),
        }
    }

    /// Decodes a raw payload into a value.
    ///
    /// This is the bridge from the container format: the outer parser
    /// knows the declared type, count, and byte order, and this turns the
    /// payload bytes into typed elements.
    ///
    /// ```
    /// use makernote::value::Value;
    /// use makernote_types::primitives::{Endianness, PrimitiveTy};
    ///
    /// let payload = [0_u8, 2, 0xff, 0xff];
    /// let v = Value::from_raw(PrimitiveTy::Short, 2, Endianness::Big, &payload).unwrap();
    /// assert_eq!(v.to_int64(0), Some(2));
    /// assert_eq!(v.to_int64(1), Some(65535));
    /// ```
    pub fn from_raw(
        ty: PrimitiveTy,
        count: u32,
        endianness: Endianness,
        payload: &[u8],
    ) -> ValueResult {
        let winnow_endianness = match endianness {
            Endianness::Little => WinnowEndianness::Little,
            Endianness::Big => WinnowEndianness::Big,
        };

        let stream = &mut RawStream {
            input: payload,
            state: RawState {
                endianness: &winnow_endianness,
                ty: &ty,
                count,
            },
        };

        Ok(Self {
            ty,
            items: decode_primitive_list(stream)?,
        })
    }

    /// How many elements this value stores.
    pub fn count(&self) -> u32 {
        self.items.len() as u32
    }

    /// The primitive type shared by all elements.
    pub fn type_id(&self) -> PrimitiveTy {
        self.ty
    }

    /// Reads one element as a signed 64-bit integer.
    ///
    /// Rationals divide out (truncating); a zero denominator yields
    /// `None`, as does an out-of-range index.
    pub fn to_int64(&self, index: usize) -> Option<i64> {
        match *self.items.get(index)? {
            Primitive::Byte(b) | Primitive::Ascii(b) | Primitive::Undefined(b) => Some(b as i64),
            Primitive::Short(s) => Some(s as i64),
            Primitive::Long(l) => Some(l as i64),
            Primitive::SShort(s) => Some(s as i64),
            Primitive::SLong(l) => Some(l as i64),
            Primitive::Rational(Rational {
                numerator,
                denominator,
            }) => (denominator != 0).then(|| numerator as i64 / denominator as i64),
            Primitive::SRational(SRational {
                numerator,
                denominator,
            }) => (denominator != 0).then(|| numerator as i64 / denominator as i64),
        }
    }

    /// Reads one element as a float.
    ///
    /// A rational with a zero denominator yields `None`, as does an
    /// out-of-range index.
    pub fn to_float(&self, index: usize) -> Option<f64> {
        match *self.items.get(index)? {
            Primitive::Rational(Rational {
                numerator,
                denominator,
            }) => (denominator != 0).then(|| numerator as f64 / denominator as f64),
            Primitive::SRational(SRational {
                numerator,
                denominator,
            }) => (denominator != 0).then(|| numerator as f64 / denominator as f64),
            _ => self.to_int64(index).map(|v| v as f64),
        }
    }

    /// Reslices one element as an independent single-element value.
    ///
    /// Composite resolution leans on this: sub-tag ids map 1:1 onto
    /// element offsets of the parent's payload.
    pub fn element(&self, index: usize) -> Option<Value> {
        self.items.get(index).map(|primitive| Value {
            ty: self.ty,
            items: vec![*primitive],
        })
    }

    //
    // convenience constructors, mostly useful for callers assembling
    // values by hand (and for tests)

    /// A single unsigned short.
    pub fn short(value: u16) -> Self {
        Self::new(PrimitiveTy::Short, [Primitive::Short(value)])
    }

    /// An array of unsigned shorts.
    pub fn shorts(values: &[u16]) -> Self {
        Self::new(
            PrimitiveTy::Short,
            values.iter().map(|&v| Primitive::Short(v)),
        )
    }

    /// A single unsigned long.
    pub fn long(value: u32) -> Self {
        Self::new(PrimitiveTy::Long, [Primitive::Long(value)])
    }

    /// A single unsigned rational.
    pub fn rational(numerator: u32, denominator: u32) -> Self {
        Self::new(
            PrimitiveTy::Rational,
            [Primitive::Rational(Rational {
                numerator,
                denominator,
            })],
        )
    }

    /// A single signed rational.
    pub fn srational(numerator: i32, denominator: i32) -> Self {
        Self::new(
            PrimitiveTy::SRational,
            [Primitive::SRational(SRational {
                numerator,
                denominator,
            })],
        )
    }

    /// An ASCII string value.
    pub fn ascii(text: &str) -> Self {
        Self::new(PrimitiveTy::Ascii, text.bytes().map(Primitive::Ascii))
    }

    /// An opaque byte blob.
    pub fn undefined(bytes: &[u8]) -> Self {
        Self::new(
            PrimitiveTy::Undefined,
            bytes.iter().map(|&b| Primitive::Undefined(b)),
        )
    }
}

impl core::fmt::Display for Value {
    /// The value's intrinsic default rendering.
    ///
    /// ASCII values print as text up to the first NUL; everything else
    /// prints its elements space-joined, with rationals as `num/den`.
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if self.ty == PrimitiveTy::Ascii {
            let bytes: Vec<u8> = self
                .items
                .iter()
                .map_while(|p| match p {
                    Primitive::Ascii(0) => None,
                    Primitive::Ascii(b) => Some(*b),
                    _ => None,
                })
                .collect();
            return f.write_str(&String::from_utf8_lossy(&bytes));
        }

        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }

            match *item {
                Primitive::Byte(b) | Primitive::Ascii(b) | Primitive::Undefined(b) => {
                    write!(f, "{b}")?
                }
                Primitive::Short(s) => write!(f, "{s}")?,
                Primitive::Long(l) => write!(f, "{l}")?,
                Primitive::SShort(s) => write!(f, "{s}")?,
                Primitive::SLong(l) => write!(f, "{l}")?,
                Primitive::Rational(Rational {
                    numerator,
                    denominator,
                }) => write!(f, "{numerator}/{denominator}")?,
                Primitive::SRational(SRational {
                    numerator,
                    denominator,
                }) => write!(f, "{numerator}/{denominator}")?,
            }
        }

        Ok(())
    }
}

#[derive(Debug)]
struct RawState<'s> {
    endianness: &'s WinnowEndianness,
    ty: &'s PrimitiveTy,
    count: u32,
}
type RawStream<'s> = Stateful<&'s [u8], RawState<'s>>;

/// Decodes `count` primitives off the payload.
fn decode_primitive_list(input: &mut RawStream) -> Result<Vec<Primitive>, ValueError> {
    let mut v: Vec<Primitive> = Vec::with_capacity(input.state.count as usize);

    for i in 0..input.state.count {
        v.push(decode_primitive.parse_next(input).inspect_err(|e| {
            log::error!("Failed to decode primitive #{i}. err: {e}");
        })?);
    }

    Ok(v)
}

/// Decodes a single primitive.
fn decode_primitive(input: &mut RawStream) -> Result<Primitive, ValueError> {
    let endianness = input.state.endianness;
    let ty = *input.state.ty;

    // endianness should never be native!
    debug_assert!(
        *endianness != WinnowEndianness::Native,
        "endianness should never be native. this is a bug - please report it!"
    );

    match ty {
        PrimitiveTy::Byte => Ok(Primitive::Byte(
            u8.parse_next(input)
                .map_err(|_: EmptyError| ValueError::OuttaData { ty })?,
        )),

        PrimitiveTy::Ascii => Ok(Primitive::Ascii(
            u8.parse_next(input)
                .map_err(|_: EmptyError| ValueError::OuttaData { ty })?,
        )),

        PrimitiveTy::Short => Ok(Primitive::Short(
            u16(*endianness)
                .parse_next(input)
                .map_err(|_: EmptyError| ValueError::OuttaData { ty })?,
        )),

        PrimitiveTy::Long => Ok(Primitive::Long(
            u32(*endianness)
                .parse_next(input)
                .map_err(|_: EmptyError| ValueError::OuttaData { ty })?,
        )),

        PrimitiveTy::Rational => Ok(Primitive::Rational(Rational {
            numerator: u32(*endianness)
                .parse_next(input)
                .map_err(|_: EmptyError| ValueError::OuttaData { ty })?,
            denominator: u32(*endianness)
                .parse_next(input)
                .map_err(|_: EmptyError| ValueError::OuttaData { ty })?,
        })),

        PrimitiveTy::Undefined => Ok(Primitive::Undefined(
            u8.parse_next(input)
                .map_err(|_: EmptyError| ValueError::OuttaData { ty })?,
        )),

        PrimitiveTy::SShort => Ok(Primitive::SShort(
            i16(*endianness)
                .parse_next(input)
                .map_err(|_: EmptyError| ValueError::OuttaData { ty })?,
        )),

        PrimitiveTy::SLong => Ok(Primitive::SLong(
            i32(*endianness)
                .parse_next(input)
                .map_err(|_: EmptyError| ValueError::OuttaData { ty })?,
        )),

        PrimitiveTy::SRational => Ok(Primitive::SRational(SRational {
            numerator: i32(*endianness)
                .parse_next(input)
                .map_err(|_: EmptyError| ValueError::OuttaData { ty })?,
            denominator: i32(*endianness)
                .parse_next(input)
                .map_err(|_: EmptyError| ValueError::OuttaData { ty })?,
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::{Value, ValueError};
    use crate::util::logger;
    use makernote_types::primitives::{Endianness, Primitive, PrimitiveTy};

    #[test]
    fn all_primitives_should_decode_under_le_and_be() {
        logger();

        let end_u16 = |v: u16, e: Endianness| match e {
            Endianness::Big => v.to_be_bytes(),
            Endianness::Little => v.to_le_bytes(),
        };

        let end_u32 = |v: u32, e: Endianness| match e {
            Endianness::Big => v.to_be_bytes(),
            Endianness::Little => v.to_le_bytes(),
        };

        let end_i32 = |v: i32, e: Endianness| match e {
            Endianness::Big => v.to_be_bytes(),
            Endianness::Little => v.to_le_bytes(),
        };

        for endianness in [Endianness::Big, Endianness::Little] {
            log::info!("endianness: {endianness:?}");

            for (ty, payload, expected) in [
                (PrimitiveTy::Byte, vec![4_u8], 4_i64),
                (PrimitiveTy::Ascii, b"c".to_vec(), b'c' as i64),
                (
                    PrimitiveTy::Short,
                    end_u16(u16::MAX, endianness).to_vec(),
                    u16::MAX as i64,
                ),
                (
                    PrimitiveTy::Long,
                    end_u32(45_u32, endianness).to_vec(),
                    45_i64,
                ),
                (PrimitiveTy::Undefined, vec![10_u8], 10_i64),
                (
                    PrimitiveTy::SLong,
                    end_i32(-2025_i32, endianness).to_vec(),
                    -2025_i64,
                ),
            ] {
                log::info!("decoding: ({ty:?}, `{payload:x?}`)");

                let value = Value::from_raw(ty, 1, endianness, &payload).unwrap();
                assert_eq!(value.type_id(), ty, "types should match");
                assert_eq!(value.count(), 1);
                assert_eq!(value.to_int64(0), Some(expected));
                assert_eq!(value.element(0), Some(value.clone()));
            }
        }

        // rationals span eight bytes, so check both halves explicitly
        let mut be_rational = Vec::new();
        be_rational.extend_from_slice(1_u32.to_be_bytes().as_slice());
        be_rational.extend_from_slice(60_u32.to_be_bytes().as_slice());
        let v = Value::from_raw(PrimitiveTy::Rational, 1, Endianness::Big, &be_rational).unwrap();
        assert_eq!(v.to_float(0), Some(1.0 / 60.0));

        let mut le_srational = Vec::new();
        le_srational.extend_from_slice((-1_i32).to_le_bytes().as_slice());
        le_srational.extend_from_slice(3_i32.to_le_bytes().as_slice());
        let v =
            Value::from_raw(PrimitiveTy::SRational, 1, Endianness::Little, &le_srational).unwrap();
        assert_eq!(v.to_float(0), Some(-1.0 / 3.0));
    }

    /// Payloads shorter than type x count must error, not panic.
    #[test]
    fn truncated_payload_is_an_error() {
        logger();

        let payload = [0_u8; 3]; // two shorts need four bytes
        assert_eq!(
            Value::from_raw(PrimitiveTy::Short, 2, Endianness::Little, &payload),
            Err(ValueError::OuttaData {
                ty: PrimitiveTy::Short
            })
        );
    }

    #[test]
    fn default_rendering() {
        logger();

        assert_eq!(Value::shorts(&[1, 2, 3]).to_string(), "1 2 3");
        assert_eq!(Value::rational(1, 60).to_string(), "1/60");
        assert_eq!(Value::srational(-3, 2).to_string(), "-3/2");
        assert_eq!(Value::ascii("NX300\0junk").to_string(), "NX300");
        assert_eq!(Value::undefined(&[48, 49, 48, 48]).to_string(), "48 49 48 48");
        assert_eq!(Value::long(0).to_string(), "0");
    }

    #[test]
    fn integer_and_float_accessors() {
        logger();

        let v = Value::srational(25, 1);
        assert_eq!(v.to_int64(0), Some(25));
        assert_eq!(v.to_float(0), Some(25.0));

        // zero denominators never divide
        let v = Value::srational(25, 0);
        assert_eq!(v.to_int64(0), None);
        assert_eq!(v.to_float(0), None);

        // out-of-range indexes yield nothing
        assert_eq!(Value::short(1).to_int64(4), None);
    }

    /// Mixed-type input gets filtered down to the declared type.
    #[test]
    fn new_drops_foreign_elements() {
        logger();

        let v = Value::new(
            PrimitiveTy::Short,
            [Primitive::Short(7), Primitive::Long(9)],
        );
        assert_eq!(v.count(), 1);
        assert_eq!(v.to_int64(0), Some(7));
    }
}
