//! Formatting rule dispatch.
//!
//! Rendering is total by contract: every rule validates its value's type
//! and count before transforming it, and any mismatch degrades to the
//! value's plain rendering. Malformed vendor data still yields readable
//! text instead of aborting the rest of a file's metadata.

use makernote_types::{
    descriptor::{FormatRule, LookupTable, TagDescriptor},
    group::MakerGroup,
    primitives::PrimitiveTy,
    tables,
};

use crate::{composite, translate::Translate, value::Value};

/// Resolves a tag id within a group and renders its value.
///
/// This is the single entry point combining lookup and dispatch. Unknown
/// ids hit the group's sentinel descriptor and render plainly.
///
/// ```
/// use makernote::{format::render, translate::Untranslated, value::Value};
/// use makernote_types::group::MakerGroup;
///
/// let text = render(
///     MakerGroup::Samsung2,
///     0xa01a,
///     &Value::long(500),
///     &Untranslated,
/// );
/// assert_eq!(text, "50.0 mm");
/// ```
pub fn render(group: MakerGroup, tag_id: u16, value: &Value, tr: &impl Translate) -> String {
    render_with(tables::lookup(group, tag_id), value, tr)
}

/// Renders a value through an already-resolved descriptor's rule.
pub fn render_with(descriptor: &TagDescriptor, value: &Value, tr: &impl Translate) -> String {
    log::trace!(
        "rendering `{}` (0x{:04x} in {:?})...",
        descriptor.name,
        descriptor.id,
        descriptor.group
    );

    match descriptor.rule {
        FormatRule::Plain => value.to_string(),
        FormatRule::Lookup(table) => lookup_print(descriptor, table, value, tr),
        FormatRule::ExifVersion => exif_version(descriptor, value),
        FormatRule::CameraTemperature => camera_temperature(descriptor, value),
        FormatRule::FocalLength35mm => focal_length_35mm(descriptor, value, tr),
        FormatRule::ExposureTime => exposure_time(descriptor, value),
        FormatRule::FNumber => f_number(descriptor, value),
        FormatRule::ExposureBias => exposure_bias(descriptor, value),
        FormatRule::PwColor => pw_color(descriptor, value, tr),
        FormatRule::ValueMinus4 => value_minus_4(descriptor, value),
        FormatRule::Composite(sub_group) => composite_print(descriptor, sub_group, value, tr),
    }
}

/// The universal mismatch fallback: the value's own rendering.
fn fall_back(descriptor: &TagDescriptor, value: &Value) -> String {
    log::warn!(
        "Value on `{}` didn't satisfy its rule's type/count guard. \
        Falling back to plain rendering. \
        got: (ty {:?}, count {})",
        descriptor.name,
        value.type_id(),
        value.count()
    );
    value.to_string()
}

/// Reads the single scalar a rule expects, or nothing on a guard miss.
fn guarded_scalar(value: &Value, ty: PrimitiveTy) -> Option<i64> {
    if value.count() != 1 || value.type_id() != ty {
        return None;
    }
    value.to_int64(0)
}

fn lookup_print(
    descriptor: &TagDescriptor,
    table: LookupTable,
    value: &Value,
    tr: &impl Translate,
) -> String {
    if value.count() != 1 {
        return fall_back(descriptor, value);
    }

    let Some(raw) = value.to_int64(0) else {
        return fall_back(descriptor, value);
    };

    match table.iter().find(|(entry, _)| *entry == raw) {
        Some((_, label)) => tr.translate(label).into_owned(),
        None => {
            // not an error: vendors ship values their own tables miss
            log::trace!("`{}`: no table entry for raw value {raw}", descriptor.name);
            value.to_string()
        }
    }
}

/// Renders four ASCII digits `abcd` as the version string `ab.cd`.
///
/// A leading zero on the major part gets trimmed, so `0100` reads `1.00`.
fn exif_version(descriptor: &TagDescriptor, value: &Value) -> String {
    if value.count() != 4
        || !matches!(
            value.type_id(),
            PrimitiveTy::Undefined | PrimitiveTy::Ascii | PrimitiveTy::Byte
        )
    {
        return fall_back(descriptor, value);
    }

    let mut digits = [0_u8; 4];
    for (i, digit) in digits.iter_mut().enumerate() {
        match value.to_int64(i) {
            Some(b @ 0x30..=0x39) => *digit = b as u8,
            _ => return fall_back(descriptor, value),
        }
    }

    let [a, b, c, d] = digits.map(char::from);
    match a {
        '0' => format!("{b}.{c}{d}"),
        _ => format!("{a}{b}.{c}{d}"),
    }
}

fn camera_temperature(descriptor: &TagDescriptor, value: &Value) -> String {
    if value.count() != 1 || value.type_id() != PrimitiveTy::SRational {
        return fall_back(descriptor, value);
    }

    match value.to_float(0) {
        Some(temperature) => format!("{temperature} C"),
        None => fall_back(descriptor, value),
    }
}

fn focal_length_35mm(descriptor: &TagDescriptor, value: &Value, tr: &impl Translate) -> String {
    let Some(length) = guarded_scalar(value, PrimitiveTy::Long) else {
        return fall_back(descriptor, value);
    };

    if length == 0 {
        return tr.translate("Unknown").into_owned();
    }

    format!("{:.1} mm", length as f64 / 10.0)
}

fn exposure_time(descriptor: &TagDescriptor, value: &Value) -> String {
    if value.count() != 1 || value.type_id() != PrimitiveTy::Rational {
        return fall_back(descriptor, value);
    }

    let Some(seconds) = value.to_float(0) else {
        return fall_back(descriptor, value);
    };

    if seconds == 0.0 {
        return "0 s".to_string();
    }

    // camera exposure times below a second are conventionally written as
    // reciprocals
    if seconds < 1.0 {
        let reciprocal = 1.0 / seconds;
        if (reciprocal - reciprocal.round()).abs() < 1e-9 {
            return format!("1/{reciprocal:.0} s");
        }
        return format!("{seconds:.1} s");
    }

    if seconds.fract().abs() < 1e-9 {
        format!("{seconds:.0} s")
    } else {
        format!("{seconds:.1} s")
    }
}

fn f_number(descriptor: &TagDescriptor, value: &Value) -> String {
    if value.count() != 1 || value.type_id() != PrimitiveTy::Rational {
        return fall_back(descriptor, value);
    }

    let Some(aperture) = value.to_float(0) else {
        return fall_back(descriptor, value);
    };

    if aperture.fract().abs() < 1e-9 {
        format!("F{aperture:.0}")
    } else {
        format!("F{aperture:.1}")
    }
}

fn exposure_bias(descriptor: &TagDescriptor, value: &Value) -> String {
    if value.count() != 1 || value.type_id() != PrimitiveTy::SRational {
        return fall_back(descriptor, value);
    }

    let Some(bias) = value.to_float(0) else {
        return fall_back(descriptor, value);
    };

    if bias == 0.0 {
        return "0 EV".to_string();
    }

    format!("{bias:+.1} EV")
}

/// The Picture Wizard hue value.
///
/// 65535 marks "no color modification"; other values look like a hue in
/// degrees.
fn pw_color(descriptor: &TagDescriptor, value: &Value, tr: &impl Translate) -> String {
    let Some(raw) = guarded_scalar(value, PrimitiveTy::Short) else {
        return fall_back(descriptor, value);
    };

    if raw == 65535 {
        return tr.translate("Neutral").into_owned();
    }

    raw.to_string()
}

fn value_minus_4(descriptor: &TagDescriptor, value: &Value) -> String {
    let Some(raw) = guarded_scalar(value, PrimitiveTy::Short) else {
        return fall_back(descriptor, value);
    };

    (raw - 4).to_string()
}

/// Renders a composite parent by resolving its elements through the
/// sub-group's table.
///
/// Assembly here is one reasonable layout - `Label: text` pairs joined by
/// `", "`. Callers wanting a different one can use
/// [`composite::resolve_sub`] directly and lay the pairs out themselves.
fn composite_print(
    descriptor: &TagDescriptor,
    sub_group: MakerGroup,
    value: &Value,
    tr: &impl Translate,
) -> String {
    let resolved = composite::resolve_sub(value, sub_group, tr);

    if resolved.is_empty() {
        return fall_back(descriptor, value);
    }

    resolved
        .into_iter()
        .map(|(sub_id, text)| {
            let label = tr.translate(tables::lookup(sub_group, sub_id).label);
            format!("{label}: {text}")
        })
        .collect::<Vec<String>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::render;
    use crate::{
        translate::{Translate, Untranslated},
        util::logger,
        value::Value,
    };
    use makernote_types::group::MakerGroup;

    /// Enumerated lookup: exact hits print the label, misses print the
    /// raw value, and neither crashes.
    #[test]
    fn lookup_hits_and_misses() {
        logger();

        let lens = |raw: u16| {
            render(
                MakerGroup::Samsung2,
                0xa003,
                &Value::short(raw),
                &Untranslated,
            )
        };

        assert_eq!(lens(0), "Built-in");
        assert_eq!(lens(8), "Samsung NX 16mm F2.4 Pancake");
        assert_eq!(lens(99), "99", "misses fall back to the raw value");

        // count != 1 falls back to plain rendering
        assert_eq!(
            render(
                MakerGroup::Samsung2,
                0xa003,
                &Value::shorts(&[1, 2]),
                &Untranslated
            ),
            "1 2"
        );
    }

    #[test]
    fn camera_temperature() {
        logger();

        let temp = |v: &Value| render(MakerGroup::Samsung2, 0x0043, v, &Untranslated);

        assert_eq!(temp(&Value::srational(25, 1)), "25 C");
        assert_eq!(temp(&Value::srational(215, 10)), "21.5 C");
        assert_eq!(temp(&Value::srational(-5, 1)), "-5 C");

        // wrong type: fall back to the value's own rendering
        assert_eq!(temp(&Value::long(25)), "25");

        // zero denominator: no float conversion, plain rendering
        assert_eq!(temp(&Value::srational(25, 0)), "25/0");
    }

    #[test]
    fn focal_length_in_35mm_format() {
        logger();

        let focal = |v: &Value| render(MakerGroup::Samsung2, 0xa01a, v, &Untranslated);

        assert_eq!(focal(&Value::long(0)), "Unknown");
        assert_eq!(focal(&Value::long(500)), "50.0 mm");
        assert_eq!(focal(&Value::long(1)), "0.1 mm");
        assert_eq!(focal(&Value::long(305)), "30.5 mm");

        // wrong type (short instead of long)
        assert_eq!(focal(&Value::short(500)), "500");
    }

    /// The localized "Unknown" goes through the injected translator.
    #[test]
    fn focal_length_unknown_is_translated() {
        logger();

        struct German;
        impl Translate for German {
            fn translate(&self, msg: &'static str) -> Cow<'static, str> {
                match msg {
                    "Unknown" => Cow::Borrowed("Unbekannt"),
                    other => Cow::Borrowed(other),
                }
            }
        }

        assert_eq!(
            render(MakerGroup::Samsung2, 0xa01a, &Value::long(0), &German),
            "Unbekannt"
        );
    }

    #[test]
    fn picture_wizard_color() {
        logger();

        let color = |v: &Value| render(MakerGroup::SamsungPictureWizard, 0x0001, v, &Untranslated);

        assert_eq!(color(&Value::short(65535)), "Neutral");
        assert_eq!(color(&Value::short(180)), "180");
        assert_eq!(color(&Value::short(0)), "0");

        // wrong type falls back
        assert_eq!(color(&Value::long(65535)), "65535");
    }

    #[test]
    fn picture_wizard_value_minus_4() {
        logger();

        for (sub_id, raw, expected) in [
            (0x0002_u16, 4_u16, "0"),
            (0x0002, 0, "-4"),
            (0x0002, 9, "5"),
            (0x0003, 4, "0"),
            (0x0004, 6, "2"),
        ] {
            assert_eq!(
                render(
                    MakerGroup::SamsungPictureWizard,
                    sub_id,
                    &Value::short(raw),
                    &Untranslated
                ),
                expected
            );
        }
    }

    #[test]
    fn makernote_version() {
        logger();

        let version = |v: &Value| render(MakerGroup::Samsung2, 0x0001, v, &Untranslated);

        assert_eq!(version(&Value::undefined(b"0100")), "1.00");
        assert_eq!(version(&Value::undefined(b"0220")), "2.20");
        assert_eq!(version(&Value::undefined(b"1300")), "13.00");

        // non-digit payloads aren't versions
        assert_eq!(version(&Value::undefined(&[0, 1, 0, 0])), "0 1 0 0");
    }

    #[test]
    fn exposure_time() {
        logger();

        let time = |v: &Value| render(MakerGroup::Samsung2, 0xa018, v, &Untranslated);

        assert_eq!(time(&Value::rational(1, 60)), "1/60 s");
        assert_eq!(time(&Value::rational(10, 600)), "1/60 s");
        assert_eq!(time(&Value::rational(0, 10)), "0 s");
        assert_eq!(time(&Value::rational(2, 1)), "2 s");
        assert_eq!(time(&Value::rational(5, 2)), "2.5 s");

        // malformed rationals fall back
        assert_eq!(time(&Value::rational(1, 0)), "1/0");
    }

    #[test]
    fn f_number() {
        logger();

        let aperture = |v: &Value| render(MakerGroup::Samsung2, 0xa019, v, &Untranslated);

        assert_eq!(aperture(&Value::rational(2, 1)), "F2");
        assert_eq!(aperture(&Value::rational(28, 5)), "F5.6");
        assert_eq!(aperture(&Value::rational(35, 10)), "F3.5");
    }

    #[test]
    fn exposure_bias() {
        logger();

        let bias = |v: &Value| render(MakerGroup::Samsung2, 0xa013, v, &Untranslated);

        assert_eq!(bias(&Value::srational(0, 1)), "0 EV");
        assert_eq!(bias(&Value::srational(1, 2)), "+0.5 EV");
        assert_eq!(bias(&Value::srational(-1, 2)), "-0.5 EV");
    }

    /// Unknown ids resolve through the sentinel and still render.
    #[test]
    fn unknown_tag_renders_plainly() {
        logger();

        assert_eq!(
            render(
                MakerGroup::Samsung2,
                0xbeef,
                &Value::shorts(&[7, 8]),
                &Untranslated
            ),
            "7 8"
        );
    }

    /// Rendering twice with identical inputs gives identical output -
    /// there's no hidden state anywhere.
    #[test]
    fn rendering_is_idempotent() {
        logger();

        let value = Value::srational(215, 10);
        let first = render(MakerGroup::Samsung2, 0x0043, &value, &Untranslated);
        let second = render(MakerGroup::Samsung2, 0x0043, &value, &Untranslated);
        assert_eq!(first, second);
    }
}
