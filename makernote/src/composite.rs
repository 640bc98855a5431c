//! Composite tag resolution.
//!
//! Some maker note tags pack a whole sub-structure into one payload:
//! Samsung's `PictureWizard` (0x0021) carries five shorts that are really
//! five independent sub-tags. Those sub-tags have their own table - a
//! nested [`MakerGroup`] - and each sub-tag id doubles as an element
//! offset into the parent's payload.

use makernote_types::{group::MakerGroup, tables};

use crate::{format, translate::Translate, value::Value};

/// Resolves a composite parent value into (sub-tag id, rendered text)
/// pairs, ascending id order.
///
/// Each defined sub-tag position gets the matching element of the parent's
/// payload, resolved through the sub-group's table and formatting rules as
/// an independent single-element value.
///
/// Truncated payloads resolve only the available prefix: nothing gets
/// fabricated for missing elements, and nothing errors.
///
/// ```
/// use makernote::{composite::resolve_sub, translate::Untranslated, value::Value};
/// use makernote_types::group::MakerGroup;
///
/// let parent = Value::shorts(&[1, 65535, 4, 4, 4]);
/// let resolved = resolve_sub(&parent, MakerGroup::SamsungPictureWizard, &Untranslated);
///
/// assert_eq!(resolved[0], (0x0000, "Vivid".to_string()));
/// assert_eq!(resolved[1], (0x0001, "Neutral".to_string()));
/// ```
pub fn resolve_sub(
    parent: &Value,
    sub_group: MakerGroup,
    tr: &impl Translate,
) -> Vec<(u16, String)> {
    let mut resolved: Vec<(u16, String)> = Vec::new();

    for descriptor in tables::tag_list(sub_group)
        .iter()
        .filter(|d| !d.is_sentinel())
    {
        let offset = descriptor.id as usize;

        let Some(element) = parent.element(offset) else {
            log::trace!(
                "parent payload ends before sub-tag 0x{:04x} in {sub_group:?}. \
                resolving only the available prefix",
                descriptor.id
            );
            break;
        };

        resolved.push((descriptor.id, format::render_with(descriptor, &element, tr)));
    }

    resolved
}
