//! Schema identifier remapper.
//!
//! First phase of a template clone. Walks the schema in order, assigns a
//! fresh v4 uuid to every item not in the exclusion set, then rewrites all
//! field-area references through the resulting map. Areas that reference an
//! excluded or unknown identifier are left exactly as they were.

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::template::TemplateContent;

/// Transient old -> new identifier map, scoped to a single clone call.
pub type UuidMap = HashMap<Uuid, Uuid>;

/// Rewrite schema identifiers in place and return the old -> new map.
///
/// - Schema items whose `attachment_uuid` is in `excluded` are skipped
///   entirely: identifier and name stay untouched and no map entry is made.
/// - `replacement_names` is aligned to schema position (not to the filtered
///   sequence); a non-empty entry overwrites the item's display name, an
///   empty or absent entry keeps the existing one.
/// - Area references are resolved only through the map built here, so the
///   schema pass must complete before any area is rewritten. References to
///   identifiers outside the map (excluded, dangling, or `None`) are left
///   as-is rather than nulled.
pub fn remap_schema(
    content: &mut TemplateContent,
    replacement_names: &[Option<String>],
    excluded: &HashSet<Uuid>,
) -> UuidMap {
    let mut map = UuidMap::new();

    for (index, item) in content.schema.iter_mut().enumerate() {
        if excluded.contains(&item.attachment_uuid) {
            continue;
        }

        let new_uuid = Uuid::new_v4();
        map.insert(item.attachment_uuid, new_uuid);
        item.attachment_uuid = new_uuid;

        if let Some(Some(name)) = replacement_names.get(index) {
            if !name.is_empty() {
                item.name = name.clone();
            }
        }
    }

    for field in &mut content.fields {
        for area in &mut field.areas {
            if let Some(reference) = area.attachment_uuid {
                if let Some(new_uuid) = map.get(&reference) {
                    area.attachment_uuid = Some(*new_uuid);
                }
            }
        }
    }

    map
}
