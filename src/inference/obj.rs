use indexmap::IndexMap;
use tracing::trace;

use super::{naming, Registry};
use crate::ir::Field;
use crate::sample::Sample;

/// Infer the record for one mapping and register it.
///
/// The name is claimed before the fields are walked, so a parent always
/// wins a name over its descendants. Returns the name actually assigned,
/// which differs from `candidate` only after a collision.
pub(super) fn infer_record(
    candidate: &str,
    map: &IndexMap<String, Sample>,
    registry: &mut Registry,
) -> String {
    let name = registry.claim(candidate);

    let mut fields: Vec<Field> = Vec::with_capacity(map.len());
    for (key, value) in map {
        // keys like `id` and `ID` title-case alike; later ones get a suffix
        let export_name = naming::disambiguate(&naming::export_name(key), |n| {
            fields.iter().any(|f| f.export_name == n)
        });
        let ty = super::infer_type(value, &name, &export_name, registry);
        trace!(record = %name, key = %key, ?ty, "field");
        fields.push(Field { key: key.clone(), export_name, ty });
    }

    registry.fill(&name, fields);
    name
}
