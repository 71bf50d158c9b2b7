use super::Registry;
use crate::ir::TypeRef;
use crate::sample::Sample;

/// Element type of a sequence field, taken from its first element only.
///
/// Nested records keep the field's naming (`[[{..}]]` under `Root.items`
/// still yields `RootItems`); an empty sequence is a sequence of `Any`.
pub(super) fn infer_sequence(
    items: &[Sample],
    parent: &str,
    export_name: &str,
    registry: &mut Registry,
) -> TypeRef {
    let item = match items.first() {
        Some(first) => super::infer_type(first, parent, export_name, registry),
        None => TypeRef::Any,
    };
    TypeRef::sequence_of(item)
}
