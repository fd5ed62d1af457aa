//! Layering of YAML settings documents.
//!
//! - Mappings merge key by key, recursively
//! - Sequences and scalars in the overlay replace the base value
//! - A null in the overlay removes the key, restoring the default

use serde_yaml::{Mapping, Value};

/// Merge `overlay` into `base` in place.
pub fn merge_into(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                if value.is_null() {
                    base_map.remove(&key);
                    continue;
                }
                match base_map.get_mut(&key) {
                    Some(existing) => merge_into(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

/// Fold layers in order; later layers win.
pub fn merge_layers<I>(layers: I) -> Value
where
    I: IntoIterator<Item = Value>,
{
    let mut merged = Value::Mapping(Mapping::new());
    for layer in layers {
        // An empty file parses as null and contributes nothing.
        if layer.is_null() {
            continue;
        }
        merge_into(&mut merged, layer);
    }
    merged
}
