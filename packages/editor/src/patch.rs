//! JSON merge patches for block data.
//!
//! The designer's field editors emit partial objects; merging follows
//! RFC 7396 (object keys merge recursively, `null` removes, everything
//! else replaces). The family tag is pinned: a patch cannot move a block
//! to a different family.

use serde_json::Value;
use storekit_model::{Block, BlockData};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatchError {
    #[error("patch must be a JSON object")]
    NotAnObject,

    #[error("patched data does not fit family '{family}': {source}")]
    Incompatible {
        family: String,
        source: serde_json::Error,
    },
}

/// Merge `patch` into the block's serialized data and deserialize it back.
/// On error the block is left untouched.
pub fn merge_block_data(block: &mut Block, patch: &Value) -> Result<(), PatchError> {
    if !patch.is_object() {
        return Err(PatchError::NotAnObject);
    }

    let family = block.family();
    let mut data = serde_json::to_value(&block.data).map_err(|source| PatchError::Incompatible {
        family: family.to_string(),
        source,
    })?;
    merge(&mut data, patch);

    // The tag is structural, not content; re-pin it after the merge.
    data["type"] = Value::String(family.as_str().to_string());

    match serde_json::from_value::<BlockData>(data) {
        Ok(patched) => {
            block.data = patched;
            Ok(())
        }
        Err(source) => Err(PatchError::Incompatible {
            family: family.to_string(),
            source,
        }),
    }
}

/// RFC 7396 merge: recurse into objects, `null` deletes, scalars replace.
fn merge(target: &mut Value, patch: &Value) {
    match patch {
        Value::Object(entries) => {
            if !target.is_object() {
                *target = Value::Object(serde_json::Map::new());
            }
            if let Some(map) = target.as_object_mut() {
                for (key, value) in entries {
                    if value.is_null() {
                        map.remove(key);
                    } else {
                        merge(map.entry(key.clone()).or_insert(Value::Null), value);
                    }
                }
            }
        }
        other => *target = other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use storekit_model::{Alignment, HeroData, StyleConfig};

    fn hero_block() -> Block {
        Block {
            id: "b-1".to_string(),
            name: "Hero".to_string(),
            variant: None,
            hidden: false,
            locked: false,
            content: None,
            data: BlockData::Hero(HeroData {
                heading: Some("Old".to_string()),
                subheading: Some("Keep me".to_string()),
                ..Default::default()
            }),
        }
    }

    #[test]
    fn test_merge_updates_one_field_keeps_the_rest() {
        let mut block = hero_block();
        merge_block_data(&mut block, &json!({ "heading": "New" })).unwrap();

        match &block.data {
            BlockData::Hero(data) => {
                assert_eq!(data.heading.as_deref(), Some("New"));
                assert_eq!(data.subheading.as_deref(), Some("Keep me"));
            }
            other => panic!("family changed: {other:?}"),
        }
    }

    #[test]
    fn test_null_removes_a_field() {
        let mut block = hero_block();
        merge_block_data(&mut block, &json!({ "subheading": null })).unwrap();

        match &block.data {
            BlockData::Hero(data) => assert_eq!(data.subheading, None),
            other => panic!("family changed: {other:?}"),
        }
    }

    #[test]
    fn test_nested_style_merge() {
        let mut block = hero_block();
        merge_block_data(&mut block, &json!({ "style": { "alignment": "center" } })).unwrap();

        assert_eq!(
            block.data.style(),
            Some(&StyleConfig {
                alignment: Some(Alignment::Center),
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_patch_cannot_change_family() {
        let mut block = hero_block();
        merge_block_data(&mut block, &json!({ "type": "grid" })).unwrap();

        assert!(matches!(block.data, BlockData::Hero(_)));
    }

    #[test]
    fn test_non_object_patch_rejected_block_untouched() {
        let mut block = hero_block();
        let before = block.clone();

        assert!(merge_block_data(&mut block, &json!("nope")).is_err());
        assert_eq!(block, before);
    }

    #[test]
    fn test_out_of_enum_style_value_degrades_without_failing() {
        let mut block = hero_block();
        merge_block_data(&mut block, &json!({ "style": { "padding": "gigantic" } })).unwrap();

        // Lenient style fields: the bad value lands as absent.
        assert_eq!(block.data.style(), Some(&StyleConfig::default()));
    }
}
