//! The variant matrix generator.
//!
//! ## Semantics
//!
//! - Each option's values are deduplicated first, preserving first-seen
//!   order.
//! - An empty option list, or any option with zero values, yields the
//!   empty matrix. Standard empty-Cartesian-product semantics: clearing
//!   one option's values mid-edit wipes all variants. Expected, not a
//!   defect to patch around.
//! - Enumeration is odometer order: the last option's value changes
//!   fastest. Output order is enumeration order, not the existing list's.
//! - A generated row whose `title` exactly matches an existing row
//!   (case-sensitive) keeps that row's id, price, stock, sku and image;
//!   its `options` map and title are rebuilt from the current option list.
//! - Renaming an option's *name* changes every derived title and breaks
//!   preservation for the product. Accepted, observable behavior.

use crate::slug::slugify;
use std::collections::BTreeMap;
use storekit_model::{IdGenerator, ProductVariant, ProductVariantOption};
use tracing::debug;

/// Regenerate a product's variant rows from its option list, reconciling
/// against the previously generated rows.
pub fn generate(
    options: &[ProductVariantOption],
    existing: &[ProductVariant],
    base_price: f64,
    base_sku: &str,
) -> Vec<ProductVariant> {
    let value_lists: Vec<Vec<&str>> = options.iter().map(|o| dedupe_values(&o.values)).collect();

    if value_lists.is_empty() || value_lists.iter().any(|values| values.is_empty()) {
        debug!(options = options.len(), "empty option axis, matrix cleared");
        return Vec::new();
    }

    let mut ids = IdGenerator::new(base_sku);
    let mut variants: Vec<ProductVariant> = Vec::new();

    for combo in CartesianCounter::new(&value_lists) {
        let tuple: Vec<&str> = combo
            .iter()
            .zip(&value_lists)
            .map(|(&index, values)| values[index])
            .collect();
        let title = tuple.join(" / ");

        let option_map: BTreeMap<String, String> = options
            .iter()
            .zip(&tuple)
            .map(|(option, &value)| (option.name.clone(), value.to_string()))
            .collect();

        let variant = match existing.iter().find(|v| v.title == title) {
            Some(prior) => ProductVariant {
                id: prior.id.clone(),
                title,
                price: prior.price,
                stock: prior.stock,
                sku: prior.sku.clone(),
                image_id: prior.image_id.clone(),
                options: option_map,
            },
            None => ProductVariant {
                id: ids.next_free(|candidate| {
                    existing.iter().any(|v| v.id == candidate)
                        || variants.iter().any(|v| v.id == candidate)
                }),
                title,
                price: base_price,
                stock: 0,
                sku: seeded_sku(base_sku, &tuple),
                image_id: None,
                options: option_map,
            },
        };

        variants.push(variant);
    }

    variants
}

/// Keep first occurrence of each value, preserving order.
fn dedupe_values(values: &[String]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::with_capacity(values.len());
    for value in values {
        if !seen.contains(&value.as_str()) {
            seen.push(value);
        }
    }
    seen
}

fn seeded_sku(base_sku: &str, tuple: &[&str]) -> String {
    let suffix: Vec<String> = tuple.iter().map(|value| slugify(value)).collect();
    format!("{}-{}", base_sku, suffix.join("-"))
}

/// Odometer over the value-list lengths: yields index tuples with the
/// rightmost position incrementing fastest.
struct CartesianCounter {
    lengths: Vec<usize>,
    current: Vec<usize>,
    done: bool,
}

impl CartesianCounter {
    fn new(value_lists: &[Vec<&str>]) -> Self {
        Self {
            lengths: value_lists.iter().map(|values| values.len()).collect(),
            current: vec![0; value_lists.len()],
            done: value_lists.iter().any(|values| values.is_empty()),
        }
    }
}

impl Iterator for CartesianCounter {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }

        let item = self.current.clone();

        // Increment from the right, carrying leftward.
        self.done = true;
        for position in (0..self.current.len()).rev() {
            self.current[position] += 1;
            if self.current[position] < self.lengths[position] {
                self.done = false;
                break;
            }
            self.current[position] = 0;
        }

        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(id: &str, name: &str, values: &[&str]) -> ProductVariantOption {
        ProductVariantOption {
            id: id.to_string(),
            name: name.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    fn size_and_color() -> Vec<ProductVariantOption> {
        vec![
            option("o-1", "Size", &["S", "M"]),
            option("o-2", "Color", &["Red", "Blue"]),
        ]
    }

    #[test]
    fn test_basic_matrix_in_odometer_order() {
        let variants = generate(&size_and_color(), &[], 29.0, "TEE");

        let titles: Vec<&str> = variants.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, vec!["S / Red", "S / Blue", "M / Red", "M / Blue"]);

        assert_eq!(variants[0].price, 29.0);
        assert_eq!(variants[0].stock, 0);
        assert_eq!(variants[0].sku, "TEE-s-red");
        assert_eq!(variants[0].options["Size"], "S");
        assert_eq!(variants[0].options["Color"], "Red");
    }

    #[test]
    fn test_single_option_matrix() {
        let variants = generate(&[option("o-1", "Size", &["S", "M", "L"])], &[], 10.0, "CAP");

        let titles: Vec<&str> = variants.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, vec!["S", "M", "L"]);
    }

    #[test]
    fn test_preservation_across_regeneration() {
        let initial = generate(&size_and_color(), &[], 29.0, "TEE");

        // Simulate manual edits to two rows.
        let mut edited = initial.clone();
        let s_red = edited.iter_mut().find(|v| v.title == "S / Red").unwrap();
        s_red.price = 35.0;
        s_red.stock = 12;
        let m_red = edited.iter_mut().find(|v| v.title == "M / Red").unwrap();
        m_red.sku = "TEE-CUSTOM".to_string();

        // Add a new Size value and regenerate.
        let mut options = size_and_color();
        options[0].values.push("L".to_string());
        let regenerated = generate(&options, &edited, 29.0, "TEE");

        assert_eq!(regenerated.len(), 6);

        let s_red = regenerated.iter().find(|v| v.title == "S / Red").unwrap();
        assert_eq!(s_red.price, 35.0);
        assert_eq!(s_red.stock, 12);

        let m_red = regenerated.iter().find(|v| v.title == "M / Red").unwrap();
        assert_eq!(m_red.sku, "TEE-CUSTOM");

        for title in ["L / Red", "L / Blue"] {
            let row = regenerated.iter().find(|v| v.title == title).unwrap();
            assert_eq!(row.price, 29.0);
            assert_eq!(row.stock, 0);
        }
    }

    #[test]
    fn test_preserved_rows_keep_identity() {
        let initial = generate(&size_and_color(), &[], 29.0, "TEE");
        let regenerated = generate(&size_and_color(), &initial, 29.0, "TEE");

        for (before, after) in initial.iter().zip(&regenerated) {
            assert_eq!(before.id, after.id);
        }
    }

    #[test]
    fn test_empty_option_values_wipe_the_matrix() {
        let existing = generate(&size_and_color(), &[], 29.0, "TEE");

        let mut options = size_and_color();
        options[1].values.clear();

        // One cleared axis empties the whole matrix even though Size
        // still has values. Deliberate: empty Cartesian product.
        assert!(generate(&options, &existing, 29.0, "TEE").is_empty());
    }

    #[test]
    fn test_empty_option_list_yields_empty_matrix() {
        assert!(generate(&[], &[], 29.0, "TEE").is_empty());
    }

    #[test]
    fn test_duplicate_values_are_deduplicated_in_order() {
        let variants = generate(
            &[option("o-1", "Size", &["S", "M", "S", "M", "L"])],
            &[],
            10.0,
            "CAP",
        );

        let titles: Vec<&str> = variants.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, vec!["S", "M", "L"]);
    }

    #[test]
    fn test_title_match_is_case_sensitive() {
        let mut existing = generate(&[option("o-1", "Size", &["S"])], &[], 10.0, "CAP");
        existing[0].price = 99.0;
        existing[0].title = "s".to_string();

        let regenerated = generate(&[option("o-1", "Size", &["S"])], &existing, 10.0, "CAP");
        assert_eq!(regenerated[0].price, 10.0);
    }

    #[test]
    fn test_option_rename_rebuilds_options_map() {
        let existing = generate(&size_and_color(), &[], 29.0, "TEE");

        let mut options = size_and_color();
        options[0].name = "Fit".to_string();
        let regenerated = generate(&options, &existing, 35.0, "TEE");

        // Titles are value-derived and unchanged, so rows still match by
        // title; only the options map carries the new name.
        assert_eq!(regenerated[0].options.get("Fit"), Some(&"S".to_string()));
        assert!(regenerated[0].options.get("Size").is_none());
    }

    #[test]
    fn test_output_order_ignores_existing_order() {
        let mut existing = generate(&size_and_color(), &[], 29.0, "TEE");
        existing.reverse();

        let regenerated = generate(&size_and_color(), &existing, 29.0, "TEE");
        let titles: Vec<&str> = regenerated.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, vec!["S / Red", "S / Blue", "M / Red", "M / Blue"]);
    }
}
