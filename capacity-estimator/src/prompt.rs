//! Prompt builder for the capacity estimate.
//!
//! The template is fixed; only the truck spec is substituted. It ends with a
//! literal example of the output schema so the model mirrors its keys.

use serde_json::{Map, Value, json};

use crate::truck_spec::{LARGE_TRUCK_MIN_M3, MEDIUM_TRUCK_MIN_M3, TruckSpec};

/// Household-item categories under `recommendedItems`, with the hint the
/// model sees for each.
pub const RECOMMENDED_CATEGORIES: [(&str, &str); 17] = [
    ("appliances", "recommended appliances based on the truck's capacity"),
    ("furniture", "recommended furniture based on the truck's capacity"),
    ("others", "other suitable items for loading"),
    ("kitchenware", "recommended kitchenware items"),
    ("bathroomEssentials", "bathroom essentials"),
    ("bedroomEssentials", "bedroom essentials"),
    ("wallDecor", "wall décor items"),
    ("floorDecor", "floor décor items"),
    ("closetStorage", "closet storage items"),
    ("generalStorage", "general storage items"),
    ("electronics", "electronics"),
    ("officeSupplies", "office supplies"),
    ("hobbiesAndRecreation", "hobbies and recreation items"),
    ("outdoorItems", "outdoor items"),
    ("safety", "safety items"),
    ("utilities", "utility items"),
    ("miscellaneous", "miscellaneous items"),
];

/// Build the single user message sent to the model.
pub fn build_prompt(spec: &TruckSpec) -> String {
    let mut s = String::new();
    s.push_str(
        "You are an assistant that analyzes truck specifications to estimate how many household items the truck can carry.\n",
    );
    s.push_str(
        "Estimate the load capacity, recommend suitable household items, and answer strictly in JSON.\n",
    );

    s.push_str("\n# Input\n");
    s.push_str("A single JSON object describing the truck:\n");
    s.push_str("- manufacturer (string): truck manufacturer.\n");
    s.push_str("- model (string): model name.\n");
    s.push_str("- type (string): kind of truck (flatbed, box truck, ...).\n");
    s.push_str("- year (number): manufacturing year.\n");
    s.push_str("- startingRate (number): starting rental rate in dollars.\n");
    s.push_str("- units (number): unit count available for loading (pallets, boxes, ...).\n");
    s.push_str("- dimensions (string): cargo space as length x width x height in meters.\n");

    s.push_str("\n# Response\n");
    s.push_str("- Reply with the JSON object only. No markdown fences, no commentary.\n");
    s.push_str("- `capacityEstimation`:\n");
    s.push_str("  - `totalVolume` (number): total cargo volume in cubic meters.\n");
    s.push_str("  - `maxItems` (number): maximum number of items that fit.\n");
    s.push_str("  - `utilizationRate` (string): how to best use the space.\n");
    s.push_str("  - `warnings` (array of strings): capacity issues or incompatibilities.\n");
    s.push_str("- `recommendedItems`: one array per category:\n");
    for (key, hint) in RECOMMENDED_CATEGORIES {
        s.push_str(&format!("  - `{key}`: {hint}.\n"));
    }

    s.push_str("\n# Constraints\n");
    s.push_str("- If `dimensions` is missing or malformed, add a warning to `warnings`.\n");
    s.push_str(
        "- Use `totalVolume` and average household item sizes to pick recommendations:\n",
    );
    s.push_str(&format!(
        "  - Large truck ({LARGE_TRUCK_MIN_M3}+ m³): multiple large appliances and furniture.\n"
    ));
    s.push_str(&format!(
        "  - Medium truck ({MEDIUM_TRUCK_MIN_M3}-{LARGE_TRUCK_MIN_M3} m³): some appliances and furniture with boxes.\n"
    ));
    s.push_str(&format!(
        "  - Small truck (<{MEDIUM_TRUCK_MIN_M3} m³): small furniture and boxes.\n"
    ));

    s.push_str("\n# Truck\n");
    s.push_str(&spec.to_pretty_json());
    s.push('\n');

    s.push_str("\n# Output example\n");
    s.push_str(&format!("{:#}", example_output()));
    s.push('\n');
    s
}

/// Example output schema embedded at the end of the prompt.
pub fn example_output() -> Value {
    let items: Map<String, Value> = RECOMMENDED_CATEGORIES
        .iter()
        .map(|(key, hint)| ((*key).to_string(), json!([format!("A list of {hint}")])))
        .collect();

    json!({
        "capacityEstimation": {
            "totalVolume": "The calculated total volume of the truck in cubic meters",
            "maxItems": "The maximum number of items the truck can hold based on its dimensions",
            "utilizationRate": "A descriptive string about the truck's capacity utilization",
            "warnings": ["A list of warnings if any issues are identified, or an empty array if none"]
        },
        "recommendedItems": items
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> TruckSpec {
        TruckSpec::from_value(json!({
            "manufacturer": "Freightliner",
            "model": "Cascadia",
            "type": "Semi-Truck",
            "year": 2023,
            "startingRate": 150,
            "units": 30,
            "dimensions": "8.0 x 2.5 x 4.0",
            "color": "white"
        }))
        .unwrap()
    }

    #[test]
    fn prompt_embeds_spec_verbatim() {
        let prompt = build_prompt(&spec());
        assert!(prompt.contains(&spec().to_pretty_json()));
        assert!(prompt.contains("\"color\": \"white\""));
        assert!(prompt.contains("\"dimensions\": \"8.0 x 2.5 x 4.0\""));
    }

    #[test]
    fn prompt_lists_every_category() {
        let prompt = build_prompt(&spec());
        for (key, _) in RECOMMENDED_CATEGORIES {
            assert!(prompt.contains(&format!("`{key}`")), "missing {key}");
            assert!(prompt.contains(&format!("\"{key}\"")), "schema missing {key}");
        }
    }

    #[test]
    fn example_output_has_all_categories_in_order() {
        let example = example_output();
        let items = example["recommendedItems"].as_object().unwrap();
        let keys: Vec<&str> = items.keys().map(String::as_str).collect();
        let expected: Vec<&str> = RECOMMENDED_CATEGORIES.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, expected);
        assert!(example["capacityEstimation"]["warnings"].is_array());
    }
}
