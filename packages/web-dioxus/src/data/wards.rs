//! Nested State -> LGA -> Ward dataset and its lookup index.

use std::collections::HashMap;

use serde::Deserialize;

/// Bundled nested ward dataset, shipped with the app.
pub const NIGERIA_WARDS_JSON: &str = include_str!("../../data/nigeria_wards.json");

#[derive(Debug, Deserialize)]
pub struct RawState {
    pub state: String,
    pub lgas: Vec<RawLga>,
}

#[derive(Debug, Deserialize)]
pub struct RawLga {
    pub name: String,
    pub wards: Vec<RawWard>,
}

#[derive(Debug, Deserialize)]
pub struct RawWard {
    pub name: String,
}

/// Fast lookup built once at mount: state -> lga -> ordered ward names.
pub type WardIndex = HashMap<String, HashMap<String, Vec<String>>>;

/// Transform the raw nested dataset into the lookup index, trimming
/// whitespace from every name. Ward order within an LGA is preserved.
pub fn build_ward_index(raw: &[RawState]) -> WardIndex {
    let mut index = WardIndex::new();
    for state in raw {
        let lgas = index.entry(state.state.trim().to_string()).or_default();
        for lga in &state.lgas {
            let wards = lga
                .wards
                .iter()
                .map(|ward| ward.name.trim().to_string())
                .collect();
            lgas.insert(lga.name.trim().to_string(), wards);
        }
    }
    index
}

/// Parse and index the bundled dataset. The dataset is static and ships
/// with the app, so a parse failure is a build defect, not a runtime
/// condition.
pub fn load_ward_index() -> WardIndex {
    let raw: Vec<RawState> =
        serde_json::from_str(NIGERIA_WARDS_JSON).expect("bundled ward dataset is valid JSON");
    build_ward_index(&raw)
}

/// The wards under a state/LGA pair, or an empty slice when either is
/// missing from the index.
pub fn wards_of<'a>(index: &'a WardIndex, state: &str, lga: &str) -> &'a [String] {
    index
        .get(state)
        .and_then(|lgas| lgas.get(lga))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"[
        {
            "state": " Abia ",
            "lgas": [
                {
                    "name": "Umuahia North ",
                    "wards": [
                        { "name": "Ward 1" },
                        { "name": " Ward 2" },
                        { "name": "Ward 3 " }
                    ]
                },
                { "name": "Aba North", "wards": [{ "name": "Eziama" }] }
            ]
        }
    ]"#;

    #[test]
    fn index_trims_names_and_preserves_ward_order() {
        let raw: Vec<RawState> = serde_json::from_str(FIXTURE).expect("fixture parses");
        let index = build_ward_index(&raw);

        let wards = wards_of(&index, "Abia", "Umuahia North");
        assert_eq!(wards, ["Ward 1", "Ward 2", "Ward 3"]);
    }

    #[test]
    fn missing_state_or_lga_yields_no_wards() {
        let raw: Vec<RawState> = serde_json::from_str(FIXTURE).expect("fixture parses");
        let index = build_ward_index(&raw);

        assert!(wards_of(&index, "Abia", "Bende").is_empty());
        assert!(wards_of(&index, "Lagos", "Ikeja").is_empty());
    }

    #[test]
    fn bundled_dataset_loads_and_covers_the_flat_mapping() {
        let index = load_ward_index();

        // Every state/LGA offered by the citizenship selectors has wards.
        for (state, lgas) in crate::data::STATES_LGA {
            for lga in *lgas {
                assert!(
                    !wards_of(&index, state, lga).is_empty(),
                    "no wards for {state}/{lga}"
                );
            }
        }
    }
}
