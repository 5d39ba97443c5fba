//! Flat State -> LGA mapping for the citizenship selectors.

/// States and their local government areas, in display order.
pub const STATES_LGA: &[(&str, &[&str])] = &[
    (
        "Abia",
        &[
            "Umuahia North",
            "Umuahia South",
            "Aba North",
            "Aba South",
            "Bende",
            "Isiala Ngwa North",
        ],
    ),
    ("Anambra", &["Awka North", "Onitsha North"]),
    ("Lagos", &["Ikeja", "Surulere"]),
    ("Rivers", &["Port Harcourt", "Obio/Akpor"]),
];

/// The state names, in display order.
pub fn state_names() -> impl Iterator<Item = &'static str> {
    STATES_LGA.iter().map(|(state, _)| *state)
}

/// The LGAs under a state, or an empty slice for an unknown state.
pub fn lgas_of(state: &str) -> &'static [&'static str] {
    STATES_LGA
        .iter()
        .find(|(name, _)| *name == state)
        .map(|(_, lgas)| *lgas)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lga_options_are_exactly_the_children_of_the_state() {
        let lgas = lgas_of("Abia");
        assert!(lgas.contains(&"Umuahia North"));
        assert_eq!(lgas.len(), 6);
        assert!(!lgas.contains(&"Ikeja"));
    }

    #[test]
    fn unknown_state_has_no_lgas() {
        assert!(lgas_of("Atlantis").is_empty());
    }
}
