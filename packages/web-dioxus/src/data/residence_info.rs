//! Residence reference data: the state-of-residence listing and the
//! fixed foreign-country choices.
//!
//! Deliberately disjoint from the citizenship State/LGA tables; the two
//! sections answer different questions and stay independent.

/// States offered in the state-of-residence selector.
pub const RESIDENCE_STATES: &[&str] = &[
    "Abia",
    "Adamawa",
    "Akwa Ibom",
    "Anambra",
    "Bauchi",
    "Bayelsa",
    "Benue",
    "Borno",
    "Cross River",
    "Delta",
    "Ebonyi",
    "Edo",
    "Ekiti",
    "Enugu",
    "FCT Abuja",
    "Gombe",
    "Imo",
    "Jigawa",
    "Kaduna",
    "Kano",
    "Katsina",
    "Kebbi",
    "Kogi",
    "Kwara",
    "Lagos",
    "Nasarawa",
    "Niger",
    "Ogun",
    "Ondo",
    "Osun",
    "Oyo",
    "Plateau",
    "Rivers",
    "Sokoto",
    "Taraba",
    "Yobe",
    "Zamfara",
];

/// Fixed choices for the foreign country-of-residence selector.
pub const FOREIGN_COUNTRIES: &[&str] = &["Ghana", "Cameroon", "USA", "UK", "Others"];
