//! The in-progress registration draft and its reducer.
//!
//! One explicit record holds every field of the form; all mutation goes
//! through [`RegistrationDraft::apply`] so the state -> lga -> ward reset
//! invariant lives in exactly one place.

use registration_client::PassportPhoto;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn as_str(&self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "Yes" => Some(YesNo::Yes),
            "No" => Some(YesNo::No),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::variants().iter().copied().find(|g| g.as_str() == value)
    }

    pub fn variants() -> &'static [Gender] {
        &[Gender::Male, Gender::Female]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widow,
    Widower,
}

impl MaritalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaritalStatus::Single => "Single",
            MaritalStatus::Married => "Married",
            MaritalStatus::Divorced => "Divorced",
            MaritalStatus::Widow => "Widow",
            MaritalStatus::Widower => "Widower",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::variants().iter().copied().find(|m| m.as_str() == value)
    }

    pub fn variants() -> &'static [MaritalStatus] {
        &[
            MaritalStatus::Single,
            MaritalStatus::Married,
            MaritalStatus::Divorced,
            MaritalStatus::Widow,
            MaritalStatus::Widower,
        ]
    }
}

/// Answer to "Country of Residence".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Residence {
    Nigeria,
    OtherCountry,
}

impl Residence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Residence::Nigeria => "Nigeria",
            Residence::OtherCountry => "Other Country",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "Nigeria" => Some(Residence::Nigeria),
            "Other Country" => Some(Residence::OtherCountry),
            _ => None,
        }
    }
}

/// Everything the form has collected so far. Created empty at mount,
/// mutated through [`apply`](Self::apply), consumed once on submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationDraft {
    // Personal details
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub dob: String,
    pub email: String,
    pub phone: String,
    pub national_id: String,
    pub gender: Option<Gender>,
    pub marital_status: Option<MaritalStatus>,

    // Citizenship hierarchy
    pub is_citizen: Option<YesNo>,
    pub state: String,
    pub lga: String,
    pub ward: String,

    // Voting
    pub is_voters: Option<YesNo>,
    pub voters_card_no: String,

    // Residency. Citizenship state and residence state are independent
    // fields; the selectors never overwrite each other.
    pub residence: Option<Residence>,
    pub residence_state: String,
    pub country: String,

    // Attachment and consent
    pub passport: Option<PassportPhoto>,
    pub agreed_to_terms: bool,
}

/// A single user interaction with the form.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftEvent {
    FirstNameChanged(String),
    MiddleNameChanged(String),
    LastNameChanged(String),
    DobChanged(String),
    EmailChanged(String),
    PhoneChanged(String),
    NationalIdChanged(String),
    GenderSelected(Option<Gender>),
    MaritalStatusSelected(Option<MaritalStatus>),
    VoterAnswered(Option<YesNo>),
    VotersCardNoChanged(String),
    CitizenAnswered(Option<YesNo>),
    StateSelected(String),
    LgaSelected(String),
    WardSelected(String),
    ResidenceSelected(Option<Residence>),
    ResidenceStateSelected(String),
    CountrySelected(String),
    PassportAttached(PassportPhoto),
    TermsToggled(bool),
}

impl RegistrationDraft {
    /// Apply one interaction. Answering the citizenship question resets the
    /// whole address hierarchy; selecting a state or LGA clears everything
    /// below it.
    pub fn apply(&mut self, event: DraftEvent) {
        match event {
            DraftEvent::FirstNameChanged(value) => self.first_name = value,
            DraftEvent::MiddleNameChanged(value) => self.middle_name = value,
            DraftEvent::LastNameChanged(value) => self.last_name = value,
            DraftEvent::DobChanged(value) => self.dob = value,
            DraftEvent::EmailChanged(value) => self.email = value,
            DraftEvent::PhoneChanged(value) => self.phone = value,
            DraftEvent::NationalIdChanged(value) => self.national_id = value,
            DraftEvent::GenderSelected(value) => self.gender = value,
            DraftEvent::MaritalStatusSelected(value) => self.marital_status = value,
            DraftEvent::VoterAnswered(value) => self.is_voters = value,
            DraftEvent::VotersCardNoChanged(value) => self.voters_card_no = value,
            DraftEvent::CitizenAnswered(value) => {
                self.is_citizen = value;
                self.state.clear();
                self.lga.clear();
                self.ward.clear();
                self.country.clear();
            }
            DraftEvent::StateSelected(value) => {
                self.state = value;
                self.lga.clear();
                self.ward.clear();
            }
            DraftEvent::LgaSelected(value) => {
                self.lga = value;
                self.ward.clear();
            }
            DraftEvent::WardSelected(value) => self.ward = value,
            DraftEvent::ResidenceSelected(value) => self.residence = value,
            DraftEvent::ResidenceStateSelected(value) => self.residence_state = value,
            DraftEvent::CountrySelected(value) => self.country = value,
            DraftEvent::PassportAttached(photo) => self.passport = Some(photo),
            DraftEvent::TermsToggled(agreed) => self.agreed_to_terms = agreed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_a_state_clears_lga_and_ward() {
        let mut draft = RegistrationDraft::default();
        draft.apply(DraftEvent::CitizenAnswered(Some(YesNo::Yes)));
        draft.apply(DraftEvent::StateSelected("Abia".to_string()));
        draft.apply(DraftEvent::LgaSelected("Umuahia North".to_string()));
        draft.apply(DraftEvent::WardSelected("Ibeku East I".to_string()));

        draft.apply(DraftEvent::StateSelected("Lagos".to_string()));
        assert_eq!(draft.state, "Lagos");
        assert!(draft.lga.is_empty());
        assert!(draft.ward.is_empty());
    }

    #[test]
    fn selecting_an_lga_clears_the_ward() {
        let mut draft = RegistrationDraft::default();
        draft.apply(DraftEvent::StateSelected("Abia".to_string()));
        draft.apply(DraftEvent::LgaSelected("Aba North".to_string()));
        draft.apply(DraftEvent::WardSelected("Eziama".to_string()));

        draft.apply(DraftEvent::LgaSelected("Aba South".to_string()));
        assert!(draft.ward.is_empty());
    }

    #[test]
    fn answering_citizenship_resets_the_address_hierarchy() {
        let mut draft = RegistrationDraft::default();
        draft.apply(DraftEvent::CitizenAnswered(Some(YesNo::Yes)));
        draft.apply(DraftEvent::StateSelected("Abia".to_string()));
        draft.apply(DraftEvent::LgaSelected("Bende".to_string()));
        draft.apply(DraftEvent::WardSelected("Igbere A".to_string()));
        draft.apply(DraftEvent::CountrySelected("Ghana".to_string()));

        draft.apply(DraftEvent::CitizenAnswered(Some(YesNo::No)));
        assert!(draft.state.is_empty());
        assert!(draft.lga.is_empty());
        assert!(draft.ward.is_empty());
        assert!(draft.country.is_empty());
    }

    #[test]
    fn unanswered_selects_render_as_empty_values() {
        let draft = RegistrationDraft::default();
        assert_eq!(draft.is_voters.map(|a| a.as_str()).unwrap_or_default(), "");
        assert_eq!(draft.gender.map(|g| g.as_str()).unwrap_or_default(), "");
        assert_eq!(
            draft.marital_status.map(|m| m.as_str()).unwrap_or_default(),
            ""
        );
        assert_eq!(draft.residence.map(|r| r.as_str()).unwrap_or_default(), "");
    }

    #[test]
    fn answered_selects_render_their_labels() {
        let mut draft = RegistrationDraft::default();
        draft.apply(DraftEvent::VoterAnswered(Some(YesNo::Yes)));
        draft.apply(DraftEvent::GenderSelected(Some(Gender::Female)));
        draft.apply(DraftEvent::MaritalStatusSelected(Some(MaritalStatus::Married)));
        draft.apply(DraftEvent::ResidenceSelected(Some(Residence::OtherCountry)));

        assert_eq!(draft.is_voters.map(|a| a.as_str()).unwrap_or_default(), "Yes");
        assert_eq!(draft.gender.map(|g| g.as_str()).unwrap_or_default(), "Female");
        assert_eq!(
            draft.marital_status.map(|m| m.as_str()).unwrap_or_default(),
            "Married"
        );
        assert_eq!(
            draft.residence.map(|r| r.as_str()).unwrap_or_default(),
            "Other Country"
        );
    }

    #[test]
    fn residence_state_is_independent_of_citizenship_state() {
        let mut draft = RegistrationDraft::default();
        draft.apply(DraftEvent::StateSelected("Abia".to_string()));
        draft.apply(DraftEvent::ResidenceStateSelected("Lagos".to_string()));

        assert_eq!(draft.state, "Abia");
        assert_eq!(draft.residence_state, "Lagos");
    }
}
