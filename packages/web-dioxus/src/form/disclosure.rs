//! Conditional disclosure: which form sections are visible for a draft.
//!
//! Pure function of the current answers, decoupled from rendering so the
//! branching can be tested without a UI runtime.

use std::collections::BTreeSet;

use super::draft::{RegistrationDraft, Residence, YesNo};

/// A renderable section of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Section {
    VoterQuestion,
    VoterAdvisory,
    PersonalDetails,
    CitizenshipQuestion,
    StateSelect,
    LgaSelect,
    WardSelect,
    ContactIdentity,
    Profile,
    VotersCardNumber,
    ResidencyQuestion,
    ResidenceStateSelect,
    ForeignCountrySelect,
    Terms,
    SubmitControl,
}

/// The sections visible for the current draft. `wards_ready` reports
/// whether the ward index has finished loading; the ward selector stays
/// hidden until it has.
pub fn visible_sections(draft: &RegistrationDraft, wards_ready: bool) -> BTreeSet<Section> {
    let mut sections = BTreeSet::from([Section::VoterQuestion]);

    match draft.is_voters {
        None => return sections,
        Some(YesNo::No) => {
            // Terminal branch: advise the user to obtain a PVC first.
            sections.insert(Section::VoterAdvisory);
            return sections;
        }
        Some(YesNo::Yes) => {}
    }

    sections.extend([
        Section::PersonalDetails,
        Section::CitizenshipQuestion,
        Section::ContactIdentity,
        Section::Profile,
        Section::VotersCardNumber,
        Section::ResidencyQuestion,
        Section::Terms,
        Section::SubmitControl,
    ]);

    if draft.is_citizen == Some(YesNo::Yes) {
        sections.insert(Section::StateSelect);
        if !draft.state.is_empty() {
            sections.insert(Section::LgaSelect);
            if !draft.lga.is_empty() && wards_ready {
                sections.insert(Section::WardSelect);
            }
        }
    }

    match draft.residence {
        Some(Residence::Nigeria) => {
            sections.insert(Section::ResidenceStateSelect);
        }
        Some(Residence::OtherCountry) => {
            sections.insert(Section::ForeignCountrySelect);
        }
        None => {}
    }

    sections
}

/// Whether the submit control is reachable at all for this draft.
pub fn can_submit(draft: &RegistrationDraft, wards_ready: bool) -> bool {
    visible_sections(draft, wards_ready).contains(&Section::SubmitControl)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::draft::DraftEvent;

    #[test]
    fn initially_only_the_voter_question_is_visible() {
        let draft = RegistrationDraft::default();
        let sections = visible_sections(&draft, true);
        assert_eq!(sections, BTreeSet::from([Section::VoterQuestion]));
        assert!(!can_submit(&draft, true));
    }

    #[test]
    fn no_voter_card_is_a_terminal_branch() {
        let mut draft = RegistrationDraft::default();
        draft.apply(DraftEvent::VoterAnswered(Some(YesNo::No)));

        let sections = visible_sections(&draft, true);
        assert_eq!(
            sections,
            BTreeSet::from([Section::VoterQuestion, Section::VoterAdvisory])
        );
        assert!(!can_submit(&draft, true));
    }

    #[test]
    fn voter_card_reveals_the_full_form() {
        let mut draft = RegistrationDraft::default();
        draft.apply(DraftEvent::VoterAnswered(Some(YesNo::Yes)));

        let sections = visible_sections(&draft, true);
        for section in [
            Section::PersonalDetails,
            Section::CitizenshipQuestion,
            Section::ContactIdentity,
            Section::Profile,
            Section::VotersCardNumber,
            Section::ResidencyQuestion,
            Section::Terms,
            Section::SubmitControl,
        ] {
            assert!(sections.contains(&section), "{section:?} should be visible");
        }
        assert!(!sections.contains(&Section::StateSelect));
    }

    #[test]
    fn address_selectors_are_gated_on_their_parents() {
        let mut draft = RegistrationDraft::default();
        draft.apply(DraftEvent::VoterAnswered(Some(YesNo::Yes)));
        draft.apply(DraftEvent::CitizenAnswered(Some(YesNo::Yes)));

        let sections = visible_sections(&draft, true);
        assert!(sections.contains(&Section::StateSelect));
        assert!(!sections.contains(&Section::LgaSelect));

        draft.apply(DraftEvent::StateSelected("Abia".to_string()));
        let sections = visible_sections(&draft, true);
        assert!(sections.contains(&Section::LgaSelect));
        assert!(!sections.contains(&Section::WardSelect));

        draft.apply(DraftEvent::LgaSelected("Umuahia North".to_string()));
        assert!(visible_sections(&draft, true).contains(&Section::WardSelect));
    }

    #[test]
    fn ward_selector_waits_for_the_index() {
        let mut draft = RegistrationDraft::default();
        draft.apply(DraftEvent::VoterAnswered(Some(YesNo::Yes)));
        draft.apply(DraftEvent::CitizenAnswered(Some(YesNo::Yes)));
        draft.apply(DraftEvent::StateSelected("Abia".to_string()));
        draft.apply(DraftEvent::LgaSelected("Umuahia North".to_string()));

        assert!(!visible_sections(&draft, false).contains(&Section::WardSelect));
        assert!(visible_sections(&draft, true).contains(&Section::WardSelect));
    }

    #[test]
    fn residence_answer_picks_exactly_one_selector() {
        let mut draft = RegistrationDraft::default();
        draft.apply(DraftEvent::VoterAnswered(Some(YesNo::Yes)));

        draft.apply(DraftEvent::ResidenceSelected(Some(Residence::Nigeria)));
        let sections = visible_sections(&draft, true);
        assert!(sections.contains(&Section::ResidenceStateSelect));
        assert!(!sections.contains(&Section::ForeignCountrySelect));

        draft.apply(DraftEvent::ResidenceSelected(Some(Residence::OtherCountry)));
        let sections = visible_sections(&draft, true);
        assert!(!sections.contains(&Section::ResidenceStateSelect));
        assert!(sections.contains(&Section::ForeignCountrySelect));
    }
}
