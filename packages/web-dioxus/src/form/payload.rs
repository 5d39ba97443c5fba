//! Local validation and payload assembly for submission.
//!
//! Everything here runs before any network call: a draft that fails
//! validation never produces a payload, and the draft itself is never
//! modified so the user can correct and retry.

use registration_client::RegistrationPayload;
use thiserror::Error;

use super::draft::{RegistrationDraft, Residence, YesNo};

/// A locally rejected submission. Each variant is a distinct user-visible
/// message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a gender")]
    MissingGender,

    #[error("Please select a marital status")]
    MissingMaritalStatus,

    #[error("Please fill in your {0}")]
    MissingField(&'static str),

    #[error("Please upload a passport photograph")]
    MissingPassport,

    #[error("Please agree to the terms and conditions")]
    TermsNotAgreed,
}

/// Check the preconditions for submission. Gender and marital status get
/// their own rejections; the remaining required fields are also enforced
/// by the form's required markers and re-checked here structurally.
pub fn validate(draft: &RegistrationDraft) -> Result<(), ValidationError> {
    if draft.gender.is_none() {
        return Err(ValidationError::MissingGender);
    }
    if draft.marital_status.is_none() {
        return Err(ValidationError::MissingMaritalStatus);
    }

    let required = [
        ("first name", &draft.first_name),
        ("last name", &draft.last_name),
        ("email address", &draft.email),
        ("phone number", &draft.phone),
        ("national identity number", &draft.national_id),
        ("date of birth", &draft.dob),
    ];
    for (label, value) in required {
        if value.trim().is_empty() {
            return Err(ValidationError::MissingField(label));
        }
    }

    if draft.passport.is_none() {
        return Err(ValidationError::MissingPassport);
    }
    if !draft.agreed_to_terms {
        return Err(ValidationError::TermsNotAgreed);
    }

    Ok(())
}

/// Validate the draft and serialize it into the wire payload.
///
/// Conditional fields follow the service contract: State/LGA/Ward are
/// empty strings unless the member is a citizen, the voter's card number
/// rides along only when present, Country is the literal "Nigeria" for
/// residents, and ResidenceState is attached only for residents who chose
/// a state.
pub fn to_payload(draft: &RegistrationDraft) -> Result<RegistrationPayload, ValidationError> {
    validate(draft)?;

    let citizen = draft.is_citizen == Some(YesNo::Yes);
    let voter = draft.is_voters == Some(YesNo::Yes);

    let voters_card_no = if voter && !draft.voters_card_no.trim().is_empty() {
        Some(draft.voters_card_no.trim().to_string())
    } else {
        None
    };

    let country = match draft.residence {
        Some(Residence::Nigeria) => "Nigeria".to_string(),
        _ => draft.country.clone(),
    };

    let residence_state = match draft.residence {
        Some(Residence::Nigeria) if !draft.residence_state.is_empty() => {
            Some(draft.residence_state.clone())
        }
        _ => None,
    };

    let passport = draft
        .passport
        .clone()
        .ok_or(ValidationError::MissingPassport)?;

    Ok(RegistrationPayload {
        first_name: draft.first_name.clone(),
        middle_name: draft.middle_name.clone(),
        last_name: draft.last_name.clone(),
        dob: draft.dob.clone(),
        email: draft.email.clone(),
        phone_number: draft.phone.clone(),
        national_id: draft.national_id.clone(),
        gender: draft.gender.map(|g| g.as_str().to_string()).unwrap_or_default(),
        marital_status: draft
            .marital_status
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
        is_citizen: draft
            .is_citizen
            .map(|a| a.as_str().to_string())
            .unwrap_or_default(),
        state: if citizen { draft.state.clone() } else { String::new() },
        lga: if citizen { draft.lga.clone() } else { String::new() },
        ward: if citizen { draft.ward.clone() } else { String::new() },
        is_voters: draft
            .is_voters
            .map(|a| a.as_str().to_string())
            .unwrap_or_default(),
        voters_card_no,
        country,
        residence_state,
        passport,
    })
}
