//! Wire types for the registration API.
//!
//! Field names mirror the multipart contract the registration service
//! expects (PascalCase form fields, camelCase JSON responses).

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// A passport photograph attached to a registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportPhoto {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// The assembled registration record, ready to be sent as multipart
/// form data. Conditional fields carry the values the service expects:
/// State/LGA/Ward are empty strings for non-citizens, VotersCardNo and
/// ResidenceState are omitted entirely when not applicable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationPayload {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub dob: String,
    pub email: String,
    pub phone_number: String,
    pub national_id: String,
    pub gender: String,
    pub marital_status: String,
    pub is_citizen: String,
    pub state: String,
    pub lga: String,
    pub ward: String,
    pub is_voters: String,
    pub voters_card_no: Option<String>,
    pub country: String,
    pub residence_state: Option<String>,
    pub passport: PassportPhoto,
}

impl RegistrationPayload {
    /// The text fields of the multipart body, in wire order. The passport
    /// attachment is appended separately by the client.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("FirstName", self.first_name.clone()),
            ("MiddleName", self.middle_name.clone()),
            ("LastName", self.last_name.clone()),
            ("DOB", self.dob.clone()),
            ("Email", self.email.clone()),
            ("PhoneNumber", self.phone_number.clone()),
            ("NationalId", self.national_id.clone()),
            ("Gender", self.gender.clone()),
            ("MaritalStatus", self.marital_status.clone()),
            ("IsCitizen", self.is_citizen.clone()),
            ("State", self.state.clone()),
            ("LGA", self.lga.clone()),
            ("Ward", self.ward.clone()),
            ("IsVoters", self.is_voters.clone()),
        ];

        if let Some(card_no) = &self.voters_card_no {
            fields.push(("VotersCardNo", card_no.clone()));
        }

        fields.push(("Country", self.country.clone()));

        if let Some(residence_state) = &self.residence_state {
            fields.push(("ResidenceState", residence_state.clone()));
        }

        fields
    }
}

/// An issued member record, as returned by the registration service.
/// Tolerant of missing fields so the ID card can render whatever the
/// server actually sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct MemberRecord {
    pub id: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub state: String,
    pub lga: String,
    pub ward: String,
    pub passport_url: Option<String>,
    pub created_at: Option<String>,
}

impl MemberRecord {
    pub fn full_name(&self) -> String {
        [&self.first_name, &self.middle_name, &self.last_name]
            .iter()
            .filter(|part| !part.is_empty())
            .map(|part| part.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Response envelope of the registration endpoint.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ApiResponse {
    pub message: Option<String>,
    pub data: Option<MemberRecord>,
}

impl ApiResponse {
    /// Map a response body plus HTTP status to the client result: 2xx with
    /// a record succeeds, anything else surfaces the server's message.
    pub fn into_result(self, status: u16) -> Result<MemberRecord, ClientError> {
        if (200..300).contains(&status) {
            self.data.ok_or(ClientError::NoData)
        } else {
            Err(ClientError::Api {
                status,
                message: self.message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> RegistrationPayload {
        RegistrationPayload {
            first_name: "Ada".to_string(),
            middle_name: String::new(),
            last_name: "Obi".to_string(),
            dob: "1990-04-12".to_string(),
            email: "ada@example.com".to_string(),
            phone_number: "08012345678".to_string(),
            national_id: "12345678901".to_string(),
            gender: "Female".to_string(),
            marital_status: "Single".to_string(),
            is_citizen: "Yes".to_string(),
            state: "Abia".to_string(),
            lga: "Umuahia North".to_string(),
            ward: "Ward 3".to_string(),
            is_voters: "Yes".to_string(),
            voters_card_no: None,
            country: "Nigeria".to_string(),
            residence_state: Some("Abia".to_string()),
            passport: PassportPhoto {
                file_name: "passport.png".to_string(),
                content_type: "image/png".to_string(),
                bytes: vec![0x89, 0x50, 0x4e, 0x47],
            },
        }
    }

    #[test]
    fn fields_follow_wire_order_and_names() {
        let fields = payload().fields();
        let names: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                "FirstName",
                "MiddleName",
                "LastName",
                "DOB",
                "Email",
                "PhoneNumber",
                "NationalId",
                "Gender",
                "MaritalStatus",
                "IsCitizen",
                "State",
                "LGA",
                "Ward",
                "IsVoters",
                "Country",
                "ResidenceState",
            ]
        );
    }

    #[test]
    fn voters_card_no_is_sent_only_when_present() {
        let mut p = payload();
        assert!(!p.fields().iter().any(|(name, _)| *name == "VotersCardNo"));

        p.voters_card_no = Some("PVC-0001".to_string());
        let fields = p.fields();
        assert!(fields
            .iter()
            .any(|(name, value)| *name == "VotersCardNo" && value == "PVC-0001"));
    }

    #[test]
    fn residence_state_is_omitted_when_absent() {
        let mut p = payload();
        p.residence_state = None;
        assert!(!p.fields().iter().any(|(name, _)| *name == "ResidenceState"));
    }

    #[test]
    fn success_response_yields_member_record() {
        let body: ApiResponse = serde_json::from_str(
            r#"{"data": {"id": "M-001", "firstName": "Ada", "lastName": "Obi"}}"#,
        )
        .expect("valid response");

        let record = body.into_result(201).expect("success");
        assert_eq!(record.id, "M-001");
        assert_eq!(record.full_name(), "Ada Obi");
    }

    #[test]
    fn rejected_response_carries_server_message() {
        let body: ApiResponse =
            serde_json::from_str(r#"{"message": "Email already registered"}"#).expect("valid");

        let err = body.into_result(400).expect_err("rejected");
        assert_eq!(err.user_message(), "Email already registered");
    }

    #[test]
    fn full_name_skips_empty_parts() {
        let mut record = MemberRecord::default();
        record.last_name = "Obi".to_string();
        assert_eq!(record.full_name(), "Obi");

        record.first_name = "Ada".to_string();
        record.middle_name = "Ngozi".to_string();
        assert_eq!(record.full_name(), "Ada Ngozi Obi");
    }

    #[test]
    fn success_without_record_is_an_error() {
        let body = ApiResponse::default();
        assert!(matches!(body.into_result(200), Err(ClientError::NoData)));
    }
}
