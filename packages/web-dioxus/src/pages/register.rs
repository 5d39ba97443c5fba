//! Membership registration page.
//!
//! Owns the registration draft, reveals sections according to the
//! disclosure rules, and hands the assembled payload to the registration
//! service through a server function. On success the issued member
//! record is rendered as an ID card.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use registration_client::{MemberRecord, PassportPhoto, RegistrationPayload, FALLBACK_MESSAGE};

use crate::components::{IdCard, LoadingDots, Navbar, ToastHost, ToastState};
use crate::data;
use crate::form::{
    can_submit, to_payload, visible_sections, DraftEvent, Gender, MaritalStatus,
    RegistrationDraft, Residence, Section, YesNo,
};

/// Outcome of a submission attempt: an issued member record, or the
/// message to show the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SubmissionResult {
    Accepted(MemberRecord),
    Rejected { message: String },
}

/// Registration form page
#[component]
pub fn Register() -> Element {
    let mut draft = use_signal(RegistrationDraft::default);
    let mut is_submitting = use_signal(|| false);
    let mut registered = use_signal(|| None::<MemberRecord>);
    let mut toasts = use_context_provider(ToastState::new);

    // Build the ward lookup index once at mount; the ward selector stays
    // disabled until it is ready.
    let ward_index = use_resource(|| async move { data::load_ward_index() });
    let wards_ready = use_memo(move || ward_index.value().read().is_some());

    // Ward options for the currently selected state/LGA pair.
    let ward_options = use_memo(move || {
        let d = draft.read();
        match ward_index.value().read().as_ref() {
            Some(index) => data::wards_of(index, &d.state, &d.lga).to_vec(),
            None => Vec::new(),
        }
    });

    let sections = use_memo(move || visible_sections(&draft.read(), wards_ready()));
    let shows = move |section: Section| sections.read().contains(&section);

    let handle_submit = move |_: FormEvent| {
        if is_submitting() || !can_submit(&draft.peek(), *wards_ready.peek()) {
            return;
        }

        // Validate and serialize locally; a rejected draft never reaches
        // the network and is left intact for correction.
        let payload = match to_payload(&draft.peek()) {
            Ok(payload) => payload,
            Err(err) => {
                toasts.validation_error(err.to_string());
                return;
            }
        };

        // Flip the busy flag before the task is spawned so a re-entrant
        // submit is rejected by the guard above.
        is_submitting.set(true);

        spawn(async move {
            match register_member(payload).await {
                Ok(SubmissionResult::Accepted(record)) => {
                    toasts.success(
                        "Registration successful! Kindly download your membership \
                         card below. Dont forget to reset your password",
                    );
                    registered.set(Some(record));
                }
                Ok(SubmissionResult::Rejected { message }) => {
                    toasts.error(message);
                }
                Err(_) => {
                    toasts.error(FALLBACK_MESSAGE);
                }
            }

            is_submitting.set(false);
        });
    };

    let attach_passport = move |e: Event<FormData>| {
        if let Some(files) = e.files() {
            spawn(async move {
                if let Some(name) = files.files().first().cloned() {
                    if let Some(bytes) = files.read_file(&name).await {
                        let content_type = mime_for(&name);
                        draft.write().apply(DraftEvent::PassportAttached(PassportPhoto {
                            file_name: name,
                            content_type,
                            bytes,
                        }));
                    }
                }
            });
        }
    };

    // Select values, read ahead of the rsx tree.
    let voters_value = draft.read().is_voters.map(|a| a.as_str()).unwrap_or_default();
    let citizen_value = draft.read().is_citizen.map(|a| a.as_str()).unwrap_or_default();
    let gender_value = draft.read().gender.map(|g| g.as_str()).unwrap_or_default();
    let marital_value = draft
        .read()
        .marital_status
        .map(|m| m.as_str())
        .unwrap_or_default();
    let residence_value = draft.read().residence.map(|r| r.as_str()).unwrap_or_default();

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-green-50 to-white",

            Navbar {}
            ToastHost {}

            main {
                class: "max-w-3xl mx-auto px-4 pt-8 pb-16",

                div {
                    class: "text-center mb-8",
                    h1 { class: "text-3xl font-bold text-gray-900 mb-1", "Abia Rise" }
                    h2 { class: "text-lg text-gray-500", "Membership Registration Form" }
                }

                div {
                    class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",

                    // First question: everything else hinges on it.
                    div {
                        class: "mb-6",
                        label {
                            class: "block text-sm font-bold text-gray-700 mb-2",
                            "Do you have a Voters Card?"
                        }
                        select {
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-green-500",
                            value: "{voters_value}",
                            onchange: move |e| {
                                draft.write().apply(DraftEvent::VoterAnswered(YesNo::from_value(&e.value())));
                            },
                            required: true,
                            option { value: "", "Select an option" }
                            option { value: "Yes", "Yes" }
                            option { value: "No", "No" }
                        }
                    }

                    if shows(Section::VoterAdvisory) {
                        div {
                            class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                            "Please visit the nearest INEC Registration Centre to obtain \
                             your PVC or call 09011111111"
                        }
                    }

                    if shows(Section::PersonalDetails) {
                        form {
                            onsubmit: handle_submit,

                            h3 { class: "font-bold text-gray-900 mb-3", "Personal Details" }
                            div {
                                class: "grid md:grid-cols-2 gap-4 mb-4",
                                div {
                                    label { class: "block text-sm font-medium text-gray-700 mb-2", "First Name" }
                                    input {
                                        class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-green-500",
                                        placeholder: "First Name",
                                        value: "{draft.read().first_name}",
                                        oninput: move |e| draft.write().apply(DraftEvent::FirstNameChanged(e.value())),
                                        required: true
                                    }
                                }
                                div {
                                    label { class: "block text-sm font-medium text-gray-700 mb-2", "Middle Name" }
                                    input {
                                        class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-green-500",
                                        placeholder: "Middle Name",
                                        value: "{draft.read().middle_name}",
                                        oninput: move |e| draft.write().apply(DraftEvent::MiddleNameChanged(e.value()))
                                    }
                                }
                                div {
                                    label { class: "block text-sm font-medium text-gray-700 mb-2", "Last Name" }
                                    input {
                                        class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-green-500",
                                        placeholder: "Last Name",
                                        value: "{draft.read().last_name}",
                                        oninput: move |e| draft.write().apply(DraftEvent::LastNameChanged(e.value())),
                                        required: true
                                    }
                                }
                                div {
                                    label { class: "block text-sm font-medium text-gray-700 mb-2", "Email Address" }
                                    input {
                                        r#type: "email",
                                        class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-green-500",
                                        placeholder: "Email address",
                                        value: "{draft.read().email}",
                                        oninput: move |e| draft.write().apply(DraftEvent::EmailChanged(e.value())),
                                        required: true
                                    }
                                }
                            }

                            if shows(Section::CitizenshipQuestion) {
                                h3 { class: "font-bold text-gray-900 mb-3", "Citizenship Details" }
                                div {
                                    class: "grid md:grid-cols-2 gap-4 mb-4",
                                    div {
                                        select {
                                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-green-500",
                                            value: "{citizen_value}",
                                            onchange: move |e| {
                                                draft.write().apply(DraftEvent::CitizenAnswered(YesNo::from_value(&e.value())));
                                            },
                                            required: true,
                                            option { value: "", "Do you reside in Nigeria?" }
                                            option { value: "Yes", "Yes" }
                                            option { value: "No", "No" }
                                        }
                                    }
                                }
                            }

                            if shows(Section::StateSelect) {
                                div {
                                    class: "grid md:grid-cols-2 gap-4 mb-4",
                                    div {
                                        label { class: "block text-sm font-medium text-gray-700 mb-2", "State" }
                                        select {
                                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-green-500",
                                            value: "{draft.read().state}",
                                            onchange: move |e| draft.write().apply(DraftEvent::StateSelected(e.value())),
                                            required: true,
                                            option { value: "", "State" }
                                            for name in data::state_names() {
                                                option { key: "{name}", value: "{name}", "{name}" }
                                            }
                                        }
                                    }
                                    div {
                                        label { class: "block text-sm font-medium text-gray-700 mb-2", "Local Government Area (LGA)" }
                                        select {
                                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-green-500",
                                            value: "{draft.read().lga}",
                                            onchange: move |e| draft.write().apply(DraftEvent::LgaSelected(e.value())),
                                            disabled: !shows(Section::LgaSelect),
                                            required: true,
                                            option { value: "", "Select LGA" }
                                            for name in data::lgas_of(&draft.read().state) {
                                                option { key: "{name}", value: "{name}", "{name}" }
                                            }
                                        }
                                    }
                                    div {
                                        label { class: "block text-sm font-medium text-gray-700 mb-2", "Select Ward" }
                                        select {
                                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-green-500",
                                            value: "{draft.read().ward}",
                                            onchange: move |e| draft.write().apply(DraftEvent::WardSelected(e.value())),
                                            disabled: !shows(Section::WardSelect),
                                            required: true,
                                            option {
                                                value: "",
                                                if wards_ready() { "Select Ward" } else { "Loading wards..." }
                                            }
                                            for name in ward_options() {
                                                option { key: "{name}", value: "{name}", "{name}" }
                                            }
                                        }
                                    }
                                }
                            }

                            if shows(Section::ContactIdentity) {
                                div {
                                    class: "grid md:grid-cols-2 gap-4 mb-4",
                                    div {
                                        label { class: "block text-sm font-medium text-gray-700 mb-2", "Phone Number" }
                                        input {
                                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-green-500",
                                            placeholder: "Phone number",
                                            value: "{draft.read().phone}",
                                            oninput: move |e| draft.write().apply(DraftEvent::PhoneChanged(e.value())),
                                            required: true
                                        }
                                    }
                                    div {
                                        label { class: "block text-sm font-medium text-gray-700 mb-2", "National Identity Number (NIN)" }
                                        input {
                                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-green-500",
                                            placeholder: "National Identity Number",
                                            value: "{draft.read().national_id}",
                                            oninput: move |e| draft.write().apply(DraftEvent::NationalIdChanged(e.value())),
                                            required: true
                                        }
                                    }
                                }
                            }

                            if shows(Section::Profile) {
                                div {
                                    class: "grid md:grid-cols-2 gap-4 mb-4",
                                    div {
                                        label { class: "block text-sm font-medium text-gray-700 mb-2", "Gender" }
                                        select {
                                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-green-500",
                                            value: "{gender_value}",
                                            onchange: move |e| {
                                                draft.write().apply(DraftEvent::GenderSelected(Gender::from_value(&e.value())));
                                            },
                                            required: true,
                                            option { value: "", "Gender" }
                                            for label in Gender::variants().iter().map(|g| g.as_str()) {
                                                option { key: "{label}", value: "{label}", "{label}" }
                                            }
                                        }
                                    }
                                    div {
                                        label { class: "block text-sm font-medium text-gray-700 mb-2", "Marital Status" }
                                        select {
                                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-green-500",
                                            value: "{marital_value}",
                                            onchange: move |e| {
                                                draft.write().apply(DraftEvent::MaritalStatusSelected(MaritalStatus::from_value(&e.value())));
                                            },
                                            required: true,
                                            option { value: "", "Marital Status" }
                                            for label in MaritalStatus::variants().iter().map(|m| m.as_str()) {
                                                option { key: "{label}", value: "{label}", "{label}" }
                                            }
                                        }
                                    }
                                    div {
                                        label { class: "block text-sm font-medium text-gray-700 mb-2", "Date of Birth" }
                                        input {
                                            r#type: "date",
                                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-green-500",
                                            value: "{draft.read().dob}",
                                            oninput: move |e| draft.write().apply(DraftEvent::DobChanged(e.value())),
                                            required: true
                                        }
                                    }
                                    div {
                                        label { class: "block text-sm font-bold text-gray-700 mb-2", "Upload Passport Photograph" }
                                        input {
                                            r#type: "file",
                                            accept: "image/*",
                                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-green-500",
                                            onchange: attach_passport,
                                            required: true
                                        }
                                    }
                                }
                            }

                            div {
                                class: "grid md:grid-cols-2 gap-4 mb-4",
                                if shows(Section::VotersCardNumber) {
                                    div {
                                        label { class: "block text-sm font-medium text-gray-700 mb-2", "Voter's Card Number" }
                                        input {
                                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-green-500",
                                            placeholder: "Enter Voter's Card No.",
                                            value: "{draft.read().voters_card_no}",
                                            oninput: move |e| draft.write().apply(DraftEvent::VotersCardNoChanged(e.value()))
                                        }
                                    }
                                }
                                if shows(Section::ResidencyQuestion) {
                                    div {
                                        label { class: "block text-sm font-medium text-gray-700 mb-2", "Country of Residence" }
                                        select {
                                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-green-500",
                                            value: "{residence_value}",
                                            onchange: move |e| {
                                                draft.write().apply(DraftEvent::ResidenceSelected(Residence::from_value(&e.value())));
                                            },
                                            required: true,
                                            option { value: "", "Select country of residence" }
                                            option { value: "Nigeria", "Nigeria" }
                                            option { value: "Other Country", "Other Country" }
                                        }
                                    }
                                }
                            }

                            if shows(Section::ResidenceStateSelect) {
                                div {
                                    class: "grid md:grid-cols-2 gap-4 mb-4",
                                    div {
                                        label { class: "block text-sm font-medium text-gray-700 mb-2", "State of Residence" }
                                        select {
                                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-green-500",
                                            value: "{draft.read().residence_state}",
                                            onchange: move |e| draft.write().apply(DraftEvent::ResidenceStateSelected(e.value())),
                                            required: true,
                                            option { value: "", "Select State" }
                                            for name in data::RESIDENCE_STATES {
                                                option { key: "{name}", value: "{name}", "{name}" }
                                            }
                                        }
                                    }
                                }
                            }

                            if shows(Section::ForeignCountrySelect) {
                                div {
                                    class: "grid md:grid-cols-2 gap-4 mb-4",
                                    div {
                                        label { class: "block text-sm font-medium text-gray-700 mb-2", "Country of Residence" }
                                        select {
                                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-green-500",
                                            value: "{draft.read().country}",
                                            onchange: move |e| draft.write().apply(DraftEvent::CountrySelected(e.value())),
                                            required: true,
                                            option { value: "", "Select your Country" }
                                            for name in data::FOREIGN_COUNTRIES {
                                                option { key: "{name}", value: "{name}", "{name}" }
                                            }
                                        }
                                    }
                                }
                            }

                            if shows(Section::Terms) {
                                div {
                                    class: "mb-4 flex items-center gap-2",
                                    input {
                                        r#type: "checkbox",
                                        id: "terms",
                                        checked: draft.read().agreed_to_terms,
                                        onchange: move |e| draft.write().apply(DraftEvent::TermsToggled(e.checked())),
                                        required: true
                                    }
                                    label {
                                        r#for: "terms",
                                        class: "text-sm text-gray-700",
                                        "I agree to the terms and conditions"
                                    }
                                }
                            }

                            button {
                                r#type: "submit",
                                class: "w-full py-3 bg-green-700 text-white rounded-lg hover:bg-green-800 transition-colors font-medium disabled:opacity-50 disabled:cursor-not-allowed",
                                disabled: is_submitting() || !can_submit(&draft.read(), wards_ready()),
                                if is_submitting() {
                                    "Submitting... "
                                    LoadingDots {}
                                } else {
                                    "Register"
                                }
                            }

                            p {
                                class: "mt-4 text-xs text-gray-500",
                                "Note: This is a pre-membership registration form. You will \
                                 be contacted by your Local Government / Ward Representative \
                                 once your membership registration is approved and ready for \
                                 pickup."
                            }
                        }
                    }
                }

                if let Some(member) = registered() {
                    div {
                        class: "mt-8",
                        IdCard { member }
                    }
                }
            }
        }
    }
}

/// Submit a registration to the external service. Runs on the server so
/// the API base URL and outbound call stay off the client.
#[server]
async fn register_member(payload: RegistrationPayload) -> Result<SubmissionResult, ServerFnError> {
    let client = registration_client::RegistrationClient::from_env();

    match client.register(payload).await {
        Ok(record) => Ok(SubmissionResult::Accepted(record)),
        Err(err) => {
            tracing::warn!(error = %err, "registration attempt failed");
            Ok(SubmissionResult::Rejected {
                message: err.user_message(),
            })
        }
    }
}

fn mime_for(file_name: &str) -> String {
    let ext = file_name
        .rsplit('.')
        .next()
        .map(|ext| ext.to_ascii_lowercase());

    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passport_mime_is_derived_from_the_file_name() {
        assert_eq!(mime_for("me.PNG"), "image/png");
        assert_eq!(mime_for("photo.jpeg"), "image/jpeg");
        assert_eq!(mime_for("unknown"), "application/octet-stream");
    }
}
