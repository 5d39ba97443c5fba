//! Membership ID card, rendered after a successful registration.

use dioxus::prelude::*;

use registration_client::MemberRecord;

#[derive(Props, Clone, PartialEq)]
pub struct IdCardProps {
    pub member: MemberRecord,
}

/// Visual membership card for an issued member record. Purely
/// presentational; renders whatever the service returned.
#[component]
pub fn IdCard(props: IdCardProps) -> Element {
    let member = &props.member;
    let issued = member
        .created_at
        .as_deref()
        .and_then(format_issue_date)
        .unwrap_or_default();

    rsx! {
        div {
            class: "max-w-md mx-auto bg-white rounded-xl shadow-md overflow-hidden border border-gray-200",

            div {
                class: "bg-green-700 text-white px-6 py-4",
                h4 { class: "text-lg font-bold", "Abia Rise" }
                p { class: "text-green-100 text-sm", "Membership Card" }
            }

            div {
                class: "px-6 py-4 flex gap-4",

                if let Some(url) = &member.passport_url {
                    img {
                        src: "{url}",
                        alt: "Passport photograph",
                        class: "w-24 h-24 rounded-lg object-cover border border-gray-200"
                    }
                }

                div {
                    class: "flex-1 space-y-1",
                    p { class: "text-lg font-semibold text-gray-900", "{member.full_name()}" }
                    p { class: "text-sm text-gray-600", "Member ID: {member.id}" }
                    if !member.state.is_empty() {
                        p {
                            class: "text-sm text-gray-600",
                            "{member.state} \u{B7} {member.lga} \u{B7} {member.ward}"
                        }
                    }
                    if !issued.is_empty() {
                        p { class: "text-xs text-gray-400", "Member since {issued}" }
                    }
                }
            }

            div {
                class: "px-6 py-3 bg-gray-50 text-xs text-gray-500",
                "This is a pre-membership card. You will be contacted by your Local "
                "Government / Ward Representative once your registration is approved."
            }
        }
    }
}

fn format_issue_date(raw: &str) -> Option<String> {
    let parsed = chrono::DateTime::parse_from_rfc3339(raw).ok()?;
    Some(parsed.format("%B %-d, %Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_date_is_formatted_for_display() {
        assert_eq!(
            format_issue_date("2026-08-30T10:15:00Z").as_deref(),
            Some("August 30, 2026")
        );
        assert_eq!(format_issue_date("not a date"), None);
    }
}
