//! Home page component

use dioxus::prelude::*;

use crate::components::Navbar;
use crate::routes::Route;

/// Landing page pointing members at the registration form.
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-green-50 to-white",

            Navbar {}

            main {
                class: "max-w-2xl mx-auto px-4 py-16 text-center",

                h1 {
                    class: "text-4xl font-bold text-gray-900 mb-3",
                    "Abia Rise"
                }
                p {
                    class: "text-lg text-gray-600 mb-8",
                    "Join the movement. Register as a member and receive your "
                    "membership ID card."
                }

                Link {
                    to: Route::Register {},
                    class: "inline-block px-6 py-3 bg-green-700 text-white rounded-lg hover:bg-green-800 transition-colors font-medium",
                    "Register Now"
                }

                p {
                    class: "mt-8 text-sm text-gray-500",
                    "Registration requires a valid voter's card. You will be "
                    "contacted by your Local Government / Ward Representative "
                    "once your membership is approved."
                }
            }
        }
    }
}
