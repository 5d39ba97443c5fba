//! Public navigation bar.

use dioxus::prelude::*;

use crate::routes::Route;

/// Top navigation with the active route highlighted.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav {
            class: "bg-white border-b border-gray-200 px-6 py-3",
            div {
                class: "max-w-4xl mx-auto flex items-center justify-between",

                Link {
                    to: Route::Home {},
                    class: "text-xl font-bold text-green-700",
                    "Abia Rise"
                }

                div {
                    class: "flex items-center gap-1",
                    NavLink { to: Route::Home {}, label: "Home" }
                    NavLink { to: Route::Register {}, label: "Register" }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct NavLinkProps {
    to: Route,
    label: &'static str,
}

#[component]
fn NavLink(props: NavLinkProps) -> Element {
    let route = use_route::<Route>();
    let is_active = route == props.to;

    rsx! {
        Link {
            to: props.to.clone(),
            class: if is_active {
                "px-3 py-2 rounded-md text-sm font-medium bg-green-100 text-green-800"
            } else {
                "px-3 py-2 rounded-md text-sm font-medium text-gray-600 hover:bg-gray-100 hover:text-gray-900"
            },
            "{props.label}"
        }
    }
}
