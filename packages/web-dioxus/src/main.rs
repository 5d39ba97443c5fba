//! Abia Rise - Dioxus Fullstack Web Application
//!
//! Fullstack SSR application for the Abia Rise membership registration
//! form. Submissions go to the external registration API through the
//! `registration-client` crate.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod app;
mod components;
mod data;
mod form;
mod pages;
mod routes;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Launch the Dioxus app
    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);
}
