//! dash web - the admin dashboard shell
//!
//! Mounts the responsive navigation panel around the dashboard pages. Page
//! bodies are placeholders; the CRUD screens live elsewhere.

pub mod config;
pub mod menu;
pub mod pages;

use dioxus::prelude::*;
use pages::{AppLayout, Calendar, Customers, Dashboard, Help, Leads, Settings};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Dashboard {})]
    #[layout(AppLayout)]
    #[route("/dashboard")]
    Dashboard {},
    #[route("/leads")]
    Leads {},
    #[route("/customers")]
    Customers {},
    #[route("/calendar")]
    Calendar {},
    #[route("/settings")]
    Settings {},
    #[route("/help")]
    Help {},
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
