use dioxus::prelude::*;
use tracing::Level;

mod config;
mod downloads;
mod files;
mod format_helpers;
mod roster;

use roster::ApplicantRoster;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("[logger] Failed to initialise tracing: {err}");
    }
    config::load_config();

    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    use_hook(|| tracing::info!(platform = client_platform(), "applicant roster started"));
    let config = config::roster_config().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        main { class: "app-shell",
            ApplicantRoster { config }
        }
    }
}
