use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{HomeView, SimulatorView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/simulator?:mode", SimulatorView)] Simulator { mode: String },
}

impl Route {
    /// Simulator entry for a mode selector value.
    #[must_use]
    pub fn simulator(mode: &str) -> Self {
        Route::Simulator {
            mode: mode.to_string(),
        }
    }
}

#[component]
fn Layout() -> Element {
    rsx! {
        main { class: "content",
            Outlet::<Route> {}
        }
    }
}
