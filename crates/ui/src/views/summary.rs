use dioxus::prelude::*;

use crate::vm::SummaryVm;

#[component]
pub fn SummaryScreen(
    summary: SummaryVm,
    on_home: EventHandler<()>,
    on_restart: EventHandler<()>,
) -> Element {
    let mode_class = summary.mode_class();
    let tiles = summary.tiles();

    rsx! {
        div { class: "page summary-page",
            div { class: "summary-card",
                h1 { class: "summary-title", "Session complete" }
                p { class: "summary-mode",
                    "Mode: "
                    span { class: "summary-mode__label {mode_class}", "{summary.mode_label}" }
                }
                div { class: "summary-tiles",
                    for tile in tiles {
                        div { class: "summary-tile",
                            div { class: "{tile.class}", "{tile.value}" }
                            div { class: "summary-tile__label", "{tile.label}" }
                        }
                    }
                }
                div { class: "summary-actions",
                    button {
                        class: "btn btn-secondary",
                        id: "summary-home",
                        r#type: "button",
                        onclick: move |_| on_home.call(()),
                        "← Home"
                    }
                    button {
                        class: "btn btn-primary {mode_class}",
                        id: "summary-restart",
                        r#type: "button",
                        onclick: move |_| on_restart.call(()),
                        "Restart session"
                    }
                }
            }
        }
    }
}
