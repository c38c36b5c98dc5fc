use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{ModeCardVm, map_mode_cards};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let cards = map_mode_cards(&ctx.dataset());

    rsx! {
        div { class: "page home-page",
            header { class: "home-header",
                span { class: "home-badge", "Certiport MOS" }
                h1 { class: "home-title",
                    span { "Excel " }
                    span { class: "home-title__accent", "MO-211" }
                }
                p { class: "home-subtitle", "Certification simulator. Choose your practice mode." }
            }
            div { class: "mode-grid",
                for card in cards {
                    ModeCard { card }
                }
            }
        }
    }
}

#[component]
fn ModeCard(card: ModeCardVm) -> Element {
    rsx! {
        Link { class: "{card.class}", to: Route::simulator(card.mode.as_str()),
            div { class: "mode-card__top",
                span { class: "mode-card__count", "{card.count_label}" }
            }
            h2 { class: "mode-card__title", "{card.title}" }
            p { class: "mode-card__description", "{card.description}" }
            div { class: "mode-card__tags",
                for tag in card.tags.iter() {
                    span { class: "mode-card__tag", "{tag}" }
                }
            }
            span { class: "mode-card__cta", "Start →" }
        }
    }
}
