use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{SetCardVm, map_set_cards};

#[component]
pub fn SetsView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();

    let mut resource = use_resource(move || {
        let catalog = catalog.clone();
        async move {
            let sets = catalog.list_sets().await.map_err(ViewError::from)?;
            Ok::<_, ViewError>(map_set_cards(&sets))
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            h2 { class: "page__title", "Choose a question set" }
            p { class: "page__subtitle", "Each set groups several categories." }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(cards) => rsx! {
                    if cards.is_empty() {
                        p { class: "empty", "The question bank is empty." }
                    } else {
                        div { class: "card-grid",
                            for card in cards {
                                SetCard { card }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| resource.restart(),
                        "Retry"
                    }
                },
            }
        }
    }
}

#[component]
fn SetCard(card: SetCardVm) -> Element {
    rsx! {
        Link { class: "pick-card", to: card.route,
            h3 { class: "pick-card__title", "{card.name}" }
            p { class: "pick-card__detail", "{card.detail}" }
        }
    }
}
