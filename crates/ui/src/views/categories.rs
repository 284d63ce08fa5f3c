use dioxus::prelude::*;
use dioxus_router::Link;

use quiz_core::model::SetId;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{CategoryCardVm, map_category_cards, quiz_size_label};

#[derive(Clone, Debug, PartialEq)]
struct CategoriesData {
    set_name: String,
    cards: Vec<CategoryCardVm>,
}

#[component]
pub fn CategoriesView(set: u32) -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let subtitle = quiz_size_label(ctx.settings());
    let set_id = SetId::new(set);

    let mut resource = use_resource(move || {
        let catalog = catalog.clone();
        async move {
            let record = catalog.get_set(set_id).await?;
            let categories = catalog.list_categories(set_id).await?;
            Ok::<_, ViewError>(CategoriesData {
                set_name: record.name,
                cards: map_category_cards(&categories),
            })
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            div { class: "page__header",
                h2 { class: "page__title", "Choose a category" }
                Link { class: "back-link", to: Route::Sets {}, "Back to sets" }
            }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    p { class: "page__context", "{data.set_name}" }
                    p { class: "page__subtitle", "{subtitle}" }
                    if data.cards.is_empty() {
                        p { class: "empty", "This set has no categories." }
                    } else {
                        div { class: "card-grid",
                            for card in data.cards {
                                CategoryCard { card }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    if err == ViewError::Unknown {
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| resource.restart(),
                            "Retry"
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn CategoryCard(card: CategoryCardVm) -> Element {
    let class = if card.is_empty {
        "pick-card pick-card--empty"
    } else {
        "pick-card"
    };
    rsx! {
        Link { class, to: card.route,
            h3 { class: "pick-card__title", "{card.name}" }
            p { class: "pick-card__detail", "{card.detail}" }
        }
    }
}
