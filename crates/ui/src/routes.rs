use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{CategoriesView, QuizView, SetsView};

/// Selection state lives in the URL: no set, a set, or a set plus category.
#[derive(Clone, Debug, Routable, PartialEq, Eq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", SetsView)] Sets {},
        #[route("/sets/:set", CategoriesView)] Categories { set: u32 },
        #[route("/sets/:set/categories/:category", QuizView)] Quiz { set: u32, category: u32 },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "topbar",
                Link { class: "topbar__brand", to: Route::Sets {}, "Quiz" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
