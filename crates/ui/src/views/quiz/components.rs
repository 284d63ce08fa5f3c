use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use quiz_core::model::OptionState;

use crate::routes::Route;
use crate::vm::{AdvanceVm, OptionVm, QuestionVm, QuizIntent, QuizScreenVm, ResultsVm};

#[component]
pub(super) fn QuizScreen(
    screen: QuizScreenVm,
    set: u32,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let QuizScreenVm {
        set_name,
        category_name,
        progress_label,
        question,
        results,
    } = screen;

    rsx! {
        div { class: "quiz-bar",
            p { class: "quiz-bar__crumbs", "{set_name} / {category_name}" }
            if results.is_none() {
                p { class: "quiz-bar__progress", "{progress_label}" }
            }
        }
        div { class: "quiz-nav",
            Link { class: "back-link", to: Route::Categories { set }, "Back to categories" }
        }
        if let Some(results) = results {
            ResultsPanel { results, set_name, category_name, set, on_intent }
        } else if let Some(question) = question {
            QuestionCard { question, on_intent }
        }
    }
}

#[component]
fn QuestionCard(question: QuestionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let QuestionVm {
        prompt,
        options,
        feedback,
        advance,
    } = question;

    rsx! {
        if let Some(feedback) = feedback {
            div { class: "{feedback.class}", role: "status", "{feedback.text}" }
        }
        div { class: "quiz-card",
            h3 { class: "quiz-card__prompt", "{prompt}" }
            div { class: "quiz-options",
                for option in options {
                    OptionButton { key: "{option.index}", option, on_intent }
                }
            }
        }
        match advance {
            AdvanceVm::Hidden => rsx! {},
            AdvanceVm::Button(label) => rsx! {
                div { class: "quiz-advance",
                    button {
                        class: "btn btn-primary",
                        id: "quiz-next",
                        r#type: "button",
                        onclick: move |_| on_intent.call(QuizIntent::Advance),
                        "{label}"
                    }
                }
            },
            AdvanceVm::Countdown(hint) => rsx! {
                p { class: "quiz-advance__hint", "{hint}" }
            },
        }
    }
}

#[component]
fn OptionButton(option: OptionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let index = option.index;
    let mark = match option.state {
        OptionState::Correct => "\u{2713}",
        OptionState::Incorrect => "\u{2717}",
        OptionState::Default | OptionState::Disabled => "",
    };

    rsx! {
        button {
            class: "{option.class}",
            r#type: "button",
            disabled: option.disabled,
            onclick: move |_| on_intent.call(QuizIntent::Choose(index)),
            span { class: "quiz-option__letter", "{option.letter}." }
            span { class: "quiz-option__text", "{option.text}" }
            if !mark.is_empty() {
                span { class: "quiz-option__mark", "{mark}" }
            }
        }
    }
}

#[component]
fn ResultsPanel(
    results: ResultsVm,
    set_name: String,
    category_name: String,
    set: u32,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let navigator = use_navigator();

    rsx! {
        div { class: "results",
            h2 { class: "results__title", "Finished!" }
            p { class: "results__context",
                "You completed "
                strong { "{category_name}" }
                " in "
                strong { "{set_name}" }
                "."
            }
            div { class: "results__score {results.tier_class}", "{results.headline}" }
            p { class: "results__points", "{results.score_label}" }
            div { class: "results__actions",
                button {
                    class: "btn btn-primary",
                    id: "results-back",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = navigator.push(Route::Categories { set });
                    },
                    "Choose another category"
                }
                button {
                    class: "btn btn-secondary",
                    id: "results-retry",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Retry),
                    "Try again"
                }
            }
        }
    }
}
