use std::cell::Cell;
use std::rc::Rc;

use dioxus::core::Task;
use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use quiz_core::model::{CategoryId, SetId, Transition};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{QuizIntent, QuizVm, option_index_for_key};

use super::components::QuizScreen;

#[cfg(test)]
use std::cell::RefCell;

/// The one outstanding timed advance, if any.
#[derive(Clone, Default)]
struct PendingAdvance(Rc<Cell<Option<Task>>>);

impl PendingAdvance {
    fn replace(&self, task: Task) {
        if let Some(previous) = self.0.replace(Some(task)) {
            previous.cancel();
        }
    }

    fn cancel(&self) {
        if let Some(task) = self.0.take() {
            task.cancel();
        }
    }

    fn clear(&self) {
        self.0.set(None);
    }
}

#[component]
pub fn QuizView(set: u32, category: u32) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let quiz_loop = ctx.quiz_loop();
    let policy = ctx.settings().advance();
    let set_id = SetId::new(set);
    let category_id = CategoryId::new(category);

    let error = use_signal(|| None::<ViewError>);
    let vm = use_signal(|| None::<QuizVm>);
    let pending = use_hook(PendingAdvance::default);

    {
        let pending = pending.clone();
        use_drop(move || pending.cancel());
    }

    let quiz_loop_for_resource = quiz_loop.clone();
    let mut resource = use_resource(move || {
        let quiz_loop = quiz_loop_for_resource.clone();
        let mut vm = vm;
        async move {
            let run = quiz_loop.start_session(set_id, category_id).await?;
            vm.set(Some(QuizVm::new(run)));
            Ok::<_, ViewError>(())
        }
    });
    let state = view_state_from_resource(&resource);

    let dispatch_intent = {
        let quiz_loop = quiz_loop.clone();
        let pending = pending.clone();
        use_callback(move |intent: QuizIntent| {
            let mut vm = vm;
            let mut error = error;

            match intent {
                QuizIntent::Choose(index) => {
                    let scheduled = {
                        let mut guard = vm.write();
                        let Some(state) = guard.as_mut() else {
                            return;
                        };
                        match state.choose(&quiz_loop, index) {
                            Transition::Answered(_) => state.pending_advance(&quiz_loop),
                            _ => None,
                        }
                    };

                    if let Some(scheduled) = scheduled {
                        let quiz_loop = quiz_loop.clone();
                        let pending_for_task = pending.clone();
                        let task = spawn(async move {
                            let mut vm = vm;
                            tokio::time::sleep(scheduled.delay).await;
                            pending_for_task.clear();
                            if let Some(state) = vm.write().as_mut() {
                                state.fire_advance(&quiz_loop, scheduled);
                            }
                        });
                        pending.replace(task);
                    }
                }
                QuizIntent::Advance => {
                    pending.cancel();
                    if let Some(state) = vm.write().as_mut() {
                        state.advance(&quiz_loop);
                    }
                }
                QuizIntent::Retry => {
                    pending.cancel();
                    let Some(run) = vm.read().as_ref().map(|state| state.run().clone()) else {
                        return;
                    };
                    let quiz_loop = quiz_loop.clone();
                    spawn(async move {
                        let mut vm = vm;
                        let mut error = error;
                        match quiz_loop.restart(&run).await {
                            Ok(next) => {
                                vm.set(Some(QuizVm::new(next)));
                                error.set(None);
                            }
                            Err(err) => error.set(Some(err.into())),
                        }
                    });
                }
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, vm, pending.clone());
            }
        }
    }

    let on_key = use_callback(move |evt: KeyboardEvent| match evt.data.key() {
        Key::Escape => {
            evt.prevent_default();
            let _ = navigator.push(Route::Categories { set });
        }
        Key::Enter => {
            evt.prevent_default();
            dispatch_intent.call(QuizIntent::Advance);
        }
        Key::Character(value) if value == " " => {
            evt.prevent_default();
            dispatch_intent.call(QuizIntent::Advance);
        }
        Key::Character(value) => {
            if let Some(index) = option_index_for_key(&value) {
                evt.prevent_default();
                dispatch_intent.call(QuizIntent::Choose(index));
            }
        }
        _ => {}
    });

    let screen = vm.read().as_ref().map(|state| state.screen(policy));
    let current_error = *error.read();

    rsx! {
        div { class: "page quiz-page", id: "quiz-root", tabindex: "0", onkeydown: on_key,
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    div { class: "quiz-nav",
                        Link { class: "back-link", to: Route::Sets {}, "Back to sets" }
                        if err == ViewError::Unknown {
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| resource.restart(),
                                "Retry"
                            }
                        }
                    }
                },
                ViewState::Ready(()) => rsx! {
                    if let Some(err) = current_error {
                        p { class: "quiz-error", "{err.message()}" }
                    }
                    if let Some(screen) = screen {
                        QuizScreen { screen, set, on_intent: dispatch_intent }
                    }
                },
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    vm: Rc<RefCell<Option<Signal<Option<QuizVm>>>>>,
    pending: Rc<RefCell<Option<PendingAdvance>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    fn register(
        &self,
        dispatch: Callback<QuizIntent>,
        vm: Signal<Option<QuizVm>>,
        pending: PendingAdvance,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
        *self.pending.borrow_mut() = Some(pending);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Option<QuizVm>> {
        (*self.vm.borrow()).expect("quiz vm registered")
    }

    /// Whether a timed advance task is still outstanding.
    pub(crate) fn has_pending_advance(&self) -> bool {
        self.pending
            .borrow()
            .as_ref()
            .is_some_and(|pending| pending.0.get().is_some())
    }
}
