use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::{
    AdvancePolicy, Category, Question, QuestionBank, QuestionSet, QuizSettings,
};
use services::AppServices;
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::quiz::QuizTestHandles;
use crate::views::{CategoriesView, QuizView, SetsView};
use crate::vm::{QuizIntent, QuizVm};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Sets,
    Categories(u32),
    Quiz(u32, u32),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<dyn UiApp>,
    view: ViewKind,
    quiz_handles: Option<QuizTestHandles>,
    mount: MountSwitch,
}

/// Lets a test unmount the view under the router.
#[derive(Clone, Default)]
struct MountSwitch(Rc<RefCell<Option<Signal<bool>>>>);

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    use_context_provider(|| build_app_context(&props.app));
    use_context_provider(|| props.view);
    let mounted = use_signal(|| true);
    props.mount.0.borrow_mut().get_or_insert(mounted);
    use_context_provider(|| mounted);
    if let Some(handles) = props.quiz_handles.clone() {
        use_context_provider(|| handles);
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    let mounted = use_context::<Signal<bool>>();
    if !mounted() {
        return rsx! { p { "Unmounted" } };
    }
    match view {
        ViewKind::Sets => rsx! { SetsView {} },
        ViewKind::Categories(set) => rsx! { CategoriesView { set } },
        ViewKind::Quiz(set, category) => rsx! { QuizView { set, category } },
    }
}

/// Question `n` of a category: the correct option always reads `right n`.
pub fn question(n: usize) -> Question {
    Question::new(
        format!("Question {n}?"),
        vec![
            format!("right {n}"),
            format!("wrong {n} a"),
            format!("wrong {n} b"),
            format!("wrong {n} c"),
        ],
        format!("right {n}"),
    )
    .expect("valid question")
}

/// Two sets; set 0 has categories of 5, 2 and 0 questions.
pub fn sample_bank() -> QuestionBank {
    QuestionBank::new(vec![
        QuestionSet::new(
            "Geography",
            vec![
                Category::new("Rivers", (0..5).map(question).collect()),
                Category::new("Capitals", (0..2).map(question).collect()),
                Category::new("Deserts", Vec::new()),
            ],
        )
        .expect("valid set"),
        QuestionSet::new(
            "History",
            vec![Category::new("Kings", (0..3).map(question).collect())],
        )
        .expect("valid set"),
    ])
    .expect("valid bank")
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub quiz_handles: Option<QuizTestHandles>,
    mount: MountSwitch,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive until the rendered page contains `needle`, giving up after roughly `limit`.
    pub async fn drive_until(&mut self, needle: &str, limit: Duration) -> String {
        let rounds = limit.as_millis() / 50 + 1;
        for _ in 0..rounds {
            let html = self.render();
            if html.contains(needle) {
                return html;
            }
            self.drive_async().await;
        }
        self.render()
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Swap the view out, as navigating elsewhere would.
    pub fn unmount(&mut self) {
        let mounted = (*self.mount.0.borrow()).expect("harness rendered");
        self.dom.in_runtime(|| {
            let mut mounted = mounted;
            mounted.set(false);
        });
        drive_dom(&mut self.dom);
    }

    pub fn dispatch(&mut self, intent: QuizIntent) {
        let handles = self.quiz_handles.clone().expect("quiz view harness");
        self.dom.in_runtime(|| handles.dispatch().call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn with_vm<T>(&self, f: impl FnOnce(&QuizVm) -> T) -> T {
        let handles = self.quiz_handles.clone().expect("quiz view harness");
        self.dom.in_runtime(|| {
            let vm = handles.vm();
            let guard = vm.peek();
            f(guard.as_ref().expect("quiz started"))
        })
    }

    /// Position of the correct (or a wrong) option of the current question.
    pub fn option_index(&self, correct: bool) -> usize {
        self.with_vm(|vm| {
            let current = vm.run().session().current().expect("current question");
            current
                .options()
                .iter()
                .position(|option| (option == current.answer()) == correct)
                .expect("option present")
        })
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, advance: AdvancePolicy) -> ViewHarness {
    setup_view_harness_with_storage(view, advance, Storage::in_memory(sample_bank()))
}

pub fn setup_view_harness_with_storage(
    view: ViewKind,
    advance: AdvancePolicy,
    storage: Storage,
) -> ViewHarness {
    let settings = QuizSettings::new(20, advance).expect("valid settings");
    let app: Arc<dyn UiApp> = Arc::new(AppServices::new(&storage, settings));
    let quiz_handles = match view {
        ViewKind::Quiz(..) => Some(QuizTestHandles::default()),
        _ => None,
    };

    let mount = MountSwitch::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            quiz_handles: quiz_handles.clone(),
            mount: mount.clone(),
        },
    );

    ViewHarness {
        dom,
        quiz_handles,
        mount,
    }
}
