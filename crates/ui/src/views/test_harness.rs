use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::Session;
use quiz_core::model::{AiSettings, QuestionSet};
use services::{
    ChatQuestionSource, GameLoopService, QuestionSource, QuestionSupplier, SupplyError,
    SupplyRequest,
};

use crate::app::Screen;
use crate::context::{UiApp, build_app_context};
use crate::views::game::GameTestHandles;

/// Generator that never answers, pinning the loading screen.
pub struct PendingSource;

#[async_trait::async_trait]
impl QuestionSource for PendingSource {
    async fn generate(&self, _request: &SupplyRequest) -> Result<QuestionSet, SupplyError> {
        std::future::pending().await
    }
}

struct TestApp {
    game_loop: Arc<GameLoopService>,
}

impl TestApp {
    fn with_source(source: Arc<dyn QuestionSource>) -> Self {
        Self {
            game_loop: Arc::new(GameLoopService::new(QuestionSupplier::new(source))),
        }
    }
}

impl UiApp for TestApp {
    fn game_loop(&self) -> Arc<GameLoopService> {
        Arc::clone(&self.game_loop)
    }

    fn auto_advance_delay(&self) -> Duration {
        Duration::ZERO
    }
}

#[derive(Props, Clone)]
struct ScreenHarnessProps {
    app: Arc<dyn UiApp>,
    session: Session,
    handles: GameTestHandles,
}

impl PartialEq for ScreenHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ScreenHarness(props: ScreenHarnessProps) -> Element {
    use_context_provider(|| build_app_context(&props.app));
    let session = props.session.clone();
    use_context_provider(|| Signal::new(session));
    let handles = props.handles.clone();
    use_context_provider(|| handles);
    rsx! { Screen {} }
}

pub struct ScreenTestHarness {
    pub dom: VirtualDom,
    handles: GameTestHandles,
}

impl ScreenTestHarness {
    /// Harness whose generator has no API key, so every load serves the
    /// built-in fallback batch without touching the network.
    pub fn new(session: Session) -> Self {
        let source = Arc::new(ChatQuestionSource::new(AiSettings::default()));
        Self::with_source(session, source)
    }

    pub fn with_source(session: Session, source: Arc<dyn QuestionSource>) -> Self {
        let app: Arc<dyn UiApp> = Arc::new(TestApp::with_source(source));
        let handles = GameTestHandles::default();
        let dom = VirtualDom::new_with_props(
            ScreenHarness,
            ScreenHarnessProps {
                app,
                session,
                handles: handles.clone(),
            },
        );
        Self { dom, handles }
    }

    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Click `option` on the game screen, as its button would. Spawned work
    /// only runs on the next drive.
    pub fn answer(&self, option: &str) {
        let answer = self.handles.answer();
        self.dom.in_runtime(|| answer.call(option.to_string()));
    }

    /// Drive pending tasks until the page contains `needle`, returning the
    /// last render either way.
    pub async fn wait_for(&mut self, needle: &str) -> String {
        let mut html = self.render();
        for _ in 0..10 {
            if html.contains(needle) {
                break;
            }
            self.drive_async().await;
            html = self.render();
        }
        html
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Render a single snapshot once.
pub fn render_screen(session: Session) -> String {
    let mut harness = ScreenTestHarness::new(session);
    harness.rebuild();
    harness.render()
}
