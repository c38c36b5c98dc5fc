use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{AppServices, RecordingDownloader, SimulatorConfig};
use sim_core::{FixedIndex, IndexSource};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::simulator::SimulatorTestHandles;
use crate::views::{HomeView, SimulatorView};

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn services(&self) -> AppServices {
        self.services.clone()
    }

    fn index_source(&self) -> Box<dyn IndexSource + Send> {
        Box::new(FixedIndex(0))
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Simulator(&'static str),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    simulator_handles: Option<SimulatorTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    if let Some(handles) = props.simulator_handles.clone() {
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
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Simulator(mode) => rsx! { SimulatorView { mode: mode.to_string() } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub downloads: Arc<RecordingDownloader>,
    pub simulator_handles: Option<SimulatorTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn handles(&self) -> SimulatorTestHandles {
        self.simulator_handles
            .clone()
            .expect("simulator handles installed")
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let downloads = Arc::new(RecordingDownloader::new());
    let services = AppServices::load(
        &Storage::embedded(),
        downloads.clone(),
        SimulatorConfig::default(),
    )
    .expect("load embedded dataset");

    let simulator_handles = match view {
        ViewKind::Simulator(_) => Some(SimulatorTestHandles::default()),
        ViewKind::Home => None,
    };

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app: Arc::new(TestApp { services }),
            view,
            simulator_handles: simulator_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        downloads,
        simulator_handles,
    }
}
