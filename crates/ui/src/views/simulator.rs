use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::use_navigator;

use sim_core::markup::TextSegment;
use sim_core::model::{Mark, Mode};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{SummaryScreen, ViewError};
use crate::vm::{QuestionPillVm, SimulatorIntent, SimulatorOutcome, SimulatorVm};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn SimulatorView(mode: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mode = Mode::from_query(Some(mode.as_str()));

    let vm = use_signal(move || Some(SimulatorVm::new(ctx.start_simulator(mode))));
    let error = use_signal(|| None::<ViewError>);

    // One tick per second for the lifetime of this view.
    use_future(move || async move {
        let mut vm = vm;
        loop {
            tokio::time::sleep(Duration::from_secs(1)).await;
            match vm.write().as_mut() {
                Some(vm) => {
                    vm.tick();
                }
                None => break,
            }
        }
    });

    let dispatch_intent = use_callback(move |intent: SimulatorIntent| {
        let mut vm = vm;
        let mut error = error;
        let result = match vm.write().as_mut() {
            Some(vm) => vm.apply(intent),
            None => Err(ViewError::SessionClosed),
        };
        match result {
            Ok(SimulatorOutcome::Downloaded(file)) => {
                log::debug!("downloaded {file} on request");
                error.set(None);
            }
            Ok(_) => error.set(None),
            Err(err) => {
                log::warn!("{intent:?} failed: {err:?}");
                error.set(Some(err));
            }
        }
    });

    let on_home = use_callback(move |()| {
        let mut vm = vm;
        let finished = vm.write().take();
        if let Some(finished) = finished {
            let summary = finished.finish();
            log::info!(
                "left {} session: {} of {} completed, {} in review",
                summary.mode,
                summary.completed,
                summary.total,
                summary.review
            );
        }
        let _ = navigator.push(Route::Home {});
    });
    let on_restart = use_callback(move |()| dispatch_intent.call(SimulatorIntent::Restart));

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<SimulatorTestHandles>() {
                handles.register(dispatch_intent, on_home, vm);
            }
        }
    }

    let on_key = use_callback(move |evt: KeyboardEvent| {
        if vm.read().as_ref().is_none_or(SimulatorVm::is_summary) {
            return;
        }
        match evt.data.key() {
            Key::ArrowLeft => {
                evt.prevent_default();
                dispatch_intent.call(SimulatorIntent::PrevQuestion);
            }
            Key::ArrowRight => {
                evt.prevent_default();
                dispatch_intent.call(SimulatorIntent::NextQuestion);
            }
            _ => {}
        }
    });

    let vm_guard = vm.read();
    let Some(current) = vm_guard.as_ref() else {
        return rsx! {
            div { class: "page", p { "Session closed." } }
        };
    };

    if current.is_summary() {
        let summary = current.summary();
        return rsx! {
            SummaryScreen { summary, on_home, on_restart }
        };
    }

    let timer = current.timer();
    let timer_class = timer.class();
    let project_label = current.project_label().unwrap_or_default();
    let is_exam = current.is_exam();
    let pills = current.pills();
    let segments = current.question_segments();
    let badge = current.mark_badge();
    let can_prev = current.can_prev();
    let can_next = current.can_next();
    let current_mark = current.current_mark();
    let complete_label = current.mark_button_label(Mark::Completed);
    let review_label = current.mark_button_label(Mark::Review);
    let complete_class = if current_mark == Some(Mark::Completed) {
        "sim-action sim-action--completed"
    } else {
        "sim-action"
    };
    let review_class = if current_mark == Some(Mark::Review) {
        "sim-action sim-action--review"
    } else {
        "sim-action"
    };

    rsx! {
        div { class: "simulator", id: "simulator-root", tabindex: "0", onkeydown: on_key,
            header { class: "sim-topbar",
                div { class: "sim-topbar__left",
                    span { class: "{timer_class}", id: "sim-timer", "{timer.label}" }
                    button {
                        class: "sim-btn",
                        id: "sim-go-to-summary",
                        r#type: "button",
                        onclick: move |_| dispatch_intent.call(SimulatorIntent::GoToSummary),
                        "Go To Summary"
                    }
                }
                div { class: "sim-topbar__center",
                    if is_exam {
                        span { class: "sim-exam-badge", "EXAM" }
                    }
                    h1 { class: "sim-project-title", "{project_label}" }
                }
                div { class: "sim-topbar__right",
                    button {
                        class: "sim-btn",
                        id: "sim-restart-project",
                        r#type: "button",
                        onclick: move |_| dispatch_intent.call(SimulatorIntent::RestartProject),
                        "Restart Project"
                    }
                    button {
                        class: "sim-btn",
                        id: "sim-submit-project",
                        r#type: "button",
                        onclick: move |_| dispatch_intent.call(SimulatorIntent::SubmitProject),
                        "Submit Project"
                    }
                    button {
                        class: "sim-btn sim-btn--icon",
                        id: "sim-download",
                        r#type: "button",
                        title: "Download Excel file",
                        onclick: move |_| dispatch_intent.call(SimulatorIntent::DownloadCurrent),
                        "⤓"
                    }
                }
            }
            nav { class: "sim-navbar",
                button {
                    class: "sim-nav",
                    id: "sim-prev",
                    r#type: "button",
                    disabled: !can_prev,
                    onclick: move |_| dispatch_intent.call(SimulatorIntent::PrevQuestion),
                    "‹"
                }
                div { class: "sim-pills",
                    for (index, pill) in pills.into_iter().enumerate() {
                        QuestionPill { key: "{index}", pill, on_intent: dispatch_intent }
                    }
                }
                button {
                    class: "sim-nav",
                    id: "sim-next",
                    r#type: "button",
                    disabled: !can_next,
                    onclick: move |_| dispatch_intent.call(SimulatorIntent::NextQuestion),
                    "›"
                }
            }
            main { class: "sim-body",
                if let Some(err) = *error.read() {
                    p { class: "sim-error", "{err.message()}" }
                }
                if let Some((class, label)) = badge {
                    span { class: "{class}", "{label}" }
                }
                QuestionText { segments }
            }
            footer { class: "sim-footer",
                button {
                    class: "{complete_class}",
                    id: "sim-mark-complete",
                    r#type: "button",
                    onclick: move |_| dispatch_intent.call(SimulatorIntent::ToggleMark(Mark::Completed)),
                    "{complete_label}"
                }
                button {
                    class: "{review_class}",
                    id: "sim-mark-review",
                    r#type: "button",
                    onclick: move |_| dispatch_intent.call(SimulatorIntent::ToggleMark(Mark::Review)),
                    "{review_label}"
                }
            }
        }
    }
}

#[component]
fn QuestionPill(pill: QuestionPillVm, on_intent: EventHandler<SimulatorIntent>) -> Element {
    let index = pill.index;
    rsx! {
        button {
            class: "{pill.class()}",
            r#type: "button",
            onclick: move |_| on_intent.call(SimulatorIntent::SelectQuestion(index)),
            if pill.shows_check() {
                span { class: "sim-pill__check", "✓" }
            }
            "{pill.label}"
        }
    }
}

#[component]
fn QuestionText(segments: Vec<TextSegment>) -> Element {
    rsx! {
        p { class: "sim-question",
            for segment in segments {
                match segment {
                    TextSegment::Emphasis(text) => rsx! { strong { class: "sim-emphasis", "{text}" } },
                    TextSegment::Plain(text) => rsx! { span { "{text}" } },
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct SimulatorTestHandles {
    dispatch: Rc<RefCell<Option<Callback<SimulatorIntent>>>>,
    home: Rc<RefCell<Option<Callback<()>>>>,
    vm: Rc<RefCell<Option<Signal<Option<SimulatorVm>>>>>,
}

#[cfg(test)]
impl SimulatorTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<SimulatorIntent>,
        home: Callback<()>,
        vm: Signal<Option<SimulatorVm>>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.home.borrow_mut() = Some(home);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<SimulatorIntent> {
        (*self.dispatch.borrow()).expect("simulator dispatch registered")
    }

    pub(crate) fn home(&self) -> Callback<()> {
        (*self.home.borrow()).expect("simulator home registered")
    }

    pub(crate) fn vm(&self) -> Signal<Option<SimulatorVm>> {
        (*self.vm.borrow()).expect("simulator vm registered")
    }
}
