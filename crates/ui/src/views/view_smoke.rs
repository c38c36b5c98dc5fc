use sim_core::model::{Mark, ProjectFile};

use super::test_harness::{ViewKind, drive_dom, setup_view_harness};
use crate::vm::SimulatorIntent;

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_mode_cards() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();

    for title in ["Practice", "Challenges", "Exam"] {
        assert!(html.contains(title), "missing {title} in {html}");
    }
    assert!(html.contains("3 Projects"), "missing project count in {html}");
    assert!(html.contains("2 Challenges"), "missing challenge count in {html}");
    assert!(html.contains("Wide World Importers"), "missing exam tag in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn simulator_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Simulator("exam"));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Project 1 of 3: Adventure Works"), "missing title in {html}");
    assert!(html.contains("50:00"), "missing timer in {html}");
    assert!(html.contains("EXAM"), "missing exam badge in {html}");
    assert!(html.contains("sim-emphasis"), "missing emphasis in {html}");
    assert!(html.contains("Mark for Review"), "missing footer in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn simulator_view_unknown_mode_starts_practice() {
    let mut harness = setup_view_harness(ViewKind::Simulator("speedrun"));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Project 1 of 3: Bellows College"), "missing title in {html}");
    assert!(!html.contains("EXAM"), "unexpected exam badge in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn simulator_intents_walk_exam_to_summary() {
    let mut harness = setup_view_harness(ViewKind::Simulator("exam"));
    harness.rebuild();
    let handles = harness.handles();
    let dispatch = handles.dispatch();

    for intent in [SimulatorIntent::NextQuestion, SimulatorIntent::NextQuestion] {
        harness.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut harness.dom);
    }
    harness
        .dom
        .in_runtime(|| dispatch.call(SimulatorIntent::SubmitProject));
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(
        html.contains("Project 2 of 3: First Up Consultants"),
        "missing next project in {html}"
    );
    assert_eq!(
        harness.downloads.downloads(),
        vec![ProjectFile::new("./projects/exam/FirstUpConsultants.xlsx")]
    );

    harness
        .dom
        .in_runtime(|| dispatch.call(SimulatorIntent::ToggleMark(Mark::Completed)));
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(html.contains("✓ Complete"), "missing mark badge in {html}");

    harness
        .dom
        .in_runtime(|| dispatch.call(SimulatorIntent::GoToSummary));
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(html.contains("Session complete"), "missing summary in {html}");
    assert!(html.contains("Restart session"), "missing restart in {html}");

    let summary = harness.dom.in_runtime(|| {
        handles
            .vm()
            .read()
            .as_ref()
            .map(|vm| vm.summary())
            .expect("simulator present")
    });
    assert_eq!(summary.total, 6);
    assert_eq!(summary.completed, 1);
    assert_eq!(summary.review, 0);
}

#[tokio::test(flavor = "current_thread")]
async fn simulator_restart_from_summary_returns_to_first_project() {
    let mut harness = setup_view_harness(ViewKind::Simulator("exam"));
    harness.rebuild();
    let dispatch = harness.handles().dispatch();

    for intent in [
        SimulatorIntent::SubmitProject,
        SimulatorIntent::GoToSummary,
        SimulatorIntent::Restart,
    ] {
        harness.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut harness.dom);
    }

    let html = harness.render();
    assert!(html.contains("Project 1 of 3: Adventure Works"), "missing title in {html}");
    assert!(!html.contains("Session complete"), "summary still shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn simulator_restart_in_session_shows_error() {
    let mut harness = setup_view_harness(ViewKind::Simulator("practice"));
    harness.rebuild();
    let dispatch = harness.handles().dispatch();

    harness
        .dom
        .in_runtime(|| dispatch.call(SimulatorIntent::Restart));
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(
        html.contains("Finish the session before restarting it."),
        "missing error in {html}"
    );
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn simulator_timer_ticks_until_home() {
    let mut harness = setup_view_harness(ViewKind::Simulator("exam"));
    harness.rebuild();
    // First poll arms the one-second sleep.
    harness.drive_async().await;
    assert!(harness.render().contains("50:00"));

    tokio::time::advance(std::time::Duration::from_secs(1)).await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("49:59"), "missing tick in {html}");

    let handles = harness.handles();
    let home = handles.home();
    harness.dom.in_runtime(|| home.call(()));
    drive_dom(&mut harness.dom);

    for _ in 0..3 {
        tokio::time::advance(std::time::Duration::from_secs(1)).await;
        harness.drive_async().await;
    }
    let closed = harness
        .dom
        .in_runtime(|| handles.vm().read().is_none());
    assert!(closed, "simulator still alive after leaving");
    let html = harness.render();
    assert!(!html.contains("sim-timer"), "timer still rendered in {html}");
}
