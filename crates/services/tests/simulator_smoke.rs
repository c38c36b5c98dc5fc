use std::sync::Arc;

use services::{AppServices, CopyDownloader, Position, SimulatorConfig, SubmitOutcome};
use sim_core::FixedIndex;
use sim_core::model::{Mark, Mode};
use storage::repository::Storage;

fn seed_files(root: &std::path::Path, names: &[&str]) {
    let dir = root.join("projects/exam");
    std::fs::create_dir_all(&dir).unwrap();
    for name in names {
        std::fs::write(dir.join(name), name.as_bytes()).unwrap();
    }
}

#[test]
fn exam_session_downloads_each_next_workbook() {
    let files = tempfile::tempdir().unwrap();
    let downloads = tempfile::tempdir().unwrap();
    seed_files(
        files.path(),
        &["FirstUpConsultants.xlsx", "WideWorldImporters.xlsx"],
    );

    let services = AppServices::load(
        &Storage::embedded(),
        Arc::new(CopyDownloader::new(files.path(), downloads.path())),
        SimulatorConfig::default(),
    )
    .unwrap();
    let mut sim = services.start_simulator_with(Mode::Exam, Box::new(FixedIndex(0)));

    assert!(sim.next_question().unwrap());
    assert!(!sim.next_question().unwrap());
    assert_eq!(sim.position(), Some(Position::new(0, 1)));

    let outcome = sim.submit_project().unwrap();
    assert!(matches!(outcome, SubmitOutcome::Advanced { .. }));
    assert!(downloads.path().join("FirstUpConsultants.xlsx").is_file());
    assert_eq!(sim.position(), Some(Position::new(1, 0)));

    sim.toggle_mark(Mark::Completed).unwrap();
    let summary = sim.go_to_summary();
    assert_eq!(summary.completed(), 1);
    assert_eq!(summary.review(), 0);
    assert_eq!(summary.total_questions(), 6);
}

#[test]
fn missing_workbook_does_not_stop_the_session() {
    let files = tempfile::tempdir().unwrap();
    let downloads = tempfile::tempdir().unwrap();

    let services = AppServices::load(
        &Storage::embedded(),
        Arc::new(CopyDownloader::new(files.path(), downloads.path())),
        SimulatorConfig::default(),
    )
    .unwrap();
    let mut sim = services.start_simulator_with(Mode::Exam, Box::new(FixedIndex(1)));

    sim.submit_project().unwrap();
    sim.submit_project().unwrap();
    assert_eq!(sim.submit_project().unwrap(), SubmitOutcome::Finished);
    assert!(sim.is_summary());

    sim.restart().unwrap();
    assert_eq!(sim.position(), Some(Position::new(0, 0)));
    assert!(sim.download_current().is_err());
}
