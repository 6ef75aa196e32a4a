use std::time::Instant;

use contplot::config::PlotConfig;
use contplot::data::export::ExportFormat;
use contplot::driver::{RunState, TickDriver};
use contplot::PlotController;

fn driver() -> TickDriver {
    TickDriver::new(&PlotConfig {
        seed: Some(99),
        ..PlotConfig::default()
    })
    .unwrap()
}

#[test]
fn controller_start_and_pause_requests_drive_the_state_machine() {
    let mut driver = driver();
    let controller = PlotController::new();
    let now = Instant::now();

    controller.start();
    driver.poll_controller(&controller, now).unwrap();
    assert_eq!(driver.run_state(), RunState::Running);

    controller.pause();
    driver.poll_controller(&controller, now).unwrap();
    assert_eq!(driver.run_state(), RunState::Paused);
}

#[test]
fn poll_without_requests_is_quiet() {
    let mut driver = driver();
    let controller = PlotController::new();
    let rx = controller.subscribe();
    driver.poll_controller(&controller, Instant::now()).unwrap();
    assert!(rx.try_recv().is_err(), "no requests, no publication");
}

#[test]
fn subscribers_receive_state_snapshots() {
    let mut driver = driver();
    let controller = PlotController::new();
    let rx = controller.subscribe();
    let now = Instant::now();

    controller.start();
    driver.poll_controller(&controller, now).unwrap();
    driver.tick();
    controller.pause();
    driver.poll_controller(&controller, now).unwrap();

    let first = rx.recv().unwrap();
    assert_eq!(first.state, RunState::Running);
    assert_eq!(first.total_samples, 0);

    let second = rx.recv().unwrap();
    assert_eq!(second.state, RunState::Paused);
    assert_eq!(second.total_samples, 3);
    assert!(!second.data_saved);
}

#[test]
fn export_requests_are_executed_and_reported() {
    let dir = tempfile::tempdir().unwrap();
    let mut driver = driver();
    let controller = PlotController::new();
    let now = Instant::now();

    controller.start();
    driver.poll_controller(&controller, now).unwrap();
    driver.tick();

    let path = dir.path().join("requested.csv");
    controller.request_export_to_path(ExportFormat::Csv, &path);
    driver.poll_controller(&controller, now).unwrap();
    assert!(path.exists());
    assert!(driver.data_saved());
}

#[test]
fn failing_export_requests_surface_the_error() {
    let mut driver = driver();
    let controller = PlotController::new();
    let now = Instant::now();

    controller.request_export_to_path(ExportFormat::Csv, "/nonexistent-dir/sub/x.csv");
    assert!(driver.poll_controller(&controller, now).is_err());
    assert!(!driver.data_saved());
}

#[test]
fn jump_requests_re_enable_follow() {
    let mut driver = driver();
    let controller = PlotController::new();
    let now = Instant::now();
    driver.start(now);
    for _ in 0..200 {
        driver.tick();
    }
    driver.pan(0, -150.0);
    assert!(!driver.view(0).unwrap().auto_follow());

    controller.request_jump_to_latest(0);
    driver.poll_controller(&controller, now).unwrap();
    assert!(driver.view(0).unwrap().auto_follow());
    assert_eq!(driver.view(0).unwrap().bounds(), (99.0, 199.0));
}

#[test]
fn controller_handles_are_cloneable_across_threads() {
    let controller = PlotController::new();
    let clone = controller.clone();
    let handle = std::thread::spawn(move || {
        clone.start();
    });
    handle.join().unwrap();

    let mut driver = driver();
    driver.poll_controller(&controller, Instant::now()).unwrap();
    assert_eq!(driver.run_state(), RunState::Running);
}
