use std::time::Duration;

use approx::assert_relative_eq;
use solar_sim::config::SimConfig;
use solar_sim::file::read_str;
use solar_sim::model::RunState;
use solar_sim::physics::DirectGravity;
use solar_sim::render::TrackRecorder;
use solar_sim::scheduler::{tick_delay, Scheduler};
use solar_sim::Error;

const SAMPLE_FILE: &str = "solar_system.txt";

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn loaded_scheduler(speed: i32, recorder: &mut TrackRecorder) -> Scheduler {
    let config = SimConfig {
        speed,
        time_step: 3600.0,
        ..SimConfig::default()
    };
    let mut scheduler = Scheduler::new(&config, DirectGravity::new());
    scheduler.load_file(SAMPLE_FILE, recorder).unwrap();
    scheduler
}

#[test]
fn test_delay_formula() {
    assert_eq!(tick_delay(100), ms(1));
    assert_eq!(tick_delay(1), ms(100));
    assert_eq!(tick_delay(150), ms(1));
}

#[test]
fn test_load_sets_scale_and_pauses() {
    let mut recorder = TrackRecorder::new();
    let scheduler = loaded_scheduler(50, &mut recorder);

    let state = scheduler.state();
    assert_eq!(state.run_state(), RunState::Paused);
    assert_eq!(state.objects().len(), 5);
    // Mars is furthest out, and lands on the edge of an 800px window
    assert_relative_eq!(state.scale_factor(), 400.0 / 227.936e9, max_relative = 1e-12);
    assert_eq!(recorder.live_images(), 5);
}

#[test]
fn test_pause_and_resume_keeps_time() {
    let mut recorder = TrackRecorder::new();
    let mut scheduler = loaded_scheduler(91, &mut recorder);

    scheduler.start(&mut recorder);
    let mut now = 0;
    for _ in 0..5 {
        now += 10;
        assert_eq!(scheduler.run_due(ms(now), &mut recorder), 1);
    }
    assert_relative_eq!(scheduler.state().physical_time(), 6.0 * 3600.0);

    scheduler.pause();
    now += 500;
    assert_eq!(scheduler.run_due(ms(now), &mut recorder), 0);
    assert_relative_eq!(scheduler.state().physical_time(), 6.0 * 3600.0);

    scheduler.start(&mut recorder);
    assert_eq!(scheduler.state().run_state(), RunState::Running);
    assert_relative_eq!(scheduler.state().physical_time(), 7.0 * 3600.0);
    assert_eq!(recorder.last_time(), Some(scheduler.state().physical_time()));

    // Every planet got drawn once per tick, plus once when it was created
    for (_, track) in recorder.tracks() {
        assert_eq!(track.points.len(), 8);
    }
}

#[test]
fn test_speed_change_takes_effect_on_next_reschedule() {
    let mut recorder = TrackRecorder::new();
    let mut scheduler = loaded_scheduler(1, &mut recorder);

    scheduler.start(&mut recorder);
    // At speed 1, the next tick is 100ms out
    assert_eq!(scheduler.run_due(ms(99), &mut recorder), 0);
    scheduler.set_speed(100);
    assert_eq!(scheduler.run_due(ms(100), &mut recorder), 1);
    // Now we're down to a millisecond between ticks
    assert_eq!(scheduler.run_due(ms(101), &mut recorder), 1);
    assert_eq!(scheduler.run_due(ms(102), &mut recorder), 1);
}

#[test]
fn test_failed_loads_leave_state_alone() {
    let mut recorder = TrackRecorder::new();
    let mut scheduler = loaded_scheduler(50, &mut recorder);
    scheduler.start(&mut recorder);

    let scale = scheduler.state().scale_factor();
    let objects = scheduler.state().objects().to_vec();
    let time = scheduler.state().physical_time();

    let empty = read_str("# nothing to see here\n\nComet 1 white 1 1 1 1 1\n").unwrap();
    assert!(matches!(
        scheduler.load(empty, &mut recorder),
        Err(Error::EmptyDataset)
    ));
    assert!(matches!(
        scheduler.load_file("no/such/file.txt", &mut recorder),
        Err(Error::Io(_))
    ));

    assert_eq!(scheduler.state().objects(), &objects[..]);
    assert_eq!(scheduler.state().scale_factor(), scale);
    assert_eq!(scheduler.state().physical_time(), time);
    assert_eq!(scheduler.state().run_state(), RunState::Running);
    assert_eq!(recorder.live_images(), 5);
}

#[test]
fn test_reload_replaces_images() {
    let mut recorder = TrackRecorder::new();
    let mut scheduler = loaded_scheduler(50, &mut recorder);

    let two_bodies = read_str(
        "Star 20 yellow 2.0E30 0 0 0 0\nPlanet 5 blue 6.0E24 1.0E11 0 0 3.0E4\n",
    )
    .unwrap();
    scheduler.load(two_bodies, &mut recorder).unwrap();

    assert_eq!(scheduler.state().objects().len(), 2);
    assert_relative_eq!(scheduler.state().scale_factor(), 400.0 / 1.0e11, max_relative = 1e-12);
    assert_eq!(recorder.live_images(), 2);
    assert_eq!(recorder.tracks().count(), 7);
}

#[test]
fn test_save_writes_current_objects() {
    let mut recorder = TrackRecorder::new();
    let mut scheduler = loaded_scheduler(50, &mut recorder);
    scheduler.tick(&mut recorder);

    let mut out = vec![];
    scheduler.save(&mut out).unwrap();
    let saved = read_str(&String::from_utf8(out).unwrap()).unwrap();

    assert_eq!(saved.len(), 5);
    assert_eq!(scheduler.state().run_state(), RunState::Paused);
    for (saved, current) in saved.iter().zip(scheduler.state().objects()) {
        assert_eq!(saved.kind, current.kind);
        assert_eq!(saved.color, current.color);
    }
}
