// Integration tests for the stepper scheduler and its clock

use std::thread;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use sortviz::algorithms::REGISTRY;
use sortviz::scheduler::{RunPhase, Scheduler, DEFAULT_RATE_INDEX, RATE_TABLE};
use sortviz::store::ArrayStore;

fn small_store(len: usize) -> ArrayStore {
    let mut store = ArrayStore::from_values((1..=len as i32).collect());
    store.shuffle(&mut StdRng::seed_from_u64(21));
    store
}

#[test]
fn registry_is_the_fixed_table() {
    assert_eq!(REGISTRY.len(), 8);
    assert_eq!(REGISTRY[0].name, "Bubble Sort");
    assert_eq!(REGISTRY[REGISTRY.len() - 1].name, "Radix Sort");
}

#[test]
fn speed_is_clamped_to_the_rate_table() {
    let mut scheduler = Scheduler::new(small_store(8));
    assert_eq!(scheduler.rate(), RATE_TABLE[DEFAULT_RATE_INDEX]);

    for _ in 0..RATE_TABLE.len() + 2 {
        scheduler.speed_down();
    }
    assert_eq!(scheduler.rate(), RATE_TABLE[0]);
    scheduler.speed_down();
    assert_eq!(scheduler.rate(), RATE_TABLE[0]);

    for _ in 0..RATE_TABLE.len() + 2 {
        scheduler.speed_up();
    }
    assert_eq!(scheduler.rate(), RATE_TABLE[RATE_TABLE.len() - 1]);
    scheduler.speed_up();
    assert_eq!(scheduler.rate(), RATE_TABLE[RATE_TABLE.len() - 1]);

    scheduler.reset_speed();
    assert_eq!(scheduler.rate(), RATE_TABLE[DEFAULT_RATE_INDEX]);
}

#[test]
fn clock_runs_the_sort_to_completion() {
    let mut scheduler = Scheduler::new(small_store(8));
    // Fastest rate so the whole animation fits comfortably in the test
    scheduler.set_speed(RATE_TABLE.len() - 1);
    scheduler.start(1); // Selection Sort

    let deadline = Instant::now() + Duration::from_secs(10);
    while !scheduler.finished() {
        assert!(Instant::now() < deadline, "animation did not finish");
        thread::sleep(Duration::from_millis(10));
    }

    let frame = scheduler.frame();
    assert_eq!(frame.phase, RunPhase::Finished);
    assert_eq!(frame.values, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    // Selection on 8 elements: 28 comparisons
    assert_eq!(frame.steps, 28);
}

#[test]
fn speed_change_keeps_progress_and_values() {
    // Bubble on a bigger array so the run outlives a few rebinds
    let mut scheduler = Scheduler::new(small_store(200));
    scheduler.set_speed(RATE_TABLE.len() - 1);
    scheduler.start(0);

    thread::sleep(Duration::from_millis(50));
    let before = scheduler.frame();

    scheduler.set_speed(DEFAULT_RATE_INDEX);
    let after = scheduler.frame();
    // Rebinding the clock never rewinds the algorithm
    assert!(after.steps >= before.steps);

    scheduler.set_speed(RATE_TABLE.len() - 1);
    thread::sleep(Duration::from_millis(50));
    let later = scheduler.frame();
    assert!(later.steps > before.steps, "clock stopped stepping");

    // Steps only permute; the multiset never changes
    let mut values = later.values.clone();
    values.sort_unstable();
    assert_eq!(values, (1..=200).collect::<Vec<i32>>());

    scheduler.stop();
}

#[test]
fn stop_is_a_barrier_against_further_steps() {
    let mut scheduler = Scheduler::new(small_store(200));
    scheduler.set_speed(RATE_TABLE.len() - 1);
    scheduler.start(0);

    thread::sleep(Duration::from_millis(20));
    scheduler.stop();

    // After stop() returns, the state is destroyed and nothing may mutate
    // the store again
    let frozen = scheduler.frame();
    assert_eq!(frozen.phase, RunPhase::Finished);
    thread::sleep(Duration::from_millis(50));
    assert_eq!(scheduler.frame().values, frozen.values);

    // A second stop on an idle scheduler is harmless
    scheduler.stop();
}

#[test]
fn speed_change_after_finish_does_not_restart() {
    let mut scheduler = Scheduler::new(small_store(2));
    scheduler.set_speed(RATE_TABLE.len() - 1);
    scheduler.start(1);

    let deadline = Instant::now() + Duration::from_secs(10);
    while !scheduler.finished() {
        assert!(Instant::now() < deadline, "animation did not finish");
        thread::sleep(Duration::from_millis(5));
    }

    scheduler.speed_down();
    thread::sleep(Duration::from_millis(30));
    assert!(scheduler.finished());
    assert_eq!(scheduler.frame().values, vec![1, 2]);
}
