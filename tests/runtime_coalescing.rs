mod common;

use std::error::Error;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use tokio::sync::mpsc;
use tokio::time::{sleep, timeout};
use treedoc::document::DocumentStats;
use treedoc::engine::{RegenQueue, Runtime, RuntimeEvent, RuntimeOptions, TriggerReason};
use treedoc::generator::{Regenerate, RegenerationReport};

type TestResult = Result<(), Box<dyn Error>>;

/// Regenerator that sleeps, counts calls and tracks overlap.
#[derive(Default)]
struct FakeRegenerator {
    delay: Duration,
    fail: bool,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl FakeRegenerator {
    fn new(delay: Duration, fail: bool) -> Self {
        Self {
            delay,
            fail,
            ..Self::default()
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Regenerate for FakeRegenerator {
    fn regenerate(&self) -> Result<RegenerationReport> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        std::thread::sleep(self.delay);

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        if self.fail {
            return Err(anyhow!("disk full"));
        }
        Ok(RegenerationReport {
            stats: DocumentStats::default(),
            bytes: 0,
            elapsed: self.delay,
        })
    }
}

fn manual() -> RuntimeEvent {
    RuntimeEvent::RegenerationRequested {
        reason: TriggerReason::Manual,
    }
}

async fn wait_for_calls(generator: &FakeRegenerator, n: usize) -> TestResult {
    timeout(Duration::from_secs(5), async {
        while generator.calls() < n {
            sleep(Duration::from_millis(10)).await;
        }
    })
    .await?;
    Ok(())
}

#[test]
fn queue_coalesces_into_single_follow_up() {
    let mut q = RegenQueue::new();
    assert!(q.is_idle());

    assert!(q.record_trigger());
    assert!(!q.is_idle());

    assert!(!q.record_trigger());
    assert!(q.is_dirty());
    assert!(!q.record_trigger());
    assert!(!q.record_trigger());
    assert_eq!(q.coalesced(), 2);

    // First cycle ends: exactly one follow-up starts.
    assert!(q.finish_cycle());
    assert!(!q.is_dirty());
    assert!(!q.is_idle());

    // Follow-up ends with nothing pending: idle again.
    assert!(!q.finish_cycle());
    assert!(q.is_idle());
}

#[tokio::test]
async fn triggers_during_a_cycle_run_exactly_one_more() -> TestResult {
    common::init_tracing();

    let generator = Arc::new(FakeRegenerator::new(Duration::from_millis(100), false));
    let (tx, rx) = mpsc::channel(64);

    for _ in 0..5 {
        tx.send(manual()).await?;
    }

    let runtime = Runtime::new(
        Arc::clone(&generator),
        RuntimeOptions {
            exit_when_idle: true,
        },
        rx,
        tx.clone(),
    );
    let summary = timeout(Duration::from_secs(5), runtime.run()).await??;

    assert_eq!(generator.calls(), 2);
    assert_eq!(generator.max_in_flight.load(Ordering::SeqCst), 1);
    assert_eq!(summary.cycles, 2);
    assert_eq!(summary.failures, 0);
    assert_eq!(summary.coalesced, 3);

    Ok(())
}

#[tokio::test]
async fn failed_cycles_are_logged_and_watching_continues() -> TestResult {
    common::init_tracing();

    let generator = Arc::new(FakeRegenerator::new(Duration::from_millis(5), true));
    let (tx, rx) = mpsc::channel(64);

    let runtime = Runtime::new(Arc::clone(&generator), RuntimeOptions::default(), rx, tx.clone());
    let handle = tokio::spawn(runtime.run());

    tx.send(manual()).await?;
    wait_for_calls(&generator, 1).await?;
    // Give the failure report time to reach the loop before the next trigger.
    sleep(Duration::from_millis(50)).await;

    tx.send(manual()).await?;
    wait_for_calls(&generator, 2).await?;
    sleep(Duration::from_millis(50)).await;

    tx.send(RuntimeEvent::ShutdownRequested).await?;
    let summary = timeout(Duration::from_secs(5), handle).await???;

    assert_eq!(summary.cycles, 2);
    assert_eq!(summary.failures, 2);
    Ok(())
}

#[tokio::test]
async fn shutdown_waits_for_in_flight_cycle() -> TestResult {
    let generator = Arc::new(FakeRegenerator::new(Duration::from_millis(100), false));
    let (tx, rx) = mpsc::channel(64);

    tx.send(manual()).await?;
    tx.send(RuntimeEvent::ShutdownRequested).await?;
    // Arrives after shutdown was requested; must not start anything.
    tx.send(manual()).await?;

    let runtime = Runtime::new(Arc::clone(&generator), RuntimeOptions::default(), rx, tx.clone());
    let summary = timeout(Duration::from_secs(5), runtime.run()).await??;

    assert_eq!(summary.cycles, 1);
    assert_eq!(generator.calls(), 1);
    Ok(())
}
