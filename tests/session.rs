use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use timeplot::{
    RetentionPolicy, Session, SessionState, SourceError, StepOutcome, Tick, TimePlotConfig,
    TimePlotError,
};

fn t0() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2018, 3, 19)
        .unwrap()
        .and_hms_opt(18, 5, 12)
        .unwrap()
}

fn fast_cfg() -> TimePlotConfig {
    TimePlotConfig {
        interval: Duration::from_millis(1),
        ..Default::default()
    }
}

/// A source counting its calls and failing on call `fail_on` (1-based).
fn scripted(calls: Rc<Cell<u32>>, fail_on: u32) -> impl FnMut() -> Result<Tick, SourceError> {
    move || {
        let n = calls.get() + 1;
        calls.set(n);
        if n == fail_on {
            return Err("feed disconnected".into());
        }
        Ok(Tick::new(
            t0() + TimeDelta::seconds(n as i64),
            vec![n as f64 / 10.0],
        ))
    }
}

#[test]
fn invalid_config_fails_before_any_tick() {
    let calls = Rc::new(Cell::new(0));
    let cfg = TimePlotConfig {
        interval: Duration::ZERO,
        ..Default::default()
    };
    let result = Session::new(scripted(calls.clone(), 0), &cfg);
    assert!(matches!(result, Err(TimePlotError::InvalidConfiguration(_))));
    assert_eq!(calls.get(), 0);
}

#[test]
fn failing_source_halts_after_two_redraws() {
    let calls = Rc::new(Cell::new(0));
    let mut session = Session::new(scripted(calls.clone(), 3), &fast_cfg()).unwrap();

    let mut redraws = 0;
    let err = session.run_blocking(|_| redraws += 1).unwrap_err();

    assert!(matches!(err, TimePlotError::Source(_)));
    assert_eq!(redraws, 2);
    assert_eq!(session.frames(), 2);
    assert_eq!(session.state(), SessionState::Failed);
    assert_eq!(session.updater().buffer().unwrap().len(), 2);
    assert_eq!(session.render().redraws, 2);

    // no further ticks are attempted
    assert!(matches!(session.step(), Err(TimePlotError::Halted)));
    assert_eq!(calls.get(), 3);
}

#[test]
fn frame_limit_stops_the_loop() {
    let calls = Rc::new(Cell::new(0));
    let cfg = TimePlotConfig {
        frame_limit: Some(5),
        retention: RetentionPolicy::Capped(3),
        ..fast_cfg()
    };
    let mut session = Session::new(scripted(calls.clone(), 0), &cfg).unwrap();
    let mut seen = Vec::new();
    session
        .run_blocking(|render| seen.push(render.lines[0].points.len()))
        .unwrap();

    assert_eq!(seen, vec![1, 2, 3, 3, 3]);
    assert_eq!(calls.get(), 5);
    assert_eq!(session.state(), SessionState::Finished);
    assert_eq!(session.step().unwrap(), StepOutcome::Finished);
    assert_eq!(calls.get(), 5);
}

#[test]
fn step_if_due_respects_interval() {
    let calls = Rc::new(Cell::new(0));
    let cfg = TimePlotConfig {
        interval: Duration::from_secs(3_600),
        ..Default::default()
    };
    let mut session = Session::new(scripted(calls.clone(), 0), &cfg).unwrap();

    let now = Instant::now();
    assert_eq!(session.time_until_due(now), Duration::ZERO);
    assert_eq!(session.step_if_due(now).unwrap(), Some(StepOutcome::Advanced));
    // the next tick is an hour away
    assert_eq!(session.step_if_due(Instant::now()).unwrap(), None);
    assert!(session.time_until_due(Instant::now()) > Duration::from_secs(3_000));
    assert_eq!(calls.get(), 1);
}

#[test]
fn closures_and_trait_objects_are_sources() {
    let mut boxed: Box<dyn timeplot::TickSource> = Box::new(|| -> Result<Tick, SourceError> {
        Ok(Tick::new(t0(), vec![1.0, 2.0]))
    });
    let tick = boxed.next_tick().unwrap();
    assert_eq!(tick.arity(), 2);
}
