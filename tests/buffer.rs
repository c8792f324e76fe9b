use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use timeplot::data::buffer::SeriesBuffer;
use timeplot::{RetentionPolicy, Tick, TimePlotError};

fn t0() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2018, 3, 19)
        .unwrap()
        .and_hms_opt(18, 5, 12)
        .unwrap()
}

fn tick(secs: i64, values: &[f64]) -> Tick {
    Tick::new(t0() + TimeDelta::seconds(secs), values.to_vec())
}

fn period() -> TimeDelta {
    TimeDelta::seconds(300)
}

fn assert_aligned(buf: &SeriesBuffer) {
    assert_eq!(buf.columns().len(), buf.series_count());
    for col in buf.columns() {
        assert_eq!(col.len(), buf.len(), "column out of step with timestamps");
    }
}

#[test]
fn unbounded_keeps_every_tick() {
    let mut buf = SeriesBuffer::new(2, RetentionPolicy::Unbounded);
    for i in 0..1_000 {
        buf.push(&tick(i, &[i as f64, -(i as f64)]), period()).unwrap();
        assert_eq!(buf.len(), (i + 1) as usize);
        assert_aligned(&buf);
    }
}

#[test]
fn capped_keeps_most_recent_k() {
    let mut buf = SeriesBuffer::new(3, RetentionPolicy::Capped(4));
    for i in 0..10 {
        buf.push(&tick(i, &[1.0, 2.0, 3.0]), period()).unwrap();
        assert_eq!(buf.len(), ((i + 1) as usize).min(4));
        assert_aligned(&buf);
    }
    let first = *buf.timestamps().front().unwrap();
    assert_eq!(first, t0() + TimeDelta::seconds(6));
}

#[test]
fn period_keeps_one_tick_before_cutoff() {
    let mut buf = SeriesBuffer::new(1, RetentionPolicy::Period);
    for i in 0..=400 {
        buf.push(&tick(i, &[i as f64]), period()).unwrap();
    }
    // cutoff is t0+100s; t0+99s is kept as the single tick left of it
    assert_eq!(*buf.timestamps().front().unwrap(), t0() + TimeDelta::seconds(99));
    assert_eq!(buf.len(), 302);
    assert_aligned(&buf);
}

#[test]
fn arity_mismatch_is_rejected_without_mutation() {
    let mut buf = SeriesBuffer::new(2, RetentionPolicy::Unbounded);
    buf.push(&tick(0, &[1.0, 2.0]), period()).unwrap();
    let err = buf.push(&tick(1, &[1.0]), period()).unwrap_err();
    assert!(matches!(
        err,
        TimePlotError::ArityMismatch {
            expected: 2,
            found: 1
        }
    ));
    assert_eq!(buf.len(), 1);
    assert_aligned(&buf);
}

#[test]
fn latest_and_rows_reassemble_ticks() {
    let mut buf = SeriesBuffer::new(2, RetentionPolicy::Unbounded);
    buf.push(&tick(0, &[0.0, 10.0]), period()).unwrap();
    buf.push(&tick(1, &[1.0, 11.0]), period()).unwrap();
    assert_eq!(buf.latest(), Some(tick(1, &[1.0, 11.0])));
    let rows: Vec<_> = buf.rows().collect();
    assert_eq!(rows[0], (t0(), vec![0.0, 10.0]));
    assert_eq!(rows.len(), 2);
    let second: Vec<f64> = buf.column(1).unwrap().iter().copied().collect();
    assert_eq!(second, vec![10.0, 11.0]);
    assert!(buf.column(2).is_none());
}

#[test]
fn period_near_earliest_date_keeps_everything() {
    let mut buf = SeriesBuffer::new(1, RetentionPolicy::Period);
    let start = NaiveDateTime::MIN;
    for i in 0..3 {
        let t = Tick::new(start + TimeDelta::seconds(i), vec![i as f64]);
        buf.push(&t, period()).unwrap();
    }
    assert_eq!(buf.len(), 3);
    assert_eq!(*buf.timestamps().front().unwrap(), start);
}
