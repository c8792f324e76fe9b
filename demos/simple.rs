//! Example: a single sine line with default styling
//!
//! What it demonstrates
//! - Plotting ticks from a closure with `timeplot()`.
//! - Simulated timestamps advancing one second per tick, shown in `cont` mode.
//!
//! How to run
//! ```bash
//! cargo run --example simple
//! ```
//! Pass `jump` as first argument to see the stepping time axis instead.

use std::time::Duration;

use chrono::{DateTime, TimeDelta};
use timeplot::{timeplot, Tick, TimePlotConfig, TimePlotError, UpdateStyle};

fn main() -> Result<(), TimePlotError> {
    env_logger::init();

    let update_style: UpdateStyle = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => UpdateStyle::Cont,
    };

    let mut t = DateTime::from_timestamp(1_521_482_712, 0)
        .unwrap_or_default()
        .naive_utc();
    let mut i = 0.0_f64;

    let cfg = TimePlotConfig {
        interval: Duration::from_millis(40),
        update_style,
        ..Default::default()
    };

    timeplot(
        move || {
            t += TimeDelta::seconds(1);
            i += 0.1;
            Ok(Tick::new(t, vec![i.sin()]))
        },
        cfg,
    )
}
