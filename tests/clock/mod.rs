use wallclock::{
    civil::TimeOfDay,
    clock::{Clock, ClockSource, SteppingClock, SystemClock},
    Duration,
};

use crate::Result;

/// Renders ticks the way the command line tool prints them.
fn render<S: ClockSource>(clock: &Clock<S>) -> String {
    let mut out = String::from("Clock App\n");
    for tick in clock.ticks() {
        out.push_str(&format!("Current Time: {}\n", tick.time()));
    }
    out.truncate(out.trim_end().len());
    out
}

#[test]
fn console_output() -> Result {
    let _ = crate::Logger::init();

    let source =
        SteppingClock::new(TimeOfDay::new(23, 59, 58)?, Duration::from_secs(1)?);
    let clock = Clock::new(source).limit(4);
    insta::assert_snapshot!(render(&clock), @r"
    Clock App
    Current Time: 23:59:58
    Current Time: 23:59:59
    Current Time: 00:00:00
    Current Time: 00:00:01
    ");
    Ok(())
}

#[test]
fn elapsed_per_tick() -> Result {
    let source =
        SteppingClock::new(TimeOfDay::new(10, 0, 0)?, Duration::new(0, 20, 0)?);
    let clock = Clock::new(source).limit(4);
    let elapsed: Vec<String> =
        clock.ticks().map(|t| t.elapsed().to_string()).collect();
    assert_eq!(elapsed, ["00:00:00", "00:20:00", "00:40:00", "01:00:00"]);
    assert_eq!(clock.started(), Some(TimeOfDay::new(10, 0, 0)?));
    Ok(())
}

#[test]
fn system_clock_ticks_without_waiting() -> Result {
    let clock =
        Clock::new(SystemClock::new()).interval(Duration::ZERO)?.limit(3);
    let ticks: Vec<_> = clock.ticks().collect();
    assert_eq!(ticks.len(), 3);
    for (i, tick) in ticks.iter().enumerate() {
        assert_eq!(tick.number(), i as u64);
        assert!(tick.time().hour() < 24);
    }
    Ok(())
}

#[test]
fn now_round_trips_through_text() -> Result {
    let now = TimeOfDay::now();
    assert_eq!(now.to_string().parse::<TimeOfDay>()?, now);
    Ok(())
}
