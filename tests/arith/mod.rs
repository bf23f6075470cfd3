use wallclock::{civil::TimeOfDay, Duration};

use crate::Result;

#[test]
fn add_within_day() -> Result {
    let t = TimeOfDay::new(10, 30, 0)?;
    let span = Duration::new(2, 15, 30)?;
    insta::assert_snapshot!(t + span, @"12:45:30");
    Ok(())
}

#[test]
fn add_wraps_past_midnight() -> Result {
    let t = TimeOfDay::new(23, 59, 59)?;
    let span = Duration::new(0, 0, 2)?;
    assert_eq!(t + span, TimeOfDay::new(0, 0, 1)?);
    insta::assert_snapshot!(t + span, @"00:00:01");
    Ok(())
}

#[test]
fn add_many_days() -> Result {
    let t = TimeOfDay::new(8, 0, 0)?;
    let span = Duration::new(24 * 365, 0, 1)?;
    insta::assert_snapshot!(t + span, @"08:00:01");
    Ok(())
}

#[test]
fn sub_wraps_before_midnight() -> Result {
    let t = TimeOfDay::new(0, 15, 0)?;
    let span = Duration::new(0, 30, 0)?;
    insta::assert_snapshot!(t - span, @"23:45:00");
    Ok(())
}

#[test]
fn add_durations() -> Result {
    let span1 = Duration::new(1, 30, 0)?;
    let span2 = Duration::new(0, 45, 30)?;
    assert_eq!(span1 + span2, Duration::new(2, 15, 30)?);
    insta::assert_snapshot!(span1.checked_add(span2)?, @"02:15:30");
    Ok(())
}

#[test]
fn between_crosses_midnight() -> Result {
    let start = TimeOfDay::new(22, 0, 0)?;
    let end = TimeOfDay::new(1, 0, 0)?;
    let span = Duration::between(start, end);
    assert_eq!(span.as_secs(), -75_600);
    insta::assert_snapshot!(span, @"-21:00:00");
    insta::assert_snapshot!(end - start, @"-21:00:00");
    insta::assert_snapshot!(start.until(end), @"-21:00:00");
    insta::assert_snapshot!(start.since(end), @"21:00:00");
    Ok(())
}

#[test]
fn between_then_add_round_trips() -> Result {
    let start = TimeOfDay::new(22, 0, 0)?;
    let end = TimeOfDay::new(1, 0, 0)?;
    assert_eq!(start + Duration::between(start, end), end);
    Ok(())
}

#[test]
fn overflow_errors() -> Result {
    let one = Duration::from_secs(1)?;
    let err = Duration::MAX.checked_add(one).unwrap_err();
    assert!(err.is_overflow());
    insta::assert_snapshot!(err, @"adding durations overflowed 64-bit seconds");

    let err = Duration::MIN.checked_sub(one).unwrap_err();
    assert!(err.is_overflow());
    insta::assert_snapshot!(
        err,
        @"subtracting durations overflowed 64-bit seconds",
    );

    let err = Duration::new(i64::MAX, 0, 0).unwrap_err();
    assert!(err.is_invalid_value());
    insta::assert_snapshot!(
        err,
        @"duration components add up to more seconds than fit into a 64-bit integer",
    );
    Ok(())
}

#[test]
fn ordering() -> Result {
    let mut times = vec![
        TimeOfDay::new(12, 0, 0)?,
        TimeOfDay::new(0, 0, 1)?,
        TimeOfDay::new(23, 59, 59)?,
        TimeOfDay::new(11, 59, 59)?,
        TimeOfDay::new(0, 0, 0)?,
    ];
    times.sort();
    let got: Vec<String> = times.iter().map(|t| t.to_string()).collect();
    assert_eq!(
        got,
        ["00:00:00", "00:00:01", "11:59:59", "12:00:00", "23:59:59"],
    );

    let mut spans = vec![
        Duration::from_secs_signed(-5),
        Duration::new(1, 0, 0)?,
        Duration::ZERO,
        Duration::new(0, 59, 59)?,
    ];
    spans.sort();
    let got: Vec<String> = spans.iter().map(|s| s.to_string()).collect();
    assert_eq!(got, ["-00:00:05", "00:00:00", "00:59:59", "01:00:00"]);
    Ok(())
}
