use wallclock::{civil::TimeOfDay, Duration};

use crate::Result;

#[test]
fn time_of_day_ok() -> Result {
    assert_eq!("10:30:45".parse::<TimeOfDay>()?, TimeOfDay::new(10, 30, 45)?);
    assert_eq!("1:2:3".parse::<TimeOfDay>()?, TimeOfDay::new(1, 2, 3)?);
    assert_eq!(TimeOfDay::parse(b"23:59:59")?, TimeOfDay::MAX);
    Ok(())
}

#[test]
fn time_of_day_wrong_number_of_components() {
    let err = "10:3045".parse::<TimeOfDay>().unwrap_err();
    assert!(err.is_invalid_format());
    insta::assert_snapshot!(
        err,
        @"failed to parse time of day: expected three ':' separated components, but found 2",
    );

    let err = "1:2:3:4".parse::<TimeOfDay>().unwrap_err();
    assert!(err.is_invalid_format());
    insta::assert_snapshot!(
        err,
        @"failed to parse time of day: expected three ':' separated components, but found 4",
    );
}

#[test]
fn time_of_day_bad_digits() {
    let err = "aa:00:00".parse::<TimeOfDay>().unwrap_err();
    assert!(err.is_invalid_format());
    insta::assert_snapshot!(
        err,
        @"failed to parse time of day: invalid hour component: invalid digit, expected 0-9 but got a",
    );

    let err = "00:\u{1F600}:00".parse::<TimeOfDay>().unwrap_err();
    assert!(err.is_invalid_format());
    insta::assert_snapshot!(
        err,
        @r"failed to parse time of day: invalid minute component: invalid digit, expected 0-9 but got \xF0",
    );
}

#[test]
fn time_of_day_out_of_range() {
    let err = "24:00:00".parse::<TimeOfDay>().unwrap_err();
    assert!(err.is_invalid_value());
    insta::assert_snapshot!(
        err,
        @"failed to parse time of day: invalid hour component: parameter 'hour' is not in the required range of 0..=23",
    );

    let err = "00:60:00".parse::<TimeOfDay>().unwrap_err();
    assert!(err.is_invalid_value());
    insta::assert_snapshot!(
        err,
        @"failed to parse time of day: invalid minute component: parameter 'minute' is not in the required range of 0..=59",
    );

    let err = TimeOfDay::new(0, 0, 60).unwrap_err();
    assert!(err.is_invalid_value());
    insta::assert_snapshot!(
        err,
        @"parameter 'second' is not in the required range of 0..=59",
    );
}

#[test]
fn duration_ok() -> Result {
    assert_eq!("02:15:30".parse::<Duration>()?, Duration::new(2, 15, 30)?);
    assert_eq!("100:00:00".parse::<Duration>()?.as_secs(), 360_000);
    assert_eq!("+1:+1:+1".parse::<Duration>()?.as_secs(), 3_661);
    Ok(())
}

#[test]
fn duration_negative_component() {
    let err = "01:-5:00".parse::<Duration>().unwrap_err();
    assert!(err.is_invalid_value());
    assert!(!err.is_invalid_format());
    insta::assert_snapshot!(
        err,
        @"failed to parse duration: duration component 'minutes' with value -5 must not be negative",
    );
}

#[test]
fn duration_bad_format() {
    let err = "01:05".parse::<Duration>().unwrap_err();
    assert!(err.is_invalid_format());
    insta::assert_snapshot!(
        err,
        @"failed to parse duration: expected three ':' separated components, but found 2",
    );

    let err = "99999999999999999999:00:00".parse::<Duration>().unwrap_err();
    assert!(err.is_invalid_format());
    insta::assert_snapshot!(
        err,
        @"failed to parse duration: invalid hours component: number too big to parse into 64-bit integer",
    );
}

#[test]
fn debug_shows_error_structure() {
    let err = "24:00:00".parse::<TimeOfDay>().unwrap_err();
    let debug = format!("{err:#?}");
    assert!(debug.contains("Bounds"), "{debug}");
    assert!(debug.contains("ParseTimeOfDay"), "{debug}");
}
