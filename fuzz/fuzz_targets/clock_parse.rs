#![no_main]

use std::borrow::Cow;

use libfuzzer_sys::fuzz_target;

use wallclock::fmt::clock::{ClockParser, ClockPrinter};

const PARSER: ClockParser = ClockParser::new();
const PRINTER: ClockPrinter = ClockPrinter::new();

/// Reports a printed value that failed to parse back.
fn reparse_failed(
    err: wallclock::Error,
    printed: &[u8],
    first: &dyn std::fmt::Debug,
) -> ! {
    let printed_str = String::from_utf8_lossy(printed);
    panic!(
        "should be able to parse a printed value; \
         failed with `{err}` at: `{printed_str}`{}, \
         corresponding to {first:?}",
        if matches!(printed_str, Cow::Owned(_)) {
            Cow::from(format!(" (lossy; actual bytes: {printed:?})"))
        } else {
            Cow::from("")
        }
    );
}

fn fuzz_time_of_day(data: &[u8]) {
    let Ok(first) = PARSER.parse_time_of_day(data) else { return };
    let mut printed = Vec::with_capacity(8);
    PRINTER
        .print_time_of_day(&first, &mut printed)
        .expect("We parsed it, so we should be able to print it");
    assert_eq!(printed.len(), 8, "time of day prints as HH:MM:SS");
    match PARSER.parse_time_of_day(&printed) {
        Ok(second) => assert_eq!(
            first, second,
            "expected the initially parsed value \
             to be equal to the value after printing and re-parsing",
        ),
        Err(err) => reparse_failed(err, &printed, &first),
    }
}

fn fuzz_duration(data: &[u8]) {
    let Ok(first) = PARSER.parse_duration(data) else { return };
    assert!(!first.is_negative(), "parsed durations are never negative");
    let mut printed = Vec::with_capacity(9);
    PRINTER
        .print_duration(&first, &mut printed)
        .expect("We parsed it, so we should be able to print it");
    match PARSER.parse_duration(&printed) {
        Ok(second) => assert_eq!(
            first, second,
            "expected the initially parsed value \
             to be equal to the value after printing and re-parsing",
        ),
        Err(err) => reparse_failed(err, &printed, &first),
    }
}

fuzz_target!(|data: &[u8]| {
    fuzz_time_of_day(data);
    fuzz_duration(data);
});
