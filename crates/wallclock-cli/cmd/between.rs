use anyhow::Context;
use lexopt::{Arg, Parser};
use wallclock::{civil::TimeOfDay, Duration};

use crate::args::{self, Usage};

const USAGE: &'static str = r#"
Print the duration from one time of day to another.

Both times are taken to be on the same day, so the duration is negative when
the end is earlier than the start. For example, from 22:00:00 to 01:00:00 is
-21:00:00. Use --forward to get the distance going forward across midnight
instead (03:00:00 in this example).

USAGE:
    wallclock between <start> <end>
"#;

pub fn run(p: &mut Parser) -> anyhow::Result<()> {
    let mut common = args::Common::default();
    let mut config = Config::default();
    args::configure(p, USAGE, &mut [&mut common, &mut config])?;
    common.init_logging()?;

    println!("{}", config.span()?);
    Ok(())
}

#[derive(Debug, Default)]
struct Config {
    start: Option<TimeOfDay>,
    end: Option<TimeOfDay>,
    forward: bool,
}

impl Config {
    fn start(&self) -> anyhow::Result<TimeOfDay> {
        self.start.context("missing start time")
    }

    fn end(&self) -> anyhow::Result<TimeOfDay> {
        self.end.context("missing end time")
    }

    fn span(&self) -> anyhow::Result<Duration> {
        let (start, end) = (self.start()?, self.end()?);
        let mut span = Duration::between(start, end);
        if self.forward && span.is_negative() {
            // A day is always enough to make a same day difference positive.
            span = span.checked_add(Duration::new(24, 0, 0)?)?;
        }
        log::debug!("from {start} to {end} is {} seconds", span.as_secs());
        Ok(span)
    }
}

impl args::Configurable for Config {
    fn configure(
        &mut self,
        _: &mut Parser,
        arg: &mut Arg,
    ) -> anyhow::Result<bool> {
        match *arg {
            Arg::Short('f') | Arg::Long("forward") => {
                self.forward = true;
            }
            Arg::Value(ref mut value) => {
                let value = std::mem::take(value);
                if self.start.is_none() {
                    self.start = Some(args::parse(value, "start time")?);
                } else if self.end.is_none() {
                    self.end = Some(args::parse(value, "end time")?);
                } else {
                    return Ok(false);
                }
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn usage(&self) -> &[Usage] {
        const USAGES: &'static [Usage] = &[Usage::new(
            "-f, --forward",
            "Measure forward across midnight.",
            r#"
When the end time is earlier in the day than the start time, measure the
duration going forward across midnight instead of printing a negative
duration. The result is always in the range 00:00:00 to 23:59:59.
"#,
        )];
        USAGES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn between(argv: &[&str]) -> anyhow::Result<Duration> {
        let mut p = Parser::from_args(argv.iter().copied());
        let mut config = Config::default();
        args::configure(&mut p, USAGE, &mut [&mut config])?;
        config.span()
    }

    #[test]
    fn same_day_difference() {
        let got = between(&["22:00:00", "01:00:00"]).unwrap();
        assert_eq!(got.to_string(), "-21:00:00");
        let got = between(&["01:00:00", "22:00:00"]).unwrap();
        assert_eq!(got.to_string(), "21:00:00");
    }

    #[test]
    fn forward_across_midnight() {
        let got = between(&["--forward", "22:00:00", "01:00:00"]).unwrap();
        assert_eq!(got.to_string(), "03:00:00");
        let got = between(&["-f", "01:00:00", "22:00:00"]).unwrap();
        assert_eq!(got.to_string(), "21:00:00");
        let got = between(&["-f", "12:00:00", "12:00:00"]).unwrap();
        assert_eq!(got.to_string(), "00:00:00");
    }

    #[test]
    fn missing_end() {
        let err = between(&["-f", "22:00:00"]).unwrap_err();
        assert_eq!(err.to_string(), "missing end time");
    }
}
