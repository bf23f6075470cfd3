use anyhow::Context;
use lexopt::{Arg, Parser};
use wallclock::{civil::TimeOfDay, Duration};

use crate::args::{self, Usage};

const USAGE: &'static str = r#"
Add a duration to a time of day.

The result wraps around midnight, so adding 00:00:02 to 23:59:59 prints
00:00:01. Durations longer than a day are allowed.

USAGE:
    wallclock add <time> <duration>

EXAMPLES:
    $ wallclock add 10:30:00 2:15:30
    12:45:30
    $ wallclock add --subtract 00:15:00 00:30:00
    23:45:00
"#;

pub fn run(p: &mut Parser) -> anyhow::Result<()> {
    let mut common = args::Common::default();
    let mut config = Config::default();
    args::configure(p, USAGE, &mut [&mut common, &mut config])?;
    common.init_logging()?;

    println!("{}", config.result()?);
    Ok(())
}

#[derive(Debug, Default)]
struct Config {
    time: Option<TimeOfDay>,
    span: Option<Duration>,
    subtract: bool,
}

impl Config {
    fn time(&self) -> anyhow::Result<TimeOfDay> {
        self.time.context("missing time of day")
    }

    fn span(&self) -> anyhow::Result<Duration> {
        self.span.context("missing duration")
    }

    fn result(&self) -> anyhow::Result<TimeOfDay> {
        let (time, span) = (self.time()?, self.span()?);
        let result =
            if self.subtract { time.wrapping_sub(span) } else { time + span };
        log::debug!(
            "{time} {op} {span} = {result}",
            op = if self.subtract { "-" } else { "+" },
        );
        Ok(result)
    }
}

impl args::Configurable for Config {
    fn configure(
        &mut self,
        _: &mut Parser,
        arg: &mut Arg,
    ) -> anyhow::Result<bool> {
        match *arg {
            Arg::Short('s') | Arg::Long("subtract") => {
                self.subtract = true;
            }
            Arg::Value(ref mut value) => {
                let value = std::mem::take(value);
                if self.time.is_none() {
                    self.time = Some(args::parse(value, "time of day")?);
                } else if self.span.is_none() {
                    self.span = Some(args::parse(value, "duration")?);
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
            "-s, --subtract",
            "Subtract the duration instead of adding it.",
            r#"
Subtract the duration from the time of day instead of adding it. The result
still wraps around midnight.
"#,
        )];
        USAGES
    }
}
