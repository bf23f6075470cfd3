use anyhow::Context;
use lexopt::{Arg, Parser};
use wallclock::Duration;

use crate::args::{self, Usage};

const USAGE: &'static str = r#"
Add up one or more durations and print the total.

The total is not wrapped, so it may be longer than a day.

USAGE:
    wallclock sum <duration> ...

EXAMPLES:
    $ wallclock sum 1:30:00 0:45:30
    02:15:30
    $ wallclock sum 20:00:00 20:00:00
    40:00:00
"#;

pub fn run(p: &mut Parser) -> anyhow::Result<()> {
    let mut common = args::Common::default();
    let mut config = Config::default();
    args::configure(p, USAGE, &mut [&mut common, &mut config])?;
    common.init_logging()?;

    println!("{}", config.total()?);
    Ok(())
}

#[derive(Debug, Default)]
struct Config {
    spans: Vec<Duration>,
}

impl Config {
    fn total(&self) -> anyhow::Result<Duration> {
        anyhow::ensure!(!self.spans.is_empty(), "missing durations to sum");
        let mut total = Duration::ZERO;
        for (i, &span) in self.spans.iter().enumerate() {
            total = total.checked_add(span).with_context(|| {
                format!("failed to add duration #{} ({span}) to total", i + 1)
            })?;
            log::trace!("running total after {span} is {total}");
        }
        Ok(total)
    }
}

impl args::Configurable for Config {
    fn configure(
        &mut self,
        _: &mut Parser,
        arg: &mut Arg,
    ) -> anyhow::Result<bool> {
        match *arg {
            Arg::Value(ref mut value) => {
                let value = std::mem::take(value);
                self.spans.push(args::parse(value, "duration")?);
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn usage(&self) -> &[Usage] {
        &[]
    }
}
