/*!
The `tick` command, a console clock.

This prints a banner and then the current time of day once per interval. With
no `--count`, it runs until interrupted.
*/

use std::io::Write;

use anyhow::Context;
use lexopt::{Arg, Parser};
use wallclock::{
    civil::TimeOfDay,
    clock::{Clock, ClockSource, SteppingClock, SystemClock},
    Duration,
};

use crate::args::{self, Usage};

const USAGE: &'static str = r#"
Print the current time of day at a fixed interval.

The first line printed is always "Clock App". After that, one line of the form
"Current Time: HH:MM:SS" is printed for every tick. The first tick happens
immediately and each one after that waits for the interval (one second by
default). The time of day is read from the system clock in UTC.

USAGE:
    wallclock tick [-c <count>] [-i <interval>] [--elapsed] [--start <time>]

EXAMPLES:
    $ wallclock tick --count 3 --start 23:59:59
    Clock App
    Current Time: 23:59:59
    Current Time: 00:00:00
    Current Time: 00:00:01
"#;

pub fn run(p: &mut Parser) -> anyhow::Result<()> {
    let mut common = args::Common::default();
    let mut config = Config::default();
    args::configure(p, USAGE, &mut [&mut common, &mut config])?;
    common.init_logging()?;

    config.write_ticks(std::io::stdout().lock())
}

#[derive(Debug)]
struct Config {
    count: Option<u64>,
    interval: Duration,
    elapsed: bool,
    start: Option<TimeOfDay>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            count: None,
            interval: Duration::from_secs_signed(1),
            elapsed: false,
            start: None,
        }
    }
}

impl Config {
    /// Writes the banner and then one line per tick to `out`.
    fn write_ticks<W: Write>(&self, mut out: W) -> anyhow::Result<()> {
        let system = SystemClock::new();
        let stepping;
        let source: &dyn ClockSource = match self.start {
            None => &system,
            Some(start) => {
                stepping = SteppingClock::new(start, self.interval);
                &stepping
            }
        };
        let mut clock = Clock::new(source)
            .interval(self.interval)
            .context("invalid tick interval")?;
        if let Some(count) = self.count {
            clock = clock.limit(count);
        }

        writeln!(out, "Clock App")?;
        for tick in clock.ticks() {
            if self.elapsed {
                writeln!(
                    out,
                    "Current Time: {} (elapsed {})",
                    tick.time(),
                    tick.elapsed()
                )?;
            } else {
                writeln!(out, "Current Time: {}", tick.time())?;
            }
            out.flush()?;
        }
        Ok(())
    }
}

impl args::Configurable for Config {
    fn configure(
        &mut self,
        p: &mut Parser,
        arg: &mut Arg,
    ) -> anyhow::Result<bool> {
        match *arg {
            Arg::Short('c') | Arg::Long("count") => {
                self.count = Some(args::parse(p.value()?, "-c/--count")?);
            }
            Arg::Short('i') | Arg::Long("interval") => {
                self.interval = args::parse(p.value()?, "-i/--interval")?;
            }
            Arg::Short('e') | Arg::Long("elapsed") => {
                self.elapsed = true;
            }
            Arg::Long("start") => {
                self.start = Some(args::parse(p.value()?, "--start")?);
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn usage(&self) -> &[Usage] {
        const USAGES: &'static [Usage] = &[
            Usage::new(
                "-c, --count <n>",
                "Stop after this many ticks.",
                r#"
Stop after printing this many ticks. By default, the clock ticks until the
process is interrupted.
"#,
            ),
            Usage::new(
                "-i, --interval <duration>",
                "Time to wait between ticks.",
                r#"
The time to wait between two ticks, written as HH:MM:SS. The default is
00:00:01. An interval of 00:00:00 means the clock never waits.
"#,
            ),
            Usage::new(
                "-e, --elapsed",
                "Print the time elapsed since the first tick.",
                r#"
Print the time elapsed since the first tick next to every reading. This is the
plain difference between the two times of day, so it becomes negative once
the clock passes midnight.
"#,
            ),
            Usage::new(
                "--start <time>",
                "Simulate a clock starting at this time.",
                r#"
Instead of reading the system clock, simulate a clock that starts at the given
time of day and moves forward by the interval on every tick. A simulated clock
never waits, which makes this useful for trying out the output.
"#,
            ),
        ];
        USAGES
    }
}
