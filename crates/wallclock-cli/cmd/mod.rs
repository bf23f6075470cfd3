mod add;
mod between;
mod sum;
mod tick;

const USAGE: &'static str = "\
A tool for reading, adding and comparing wall clock times.

Times of day and durations are both written as HH:MM:SS.

USAGE:
    wallclock <command> ...

COMMANDS:
    add           Add a duration to a time of day, wrapping around midnight
    between       Print the duration between two times of day
    sum           Add up one or more durations
    tick          Print the current time of day at a fixed interval
";

pub fn run(p: &mut lexopt::Parser) -> anyhow::Result<()> {
    let cmd = crate::args::next_as_command(USAGE, p)?;
    match &*cmd {
        "add" => add::run(p),
        "between" => between::run(p),
        "sum" => sum::run(p),
        "tick" => tick::run(p),
        unk => anyhow::bail!("unrecognized command '{}'", unk),
    }
}
