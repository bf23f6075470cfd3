use std::fmt::Write;

use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};

/// A type that can be configured from command line arguments.
///
/// Every command has one or more of these. `configure` is given every
/// argument in turn and returns `true` when it consumed it.
pub trait Configurable: std::fmt::Debug {
    fn configure(
        &mut self,
        p: &mut Parser,
        arg: &mut Arg,
    ) -> anyhow::Result<bool>;

    fn usage(&self) -> &[Usage];
}

/// Parse all remaining arguments into the given targets.
///
/// If `-h` or `--help` is seen, then the usage (including the flag docs of
/// every target) is printed to stdout and the process exits.
pub fn configure(
    p: &mut Parser,
    usage: &str,
    targets: &mut [&mut dyn Configurable],
) -> anyhow::Result<()> {
    while let Some(arg) = p.next()? {
        // A long flag borrows the parser, but the targets need the parser
        // too in order to read flag values. So own the flag name.
        let long_name;
        let mut arg = match arg {
            Arg::Long(name) => {
                long_name = name.to_string();
                Arg::Long(&long_name)
            }
            Arg::Short(c) => Arg::Short(c),
            Arg::Value(value) => Arg::Value(value),
        };
        if let Arg::Short('h') | Arg::Long("help") = arg {
            let long = arg == Arg::Long("help");
            let usages: Vec<&Usage> =
                targets.iter().flat_map(|t| t.usage()).collect();
            println!("{}", render(usage, &usages, long));
            std::process::exit(0);
        }
        let mut recognized = false;
        for t in targets.iter_mut() {
            if t.configure(p, &mut arg)? {
                recognized = true;
                break;
            }
        }
        if !recognized {
            return Err(arg.unexpected().into());
        }
    }
    Ok(())
}

/// Parse the next argument as a sub-command name.
///
/// When there are no more arguments, the usage is returned as an error.
pub fn next_as_command(usage: &str, p: &mut Parser) -> anyhow::Result<String> {
    let usage = usage.trim();
    let arg = match p.next()? {
        Some(arg) => arg,
        None => anyhow::bail!("{}", usage),
    };
    let cmd = match arg {
        Arg::Value(cmd) => cmd.string()?,
        Arg::Short('h') | Arg::Long("help") => {
            println!("{}", usage);
            std::process::exit(0);
        }
        arg => return Err(arg.unexpected().into()),
    };
    Ok(cmd)
}

/// Parse the value of a flag or positional argument with `FromStr`.
///
/// The name is used as context when the value is invalid.
pub fn parse<T>(value: std::ffi::OsString, name: &str) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = value.string().with_context(|| name.to_string())?;
    value.parse().with_context(|| format!("invalid {name} '{value}'"))
}

/// The documentation for a single flag.
#[derive(Clone, Copy, Debug)]
pub struct Usage {
    /// The flag itself, e.g., `-c, --count <N>`.
    pub format: &'static str,
    /// A one line description.
    pub short: &'static str,
    /// A longer description shown with `--help`.
    pub long: &'static str,
}

impl Usage {
    pub const fn new(
        format: &'static str,
        short: &'static str,
        long: &'static str,
    ) -> Usage {
        Usage { format, short, long }
    }
}

/// Renders the usage text of a command followed by the docs of its flags.
fn render(usage: &str, flags: &[&Usage], long: bool) -> String {
    let mut out = String::from(usage.trim());
    if flags.is_empty() {
        return out;
    }
    out.push_str("\n\nOPTIONS:\n");
    for flag in flags {
        if long {
            // Writing to a `String` never fails.
            let _ = writeln!(out, "    {}", flag.format);
            for line in flag.long.trim().lines() {
                let _ = writeln!(out, "        {line}");
            }
            out.push('\n');
        } else {
            let _ = writeln!(out, "    {:<24} {}", flag.format, flag.short);
        }
    }
    out.truncate(out.trim_end().len());
    out
}

/// Flags that every command accepts.
#[derive(Debug, Default)]
pub struct Common {
    verbosity: u8,
}

impl Common {
    /// Install a stderr logger if any `-v` flags were given.
    ///
    /// One `-v` shows debug messages, two or more show trace messages.
    pub fn init_logging(&self) -> anyhow::Result<()> {
        let level = match self.verbosity {
            0 => return Ok(()),
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };
        crate::logger::Logger::init(level)
            .context("failed to initialize logger")?;
        log::debug!("logging enabled at level {level}");
        Ok(())
    }
}

impl Configurable for Common {
    fn configure(
        &mut self,
        _: &mut Parser,
        arg: &mut Arg,
    ) -> anyhow::Result<bool> {
        match *arg {
            Arg::Short('v') | Arg::Long("verbose") => {
                self.verbosity = self.verbosity.saturating_add(1);
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn usage(&self) -> &[Usage] {
        const USAGES: &'static [Usage] = &[Usage::new(
            "-v, --verbose",
            "Log what wallclock is doing to stderr.",
            r#"
Log what wallclock is doing to stderr. Give this flag once to see debug
messages (for example, one per clock tick) and twice to see trace messages
(for example, every read of the underlying clock).
"#,
        )];
        USAGES
    }
}
