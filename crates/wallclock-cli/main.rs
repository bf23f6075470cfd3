use std::io::Write;

mod args;
mod cmd;
mod logger;

fn main() -> std::process::ExitCode {
    let mut p = lexopt::Parser::from_env();
    let Err(err) = cmd::run(&mut p) else {
        return std::process::ExitCode::SUCCESS;
    };
    // A broken pipe usually means the consumer of `wallclock tick` went
    // away, e.g., `wallclock tick | head -n3`. That's a normal way to stop.
    for cause in err.chain() {
        if let Some(ioerr) = cause.downcast_ref::<std::io::Error>() {
            if ioerr.kind() == std::io::ErrorKind::BrokenPipe {
                return std::process::ExitCode::SUCCESS;
            }
        }
    }
    let _ = writeln!(std::io::stderr(), "{:#}", err);
    std::process::ExitCode::FAILURE
}
