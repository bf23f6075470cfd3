/*!
Wallclock is a small library for working with the time of day as it appears
on a wall clock, along with durations measured in seconds.

The two central types are:

* [`civil::TimeOfDay`] is a point within a 24 hour cycle, with hour, minute
and second components. It has no date and no time zone.
* [`Duration`] is a signed span of time stored as a total number of seconds.

Adding a duration to a time of day wraps around midnight, in the same way
that the hands of a clock do. Adding or subtracting durations produces another
duration. Both types have a canonical `HH:MM:SS` text form that they can be
parsed from and printed to.

When the `std` feature is enabled (it is by default), the [`clock`] module
provides a small driver that reads the current time of day from a clock
source once per tick.

# Example

This shows how to add a duration to a time of day:

```
use wallclock::{civil::TimeOfDay, Duration};

let start = TimeOfDay::new(10, 30, 0)?;
let span = Duration::new(2, 15, 30)?;
assert_eq!(start.wrapping_add(span), TimeOfDay::new(12, 45, 30)?);
assert_eq!((start + span).to_string(), "12:45:30");

# Ok::<(), Box<dyn std::error::Error>>(())
```

And this shows the wrap-around behavior at midnight:

```
use wallclock::{civil::TimeOfDay, Duration};

let t: TimeOfDay = "23:59:59".parse()?;
assert_eq!(t + Duration::from_secs(2)?, TimeOfDay::constant(0, 0, 1));

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Parsing

Both types parse from a string with exactly three `:` separated components,
where each component is a non-empty sequence of ASCII digits. Errors
distinguish between input with the wrong shape and input whose numbers are
out of range:

```
use wallclock::{civil::TimeOfDay, Duration};

assert!("10:3045".parse::<TimeOfDay>().unwrap_err().is_invalid_format());
assert!("24:00:00".parse::<TimeOfDay>().unwrap_err().is_invalid_value());
assert!("01:-5:00".parse::<Duration>().unwrap_err().is_invalid_value());
```

# Crate features

* **std** (enabled by default) - Enables [`civil::TimeOfDay::now`] and the
[`clock`] module, along with conversions between [`Duration`] and
`std::time::Duration`.
* **logging** - Emits log messages via the `log` crate. This is mostly useful
for seeing what the clock driver is doing.
* **serde** - Implements `Serialize` and `Deserialize` for
[`civil::TimeOfDay`] and [`Duration`] using their `HH:MM:SS` forms.
*/

#![no_std]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// We generally want all types to impl Debug.
#![warn(missing_debug_implementations)]

#[cfg(any(test, feature = "std"))]
extern crate std;

// Errors carry their causal chain on the heap. There is no core-only mode.
extern crate alloc;

pub use crate::{duration::Duration, error::Error};

#[macro_use]
mod logging;

pub mod civil;
#[cfg(feature = "std")]
pub mod clock;
mod duration;
mod error;
pub mod fmt;
mod util;
