/*!
Facilities for dealing with inexact or "civil" time.

A civil time is the time you see on a wall clock. It has no date and no time
zone attached to it. A civil time of `14:30:00` is just "half past two in the
afternoon" and does not identify a precise instant in time.

The only type in this module is [`TimeOfDay`]. Arithmetic on it wraps around
midnight, since that is what clocks do:

```
use wallclock::{civil::TimeOfDay, Duration};

let t = TimeOfDay::new(23, 59, 59)?;
assert_eq!(t + Duration::new(0, 0, 2)?, TimeOfDay::new(0, 0, 1)?);

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

pub use self::time_of_day::TimeOfDay;

mod time_of_day;
