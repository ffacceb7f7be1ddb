//! Time and id adapters.

mod clock;
mod ids;

pub use clock::{ManualClock, SystemClock};
pub use ids::{SequentialIdGenerator, UuidGenerator};
