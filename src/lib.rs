pub mod core;
pub mod scheduler;

pub use crate::core::{
    Error, LogObserver, NullObserver, Observer, Pid, ProcessRecord, Result, Ticks,
};
pub use scheduler::{FcfsQueue, Schedule, ScheduleEntry};
