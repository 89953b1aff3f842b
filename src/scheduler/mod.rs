pub mod fcfs;
pub mod schedule;

pub use fcfs::FcfsQueue;
pub use schedule::{Schedule, ScheduleEntry};
