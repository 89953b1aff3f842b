pub mod error;
pub mod observer;
pub mod state;

pub use error::{Error, Result};
pub use observer::{LogObserver, NullObserver, Observer};
pub use state::{Pid, ProcessRecord, Ticks};
