#![forbid(unsafe_code)]

pub mod countdown;
pub mod error;
pub mod model;
pub mod session;
pub mod time;

pub use countdown::Countdown;
pub use error::Error;
pub use session::{ExamSession, NavigationError};
pub use time::Clock;
