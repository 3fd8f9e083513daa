mod config;
mod course;
mod settings;
mod source;
mod time_period;

pub use config::*;
pub use course::*;
pub use settings::*;
pub use source::*;
pub use time_period::*;
