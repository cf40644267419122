pub mod month;
pub mod statistics;

pub use month::*;
pub use statistics::*;
