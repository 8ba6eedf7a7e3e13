pub mod format;
pub mod mock;
pub mod models;

pub use mock::{MockData, WealthPeriod, provider};
