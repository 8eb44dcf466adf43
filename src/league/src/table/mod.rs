mod performance;
mod standings;

pub use performance::*;
pub use standings::*;
