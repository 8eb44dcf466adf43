mod fixtures;
mod goals;
mod matches;
mod params;
mod players;

pub use fixtures::*;
pub use goals::*;
pub use matches::*;
pub use params::{DATE_FORMAT, lenient};
pub use players::*;
