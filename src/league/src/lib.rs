pub mod entities;
pub mod query;
pub mod scorers;
pub mod summary;
pub mod table;
pub mod utils;

pub use entities::*;
pub use query::*;
pub use scorers::*;
pub use summary::*;
pub use table::*;
pub use utils::*;
