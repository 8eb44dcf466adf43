pub mod goal;
pub mod r#match;
pub mod player;
pub mod team;

pub use goal::*;
pub use r#match::*;
pub use player::*;
pub use team::*;
