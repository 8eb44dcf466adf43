mod data;
mod drafts;

pub use data::*;
pub use drafts::*;
