pub mod default_handler;
mod extract;

pub use extract::{ApiJson, ApiPath};

use serde::Deserialize;

#[derive(Deserialize)]
pub struct LangRequest {
    pub lang: String,
}

#[derive(Deserialize)]
pub struct EntityRequest {
    pub lang: String,
    pub id: u32,
}
