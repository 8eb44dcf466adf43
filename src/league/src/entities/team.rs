use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    pub logo: Option<String>,
    pub created_at: NaiveDateTime,
}

impl Team {
    pub fn new(id: u32, name: String, logo: Option<String>, created_at: NaiveDateTime) -> Self {
        Team {
            id,
            name,
            logo,
            created_at,
        }
    }
}

impl PartialEq for Team {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
