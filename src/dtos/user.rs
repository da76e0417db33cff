//! User DTOs - Data Transfer Objects per utenti

use crate::entities::User;
use serde::{Deserialize, Serialize};

// struct per gestire io col client
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserDTO {
    pub id: Option<i32>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl From<User> for UserDTO {
    fn from(value: User) -> Self {
        Self {
            id: Some(value.id),
            email: value.email,
            first_name: value.first_name,
            last_name: value.last_name,
        }
    }
}
