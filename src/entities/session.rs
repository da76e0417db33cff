//! Session entity - Sessione autenticata di un utente

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Session {
    pub id: i32,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    // valorizzato quando la sessione viene chiusa (soft delete)
    pub deleted_at: Option<DateTime<Utc>>,
}
