//! Query DTOs - Data Transfer Objects per paginazione e condizioni di ricerca

use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_PAGE_LIMIT: u32 = 10;
pub const MAX_PAGE_LIMIT: u32 = 50;

/// Opzioni di paginazione: pagine numerate da 1
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Validate)]
pub struct PaginationOptions {
    #[validate(range(min = 1, message = "Page must be at least 1"))]
    #[serde(default = "default_page")]
    pub page: u32,

    #[validate(range(min = 1, max = 50, message = "Limit must be between 1 and 50"))]
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

impl PaginationOptions {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    /// Numero di righe da saltare: (page - 1) * limit
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }
}

/// Condizione di ricerca per i cooperati: i campi `Some(_)` sono in AND
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CooperatedCondition {
    pub id: Option<i32>,
    pub document: Option<String>,
    pub email: Option<String>,
    pub organization_id: Option<i32>,
}

impl CooperatedCondition {
    pub fn by_id(id: i32) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }

    pub fn by_document(document: impl Into<String>) -> Self {
        Self {
            document: Some(document.into()),
            ..Default::default()
        }
    }
}
