//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene tutti i DTOs usati per la comunicazione con i client.
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).

pub mod cooperated;
pub mod query;
pub mod session;
pub mod user;

// Re-exports per facilitare l'import
pub use cooperated::{
    CooperatedDTO, CooperatedSummaryDTO, CreateCooperatedDTO, NewCooperated, UpdateCooperatedDTO,
};
pub use query::{CooperatedCondition, PaginationOptions};
pub use session::{CreateSessionDTO, SessionCondition, SessionDTO, SessionDeleteCriteria};
pub use user::UserDTO;
