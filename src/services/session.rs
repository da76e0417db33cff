//! Session services - Sessioni degli utenti autenticati
//!
//! Only the persistence side lives here: opening a session for an existing
//! user, reading it back with its user, and closing sessions.

use crate::core::AppError;
use crate::dtos::{CreateSessionDTO, SessionCondition, SessionDTO, SessionDeleteCriteria, UserDTO};
use crate::entities::{Session, User};
use crate::repositories::{Create, FindOne, Read, SoftDeleteWhere};
use tracing::{debug, info, instrument, warn};

pub struct SessionService<S, U> {
    sessions: S,
    users: U,
}

impl<S, U> SessionService<S, U>
where
    S: Create<Session, CreateSessionDTO>
        + FindOne<Session, SessionCondition>
        + SoftDeleteWhere<SessionDeleteCriteria>,
    U: Read<User, i32>,
{
    pub fn new(sessions: S, users: U) -> Self {
        Self { sessions, users }
    }

    #[instrument(skip(self))]
    pub async fn create(&self, user_id: i32) -> Result<Session, AppError> {
        if self.users.read(&user_id).await?.is_none() {
            warn!("User not found: {}", user_id);
            return Err(AppError::unprocessable_entity("user not found"));
        }

        let session = self.sessions.create(&CreateSessionDTO { user_id }).await?;
        info!(session_id = session.id, "Session created");
        Ok(session)
    }

    /// Legge una sessione attiva insieme al suo utente
    #[instrument(skip(self))]
    pub async fn find_one(
        &self,
        condition: &SessionCondition,
    ) -> Result<Option<SessionDTO>, AppError> {
        let Some(session) = self.sessions.find_one(condition).await? else {
            debug!("Session not found");
            return Ok(None);
        };

        let user = self.users.read(&session.user_id).await?.map(UserDTO::from);
        let mut dto = SessionDTO::from(session);
        dto.user = user;
        Ok(Some(dto))
    }

    #[instrument(skip(self))]
    pub async fn soft_delete(&self, criteria: &SessionDeleteCriteria) -> Result<u64, AppError> {
        if criteria.is_empty() {
            warn!("Refusing to close sessions without criteria");
            return Err(AppError::bad_request("Empty delete criteria"));
        }

        let closed = self.sessions.soft_delete_where(criteria).await?;
        info!("Closed {} sessions", closed);
        Ok(closed)
    }
}
