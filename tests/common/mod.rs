//! Repository in memoria per i test dei service
//!
//! Mimano il comportamento dei repository MySQL: le letture saltano le righe soft-deleted,
//! il documento dei cooperati è univoco su tutte le righe (come l'indice unique) e
//! `create_many` applica il batch solo se tutte le righe sono valide.

#![allow(dead_code)]

use chrono::Utc;
use cooperated_server::dtos::{
    CooperatedCondition, CreateCooperatedDTO, CreateSessionDTO, NewCooperated, SessionCondition,
    SessionDeleteCriteria, UpdateCooperatedDTO,
};
use cooperated_server::entities::{Cooperated, Organization, Session, User};
use cooperated_server::repositories::{
    Create, CreateMany, FindOne, Paginate, Read, SoftDelete, SoftDeleteWhere, Update,
};
use cooperated_server::services::{CooperatedService, SessionService};
use sqlx::error::{DatabaseError, ErrorKind};
use std::borrow::Cow;
use std::fmt;
use std::sync::{Arc, Mutex};

/// Errore del database con lo stesso `kind()` che MySQL riporta per l'indice unique
#[derive(Debug)]
pub struct UniqueViolation {
    message: String,
}

impl fmt::Display for UniqueViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for UniqueViolation {}

impl DatabaseError for UniqueViolation {
    fn message(&self) -> &str {
        &self.message
    }

    fn code(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed("23000"))
    }

    fn constraint(&self) -> Option<&str> {
        Some("uq_cooperated_document")
    }

    fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self
    }

    fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
        self
    }

    fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
        self
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::UniqueViolation
    }
}

fn duplicate_document(document: &str) -> sqlx::Error {
    sqlx::Error::Database(Box::new(UniqueViolation {
        message: format!("Duplicate entry '{}' for key 'uq_cooperated_document'", document),
    }))
}

#[derive(Clone, Default)]
pub struct InMemoryCooperated {
    rows: Arc<Mutex<Vec<Cooperated>>>,
}

impl InMemoryCooperated {
    /// Tutte le righe, incluse quelle soft-deleted
    pub fn rows(&self) -> Vec<Cooperated> {
        self.rows.lock().unwrap().clone()
    }

    pub fn live(&self) -> Vec<Cooperated> {
        self.rows()
            .into_iter()
            .filter(|row| row.deleted_at.is_none())
            .collect()
    }

    fn insert_into(rows: &mut Vec<Cooperated>, data: &NewCooperated) -> Result<Cooperated, sqlx::Error> {
        if rows.iter().any(|row| row.document == data.document) {
            return Err(duplicate_document(&data.document));
        }
        let now = Utc::now();
        let row = Cooperated {
            id: rows.len() as i32 + 1,
            first_name: data.first_name.clone(),
            last_name: data.last_name.clone(),
            email: data.email.clone(),
            phone: data.phone.clone(),
            document: data.document.clone(),
            organization_id: data.organization_id,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        rows.push(row.clone());
        Ok(row)
    }
}

impl Create<Cooperated, NewCooperated> for InMemoryCooperated {
    async fn create(&self, data: &NewCooperated) -> Result<Cooperated, sqlx::Error> {
        let mut rows = self.rows.lock().unwrap();
        Self::insert_into(&mut rows, data)
    }
}

impl CreateMany<NewCooperated> for InMemoryCooperated {
    async fn create_many(&self, data: &[NewCooperated]) -> Result<u64, sqlx::Error> {
        let mut rows = self.rows.lock().unwrap();
        let mut staged = rows.clone();
        for row in data {
            Self::insert_into(&mut staged, row)?;
        }
        *rows = staged;
        Ok(data.len() as u64)
    }
}

impl Read<Cooperated, i32> for InMemoryCooperated {
    async fn read(&self, id: &i32) -> Result<Option<Cooperated>, sqlx::Error> {
        Ok(self.live().into_iter().find(|row| row.id == *id))
    }
}

impl FindOne<Cooperated, CooperatedCondition> for InMemoryCooperated {
    async fn find_one(
        &self,
        condition: &CooperatedCondition,
    ) -> Result<Option<Cooperated>, sqlx::Error> {
        Ok(self.live().into_iter().find(|row| {
            condition.id.is_none_or(|id| row.id == id)
                && condition.document.as_ref().is_none_or(|d| &row.document == d)
                && condition.email.as_ref().is_none_or(|e| row.email.as_ref() == Some(e))
                && condition
                    .organization_id
                    .is_none_or(|o| row.organization_id == o)
        }))
    }
}

impl Paginate<Cooperated> for InMemoryCooperated {
    async fn find_page(&self, offset: u64, limit: u64) -> Result<Vec<Cooperated>, sqlx::Error> {
        Ok(self
            .live()
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }
}

impl Update<Cooperated, UpdateCooperatedDTO, i32> for InMemoryCooperated {
    async fn update(&self, id: &i32, data: &UpdateCooperatedDTO) -> Result<Cooperated, sqlx::Error> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.id == *id && row.deleted_at.is_none())
            .ok_or(sqlx::Error::RowNotFound)?;

        if let Some(first_name) = &data.first_name {
            row.first_name = first_name.clone();
        }
        if let Some(last_name) = &data.last_name {
            row.last_name = last_name.clone();
        }
        if data.email.is_some() {
            row.email = data.email.clone();
        }
        if data.phone.is_some() {
            row.phone = data.phone.clone();
        }
        if let Some(document) = &data.document {
            row.document = document.clone();
        }
        if let Some(organization_id) = data.organization_id {
            row.organization_id = organization_id;
        }
        row.updated_at = Utc::now();
        Ok(row.clone())
    }
}

impl SoftDelete<i32> for InMemoryCooperated {
    async fn soft_delete(&self, id: &i32) -> Result<(), sqlx::Error> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows
            .iter_mut()
            .find(|row| row.id == *id && row.deleted_at.is_none())
        {
            row.deleted_at = Some(Utc::now());
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryOrganizations {
    rows: Vec<Organization>,
}

impl InMemoryOrganizations {
    pub fn with_ids(ids: &[i32]) -> Self {
        let rows = ids
            .iter()
            .map(|id| Organization {
                id: *id,
                name: format!("Cooperativa {}", id),
                created_at: Utc::now(),
                deleted_at: None,
            })
            .collect();
        Self { rows }
    }
}

impl Read<Organization, i32> for InMemoryOrganizations {
    async fn read(&self, id: &i32) -> Result<Option<Organization>, sqlx::Error> {
        Ok(self
            .rows
            .iter()
            .find(|row| row.id == *id && row.deleted_at.is_none())
            .cloned())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryUsers {
    rows: Vec<User>,
}

impl InMemoryUsers {
    pub fn with_user(mut self, id: i32, first_name: &str, last_name: &str) -> Self {
        self.rows.push(User {
            id,
            email: Some(format!("{}@example.com", first_name.to_lowercase())),
            first_name: Some(first_name.to_string()),
            last_name: Some(last_name.to_string()),
            created_at: Utc::now(),
            deleted_at: None,
        });
        self
    }
}

impl Read<User, i32> for InMemoryUsers {
    async fn read(&self, id: &i32) -> Result<Option<User>, sqlx::Error> {
        Ok(self
            .rows
            .iter()
            .find(|row| row.id == *id && row.deleted_at.is_none())
            .cloned())
    }
}

#[derive(Clone, Default)]
pub struct InMemorySessions {
    rows: Arc<Mutex<Vec<Session>>>,
}

impl InMemorySessions {
    pub fn rows(&self) -> Vec<Session> {
        self.rows.lock().unwrap().clone()
    }
}

impl Create<Session, CreateSessionDTO> for InMemorySessions {
    async fn create(&self, data: &CreateSessionDTO) -> Result<Session, sqlx::Error> {
        let mut rows = self.rows.lock().unwrap();
        let session = Session {
            id: rows.len() as i32 + 1,
            user_id: data.user_id,
            created_at: Utc::now(),
            deleted_at: None,
        };
        rows.push(session.clone());
        Ok(session)
    }
}

impl FindOne<Session, SessionCondition> for InMemorySessions {
    async fn find_one(&self, condition: &SessionCondition) -> Result<Option<Session>, sqlx::Error> {
        Ok(self.rows().into_iter().find(|row| {
            row.deleted_at.is_none()
                && condition.id.is_none_or(|id| row.id == id)
                && condition.user_id.is_none_or(|user_id| row.user_id == user_id)
        }))
    }
}

impl SoftDeleteWhere<SessionDeleteCriteria> for InMemorySessions {
    async fn soft_delete_where(&self, criteria: &SessionDeleteCriteria) -> Result<u64, sqlx::Error> {
        let mut rows = self.rows.lock().unwrap();
        let mut closed = 0;
        for row in rows.iter_mut().filter(|row| criteria.matches(row)) {
            row.deleted_at = Some(Utc::now());
            closed += 1;
        }
        Ok(closed)
    }
}

/// Crea un CooperatedService con le organizzazioni 1 e 2
pub fn create_test_cooperated_service() -> (
    CooperatedService<InMemoryCooperated, InMemoryOrganizations>,
    InMemoryCooperated,
) {
    let store = InMemoryCooperated::default();
    let service = CooperatedService::new(store.clone(), InMemoryOrganizations::with_ids(&[1, 2]));
    (service, store)
}

/// Crea un SessionService con gli utenti alice (1) e bob (2)
pub fn create_test_session_service() -> (
    SessionService<InMemorySessions, InMemoryUsers>,
    InMemorySessions,
) {
    let sessions = InMemorySessions::default();
    let users = InMemoryUsers::default()
        .with_user(1, "Alice", "Rossi")
        .with_user(2, "Bob", "Bianchi");
    (SessionService::new(sessions.clone(), users), sessions)
}

/// Payload di creazione valido per l'organizzazione indicata
pub fn create_dto(document: &str, organization: i32) -> CreateCooperatedDTO {
    CreateCooperatedDTO {
        first_name: "Mario".to_string(),
        last_name: "Rossi".to_string(),
        email: Some("mario.rossi@example.com".to_string()),
        phone: Some("+39 333 1234567".to_string()),
        document: Some(document.to_string()),
        organization: Some(organization),
    }
}
