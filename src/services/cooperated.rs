//! Cooperated services - Gestione dei cooperati di una organizzazione

use crate::core::AppError;
use crate::dtos::{
    CooperatedCondition, CooperatedSummaryDTO, CreateCooperatedDTO, NewCooperated,
    PaginationOptions, UpdateCooperatedDTO,
};
use crate::entities::{Cooperated, Organization};
use crate::repositories::{Create, CreateMany, FindOne, Paginate, Read, SoftDelete, Update};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;
use tracing::{debug, error, info, instrument, warn};
use validator::Validate;

pub const DEFAULT_MAX_BULK_SIZE: usize = 1000;

/// Larghezza della colonna `cooperated.document`
pub const MAX_DOCUMENT_LENGTH: usize = 32;

lazy_static! {
    static ref NON_DIGITS: Regex = Regex::new("[^0-9]").unwrap();
}

/// Rimuove dal documento tutto ciò che non è una cifra ("123.456.789-00" -> "12345678900")
pub fn normalize_document(document: &str) -> String {
    NON_DIGITS.replace_all(document, "").into_owned()
}

/// Normalizza il documento e controlla che ci stia nella colonna
fn checked_document(raw_document: &str) -> Result<String, AppError> {
    let document = normalize_document(raw_document);
    if document.is_empty() {
        warn!("Document has no digits");
        return Err(AppError::unprocessable_entity("document should not be empty"));
    }
    if document.len() > MAX_DOCUMENT_LENGTH {
        warn!("Document has {} digits", document.len());
        return Err(AppError::unprocessable_entity("document is too long")
            .with_details(format!("at most {} digits are accepted", MAX_DOCUMENT_LENGTH)));
    }
    Ok(document)
}

/// Everything the service needs from the cooperated storage
pub trait CooperatedStore:
    Create<Cooperated, NewCooperated>
    + CreateMany<NewCooperated>
    + Read<Cooperated, i32>
    + FindOne<Cooperated, CooperatedCondition>
    + Paginate<Cooperated>
    + Update<Cooperated, UpdateCooperatedDTO, i32>
    + SoftDelete<i32>
{
}

impl<T> CooperatedStore for T where
    T: Create<Cooperated, NewCooperated>
        + CreateMany<NewCooperated>
        + Read<Cooperated, i32>
        + FindOne<Cooperated, CooperatedCondition>
        + Paginate<Cooperated>
        + Update<Cooperated, UpdateCooperatedDTO, i32>
        + SoftDelete<i32>
{
}

pub struct CooperatedService<C, O> {
    cooperated: C,
    organizations: O,
    max_bulk_size: usize,
}

impl<C, O> CooperatedService<C, O>
where
    C: CooperatedStore,
    O: Read<Organization, i32>,
{
    pub fn new(cooperated: C, organizations: O) -> Self {
        Self {
            cooperated,
            organizations,
            max_bulk_size: DEFAULT_MAX_BULK_SIZE,
        }
    }

    pub fn with_max_bulk_size(mut self, max_bulk_size: usize) -> Self {
        self.max_bulk_size = max_bulk_size;
        self
    }

    #[instrument(skip(self, dto), fields(organization = ?dto.organization))]
    pub async fn create(&self, dto: CreateCooperatedDTO) -> Result<Cooperated, AppError> {
        debug!("Creating cooperated");
        // 1. document e organization sono obbligatori (fail-fast prima di qualsiasi query)
        // 2. Validare i campi con validator (email, lunghezze)
        // 3. Normalizzare il documento lasciando solo le cifre
        // 4. Rifiutare se esiste già un cooperato con lo stesso documento
        // 5. Verificare che l'organizzazione esista
        // 6. Salvare e ritornare il cooperato creato
        let raw_document = match dto.document.as_deref() {
            Some(document) if !document.trim().is_empty() => document,
            _ => {
                warn!("Missing document");
                return Err(AppError::unprocessable_entity("document should not be empty"));
            }
        };
        let organization_id = dto.organization.ok_or_else(|| {
            warn!("Missing organization");
            AppError::unprocessable_entity("organization should not be empty")
        })?;

        dto.validate()?;

        let document = checked_document(raw_document)?;

        self.ensure_document_available(&document, None).await?;
        let organization = self.find_organization(organization_id).await?;

        let new_row = NewCooperated {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            phone: dto.phone,
            document,
            organization_id: organization.id,
        };
        let created = self.cooperated.create(&new_row).await?;

        info!(id = created.id, "Cooperated created");
        Ok(created)
    }

    #[instrument(skip(self), fields(page = options.page, limit = options.limit))]
    pub async fn find_many_with_pagination(
        &self,
        options: PaginationOptions,
    ) -> Result<Vec<Cooperated>, AppError> {
        options.validate()?;

        let page = self
            .cooperated
            .find_page(options.offset(), u64::from(options.limit))
            .await?;

        debug!("Fetched {} cooperated", page.len());
        Ok(page)
    }

    #[instrument(skip(self))]
    pub async fn find_one(
        &self,
        condition: &CooperatedCondition,
    ) -> Result<Option<Cooperated>, AppError> {
        Ok(self.cooperated.find_one(condition).await?)
    }

    #[instrument(skip(self, payload))]
    pub async fn update(
        &self,
        id: i32,
        mut payload: UpdateCooperatedDTO,
    ) -> Result<Cooperated, AppError> {
        debug!("Updating cooperated");
        payload.validate()?;

        if self.cooperated.read(&id).await?.is_none() {
            warn!("Cooperated not found");
            return Err(AppError::not_found("cooperatedNotFound"));
        }

        if let Some(raw_document) = payload.document.take() {
            let document = checked_document(&raw_document)?;
            self.ensure_document_available(&document, Some(id)).await?;
            payload.document = Some(document);
        }

        if let Some(organization_id) = payload.organization_id {
            self.find_organization(organization_id).await?;
        }

        let updated = self
            .cooperated
            .update(&id, &payload)
            .await
            .map_err(|err| match err {
                sqlx::Error::RowNotFound => AppError::not_found("cooperatedNotFound"),
                other => AppError::from(other),
            })?;

        info!("Cooperated updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn soft_delete(&self, id: i32) -> Result<(), AppError> {
        self.cooperated.soft_delete(&id).await?;
        info!("Cooperated soft deleted");
        Ok(())
    }

    /// Ritorna i dati di contatto del cooperato con il documento indicato
    #[instrument(skip(self, document))]
    pub async fn validate_document(&self, document: &str) -> Result<CooperatedSummaryDTO, AppError> {
        let normalized = normalize_document(document);

        let cooperated = if normalized.is_empty() {
            None
        } else {
            self.cooperated
                .find_one(&CooperatedCondition::by_document(normalized))
                .await?
        };

        match cooperated {
            Some(cooperated) => {
                info!(id = cooperated.id, "Document validated");
                Ok(CooperatedSummaryDTO::from(cooperated))
            }
            None => {
                warn!("No cooperated with the given document");
                Err(AppError::not_found("cooperatedNotFound"))
            }
        }
    }

    /// Inserisce tutti i cooperati in una sola transazione: o tutti o nessuno
    #[instrument(skip(self, dtos), fields(rows = dtos.len()))]
    pub async fn create_bulk(&self, dtos: Vec<CreateCooperatedDTO>) -> Result<u64, AppError> {
        debug!("Starting bulk import");
        if dtos.is_empty() {
            return Ok(0);
        }
        if dtos.len() > self.max_bulk_size {
            warn!("Bulk import exceeds {} rows", self.max_bulk_size);
            return Err(AppError::unprocessable_entity("Too many rows in bulk import")
                .with_details(format!("at most {} rows are accepted", self.max_bulk_size)));
        }

        let mut rows = Vec::with_capacity(dtos.len());
        for (index, dto) in dtos.into_iter().enumerate() {
            let row_details = || format!("row {}", index);

            let document = dto
                .document
                .as_deref()
                .ok_or_else(|| AppError::unprocessable_entity("document should not be empty"))
                .and_then(checked_document)
                .map_err(|err| err.with_details(row_details()))?;
            let organization_id = dto.organization.ok_or_else(|| {
                AppError::unprocessable_entity("organization should not be empty")
                    .with_details(row_details())
            })?;
            dto.validate().map_err(|err| {
                warn!("Row {} failed validation: {}", index, err);
                AppError::unprocessable_entity("Validation error").with_details(row_details())
            })?;

            rows.push(NewCooperated {
                first_name: dto.first_name,
                last_name: dto.last_name,
                email: dto.email,
                phone: dto.phone,
                document,
                organization_id,
            });
        }

        let organization_ids: BTreeSet<i32> = rows.iter().map(|row| row.organization_id).collect();
        for organization_id in organization_ids {
            self.find_organization(organization_id).await?;
        }

        let inserted = self.cooperated.create_many(&rows).await.map_err(|err| {
            error!("Bulk import rolled back: {}", err);
            AppError::from(err)
        })?;

        info!("Bulk import committed {} rows", inserted);
        Ok(inserted)
    }

    async fn find_organization(&self, organization_id: i32) -> Result<Organization, AppError> {
        self.organizations
            .read(&organization_id)
            .await?
            .ok_or_else(|| {
                warn!("Organization not found: {}", organization_id);
                AppError::unprocessable_entity("organization of provided organization is not found")
            })
    }

    async fn ensure_document_available(
        &self,
        document: &str,
        owner_id: Option<i32>,
    ) -> Result<(), AppError> {
        let existing = self
            .cooperated
            .find_one(&CooperatedCondition::by_document(document))
            .await?;

        match existing {
            Some(other) if Some(other.id) != owner_id => {
                warn!("Document already used by cooperated {}", other.id);
                Err(AppError::unprocessable_entity("document already exists"))
            }
            _ => Ok(()),
        }
    }
}
