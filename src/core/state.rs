//! Application State - Stato globale dell'applicazione
//!
//! Wires the MySQL repositories into the services that use them.

use crate::core::Config;
use crate::repositories::{
    CooperatedRepository, OrganizationRepository, SessionRepository, UserRepository,
};
use crate::services::{CooperatedService, SessionService};
use sqlx::MySqlPool;

/// Stato globale dell'applicazione condiviso tra i comandi
pub struct AppState {
    /// Service per la gestione dei cooperati
    pub cooperated: CooperatedService<CooperatedRepository, OrganizationRepository>,

    /// Service per la gestione delle sessioni
    pub session: SessionService<SessionRepository, UserRepository>,
}

impl AppState {
    /// Crea una nuova istanza di AppState inizializzando tutti i repository
    /// con il pool di connessioni fornito.
    ///
    /// # Arguments
    /// * `pool` - Pool di connessioni MySQL condiviso
    /// * `config` - Configurazione caricata dall'ambiente
    pub fn new(pool: MySqlPool, config: &Config) -> Self {
        Self {
            cooperated: CooperatedService::new(
                CooperatedRepository::new(pool.clone()),
                OrganizationRepository::new(pool.clone()),
            )
            .with_max_bulk_size(config.max_bulk_size),
            session: SessionService::new(
                SessionRepository::new(pool.clone()),
                UserRepository::new(pool),
            ),
        }
    }
}
