//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene tutte le entità (models) che rappresentano i dati persistiti nel database.
//! Ogni entity corrisponde a una tabella nel database. Tutte le entità sono soft-deletable:
//! una riga con `deleted_at` valorizzato non viene più restituita dalle letture.

pub mod cooperated;
pub mod organization;
pub mod session;
pub mod user;

// Re-exports per facilitare l'import
pub use cooperated::Cooperated;
pub use organization::Organization;
pub use session::Session;
pub use user::User;
