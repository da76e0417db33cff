//! Services module - Logica di business sopra i repository
//!
//! I service sono generici sui trait dei repository: in produzione usano i repository MySQL,
//! nei test quelli in memoria.

pub mod cooperated;
pub mod session;

// Re-exports per facilitare l'import
pub use cooperated::{CooperatedService, CooperatedStore, normalize_document};
pub use session::SessionService;
