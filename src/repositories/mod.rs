//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Questo modulo organizza i repository in sotto-moduli separati per una migliore manutenibilità.
//! Ogni repository gestisce le operazioni di database per una specifica entità.

// ************************* NOTA SU SQLX ************************* //

/*
   Le query usano le funzioni runtime di sqlx (`sqlx::query`, `sqlx::query_as::<_, T>`)
   con le entity che derivano `sqlx::FromRow`, così il crate compila anche senza un database
   raggiungibile. Per le condizioni dinamiche (find_one, update parziali) si usa `QueryBuilder`
   con `push_bind`: mai concatenare valori dentro la stringa SQL.

   Ricordiamoci che tutte le letture filtrano `deleted_at IS NULL` (soft delete).
*/

// ************************* MODULI REPOSITORY ************************* //

pub mod cooperated;
pub mod organization;
pub mod session;
pub mod traits;
pub mod user;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, CreateMany, FindOne, Paginate, Read, SoftDelete, SoftDeleteWhere, Update};

// Re-esportazione delle struct dei repository per facilitare l'import
pub use cooperated::CooperatedRepository;
pub use organization::OrganizationRepository;
pub use session::SessionRepository;
pub use user::UserRepository;

/// Converte l'id AUTO_INCREMENT restituito da MySQL nella chiave `i32` delle entity
pub(crate) fn inserted_id(last_insert_id: u64) -> Result<i32, sqlx::Error> {
    i32::try_from(last_insert_id).map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

#[cfg(test)]
mod tests {
    use super::inserted_id;

    #[test]
    fn inserted_id_accepts_i32_range() {
        assert_eq!(inserted_id(42).unwrap(), 42);
        assert_eq!(inserted_id(i32::MAX as u64).unwrap(), i32::MAX);
    }

    #[test]
    fn inserted_id_rejects_out_of_range_values() {
        assert!(matches!(inserted_id(i32::MAX as u64 + 1), Err(sqlx::Error::Decode(_))));
        assert!(inserted_id(u64::MAX).is_err());
    }
}
