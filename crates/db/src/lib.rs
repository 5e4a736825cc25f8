//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions for accounts, ledgers, and the journal
//! - Repository abstractions for data access
//! - The posting engine, which owns transaction scopes and locking
//! - Database migrations

pub mod entities;
pub mod migration;
pub mod posting;
pub mod repositories;

pub use posting::{PostingEngine, PostingError};
pub use repositories::{
    AccountRepository, BalanceRepository, JournalRepository, LedgerRepository,
};

use sea_orm::{Database, DatabaseConnection, DbErr};

/// Establishes a connection to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}
