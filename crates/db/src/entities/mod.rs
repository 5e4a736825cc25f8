//! `SeaORM` entity definitions.

pub mod accounts;
pub mod journal_entries;
pub mod ledgers;
pub mod sea_orm_active_enums;
