//! `SeaORM` Entity for the journal_entries table.
//!
//! The journal is append-only; rows have no natural key, so a bigserial
//! surrogate `id` carries the insertion order.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::{EntryType, ExternalEntryType};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "journal_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub xact_no: String,
    pub ledger_no: String,
    pub entry_type: EntryType,
    pub account_id: String,
    pub external_type: ExternalEntryType,
    pub amount: Decimal,
    pub description: String,
    pub ts: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::accounts::Entity",
        from = "Column::AccountId",
        to = "super::accounts::Column::AccountId"
    )]
    Accounts,
    #[sea_orm(
        belongs_to = "super::ledgers::Entity",
        from = "Column::LedgerNo",
        to = "super::ledgers::Column::LedgerNo"
    )]
    Ledgers,
}

impl Related<super::accounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Accounts.def()
    }
}

impl Related<super::ledgers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ledgers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
