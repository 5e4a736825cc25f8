//! String-backed enums stored in the journal tables.
//!
//! The database keeps the short wire codes (`Dr`, `Cr`, `Dp`, ...) so that
//! raw SQL over the journal stays readable; conversions to and from the
//! domain enums live here.

use cashbook_core::ledger::{EntryType as DomainEntryType, ExternalEntryType as DomainExternalEntryType};
use cashbook_core::ledger::LedgerAccountType as DomainLedgerAccountType;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Ledger side of a journal entry.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(2))")]
pub enum EntryType {
    #[sea_orm(string_value = "Dr")]
    Debit,
    #[sea_orm(string_value = "Cr")]
    Credit,
}

/// External (customer-facing) classification of a journal entry.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(3))")]
pub enum ExternalEntryType {
    #[sea_orm(string_value = "Dp")]
    Deposit,
    #[sea_orm(string_value = "Wd")]
    Withdrawal,
    #[sea_orm(string_value = "STr")]
    SendTransfer,
    #[sea_orm(string_value = "RTr")]
    ReceiveTransfer,
}

/// Accounting classification of a ledger.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(2))")]
pub enum LedgerAccountType {
    #[sea_orm(string_value = "AL")]
    Liability,
}

impl From<DomainEntryType> for EntryType {
    fn from(value: DomainEntryType) -> Self {
        match value {
            DomainEntryType::Debit => Self::Debit,
            DomainEntryType::Credit => Self::Credit,
        }
    }
}

impl From<EntryType> for DomainEntryType {
    fn from(value: EntryType) -> Self {
        match value {
            EntryType::Debit => Self::Debit,
            EntryType::Credit => Self::Credit,
        }
    }
}

impl From<DomainExternalEntryType> for ExternalEntryType {
    fn from(value: DomainExternalEntryType) -> Self {
        match value {
            DomainExternalEntryType::Deposit => Self::Deposit,
            DomainExternalEntryType::Withdrawal => Self::Withdrawal,
            DomainExternalEntryType::SendTransfer => Self::SendTransfer,
            DomainExternalEntryType::ReceiveTransfer => Self::ReceiveTransfer,
        }
    }
}

impl From<ExternalEntryType> for DomainExternalEntryType {
    fn from(value: ExternalEntryType) -> Self {
        match value {
            ExternalEntryType::Deposit => Self::Deposit,
            ExternalEntryType::Withdrawal => Self::Withdrawal,
            ExternalEntryType::SendTransfer => Self::SendTransfer,
            ExternalEntryType::ReceiveTransfer => Self::ReceiveTransfer,
        }
    }
}

impl From<DomainLedgerAccountType> for LedgerAccountType {
    fn from(value: DomainLedgerAccountType) -> Self {
        match value {
            DomainLedgerAccountType::Liability => Self::Liability,
        }
    }
}

impl From<LedgerAccountType> for DomainLedgerAccountType {
    fn from(value: LedgerAccountType) -> Self {
        match value {
            LedgerAccountType::Liability => Self::Liability,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_type_round_trips_through_domain() {
        for et in [EntryType::Debit, EntryType::Credit] {
            let domain: DomainEntryType = et.clone().into();
            assert_eq!(EntryType::from(domain), et);
        }
    }

    #[test]
    fn external_entry_type_round_trips_through_domain() {
        for xt in [
            ExternalEntryType::Deposit,
            ExternalEntryType::Withdrawal,
            ExternalEntryType::SendTransfer,
            ExternalEntryType::ReceiveTransfer,
        ] {
            let domain: DomainExternalEntryType = xt.clone().into();
            assert_eq!(ExternalEntryType::from(domain), xt);
        }
    }
}
