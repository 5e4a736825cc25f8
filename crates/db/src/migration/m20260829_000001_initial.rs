//! Initial database migration.
//!
//! Creates the accounts table, the cash-ledger catalog, the append-only
//! journal, and the account_balances view.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(ACCOUNTS_SQL).await?;
        db.execute_unprepared(LEDGERS_SQL).await?;
        db.execute_unprepared(JOURNAL_ENTRIES_SQL).await?;
        db.execute_unprepared(VIEWS_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const ACCOUNTS_SQL: &str = r"
-- External customer accounts. Balance-gated writes take a FOR UPDATE
-- lock on the account row, so every account must exist here before any
-- journal entry references it.
CREATE TABLE accounts (
    account_id VARCHAR(64) PRIMARY KEY,
    currency VARCHAR(3) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";

const LEDGERS_SQL: &str = r"
-- Internal cash-ledger catalog, one row per supported currency.
CREATE TABLE ledgers (
    ledger_no VARCHAR(10) PRIMARY KEY,
    account_type VARCHAR(2) NOT NULL,
    currency VARCHAR(3) NOT NULL,
    name VARCHAR(100) NOT NULL
);
";

const JOURNAL_ENTRIES_SQL: &str = r"
-- Append-only transaction journal. Rows are never updated or deleted;
-- the bigserial id carries insertion order.
CREATE TABLE journal_entries (
    id BIGSERIAL PRIMARY KEY,
    xact_no VARCHAR(32) NOT NULL,
    ledger_no VARCHAR(10) NOT NULL,
    entry_type VARCHAR(2) NOT NULL CHECK (entry_type IN ('Dr', 'Cr')),
    account_id VARCHAR(64) NOT NULL,
    external_type VARCHAR(3) NOT NULL CHECK (external_type IN ('Dp', 'Wd', 'STr', 'RTr')),
    amount NUMERIC(15, 4) NOT NULL CHECK (amount > 0),
    description VARCHAR(255) NOT NULL,
    ts TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    CONSTRAINT fk_ledger FOREIGN KEY (ledger_no) REFERENCES ledgers (ledger_no),
    CONSTRAINT fk_account FOREIGN KEY (account_id) REFERENCES accounts (account_id)
);

CREATE INDEX idx_journal_entries_account_id ON journal_entries (account_id);
CREATE INDEX idx_journal_entries_xact_no ON journal_entries (xact_no);
";

const VIEWS_SQL: &str = r"
-- Per-account balance derived from the journal. Deposits and received
-- transfers credit the account; withdrawals and sent transfers debit it.
CREATE VIEW account_balances AS
SELECT
    account_id,
    COALESCE(SUM(amount) FILTER (WHERE external_type IN ('Dp', 'RTr')), 0) AS total_credit,
    COALESCE(SUM(amount) FILTER (WHERE external_type IN ('Wd', 'STr')), 0) AS total_debit,
    COALESCE(SUM(amount) FILTER (WHERE external_type IN ('Dp', 'RTr')), 0)
        - COALESCE(SUM(amount) FILTER (WHERE external_type IN ('Wd', 'STr')), 0) AS current_balance,
    MAX(ts) AS ts
FROM journal_entries
GROUP BY account_id;
";

const DROP_ALL_SQL: &str = r"
DROP VIEW IF EXISTS account_balances;
DROP TABLE IF EXISTS journal_entries;
DROP TABLE IF EXISTS ledgers;
DROP TABLE IF EXISTS accounts;
";
