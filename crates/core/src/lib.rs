//! Core business logic for Cashbook.
//!
//! Pure domain types and rules for the double-entry cash ledger: journal
//! entry types, the cash-ledger catalog, input validation, balance
//! arithmetic, and the payment projection. This crate has no database or
//! web dependencies; transaction scopes and persistence live in
//! `cashbook-db`.

pub mod account;
pub mod ledger;

