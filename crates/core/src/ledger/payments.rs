//! Payment projection: reconstructs logical transfers from journal entries.
//!
//! A transfer writes two entries sharing one reference number: a
//! `SendTransfer` on the debited account and a `ReceiveTransfer` on the
//! credited account. The projection pairs the legs by reference number
//! rather than by scan position, so reordering or filtering the journal
//! cannot mispair them. Each pair yields an outgoing record (sender's
//! perspective) and an incoming record (receiver's perspective).

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use cashbook_shared::{AccountId, XactNo};

use super::types::{ExternalEntryType, JournalEntry};

/// Direction of a payment record, relative to its account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentDirection {
    /// Money leaving the account.
    Outgoing,
    /// Money arriving at the account.
    Incoming,
}

/// One side of a reconstructed transfer, for reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Payment {
    /// Reference number shared by both transfer legs.
    pub xact_no: XactNo,
    /// The account this record describes.
    pub account: AccountId,
    /// Transfer amount.
    pub amount: Decimal,
    /// Direction relative to `account`.
    pub direction: PaymentDirection,
    /// Destination account, present on outgoing records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_account: Option<AccountId>,
    /// Origin account, present on incoming records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_account: Option<AccountId>,
}

/// Pairs transfer entries by reference number into payment records.
///
/// Input entries are expected in journal order (timestamp ascending);
/// output pairs follow the order each reference number first appears.
/// Non-transfer entries are ignored. A reference number missing one of its
/// two legs yields no records: an incomplete pair can only be a reader
/// racing an in-flight commit, and the projection tolerates that rather
/// than reporting a half transfer.
#[must_use]
pub fn payments_from_entries(entries: &[JournalEntry]) -> Vec<Payment> {
    let mut legs: HashMap<&XactNo, (Option<&JournalEntry>, Option<&JournalEntry>)> =
        HashMap::new();
    let mut order: Vec<&XactNo> = Vec::new();

    for entry in entries {
        match entry.external_type {
            ExternalEntryType::SendTransfer => {
                let slot = legs.entry(&entry.xact_no).or_insert_with(|| {
                    order.push(&entry.xact_no);
                    (None, None)
                });
                slot.0 = Some(entry);
            }
            ExternalEntryType::ReceiveTransfer => {
                let slot = legs.entry(&entry.xact_no).or_insert_with(|| {
                    order.push(&entry.xact_no);
                    (None, None)
                });
                slot.1 = Some(entry);
            }
            ExternalEntryType::Deposit | ExternalEntryType::Withdrawal => {}
        }
    }

    let mut payments = Vec::with_capacity(order.len() * 2);
    for xact_no in order {
        let Some(&(Some(snd), Some(rcv))) = legs.get(xact_no) else {
            continue;
        };

        payments.push(Payment {
            xact_no: snd.xact_no.clone(),
            account: snd.account_id.clone(),
            amount: snd.amount,
            direction: PaymentDirection::Outgoing,
            to_account: Some(rcv.account_id.clone()),
            from_account: None,
        });
        payments.push(Payment {
            xact_no: rcv.xact_no.clone(),
            account: rcv.account_id.clone(),
            amount: rcv.amount,
            direction: PaymentDirection::Incoming,
            to_account: None,
            from_account: Some(snd.account_id.clone()),
        });
    }

    payments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::catalog::cash_ledger_no;
    use crate::ledger::types::EntryType;
    use cashbook_shared::Currency;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn transfer_leg(
        xact_no: &XactNo,
        account: &str,
        external_type: ExternalEntryType,
        amount: Decimal,
    ) -> JournalEntry {
        let entry_type = if external_type.credits_account() {
            EntryType::Debit
        } else {
            EntryType::Credit
        };
        JournalEntry {
            xact_no: xact_no.clone(),
            ledger_no: cash_ledger_no(Currency::Usd),
            entry_type,
            account_id: AccountId::new(account).unwrap(),
            external_type,
            amount,
            description: String::new(),
            ts: Utc::now().fixed_offset(),
        }
    }

    #[test]
    fn test_one_transfer_yields_one_pair() {
        let xact_no = XactNo::generate();
        let entries = vec![
            transfer_leg(&xact_no, "johndoe", ExternalEntryType::SendTransfer, dec!(25)),
            transfer_leg(&xact_no, "maryjane", ExternalEntryType::ReceiveTransfer, dec!(25)),
        ];

        let payments = payments_from_entries(&entries);
        assert_eq!(payments.len(), 2);

        let outgoing = &payments[0];
        assert_eq!(outgoing.direction, PaymentDirection::Outgoing);
        assert_eq!(outgoing.account.as_str(), "johndoe");
        assert_eq!(outgoing.to_account.as_ref().unwrap().as_str(), "maryjane");
        assert_eq!(outgoing.from_account, None);
        assert_eq!(outgoing.amount, dec!(25));

        let incoming = &payments[1];
        assert_eq!(incoming.direction, PaymentDirection::Incoming);
        assert_eq!(incoming.account.as_str(), "maryjane");
        assert_eq!(incoming.from_account.as_ref().unwrap().as_str(), "johndoe");
        assert_eq!(incoming.to_account, None);
        assert_eq!(incoming.xact_no, outgoing.xact_no);
    }

    #[test]
    fn test_pairing_by_reference_number_not_position() {
        let first = XactNo::generate();
        let second = XactNo::generate();
        // Legs interleaved: first's send, second's send, second's receive,
        // first's receive. Positional pairing would cross-wire these.
        let entries = vec![
            transfer_leg(&first, "johndoe", ExternalEntryType::SendTransfer, dec!(10)),
            transfer_leg(&second, "maryjane", ExternalEntryType::SendTransfer, dec!(20)),
            transfer_leg(&second, "bobsmith", ExternalEntryType::ReceiveTransfer, dec!(20)),
            transfer_leg(&first, "bobsmith", ExternalEntryType::ReceiveTransfer, dec!(10)),
        ];

        let payments = payments_from_entries(&entries);
        assert_eq!(payments.len(), 4);

        assert_eq!(payments[0].xact_no, first);
        assert_eq!(payments[0].amount, dec!(10));
        assert_eq!(payments[0].to_account.as_ref().unwrap().as_str(), "bobsmith");

        assert_eq!(payments[2].xact_no, second);
        assert_eq!(payments[2].amount, dec!(20));
        assert_eq!(payments[2].to_account.as_ref().unwrap().as_str(), "bobsmith");
    }

    #[test]
    fn test_incomplete_pair_is_skipped() {
        let xact_no = XactNo::generate();
        let entries = vec![transfer_leg(
            &xact_no,
            "johndoe",
            ExternalEntryType::SendTransfer,
            dec!(25),
        )];

        assert!(payments_from_entries(&entries).is_empty());
    }

    #[test]
    fn test_non_transfer_entries_ignored() {
        let xact_no = XactNo::generate();
        let entries = vec![
            transfer_leg(&xact_no, "johndoe", ExternalEntryType::Deposit, dec!(100)),
            transfer_leg(&xact_no, "johndoe", ExternalEntryType::Withdrawal, dec!(50)),
        ];

        assert!(payments_from_entries(&entries).is_empty());
    }

    #[test]
    fn test_empty_journal() {
        assert!(payments_from_entries(&[]).is_empty());
    }
}
