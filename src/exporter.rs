//! Core export pipeline.
//!
//! Reads the payment-export CSV in one pass, collecting the counterparty
//! list and converting each qualifying record into a ledger transaction
//! block. Output is written afterwards so the customer preamble can precede
//! the transaction blocks.

use crate::error::{ExportError, Result};
use crate::ledger::{self, AccountNames, LedgerTransaction, Split, SplitParty};
use crate::money::Money;
use crate::record::{Direction, PaymentRecord};
use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use std::collections::HashSet;
use std::io::{Read, Write};
use std::str::FromStr;

/// Running totals across one export run.
///
/// Threaded through the transform as an explicit accumulator and reported
/// at the end of the run; never emitted into the import file itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunSummary {
    /// Sum of the gross amounts of every imported payment.
    pub gross: Money,

    /// Signed net movement: received payments add, sent payments subtract.
    pub net: Money,

    /// Number of ledger transactions produced.
    pub imported: usize,

    /// Number of rows dropped by the status/type policy.
    pub skipped: usize,
}

/// The export pipeline engine.
///
/// Accumulates the de-duplicated customer list and the transformed
/// transaction blocks, in input order, then renders the import file.
///
/// # Row handling
///
/// Rows are dropped (not errors) when their status is not `Completed`,
/// when their type is `Withdrawal`, or when their type is unrecognized.
/// A row with the wrong shape, an unparseable date, or an unparseable
/// amount aborts the run.
pub struct IifExporter {
    accounts: AccountNames,

    /// Distinct counterparty names in first-seen order.
    customers: Vec<String>,
    seen_customers: HashSet<String>,

    /// Transformed blocks, in input order.
    transactions: Vec<LedgerTransaction>,

    summary: RunSummary,
}

impl IifExporter {
    /// Creates an empty exporter mapping onto the given ledger accounts.
    pub fn new(accounts: AccountNames) -> Self {
        IifExporter {
            accounts,
            customers: Vec::new(),
            seen_customers: HashSet::new(),
            transactions: Vec::new(),
            summary: RunSummary::default(),
        }
    }

    /// Processes the full payment-export CSV from a reader.
    ///
    /// The first row is the column-header row and is not data. Every data
    /// row contributes its counterparty name to the customer list, before
    /// any filtering. Dates are parsed for every row, so a malformed date
    /// aborts the run even on a row the status filter would drop.
    pub fn process_csv<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

        for (row_idx, result) in csv_reader.deserialize::<PaymentRecord>().enumerate() {
            let row = row_idx + 2; // 1-indexed, accounting for header row

            let record = result.map_err(|e| ExportError::MalformedRow {
                row,
                message: e.to_string(),
            })?;

            self.observe_customer(&record.name);

            let date = record.parse_date().map_err(|e| ExportError::MalformedRow {
                row,
                message: format!("invalid date {:?}: {}", record.date, e),
            })?;

            // The export lists transactions as Initiated that are actually
            // successful; those are not safe to import until they settle.
            if !record.is_completed() {
                debug!(
                    "Row {}: skipping {} with status {:?}",
                    row, record.tx_type, record.status
                );
                self.summary.skipped += 1;
                continue;
            }

            match record.tx_type.as_str() {
                "Payment" => {
                    let tx = self.transform_payment(&record, date, row)?;
                    debug!(
                        "Row {}: imported payment {} {} for {}",
                        row, record.direction, record.name, tx.amount
                    );
                    self.transactions.push(tx);
                    self.summary.imported += 1;
                }
                // Bank transfers are reconciled through the bank-statement
                // import; encoding them here would double-count.
                "Withdrawal" => {
                    debug!("Row {}: skipping withdrawal for {:?}", row, record.name);
                    self.summary.skipped += 1;
                }
                other => {
                    warn!(
                        "Row {}: unhandled transaction type {:?}, skipping",
                        row, other
                    );
                    self.summary.skipped += 1;
                }
            }
        }

        Ok(())
    }

    /// Records a counterparty name, keeping first-seen order.
    fn observe_customer(&mut self, name: &str) {
        if self.seen_customers.insert(name.to_string()) {
            self.customers.push(name.to_string());
        }
    }

    /// Converts one completed payment record into a ledger transaction.
    ///
    /// Received payments (`From`) post the net to the header, the gross
    /// against the income account, and the fee against the fee account.
    /// Sent payments (`To`) negate the header and post the gross against
    /// the expense account instead.
    fn transform_payment(
        &mut self,
        record: &PaymentRecord,
        date: NaiveDate,
        row: usize,
    ) -> Result<LedgerTransaction> {
        let fee = parse_amount(&record.fees, row)?;
        let direct = parse_amount(&record.amount, row)?;
        let net = direct - fee;

        let direction =
            Direction::parse(&record.direction).ok_or_else(|| ExportError::MalformedRow {
                row,
                message: format!("unknown direction {:?}", record.direction),
            })?;

        self.summary.gross += direct;

        let (header_amount, first_split) = match direction {
            Direction::From => {
                self.summary.net += net;
                let split = Split {
                    account: self.accounts.income_account.clone(),
                    party: SplitParty::Counterparty(record.name.clone()),
                    amount: -direct,
                };
                (net, split)
            }
            Direction::To => {
                self.summary.net -= net;
                let split = Split {
                    account: self.accounts.expense_account.clone(),
                    party: SplitParty::Counterparty(record.name.clone()),
                    amount: direct,
                };
                (-net, split)
            }
        };

        let fee_split = Split {
            account: self.accounts.fee_account.clone(),
            party: SplitParty::Fee,
            amount: fee,
        };

        Ok(LedgerTransaction {
            date: ledger::iif_date(date),
            account: self.accounts.source_account.clone(),
            name: record.name.clone(),
            memo: self.accounts.memo.clone(),
            amount: header_amount,
            splits: [first_split, fee_split],
        })
    }

    /// Writes the import file: format declarations, then the customer
    /// list, then each transaction block in input order.
    pub fn write_output<W: Write>(&self, mut writer: W) -> Result<()> {
        writeln!(writer, "{}", ledger::TRNS_COLUMNS)?;
        writeln!(writer, "{}", ledger::SPL_COLUMNS)?;
        writeln!(writer, "{}", ledger::ENDTRNS_MARKER)?;
        writeln!(writer, "{}", ledger::CUST_COLUMNS)?;
        for customer in &self.customers {
            writeln!(writer, "CUST\t{}", customer)?;
        }
        for tx in &self.transactions {
            write!(writer, "{}", tx)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Distinct counterparty names, in first-seen order.
    pub fn customers(&self) -> &[String] {
        &self.customers
    }

    /// Transformed transaction blocks, in input order.
    pub fn transactions(&self) -> &[LedgerTransaction] {
        &self.transactions
    }

    /// Running totals for this run.
    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }
}

impl Default for IifExporter {
    fn default() -> Self {
        Self::new(AccountNames::default())
    }
}

/// Parses a currency field, tagging failures with the row number.
fn parse_amount(value: &str, row: usize) -> Result<Money> {
    Money::from_str(value).map_err(|_| ExportError::MalformedAmount {
        row,
        value: value.to_string(),
    })
}
