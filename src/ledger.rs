//! IIF ledger line model and rendering.
//!
//! An IIF import file is tab-separated and line-oriented: a format
//! declaration preamble, then one `TRNS`/`SPL`/`SPL`/`ENDTRNS` block per
//! transaction. String-valued columns are quoted, numeric columns are bare.

use crate::money::Money;
use chrono::{Datelike, NaiveDate};
use std::env;
use std::fmt;

/// Column declaration for transaction header lines.
pub const TRNS_COLUMNS: &str = "!TRNS\tDATE\tACCNT\tNAME\tCLASS\tAMOUNT\tMEMO";

/// Column declaration for split lines.
pub const SPL_COLUMNS: &str = "!SPL\tDATE\tACCNT\tNAME\tAMOUNT\tMEMO";

/// Terminator declaration closing the format preamble.
pub const ENDTRNS_MARKER: &str = "!ENDTRNS";

/// Column declaration for the customer list.
pub const CUST_COLUMNS: &str = "!CUST\tNAME";

/// Party name substituted onto fee splits, rendered unquoted.
pub const FEE_NAME: &str = "Fee";

/// Ledger account names the export maps onto, plus the transaction memo.
///
/// Recognized environment overrides: `IIF_SOURCE_ACCOUNT`,
/// `IIF_EXPENSE_ACCOUNT`, `IIF_FEE_ACCOUNT`, `IIF_INCOME_ACCOUNT`,
/// `IIF_MEMO`. Each value is a free-text ledger account path.
#[derive(Debug, Clone)]
pub struct AccountNames {
    /// The asset account the payment processor balance lives in.
    pub source_account: String,

    /// Expense account for payments sent.
    pub expense_account: String,

    /// Expense account for processor fees.
    pub fee_account: String,

    /// Income account for payments received.
    pub income_account: String,

    /// Memo stamped on every imported transaction.
    pub memo: String,
}

impl Default for AccountNames {
    fn default() -> Self {
        AccountNames {
            source_account: "Amazon Payments".to_string(),
            expense_account: "Contract Services:Fundraising Fees".to_string(),
            fee_account: "Business Expenses:Banking Fees".to_string(),
            income_account: "Direct Public Support:Individ, Business Contributions".to_string(),
            memo: "Amazon payment".to_string(),
        }
    }
}

impl AccountNames {
    /// Builds the account configuration from the environment, falling back
    /// to the defaults for any key that is unset.
    pub fn from_env() -> Self {
        let mut names = AccountNames::default();
        if let Ok(v) = env::var("IIF_SOURCE_ACCOUNT") {
            names.source_account = v;
        }
        if let Ok(v) = env::var("IIF_EXPENSE_ACCOUNT") {
            names.expense_account = v;
        }
        if let Ok(v) = env::var("IIF_FEE_ACCOUNT") {
            names.fee_account = v;
        }
        if let Ok(v) = env::var("IIF_INCOME_ACCOUNT") {
            names.income_account = v;
        }
        if let Ok(v) = env::var("IIF_MEMO") {
            names.memo = v;
        }
        names
    }
}

/// Formats a date the way IIF expects: `M/D/YYYY`, no zero-padding.
pub fn iif_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// The party named on a split line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitParty {
    /// The counterparty of the payment, rendered quoted.
    Counterparty(String),

    /// The literal fee party, rendered as the bare word `Fee`.
    Fee,
}

impl fmt::Display for SplitParty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitParty::Counterparty(name) => write!(f, "\"{}\"", name),
            SplitParty::Fee => f.write_str(FEE_NAME),
        }
    }
}

/// One leg of a double-entry transaction.
#[derive(Debug, Clone)]
pub struct Split {
    /// Ledger account the leg credits or debits.
    pub account: String,

    /// Named party on the leg.
    pub party: SplitParty,

    /// Signed amount.
    pub amount: Money,
}

/// One balanced double-entry group: a `TRNS` header plus exactly two `SPL`
/// legs, terminated by `ENDTRNS`. Built once per qualifying payment record
/// and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct LedgerTransaction {
    /// Transaction date, already in `M/D/YYYY` form.
    pub date: String,

    /// The source (asset) account.
    pub account: String,

    /// Counterparty name.
    pub name: String,

    /// Memo carried on the header line, in both the CLASS and MEMO columns.
    pub memo: String,

    /// Signed net amount on the header line.
    pub amount: Money,

    /// The two balancing legs.
    pub splits: [Split; 2],
}

impl LedgerTransaction {
    /// Returns `true` if the header amount plus the split amounts sum to
    /// zero to the cent.
    pub fn is_balanced(&self) -> bool {
        let sum = self.amount + self.splits[0].amount + self.splits[1].amount;
        sum.is_zero()
    }
}

impl fmt::Display for LedgerTransaction {
    /// Renders the full block. The header line carries a trailing tab after
    /// its final quoted memo; split lines have no memo column.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "TRNS\t\"{}\"\t\"{}\"\t\"{}\"\t\"{}\"\t{}\t\"{}\"\t",
            self.date, self.account, self.name, self.memo, self.amount, self.memo
        )?;
        for split in &self.splits {
            writeln!(
                f,
                "SPL\t\"{}\"\t\"{}\"\t{}\t{}",
                self.date, split.account, split.party, split.amount
            )?;
        }
        writeln!(f, "ENDTRNS")
    }
}
