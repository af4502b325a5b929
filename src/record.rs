//! Payment-export record model for CSV parsing.

use chrono::NaiveDate;
use serde::Deserialize;

/// Date format used by the payment export, e.g. `"Sep 20, 2010"`.
const EXPORT_DATE_FORMAT: &str = "%b %d, %Y";

/// Raw payment record as read from the export CSV.
///
/// One row of
/// `Date, Type, To/From, Name, Status, Amount, Fees, Transaction ID`.
/// All fields are kept as text; amounts and dates are parsed later with
/// row context so errors can name the offending row.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentRecord {
    /// Transaction date in `"Mon DD, YYYY"` form
    #[serde(rename = "Date")]
    pub date: String,

    /// Transaction type: Payment, Withdrawal, or an export-specific other
    #[serde(rename = "Type")]
    pub tx_type: String,

    /// Direction of the money movement: To or From
    #[serde(rename = "To/From")]
    pub direction: String,

    /// Counterparty name
    #[serde(rename = "Name")]
    pub name: String,

    /// Settlement status; only `Completed` rows are imported
    #[serde(rename = "Status")]
    pub status: String,

    /// Gross amount as currency text, e.g. `"$1,234.56"`
    #[serde(rename = "Amount")]
    pub amount: String,

    /// Processing fees as currency text
    #[serde(rename = "Fees")]
    pub fees: String,

    /// Opaque export-side transaction identifier
    #[serde(rename = "Transaction ID")]
    pub transaction_id: String,
}

impl PaymentRecord {
    /// Returns `true` if the row settled. The export also lists `Initiated`
    /// rows that eventually succeed, but only fully settled rows are safe
    /// to import.
    pub fn is_completed(&self) -> bool {
        self.status == "Completed"
    }

    /// Parses the export-format date field.
    pub fn parse_date(&self) -> Result<NaiveDate, chrono::ParseError> {
        NaiveDate::parse_from_str(self.date.trim(), EXPORT_DATE_FORMAT)
    }
}

/// Direction of a payment relative to the account holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Money received from the counterparty.
    From,

    /// Money sent to the counterparty.
    To,
}

impl Direction {
    /// Parses the export's `To/From` column. Returns `None` for any other
    /// value.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "From" => Some(Direction::From),
            "To" => Some(Direction::To),
            _ => None,
        }
    }
}
