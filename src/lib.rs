//! # IIF Export
//!
//! A batch converter that turns a payment-export CSV into a
//! QuickBooks-compatible IIF import file: each completed payment becomes a
//! balanced double-entry transaction block, preceded by a customer list.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: 2 decimal places via `rust_decimal`
//! - **Single pass**: rows are classified and transformed in input order
//! - **Hard-stop errors**: a malformed row or amount aborts the run rather
//!   than producing a partially wrong import file
//!
//! ## Example
//!
//! ```
//! use iif_export::{AccountNames, IifExporter};
//! use std::io::Cursor;
//!
//! let csv = "\"Date\",\"Type\",\"To/From\",\"Name\",\"Status\",\"Amount\",\"Fees\",\"Transaction ID\"\n\
//!            \"Sep 20, 2010\",\"Payment\",\"From\",\"Scott Meehleib\",\"Completed\",\"$100.00\",\"$3.20\",\"ID1\"\n";
//! let mut exporter = IifExporter::new(AccountNames::default());
//! exporter.process_csv(Cursor::new(csv)).unwrap();
//!
//! let mut output = Vec::new();
//! exporter.write_output(&mut output).unwrap();
//! assert!(String::from_utf8(output).unwrap().contains("ENDTRNS"));
//! ```

pub mod error;
pub mod exporter;
pub mod ledger;
pub mod money;
pub mod record;

pub use error::{ExportError, Result};
pub use exporter::{IifExporter, RunSummary};
pub use ledger::{AccountNames, LedgerTransaction, Split, SplitParty};
pub use money::Money;
pub use record::{Direction, PaymentRecord};
