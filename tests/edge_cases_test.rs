//! Edge case tests for the export pipeline, driven through the library
//! API over in-memory CSV.

use iif_export::{AccountNames, IifExporter};
use std::io::Cursor;

const HEADER: &str =
    "\"Date\",\"Type\",\"To/From\",\"Name\",\"Status\",\"Amount\",\"Fees\",\"Transaction ID\"";

fn run_csv(rows: &[&str]) -> String {
    let mut csv = String::from(HEADER);
    for row in rows {
        csv.push('\n');
        csv.push_str(row);
    }
    csv.push('\n');

    let mut exporter = IifExporter::new(AccountNames::default());
    exporter.process_csv(Cursor::new(csv)).unwrap();

    let mut output = Vec::new();
    exporter.write_output(&mut output).unwrap();
    String::from_utf8(output).unwrap()
}

// ==================== AMOUNT EDGE CASES ====================

#[test]
fn test_thousands_grouping_survives_round_trip() {
    let output = run_csv(&[
        "\"Sep 25, 2010\",\"Payment\",\"From\",\"Wiki Spot\",\"Completed\",\"$23,724.88\",\"$0.00\",\"ID1\"",
    ]);

    assert!(output.contains("\t23,724.88\t"));
    assert!(output.contains("\t-23,724.88\n"));
}

#[test]
fn test_zero_amount_payment() {
    let output = run_csv(&[
        "\"Sep 20, 2010\",\"Payment\",\"From\",\"Kickstarter\",\"Completed\",\"$0.00\",\"$0.00\",\"ID1\"",
    ]);

    assert!(output.contains("\"Kickstarter\"\t\"Amazon payment\"\t0.00\t"));
    assert_eq!(output.matches("\nENDTRNS\n").count(), 1);
}

#[test]
fn test_fee_exceeding_amount_goes_negative() {
    // A received payment smaller than its fee nets out below zero; the
    // block still balances.
    let output = run_csv(&[
        "\"Sep 20, 2010\",\"Payment\",\"From\",\"Scott Meehleib\",\"Completed\",\"$1.00\",\"$2.50\",\"ID1\"",
    ]);

    assert!(output.contains("\"Amazon payment\"\t-1.50\t"));
    assert!(output.contains("\"Scott Meehleib\"\t-1.00\n"));
    assert!(output.contains("\tFee\t2.50\n"));
}

#[test]
fn test_skipped_rows_never_parse_amounts() {
    // Skipped rows never have their amounts parsed; garbage amounts on a
    // failed row must not abort the run.
    let output = run_csv(&[
        "\"Sep 20, 2010\",\"Payment\",\"From\",\"Scott Meehleib\",\"Failed\",\"not a number\",\"also bad\",\"ID1\"",
    ]);

    assert!(!output.contains("TRNS\t\""));
    assert!(output.contains("CUST\tScott Meehleib"));
}

// ==================== DATE EDGE CASES ====================

#[test]
fn test_single_digit_month_and_day_are_unpadded() {
    let output = run_csv(&[
        "\"Jan 5, 2011\",\"Payment\",\"From\",\"Jane Miller\",\"Completed\",\"$10.00\",\"$0.40\",\"ID1\"",
    ]);

    assert!(output.contains("TRNS\t\"1/5/2011\""));
}

#[test]
fn test_december_date_keeps_both_digits() {
    let output = run_csv(&[
        "\"Dec 25, 2010\",\"Payment\",\"From\",\"Jane Miller\",\"Completed\",\"$10.00\",\"$0.40\",\"ID1\"",
    ]);

    assert!(output.contains("TRNS\t\"12/25/2010\""));
}

// ==================== CUSTOMER LIST EDGE CASES ====================

#[test]
fn test_repeat_counterparty_listed_once() {
    let output = run_csv(&[
        "\"Sep 20, 2010\",\"Payment\",\"From\",\"Jane Miller\",\"Completed\",\"$10.00\",\"$0.40\",\"ID1\"",
        "\"Sep 21, 2010\",\"Payment\",\"From\",\"Jane Miller\",\"Completed\",\"$20.00\",\"$0.80\",\"ID2\"",
        "\"Sep 22, 2010\",\"Payment\",\"From\",\"Jane Miller\",\"Failed\",\"$30.00\",\"$1.20\",\"ID3\"",
    ]);

    assert_eq!(output.matches("CUST\tJane Miller").count(), 1);
}

#[test]
fn test_unknown_type_still_contributes_customer() {
    let output = run_csv(&[
        "\"Sep 20, 2010\",\"Refund\",\"To\",\"Acme Refunds\",\"Completed\",\"$10.00\",\"$0.00\",\"ID1\"",
    ]);

    assert!(output.contains("CUST\tAcme Refunds"));
    assert!(!output.contains("TRNS\t\""));
}

#[test]
fn test_customer_list_precedes_transactions() {
    let output = run_csv(&[
        "\"Sep 20, 2010\",\"Payment\",\"From\",\"Jane Miller\",\"Completed\",\"$10.00\",\"$0.40\",\"ID1\"",
    ]);

    let cust_pos = output.find("CUST\tJane Miller").unwrap();
    let trns_pos = output.find("TRNS\t\"").unwrap();
    assert!(cust_pos < trns_pos);
}

// ==================== FIELD WHITESPACE ====================

#[test]
fn test_whitespace_in_fields_is_trimmed() {
    let output = run_csv(&[
        "\"Sep 20, 2010\",\"  Payment  \",\"  From  \",\"Jane Miller\",\"  Completed  \",\"  $10.00  \",\"  $0.40  \",\"ID1\"",
    ]);

    assert!(output.contains("\"Amazon payment\"\t9.60\t"));
}

// ==================== MIXED-RUN SANITY ====================

#[test]
fn test_mixed_run_imports_only_completed_payments() {
    let output = run_csv(&[
        "\"Sep 25, 2010\",\"Withdrawal\",\"To\",\"Wiki Spot\",\"Completed\",\"$500.00\",\"$0.00\",\"ID1\"",
        "\"Sep 24, 2010\",\"Payment\",\"From\",\"Scott Meehleib\",\"Initiated\",\"$50.00\",\"$1.60\",\"ID2\"",
        "\"Sep 23, 2010\",\"Payment\",\"To\",\"Kickstarter\",\"Completed\",\"$1.00\",\"$0.00\",\"ID3\"",
        "\"Sep 22, 2010\",\"Payment\",\"From\",\"Jane Miller\",\"Completed\",\"$100.00\",\"$3.20\",\"ID4\"",
    ]);

    assert_eq!(output.matches("\nENDTRNS\n").count(), 2);
    assert!(output.contains("\"Kickstarter\"\t\"Amazon payment\"\t-1.00\t"));
    assert!(output.contains("\"Jane Miller\"\t\"Amazon payment\"\t96.80\t"));
}
