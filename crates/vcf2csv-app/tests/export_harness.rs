//! End-to-end export: vCard text in, CSV rows out.

use pretty_assertions::assert_eq;
use vcf2csv_app::export::{ExportOptions, ExportSummary, census, export};
use vcf2csv_core::config::OnError;

const CONTACTS: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
PRODID:-//Apple Inc.//macOS 14.0//EN\r\n\
N:Smith;Jane & Bob;;;\r\n\
FN:Jane & Bob Smith\r\n\
item1.ADR;type=HOME;type=pref:;;1 Main St;Springfield;IL;62701;USA\r\n\
item2.ADR;type=WORK:;;2 Oak Ave;Shelbyville;IL;62565;\r\n\
TEL;type=CELL;type=VOICE;type=pref:5551234567\r\n\
TEL;type=HOME;type=VOICE:555 987 6543\r\n\
EMAIL;type=INTERNET;type=HOME;type=pref:jane@example.com\r\n\
BDAY:1980-03-05\r\n\
item3.X-ABRELATEDNAMES:5/6 - Bob\r\n\
item3.X-ABLabel:_$!<Spouse>!$_\r\n\
item4.X-ABRELATEDNAMES:2010-01-02 - Tim\r\n\
item4.X-ABLabel:_$!<Child>!$_\r\n\
item5.X-ABDATE:2005-06-01\r\n\
item5.X-ABLabel:_$!<Anniversary>!$_\r\n\
END:VCARD\r\n\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
N:Doe;John;;;\r\n\
ADR:PO Box 9;;;Springfield;IL;62701;\r\n\
END:VCARD\r\n\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
N:Roe;Rita;;;\r\n\
PHOTO;VALUE=uri:https://example.com/rita.jpg\r\n\
EMAIL:rita@example.com\r\n\
NOTE:Neighbour\r\n\
END:VCARD\r\n";

const JANE_ROW: [&str; 9] = [
    "Jane & Bob",
    "Smith",
    "",
    "1 Main St\nSpringfield, IL 62701\n\n2 Oak Ave\nShelbyville, IL 62565",
    "(555) 123-4567 (cell)\n(555) 987-6543 (home)",
    "jane@example.com (home)",
    "Jane: Mar 5\nBob: May 6",
    "Tim: Jan 2",
    "Jun 1",
];

const RITA_ROW: [&str; 9] = [
    "Rita",
    "Roe",
    "https://example.com/rita.jpg",
    "",
    "",
    "rita@example.com",
    "",
    "",
    "",
];

type Rows = Vec<Vec<String>>;

fn run(input: &str, options: &ExportOptions) -> (anyhow::Result<ExportSummary>, Rows) {
    let mut output = Vec::new();
    let result = export(input.as_bytes(), &mut output, options);

    let rows = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(output.as_slice())
        .records()
        .map(|row| row.unwrap().iter().map(String::from).collect::<Vec<_>>())
        .collect();

    (result, rows)
}

fn strings(row: [&str; 9]) -> Vec<String> {
    row.iter().map(ToString::to_string).collect()
}

#[test_log::test]
fn skip_policy_exports_remaining_records() {
    let options = ExportOptions {
        on_error: OnError::Skip,
        ..ExportOptions::default()
    };

    let (result, rows) = run(CONTACTS, &options);

    assert_eq!(
        result.unwrap(),
        ExportSummary {
            written: 2,
            skipped: 1
        }
    );
    assert_eq!(rows, [strings(JANE_ROW), strings(RITA_ROW)]);
}

#[test_log::test]
fn halt_policy_stops_after_flushing() {
    let (result, rows) = run(CONTACTS, &ExportOptions::default());

    let error = result.unwrap_err();
    assert!(error.to_string().contains("record 2"), "{error:#}");
    assert_eq!(rows, [strings(JANE_ROW)]);
}

#[test]
fn header_row_comes_first() {
    let options = ExportOptions {
        header: true,
        on_error: OnError::Skip,
        ..ExportOptions::default()
    };

    let (_, rows) = run(CONTACTS, &options);

    assert_eq!(rows.len(), 3);
    assert_eq!(
        rows[0],
        [
            "Given Name",
            "Family Name",
            "Image",
            "Address",
            "Phone",
            "Email",
            "Birthday",
            "Children",
            "Anniversary"
        ]
    );
    assert!(rows.iter().all(|row| row.len() == 9));
}

#[test_log::test]
fn debug_diagnostics_do_not_change_output() {
    let quiet = ExportOptions {
        on_error: OnError::Skip,
        ..ExportOptions::default()
    };
    let verbose = ExportOptions { debug: true, ..quiet };

    assert_eq!(run(CONTACTS, &quiet).1, run(CONTACTS, &verbose).1);
}

#[test]
fn empty_input_writes_nothing() {
    let (result, rows) = run("", &ExportOptions::default());
    assert_eq!(result.unwrap(), ExportSummary::default());
    assert!(rows.is_empty());
}

#[test]
fn decode_error_ends_run_under_skip() {
    let input = "\
BEGIN:VCARD\n\
N:Doe;John\n\
END:VCARD\n\
BEGIN:VCARD\n\
N:Roe;Rita\n";
    let options = ExportOptions {
        on_error: OnError::Skip,
        ..ExportOptions::default()
    };

    let (result, rows) = run(input, &options);

    assert!(result.is_err());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], "John");
}

#[test]
fn invalid_utf8_is_rejected() {
    let mut output = Vec::new();
    let result = export(&b"BEGIN:VCARD\n\xff\n"[..], &mut output, &ExportOptions::default());
    assert!(result.is_err());
    assert!(output.is_empty());
}

#[test]
fn census_counts_fields_across_records() {
    let census = census(CONTACTS.as_bytes()).unwrap();

    assert_eq!(census.max_occurrences("ADR"), 2);
    assert_eq!(census.max_occurrences("TEL"), 2);
    assert_eq!(census.max_occurrences("X-ABLABEL"), 3);
    assert_eq!(census.max_occurrences("PHOTO"), 1);
    assert_eq!(census.max_occurrences("VERSION"), 0);
    assert_eq!(census.max_occurrences("PRODID"), 0);
}
