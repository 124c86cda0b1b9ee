//! End-to-end tests: real PDFs through the board and back off disk.

mod common;

use common::TestHarness;
use jobtrack::{extract_job_name, Extraction, PdfTextExtractor, Stage, NO_JOB_NAME};

/// A single end-to-end extraction case.
struct TestCase {
    /// Test case name for identification.
    name: &'static str,
    /// Text lines written into the PDF.
    lines: &'static [&'static str],
    /// Expected entry in the job list.
    expected: &'static str,
}

const TEST_CASES: &[TestCase] = &[
    TestCase {
        name: "single_name",
        lines: &["WORK ORDER", "Name: Smith Kitchen", "Date: 2024-03-01"],
        expected: "Smith Kitchen",
    },
    TestCase {
        name: "customer_and_job_names",
        lines: &["Customer Name: Smith", "Job Name: Kitchen Remodel"],
        expected: "Kitchen Remodel - Smith",
    },
    TestCase {
        name: "third_name_ignored",
        lines: &["Name: A", "Name: B", "Name: C"],
        expected: "B - A",
    },
    TestCase {
        name: "no_name_line",
        lines: &["Quote 1042", "Total: 1200.00"],
        expected: NO_JOB_NAME,
    },
];

#[test]
fn test_extraction_cases() {
    let harness = TestHarness::new();

    for case in TEST_CASES {
        let path = harness.pdf(&format!("{}.pdf", case.name), case.lines);
        let extraction = extract_job_name(&PdfTextExtractor::new(), &path);
        assert_eq!(
            extraction,
            Extraction::Name(case.expected.to_string()),
            "case '{}' failed",
            case.name
        );
    }
}

#[test]
fn test_corrupt_pdf_shows_error_entry() {
    let harness = TestHarness::new();
    let path = harness.corrupt_pdf("broken.pdf");

    let mut board = harness.open_board();
    let entry = board.add_pdf(&path).to_string();

    assert!(entry.starts_with("Error reading PDF:"), "got: {}", entry);
    assert_eq!(board.store().documents(), &[path]);
}

#[test]
fn test_missing_file_shows_error_entry() {
    let harness = TestHarness::new();
    let path = harness.docs_dir.join("deleted.pdf");

    let extraction = extract_job_name(&PdfTextExtractor::new(), &path);
    assert!(extraction.is_failed());
    assert!(extraction.display_name().starts_with("Error reading PDF:"));
}

#[test]
fn test_session_survives_restart() {
    let harness = TestHarness::new();
    let smith = harness.pdf("smith.pdf", &["Name: Smith"]);
    let jones = harness.pdf("jones.pdf", &["Name: Kitchen", "Name: Jones"]);
    let broken = harness.corrupt_pdf("broken.pdf");

    let mut board = harness.open_board();
    assert!(board.entries().is_empty());
    board.add_pdf(&jones);
    board.add_pdf(&smith);
    board.add_pdf(&broken);
    board.select_stage("Smith", Stage::Cutting);
    board.select_stage("Jones - Kitchen", Stage::Design);
    board.select_stage("Jones - Kitchen", Stage::Touchups);
    board.close().unwrap();

    let board = harness.open_board();
    assert_eq!(board.entries()[0], "Jones - Kitchen");
    assert_eq!(board.entries()[1], "Smith");
    assert!(board.entries()[2].starts_with("Error reading PDF:"));
    assert_eq!(board.store().documents(), &[jones, smith, broken]);

    assert_eq!(board.select_job(0).unwrap().current(), Some(Stage::Touchups));
    assert_eq!(board.select_job(1).unwrap().current(), Some(Stage::Cutting));
    assert_eq!(board.select_job(2).unwrap().current(), None);
}

#[test]
fn test_explicit_save_writes_record() {
    let harness = TestHarness::new();
    let smith = harness.pdf("smith.pdf", &["Name: Smith"]);

    let mut board = harness.open_board();
    board.add_pdf(&smith);
    board.select_stage("Smith", Stage::Install);
    board.save().unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&harness.data_file).unwrap()).unwrap();
    assert_eq!(raw["uploaded_files"][0], smith.to_str().unwrap());
    assert_eq!(raw["job_stages_state"]["Smith"], "INSTALL");
}
