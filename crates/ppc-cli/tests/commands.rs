use std::fs;
use std::path::Path;

use clap::Parser;

use ppc_cli::cli::{AnalyzeArgs, Cli, ColumnsArgs, Command};
use ppc_cli::commands::{default_output_dir, run_analyze, run_columns};
use ppc_report::{ACTION_PLAN_FILE, HARVEST_FILE};

const REPORT: &str = "\
Campaign Name,Ad Group Name,Match Type,Customer Search Term,Spend,7 Day Total Sales,7 Day Total Orders (#)
SP Broad,Shoes,BROAD,running shoes,50,100,5
SP Phrase,Shoes,PHRASE,running shoes,10,40,3
SP Exact,Exact,EXACT,trail shoes,5,20,1
";

fn analyze_args(report: &Path, output_dir: &Path, dry_run: bool) -> AnalyzeArgs {
    AnalyzeArgs {
        report: report.to_path_buf(),
        output_dir: Some(output_dir.to_path_buf()),
        roas_threshold: 100,
        min_orders: 2,
        dry_run,
        json: false,
        currency: "₹".to_string(),
    }
}

#[test]
fn analyze_exports_both_tables() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("search_terms.csv");
    fs::write(&report, REPORT).unwrap();
    let output_dir = dir.path().join("out");

    let outcome = run_analyze(&analyze_args(&report, &output_dir, false)).unwrap();
    assert_eq!(outcome.ingest.aggregated_rows, 3);
    assert_eq!(outcome.result.cannibalization.summary.conflicted_terms, 1);
    assert_eq!(outcome.result.harvest.summary.new_keywords, 2);
    let exports = outcome.exports.unwrap();
    assert_eq!(exports.action_plan, Some(output_dir.join(ACTION_PLAN_FILE)));
    assert_eq!(exports.harvest_list, Some(output_dir.join(HARVEST_FILE)));
    assert!(output_dir.join(ACTION_PLAN_FILE).exists());
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("search_terms.csv");
    fs::write(&report, REPORT).unwrap();
    let output_dir = dir.path().join("out");

    let outcome = run_analyze(&analyze_args(&report, &output_dir, true)).unwrap();
    assert!(outcome.exports.is_none());
    assert!(!output_dir.exists());
}

#[test]
fn outcome_serializes_to_json() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("search_terms.csv");
    fs::write(&report, REPORT).unwrap();
    let outcome = run_analyze(&analyze_args(&report, dir.path(), true)).unwrap();
    let json = serde_json::to_value(&outcome).unwrap();
    let actions = &json["result"]["cannibalization"]["actions"];
    assert_eq!(actions[1]["status"], "KEEP");
    assert_eq!(actions[1]["reason"], "Efficient Choice (ROAS +100%)");
    assert_eq!(json["ingest"]["mapping"]["orders"]["header"], "7 Day Total Orders (#)");
}

#[test]
fn missing_column_error_shows_mapping() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("broken.csv");
    fs::write(&report, "Campaign Name,Customer Search Term\nC1,shoes\n").unwrap();
    let err = run_analyze(&analyze_args(&report, dir.path(), true)).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.starts_with("error processing file"));
    assert!(message.contains("campaign='Campaign Name'"));
    assert!(message.contains("spend=<missing>"));
}

#[test]
fn columns_reports_resolution() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("search_terms.csv");
    fs::write(&report, REPORT).unwrap();
    let resolution = run_columns(&ColumnsArgs { report }).unwrap();
    assert!(resolution.missing().is_empty());
}

#[test]
fn default_output_dir_sits_next_to_report() {
    assert_eq!(
        default_output_dir(Path::new("/data/report.csv")),
        Path::new("/data/output")
    );
}

#[test]
fn cli_rejects_threshold_outside_range() {
    assert!(Cli::try_parse_from(["ppc-optimizer", "analyze", "r.csv", "--roas-threshold", "20"]).is_err());
    assert!(Cli::try_parse_from(["ppc-optimizer", "analyze", "r.csv", "--min-orders", "0"]).is_err());
    let cli = Cli::try_parse_from([
        "ppc-optimizer",
        "analyze",
        "r.csv",
        "--roas-threshold",
        "150",
        "--min-orders",
        "3",
    ])
    .unwrap();
    match cli.command {
        Command::Analyze(args) => {
            assert_eq!(args.roas_threshold, 150);
            assert_eq!(args.min_orders, 3);
            assert_eq!(args.currency, "₹");
            assert!(!args.dry_run);
        }
        Command::Columns(_) => panic!("expected analyze"),
    }
}
