use std::fs;

use ppc_core::run_analysis;
use ppc_model::{AnalysisOptions, MatchType, SearchTermRow};
use ppc_report::{
    ACTION_PLAN_COLUMNS, ACTION_PLAN_FILE, HARVEST_COLUMNS, HARVEST_FILE, action_plan_frame,
    harvest_frame, write_frame_csv, write_outputs,
};

fn sample_rows() -> Vec<SearchTermRow> {
    vec![
        SearchTermRow::new("running shoes", "SP Broad", "Shoes", MatchType::Broad)
            .with_metrics(5, 100.0, 50.0),
        SearchTermRow::new("running shoes", "SP Phrase", "Shoes", MatchType::Phrase)
            .with_metrics(3, 40.0, 10.0),
        SearchTermRow::new("trail shoes", "SP Exact", "Exact", MatchType::Exact)
            .with_metrics(1, 20.0, 5.0),
    ]
}

fn csv_text(frame: &mut polars::prelude::DataFrame) -> String {
    let mut buffer = Vec::new();
    write_frame_csv(frame, &mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

#[test]
fn action_plan_has_expected_columns() {
    let result = run_analysis(&sample_rows(), &AnalysisOptions::new(100.0, 2));
    let mut frame = action_plan_frame(&result.cannibalization.actions).unwrap();
    assert_eq!(frame.height(), 2);
    let names: Vec<String> = frame
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(names, ACTION_PLAN_COLUMNS);

    let text = csv_text(&mut frame);
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(ACTION_PLAN_COLUMNS.join(",").as_str()));
    let body: Vec<&str> = lines.collect();
    assert_eq!(body.len(), 2);
    assert!(body[0].starts_with("running shoes,SP Broad,Shoes,"));
    assert!(body[0].contains(",NEGATE,Lower Efficiency/Volume"));
    assert!(body[1].starts_with("running shoes,SP Phrase,Shoes,"));
    assert!(body[1].contains(",KEEP,Efficient Choice (ROAS +100%)"));
}

#[test]
fn harvest_frame_lists_candidates() {
    let result = run_analysis(&sample_rows(), &AnalysisOptions::default());
    let mut frame = harvest_frame(&result.harvest.candidates).unwrap();
    assert_eq!(frame.height(), 2);
    let text = csv_text(&mut frame);
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(HARVEST_COLUMNS.join(",").as_str()));
    assert!(lines.next().unwrap().starts_with("running shoes,SP Broad,Shoes,BROAD,5,"));
    assert!(lines.next().unwrap().starts_with("running shoes,SP Phrase,Shoes,PHRASE,3,"));
}

#[test]
fn writes_both_files_into_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let output_dir = dir.path().join("output");
    let result = run_analysis(&sample_rows(), &AnalysisOptions::default());
    let paths = write_outputs(&result, &output_dir).unwrap();
    assert_eq!(paths.action_plan, Some(output_dir.join(ACTION_PLAN_FILE)));
    assert_eq!(paths.harvest_list, Some(output_dir.join(HARVEST_FILE)));
    let plan = fs::read_to_string(output_dir.join(ACTION_PLAN_FILE)).unwrap();
    assert_eq!(plan.lines().count(), 3);
}

#[test]
fn empty_analyses_write_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let rows = vec![
        SearchTermRow::new("trail shoes", "SP Exact", "Exact", MatchType::Exact)
            .with_metrics(1, 20.0, 5.0),
    ];
    let result = run_analysis(&rows, &AnalysisOptions::default());
    let paths = write_outputs(&result, dir.path()).unwrap();
    assert_eq!(paths.action_plan, None);
    assert_eq!(paths.harvest_list, None);
    assert!(!dir.path().join(ACTION_PLAN_FILE).exists());
}
