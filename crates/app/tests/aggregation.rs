use dashboard_app::{PriceTable, aggregate, record_cost};
use dashboard_core::UsageRecord;

fn record(user_id: &str, model: &str, context: u64, generated: u64, timestamp: i64) -> UsageRecord {
    UsageRecord {
        user_id: user_id.to_string(),
        model: model.to_string(),
        context_tokens: context,
        generated_tokens: generated,
        timestamp,
    }
}

fn table() -> PriceTable {
    PriceTable::builtin().expect("builtin table")
}

#[test]
fn cost_matches_formula_exactly() {
    let table = table();
    let rec = record("u1", "gpt-3.5-turbo-0613", 1500, 700, 1_700_000_000);
    let cost = record_cost(&rec, &table).expect("cost");
    let expected = 0.001 * 1.5 + 0.002 * 0.7;
    assert!((cost - expected).abs() < 1e-12);
}

#[test]
fn known_reference_record_costs_nine_cents() {
    let table = table();
    let rec = record("u1", "gpt-4-0613", 1000, 1000, 1_700_000_000);
    let report = aggregate(&[rec], &table);
    assert_eq!(report.totals.len(), 1);
    assert_eq!(report.totals[0].user_id, "u1");
    assert!((report.totals[0].total_cost - 0.09).abs() < 1e-12);
}

#[test]
fn totals_conserve_summed_record_costs() {
    let table = table();
    let records = vec![
        record("u1", "gpt-4-0613", 1000, 1000, 1_700_000_000),
        record("u2", "gpt-3.5-turbo-1106", 2000, 500, 1_700_000_100),
        record("u1", "gpt-4-1106-preview", 3000, 1500, 1_700_086_400),
        record("u3", "text-embedding-ada-002-v2", 10_000, 0, 1_700_172_800),
    ];

    let per_record: f64 = records
        .iter()
        .map(|rec| record_cost(rec, &table).expect("cost"))
        .sum();
    let report = aggregate(&records, &table);
    assert!((report.grand_total() - per_record).abs() < 1e-9);
}

#[test]
fn total_rows_cover_exactly_the_distinct_users() {
    let table = table();
    let records = vec![
        record("alice", "gpt-4-0613", 100, 100, 1_700_000_000),
        record("bob", "gpt-4-0613", 100, 100, 1_700_000_000),
        record("alice", "gpt-3.5-turbo-0613", 100, 100, 1_700_000_000),
    ];

    let report = aggregate(&records, &table);
    let users: Vec<&str> = report.totals.iter().map(|row| row.user_id.as_str()).collect();
    assert_eq!(users, vec!["alice", "bob"]);
}

#[test]
fn rows_keep_first_occurrence_order() {
    let table = table();
    let records = vec![
        record("zoe", "gpt-4-0613", 100, 100, 1_700_000_000),
        record("adam", "gpt-4-0613", 100, 100, 1_700_000_000),
        record("zoe", "gpt-4-0613", 100, 100, 1_700_000_000),
        record("mia", "gpt-4-0613", 100, 100, 1_700_000_000),
    ];

    let report = aggregate(&records, &table);
    let order: Vec<&str> = report.totals.iter().map(|row| row.user_id.as_str()).collect();
    assert_eq!(order, vec!["zoe", "adam", "mia"]);
    let series_order: Vec<&str> = report.series.iter().map(|s| s.user_id.as_str()).collect();
    assert_eq!(series_order, order);
}

#[test]
fn series_keep_per_record_costs_in_input_order() {
    let table = table();
    let records = vec![
        record("u1", "gpt-4-0613", 1000, 0, 1_700_000_000),
        record("u1", "gpt-4-0613", 0, 1000, 1_700_086_400),
    ];

    let report = aggregate(&records, &table);
    assert_eq!(report.series.len(), 1);
    let costs = &report.series[0].costs;
    assert_eq!(costs.len(), 2);
    assert!((costs[0] - 0.03).abs() < 1e-12);
    assert!((costs[1] - 0.06).abs() < 1e-12);
    assert_eq!(report.labels, vec!["2023-11-14", "2023-11-15"]);
    assert_eq!(report.lines.len(), 2);
    assert_eq!(report.lines[0].date, "2023-11-14");
    assert_eq!(report.lines[0].model, "gpt-4-0613");
}

#[test]
fn unknown_models_are_skipped_and_counted() {
    let table = table();
    let records = vec![
        record("u1", "gpt-4-0613", 1000, 1000, 1_700_000_000),
        record("u1", "gpt-9-experimental", 1000, 1000, 1_700_000_000),
        record("u2", "gpt-9-experimental", 500, 500, 1_700_000_000),
        record("u2", "not-a-model", 1, 1, 1_700_000_000),
    ];

    let report = aggregate(&records, &table);
    assert_eq!(report.skipped_unknown_models, 3);
    assert_eq!(
        report.unknown_models,
        vec!["gpt-9-experimental".to_string(), "not-a-model".to_string()]
    );
    // u2 never produced a costed record, so it has no total row.
    assert_eq!(report.totals.len(), 1);
    assert!((report.totals[0].total_cost - 0.09).abs() < 1e-12);
    assert_eq!(report.lines.len(), 1);
    assert!(report
        .totals
        .iter()
        .all(|row| row.total_cost.is_finite()));
}

#[test]
fn aggregation_is_idempotent() {
    let table = table();
    let records = vec![
        record("u1", "gpt-4-0613", 1000, 1000, 1_700_000_000),
        record("u2", "gpt-3.5-turbo-0613", 4000, 2000, 1_700_086_400),
        record("u1", "gpt-4-1106-preview", 2500, 100, 1_700_172_800),
    ];

    let first = aggregate(&records, &table);
    let second = aggregate(&records, &table);
    assert_eq!(first, second);
}

#[test]
fn empty_input_yields_empty_report() {
    let report = aggregate(&[], &table());
    assert!(report.totals.is_empty());
    assert!(report.series.is_empty());
    assert!(report.lines.is_empty());
    assert!(report.labels.is_empty());
    assert_eq!(report.skipped_unknown_models, 0);
}
