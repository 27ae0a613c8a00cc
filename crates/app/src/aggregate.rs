use std::collections::{BTreeSet, HashMap};

use crate::costs::{UnknownModel, record_cost};
use crate::palette::user_color;
use crate::pricing::PriceTable;
use crate::util::time::day_label;
use dashboard_core::{CostLine, CostReport, UsageRecord, UserSeries, UserTotal};

/// Fold a record sequence into the full display aggregate.
///
/// Recomputed from scratch on every load; there is no incremental update.
/// Total rows and chart series appear in first-occurrence order of each
/// `user_id`, which governs render order. Records whose model has no price
/// entry are skipped and accounted for instead of poisoning the sums.
pub fn aggregate(records: &[UsageRecord], table: &PriceTable) -> CostReport {
    let mut report = CostReport::default();
    let mut total_index: HashMap<String, usize> = HashMap::new();
    let mut series_index: HashMap<String, usize> = HashMap::new();
    let mut unknown: BTreeSet<String> = BTreeSet::new();

    for record in records {
        let cost = match record_cost(record, table) {
            Ok(cost) => cost,
            Err(UnknownModel(model)) => {
                report.skipped_unknown_models += 1;
                unknown.insert(model);
                continue;
            }
        };

        let date = day_label(record.timestamp);
        report.labels.push(date.clone());
        report.lines.push(CostLine {
            date,
            cost,
            model: record.model.clone(),
            user_id: record.user_id.clone(),
        });

        match total_index.get(record.user_id.as_str()) {
            Some(&index) => report.totals[index].total_cost += cost,
            None => {
                total_index.insert(record.user_id.clone(), report.totals.len());
                report.totals.push(UserTotal {
                    user_id: record.user_id.clone(),
                    total_cost: cost,
                });
            }
        }

        match series_index.get(record.user_id.as_str()) {
            Some(&index) => report.series[index].costs.push(cost),
            None => {
                series_index.insert(record.user_id.clone(), report.series.len());
                report.series.push(UserSeries {
                    user_id: record.user_id.clone(),
                    color: user_color(&record.user_id),
                    costs: vec![cost],
                });
            }
        }
    }

    report.unknown_models = unknown.into_iter().collect();
    report
}
