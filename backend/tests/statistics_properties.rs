//! Property tests for the gap-filling and pivoting pipeline.

use std::collections::HashSet;

use proptest::prelude::*;

use collab_stats::models::{CategorySeries, Observation, YearMonth};
use collab_stats::services::{fill_gaps, observed_range, to_chart_rows};

const CATEGORIES: [&str; 4] = ["collaborations", "groups", "services", "users"];

fn observation_strategy() -> impl Strategy<Value = Observation> {
    (2015i32..2026, 1u32..=12, 0i64..1_000).prop_map(|(y, m, c)| Observation::new(y, m, c))
}

fn series_strategy() -> impl Strategy<Value = CategorySeries> {
    prop::collection::vec(prop::collection::vec(observation_strategy(), 0..12), 1..=4).prop_map(
        |per_category| {
            per_category
                .into_iter()
                .enumerate()
                .map(|(i, obs)| (CATEGORIES[i].to_string(), obs))
                .collect::<CategorySeries>()
        },
    )
}

fn has_observations(series: &CategorySeries) -> bool {
    series.values().any(|v| !v.is_empty())
}

proptest! {
    #[test]
    fn prop_density(series in series_strategy()) {
        prop_assume!(has_observations(&series));
        let range = observed_range(&series).unwrap();
        let expected = range.start.months_until(&range.end) as usize + 1;

        let dense = fill_gaps(&series).unwrap();
        for entries in dense.values() {
            prop_assert_eq!(entries.len(), expected);
            prop_assert_eq!(entries[0].year_month(), range.start);
            prop_assert_eq!(entries[entries.len() - 1].year_month(), range.end);
            for pair in entries.windows(2) {
                prop_assert_eq!(pair[0].year_month().succ(), Some(pair[1].year_month()));
            }
        }
    }

    #[test]
    fn prop_cumulative_monotonic(series in series_strategy()) {
        let dense = fill_gaps(&series).unwrap();
        for entries in dense.values() {
            for pair in entries.windows(2) {
                prop_assert!(pair[0].count <= pair[1].count);
            }
        }
    }

    #[test]
    fn prop_last_count_is_total_of_distinct_months(series in series_strategy()) {
        let dense = fill_gaps(&series).unwrap();
        for (category, observations) in &series {
            // Later duplicates replace earlier ones.
            let mut seen = HashSet::new();
            let total: i64 = observations
                .iter()
                .rev()
                .filter(|o| seen.insert(o.year_month()))
                .map(|o| o.count)
                .sum();
            let last = dense[category].last().map(|o| o.count).unwrap_or(0);
            prop_assert_eq!(last, total);
        }
    }

    #[test]
    fn prop_shared_timeline(series in series_strategy()) {
        let dense = fill_gaps(&series).unwrap();
        let timelines: Vec<Vec<YearMonth>> = dense
            .values()
            .map(|v| v.iter().map(Observation::year_month).collect())
            .collect();
        for timeline in &timelines {
            prop_assert_eq!(timeline, &timelines[0]);
        }
    }

    #[test]
    fn prop_pivot_completeness(series in series_strategy()) {
        let dense = fill_gaps(&series).unwrap();
        let rows = to_chart_rows(&dense);

        for (category, entries) in &dense {
            for entry in entries {
                let label = entry.year_month().label();
                let matching: Vec<_> = rows.iter().filter(|r| r.name == label).collect();
                prop_assert_eq!(matching.len(), 1);
                prop_assert_eq!(matching[0].get(category), Some(entry.count));
            }
        }

        let labels: HashSet<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        prop_assert_eq!(labels.len(), rows.len());
    }

    #[test]
    fn prop_repivot_is_idempotent(series in series_strategy()) {
        let dense = fill_gaps(&series).unwrap();
        prop_assert_eq!(to_chart_rows(&dense), to_chart_rows(&dense));
    }
}

#[test]
fn test_pipeline_rows_for_two_categories() {
    let mut series = CategorySeries::new();
    series.insert(
        "users".to_string(),
        vec![Observation::new(2023, 1, 5), Observation::new(2023, 3, 2)],
    );
    series.insert(
        "collaborations".to_string(),
        vec![Observation::new(2023, 2, 4)],
    );

    let rows = to_chart_rows(&fill_gaps(&series).unwrap());
    let json = serde_json::to_value(&rows).unwrap();

    assert_eq!(
        json,
        serde_json::json!([
            {"name": "1-2023", "collaborations": 0, "users": 5},
            {"name": "2-2023", "collaborations": 4, "users": 5},
            {"name": "3-2023", "collaborations": 4, "users": 7}
        ])
    );
}
