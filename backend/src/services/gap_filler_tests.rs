use crate::models::{CategorySeries, Observation, YearMonth};
use crate::services::error::StatsError;
use crate::services::gap_filler::{
    fill_gaps, fill_gaps_within, month_count, observed_range, validate_observations,
    DEFAULT_MAX_MONTHS,
};

fn series(entries: &[(&str, Vec<Observation>)]) -> CategorySeries {
    entries
        .iter()
        .map(|(name, obs)| (name.to_string(), obs.clone()))
        .collect()
}

fn counts(observations: &[Observation]) -> Vec<i64> {
    observations.iter().map(|o| o.count).collect()
}

fn months(observations: &[Observation]) -> Vec<(u32, i32)> {
    observations.iter().map(|o| (o.month, o.year)).collect()
}

#[test]
fn test_fill_gaps_carries_running_total_through_gap() {
    let input = series(&[(
        "users",
        vec![Observation::new(2023, 1, 5), Observation::new(2023, 3, 2)],
    )]);

    let dense = fill_gaps(&input).unwrap();
    let users = &dense["users"];

    assert_eq!(months(users), vec![(1, 2023), (2, 2023), (3, 2023)]);
    assert_eq!(counts(users), vec![5, 5, 7]);
}

#[test]
fn test_fill_gaps_extends_narrow_category_to_global_range() {
    let input = series(&[
        (
            "users",
            vec![Observation::new(2022, 11, 3), Observation::new(2023, 2, 4)],
        ),
        ("collaborations", vec![Observation::new(2022, 12, 1)]),
    ]);

    let dense = fill_gaps(&input).unwrap();

    let collaborations = &dense["collaborations"];
    assert_eq!(
        months(collaborations),
        vec![(11, 2022), (12, 2022), (1, 2023), (2, 2023)]
    );
    assert_eq!(counts(collaborations), vec![0, 1, 1, 1]);
    assert_eq!(counts(&dense["users"]), vec![3, 3, 3, 7]);
}

#[test]
fn test_fill_gaps_single_observation() {
    let input = series(&[("users", vec![Observation::new(2024, 6, 10)])]);

    let dense = fill_gaps(&input).unwrap();
    assert_eq!(dense["users"], vec![Observation::new(2024, 6, 10)]);
}

#[test]
fn test_fill_gaps_same_month_everywhere() {
    let input = series(&[
        ("users", vec![Observation::new(2021, 7, 2)]),
        ("groups", vec![Observation::new(2021, 7, 9)]),
    ]);

    let dense = fill_gaps(&input).unwrap();
    assert_eq!(dense["users"].len(), 1);
    assert_eq!(dense["groups"].len(), 1);
    assert_eq!(dense["groups"][0].count, 9);
}

#[test]
fn test_fill_gaps_empty_category_gets_zero_timeline() {
    let input = series(&[
        (
            "users",
            vec![Observation::new(2023, 1, 1), Observation::new(2023, 4, 1)],
        ),
        ("services", vec![]),
    ]);

    let dense = fill_gaps(&input).unwrap();
    assert_eq!(counts(&dense["services"]), vec![0, 0, 0, 0]);
    assert_eq!(months(&dense["services"]), months(&dense["users"]));
}

#[test]
fn test_fill_gaps_orders_unsorted_input() {
    let input = series(&[(
        "users",
        vec![
            Observation::new(2023, 3, 1),
            Observation::new(2022, 12, 4),
            Observation::new(2023, 1, 2),
        ],
    )]);

    let dense = fill_gaps(&input).unwrap();
    assert_eq!(
        months(&dense["users"]),
        vec![(12, 2022), (1, 2023), (2, 2023), (3, 2023)]
    );
    assert_eq!(counts(&dense["users"]), vec![4, 6, 6, 7]);
}

#[test]
fn test_fill_gaps_duplicate_month_keeps_last() {
    let input = series(&[(
        "users",
        vec![Observation::new(2023, 1, 2), Observation::new(2023, 1, 6)],
    )]);

    let dense = fill_gaps(&input).unwrap();
    assert_eq!(counts(&dense["users"]), vec![6]);
}

#[test]
fn test_fill_gaps_without_observations() {
    let input = series(&[("users", vec![]), ("groups", vec![])]);
    let dense = fill_gaps(&input).unwrap();
    assert_eq!(dense.len(), 2);
    assert!(dense.values().all(|v| v.is_empty()));

    assert!(fill_gaps(&CategorySeries::new()).unwrap().is_empty());
}

#[test]
fn test_fill_gaps_does_not_mutate_input() {
    let input = series(&[(
        "users",
        vec![Observation::new(2023, 3, 2), Observation::new(2023, 1, 5)],
    )]);
    let before = input.clone();
    let _ = fill_gaps(&input).unwrap();
    assert_eq!(input, before);
}

#[test]
fn test_fill_gaps_rejects_invalid_month() {
    let input = series(&[("users", vec![Observation::new(2023, 13, 1)])]);
    let err = fill_gaps(&input).unwrap_err();
    assert_eq!(
        err,
        StatsError::InvalidMonth {
            category: "users".to_string(),
            year: 2023,
            month: 13,
        }
    );
}

#[test]
fn test_fill_gaps_rejects_negative_count() {
    let input = series(&[("users", vec![Observation::new(2023, 2, -1)])]);
    assert!(matches!(
        fill_gaps(&input),
        Err(StatsError::NegativeCount { count: -1, .. })
    ));
}

#[test]
fn test_validate_rejects_unrepresentable_year() {
    let obs = vec![Observation::new(i32::MAX, 1, 0)];
    assert!(matches!(
        validate_observations("users", &obs),
        Err(StatsError::YearOutOfRange { .. })
    ));
}

#[test]
fn test_observed_range_and_month_count() {
    let input = series(&[
        ("a", vec![Observation::new(2020, 5, 1)]),
        ("b", vec![Observation::new(2021, 4, 1)]),
        ("c", vec![]),
    ]);

    let range = observed_range(&input).unwrap();
    assert_eq!(range.start, YearMonth::new(2020, 5));
    assert_eq!(range.end, YearMonth::new(2021, 4));
    assert_eq!(month_count(&range), 12);

    assert_eq!(observed_range(&series(&[("c", vec![])])), None);
}

#[test]
fn test_fill_gaps_within_rejects_span_before_building() {
    let input = series(&[
        (
            "users",
            vec![Observation::new(-200_000, 1, 1), Observation::new(200_000, 1, 1)],
        ),
        ("c0", vec![]),
        ("c1", vec![]),
        ("c2", vec![]),
    ]);

    assert_eq!(
        fill_gaps_within(&input, DEFAULT_MAX_MONTHS),
        Err(StatsError::RangeTooLarge {
            months: 4_800_001,
            limit: DEFAULT_MAX_MONTHS,
        })
    );
}

#[test]
fn test_fill_gaps_within_accepts_span_at_limit() {
    let input = series(&[("users", vec![Observation::new(2020, 1, 1), Observation::new(2020, 12, 2)])]);

    let dense = fill_gaps_within(&input, 12).unwrap();
    assert_eq!(dense["users"].len(), 12);
    assert_eq!(dense, fill_gaps(&input).unwrap());

    // Empty input has no span to check.
    assert!(fill_gaps_within(&series(&[("users", vec![])]), 0).unwrap()["users"].is_empty());
}
