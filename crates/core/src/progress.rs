//! Per-exercise progress aggregation.
//!
//! Turns a user's workout history for one exercise into a chronologically
//! ordered series of "primary metric" points plus summary statistics. The
//! metric charted depends on the exercise's muscle group (see
//! [`crate::metrics`]).
//!
//! Absence of data is never an error: no entries, or entries that carry
//! neither the primary nor the fallback metric, degrade to zeros and an empty
//! or shorter series.

use chrono::SecondsFormat;
use serde::Serialize;

use crate::metrics::{metric_config_for, MetricConfig, RawMetrics};
use crate::types::Timestamp;

/// One logged session as seen by the aggregator.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSample {
    pub date: Timestamp,
    pub metrics: RawMetrics,
}

/// A single charted point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressPoint {
    /// ISO-8601 timestamp of the session.
    pub date: String,
    pub weight: Option<f64>,
    pub reps: Option<i32>,
    pub sets: Option<i32>,
    pub time_minutes: Option<f64>,
    pub distance_km: Option<f64>,
    pub primary_metric: f64,
    /// Label of the field the value was actually read from.
    pub primary_label: &'static str,
    pub primary_unit: &'static str,
}

/// Progress summary for one exercise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressStats {
    pub max_primary: f64,
    pub avg_primary: f64,
    pub last_primary: f64,
    /// Number of logged sessions, including ones that contributed no point.
    pub total_sessions: usize,
    pub primary_metric_name: &'static str,
    pub primary_metric_unit: &'static str,
    pub progress_data: Vec<ProgressPoint>,
}

impl ProgressStats {
    /// Zero-valued stats that still carry the metric name and unit.
    pub fn empty(config: &MetricConfig) -> Self {
        Self {
            max_primary: 0.0,
            avg_primary: 0.0,
            last_primary: 0.0,
            total_sessions: 0,
            primary_metric_name: config.primary_label,
            primary_metric_unit: config.primary_unit,
            progress_data: Vec::new(),
        }
    }
}

/// Compute progress statistics for an exercise in `muscle_group`.
///
/// `samples` may arrive in any order. They are sorted by date with a stable
/// sort, so sessions sharing a timestamp keep their relative input order.
pub fn compute_progress(muscle_group: &str, mut samples: Vec<ProgressSample>) -> ProgressStats {
    let config = metric_config_for(muscle_group);
    let mut stats = ProgressStats::empty(&config);
    stats.total_sessions = samples.len();

    samples.sort_by_key(|sample| sample.date);

    stats.progress_data = samples
        .iter()
        .filter_map(|sample| {
            let (value, field) = config.resolve(&sample.metrics)?;
            Some(ProgressPoint {
                date: sample.date.to_rfc3339_opts(SecondsFormat::Secs, true),
                weight: sample.metrics.weight,
                reps: sample.metrics.repetitions,
                sets: sample.metrics.sets,
                time_minutes: sample.metrics.time_minutes,
                distance_km: sample.metrics.distance_km,
                primary_metric: value,
                primary_label: field.label(),
                primary_unit: field.unit(),
            })
        })
        .collect();

    if let Some(last) = stats.progress_data.last() {
        let values = stats.progress_data.iter().map(|p| p.primary_metric);
        stats.max_primary = values.clone().fold(f64::NEG_INFINITY, f64::max);
        stats.avg_primary = values.sum::<f64>() / stats.progress_data.len() as f64;
        stats.last_primary = last.primary_metric;
    }

    stats
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    fn day(n: i64) -> Timestamp {
        Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap() + Duration::days(n)
    }

    fn cardio(date: Timestamp, time: Option<f64>, distance: Option<f64>) -> ProgressSample {
        ProgressSample {
            date,
            metrics: RawMetrics {
                time_minutes: time,
                distance_km: distance,
                ..Default::default()
            },
        }
    }

    fn lifting(date: Timestamp, weight: Option<f64>, reps: Option<i32>) -> ProgressSample {
        ProgressSample {
            date,
            metrics: RawMetrics {
                weight,
                repetitions: reps,
                sets: Some(3),
                ..Default::default()
            },
        }
    }

    #[test]
    fn no_entries_yields_zeroes_with_metric_name() {
        for group in ["Cardio", "Abdomen", "Pecho"] {
            let stats = compute_progress(group, Vec::new());
            assert_eq!(stats.total_sessions, 0);
            assert!(stats.progress_data.is_empty());
            assert_eq!(stats.max_primary, 0.0);
            assert_eq!(stats.avg_primary, 0.0);
            assert_eq!(stats.last_primary, 0.0);
        }
        assert_eq!(compute_progress("Cardio", vec![]).primary_metric_name, "Tiempo");
        assert_eq!(compute_progress("Pecho", vec![]).primary_metric_unit, "kg");
    }

    #[test]
    fn running_times_are_summarised() {
        let samples = vec![
            cardio(day(0), Some(20.0), None),
            cardio(day(1), Some(30.0), None),
            cardio(day(2), Some(25.0), None),
        ];
        let stats = compute_progress("Cardio", samples);

        let values: Vec<f64> = stats.progress_data.iter().map(|p| p.primary_metric).collect();
        assert_eq!(values, vec![20.0, 30.0, 25.0]);
        assert_eq!(stats.max_primary, 30.0);
        assert_eq!(stats.avg_primary, 25.0);
        assert_eq!(stats.last_primary, 25.0);
        assert_eq!(stats.total_sessions, 3);
        assert!(stats
            .progress_data
            .iter()
            .all(|p| p.primary_label == "Tiempo" && p.primary_unit == "min"));
    }

    #[test]
    fn distance_fills_in_for_missing_time() {
        let samples = vec![
            cardio(day(0), Some(20.0), None),
            cardio(day(1), None, Some(5.0)),
            cardio(day(2), Some(25.0), None),
        ];
        let stats = compute_progress("Cardio", samples);

        let middle = &stats.progress_data[1];
        assert_eq!(middle.primary_metric, 5.0);
        assert_eq!(middle.primary_label, "Distancia");
        assert_eq!(middle.primary_unit, "km");
        assert_eq!(stats.progress_data[0].primary_label, "Tiempo");
        assert_eq!(stats.progress_data[2].primary_label, "Tiempo");
    }

    #[test]
    fn bodyweight_sets_fall_back_to_reps() {
        let samples = vec![
            lifting(day(0), None, Some(10)),
            lifting(day(1), Some(60.0), Some(8)),
        ];
        let stats = compute_progress("Pecho", samples);

        assert_eq!(stats.progress_data[0].primary_metric, 10.0);
        assert_eq!(stats.progress_data[0].primary_label, "Repeticiones");
        assert_eq!(stats.progress_data[0].primary_unit, "reps");
        assert_eq!(stats.progress_data[1].primary_metric, 60.0);
        assert_eq!(stats.progress_data[1].primary_label, "Peso");
    }

    #[test]
    fn entries_without_values_count_as_sessions_only() {
        let samples = vec![
            lifting(day(0), Some(50.0), None),
            lifting(day(1), None, None),
            lifting(day(2), Some(70.0), None),
        ];
        let stats = compute_progress("Espalda", samples);

        assert_eq!(stats.total_sessions, 3);
        assert_eq!(stats.progress_data.len(), 2);
        assert_eq!(stats.avg_primary, 60.0);
        assert_eq!(stats.max_primary, 70.0);
        assert_eq!(stats.last_primary, 70.0);
    }

    #[test]
    fn sessions_without_any_contributing_value_stay_at_zero() {
        let samples = vec![lifting(day(0), None, None), lifting(day(1), None, None)];
        let stats = compute_progress("Piernas", samples);

        assert_eq!(stats.total_sessions, 2);
        assert!(stats.progress_data.is_empty());
        assert_eq!(stats.avg_primary, 0.0);
        assert!(!stats.avg_primary.is_nan());
        assert_eq!(stats.max_primary, 0.0);
        assert_eq!(stats.last_primary, 0.0);
    }

    #[test]
    fn samples_are_sorted_by_date() {
        let samples = vec![
            lifting(day(2), Some(90.0), None),
            lifting(day(0), Some(70.0), None),
            lifting(day(1), Some(80.0), None),
        ];
        let stats = compute_progress("Pecho", samples);

        let values: Vec<f64> = stats.progress_data.iter().map(|p| p.primary_metric).collect();
        assert_eq!(values, vec![70.0, 80.0, 90.0]);
        assert_eq!(stats.last_primary, 90.0);
        assert!(stats.progress_data[0].date.starts_with("2025-03-01T09:00:00"));
    }

    #[test]
    fn equal_timestamps_keep_input_order() {
        let samples = vec![
            lifting(day(1), Some(1.0), None),
            lifting(day(0), Some(2.0), None),
            lifting(day(1), Some(3.0), None),
            lifting(day(1), Some(4.0), None),
        ];
        let stats = compute_progress("Pecho", samples);

        let values: Vec<f64> = stats.progress_data.iter().map(|p| p.primary_metric).collect();
        assert_eq!(values, vec![2.0, 1.0, 3.0, 4.0]);
        assert_eq!(stats.last_primary, 4.0);
    }

    #[test]
    fn average_is_mean_of_charted_values() {
        let samples = vec![
            ProgressSample {
                date: day(0),
                metrics: RawMetrics {
                    repetitions: Some(20),
                    ..Default::default()
                },
            },
            ProgressSample {
                date: day(1),
                metrics: RawMetrics {
                    time_minutes: Some(3.0),
                    ..Default::default()
                },
            },
            ProgressSample {
                date: day(2),
                metrics: RawMetrics {
                    distance_km: Some(1.0),
                    ..Default::default()
                },
            },
        ];
        let stats = compute_progress("Abdomen", samples);

        let charted: Vec<f64> = stats.progress_data.iter().map(|p| p.primary_metric).collect();
        assert_eq!(charted, vec![20.0, 3.0]);
        let mean = charted.iter().sum::<f64>() / charted.len() as f64;
        assert!((stats.avg_primary - mean).abs() < f64::EPSILON);
        assert_eq!(stats.total_sessions, 3);
    }

    #[test]
    fn serializes_to_the_documented_shape() {
        let stats = compute_progress("Cardio", vec![cardio(day(0), Some(20.0), None)]);
        let json = serde_json::to_value(&stats).unwrap();

        assert_eq!(json["total_sessions"], 1);
        assert_eq!(json["primary_metric_name"], "Tiempo");
        assert_eq!(json["primary_metric_unit"], "min");
        let point = &json["progress_data"][0];
        assert_eq!(point["time_minutes"], 20.0);
        assert!(point["weight"].is_null());
        assert!(point["reps"].is_null());
        assert_eq!(point["primary_metric"], 20.0);
        assert_eq!(point["primary_label"], "Tiempo");
    }
}
