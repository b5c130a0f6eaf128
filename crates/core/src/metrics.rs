//! Metric selection policy.
//!
//! Each muscle group charts progress with one "primary" raw metric, falling
//! back to a secondary one when an entry does not carry the primary value.
//! Cardio is tracked by time, abdominal work by repetitions, and everything
//! else by load.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Muscle groups with a non-default policy
// ---------------------------------------------------------------------------

pub const MUSCLE_GROUP_CARDIO: &str = "Cardio";
pub const MUSCLE_GROUP_ABDOMEN: &str = "Abdomen";

// ---------------------------------------------------------------------------
// Raw metrics
// ---------------------------------------------------------------------------

/// The optional raw measurements a single workout entry can carry.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawMetrics {
    pub weight: Option<f64>,
    pub repetitions: Option<i32>,
    pub sets: Option<i32>,
    pub time_minutes: Option<f64>,
    pub distance_km: Option<f64>,
}

impl RawMetrics {
    /// `true` when at least one measurement is present.
    pub fn has_any(&self) -> bool {
        MetricField::ALL
            .iter()
            .any(|field| field.extract(self).is_some())
    }
}

/// One of the raw measurement columns of a workout entry, serialized as the
/// column name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricField {
    Weight,
    Repetitions,
    Sets,
    #[serde(rename = "time_minutes")]
    Duration,
    #[serde(rename = "distance_km")]
    Distance,
}

impl MetricField {
    pub const ALL: [MetricField; 5] = [
        Self::Weight,
        Self::Repetitions,
        Self::Sets,
        Self::Duration,
        Self::Distance,
    ];

    /// Read this field from an entry's metrics, widening integers to `f64`.
    pub fn extract(self, metrics: &RawMetrics) -> Option<f64> {
        match self {
            Self::Weight => metrics.weight,
            Self::Repetitions => metrics.repetitions.map(f64::from),
            Self::Sets => metrics.sets.map(f64::from),
            Self::Duration => metrics.time_minutes,
            Self::Distance => metrics.distance_km,
        }
    }

    /// Display label used by the front end.
    pub fn label(self) -> &'static str {
        match self {
            Self::Weight => "Peso",
            Self::Repetitions => "Repeticiones",
            Self::Sets => "Series",
            Self::Duration => "Tiempo",
            Self::Distance => "Distancia",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Self::Weight => "kg",
            Self::Repetitions => "reps",
            Self::Sets => "sets",
            Self::Duration => "min",
            Self::Distance => "km",
        }
    }
}

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// Which metric is charted for a muscle group, and what to use instead when
/// an entry lacks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricConfig {
    pub primary_field: MetricField,
    pub primary_label: &'static str,
    pub primary_unit: &'static str,
    pub fallback_field: MetricField,
    pub fallback_label: &'static str,
    pub fallback_unit: &'static str,
}

impl MetricConfig {
    fn new(primary: MetricField, fallback: MetricField) -> Self {
        Self {
            primary_field: primary,
            primary_label: primary.label(),
            primary_unit: primary.unit(),
            fallback_field: fallback,
            fallback_label: fallback.label(),
            fallback_unit: fallback.unit(),
        }
    }

    /// Resolve the value charted for one entry.
    ///
    /// Returns the value together with the field it came from, or `None` when
    /// neither the primary nor the fallback field is present.
    pub fn resolve(&self, metrics: &RawMetrics) -> Option<(f64, MetricField)> {
        if let Some(value) = self.primary_field.extract(metrics) {
            return Some((value, self.primary_field));
        }
        self.fallback_field
            .extract(metrics)
            .map(|value| (value, self.fallback_field))
    }
}

/// Map a muscle-group tag to its metric configuration.
///
/// Total: any tag that is not a known special case gets the load-based default.
pub fn metric_config_for(muscle_group: &str) -> MetricConfig {
    match muscle_group {
        MUSCLE_GROUP_CARDIO => MetricConfig::new(MetricField::Duration, MetricField::Distance),
        MUSCLE_GROUP_ABDOMEN => MetricConfig::new(MetricField::Repetitions, MetricField::Duration),
        _ => MetricConfig::new(MetricField::Weight, MetricField::Repetitions),
    }
}
