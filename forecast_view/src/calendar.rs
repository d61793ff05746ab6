//! Calendar aggregation of the history series
//!
//! The default grouping is month-of-year: January 1950 and January 1951 land
//! in the same bucket. [`aggregate_by_year_month`] keeps years apart, and
//! [`group_by_year`] produces one group per calendar year.
//!
//! Buckets are created lazily on the first observation of their key, so a
//! month without data has no bucket at all. Buckets come back in ascending
//! key order: January first for month-of-year, chronological otherwise.

use crate::series::{Observation, Series};
use log::debug;
use serde::{Deserialize, Serialize, Serializer};
use series_math::{display_round, RunningStats};
use std::collections::HashMap;
use std::hash::Hash;

static MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// How month buckets are labelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthLabelStyle {
    /// `January`
    #[default]
    Full,
    /// `Jan`
    Short,
}

/// Name of a 0-based month index, or `None` outside `0..12`
pub fn month_name(month_index: usize, style: MonthLabelStyle) -> Option<&'static str> {
    let name: &'static str = *MONTH_NAMES.get(month_index)?;
    Some(match style {
        MonthLabelStyle::Full => name,
        MonthLabelStyle::Short => &name[..3],
    })
}

/// Observations sharing one calendar key with their statistics.
///
/// Statistics are computed when the bucket is built and cannot be changed
/// independently of its observations.
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket<K> {
    key: K,
    observations: Vec<Observation>,
    stats: RunningStats,
}

impl<K> Bucket<K> {
    fn new(key: K) -> Self {
        Self {
            key,
            observations: Vec::new(),
            stats: RunningStats::new(),
        }
    }

    fn push(&mut self, observation: Observation) {
        self.stats.update(observation.value);
        self.observations.push(observation);
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn count(&self) -> usize {
        self.stats.count()
    }

    pub fn sum(&self) -> f64 {
        self.stats.sum()
    }

    /// Exact mean of the bucket's values
    pub fn avg(&self) -> f64 {
        self.sum() / self.count() as f64
    }

    /// Mean rounded the way the dashboard prints it
    pub fn display_avg(&self) -> i64 {
        display_round(self.avg())
    }

    pub fn min(&self) -> f64 {
        // A bucket exists only once it holds an observation.
        self.stats.min().unwrap_or(f64::NAN)
    }

    pub fn max(&self) -> f64 {
        self.stats.max().unwrap_or(f64::NAN)
    }
}

/// Month key of a year-scoped bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct YearMonth {
    pub year: i32,
    /// 0 for January through 11 for December
    pub month: usize,
}

/// Month-of-year bucket, keyed by month index 0..12
pub type MonthBucket = Bucket<usize>;

/// Calendar-month bucket kept apart per year
pub type YearMonthBucket = Bucket<YearMonth>;

/// One calendar year of observations
pub type YearGroup = Bucket<i32>;

impl MonthBucket {
    pub fn month_index(&self) -> usize {
        self.key
    }

    pub fn label(&self, style: MonthLabelStyle) -> &'static str {
        month_name(self.key, style).unwrap_or("")
    }
}

impl YearMonthBucket {
    pub fn label(&self, style: MonthLabelStyle) -> String {
        format!(
            "{} {}",
            month_name(self.key.month, style).unwrap_or(""),
            self.key.year
        )
    }
}

impl YearGroup {
    pub fn year(&self) -> i32 {
        self.key
    }
}

impl<K: Serialize> Serialize for Bucket<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Bucket", 6)?;
        state.serialize_field("key", &self.key)?;
        state.serialize_field("count", &self.count())?;
        state.serialize_field("avg", &self.avg())?;
        state.serialize_field("min", &self.min())?;
        state.serialize_field("max", &self.max())?;
        state.serialize_field("observations", &self.observations)?;
        state.end()
    }
}

fn group_by<K, F>(history: &Series, key_of: F) -> Vec<Bucket<K>>
where
    K: Copy + Ord + Hash,
    F: Fn(&Observation) -> K,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut buckets: Vec<Bucket<K>> = Vec::new();

    for observation in history {
        let key = key_of(observation);
        let slot = *positions.entry(key).or_insert_with(|| {
            buckets.push(Bucket::new(key));
            buckets.len() - 1
        });
        buckets[slot].push(*observation);
    }

    buckets.sort_by_key(|bucket| bucket.key);
    buckets
}

/// Group history by month-of-year, merging the same month across years
pub fn aggregate_by_month(history: &Series) -> Vec<MonthBucket> {
    let buckets = group_by(history, Observation::month_index);
    debug!(
        "Aggregated {} observations into {} month buckets",
        history.len(),
        buckets.len()
    );
    buckets
}

/// Group history by calendar month, keeping each year separate
pub fn aggregate_by_year_month(history: &Series) -> Vec<YearMonthBucket> {
    group_by(history, |o| YearMonth {
        year: o.year(),
        month: o.month_index(),
    })
}

/// Group history by calendar year
pub fn group_by_year(history: &Series) -> Vec<YearGroup> {
    group_by(history, Observation::year)
}
