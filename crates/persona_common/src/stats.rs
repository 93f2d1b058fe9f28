//! Statistics over stored diagnoses.
//!
//! Pure in-memory aggregation: the data halves of the dashboard views
//! (distribution, group breakdowns, daily trend, per-robot history).
//! Rendering is the caller's concern.

use crate::category::CategoryCode;
use crate::store::DiagnosisRecord;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Count per category code.
pub type Distribution = BTreeMap<CategoryCode, u32>;

/// Grouping key for breakdown tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKey {
    Gender,
    AgeGroup,
    Occupation,
    Robot,
    Location,
}

impl GroupKey {
    pub const ALL: [GroupKey; 5] = [
        GroupKey::Gender,
        GroupKey::AgeGroup,
        GroupKey::Occupation,
        GroupKey::Robot,
        GroupKey::Location,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GroupKey::Gender => "gender",
            GroupKey::AgeGroup => "age-group",
            GroupKey::Occupation => "occupation",
            GroupKey::Robot => "robot",
            GroupKey::Location => "location",
        }
    }

    pub fn from_name(name: &str) -> Option<GroupKey> {
        match name.trim().to_ascii_lowercase().as_str() {
            "gender" => Some(GroupKey::Gender),
            "age-group" | "age_group" | "age" => Some(GroupKey::AgeGroup),
            "occupation" | "job" => Some(GroupKey::Occupation),
            "robot" => Some(GroupKey::Robot),
            "location" => Some(GroupKey::Location),
            _ => None,
        }
    }

    fn value_of(&self, record: &DiagnosisRecord) -> String {
        match self {
            GroupKey::Gender => record.profile.gender.label().to_string(),
            GroupKey::AgeGroup => record.profile.age_group.label().to_string(),
            GroupKey::Occupation => record.profile.occupation.clone(),
            GroupKey::Robot => record.robot_id.clone(),
            GroupKey::Location => record.location.clone(),
        }
    }
}

/// Overall category distribution.
pub fn distribution(records: &[DiagnosisRecord]) -> Distribution {
    let mut counts = Distribution::new();
    for record in records {
        *counts.entry(record.category).or_insert(0) += 1;
    }
    counts
}

/// Category distribution per group value, e.g. per age band.
pub fn group_breakdown(
    records: &[DiagnosisRecord],
    key: GroupKey,
) -> BTreeMap<String, Distribution> {
    let mut groups: BTreeMap<String, Distribution> = BTreeMap::new();
    for record in records {
        let group = groups.entry(key.value_of(record)).or_default();
        *group.entry(record.category).or_insert(0) += 1;
    }
    groups
}

/// Per-day category counts, for trend tables.
pub fn daily_trend(records: &[DiagnosisRecord]) -> BTreeMap<NaiveDate, Distribution> {
    let mut days: BTreeMap<NaiveDate, Distribution> = BTreeMap::new();
    for record in records {
        let day = record.created_at.date_naive();
        let counts = days.entry(day).or_default();
        *counts.entry(record.category).or_insert(0) += 1;
    }
    days
}

/// Ordered code sequence for one user/robot pair, oldest first.
pub fn robot_code_history(
    records: &[DiagnosisRecord],
    user_id: &str,
    robot_id: &str,
) -> Vec<(DateTime<Utc>, CategoryCode)> {
    let mut history: Vec<(DateTime<Utc>, CategoryCode)> = records
        .iter()
        .filter(|r| r.user_id == user_id && r.robot_id == robot_id)
        .map(|r| (r.created_at, r.category))
        .collect();
    history.sort_by_key(|(ts, _)| *ts);
    history
}
