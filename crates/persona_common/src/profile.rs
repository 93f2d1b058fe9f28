//! User profile - demographic grouping fields attached to each diagnosis.
//!
//! These fields exist for the group-breakdown statistics; the scoring
//! core never reads them.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unspecified,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Unspecified => "unspecified",
        }
    }

    pub fn from_label(label: &str) -> Option<Gender> {
        match label.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Some(Gender::Male),
            "female" | "f" => Some(Gender::Female),
            "unspecified" | "" => Some(Gender::Unspecified),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Age bands used by the group statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    Teens,
    #[default]
    Twenties,
    Thirties,
    Forties,
    FiftiesPlus,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 5] = [
        AgeGroup::Teens,
        AgeGroup::Twenties,
        AgeGroup::Thirties,
        AgeGroup::Forties,
        AgeGroup::FiftiesPlus,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::Teens => "10s",
            AgeGroup::Twenties => "20s",
            AgeGroup::Thirties => "30s",
            AgeGroup::Forties => "40s",
            AgeGroup::FiftiesPlus => "50s+",
        }
    }

    pub fn from_label(label: &str) -> Option<AgeGroup> {
        match label.trim().to_ascii_lowercase().as_str() {
            "10s" | "teens" => Some(AgeGroup::Teens),
            "20s" | "twenties" => Some(AgeGroup::Twenties),
            "30s" | "thirties" => Some(AgeGroup::Thirties),
            "40s" | "forties" => Some(AgeGroup::Forties),
            "50s+" | "50s" | "fifties" => Some(AgeGroup::FiftiesPlus),
            _ => None,
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Demographic profile submitted alongside a diagnosis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub age_group: AgeGroup,
    /// Free-form occupation label, e.g. "student" or "researcher".
    #[serde(default = "default_occupation")]
    pub occupation: String,
}

fn default_occupation() -> String {
    "student".to_string()
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            gender: Gender::default(),
            age_group: AgeGroup::default(),
            occupation: default_occupation(),
        }
    }
}

/// Generate an anonymous user identifier, e.g. `user_3f2a91c4`.
pub fn anonymous_user_id() -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    format!("user_{}", &uuid[..8])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for age in AgeGroup::ALL {
            assert_eq!(AgeGroup::from_label(age.label()), Some(age));
        }
        for gender in [Gender::Male, Gender::Female, Gender::Unspecified] {
            assert_eq!(Gender::from_label(gender.label()), Some(gender));
        }
        assert_eq!(AgeGroup::from_label("90s"), None);
    }

    #[test]
    fn test_default_profile() {
        let profile = UserProfile::default();
        assert_eq!(profile.gender, Gender::Unspecified);
        assert_eq!(profile.age_group, AgeGroup::Twenties);
        assert_eq!(profile.occupation, "student");
    }

    #[test]
    fn test_anonymous_ids_are_distinct() {
        let a = anonymous_user_id();
        let b = anonymous_user_id();
        assert!(a.starts_with("user_"));
        assert_eq!(a.len(), "user_".len() + 8);
        assert_ne!(a, b);
    }
}
