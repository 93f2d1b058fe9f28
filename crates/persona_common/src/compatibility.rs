//! User/robot category affinity.
//!
//! A small static affinity table between the user's diagnosed category
//! and a robot's configured persona category. Pairings outside the table
//! report a neutral score rather than an error.

use crate::category::CategoryCode;
use std::fmt;

/// Qualitative affinity bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompatibilityLevel {
    VeryHigh,
    High,
    Moderate,
    Low,
    Unknown,
}

impl CompatibilityLevel {
    pub fn label(&self) -> &'static str {
        match self {
            CompatibilityLevel::VeryHigh => "very high",
            CompatibilityLevel::High => "high",
            CompatibilityLevel::Moderate => "moderate",
            CompatibilityLevel::Low => "low",
            CompatibilityLevel::Unknown => "unknown",
        }
    }

    fn from_score(score: f32) -> Self {
        if score >= 0.9 {
            CompatibilityLevel::VeryHigh
        } else if score >= 0.8 {
            CompatibilityLevel::High
        } else if score >= 0.7 {
            CompatibilityLevel::Moderate
        } else {
            CompatibilityLevel::Low
        }
    }
}

impl fmt::Display for CompatibilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Affinity between a user category and a robot category.
///
/// Known pairings come from the curated table (each category lists its
/// strongest partners); anything else scores a neutral 0.5 with
/// `Unknown` level.
pub fn compatibility(user: &CategoryCode, robot: &CategoryCode) -> (f32, CompatibilityLevel) {
    match table_score(&user.to_string(), &robot.to_string()) {
        Some(score) => (score, CompatibilityLevel::from_score(score)),
        None => (0.5, CompatibilityLevel::Unknown),
    }
}

fn table_score(user: &str, robot: &str) -> Option<f32> {
    let partners: &[(&str, f32)] = match user {
        "ENFJ" => &[("ENFP", 0.9), ("INFJ", 0.8), ("ENFJ", 1.0), ("ENTJ", 0.7)],
        "ENTJ" => &[("ENTP", 0.9), ("INTJ", 0.8), ("ENTJ", 1.0), ("ENFJ", 0.7)],
        "ENFP" => &[("ENFJ", 0.9), ("INFP", 0.8), ("ENFP", 1.0), ("ENTP", 0.7)],
        "ENTP" => &[("ENTJ", 0.9), ("INTP", 0.8), ("ENTP", 1.0), ("ENFP", 0.7)],
        "INFJ" => &[("ENFJ", 0.8), ("INFP", 0.9), ("INFJ", 1.0), ("INTJ", 0.7)],
        "INTJ" => &[("ENTJ", 0.8), ("INTP", 0.9), ("INTJ", 1.0), ("INFJ", 0.7)],
        "INFP" => &[("ENFP", 0.8), ("INFJ", 0.9), ("INFP", 1.0), ("ISFP", 0.7)],
        "INTP" => &[("ENTP", 0.8), ("INTJ", 0.9), ("INTP", 1.0), ("ISTP", 0.7)],
        "ISFJ" => &[("ESFJ", 0.8), ("ISFP", 0.7), ("ISFJ", 1.0), ("ISTJ", 0.9)],
        "ISFP" => &[("ESFP", 0.8), ("INFP", 0.7), ("ISFP", 1.0), ("ISFJ", 0.7)],
        "ISTJ" => &[("ESTJ", 0.8), ("ISFJ", 0.9), ("ISTJ", 1.0), ("ISTP", 0.7)],
        "ISTP" => &[("ESTP", 0.8), ("INTP", 0.7), ("ISTP", 1.0), ("ISTJ", 0.7)],
        "ESFJ" => &[("ISFJ", 0.8), ("ESFP", 0.9), ("ESFJ", 1.0), ("ESTJ", 0.7)],
        "ESFP" => &[("ISFP", 0.8), ("ENFP", 0.7), ("ESFP", 1.0), ("ESFJ", 0.9)],
        "ESTJ" => &[("ISTJ", 0.8), ("ESFJ", 0.7), ("ESTJ", 1.0), ("ESTP", 0.9)],
        "ESTP" => &[("ISTP", 0.8), ("ENTP", 0.7), ("ESTP", 1.0), ("ESTJ", 0.9)],
        _ => return None,
    };
    partners
        .iter()
        .find(|(code, _)| *code == robot)
        .map(|(_, score)| *score)
}
