//! Adaptive feedback across repeated diagnoses.
//!
//! Compares the current outcome with the previous stored diagnosis for
//! the same user/robot and phrases a short message about the change.

use crate::category::CategoryCode;
use chrono::{DateTime, Utc};

/// Feedback comparing the current code with the previous one, if any.
pub fn adaptive_feedback(current: &CategoryCode, previous: Option<&CategoryCode>) -> String {
    match previous {
        None => "This is your first diagnosis for this robot. Keep refining the match over time!"
            .to_string(),
        Some(prev) if prev == current => format!(
            "Same type as last time ({current}). Keep building on what already works!"
        ),
        Some(prev) => format!(
            "Your previous type was {prev}, this time it is {current}. \
             Consider adjusting the robot's interaction style to the change."
        ),
    }
}

/// One-line usage recommendation per category code.
pub fn recommendation_for(code: &CategoryCode) -> Option<&'static str> {
    let text = match code.to_string().as_str() {
        "ENFJ" => "Try interactions that draw on leadership and empathy.",
        "ENTJ" => "A robot setup that values strategy and efficiency is recommended.",
        "ENFP" => "You are likely to prefer creative, flexible robot responses.",
        "ENTP" => "An innovative, logic-driven conversation style fits well.",
        "INFJ" => "Deep understanding and intuitive interaction are recommended.",
        "INTJ" => "Make use of systematic, future-oriented robot features.",
        "INFP" => "A robot setup that honors values and feelings would suit you.",
        "INTP" => "Try analytical, exploratory interactions with the robot.",
        "ISFJ" => "You are likely to prefer stable, practical robot features.",
        "ISFP" => "A free, emotionally warm response style is recommended.",
        "ISTJ" => "A precise, methodical robot operating style is recommended.",
        "ISTP" => "Practical, on-demand interaction fits well.",
        "ESFJ" => "Make use of cooperative, social robot features.",
        "ESFP" => "You are likely to prefer immediate, playful robot experiences.",
        "ESTJ" => "An organized, rule-based robot operating style is recommended.",
        "ESTP" => "A practical, adaptable robot setup would suit you.",
        _ => return None,
    };
    Some(text)
}

/// Hint about diagnosis cadence based on past submission times.
///
/// Mirrors the dashboard's habit nudge: with at least two runs, an average
/// gap above a week suggests tracking more regularly, a shorter gap
/// suggests spacing runs out for steadier results.
pub fn cadence_hint(timestamps: &[DateTime<Utc>]) -> Option<&'static str> {
    if timestamps.len() < 2 {
        return None;
    }
    let first = timestamps.iter().min()?;
    let last = timestamps.iter().max()?;
    let span_days = (*last - *first).num_days();
    let avg_days = span_days as f64 / (timestamps.len() - 1) as f64;

    if avg_days > 7.0 {
        Some("Run the diagnosis regularly to track how the type evolves.")
    } else {
        Some("Space the diagnoses out a little for steadier results.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_first_run_message() {
        let code: CategoryCode = "INTP".parse().unwrap();
        let msg = adaptive_feedback(&code, None);
        assert!(msg.contains("first diagnosis"));
    }

    #[test]
    fn test_unchanged_message_names_code() {
        let code: CategoryCode = "ENFJ".parse().unwrap();
        let msg = adaptive_feedback(&code, Some(&code));
        assert!(msg.contains("Same type"));
        assert!(msg.contains("ENFJ"));
    }

    #[test]
    fn test_changed_message_names_both_codes() {
        let current: CategoryCode = "ISTP".parse().unwrap();
        let previous: CategoryCode = "ESTP".parse().unwrap();
        let msg = adaptive_feedback(&current, Some(&previous));
        assert!(msg.contains("ESTP"));
        assert!(msg.contains("ISTP"));
    }

    #[test]
    fn test_every_code_has_a_recommendation() {
        for code in CategoryCode::all() {
            assert!(recommendation_for(&code).is_some(), "no recommendation for {code}");
        }
    }

    #[test]
    fn test_cadence_hint_thresholds() {
        let day = |d: u32| Utc.with_ymd_and_hms(2025, 6, d, 12, 0, 0).unwrap();

        assert_eq!(cadence_hint(&[]), None);
        assert_eq!(cadence_hint(&[day(1)]), None);

        // 20-day gap over one interval: above the weekly threshold.
        let sparse = [day(1), day(21)];
        assert!(cadence_hint(&sparse).unwrap().contains("regularly"));

        // Daily runs: below it.
        let dense = [day(1), day(2), day(3)];
        assert!(cadence_hint(&dense).unwrap().contains("Space"));
    }
}
