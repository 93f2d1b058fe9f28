//! Per-category interaction guides.
//!
//! Human-readable guidance keyed by category code: how a robot should
//! address a user of that type, with a couple of example utterances. The
//! scoring core never reads this; it exists for the presentation layer.

use crate::category::CategoryCode;

/// Guidance for one category code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeGuide {
    /// Short interaction-style description.
    pub description: &'static str,
    /// Example robot utterances in that style.
    pub examples: &'static [&'static str],
}

/// Look up the guide for a code. Covers all sixteen codes.
pub fn guide_for(code: &CategoryCode) -> Option<&'static TypeGuide> {
    let guide = match code.to_string().as_str() {
        "ENFJ" => &TypeGuide {
            description: "Bright and friendly, leads with empathy. Spots needs and steers toward solutions.",
            examples: &[
                "Hello! What can I help you with?",
                "Your appointment is at ten - feel free to ask me anything.",
            ],
        },
        "ENTJ" => &TypeGuide {
            description: "Goal-centered, systematic guidance. Emphasizes logical clarity.",
            examples: &[
                "Here is the plan to reach your goal.",
                "The next task is about to begin.",
            ],
        },
        "ENTP" => &TypeGuide {
            description: "Creative, presents many options. Prefers free-flowing conversation.",
            examples: &[
                "I've prepared a new approach for you.",
                "Which option sounds more interesting?",
            ],
        },
        "ENFP" => &TypeGuide {
            description: "Sincere encouragement; guidance that reflects the user's feelings.",
            examples: &[
                "I'd love to hear what you think!",
                "Let's try this new idea together.",
            ],
        },
        "ESFJ" => &TypeGuide {
            description: "Courteous and attentive; makes sure everyone can join in comfortably.",
            examples: &[
                "Please let me know whenever you need help.",
                "I'll make sure everyone can take part.",
            ],
        },
        "ESFP" => &TypeGuide {
            description: "Immediate support, cheerful interaction.",
            examples: &[
                "Let's get started - this will be fun!",
                "If you need anything, just say the word.",
            ],
        },
        "ESTJ" => &TypeGuide {
            description: "Clear rules, systematic guidance.",
            examples: &[
                "I'll guide you through the standard procedure.",
                "Please be sure to follow the rules.",
            ],
        },
        "ESTP" => &TypeGuide {
            description: "Practical, fast problem-solving guidance.",
            examples: &[
                "How about we start right away?",
                "I think acting now is the best move.",
            ],
        },
        "INFJ" => &TypeGuide {
            description: "Deep empathy, carefully considerate guidance.",
            examples: &[
                "I understand how you feel.",
                "Let's make this a meaningful experience together.",
            ],
        },
        "INFP" => &TypeGuide {
            description: "Respects values and feelings; encourages self-expression.",
            examples: &[
                "Your feelings matter to me.",
                "Sincerity is what I value most.",
            ],
        },
        "INTJ" => &TypeGuide {
            description: "Future-oriented, strategic advice.",
            examples: &[
                "Here is a plan for reaching your goal.",
                "Let me lay out the long-term vision.",
            ],
        },
        "INTP" => &TypeGuide {
            description: "Analytical thinking, logical exploration.",
            examples: &[
                "Shall we look at this from a new angle?",
                "Let's analyze the reasons together.",
            ],
        },
        "ISFJ" => &TypeGuide {
            description: "Quiet consideration, practical support.",
            examples: &[
                "I'll be right here when you need me.",
                "I'll make sure everything stays comfortable for you.",
            ],
        },
        "ISFP" => &TypeGuide {
            description: "Gentle and warm; guidance that leaves room for freedom and ease.",
            examples: &[
                "I respect your own way of doing things.",
                "Use me freely, whenever you like.",
            ],
        },
        "ISTJ" => &TypeGuide {
            description: "Precise, responsibility-first, step-by-step guidance.",
            examples: &[
                "Here are the exact results.",
                "I'll proceed according to the regulations.",
            ],
        },
        "ISTP" => &TypeGuide {
            description: "Simple and practical; direct guidance on request.",
            examples: &[
                "Just say the word when you need me.",
                "I'll keep it short: here's the result.",
            ],
        },
        _ => return None,
    };
    Some(guide)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_has_a_guide() {
        for code in CategoryCode::all() {
            let guide = guide_for(&code);
            assert!(guide.is_some(), "no guide for {code}");
            let guide = guide.unwrap();
            assert!(!guide.description.is_empty());
            assert_eq!(guide.examples.len(), 2);
        }
    }
}
