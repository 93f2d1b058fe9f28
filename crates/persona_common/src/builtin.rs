//! Built-in questionnaire content.
//!
//! The canonical question list for each deployment context. All catalog
//! variants share the same twelve-question base (three questions per axis
//! pair); each non-general location appends five context-specific
//! questions and swaps in its own tie-break set.

use crate::axis::{Axis, AxisPair};
use crate::catalog::Location;
use crate::question::{Question, TieQuestion};

/// The twelve base questions shared by every catalog variant.
pub fn base_questions() -> Vec<Question> {
    vec![
        Question::new(
            "Q1",
            "When the robot greets you first, how do you react?",
            ["Join the conversation right away", "Observe the situation for a moment"],
            (Axis::E, Axis::I),
        ),
        Question::new(
            "Q2",
            "When using the robot with several people, which style do you prefer?",
            ["Everyone participates together", "One-on-one interaction in private"],
            (Axis::E, Axis::I),
        ),
        Question::new(
            "Q3",
            "What is your style when talking with the robot?",
            [
                "Actively ask questions and voice opinions",
                "Listen to the robot's explanation, think, then respond",
            ],
            (Axis::E, Axis::I),
        ),
        Question::new(
            "Q4",
            "Which guidance style do you prefer from the robot?",
            [
                "Concrete, step-by-step detail",
                "The overall context and meaning first",
            ],
            (Axis::S, Axis::N),
        ),
        Question::new(
            "Q5",
            "How do you prefer to learn a new robot feature?",
            [
                "Learn by operating it hands-on",
                "Understand the concept and principle first, then try",
            ],
            (Axis::S, Axis::N),
        ),
        Question::new(
            "Q6",
            "How do you prefer to hand a task to the robot?",
            [
                "Give concrete, explicit instructions",
                "State only the general goal and direction",
            ],
            (Axis::S, Axis::N),
        ),
        Question::new(
            "Q7",
            "What do you value when making decisions with the robot?",
            [
                "Logical analysis and objective data",
                "Emotional empathy and subjective experience",
            ],
            (Axis::T, Axis::F),
        ),
        Question::new(
            "Q8",
            "When the robot makes a mistake, how do you react?",
            [
                "Analyze the problem and look for a fix",
                "Consider the robot's feelings in the conversation",
            ],
            (Axis::T, Axis::F),
        ),
        Question::new(
            "Q9",
            "Which feedback style do you prefer to give the robot?",
            [
                "Precise, concrete points for improvement",
                "Advice wrapped in positive encouragement",
            ],
            (Axis::T, Axis::F),
        ),
        Question::new(
            "Q10",
            "How do you prefer to manage schedules with the robot?",
            [
                "Plan ahead and proceed methodically",
                "Adjust flexibly as things come up",
            ],
            (Axis::J, Axis::P),
        ),
        Question::new(
            "Q11",
            "What is your approach when trying a new activity with the robot?",
            [
                "Follow the established rules and procedure",
                "Improvise and experiment creatively",
            ],
            (Axis::J, Axis::P),
        ),
        Question::new(
            "Q12",
            "How do you prefer to wrap up a session with the robot?",
            [
                "A clear summary and conclusions",
                "A range of perspectives and possibilities",
            ],
            (Axis::J, Axis::P),
        ),
    ]
}

/// Context-specific questions appended after the base set.
/// `General` appends nothing.
pub fn location_questions(location: Location) -> Vec<Question> {
    match location {
        Location::General => Vec::new(),
        Location::Hospital => vec![
            Question::new(
                "H1",
                "When the robot checks your patient details at the hospital, how do you react?",
                [
                    "Provide the needed information right away",
                    "Check the robot's trustworthiness first",
                ],
                (Axis::E, Axis::I),
            ),
            Question::new(
                "H2",
                "When the robot works alongside medical staff, which interaction do you prefer?",
                [
                    "Robot and staff explain things together",
                    "The robot stays in a supporting role",
                ],
                (Axis::E, Axis::I),
            ),
            Question::new(
                "H3",
                "How should the robot walk you through a treatment?",
                [
                    "Concrete steps with expected timings",
                    "The overall goal and direction of the treatment",
                ],
                (Axis::S, Axis::N),
            ),
            Question::new(
                "H4",
                "What should the robot prioritize while monitoring your condition?",
                [
                    "Precise numbers and objective data",
                    "My comfort and how I feel",
                ],
                (Axis::T, Axis::F),
            ),
            Question::new(
                "H5",
                "If the robot detects an emergency, how do you respond?",
                [
                    "Contact the staff and act immediately",
                    "Assess the situation, then act deliberately",
                ],
                (Axis::J, Axis::P),
            ),
        ],
        Location::Library => vec![
            Question::new(
                "L1",
                "When the robot helps you search for books, which do you prefer?",
                [
                    "Enter concrete keywords and filters",
                    "Describe a general topic or interest",
                ],
                (Axis::S, Axis::N),
            ),
            Question::new(
                "L2",
                "What should the robot weigh in a reading recommendation?",
                [
                    "Objective measures like popularity and ratings",
                    "Personal taste and emotional resonance",
                ],
                (Axis::T, Axis::F),
            ),
            Question::new(
                "L3",
                "Which study setting do you prefer with the robot in the library?",
                [
                    "A quiet personal space to concentrate",
                    "A learning space shared with other people",
                ],
                (Axis::E, Axis::I),
            ),
            Question::new(
                "L4",
                "How do you handle borrowing and returning with the robot's help?",
                [
                    "Plan ahead and handle everything in one trip",
                    "Handle each item as the need arises",
                ],
                (Axis::J, Axis::P),
            ),
            Question::new(
                "L5",
                "How should the robot explain the library's rules?",
                [
                    "Clear, concrete rules",
                    "The overall culture and atmosphere of the place",
                ],
                (Axis::S, Axis::N),
            ),
        ],
        Location::ShoppingMall => vec![
            Question::new(
                "M1",
                "How should the robot recommend products at the mall?",
                [
                    "Concrete product details and prices",
                    "Overall style and current trends",
                ],
                (Axis::S, Axis::N),
            ),
            Question::new(
                "M2",
                "What matters when the robot shares discount information?",
                [
                    "Exact discount rates and savings",
                    "A special occasion and a fun experience",
                ],
                (Axis::T, Axis::F),
            ),
            Question::new(
                "M3",
                "How do you like to shop with the robot?",
                [
                    "Make a list ahead and shop to plan",
                    "Buy what catches my eye on the spot",
                ],
                (Axis::J, Axis::P),
            ),
            Question::new(
                "M4",
                "How should the robot give directions to a store?",
                [
                    "The exact floor and unit number",
                    "The overall layout and atmosphere",
                ],
                (Axis::S, Axis::N),
            ),
            Question::new(
                "M5",
                "When the robot offers customer service, how do you react?",
                [
                    "Ask for what I need right away",
                    "Check what the robot can do first",
                ],
                (Axis::E, Axis::I),
            ),
        ],
        Location::School => vec![
            Question::new(
                "S1",
                "How should the robot assist during class?",
                [
                    "Concrete learning goals and steps",
                    "The overall flow and context first",
                ],
                (Axis::S, Axis::N),
            ),
            Question::new(
                "S2",
                "What should the robot weigh when answering students?",
                [
                    "Accurate, objective information",
                    "The student's understanding and feelings",
                ],
                (Axis::T, Axis::F),
            ),
            Question::new(
                "S3",
                "What is your preferred role in group work with the robot?",
                [
                    "Speak up and participate actively",
                    "Observe quietly, join when needed",
                ],
                (Axis::E, Axis::I),
            ),
            Question::new(
                "S4",
                "How should the robot manage assignments?",
                [
                    "Clear deadlines and checklists",
                    "Flexible timing and creative approaches",
                ],
                (Axis::J, Axis::P),
            ),
            Question::new(
                "S5",
                "When the robot introduces school life, how do you react?",
                [
                    "Ask for the information I need right away",
                    "Get a feel for the school culture first",
                ],
                (Axis::E, Axis::I),
            ),
        ],
        Location::Airport => vec![
            Question::new(
                "A1",
                "When the robot helps with your baggage, which do you prefer?",
                [
                    "Check the exact weight and size limits",
                    "Understand the overall baggage policy",
                ],
                (Axis::S, Axis::N),
            ),
            Question::new(
                "A2",
                "What should the robot emphasize when guiding you through security?",
                [
                    "The exact procedure and regulations",
                    "A calm, stress-free experience",
                ],
                (Axis::T, Axis::F),
            ),
            Question::new(
                "A3",
                "How should the robot present flight information?",
                [
                    "Exact times and gate numbers",
                    "The overall itinerary and alternatives",
                ],
                (Axis::S, Axis::N),
            ),
            Question::new(
                "A4",
                "What is your style when navigating the airport with the robot?",
                [
                    "Plan ahead and move on schedule",
                    "Adapt to the situation as it unfolds",
                ],
                (Axis::J, Axis::P),
            ),
            Question::new(
                "A5",
                "If the robot announces an emergency, how do you respond?",
                [
                    "Follow the instructions immediately",
                    "Assess the situation, then decide carefully",
                ],
                (Axis::J, Axis::P),
            ),
        ],
    }
}

/// Tie-break questions for the general catalog.
pub fn base_tie_breakers() -> Vec<TieQuestion> {
    vec![
        TieQuestion::new(
            AxisPair::EI,
            "Which environment do you prefer for activities with the robot?",
            [
                "A lively atmosphere with other people",
                "A quiet space where I can focus",
            ],
        ),
        TieQuestion::new(
            AxisPair::SN,
            "What is your interest in the robot's future capabilities?",
            [
                "Focus on today's practical features",
                "Curious about tomorrow's innovations",
            ],
        ),
        TieQuestion::new(
            AxisPair::TF,
            "What matters most in your relationship with the robot?",
            ["Efficiency and results", "Emotional connection and understanding"],
        ),
        TieQuestion::new(
            AxisPair::JP,
            "What is your preferred way of reaching goals with the robot?",
            ["A planned, systematic approach", "A flexible, adaptive method"],
        ),
    ]
}

/// Context-specific tie-break sets. `None` means the variant uses the
/// base set.
pub fn location_tie_breakers(location: Location) -> Option<Vec<TieQuestion>> {
    match location {
        Location::General => None,
        Location::Hospital => Some(vec![
            TieQuestion::new(
                AxisPair::EI,
                "What is your preferred way to interact with the robot at the hospital?",
                [
                    "Share information together with other patients",
                    "Consult quietly in private",
                ],
            ),
            TieQuestion::new(
                AxisPair::SN,
                "What matters in the medical robot's information?",
                [
                    "Concrete test results and numbers",
                    "The overall condition and outlook",
                ],
            ),
            TieQuestion::new(
                AxisPair::TF,
                "What should the robot emphasize in its care?",
                [
                    "Accurate diagnosis and treatment effect",
                    "Patient comfort and peace of mind",
                ],
            ),
            TieQuestion::new(
                AxisPair::JP,
                "What is your preferred shape for a treatment plan with the robot?",
                [
                    "Clear stages and a fixed schedule",
                    "Flexible adjustment as things evolve",
                ],
            ),
        ]),
        Location::Library => Some(vec![
            TieQuestion::new(
                AxisPair::EI,
                "What is your preferred setting when working with the robot at the library?",
                [
                    "A space shared with other visitors",
                    "A private space to concentrate",
                ],
            ),
            TieQuestion::new(
                AxisPair::SN,
                "What matters in the robot's book recommendations?",
                [
                    "Concrete genre and author details",
                    "The overall reading experience",
                ],
            ),
            TieQuestion::new(
                AxisPair::TF,
                "What should the robot emphasize when helping you study?",
                [
                    "Accurate information and objective facts",
                    "Personal interest and emotional engagement",
                ],
            ),
            TieQuestion::new(
                AxisPair::JP,
                "What is your preferred study plan with the robot?",
                [
                    "A structured schedule with goals",
                    "Free exploration and discovery",
                ],
            ),
        ]),
        Location::ShoppingMall => Some(vec![
            TieQuestion::new(
                AxisPair::EI,
                "What is your preferred way to interact with the robot at the mall?",
                [
                    "Share tips together with other shoppers",
                    "Consult quietly one-on-one",
                ],
            ),
            TieQuestion::new(
                AxisPair::SN,
                "What matters in the robot's product recommendations?",
                [
                    "Concrete product details and prices",
                    "The overall style and trends",
                ],
            ),
            TieQuestion::new(
                AxisPair::TF,
                "What should the robot emphasize when helping you shop?",
                [
                    "Efficient purchases and savings",
                    "An enjoyable, satisfying trip",
                ],
            ),
            TieQuestion::new(
                AxisPair::JP,
                "What is your preferred shopping plan with the robot?",
                [
                    "Plan ahead and shop with purpose",
                    "Buy what I discover on impulse",
                ],
            ),
        ]),
        Location::School => Some(vec![
            TieQuestion::new(
                AxisPair::EI,
                "What is your preferred learning environment with the robot at school?",
                [
                    "Group activities with other students",
                    "An environment where I can focus alone",
                ],
            ),
            TieQuestion::new(
                AxisPair::SN,
                "What matters in the robot's learning guidance?",
                [
                    "Concrete learning goals and steps",
                    "The overall flow and context",
                ],
            ),
            TieQuestion::new(
                AxisPair::TF,
                "What should the robot emphasize in its teaching?",
                [
                    "Accurate knowledge and objective assessment",
                    "Student interest and emotional growth",
                ],
            ),
            TieQuestion::new(
                AxisPair::JP,
                "What is your preferred study plan with the robot?",
                [
                    "A structured schedule and assessment",
                    "Free exploration and creative activities",
                ],
            ),
        ]),
        Location::Airport => Some(vec![
            TieQuestion::new(
                AxisPair::EI,
                "What is your preferred way to interact with the robot at the airport?",
                [
                    "Share updates together with other travellers",
                    "Consult quietly in private",
                ],
            ),
            TieQuestion::new(
                AxisPair::SN,
                "What matters in the robot's travel guidance?",
                [
                    "Exact times and procedures",
                    "The overall journey and its comforts",
                ],
            ),
            TieQuestion::new(
                AxisPair::TF,
                "What should the robot emphasize in its travel service?",
                [
                    "Accurate information and efficient service",
                    "A relaxed, stress-free experience",
                ],
            ),
            TieQuestion::new(
                AxisPair::JP,
                "What is your preferred travel plan with the robot?",
                [
                    "Plan ahead and keep to schedule",
                    "Adapt flexibly as things change",
                ],
            ),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_covers_each_pair_three_times() {
        let questions = base_questions();
        assert_eq!(questions.len(), 12);
        for pair in AxisPair::ALL {
            let count = questions.iter().filter(|q| q.pair() == pair).count();
            assert_eq!(count, 3, "base should ask {pair} three times");
        }
    }

    #[test]
    fn test_location_sets_have_five_questions() {
        for location in Location::ALL.into_iter().filter(|l| *l != Location::General) {
            assert_eq!(location_questions(location).len(), 5, "{location}");
        }
        assert!(location_questions(Location::General).is_empty());
    }

    #[test]
    fn test_every_tie_set_covers_all_pairs_once() {
        let mut sets = vec![base_tie_breakers()];
        for location in Location::ALL {
            if let Some(set) = location_tie_breakers(location) {
                sets.push(set);
            }
        }
        assert_eq!(sets.len(), 6);
        for set in sets {
            assert_eq!(set.len(), 4);
            for pair in AxisPair::ALL {
                assert_eq!(set.iter().filter(|t| t.pair == pair).count(), 1);
            }
        }
    }

    #[test]
    fn test_question_ids_unique_per_location() {
        for location in Location::ALL {
            let mut ids: Vec<String> = base_questions()
                .into_iter()
                .chain(location_questions(location))
                .map(|q| q.id)
                .collect();
            let total = ids.len();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), total, "{location} has duplicate ids");
        }
    }
}
