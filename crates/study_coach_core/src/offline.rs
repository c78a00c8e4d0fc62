//! crates/study_coach_core/src/offline.rs
//!
//! The static aptitude-question bank for the network-independent practice
//! mode. Defined once, read-only, unrelated to topic generation.

use crate::domain::OfflineQuizQuestion;

const APTITUDE_QUESTIONS: [OfflineQuizQuestion; 8] = [
    OfflineQuizQuestion {
        question: "If a shirt costs 800 after a 20% discount, what was its original price?",
        options: ["960", "1000", "1040", "1200"],
        correct_answer: 1,
        explanation: "80% of the original price is 800, so the original price is 800 / 0.8 = 1000.",
    },
    OfflineQuizQuestion {
        question: "What is the next number in the series 2, 6, 12, 20, 30, ...?",
        options: ["36", "40", "42", "44"],
        correct_answer: 2,
        explanation: "The differences grow by 2 each step (4, 6, 8, 10), so the next difference is 12 and the next term is 42.",
    },
    OfflineQuizQuestion {
        question: "A train travels 240 km in 3 hours. At the same speed, how long does 400 km take?",
        options: ["4 hours", "4.5 hours", "5 hours", "5.5 hours"],
        correct_answer: 2,
        explanation: "The speed is 80 km/h, so 400 km takes 400 / 80 = 5 hours.",
    },
    OfflineQuizQuestion {
        question: "The average of five numbers is 18. Four of them are 12, 15, 20 and 25. What is the fifth?",
        options: ["14", "16", "18", "20"],
        correct_answer: 2,
        explanation: "The five numbers sum to 90; the four known ones sum to 72, leaving 18.",
    },
    OfflineQuizQuestion {
        question: "If CODE is written as DPEF, how is GOAL written in the same scheme?",
        options: ["HPBM", "FPBM", "HPBL", "HNBM"],
        correct_answer: 0,
        explanation: "Each letter shifts forward by one: G→H, O→P, A→B, L→M.",
    },
    OfflineQuizQuestion {
        question: "A tank is filled by one pipe in 6 hours and drained by another in 9. With both open, how long until it is full?",
        options: ["12 hours", "15 hours", "18 hours", "21 hours"],
        correct_answer: 2,
        explanation: "The net fill rate is 1/6 - 1/9 = 1/18 of the tank per hour, so 18 hours.",
    },
    OfflineQuizQuestion {
        question: "Which word does not belong with the others?",
        options: ["Oak", "Maple", "Rose", "Pine"],
        correct_answer: 2,
        explanation: "Oak, maple and pine are trees; a rose is a shrub.",
    },
    OfflineQuizQuestion {
        question: "In how many ways can the letters of the word STUDY be arranged?",
        options: ["24", "60", "100", "120"],
        correct_answer: 3,
        explanation: "STUDY has 5 distinct letters, so 5! = 120 arrangements.",
    },
];

/// The full, fixed practice bank.
pub fn offline_aptitude_questions() -> &'static [OfflineQuizQuestion] {
    &APTITUDE_QUESTIONS
}
