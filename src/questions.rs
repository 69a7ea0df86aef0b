//! Static question bank

/// A multiple-choice question with exactly four options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    pub correct: usize,
}

impl Question {
    /// Text of the option at `index`, if it exists
    pub fn option(&self, index: usize) -> Option<&'static str> {
        self.options.get(index).copied()
    }

    pub fn correct_text(&self) -> &'static str {
        self.options[self.correct]
    }

    pub fn is_correct(&self, answer: Option<usize>) -> bool {
        answer == Some(self.correct)
    }
}

pub static QUESTIONS: [Question; 5] = [
    Question {
        prompt: "Which of the following best explains the difference between AI and traditional programming?",
        options: [
            "AI requires more lines of code to specify behavior",
            "AI learns patterns from data rather than following explicit instructions",
            "AI cannot adapt to new situations",
            "Traditional programming always performs better",
        ],
        correct: 1,
    },
    Question {
        prompt: "Which of these is a limitation of current Narrow AI systems?",
        options: [
            "They can reason across multiple domains",
            "They are task-specific and cannot generalize knowledge",
            "They always outperform humans in all tasks",
            "They can self-upgrade without supervision",
        ],
        correct: 1,
    },
    Question {
        prompt: "Which of the following scenarios best demonstrates General AI (hypothetical)?",
        options: [
            "A chess program beating a grandmaster",
            "A spam filter detecting phishing emails",
            "An AI that can write essays, cook meals, and drive cars equally well",
            "A robot vacuum cleaner",
        ],
        correct: 2,
    },
    Question {
        prompt: "Which is NOT considered a core challenge in AI research?",
        options: [
            "Knowledge representation",
            "Reasoning and decision making",
            "Perception (e.g., vision, speech)",
            "Increasing processor clock speed",
        ],
        correct: 3,
    },
    Question {
        prompt: "Which branch of AI focuses on making machines perceive and interpret the world through images?",
        options: ["NLP", "Robotics", "Computer Vision", "Reinforcement Learning"],
        correct: 2,
    },
];
