use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Flashcard {
    pub id: String,
    pub question: String,
    pub answer: String,
}

impl Flashcard {
    fn new(id: impl Into<String>, question: &str, answer: &str) -> Self {
        Self {
            id: id.into(),
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }
}

const INITIAL_DECK: [(&str, &str); 10] = [
    (
        "What is React Native?",
        "A framework for building native mobile apps using React and JavaScript.",
    ),
    (
        "What is JSX?",
        "JavaScript XML - a syntax extension that allows writing HTML-like code in JavaScript.",
    ),
    (
        "What is a Component in React?",
        "A reusable piece of UI that can have its own logic and styling.",
    ),
    (
        "What is State in React?",
        "An object that holds data that may change over the component lifecycle.",
    ),
    (
        "What are Props?",
        "Properties passed from parent to child components to share data.",
    ),
    (
        "What is useState Hook?",
        "A Hook that lets you add state to functional components.",
    ),
    (
        "What is useEffect Hook?",
        "A Hook for performing side effects in functional components.",
    ),
    (
        "What is Virtual DOM?",
        "A lightweight copy of the actual DOM used for efficient updates.",
    ),
    (
        "What is FlatList?",
        "A performant component for rendering scrollable lists in React Native.",
    ),
    (
        "What is Flexbox?",
        "A layout system for arranging items in rows or columns with flexible sizing.",
    ),
];

const EXTRA_POOL: [(&str, &str); 5] = [
    (
        "What is AsyncStorage?",
        "A persistent key-value storage system for React Native.",
    ),
    (
        "What is Redux?",
        "A state management library for JavaScript applications.",
    ),
    (
        "What is Context API?",
        "A way to pass data through component tree without props drilling.",
    ),
    (
        "What is React Navigation?",
        "A routing and navigation library for React Native apps.",
    ),
    (
        "What is TypeScript?",
        "A typed superset of JavaScript that compiles to plain JavaScript.",
    ),
];

pub fn initial_flashcards() -> Vec<Flashcard> {
    INITIAL_DECK
        .iter()
        .enumerate()
        .map(|(i, (q, a))| Flashcard::new((i + 1).to_string(), q, a))
        .collect()
}

/// Draws a question from the extra pool under a fresh id
pub fn new_random_card() -> Flashcard {
    let mut rng = rand::rng();
    let (question, answer) = EXTRA_POOL
        .choose(&mut rng)
        .copied()
        .unwrap_or(EXTRA_POOL[0]);
    Flashcard::new(uuid::Uuid::new_v4().to_string(), question, answer)
}

/// Quiz progress: remaining cards plus the ids already learned
#[derive(Debug, Clone, PartialEq)]
pub struct QuizState {
    pub cards: Vec<Flashcard>,
    pub learned: Vec<String>,
}

impl Default for QuizState {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizState {
    pub fn new() -> Self {
        Self {
            cards: initial_flashcards(),
            learned: Vec::new(),
        }
    }

    pub fn mark_learned(&mut self, id: &str) {
        if !self.learned.iter().any(|l| l == id) {
            self.learned.push(id.to_string());
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.cards.retain(|c| c.id != id);
    }

    /// Swiping a card away counts it as learned and takes it off the deck
    pub fn swipe_away(&mut self, id: &str) {
        self.mark_learned(id);
        self.remove(id);
    }

    /// Adds a new card at the top of the deck and returns it
    pub fn add_random_card(&mut self) -> Flashcard {
        let card = new_random_card();
        self.cards.insert(0, card.clone());
        card
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn learned_count(&self) -> usize {
        self.learned.len()
    }

    pub fn total(&self) -> usize {
        self.learned.len() + self.cards.len()
    }

    pub fn percentage(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.learned_count() as f64 / total as f64 * 100.0
        }
    }

    pub fn is_complete(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_quiz_has_full_deck() {
        let quiz = QuizState::new();
        assert_eq!(quiz.cards.len(), 10);
        assert_eq!(quiz.cards[0].id, "1");
        assert_eq!(quiz.learned_count(), 0);
        assert_eq!(quiz.percentage(), 0.0);
    }

    #[test]
    fn test_swipe_away_updates_progress() {
        let mut quiz = QuizState::new();
        quiz.swipe_away("3");
        quiz.swipe_away("3");

        assert_eq!(quiz.cards.len(), 9);
        assert_eq!(quiz.learned_count(), 1);
        assert_eq!(quiz.total(), 10);
        assert_eq!(quiz.percentage().round(), 10.0);
    }

    #[test]
    fn test_add_card_goes_on_top_with_unique_id() {
        let mut quiz = QuizState::new();
        let first = quiz.add_random_card();
        let second = quiz.add_random_card();

        assert_eq!(quiz.cards[0], second);
        assert_eq!(quiz.cards[1], first);
        assert_ne!(first.id, second.id);
        assert_eq!(quiz.total(), 12);
    }

    #[test]
    fn test_reset_restores_initial_deck() {
        let mut quiz = QuizState::new();
        for card in initial_flashcards() {
            quiz.swipe_away(&card.id);
        }
        assert!(quiz.is_complete());
        assert_eq!(quiz.percentage(), 100.0);

        quiz.reset();
        assert_eq!(quiz, QuizState::new());
    }

    #[test]
    fn test_empty_total_has_zero_percentage() {
        let quiz = QuizState {
            cards: Vec::new(),
            learned: Vec::new(),
        };
        assert_eq!(quiz.percentage(), 0.0);
    }
}
