//! Answer checking. Each quiz is a small state machine which starts out
//! unanswered and, once an answer is submitted, is answered for good. The
//! page only ever reflects that state; nothing is read back from it other
//! than which options the user ticked.

use tracing::debug;

use super::Outcome;
use crate::dom::{Gateway, Target};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizKind {
    Single,
    Multi,
    Bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    Unanswered,
    Answered { passed: bool },
}

/// Shown (as a blocking prompt) when a single choice is submitted empty.
pub const PROMPT: &str = "Please select an answer first";

/// Decide whether a selection passes. Returns `None` if the quiz needs a
/// selection and there is none. A multiple choice answer passes only if it
/// ticks exactly the correct options.
pub fn evaluate(kind: QuizKind, correct: &[bool], selected: &[usize]) -> Option<bool> {
    let flagged = |i: &usize| {
        correct
            .get(*i)
            .copied()
            .unwrap_or(false)
    };
    match kind {
        QuizKind::Single | QuizKind::Bool => selected
            .first()
            .map(flagged),
        QuizKind::Multi => {
            let expected = correct
                .iter()
                .filter(|c| **c)
                .count();
            Some(selected.len() == expected && selected.iter().all(flagged))
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizWidget {
    id: String,
    kind: QuizKind,
    correct: Vec<bool>,
    state: QuizState,
}

impl QuizWidget {
    /// `correct` holds one flag per option, in display order.
    pub fn new(id: String, kind: QuizKind, correct: Vec<bool>) -> Self {
        QuizWidget {
            id,
            kind,
            correct,
            state: QuizState::Unanswered,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    fn option(&self, index: usize) -> Target {
        Target::QuizOption {
            quiz: self
                .id
                .clone(),
            index,
        }
    }

    fn selected(&self, gateway: &dyn Gateway) -> Vec<usize> {
        (0..self
            .correct
            .len())
            .filter(|&i| gateway.is_checked(&self.option(i)))
            .collect()
    }

    /// Handle the check answer button.
    pub fn submit(&mut self, gateway: &mut dyn Gateway) -> Outcome {
        if let QuizState::Answered { .. } = self.state {
            debug!("Quiz {} already answered", self.id);
            return Outcome::Ignored;
        }

        let selected = self.selected(gateway);
        match evaluate(self.kind, &self.correct, &selected) {
            None => {
                gateway.alert(PROMPT);
                Outcome::Prompted
            }
            Some(passed) => {
                self.state = QuizState::Answered { passed };
                self.project(gateway, &selected, passed);
                Outcome::Handled
            }
        }
    }

    fn message(&self, passed: bool) -> String {
        if passed {
            return "✅ Correct!".to_string();
        }
        match self.kind {
            QuizKind::Multi => {
                let count = self
                    .correct
                    .iter()
                    .filter(|c| **c)
                    .count();
                format!(
                    "❌ Incorrect, there are {} correct options, highlighted in green",
                    count
                )
            }
            _ => "❌ Incorrect, the correct answer is highlighted in green".to_string(),
        }
    }

    fn project(&self, gateway: &mut dyn Gateway, selected: &[usize], passed: bool) {
        for (i, correct) in self
            .correct
            .iter()
            .enumerate()
        {
            let option = self.option(i);
            gateway.set_disabled(&option, true);
            if *correct {
                gateway.add_class(&option, "correct");
            } else if selected.contains(&i) {
                gateway.add_class(&option, "wrong");
            }
        }

        let quiz = self
            .id
            .clone();
        let feedback = Target::QuizFeedback { quiz: quiz.clone() };
        gateway.set_visible(&feedback, true);
        gateway.add_class(&feedback, "show");
        gateway.add_class(&feedback, if passed { "correct" } else { "incorrect" });
        gateway.set_inner_html(
            &Target::QuizFeedbackContent { quiz: quiz.clone() },
            &self.message(passed),
        );
        gateway.set_disabled(&Target::QuizSubmit { quiz }, true);
    }
}
