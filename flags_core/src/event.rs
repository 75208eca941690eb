use std::fmt;

use serde::Serialize;
use strum_macros::Display;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Outcome<L> {
    Correct,
    /// Carries the label the player actually picked.
    Incorrect(L),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuessResult<L> {
    pub outcome: Outcome<L>,
    pub finished: bool,
    pub score: usize,
    pub round: usize,
    pub total_rounds: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum Prompt {
    Continue,
    Restart,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub prompt: Prompt,
}

impl<L> GuessResult<L> {
    pub fn is_correct(&self) -> bool {
        matches!(self.outcome, Outcome::Correct)
    }
}

impl<L: fmt::Display> GuessResult<L> {
    pub fn notification(&self) -> Notification {
        if self.finished {
            return Notification {
                title: "Game Complete".to_string(),
                message: format!(
                    "Your final score was {}/{}",
                    self.score, self.total_rounds
                ),
                prompt: Prompt::Restart,
            };
        }
        let (title, message) = match &self.outcome {
            Outcome::Correct => ("Correct", format!("Your score is {}", self.score)),
            Outcome::Incorrect(label) => ("Incorrect", format!("Wrong! That's the flag of {label}")),
        };
        Notification {
            title: title.to_string(),
            message,
            prompt: Prompt::Continue,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        country::Country,
        event::{GuessResult, Notification, Outcome, Prompt},
    };

    fn result(outcome: Outcome<Country>, finished: bool, score: usize) -> GuessResult<Country> {
        GuessResult {
            outcome,
            finished,
            score,
            round: 3,
            total_rounds: 8,
        }
    }

    #[test]
    fn correct_guess_should_report_the_score() {
        let notification = result(Outcome::Correct, false, 2).notification();
        assert_eq!(
            notification,
            Notification {
                title: "Correct".to_string(),
                message: "Your score is 2".to_string(),
                prompt: Prompt::Continue,
            }
        );
    }

    #[test]
    fn incorrect_guess_should_name_the_picked_flag() {
        let notification = result(Outcome::Incorrect(Country::Italy), false, 0).notification();
        assert_eq!(notification.title, "Incorrect");
        assert_eq!(notification.message, "Wrong! That's the flag of Italy");
        assert_eq!(notification.prompt, Prompt::Continue);
    }

    #[test]
    fn finished_game_should_offer_a_restart() {
        let notification = result(Outcome::Correct, true, 5).notification();
        assert_eq!(notification.title, "Game Complete");
        assert_eq!(notification.message, "Your final score was 5/8");
        assert_eq!(notification.prompt, Prompt::Restart);
    }

    #[test]
    fn notification_should_serialize_for_the_presentation_layer() {
        let notification = result(Outcome::Correct, false, 1).notification();
        assert_eq!(
            serde_json::to_string(&notification).unwrap(),
            r#"{"title":"Correct","message":"Your score is 1","prompt":"Continue"}"#
        );
    }

    #[test]
    fn incorrect_outcome_should_serialize_with_its_label() {
        let json = serde_json::to_value(result(Outcome::Incorrect(Country::UK), false, 0)).unwrap();
        assert_eq!(json["outcome"]["Incorrect"], "UK");
        assert_eq!(json["finished"], false);
    }
}
