use crate::{
    country::Country,
    event::{Notification, Prompt},
    game_state::RoundStatus,
    play::Action,
};

pub trait Player {
    fn name(&self) -> &str;

    /// Shows the target and the visible flags and returns the player's pick.
    fn obtain_action(
        &mut self,
        target: &Country,
        choices: &[Country],
        status: &RoundStatus,
    ) -> Action;

    fn notify(&mut self, notification: &Notification);

    /// `true` to go on with the prompted step, `false` to leave the session.
    fn confirm(&mut self, prompt: Prompt) -> bool;
}
