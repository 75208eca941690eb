use rand::Rng;

use crate::{
    country::Country,
    event::{Notification, Prompt},
    game_state::RoundStatus,
    play::Action,
    player::Player,
};

pub struct RandomPlayingComputer<R> {
    name: String,
    max_games: usize,
    games_played: usize,
    rng: R,
}

impl<R: Rng> RandomPlayingComputer<R> {
    pub fn new(name: &str, max_games: usize, rng: R) -> Self {
        RandomPlayingComputer {
            name: name.to_string(),
            max_games: max_games.max(1),
            games_played: 0,
            rng,
        }
    }

    pub fn games_played(&self) -> usize {
        self.games_played
    }
}

impl<R: Rng> Player for RandomPlayingComputer<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn obtain_action(
        &mut self,
        _target: &Country,
        choices: &[Country],
        _status: &RoundStatus,
    ) -> Action {
        if choices.is_empty() {
            return Action::Quit;
        }
        Action::Guess(self.rng.gen_range(0..choices.len()))
    }

    fn notify(&mut self, _notification: &Notification) {}

    fn confirm(&mut self, prompt: Prompt) -> bool {
        match prompt {
            Prompt::Continue => true,
            Prompt::Restart => {
                self.games_played += 1;
                self.games_played < self.max_games
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use crate::{
        country::Country,
        event::Prompt,
        game_state::RoundStatus,
        play::Action,
        player::Player,
        random_playing_computer::RandomPlayingComputer,
    };

    const STATUS: RoundStatus = RoundStatus {
        round: 1,
        total_rounds: 8,
        score: 0,
    };

    #[test]
    fn obtain_action_should_guess_a_visible_choice() {
        let mut computer = RandomPlayingComputer::new("Computer", 1, StdRng::seed_from_u64(1));
        let choices = [Country::Spain, Country::Poland, Country::US];
        for _ in 0..100 {
            match computer.obtain_action(&Country::US, &choices, &STATUS) {
                Action::Guess(i) => assert!(i < choices.len()),
                Action::Quit => panic!("computer should never quit"),
            }
        }
    }

    #[test]
    fn obtain_action_should_quit_without_choices() {
        let mut computer = RandomPlayingComputer::new("Computer", 1, StdRng::seed_from_u64(1));
        assert_eq!(
            computer.obtain_action(&Country::US, &[], &STATUS),
            Action::Quit
        );
    }

    #[test]
    fn confirm_should_restart_until_max_games_are_played() {
        let mut computer = RandomPlayingComputer::new("Computer", 3, StdRng::seed_from_u64(1));
        assert!(computer.confirm(Prompt::Continue));
        assert!(computer.confirm(Prompt::Restart));
        assert!(computer.confirm(Prompt::Restart));
        assert!(!computer.confirm(Prompt::Restart));
        assert_eq!(computer.games_played(), 3);
    }
}
