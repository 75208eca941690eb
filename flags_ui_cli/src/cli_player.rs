use std::{
    io::{self, BufRead, Write},
    str::FromStr,
};

use flags_core::{
    country::Country,
    event::{Notification, Prompt},
    game_state::RoundStatus,
    play::Action,
    player::Player,
};

static RULES: &str = "
*** Guess the Flag ***
Every round you are given the name of a country and a few flags, each described in words.
Pick the flag that belongs to the named country by typing its number. A right answer scores
a point, a wrong one tells you whose flag you picked instead. After the last round your final
score is shown and you may start over.";

#[derive(Debug, PartialEq)]
enum CliAction {
    Quit,
    Rules,
    Choice(usize),
}

#[derive(Debug, PartialEq, Eq)]
struct ParseActionError;

impl CliAction {
    fn info(&self, choices: &[Country]) -> String {
        match self {
            CliAction::Quit => "quit".to_string(),
            CliAction::Rules => "display rules".to_string(),
            CliAction::Choice(i) => choices
                .get(*i)
                .map(|c| c.flag().to_string())
                .unwrap_or_default(),
        }
    }

    fn cmd_str(&self) -> String {
        match self {
            CliAction::Quit => "q".to_string(),
            CliAction::Rules => "r".to_string(),
            CliAction::Choice(i) => i.to_string(),
        }
    }
}

impl FromStr for CliAction {
    type Err = ParseActionError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "q" => Ok(CliAction::Quit),
            "r" => Ok(CliAction::Rules),
            _ => usize::from_str(s)
                .map(CliAction::Choice)
                .map_err(|_| ParseActionError),
        }
    }
}

fn read_line() -> Option<String> {
    io::stdout().flush().ok()?;
    match io::stdin().lock().lines().next() {
        Some(Ok(line)) => Some(line.trim().to_string()),
        _ => None,
    }
}

pub struct CliPlayer {
    name: String,
}

impl CliPlayer {
    fn query_user(&self, cmds: &[CliAction], prompt: &str, choices: &[Country]) -> CliAction {
        print!("\n{}\n", prompt);
        loop {
            for cmd in cmds {
                println!("- [{}]: {}", cmd.cmd_str(), cmd.info(choices));
            }
            print!(">");
            // closed stdin counts as quitting
            let Some(line) = read_line() else {
                return CliAction::Quit;
            };
            if let Ok(action) = CliAction::from_str(&line) {
                if cmds.contains(&action) {
                    return action;
                }
            }
        }
    }
}

impl CliPlayer {
    pub fn new() -> CliPlayer {
        print!("Please Enter Name: ");
        let name = match read_line() {
            Some(line) if !line.is_empty() => line,
            _ => "You".to_string(),
        };

        CliPlayer { name }
    }
}

impl Player for CliPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn obtain_action(
        &mut self,
        target: &Country,
        choices: &[Country],
        status: &RoundStatus,
    ) -> Action {
        println!("================================================");
        println!(
            "Score: {}    Round: {}/{}",
            status.score, status.round, status.total_rounds
        );

        let mut cmds = vec![CliAction::Quit, CliAction::Rules];
        cmds.extend((0..choices.len()).map(CliAction::Choice));

        let prompt = format!("Tap the flag of {}", target);
        loop {
            match self.query_user(&cmds, &prompt, choices) {
                CliAction::Quit => return Action::Quit,
                CliAction::Rules => println!("{}", RULES),
                CliAction::Choice(i) => return Action::Guess(i),
            }
        }
    }

    fn notify(&mut self, notification: &Notification) {
        println!("\n*** {} ***", notification.title);
        println!("{}", notification.message);
    }

    fn confirm(&mut self, prompt: Prompt) -> bool {
        print!("[{}] (enter) or quit (q) ", prompt);
        match read_line() {
            Some(line) => line != "q",
            None => false,
        }
    }
}
