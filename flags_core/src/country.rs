use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::{EnumMessage, IntoEnumIterator};
use strum_macros::{Display, EnumIter, EnumMessage, EnumString};

#[allow(clippy::upper_case_acronyms)]
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Copy,
    Clone,
    Display,
    EnumIter,
    EnumString,
    EnumMessage,
    Serialize,
    Deserialize,
)]
pub enum Country {
    #[strum(message = "Three horizontal stripes: blue on top, black in the middle, white at the bottom.")]
    Estonia,
    #[strum(message = "Three vertical stripes: blue at the hoist, white in the middle, red at the fly.")]
    France,
    #[strum(message = "Three horizontal stripes: black on top, red in the middle, gold at the bottom.")]
    Germany,
    #[strum(message = "Three vertical stripes: green at the hoist, white in the middle, orange at the fly.")]
    Ireland,
    #[strum(message = "Three vertical stripes: green at the hoist, white in the middle, red at the fly.")]
    Italy,
    #[strum(message = "Three vertical stripes: green at both edges with white in the middle.")]
    Nigeria,
    #[strum(message = "Two horizontal stripes: white over red.")]
    Poland,
    #[strum(
        message = "Horizontal red, yellow, red stripes with a double-width yellow band carrying a coat of arms near the hoist."
    )]
    Spain,
    #[strum(
        message = "A red cross edged in white over red and white diagonal crosses on a dark blue field."
    )]
    UK,
    #[strum(message = "Two horizontal stripes: blue over yellow.")]
    Ukraine,
    #[strum(
        message = "Thirteen red and white horizontal stripes with fifty white stars on a blue canton."
    )]
    US,
}

impl Country {
    /// The built-in candidate pool, in declaration order.
    pub fn all() -> Vec<Country> {
        Country::iter().collect()
    }

    /// Textual stand-in for the flag image.
    pub fn flag(&self) -> &'static str {
        self.get_message().unwrap_or("No description")
    }

    pub fn describe(&self) -> String {
        format!("{}: {}", self, self.flag())
    }

    pub fn flags() -> String {
        Country::iter().map(|c| c.describe()).join("\n")
    }
}
