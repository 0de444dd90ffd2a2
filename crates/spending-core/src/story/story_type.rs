use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// How a story's amount is compared.
///
/// `OverOneYear` amounts are a yearly budget and get cut into time rates
/// (per day, week, month). `Discrete` amounts are compared as a whole.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum StoryType {
    #[default]
    Discrete,
    OverOneYear,
}

impl StoryType {
    pub const ALL: [StoryType; 2] = [Self::Discrete, Self::OverOneYear];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Discrete => "discrete",
            Self::OverOneYear => "over_one_year",
        }
    }
}

impl fmt::Display for StoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
