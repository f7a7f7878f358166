//! Keyword intent matching for the public demo bot.
//!
//! Rules are checked in a fixed order and every match overwrites the previous
//! one, so the last matching rule wins: booking > prices > hours > fallback.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Hours,
    Prices,
    Booking,
    Fallback,
}

impl Intent {
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Hours => "hours",
            Intent::Prices => "prices",
            Intent::Booking => "booking",
            Intent::Fallback => "fallback",
        }
    }

    /// Canned reply shown by the demo bot.
    pub fn reply(&self) -> &'static str {
        match self {
            Intent::Hours => "Tue–Sat 9a–7p, Sun 10a–3p, Mon closed.",
            Intent::Prices => "Cuts $25, beard $15, full $35.",
            Intent::Booking => "Drop your name/phone and we’ll confirm!",
            Intent::Fallback => "I can help with hours, prices, or booking.",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

static RULES: LazyLock<[(Intent, Regex); 3]> = LazyLock::new(|| {
    [
        (Intent::Hours, r"(?i)hour|open|close"),
        (Intent::Prices, r"(?i)price|how much"),
        (Intent::Booking, r"(?i)book|appoint"),
    ]
    .map(|(intent, pattern)| {
        let re = Regex::new(pattern).unwrap_or_else(|e| panic!("Invalid regex {pattern}: {e}"));
        (intent, re)
    })
});

pub fn classify(message: &str) -> Intent {
    let mut intent = Intent::Fallback;
    for (candidate, re) in RULES.iter() {
        if re.is_match(message) {
            intent = *candidate;
        }
    }
    intent
}
