//! Plain-text rendering of the controller state for the terminal front end.

use std::fmt;

use crate::controller::{Phase, ViewState};
use crate::display::{self, RecommendationCard};

const STAR_FILLED: char = '★';
const STAR_EMPTY: char = '☆';
const CHECK: char = '✓';
const CROSS: char = '✗';

pub const PROMPT_TEXT: &str = "Submit the form to see assessment recommendations";
pub const LOADING_TEXT: &str = "Getting Recommendations...";
pub const NO_RESULTS_TEXT: &str = "No recommendations found.";

/// Renders a [`ViewState`] the way the list page lays it out.
pub struct TextView<'a>(pub &'a ViewState);

impl fmt::Display for TextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;
        if state.in_flight {
            return writeln!(f, "{LOADING_TEXT}");
        }

        if state.recommendations.is_empty() {
            // A failed call looks exactly like an empty result.
            let text = match state.phase {
                Phase::Idle => PROMPT_TEXT,
                Phase::Submitting | Phase::Succeeded | Phase::Failed => NO_RESULTS_TEXT,
            };
            return writeln!(f, "{text}");
        }

        writeln!(f, "Recommendations")?;
        for card in display::cards(&state.recommendations) {
            writeln!(f)?;
            write_card(f, &card)?;
        }
        Ok(())
    }
}

fn write_card(f: &mut fmt::Formatter<'_>, card: &RecommendationCard) -> fmt::Result {
    writeln!(
        f,
        "{}  {}",
        card.rating.render(STAR_FILLED, STAR_EMPTY),
        card.match_label
    )?;
    match &card.category {
        Some(category) => writeln!(f, "{} ({category})", card.title)?,
        None => writeln!(f, "{}", card.title)?,
    }
    if !card.description.is_empty() {
        writeln!(f, "  {}", card.description)?;
    }
    if !card.test_types.is_empty() {
        let badges: Vec<String> = card.test_types.iter().map(|t| format!("[{t}]")).collect();
        writeln!(f, "  {}", badges.join(" "))?;
    }
    writeln!(
        f,
        "  {}  |  {} {}  |  {} {}",
        card.duration_label,
        glyph(card.flags.remote),
        card.flags.remote_label(),
        glyph(card.flags.adaptive),
        card.flags.adaptive_label()
    )?;
    writeln!(f, "  Why this test: {}", card.reason)?;
    if !card.url.is_empty() {
        writeln!(f, "  View Details: {}", card.url)?;
    }
    Ok(())
}

fn glyph(flag: bool) -> char {
    if flag {
        CHECK
    } else {
        CROSS
    }
}
