//! Presentation hook.
//!
//! The engine calls a [`Renderer`] when hands are dealt and when a play is
//! revealed, and logs what it returns. Nothing in the engine depends on the
//! rendered text.

use crate::cards::Card;

/// Turns cards into a display string.
pub trait Renderer {
    fn render(&self, label: &str, cards: &[Card]) -> String;
}

/// Plain one-line text rendering, e.g. `Player 0 hand: [A♥ K♠]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, label: &str, cards: &[Card]) -> String {
        let labels: Vec<String> = cards.iter().map(ToString::to_string).collect();
        format!("{}: [{}]", label, labels.join(" "))
    }
}
