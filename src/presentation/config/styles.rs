use std::{collections::HashMap, str::FromStr};

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

/// Named styles, e.g. `"error" -> "bold red"`
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl Styles {
    /// Style registered under `name`, or the default style
    pub fn style(&self, name: &str) -> Style {
        self.get(name).copied().unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(name, raw)| (name, parse_style(&raw)))
            .collect();

        Ok(Styles(styles))
    }
}

/// Parses `"<modifiers and fg> on <bg>"`, e.g. `"bold red on black"`.
/// Unknown words are ignored.
pub fn parse_style(line: &str) -> Style {
    let lowered = line.to_lowercase();
    let (foreground, background) = match lowered.split_once(" on ") {
        Some((fg, bg)) => (fg, Some(bg)),
        None => (lowered.as_str(), None),
    };

    let mut style = Style::default();
    for word in foreground.split_whitespace() {
        if let Some(modifier) = parse_modifier(word) {
            style = style.add_modifier(modifier);
        } else if let Ok(color) = Color::from_str(word) {
            style = style.fg(color);
        }
    }
    if let Some(color) = background.and_then(|bg| Color::from_str(bg.trim()).ok()) {
        style = style.bg(color);
    }
    style
}

fn parse_modifier(word: &str) -> Option<Modifier> {
    let modifier = match word {
        "bold" => Modifier::BOLD,
        "dim" => Modifier::DIM,
        "italic" => Modifier::ITALIC,
        "underline" | "underlined" => Modifier::UNDERLINED,
        "blink" => Modifier::SLOW_BLINK,
        "reversed" | "inverse" => Modifier::REVERSED,
        "hidden" => Modifier::HIDDEN,
        "crossed_out" | "strikethrough" => Modifier::CROSSED_OUT,
        _ => return None,
    };
    Some(modifier)
}
