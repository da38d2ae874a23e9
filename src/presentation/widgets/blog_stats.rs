use ratatui::prelude::*;
use thousands::Separable;

pub struct BlogStats {
    likes: u64,
    owner: Option<String>,
}

impl BlogStats {
    pub fn new(likes: u64, owner: Option<String>) -> Self {
        Self { likes, owner }
    }
}

impl From<BlogStats> for Text<'_> {
    fn from(value: BlogStats) -> Self {
        let noun = if value.likes == 1 { "like" } else { "likes" };
        let mut spans = vec![Span::styled(
            format!("{} {noun}", value.likes.separate_with_commas()),
            Style::default().fg(Color::LightRed),
        )];
        if let Some(owner) = value.owner {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format!("added by {owner}"),
                Style::default().fg(Color::Gray),
            ));
        }
        Line::from(spans).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn plain(text: &Text<'_>) -> String {
        text.lines
            .iter()
            .flat_map(|line| line.spans.iter().map(|span| span.content.to_string()))
            .collect()
    }

    #[rstest]
    #[case(0, None, "0 likes")]
    #[case(1, None, "1 like")]
    #[case(1234567, None, "1,234,567 likes")]
    #[case(5, Some("Matti"), "5 likes added by Matti")]
    fn test_stats_text(#[case] likes: u64, #[case] owner: Option<&str>, #[case] expected: &str) {
        let text: Text = BlogStats::new(likes, owner.map(str::to_string)).into();
        assert_eq!(plain(&text), expected);
    }
}
