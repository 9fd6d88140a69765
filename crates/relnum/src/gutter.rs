// ABOUTME: Turns phantom markup back into a terminal gutter cell
// ABOUTME: Stands in for the host's HTML renderer when printing to a terminal

use relnum_types::Color;

/// One rendered gutter entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GutterCell {
    pub text: String,
    pub color: Option<Color>,
}

impl GutterCell {
    /// A blank cell `width` columns wide, for rows without a phantom
    pub fn blank(width: usize) -> Self {
        Self {
            text: " ".repeat(width),
            color: None,
        }
    }

    /// Read the number and its color out of phantom markup
    pub fn from_markup(markup: &str) -> Option<Self> {
        let div = markup.find("<div")?;
        let start = div + markup[div..].find('>')? + 1;
        let end = start + markup[start..].find("</div>")?;
        let text = markup[start..end].replace("&nbsp;", " ");

        let color = markup.find("color:").and_then(|pos| {
            let rest = &markup[pos + "color:".len()..];
            rest.find(';').map(|end| Color::new(rest[..end].trim()))
        });

        Some(Self { text, color })
    }

    /// Text of the cell, wrapped in a 24-bit ANSI color when possible
    pub fn paint(&self, ansi: bool) -> String {
        let rgb = match (&self.color, ansi) {
            (Some(color), true) => match color.to_rgb() {
                Ok(rgb) => Some(rgb),
                Err(err) => {
                    relnum_logging::debug!(%err, "Printing gutter cell without color");
                    None
                }
            },
            _ => None,
        };

        match rgb {
            Some((r, g, b)) => format!("\x1b[38;2;{r};{g};{b}m{}\x1b[0m", self.text),
            None => self.text.clone(),
        }
    }
}
