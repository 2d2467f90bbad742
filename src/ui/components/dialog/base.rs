//! Overlay box shared by notifications

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

/// Horizontal padding inside the border, per side
const PAD_X: u16 = 2;

/// What an overlay shows and how it is colored
pub struct DialogConfig<'a> {
    /// Drawn in the top border
    pub title: &'a str,
    /// Title and border color
    pub accent: Color,
    pub message: &'a str,
    /// Drawn in the bottom border, if any
    pub hint: Option<&'a str>,
    /// Upper bound on the outer width
    pub max_width: u16,
}

/// Overlay rectangle: horizontally centered, one row below the top edge,
/// clamped to the screen
fn dialog_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + 1.min(area.height - height),
        width,
        height,
    )
}

/// Outer width needed to fit `lines` and the border texts
fn outer_width(lines: &[String], config: &DialogConfig) -> u16 {
    let widest = lines
        .iter()
        .map(|l| l.chars().count())
        .chain([config.title.chars().count() + 2])
        .chain(config.hint.map(|h| h.chars().count() + 2))
        .max()
        .unwrap_or_default() as u16;
    (widest + 2 * PAD_X + 2).min(config.max_width)
}

/// Draw the overlay on top of whatever is already on screen
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let inner_max = config.max_width.saturating_sub(2 * PAD_X + 2) as usize;
    let lines = wrap_text(config.message, inner_max);

    let width = outer_width(&lines, &config);
    // Border rows plus a blank line above and below the message
    let height = lines.len() as u16 + 4;
    let rect = dialog_area(frame.area(), width, height);

    let accent = Style::default().fg(config.accent);
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(accent)
        .title(Line::styled(
            format!(" {} ", config.title),
            accent.add_modifier(Modifier::BOLD),
        ))
        .padding(Padding::new(PAD_X, PAD_X, 1, 1))
        .style(Style::default().bg(Color::Black));
    if let Some(hint) = config.hint {
        block = block.title_bottom(
            Line::styled(format!(" {hint} "), Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Right),
        );
    }

    let body = Paragraph::new(lines.into_iter().map(Line::from).collect::<Vec<_>>())
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(Clear, rect);
    frame.render_widget(body, rect);
}

/// Greedy word wrap on character counts. Explicit newlines are kept and a
/// word longer than `max_width` gets a line of its own.
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines: Vec<String> = text
        .split('\n')
        .flat_map(|paragraph| {
            let mut out: Vec<String> = vec![String::new()];
            for word in paragraph.split_whitespace() {
                let last = out.last_mut().map(|l| l.chars().count()).unwrap_or(0);
                if last > 0 && last + 1 + word.chars().count() > max_width {
                    out.push(word.to_string());
                } else if let Some(line) = out.last_mut() {
                    if last > 0 {
                        line.push(' ');
                    }
                    line.push_str(word);
                }
            }
            out
        })
        .collect();

    // A trailing blank line adds nothing to an overlay
    while lines.len() > 1 && lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines
}
