//! Card renderer.
//!
//! A terminal cannot rotate text, so rotation is shown by squashing the
//! visible face horizontally by `|cos(rotation)|`. At the crossover the card
//! collapses to a thin edge before the other face opens up.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::country::CountryRecord;
use crate::ui::flip::{CardProjection, FaceProjection};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT_GREEN, CARD_BACK, HEADER_TEXT, MUTED_TEXT, NAVY};

pub const CARD_WIDTH: u16 = 44;
pub const CARD_HEIGHT: u16 = 14;
/// Narrowest the card gets mid-flip: just its two borders.
const MIN_CARD_WIDTH: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Front,
    Back,
}

/// The face to draw and its on-screen width for a given projection.
pub fn visible_face(projection: &CardProjection, full_width: u16) -> (Face, u16) {
    let (face, proj) = if projection.front.visible {
        (Face::Front, projection.front)
    } else {
        (Face::Back, projection.back)
    };
    (face, face_width(&proj, full_width))
}

fn face_width(face: &FaceProjection, full_width: u16) -> u16 {
    let scaled = (f32::from(full_width) * face.width_scale()).round() as u16;
    scaled.clamp(MIN_CARD_WIDTH.min(full_width), full_width)
}

pub fn front_lines(record: &CountryRecord) -> Vec<Line<'static>> {
    let title = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
    let section = Style::default().fg(ACCENT_GREEN).add_modifier(Modifier::BOLD);
    let detail = Style::default().fg(HEADER_TEXT);

    vec![
        Line::from(vec![
            Span::raw(format!("{}  ", record.emoji)),
            Span::styled(record.name.clone(), title),
        ]),
        Line::from(Span::styled(
            record.native.clone(),
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(Span::styled("Capital", section)),
        Line::from(Span::styled(format!("  {}", record.capital_or_na()), detail)),
        Line::from(Span::styled("Currency", section)),
        Line::from(Span::styled(format!("  {}", record.currency_or_na()), detail)),
        Line::from(""),
        hint("Tab to see languages"),
    ]
}

pub fn back_lines(record: &CountryRecord) -> Vec<Line<'static>> {
    let section = Style::default().fg(ACCENT_GREEN).add_modifier(Modifier::BOLD);
    let detail = Style::default().fg(HEADER_TEXT);

    let mut lines = vec![Line::from(Span::styled("Languages", section))];
    if record.languages.is_empty() {
        lines.push(Line::from(Span::styled("  N/A", detail)));
    }
    lines.extend(
        record
            .languages
            .iter()
            .map(|lang| Line::from(Span::styled(format!("  • {}", lang.name), detail))),
    );
    lines.push(Line::from(""));
    lines.push(hint("Tab to return"));
    lines
}

fn hint(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
    ))
    .alignment(Alignment::Center)
}

pub fn render_card(
    frame: &mut Frame<'_>,
    area: Rect,
    record: &CountryRecord,
    projection: &CardProjection,
) {
    let full = centered_rect_by_size(area, CARD_WIDTH, CARD_HEIGHT);
    let (face, width) = visible_face(projection, full.width);
    let rect = centered_rect_by_size(full, width, full.height);

    let (lines, background) = match face {
        Face::Front => (front_lines(record), NAVY),
        Face::Back => (back_lines(record), CARD_BACK),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(MUTED_TEXT))
        .style(Style::default().bg(background));

    frame.render_widget(Clear, rect);
    // Hide text while the card is too narrow to read it.
    let body = if width < full.width / 2 { Vec::new() } else { lines };
    frame.render_widget(
        Paragraph::new(body).block(block).wrap(Wrap { trim: false }),
        rect,
    );
}
