use crate::nav::Route;
use crate::ui::app::{App, Focus};
use crate::ui::card::render_card;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::home::HOME_ENTRIES;
use crate::ui::layout::{centered_rect_by_size, layout_regions, take_rows};
use crate::ui::profile::ProfileScreen;
use crate::ui::search::FetchState;
use crate::ui::theme::{
    ACCENT_GREEN, ACTIVE_HIGHLIGHT, ERROR_BORDER, ERROR_TEXT, GLOBAL_BORDER, HEADER_TEXT,
    MUTED_TEXT,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub const INPUT_PLACEHOLDER: &str = "Enter country code (e.g., BR)";
pub const LOADING_TEXT: &str = "Fetching country data...";
const FORM_WIDTH: u16 = 44;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let title = app.title();
    frame.render_widget(Header::new(&title, app.can_go_back()).widget(), header);
    frame.render_widget(Clear, body);

    match (app.route(), app.profile()) {
        (Route::Profile { .. }, Some(profile)) => draw_profile(frame, body, profile),
        _ => draw_home(frame, body, app),
    }

    frame.render_widget(Footer::new().widget(footer, app.route()), footer);

    if app.focus() == Focus::Help {
        draw_help(frame, body);
    }
}

fn draw_home(frame: &mut Frame<'_>, body: Rect, app: &App) {
    let selected = app.home().selected();
    let mut lines = vec![
        Line::from(Span::styled(
            "Welcome to Country Explorer",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
    ];
    for (idx, entry) in HOME_ENTRIES.iter().enumerate() {
        let mut line = Line::from(vec![
            Span::styled(format!(" {}. ", idx + 1), Style::default().fg(MUTED_TEXT)),
            Span::styled(entry.label, Style::default().fg(HEADER_TEXT)),
            Span::raw(" "),
        ]);
        if idx == selected {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT).fg(ACCENT_GREEN));
        }
        lines.push(line);
    }

    let height = lines.len() as u16;
    let rect = centered_rect_by_size(body, FORM_WIDTH, height);
    frame.render_widget(Paragraph::new(lines), rect);
}

fn draw_profile(frame: &mut Frame<'_>, body: Rect, profile: &ProfileScreen) {
    let search = profile.search();
    let column = Rect {
        x: body.x + body.width.saturating_sub(FORM_WIDTH) / 2,
        width: FORM_WIDTH.min(body.width),
        ..body
    };
    let (_, column) = take_rows(column, 1);
    let (input_area, column) = take_rows(column, 3);
    let (button_area, column) = take_rows(column, 1);
    let (_, content) = take_rows(column, 1);

    let input_line = if search.input.is_empty() {
        Line::from(Span::styled(
            INPUT_PLACEHOLDER,
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(Span::styled(
            search.input.clone(),
            Style::default().fg(HEADER_TEXT),
        ))
    };
    let input = Paragraph::new(input_line).block(
        Block::default()
            .title(Span::styled(" Country code ", Style::default().fg(MUTED_TEXT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(input, input_area);
    if input_area.height >= 3 && input_area.width > 2 {
        let offset = (search.input.chars().count() as u16).min(input_area.width - 3);
        frame.set_cursor_position((input_area.x + 1 + offset, input_area.y + 1));
    }

    let button_style = if search.fetch.is_loading() {
        Style::default().fg(MUTED_TEXT)
    } else {
        Style::default().fg(ACCENT_GREEN).add_modifier(Modifier::BOLD)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("[ {} ]", search.button_label()),
            button_style,
        )))
        .alignment(Alignment::Center),
        button_area,
    );

    match &search.fetch {
        FetchState::Idle => {}
        FetchState::Loading { .. } => {
            frame.render_widget(
                Paragraph::new(Span::styled(LOADING_TEXT, Style::default().fg(MUTED_TEXT)))
                    .alignment(Alignment::Center),
                content,
            );
        }
        FetchState::Failed(message) => {
            let (error_area, _) = take_rows(content, 3);
            frame.render_widget(
                Paragraph::new(Span::styled(
                    format!("Error: {message}"),
                    Style::default().fg(ERROR_TEXT),
                ))
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(ERROR_BORDER)),
                ),
                error_area,
            );
        }
        FetchState::Loaded(record) => {
            let card_area = Rect {
                x: body.x,
                width: body.width,
                ..content
            };
            render_card(frame, card_area, record, &profile.flip().projection());
        }
    }
}

fn draw_help(frame: &mut Frame<'_>, body: Rect) {
    let key = Style::default().fg(ACCENT_GREEN);
    let rows = [
        ("Enter", "Open entry / search"),
        ("Tab", "Flip the country card"),
        ("Backspace", "Delete a character"),
        ("Ctrl+U", "Clear the input"),
        ("Esc", "Back (quit on Home)"),
        ("F1", "Toggle this help"),
        ("Ctrl+Q", "Quit"),
    ];
    let lines: Vec<Line> = rows
        .iter()
        .map(|(k, desc)| {
            Line::from(vec![
                Span::styled(format!("{k:<10}"), key),
                Span::styled(*desc, Style::default().fg(HEADER_TEXT)),
            ])
        })
        .collect();

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let area = centered_rect_by_size(
        body,
        content_width.saturating_add(4),
        lines.len().saturating_add(2) as u16,
    );

    frame.render_widget(Clear, area);
    let popup = Block::default()
        .title(Span::styled(" Help ", Style::default().fg(ACCENT_GREEN)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(Paragraph::new(lines).block(popup), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::country::{CountryRecord, FetchDispatcher, FetchOutcome, FetchRequest, RequestId};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::rc::Rc;

    struct NullFetcher;

    impl FetchDispatcher for NullFetcher {
        fn dispatch(&self, _request: FetchRequest) {}
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn profile_app(code: Option<&str>) -> App {
        App::new(
            &Config::default(),
            Rc::new(NullFetcher),
            Route::Profile {
                country_code: code.map(str::to_string),
            },
        )
    }

    #[test]
    fn home_lists_entries() {
        let app = App::new(&Config::default(), Rc::new(NullFetcher), Route::Home);
        let screen = render(&app);
        assert!(screen.contains("Search for a country"));
        assert!(screen.contains("Country Explorer"));
    }

    #[test]
    fn empty_profile_shows_placeholder() {
        let screen = render(&profile_app(None));
        assert!(screen.contains(INPUT_PLACEHOLDER));
        assert!(screen.contains("Search"));
    }

    #[test]
    fn loading_shows_progress() {
        let screen = render(&profile_app(Some("BR")));
        assert!(screen.contains(LOADING_TEXT));
        assert!(screen.contains("Searching..."));
    }

    #[test]
    fn failure_shows_error() {
        let mut app = profile_app(Some("ZZ"));
        app.on_fetch_outcome(FetchOutcome {
            request: RequestId::new(1),
            result: Err("Country not found".into()),
        });
        assert!(render(&app).contains("Error: Country not found"));
    }

    #[test]
    fn loaded_shows_card_and_title() {
        let mut app = profile_app(Some("BR"));
        app.on_fetch_outcome(FetchOutcome {
            request: RequestId::new(1),
            result: Ok(CountryRecord {
                name: "Brazil".into(),
                native: "Brasil".into(),
                capital: Some("Brasília".into()),
                emoji: "BR".into(),
                currency: Some("BRL".into()),
                languages: vec![],
            }),
        });
        let screen = render(&app);
        assert!(screen.contains("Brazil"));
        assert!(screen.contains("Capital"));
        assert!(screen.contains("BRL"));
    }

    #[test]
    fn help_popup_renders() {
        let mut app = profile_app(None);
        app.toggle_help();
        assert!(render(&app).contains("Flip the country card"));
    }
}
