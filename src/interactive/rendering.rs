//! TUI rendering with ratatui
//!
//! Board layout for the guessing game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Heart, Mascot, Phase, hearts};
use crate::output::display::{ANSWER_LABEL, LOSS_MESSAGE, TIP_LABEL, TITLE, WIN_MESSAGE};
use crate::output::formatters::{display_mask, spaced_word};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(format!("🐸 {TITLE} - Jogo da Forca"))
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Mascot and hearts
            Constraint::Min(3),    // Tip or result
            Constraint::Length(3), // Word
        ])
        .split(area);

    render_mascot(f, app, chunks[0]);
    render_tip(f, app, chunks[1]);
    render_word(f, app, chunks[2]);
}

fn render_mascot(f: &mut Frame, app: &App, area: Rect) {
    let state = app.game.state();
    let mascot = Mascot::for_round(state);

    let heart_spans: Vec<Span> = hearts(state.remaining_attempts(), state.max_attempts())
        .into_iter()
        .flat_map(|heart| {
            let style = match heart {
                Heart::Full => Style::default().fg(Color::Red),
                Heart::Broken => Style::default().fg(Color::DarkGray),
            };
            [Span::styled(heart.symbol().to_string(), style), Span::raw(" ")]
        })
        .collect();

    let content = vec![
        Line::from(Span::styled(
            mascot.face(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            mascot.asset_name(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(heart_spans),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_tip(f: &mut Frame, app: &App, area: Rect) {
    let state = app.game.state();

    let (title, content) = match state.phase() {
        Phase::Playing => (
            format!(" {TIP_LABEL} "),
            vec![Line::from(Span::styled(
                state.tip().to_string(),
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            ))],
        ),
        Phase::Won | Phase::Lost => {
            let (message, color) = if state.phase() == Phase::Won {
                (WIN_MESSAGE, Color::Green)
            } else {
                (LOSS_MESSAGE, Color::Red)
            };
            (
                " Fim de jogo ".to_string(),
                vec![
                    Line::from(Span::styled(
                        message,
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(""),
                    Line::from(ANSWER_LABEL),
                ],
            )
        }
    };

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let state = app.game.state();

    let (text, color) = match state.phase() {
        Phase::Playing => (display_mask(state), Color::Magenta),
        Phase::Won => (spaced_word(state.word()), Color::Green),
        Phase::Lost => (spaced_word(state.word()), Color::Red),
    };

    let paragraph = Paragraph::new(Span::styled(
        text,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(color)),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Mensagens ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode() {
        InputMode::Guessing => (
            " Letra | Enter: Preencher Letra | TAB: outra palavra | ESC: sair ",
            app.game.state().pending_guess(),
            Color::Yellow,
        ),
        InputMode::RoundOver => (
            " Enter: Jogar Novamente | q: sair ",
            "",
            Color::DarkGray,
        ),
    };

    let input = Paragraph::new(content.to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let state = app.game.state();
    let words = app.game.words().len();

    let round_text = format!(
        "Palavra {}/{} ({})",
        app.game.word_index() + 1,
        words,
        app.game.config().policy()
    );
    f.render_widget(
        Paragraph::new(round_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats = app.game.stats();
    let stats_text = format!(
        "Rodadas: {} | Vitórias: {:.0}%",
        stats.rounds_played,
        stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let attempts_text = format!(
        "Tentativas: {}/{}",
        state.remaining_attempts(),
        state.max_attempts()
    );
    f.render_widget(
        Paragraph::new(attempts_text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );
}
