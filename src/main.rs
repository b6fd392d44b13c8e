use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use log::info;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use puppy_bowl::api::HttpRosterApi;
use puppy_bowl::app::App;
use puppy_bowl::config::ClientConfig;
use puppy_bowl::logging;
use puppy_bowl::provider::spawn_roster_provider;
use puppy_bowl::state::{apply_delta, AppState, Delta, Focus, Screen};
use puppy_bowl::view::{DetailView, FormView, ListView, PlayerCard};

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let config = ClientConfig::from_env().context("read configuration")?;
    if let Err(err) = logging::init(&config) {
        eprintln!("logging disabled: {err:#}");
    }
    info!("starting against {}", config.api_url());
    let api = HttpRosterApi::new(config).context("build http client")?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let (tx, rx) = mpsc::channel();
    let (cmd_tx, cmd_rx) = mpsc::channel();
    spawn_roster_provider(Box::new(api), tx, cmd_rx);

    let mut app = App::new(cmd_tx);
    app.bootstrap();
    let res = run_app(&mut terminal, &mut app, rx);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    info!("exiting");
    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: mpsc::Receiver<Delta>,
) -> io::Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        while let Ok(delta) = rx.try_recv() {
            apply_delta(&mut app.state, delta);
        }

        terminal.draw(|f| ui(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let header = Paragraph::new(header_text(&app.state))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(38)])
        .split(rows[1]);

    match app.state.detail_view() {
        Some(detail) => render_detail(frame, columns[0], &detail),
        None => render_list(frame, columns[0], &app.state.list_view(), app.state.selected),
    }
    render_form(frame, columns[1], &app.state.form_view());

    let console = Paragraph::new(console_text(&app.state))
        .block(Block::default().title("Console").borders(Borders::ALL));
    frame.render_widget(console, rows[2]);

    let footer = Paragraph::new(footer_text(&app.state));
    frame.render_widget(footer, rows[3]);

    if app.state.help_overlay {
        render_help_overlay(frame, frame.size());
    }
}

fn header_text(state: &AppState) -> String {
    let title = match state.screen {
        Screen::List => format!("PUPPY BOWL | Roster | {} players", state.player_count()),
        Screen::Detail(ref player) => format!("PUPPY BOWL | Player #{}", player.id),
    };
    let line1 = format!(" /\\_/\\  {title}");
    let line2 = "( o.o )".to_string();
    format!("{line1}\n{line2}")
}

fn footer_text(state: &AppState) -> String {
    match (state.focus, &state.screen) {
        (Focus::Form, _) => {
            "Type to edit | Tab/↓ Next | Shift-Tab/↑ Prev | Enter Submit | Esc Roster".to_string()
        }
        (Focus::Roster, Screen::List) => {
            "j/k/↑/↓ Move | Enter/d Details | x Remove | r Refresh | t Teams | Tab Form | ? Help | q Quit"
                .to_string()
        }
        (Focus::Roster, Screen::Detail(_)) => {
            "b/Esc Close | Tab Form | ? Help | q Quit".to_string()
        }
    }
}

const CARD_HEIGHT: u16 = 4;

fn render_list(frame: &mut Frame, area: Rect, list: &ListView, selected: usize) {
    let block = Block::default().title("Roster").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if list.is_empty() {
        let msg = if list.unavailable {
            "Roster unavailable"
        } else {
            "No players on the roster"
        };
        let empty = Paragraph::new(msg).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    if inner.height < CARD_HEIGHT {
        let empty = Paragraph::new("Roster needs more height")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    let visible = (inner.height / CARD_HEIGHT) as usize;
    let (start, end) = visible_range(selected, list.cards.len(), visible);

    for (i, idx) in (start..end).enumerate() {
        let card_area = Rect {
            x: inner.x,
            y: inner.y + (i as u16) * CARD_HEIGHT,
            width: inner.width,
            height: CARD_HEIGHT,
        };
        let style = if idx == selected {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        } else {
            Style::default()
        };
        let card = Paragraph::new(card_text(&list.cards[idx], idx == selected)).style(style);
        frame.render_widget(card, card_area);
    }
}

fn card_text(card: &PlayerCard, selected: bool) -> String {
    let prefix = if selected { "> " } else { "  " };
    let [details, remove] = &card.controls;
    [
        format!("{prefix}#{} {}", card.id, card.name),
        format!("  Breed: {} | Status: {}", card.breed, card.status),
        format!("  Image: {}", card.image_url),
        format!(
            "  [Enter] {} {}  [x] {} {}",
            details.label(),
            details.tag(),
            remove.label(),
            remove.tag()
        ),
    ]
    .join("\n")
}

fn render_detail(frame: &mut Frame, area: Rect, detail: &DetailView) {
    let lines = vec![
        Line::from(Span::styled(
            detail.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Id: {}", detail.id)),
        Line::from(format!("Breed: {}", detail.breed)),
        Line::from(format!("Status: {}", detail.status)),
        Line::from(format!("Image: {}", detail.image_url)),
        Line::from(""),
        Line::from(format!("[Esc] {} {}", detail.close.label(), detail.close.tag())),
    ];
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().title("Player Details").borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn render_form(frame: &mut Frame, area: Rect, form: &FormView) {
    let mut lines = Vec::new();
    for field in &form.fields {
        let label_style = if field.focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(Span::styled(field.label, label_style)));
        let cursor = if field.focused { "_" } else { "" };
        lines.push(Line::from(format!("  {}{cursor}", field.value)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(format!("[Enter] {}", form.submit.label())));

    let border_style = if form.active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title("New Player")
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(paragraph, area);
}

fn visible_range(selected: usize, total: usize, visible: usize) -> (usize, usize) {
    if total == 0 {
        return (0, 0);
    }
    if total <= visible {
        return (0, total);
    }

    let mut start = selected.saturating_sub(visible / 2);
    if start + visible > total {
        start = total - visible;
    }
    (start, start + visible)
}

fn console_text(state: &AppState) -> String {
    if state.logs.is_empty() {
        return "No messages yet".to_string();
    }
    let start = state.logs.len().saturating_sub(3);
    state
        .logs
        .iter()
        .skip(start)
        .cloned()
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "Puppy Bowl - Help",
        "",
        "Roster:",
        "  j/k or ↑/↓   Move",
        "  Enter / d    See details",
        "  x / Del      Remove from roster",
        "  r            Refresh roster",
        "  t            Fetch teams",
        "  Tab / n      New player form",
        "  ?            Toggle help",
        "  q            Quit",
        "",
        "Details:",
        "  b / Esc      Close",
        "",
        "Form:",
        "  Tab/↓ ↑      Move between fields",
        "  Enter        Submit",
        "  Esc          Back to roster",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
