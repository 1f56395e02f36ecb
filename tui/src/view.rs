//! Screen Rendering
//!
//! Pure rendering from app state: the friend sidebar (list + add-friend
//! form), the split-bill panel, and the status bar. Nothing in here mutates
//! state; re-rendering reflects the whole current state after each action.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use ledger_core::{Friend, Payer, Selection};

use crate::app::{AddField, App, Focus, SplitField};
use crate::theme;

/// Render the whole screen
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(44), Constraint::Min(20)])
        .split(chunks[0]);

    render_sidebar(frame, columns[0], app);
    render_split_panel(frame, columns[1], app);
    render_status_bar(frame, chunks[1], app);
}

/// Sidebar: friend list, plus the add-friend form while open
fn render_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let form_height = if app.session().show_add_friend() { 8 } else { 0 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(form_height)])
        .split(area);

    render_friend_list(frame, rows[0], app);
    if app.session().show_add_friend() {
        render_add_form(frame, rows[1], app);
    }
}

fn render_friend_list(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let currency = &app.config().currency_symbol;

    let items: Vec<ListItem> = session
        .roster()
        .friends()
        .iter()
        .map(|friend| {
            let selected = session.selection().is_selected(&friend.id);
            let marker = if selected { "▸ " } else { "  " };
            let name_style = if selected {
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };

            ListItem::new(vec![
                Line::from(Span::styled(format!("{marker}{}", friend.name), name_style)),
                Line::from(Span::styled(
                    format!("  {}", balance_text(friend, currency)),
                    balance_style(friend),
                )),
            ])
        })
        .collect();

    let border_style = if app.focus() == Focus::Roster {
        Style::default().fg(theme::ACCENT_DARK)
    } else {
        Style::default().fg(theme::DIM_GRAY)
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(" Friends "),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    if !session.roster().is_empty() {
        state.select(Some(app.roster_cursor()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_add_form(frame: &mut Frame, area: Rect, app: &App) {
    let focused_field = match app.focus() {
        Focus::AddForm(field) => Some(field),
        _ => None,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ACCENT_DARK))
        .title(" Add friend ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Writes reach inner.y + 5, so six rows are required
    if inner.height < 6 {
        return;
    }

    let label_style = Style::default().fg(theme::DIM_GRAY);
    let buf = frame.buffer_mut();
    buf.set_string(inner.x, inner.y, "Friend name", label_style);
    app.add_name().render(
        field_row(inner, 1),
        buf,
        field_style(focused_field == Some(AddField::Name)),
        focused_field == Some(AddField::Name),
    );

    buf.set_string(inner.x, inner.y + 2, "Image URL", label_style);
    app.add_image().render(
        field_row(inner, 3),
        buf,
        field_style(focused_field == Some(AddField::Image)),
        focused_field == Some(AddField::Image),
    );

    buf.set_string(
        inner.x,
        inner.y + 5,
        "[Enter] add   [Esc] close",
        Style::default().fg(theme::STATUS_TEXT),
    );
}

fn render_split_panel(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let currency = &app.config().currency_symbol;

    let (Selection::Selected(id), Some(draft)) = (session.selection(), session.split_draft())
    else {
        let hint = Paragraph::new("Select a friend to split a bill.")
            .style(Style::default().fg(theme::DIM_GRAY))
            .block(Block::default().borders(Borders::ALL).border_style(
                Style::default().fg(theme::DIM_GRAY),
            ));
        frame.render_widget(hint, area);
        return;
    };

    // The selection invariant guarantees the record exists
    let Some(friend) = session.roster().get(id) else {
        return;
    };
    let focused_field = match app.focus() {
        Focus::SplitForm(field) => Some(field),
        _ => None,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ACCENT_DARK))
        .title(format!(" Split a bill with {} ", friend.name));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 9 {
        return;
    }

    let label_style = Style::default().fg(theme::DIM_GRAY);
    let buf = frame.buffer_mut();

    buf.set_string(inner.x, inner.y, "Bill value", label_style);
    app.bill().render(
        field_row(inner, 1),
        buf,
        field_style(focused_field == Some(SplitField::Bill)),
        focused_field == Some(SplitField::Bill),
    );

    buf.set_string(inner.x, inner.y + 2, "Your expense", label_style);
    app.user_share().render(
        field_row(inner, 3),
        buf,
        field_style(focused_field == Some(SplitField::UserShare)),
        focused_field == Some(SplitField::UserShare),
    );

    // Derived, never editable
    buf.set_string(
        inner.x,
        inner.y + 5,
        format!(
            "{}'s expense: {}{}",
            friend.name,
            draft.paid_by_friend(),
            currency
        ),
        label_style,
    );

    let payer_focused = focused_field == Some(SplitField::Payer);
    buf.set_string(inner.x, inner.y + 6, "Who is paying?", label_style);
    let payer_line = match draft.payer() {
        Payer::User => "◂ You ▸".to_string(),
        Payer::Friend => format!("◂ {} ▸", friend.name),
    };
    buf.set_string(
        inner.x + 2,
        inner.y + 7,
        payer_line,
        field_style(payer_focused).add_modifier(if payer_focused {
            Modifier::REVERSED
        } else {
            Modifier::empty()
        }),
    );

    buf.set_string(
        inner.x,
        inner.y + 8,
        "[Enter] split bill   [Esc] back",
        Style::default().fg(theme::STATUS_TEXT),
    );
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let hints = match app.focus() {
        Focus::Roster => "↑/↓ move · Enter select · a add friend · q quit",
        Focus::AddForm(_) => "Tab next field · Enter add · Esc close",
        Focus::SplitForm(_) => "Tab next field · Enter split bill · Esc back",
    };
    let bar = Paragraph::new(hints).style(Style::default().fg(theme::STATUS_TEXT));
    frame.render_widget(bar, area);
}

/// One-line field area, indented under its label
fn field_row(inner: Rect, row: u16) -> Rect {
    Rect::new(
        inner.x + 2,
        inner.y + row,
        inner.width.saturating_sub(2),
        1,
    )
}

fn field_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(theme::FIELD_FOCUS)
    } else {
        Style::default()
    }
}

/// Balance sentence per the sign convention
fn balance_text(friend: &Friend, currency: &str) -> String {
    if friend.user_owes() {
        format!(
            "You owe {} {}{}",
            friend.name,
            friend.balance.abs(),
            currency
        )
    } else if friend.owes_user() {
        format!("{} owes you {}{}", friend.name, friend.balance, currency)
    } else {
        format!("You and {} are even.", friend.name)
    }
}

fn balance_style(friend: &Friend) -> Style {
    if friend.user_owes() {
        Style::default().fg(theme::OWE_RED)
    } else if friend.owes_user() {
        Style::default().fg(theme::OWED_GREEN)
    } else {
        Style::default().fg(theme::DIM_GRAY)
    }
}
