//! Composer view: field entry controls, draft preview, and action panel

use super::components::{render_action_button, BUTTON_HEIGHT};
use super::preview::field_preview_lines;
use crate::app::App;
use crate::state::ComposerFocus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the composer with the draft preview and the action sidebar
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(20), // Action panel
        ])
        .split(area);

    draw_entry_and_preview(frame, main_chunks[0], app);
    draw_action_panel(frame, main_chunks[1], app);
}

/// Draw the field entry controls and the live draft preview
fn draw_entry_and_preview(frame: &mut Frame, area: Rect, app: &App) {
    let composer = &app.state.composer;
    let form_focused = !matches!(composer.focus, ComposerFocus::Buttons);
    let border_color = if form_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Create Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Field name
            Constraint::Length(3), // Field type
            Constraint::Min(4),    // Draft preview
        ])
        .margin(1)
        .split(area);

    draw_name_input(
        frame,
        chunks[0],
        &composer.name_input,
        matches!(composer.focus, ComposerFocus::NameInput),
    );
    draw_type_selector(frame, chunks[1], app);
    draw_draft_preview(frame, chunks[2], app);
}

/// Draw the field name input box with a cursor when active
fn draw_name_input(frame: &mut Frame, area: Rect, value: &str, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(" Field Name ")
        .borders(Borders::ALL)
        .border_style(style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw the type selector showing the current catalog entry
fn draw_type_selector(frame: &mut Frame, area: Rect, app: &App) {
    let composer = &app.state.composer;
    let is_active = matches!(composer.focus, ComposerFocus::TypeSelect);
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let position = format!("{}/{}", composer.type_index + 1, composer.catalog().len());

    let content = Paragraph::new(Line::from(vec![
        Span::styled("◂ ", style),
        Span::styled(composer.selected_type().label(), style),
        Span::styled(" ▸", style),
        Span::styled(
            format!("  ({position})"),
            Style::default().fg(Color::DarkGray),
        ),
    ]));

    let block = Block::default()
        .title(" Field Type ")
        .borders(Borders::ALL)
        .border_style(style);

    frame.render_widget(content.block(block), area);
}

/// Draw the draft fields through the per-type preview renderer
fn draw_draft_preview(frame: &mut Frame, area: Rect, app: &App) {
    let composer = &app.state.composer;
    let list_focused = matches!(composer.focus, ComposerFocus::FieldList);
    let border_color = if list_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let title = format!(" Form Preview ({} fields) ", composer.draft.len());

    if composer.draft.is_empty() {
        let content = Paragraph::new("No fields yet.\nType a name and press Enter to add one.")
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color)),
            );
        frame.render_widget(content, area);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for (idx, field) in composer.draft.fields().iter().enumerate() {
        let selected = list_focused && idx == composer.selected_field;
        lines.extend(field_preview_lines(field, selected));
        lines.push(Line::from(""));
    }

    let content = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );

    frame.render_widget(content, area);
}

/// Draw the action panel sidebar
fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let composer = &app.state.composer;
    let is_focused = matches!(composer.focus, ComposerFocus::Buttons);
    let selected_button = composer.selected_button;

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Save Form
            Constraint::Length(BUTTON_HEIGHT), // Cancel
            Constraint::Min(0),                // remaining space
        ])
        .split(inner_area);

    render_action_button(
        frame,
        button_chunks[0],
        "Save Form",
        is_focused && selected_button == 0,
        Some(Color::Green),
    );

    render_action_button(
        frame,
        button_chunks[1],
        "Cancel",
        is_focused && selected_button == 1,
        Some(Color::Gray),
    );
}
