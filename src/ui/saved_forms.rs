//! Saved forms list and detail views

use super::preview::field_preview_lines;
use super::widgets::render_scrollable_list;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw the saved forms list
pub fn draw_list(frame: &mut Frame, area: Rect, app: &App) {
    let forms = &app.state.saved_forms;
    let title = format!(" Saved Forms ({}) ", forms.len());

    if forms.is_empty() {
        let content = Paragraph::new("No saved forms.\nPress 'n' to create a new form.")
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        frame.render_widget(content, area);
        return;
    }

    let items: Vec<ListItem> = forms
        .iter()
        .enumerate()
        .map(|(idx, form)| {
            let is_selected = idx == app.state.selected_index;

            let prefix = if is_selected { "▸ " } else { "  " };
            let field_count = format!(
                "{} field{}",
                form.fields.len(),
                if form.fields.len() == 1 { "" } else { "s" }
            );

            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            let mut spans = vec![
                Span::styled(prefix.to_string(), style),
                Span::styled(form.display_name().to_string(), style),
                Span::raw("  "),
                Span::styled(field_count, Style::default().fg(Color::DarkGray)),
            ];

            if app.show_timestamps {
                if let Some(created_at) = form.created_at {
                    spans.push(Span::raw("  "));
                    spans.push(Span::styled(
                        created_at.format("%Y-%m-%d").to_string(),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    render_scrollable_list(frame, area, list, app.state.selected_index);
}

/// Draw a saved form's field-by-field preview
pub fn draw_detail(frame: &mut Frame, area: Rect, app: &App) {
    let Some(form) = app.state.selected_form() else {
        let content = Paragraph::new("Form no longer exists.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(content, area);
        return;
    };

    let mut lines: Vec<Line> = Vec::new();
    if form.fields.is_empty() {
        lines.push(Line::from(Span::styled(
            "This form has no fields.",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for field in &form.fields {
        lines.extend(field_preview_lines(field, false));
        lines.push(Line::from(""));
    }

    let title = format!(" {} · {} ", form.display_name(), form.id);
    let content = Paragraph::new(lines)
        .scroll((app.state.scroll_offset as u16, 0))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(content, area);
}
