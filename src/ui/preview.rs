//! Per-type field preview rendering
//!
//! Each field type maps to a textual stand-in for the input control it
//! would render as in a real form. The match is exhaustive, so adding a
//! `FieldType` variant forces a decision here.

use crate::state::{FieldDef, FieldType};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

const INPUT_BLANK: &str = "[________________________]";

fn control_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn placeholder(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(format!("  [ {text} ]"), control_style()))
}

fn blank_input() -> Line<'static> {
    Line::from(Span::styled(format!("  {INPUT_BLANK}"), control_style()))
}

/// Render one field as its label plus a preview of its input control
pub fn field_preview_lines(field: &FieldDef, selected: bool) -> Vec<Line<'static>> {
    let label_style = if selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };
    let marker = if selected { "▸ " } else { "  " };

    let mut lines = vec![Line::from(vec![
        Span::styled(marker.to_string(), label_style),
        Span::styled(field.name.clone(), label_style),
        Span::styled(
            format!("  ({})", field.field_type.wire_name()),
            control_style(),
        ),
    ])];

    lines.extend(control_lines(field.field_type));
    lines
}

/// The control preview for a field type
fn control_lines(field_type: FieldType) -> Vec<Line<'static>> {
    match field_type {
        FieldType::Text => vec![blank_input()],
        FieldType::Number => vec![placeholder("0        ▲▼")],
        FieldType::Address => vec![blank_input()],
        FieldType::Email => vec![placeholder("user@example.com")],
        FieldType::Phone => vec![placeholder("+1 555 0100")],
        FieldType::Date => vec![placeholder("YYYY-MM-DD ▾")],
        FieldType::Checkbox => vec![Line::from(Span::styled("  [ ]", control_style()))],
        FieldType::Textarea => vec![
            Line::from(Span::styled("  ┌────────────────────────┐", control_style())),
            Line::from(Span::styled("  │                        │", control_style())),
            Line::from(Span::styled("  └────────────────────────┘", control_style())),
        ],
        FieldType::Gender => vec![Line::from(Span::styled(
            "  ( ) Male   ( ) Female   ( ) Other",
            control_style(),
        ))],
        // The backend treats unknown input types as plain text boxes; title
        // renders the same way
        FieldType::Title => vec![blank_input()],
    }
}
