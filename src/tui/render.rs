//! Drawing of dialogs, loading indicators and toasts.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::modal::{DialogBody, DialogKind};
use crate::tui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, DIALOG_BORDER, DIALOG_TEXT, HINT_TEXT, STATUS_OK, TOAST_BACKGROUND,
};
use crate::tui::view::{DialogView, LoadingView, MAX_VISIBLE_ROWS};

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const DIALOG_WIDTH: u16 = 50;
const LOADING_WIDTH: u16 = 40;

/// Inner text width of a dialog box.
fn inner_width(area: Rect) -> usize {
    DIALOG_WIDTH.min(area.width).saturating_sub(4) as usize
}

/// Rows needed for the body widget.
fn body_height(view: &DialogView, width: usize) -> u16 {
    let rows = match view.request().body() {
        DialogBody::Message(message) => message
            .lines()
            .map(|line| line.chars().count().max(1).div_ceil(width.max(1)))
            .sum::<usize>()
            .max(1),
        DialogBody::TextField(_) => 1,
        DialogBody::Items(items) => items.len().min(MAX_VISIBLE_ROWS),
    };
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Render a dialog centred on the frame.
pub fn render_dialog(frame: &mut Frame, view: &DialogView) {
    let area = frame.area();
    let width = inner_width(area);
    let has_buttons = !view.request().actions().is_empty();
    // borders + top padding + body + (blank + buttons)
    let height = body_height(view, width)
        .saturating_add(3)
        .saturating_add(if has_buttons { 2 } else { 0 });
    let dialog = centered_rect(DIALOG_WIDTH, height, area);

    frame.render_widget(Clear, dialog);

    let block = Block::default()
        .title(format!(" {} ", view.request().title()))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DIALOG_BORDER));
    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let inner = Rect {
        x: inner.x + 1,
        y: inner.y + 1,
        width: inner.width.saturating_sub(2),
        height: inner.height.saturating_sub(1),
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(if has_buttons { 2 } else { 0 })])
        .split(inner);

    match view.request().body() {
        DialogBody::Message(message) => {
            let paragraph = Paragraph::new(message.as_str())
                .style(Style::default().fg(DIALOG_TEXT))
                .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, chunks[0]);
        }
        DialogBody::TextField(field) => render_text_field(frame, chunks[0], view, &field.hint),
        DialogBody::Items(items) => render_items(frame, chunks[0], view, items),
    }

    if has_buttons {
        let buttons = Paragraph::new(vec![Line::from(""), render_buttons(view)])
            .alignment(Alignment::Right);
        frame.render_widget(buttons, chunks[1]);
    }
}

fn render_text_field(frame: &mut Frame, area: Rect, view: &DialogView, hint: &str) {
    let line = if view.text().is_empty() {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(ACCENT)),
            Span::styled(hint.to_string(), Style::default().fg(HINT_TEXT)),
        ])
    } else {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(ACCENT)),
            Span::styled(view.display_text(), Style::default().fg(DIALOG_TEXT)),
        ])
    };
    frame.render_widget(Paragraph::new(line), area);

    let cursor_x = area.x + 2 + view.text_cursor() as u16;
    frame.set_cursor_position((cursor_x.min(area.right().saturating_sub(1)), area.y));
}

fn render_items(frame: &mut Frame, area: Rect, view: &DialogView, items: &[String]) {
    let kind = view.request().kind();
    let lines: Vec<Line> = items
        .iter()
        .enumerate()
        .skip(view.scroll_offset())
        .take(MAX_VISIBLE_ROWS)
        .map(|(index, label)| {
            let marker = match kind {
                DialogKind::SingleSelectList if view.is_current(index) => "(•) ",
                DialogKind::SingleSelectList => "( ) ",
                DialogKind::MultiSelectList if view.is_checked(index) => "[x] ",
                DialogKind::MultiSelectList => "[ ] ",
                _ => "",
            };
            let style = if index == view.list_cursor() {
                Style::default()
                    .fg(DIALOG_TEXT)
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DIALOG_TEXT)
            };
            Line::from(vec![
                Span::styled(marker, Style::default().fg(ACCENT)),
                Span::styled(label.clone(), style),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

/// Buttons in slot order, the focused one highlighted.
fn render_buttons(view: &DialogView) -> Line<'static> {
    let mut spans = Vec::new();
    for (index, slot) in view.request().actions().iter().enumerate() {
        let style = if index == view.focused_button() {
            Style::default()
                .fg(DIALOG_TEXT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DIALOG_TEXT)
        };
        if index > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(format!(" {} ", slot.label), style));
    }
    Line::from(spans)
}

/// Render the loading spinner.
pub fn render_loading(frame: &mut Frame, view: &LoadingView) {
    let area = centered_rect(LOADING_WIDTH, 3, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DIALOG_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let spinner = SPINNER_FRAMES[(view.tick as usize) % SPINNER_FRAMES.len()];
    let line = Line::from(vec![
        Span::styled(format!(" {} ", spinner), Style::default().fg(STATUS_OK)),
        Span::styled(view.message.clone(), Style::default().fg(DIALOG_TEXT)),
    ]);
    frame.render_widget(Paragraph::new(line), inner);
}

/// Render a one-line toast at the bottom of the frame.
pub fn render_toast(frame: &mut Frame, message: &str) {
    let area = frame.area();
    if area.height == 0 {
        return;
    }
    let width = u16::try_from(message.chars().count())
        .unwrap_or(u16::MAX)
        .saturating_add(4)
        .min(area.width);
    let toast = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + area.height.saturating_sub(2),
        width,
        height: 1,
    };
    frame.render_widget(Clear, toast);
    let paragraph = Paragraph::new(format!("  {}  ", message))
        .style(Style::default().fg(DIALOG_TEXT).bg(TOAST_BACKGROUND));
    frame.render_widget(paragraph, toast);
}

/// Create a centered rect of given size.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1]);

    horizontal[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modal::{DialogRequest, TextFieldSpec};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw<F: FnOnce(&mut Frame)>(render: F) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(render).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn dialog_shows_title_message_and_buttons() {
        let view = DialogView::new(DialogRequest::confirm("Delete file", "Really delete?"));
        let screen = draw(|frame| render_dialog(frame, &view));
        assert!(screen.contains("Delete file"));
        assert!(screen.contains("Really delete?"));
        assert!(screen.contains(" Yes "));
        assert!(screen.contains(" No "));
    }

    #[test]
    fn list_shows_markers() {
        let view = DialogView::new(DialogRequest::multi_select("Pick", ["Alpha", "Beta"], [1]));
        let screen = draw(|frame| render_dialog(frame, &view));
        assert!(screen.contains("[ ] Alpha"));
        assert!(screen.contains("[x] Beta"));
    }

    #[test]
    fn empty_text_field_shows_hint() {
        let view =
            DialogView::new(DialogRequest::text_input("Name", TextFieldSpec::new("Your name", "")));
        let screen = draw(|frame| render_dialog(frame, &view));
        assert!(screen.contains("Your name"));
    }

    #[test]
    fn oversized_content_is_clipped_to_frame() {
        let long = "x".repeat(70_000);
        let tall = "line\n".repeat(70_000);
        let view = DialogView::new(DialogRequest::alert("Huge", tall));
        assert!(draw(|frame| render_dialog(frame, &view)).contains("Huge"));
        assert!(draw(|frame| render_toast(frame, &long)).contains("xxx"));
    }

    #[test]
    fn loading_and_toast_render_message() {
        let view = LoadingView::new("Syncing", false);
        assert!(draw(|frame| render_loading(frame, &view)).contains("Syncing"));
        assert!(draw(|frame| render_toast(frame, "Copied")).contains("Copied"));
    }
}
