//! Frame rendering

use crate::autocomplete::Snapshot;
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph},
    Frame,
};

const SELECTED_SYMBOL: &str = "› ";

/// Draw one frame: input box, result box (when there is something to
/// show) and a status line.
pub fn render(frame: &mut Frame, snapshot: &Snapshot, placeholder: &str, status: Option<&str>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Search input
            Constraint::Min(0),    // Results
            Constraint::Length(1), // Controls / status
        ])
        .split(frame.area());

    render_input(frame, snapshot, placeholder, chunks[0]);

    if shows_results_box(snapshot) {
        render_results(frame, snapshot, chunks[1]);
    }

    render_footer(frame, status, chunks[2]);
}

/// The result box appears once a search has something to say
fn shows_results_box(snapshot: &Snapshot) -> bool {
    !snapshot.result_items.is_empty() || snapshot.is_no_results || snapshot.error.is_some()
}

fn render_input(frame: &mut Frame, snapshot: &Snapshot, placeholder: &str, area: Rect) {
    let text = if snapshot.search_value.is_empty() {
        Span::styled(placeholder.to_string(), Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(snapshot.search_value.clone())
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(" GitHub ")
        .padding(Padding::horizontal(1));
    if snapshot.is_loading {
        block = block.title_bottom(Line::from(" searching… ").right_aligned());
    }

    frame.render_widget(Paragraph::new(Line::from(text)).block(block), area);

    let typed = snapshot.search_value.chars().count() as u16;
    let x = (area.x + 2 + typed).min(area.right().saturating_sub(2));
    frame.set_cursor_position(Position::new(x, area.y + 1));
}

fn render_results(frame: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .padding(Padding::horizontal(1));

    if let Some(ref message) = snapshot.error {
        let lines = vec![
            Line::from(Span::styled(
                "Something went wrong ⚠",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(message.clone(), Style::default().fg(Color::Red))),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), area);
        return;
    }

    if snapshot.is_no_results {
        let line = Line::from(Span::styled(
            "No results found 🙄",
            Style::default().fg(Color::Yellow),
        ));
        frame.render_widget(Paragraph::new(line).block(block), area);
        return;
    }

    let items: Vec<ListItem> = snapshot
        .result_items
        .iter()
        .map(|item| {
            let mut spans = vec![Span::raw(item.display_text.clone())];
            if let Some(url) = item.link() {
                spans.push(Span::styled(
                    format!("  {}", url),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let title = format!(" Results ({}) ", snapshot.result_items.len());
    let list = List::new(items)
        .block(block.title(title))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::REVERSED),
        )
        .highlight_symbol(SELECTED_SYMBOL);

    let mut state = ListState::default();
    state.select(usize::try_from(snapshot.selected_result_index).ok());
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_footer(frame: &mut Frame, status: Option<&str>, area: Rect) {
    let line = match status {
        Some(status) => Line::from(Span::styled(
            status.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
        None => Line::from(vec![
            Span::styled("↑↓", Style::default().fg(Color::Yellow)),
            Span::raw(": Select  "),
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(": Open  "),
            Span::styled("Ctrl+U", Style::default().fg(Color::Yellow)),
            Span::raw(": Clear  "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(": Quit"),
        ]),
    };
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::ResultItem;
    use ratatui::{backend::TestBackend, Terminal};

    const PLACEHOLDER: &str = "Repository or username...";

    fn snapshot(search_value: &str) -> Snapshot {
        Snapshot {
            search_value: search_value.to_string(),
            is_loading: false,
            is_no_results: false,
            result_items: Vec::new(),
            error: None,
            selected_result_index: -1,
        }
    }

    fn draw(snapshot: &Snapshot, status: Option<&str>) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(64, 14)).unwrap();
        terminal
            .draw(|frame| render(frame, snapshot, PLACEHOLDER, status))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    fn screen(rows: &[String]) -> String {
        rows.join("\n")
    }

    #[test]
    fn test_placeholder_when_empty() {
        let rows = draw(&snapshot(""), None);
        assert!(screen(&rows).contains(PLACEHOLDER));
        assert!(!screen(&rows).contains("Results"));
    }

    #[test]
    fn test_loading_indicator() {
        let mut frame = snapshot("rus");
        frame.is_loading = true;
        let rows = draw(&frame, None);
        assert!(screen(&rows).contains("searching"));
    }

    #[test]
    fn test_no_results_message() {
        let mut frame = snapshot("zzzzzz");
        frame.is_no_results = true;
        let text = screen(&draw(&frame, None));
        assert!(text.contains("No results found"));
        assert!(text.contains("🙄"));
    }

    #[test]
    fn test_error_message() {
        let mut frame = snapshot("rust");
        frame.error = Some("HTTP error: 400".to_string());
        let text = screen(&draw(&frame, None));
        assert!(text.contains("Something went wrong ⚠"));
        assert!(text.contains("HTTP error: 400"));
    }

    #[test]
    fn test_results_with_selection() {
        let mut frame = snapshot("abc");
        frame.result_items = vec![
            ResultItem::new("abc").with_url("https://github.com/abc"),
            ResultItem::new("bca").with_url("https://github.com/bca"),
        ];
        frame.selected_result_index = 1;

        let rows = draw(&frame, None);
        let text = screen(&rows);
        assert!(text.contains("Results (2)"));
        assert!(text.contains("https://github.com/abc"));

        let selected = rows.iter().find(|row| row.contains("bca")).unwrap();
        assert!(selected.contains("› bca"));
        let unselected = rows
            .iter()
            .find(|row| row.contains("github.com/abc"))
            .unwrap();
        assert!(!unselected.contains("› "));
    }

    #[test]
    fn test_status_replaces_controls() {
        let rows = draw(&snapshot(""), Some("Opened https://github.com/abc"));
        let text = screen(&rows);
        assert!(text.contains("Opened https://github.com/abc"));
        assert!(!text.contains("Esc"));
    }
}
