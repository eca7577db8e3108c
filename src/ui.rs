use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Span, Line},
};
use crate::app::App;
use crate::models::{Command, FocusArea};
use crate::theme::Theme;

fn button<'a>(label: String, enabled: bool, theme: &Theme) -> Span<'a> {
    Span::styled(format!("[ {} ]", label), theme.button(enabled))
}

/// Renders the whole screen.
pub fn render(f: &mut Frame, app: &App, theme: &Theme) {
    let strings = &app.strings;
    let controller = &app.controller;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // title + environment
            Constraint::Length(3), // new variety input
            Constraint::Min(3),    // list
            Constraint::Length(1), // remove buttons
            Constraint::Length(1), // footer
        ])
        .split(f.area());

    // Header
    let header = Paragraph::new(vec![
        Line::from(Span::styled(strings.window_title(), theme.title)),
        Line::from(vec![
            Span::styled(format!("{} ", strings.operating_system_label()), theme.label),
            Span::styled(app.environment.operating_system.clone(), theme.info),
        ]),
        Line::from(vec![
            Span::styled(format!("{} ", strings.runtime_label()), theme.label),
            Span::styled(app.environment.runtime.clone(), theme.info),
        ]),
    ]);
    f.render_widget(header, chunks[0]);

    // Input row: text field plus Add button
    let input_focused = app.focus == FocusArea::Input;
    let add_label = strings.add_button();
    let input_columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(add_label.chars().count() as u16 + 5)])
        .split(chunks[1]);
    let cursor_mark = if input_focused { "▏" } else { "" };
    let input = Paragraph::new(Line::from(vec![
        Span::styled(controller.pending_input().to_string(), Style::default().fg(theme.text)),
        Span::styled(cursor_mark, Style::default().fg(theme.text_highlight)),
    ]))
    .block(
        Block::default()
            .title(strings.new_variety_label())
            .borders(Borders::ALL)
            .style(theme.border(input_focused)),
    );
    f.render_widget(input, input_columns[0]);
    let add = Paragraph::new(Line::from(button(add_label, controller.can_execute(Command::AddVariety), theme)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE));
    let add_area = Rect { y: input_columns[1].y + 1, height: 1, ..input_columns[1] };
    f.render_widget(add, add_area);

    // Varieties list; '*' marks selection, highlight marks the cursor
    let list_focused = app.focus == FocusArea::List;
    let items: Vec<ListItem> = controller
        .varieties()
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let selected = controller.selected().contains(name);
            let star = if selected { "*" } else { " " };
            let style = if Some(i) == app.cursor && list_focused {
                theme.cursor_item
            } else if selected {
                theme.selected_item
            } else {
                Style::default().fg(theme.text)
            };
            ListItem::new(Line::from(format!("{} {}", star, name))).style(style)
        })
        .collect();
    let title = format!(
        "{} {}/{}",
        strings.varieties_label(),
        controller.selected().len(),
        controller.varieties().len()
    );
    let list = List::new(items)
        .highlight_symbol("→")
        .block(Block::default().title(title).borders(Borders::ALL).style(theme.border(list_focused)));
    let mut state = ListState::default();
    state.select(app.cursor);
    f.render_stateful_widget(list, chunks[2], &mut state);

    // Remove / Remove All
    let buttons = Paragraph::new(Line::from(vec![
        button(strings.remove_button(), controller.can_execute(Command::Remove), theme),
        Span::raw("  "),
        button(strings.remove_all_button(), controller.can_execute(Command::RemoveAll), theme),
    ]));
    f.render_widget(buttons, chunks[3]);

    // footer
    let footer = Paragraph::new(format!(
        "Tab Focus | Enter Add | ↑/↓ or j/k Move | <Space> Select | Esc Clear selection | Del/x Remove | X Remove all | F2 Language ({}) | q Quit",
        strings.current_locale()
    ))
    .style(theme.footer);
    f.render_widget(footer, chunks[4]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::EnvironmentInfo;
    use crate::i18n::{LocalizationTable, Strings};
    use ratatui::backend::TestBackend;

    fn app(locale: &str) -> App {
        App::new(
            Strings::new(LocalizationTable::builtin(), Some(locale)),
            EnvironmentInfo {
                operating_system: "TestOS (x86_64)".into(),
                runtime: "potato 0.1.0 (testos-x86_64)".into(),
            },
        )
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|f| render(f, app, &Theme::default())).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn renders_seed_and_environment() {
        let screen = draw(&app("en-US"));
        for name in ["Russet Burbank", "Yukon Gold", "Red Bliss", "Kennebec", "Maris Piper"] {
            assert!(screen.contains(name), "missing {name}");
        }
        assert!(screen.contains("Operating System: TestOS (x86_64)"));
        assert!(screen.contains("Runtime: potato 0.1.0"));
        assert!(screen.contains("[ Remove All ]"));
    }

    #[test]
    fn renders_german_labels() {
        let screen = draw(&app("de-DE"));
        assert!(screen.contains("Betriebssystem:"));
        assert!(screen.contains("[ Hinzufügen ]"));
        assert!(screen.contains("[ Alles entfernen ]"));
    }

    #[test]
    fn disabled_buttons_use_disabled_style() {
        let theme = Theme::default();
        let mut app = app("en-US");
        app.controller.remove_all();
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|f| render(f, &app, &theme)).unwrap();
        let buffer = terminal.backend().buffer();
        // Remove button sits at the start of the button row
        let cell = buffer.cell((2, 18)).unwrap();
        assert_eq!(cell.fg, theme.button_disabled.fg.unwrap());
    }
}
