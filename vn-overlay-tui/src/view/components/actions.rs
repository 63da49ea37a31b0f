//! 操作面板视图

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染操作面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let border_style = if app.focus.is_actions() {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    };

    let block = Block::default()
        .title(" VN Path Actions ")
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style);

    let items: Vec<ListItem> = app
        .actions
        .items
        .iter()
        .enumerate()
        .map(|(i, action)| {
            let is_cursor = i == app.actions.cursor && app.focus.is_actions();

            let label_style = if is_cursor {
                Styles::selected()
            } else {
                Style::default().fg(c.fg)
            };

            ListItem::new(Line::from(vec![
                Span::raw("  "),
                Span::styled(format!("[{}]", action.digit()), Styles::hint_key()),
                Span::raw(" "),
                Span::styled(action.label(), label_style),
            ]))
        })
        .collect();

    let list = List::new(items).block(block);

    let mut state = ListState::default();
    state.select(Some(app.actions.cursor));

    frame.render_stateful_widget(list, area, &mut state);
}
