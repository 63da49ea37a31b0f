//! 设备面板视图

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染设备面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let border_style = if app.focus.is_devices() {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    };

    let block = Block::default()
        .title(" Topology Nodes ")
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style);

    let items: Vec<ListItem> = app
        .devices
        .items
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let is_cursor = i == app.devices.cursor && app.focus.is_devices();
            let marker = if row.selected { "[x]" } else { "[ ]" };

            let marker_style = if row.selected {
                Style::default().fg(c.success)
            } else {
                Style::default().fg(c.muted)
            };
            let id_style = if is_cursor {
                Styles::selected()
            } else {
                Style::default().fg(c.fg)
            };

            ListItem::new(Line::from(vec![
                Span::raw("  "),
                Span::styled(marker, marker_style),
                Span::raw(" "),
                Span::styled(&row.id, id_style),
            ]))
        })
        .collect();

    let list = List::new(items).block(block);

    let mut state = ListState::default();
    state.select(Some(app.devices.cursor));

    frame.render_stateful_widget(list, area, &mut state);
}
