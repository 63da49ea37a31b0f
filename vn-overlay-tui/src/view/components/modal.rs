//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;
use vn_overlay_core::{
    BandwidthUnit, CandidateEntry, CandidateForm, ConstraintField, ConstraintForm, CostType,
    SetupForm,
};

use crate::model::{App, Modal};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Candidates(form) => render_candidates(frame, form),
        Modal::Constraints(form) => render_constraints(frame, form),
        Modal::Setup(form) => render_setup(frame, form),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 弹窗外框 + 内容区
fn modal_frame(frame: &mut Frame, title: &str, width: u16, height: u16) -> Rect {
    let area = centered_rect(width, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    Rect::new(area.x + 2, area.y + 1, area.width - 4, area.height - 2)
}

/// 渲染候选 VN 列表弹窗
fn render_candidates(frame: &mut Frame, form: &CandidateForm) {
    let title = form.flow.title();

    // 根据内容自适应宽度
    let content_width = form
        .entries
        .iter()
        .map(|e| e.vnid.width())
        .chain([title.width()])
        .max()
        .unwrap_or(0);
    let width = (content_width as u16 + 12).max(34);
    let height = form.entries.len() as u16 + 6;

    let inner = modal_frame(frame, title, width, height);

    let mut lines = vec![Line::from("")];
    for (i, entry) in form.entries.iter().enumerate() {
        lines.push(candidate_line(entry, i == form.cursor));
    }
    lines.push(Line::from(""));
    lines.push(hint_line(&[("Space", "Toggle"), ("Enter", "OK"), ("Esc", "Cancel")]));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 单行候选项：单选钮外观，行为上可多选
fn candidate_line(entry: &CandidateEntry, is_cursor: bool) -> Line<'static> {
    let marker = if entry.checked { "(o)" } else { "( )" };
    let marker_style = if entry.checked {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let id_style = if is_cursor {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    Line::from(vec![
        Span::raw("  "),
        Span::styled(marker, marker_style),
        Span::raw(" "),
        Span::styled(entry.vnid.clone(), id_style),
    ])
}

/// 渲染新建路径弹窗
///
/// 字段索引：0 带宽开关, 1 带宽值, 2 带宽单位, 3 代价开关, 4 代价类型, 5 名称
fn render_setup(frame: &mut Frame, form: &SetupForm) {
    let inner = modal_frame(frame, "Create New Path", 46, 14);

    let mut lines = vec![Line::from("")];

    lines.push(checkbox_line(
        "Band Width",
        form.bandwidth_enabled,
        form.focus == 0,
    ));
    lines.push(input_line(&form.bandwidth_value, form.focus == 1));
    lines.push(unit_line(form.bandwidth_unit, form.focus == 2));
    lines.push(Line::from(""));

    lines.push(checkbox_line("Cost Type", form.cost_enabled, form.focus == 3));
    lines.push(cost_line(form.cost_type, form.focus == 4));
    lines.push(Line::from(""));

    lines.push(label_line("VN Name", form.focus == 5));
    lines.push(input_line(&form.name, form.focus == 5));

    lines.push(Line::from(""));
    lines.push(hint_line(&[("Tab", "Next"), ("Enter", "Create"), ("Esc", "Cancel")]));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染约束编辑弹窗
fn render_constraints(frame: &mut Frame, form: &ConstraintForm) {
    let title = match form.vn_name {
        Some(ref name) if !name.is_empty() => format!("Update Constraints - {name}"),
        _ => "Update Constraints".to_string(),
    };

    let width = (title.width() as u16 + 8).max(46);
    // 每个字段一行，外加分组空行和提示
    let height = form.fields().len() as u16 + 10;
    let inner = modal_frame(frame, &title, width, height);

    let focused = form.focused_field();
    let mut lines = vec![Line::from("")];

    if let Some(ref group) = form.bandwidth {
        lines.push(checkbox_line(
            "Band Width",
            group.enabled,
            focused == Some(ConstraintField::BandwidthToggle),
        ));
        lines.push(input_line(
            &group.value,
            focused == Some(ConstraintField::BandwidthValue),
        ));
        lines.push(unit_line(
            group.unit,
            focused == Some(ConstraintField::BandwidthUnit),
        ));
        lines.push(Line::from(""));
    }

    if let Some(ref group) = form.cost {
        lines.push(checkbox_line(
            "Cost Type",
            group.enabled,
            focused == Some(ConstraintField::CostToggle),
        ));
        lines.push(cost_line(
            group.cost_type,
            focused == Some(ConstraintField::CostValue),
        ));
        lines.push(Line::from(""));
    }

    if !form.src_entries.is_empty() {
        lines.push(label_line("Source", false));
        for (i, entry) in form.src_entries.iter().enumerate() {
            lines.push(endpoint_line(entry, focused == Some(ConstraintField::Src(i))));
        }
    }
    if !form.dst_entries.is_empty() {
        lines.push(label_line("Destination", false));
        for (i, entry) in form.dst_entries.iter().enumerate() {
            lines.push(endpoint_line(entry, focused == Some(ConstraintField::Dst(i))));
        }
    }

    lines.push(Line::from(""));
    lines.push(hint_line(&[("Tab", "Next"), ("Enter", "Update"), ("Esc", "Cancel")]));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let inner = modal_frame(frame, "Help", 52, 16);

    let entries = [
        ("0", "Query the path"),
        ("1", "Set selected nodes as sources"),
        ("2", "Set selected nodes as destinations"),
        ("3", "Create a new path"),
        ("4", "Remove a path"),
        ("5", "Update a path"),
        ("Alt+v", "Highlight devices"),
        ("Alt+c", "Clear highlighting"),
        ("Tab", "Switch panels"),
        ("Space", "Toggle selection"),
        ("q", "Quit"),
    ];

    let mut lines = vec![Line::from("")];
    for (key, desc) in entries {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<7}"), Style::default().fg(Color::Yellow)),
            Span::styled(desc, Style::default().fg(Color::White)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

// ===== 行构造辅助 =====

fn focus_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

fn label_line(label: &str, is_focused: bool) -> Line<'static> {
    Line::styled(format!("  {label}"), focus_style(is_focused))
}

fn checkbox_line(label: &str, checked: bool, is_focused: bool) -> Line<'static> {
    let marker = if checked { "[x]" } else { "[ ]" };
    Line::from(vec![
        Span::raw("  "),
        Span::styled(marker.to_string(), focus_style(is_focused)),
        Span::raw(" "),
        Span::styled(label.to_string(), focus_style(is_focused)),
    ])
}

fn input_line(value: &str, is_focused: bool) -> Line<'static> {
    let display = if is_focused {
        format!("      {value}_")
    } else if value.is_empty() {
        "      -".to_string()
    } else {
        format!("      {value}")
    };
    let style = if value.is_empty() && !is_focused {
        Style::default().fg(Color::DarkGray)
    } else {
        focus_style(is_focused)
    };
    Line::styled(display, style)
}

fn unit_line(unit: BandwidthUnit, is_focused: bool) -> Line<'static> {
    let display = match unit {
        BandwidthUnit::Kbps => "      (o) kbps  ( ) mbps",
        BandwidthUnit::Mbps => "      ( ) kbps  (o) mbps",
    };
    Line::styled(display, focus_style(is_focused))
}

fn cost_line(cost: CostType, is_focused: bool) -> Line<'static> {
    let display = match cost {
        CostType::Te => "      (o) TE  ( ) IGP",
        CostType::Igp => "      ( ) TE  (o) IGP",
    };
    Line::styled(display, focus_style(is_focused))
}

fn endpoint_line(entry: &CandidateEntry, is_focused: bool) -> Line<'static> {
    let marker = if entry.checked { "(o)" } else { "( )" };
    Line::from(vec![
        Span::raw("    "),
        Span::styled(marker, focus_style(is_focused)),
        Span::raw(" "),
        Span::styled(entry.vnid.clone(), focus_style(is_focused)),
    ])
}

fn hint_line(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(
            format!(" {desc}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}
