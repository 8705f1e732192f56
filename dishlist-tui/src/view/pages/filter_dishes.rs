//! 课程筛选页面视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::{App, CourseFilter};
use crate::util::fmt_price;
use crate::view::theme::colors;

/// 选项标签的显示宽度（激活标记靠它对齐）
const LABEL_WIDTH: usize = 16;

/// 渲染筛选页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // 课程选项
            Constraint::Min(1),    // 筛选结果
        ])
        .split(area);

    render_selector(app, frame, layout[0]);
    render_results(app, frame, layout[1]);
}

/// 渲染课程选项
fn render_selector(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let mut lines = vec![Line::from("")];

    for option in CourseFilter::all() {
        let is_selected = *option == app.filter.current;
        // 上一次执行过的筛选课程带一个标记
        let is_active = app.controller.state().last_filter_course() == Some(option.course());

        let prefix = if is_selected { "▶ " } else { "  " };
        let padding = LABEL_WIDTH.saturating_sub(option.label().width());
        let marker = if is_active { "●" } else { "" };

        let style = if is_selected {
            Style::default()
                .fg(c.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.fg)
        };

        lines.push(Line::from(vec![
            Span::styled(format!("  {}{}", prefix, option.label()), style),
            Span::styled(
                format!("{}{}", " ".repeat(padding), marker),
                Style::default().fg(c.success),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, area);
}

/// 渲染筛选结果（执行筛选时的快照，之后增删菜品不会跟着变）
fn render_results(app: &App, frame: &mut Frame, area: Rect) {
    let filtered = app.controller.state().filtered_dishes();

    let block = Block::default()
        .title(" Results ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let content: Vec<Line> = if filtered.is_empty() {
        vec![
            Line::from(""),
            Line::styled(
                "  No dishes for this course",
                Style::default().fg(Color::Gray),
            ),
        ]
    } else {
        filtered
            .iter()
            .map(|dish| {
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(dish.name.clone(), Style::default().fg(Color::White)),
                    Span::styled(
                        format!(" - ${}", fmt_price(dish.price)),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            })
            .collect()
    };

    let paragraph = Paragraph::new(content).block(block);
    frame.render_widget(paragraph, area);
}
