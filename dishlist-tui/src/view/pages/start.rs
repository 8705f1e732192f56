//! 起始页视图

use std::collections::HashSet;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::theme::colors;

/// 渲染起始页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    // 起始页布局：欢迎区域 + 统计区域
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // 欢迎区域
            Constraint::Min(1),    // 统计区域
        ])
        .split(area);

    // 平均价格每一帧都从核心重新计算，菜单为空时是 0
    let average = app.controller.state().average_price();

    let welcome = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Welcome to Dishlist",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("  Average Price: ${:.2}", average),
            Style::default().fg(c.success).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "  Press Enter to go to the menu",
            Style::default().fg(Color::Gray),
        )),
    ];

    let welcome_widget = Paragraph::new(welcome);
    frame.render_widget(welcome_widget, layout[0]);

    // 统计区域：左右各一个信息框
    let stats_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout[1]);

    render_dish_count(app, frame, stats_layout[0]);
    render_course_count(app, frame, stats_layout[1]);
}

/// 渲染菜品数量信息框
fn render_dish_count(app: &App, frame: &mut Frame, area: Rect) {
    let dish_count = app.controller.state().dishes().len();

    let block = Block::default()
        .title(" Dishes ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", dish_count),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "  dishes on the menu",
            Style::default().fg(Color::Gray),
        )),
    ])
    .block(block);

    frame.render_widget(content, area);
}

/// 渲染课程数量信息框
fn render_course_count(app: &App, frame: &mut Frame, area: Rect) {
    let courses: HashSet<&str> = app
        .controller
        .state()
        .dishes()
        .iter()
        .map(|dish| dish.course.as_str())
        .collect();

    let block = Block::default()
        .title(" Courses ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", courses.len()),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "  distinct courses",
            Style::default().fg(Color::Gray),
        )),
    ])
    .block(block);

    frame.render_widget(content, area);
}
