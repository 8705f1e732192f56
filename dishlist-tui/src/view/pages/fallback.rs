//! 兜底页面视图
//!
//! 渲染没有专属界面的跳转目标（目前只有菜品详情）。

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::model::App;

/// 渲染兜底页面
pub fn render(_app: &App, frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::styled(
            "  Unknown Screen",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled(
            "  This screen has nothing to show yet.",
            Style::default().fg(Color::Gray),
        ),
        Line::styled(
            "  Press Esc to go back to the menu.",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let paragraph = Paragraph::new(content);
    frame.render_widget(paragraph, area);
}
