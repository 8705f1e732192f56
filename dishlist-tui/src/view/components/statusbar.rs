//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use dishlist_core::Screen;

use crate::model::App;
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前页面生成快捷键提示
    let hints = get_hints(app);

    // 构建状态栏内容
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let content = Line::from(spans);
    let paragraph = Paragraph::new(content).style(Styles::statusbar());

    frame.render_widget(paragraph, area);
}

/// 根据当前页面生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();

    match app.controller.state().current_screen() {
        Screen::Start => {
            hints.push(("Enter", "Go to Menu"));
        }
        Screen::Menu => {
            hints.push(("↑↓", "Select"));
            hints.push(("Alt+a", "Add New Dish"));
            hints.push(("Alt+f", "Filter by Course"));
            hints.push(("Alt+d", "Remove"));
            hints.push(("Esc", "Back to Start"));
        }
        Screen::AddDish => {
            hints.push(("Tab", "Next Field"));
            hints.push(("Enter", "Add Dish"));
            hints.push(("Esc", "Back"));
        }
        Screen::FilterDishes => {
            hints.push(("↑↓", "Select"));
            hints.push(("Enter", "Filter"));
            hints.push(("Esc", "Back to Menu"));
        }
        Screen::DishDetails => {
            hints.push(("Esc", "Back to Menu"));
        }
    }

    hints.push(("Alt+q", "Quit"));

    hints
}
