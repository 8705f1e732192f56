//! 添加菜品表单页面视图

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;

/// 渲染添加菜品表单
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let form = &app.form;
    let mut lines = vec![Line::from("")];

    // 四个输入框，占位文案沿用网页版
    push_input_row(&mut lines, &form.name, "Dish Name", form.focus == 0);
    push_input_row(&mut lines, &form.description, "Description", form.focus == 1);
    push_input_row(
        &mut lines,
        &form.course,
        "Course (e.g., Starter, Main, Dessert)",
        form.focus == 2,
    );
    push_input_row(&mut lines, &form.price, "Price", form.focus == 3);

    // 操作提示
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  Enter", Style::default().fg(Color::Yellow)),
        Span::styled(" Add Dish | ", Style::default().fg(Color::DarkGray)),
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::styled(" Next Field | ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" Back", Style::default().fg(Color::DarkGray)),
    ]));

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, area);
}

/// 渲染单个输入行（聚焦时带光标，空值失焦时显示占位符）
fn push_input_row(
    lines: &mut Vec<Line<'static>>,
    value: &str,
    placeholder: &'static str,
    focused: bool,
) {
    let display = if value.is_empty() && !focused {
        format!("  {}", placeholder)
    } else if focused {
        format!("  {}▎", value)
    } else {
        format!("  {}", value)
    };

    let style = if value.is_empty() && !focused {
        Style::default().fg(Color::DarkGray)
    } else if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    lines.push(Line::styled(display, style));
    lines.push(Line::from(""));
}
