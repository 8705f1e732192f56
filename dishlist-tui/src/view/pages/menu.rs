//! 菜单列表页面视图

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::App;
use crate::util::fmt_price;

/// 菜品名称列的显示宽度（课程和价格靠它对齐成一列）
const NAME_COLUMN_WIDTH: usize = 16;

/// 渲染菜单列表页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    if app.controller.state().dishes().is_empty() {
        render_empty(frame, area);
    } else {
        render_list(app, frame, area);
    }
}

/// 渲染空状态
fn render_empty(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::styled("  No dishes on the menu", Style::default().fg(Color::Gray)),
        Line::from(""),
        Line::styled(
            "  Press Alt+a to add the first dish",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let paragraph = Paragraph::new(content);
    frame.render_widget(paragraph, area);
}

/// 渲染菜品列表
fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = app
        .controller
        .state()
        .dishes()
        .iter()
        .enumerate()
        .map(|(i, dish)| {
            let is_selected = i == app.menu.selected;

            // 名称列按显示宽度补齐，中文名也能对齐
            let padding = NAME_COLUMN_WIDTH.saturating_sub(dish.name.width());
            let detail = format!(
                "{}  {} - ${}",
                " ".repeat(padding),
                dish.course,
                fmt_price(dish.price)
            );

            let name_style = if is_selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let detail_style = if is_selected {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let line = Line::from(vec![
                Span::raw("  "),
                Span::styled(dish.name.clone(), name_style),
                Span::styled(detail, detail_style),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items);

    let mut state = ListState::default();
    state.select(Some(app.menu.selected));

    frame.render_stateful_widget(list, area, &mut state);
}
