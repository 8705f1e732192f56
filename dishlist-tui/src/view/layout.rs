//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use dishlist_core::Screen;

use crate::model::App;

use super::components;
use super::pages;
use super::theme::colors;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    let title_area = main_layout[0];
    let content_area = main_layout[1];
    let status_area = main_layout[2];

    // 渲染标题栏
    render_title_bar(frame, title_area);

    // 渲染页面内容
    render_page_content(app, frame, content_area);

    // 渲染状态栏
    components::statusbar::render(app, frame, status_area);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title =
        Paragraph::new(" Dishlist v0.1.0").style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 根据当前页面渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let screen = app.controller.state().current_screen();

    // 页面标题
    let page_title = match screen {
        Screen::Start => "Start Page",
        Screen::Menu => "Chef's Dish List",
        Screen::AddDish => "Add New Dish",
        Screen::FilterDishes => "Filter Dishes by Course",
        // 没有接线的跳转目标统一走兜底标题
        Screen::DishDetails => "Unknown Screen",
    };

    let block = Block::default()
        .title(format!(" {} ", page_title))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    // 根据当前页面渲染具体内容
    match screen {
        Screen::Start => pages::start::render(app, frame, inner_area),
        Screen::Menu => pages::menu::render(app, frame, inner_area),
        Screen::AddDish => pages::add_dish::render(app, frame, inner_area),
        Screen::FilterDishes => pages::filter_dishes::render(app, frame, inner_area),
        Screen::DishDetails => pages::fallback::render(app, frame, inner_area),
    }
}
