//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use dishlist_core::Screen;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FilterMessage, FormMessage, MenuMessage};
use crate::model::App;




/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}




/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),      // 键盘事件
        Event::Resize(_, _) => AppMessage::Noop,                                  // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}




/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 全局快捷键（任何页面都生效）
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // Alt+q: 退出
    if key.modifiers == KeyModifiers::ALT && key.code == KeyCode::Char('q') {
        return AppMessage::Quit;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    // 根据当前页面处理按键
    match app.controller.state().current_screen() {
        Screen::Start => handle_start_keys(key),
        Screen::Menu => handle_menu_keys(key),
        Screen::AddDish => handle_form_keys(key),
        Screen::FilterDishes => handle_filter_keys(key),
        Screen::DishDetails => handle_fallback_keys(key),
    }
}

/// 处理起始页的按键
fn handle_start_keys(key: KeyEvent) -> AppMessage {
    // q: 退出
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    match key.code {
        // Enter: 进入菜单页
        KeyCode::Enter => AppMessage::Navigate(Screen::Menu),

        _ => AppMessage::Noop,
    }
}

/// 处理菜单页的按键
fn handle_menu_keys(key: KeyEvent) -> AppMessage {
    // q: 退出
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 菜单操作快捷键
    if DefaultKeymap::ACTION_ADD.matches(&key) {
        return AppMessage::Navigate(Screen::AddDish);
    }
    if DefaultKeymap::ACTION_FILTER.matches(&key) {
        return AppMessage::Navigate(Screen::FilterDishes);
    }
    if DefaultKeymap::ACTION_REMOVE.matches(&key) {
        return AppMessage::Menu(MenuMessage::RemoveSelected);
    }

    match key.code {
        // ↑ 或 k: 上一道菜品
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Menu(MenuMessage::SelectPrevious),

        // ↓ 或 j: 下一道菜品
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Menu(MenuMessage::SelectNext),

        // Home: 跳到第一道
        KeyCode::Home => AppMessage::Menu(MenuMessage::SelectFirst),

        // End: 跳到最后一道
        KeyCode::End => AppMessage::Menu(MenuMessage::SelectLast),

        // Enter: 查看选中的菜品
        KeyCode::Enter => AppMessage::Menu(MenuMessage::Confirm),

        // a: 添加菜品
        KeyCode::Char('a') => AppMessage::Navigate(Screen::AddDish),

        // f: 按课程筛选
        KeyCode::Char('f') => AppMessage::Navigate(Screen::FilterDishes),

        // d 或 Delete: 移除选中的菜品
        KeyCode::Char('d') | KeyCode::Delete => AppMessage::Menu(MenuMessage::RemoveSelected),

        _ => AppMessage::Noop,
    }
}

/// 处理添加菜品表单的按键
fn handle_form_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // Tab / ↓: 下一个输入框
        KeyCode::Tab | KeyCode::Down => AppMessage::Form(FormMessage::NextField),

        // Shift+Tab / ↑: 上一个输入框
        KeyCode::BackTab | KeyCode::Up => AppMessage::Form(FormMessage::PrevField),

        // Enter: 提交表单
        KeyCode::Enter => AppMessage::Form(FormMessage::Submit),

        // Backspace: 删除字符
        KeyCode::Backspace => AppMessage::Form(FormMessage::Backspace),

        // 字符输入（大写字母经由 Shift 修饰键进来）
        KeyCode::Char(ch) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
            AppMessage::Form(FormMessage::Input(ch))
        }

        _ => AppMessage::Noop,
    }
}

/// 处理筛选页的按键
fn handle_filter_keys(key: KeyEvent) -> AppMessage {
    // q: 退出
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    match key.code {
        // ↑ ← 或 k: 上一个课程选项
        KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => {
            AppMessage::Filter(FilterMessage::SelectPrevious)
        }

        // ↓ → 或 j: 下一个课程选项
        KeyCode::Down | KeyCode::Right | KeyCode::Char('j') => {
            AppMessage::Filter(FilterMessage::SelectNext)
        }

        // Enter: 执行筛选
        KeyCode::Enter => AppMessage::Filter(FilterMessage::Apply),

        _ => AppMessage::Noop,
    }
}

/// 处理兜底页的按键
fn handle_fallback_keys(key: KeyEvent) -> AppMessage {
    // q: 退出
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    match key.code {
        // Enter: 返回菜单页
        KeyCode::Enter => AppMessage::GoBack,

        _ => AppMessage::Noop,
    }
}
