//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ MenuMsg   │               ▼               │   │
//！│  │   ┌─────────┐          │ FormMsg   │          ┌──────────┐         │   │
//！│  │   │  View   │          │ FilterMsg │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 命令 / 读取       │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌───────────────────┐     │
//！│      │  终端   │                                │  dishlist-core    │     │
//！│      │ (Util)  │                                │ (MenuController)  │     │
//！│      └─────────┘                                └───────────────────┘     │
//！└─────────────────────────────────────────────────────────────────────────────┘


//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方，
//! 也是唯一向核心控制器发出命令的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod menu;               // 菜单页面子消息处理
//!         mod form;               // 添加菜品表单子消息处理
//!         mod filter;             // 筛选页面子消息处理
//!
//!         use crate::message::AppMessage;
//!         use crate::model::App;
//!
//!         pub fn update(app: &mut App , msg: AppMessage) {...}
//!
//!
//!         有：
//!             pub fn update(app: &mut App, msg: AppMessage) {
//!                 match msg {
//!                     AppMessage::Quit => {
//!                         app.should_quit = true;
//!                     }
//!                     AppMessage::Menu(menu_msg) => {
//!                         menu::update(app, menu_msg);
//!                     }
//!                     AppMessage::Form(form_msg) => {
//!                         form::update(app, form_msg);
//!                     }
//!                     ...
//!                 }
//!             }
//!
//!         —— 的主更新函数。
//!             使用 match 进行穷举，其中每个 Message 变体都对应一个状态变更。
//!             复杂的子消息委托给子模块处理（menu、form、filter）。
//!             通过 &mut App 直接修改状态，避免不必要的复制。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 表单更新（form.rs）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/update/form.rs 中定义：
//!
//!         主要处理的消息：
//!             - FormMessage::NextField    焦点切换到下一个输入框
//!             - FormMessage::Input(c)     在焦点输入框追加字符
//!             - FormMessage::Backspace    删除焦点输入框末尾字符
//!             - FormMessage::Submit       提交草稿
//!
//!         每次 Input / Backspace 之后，焦点输入框的整个文本会作为
//!         EditDraftField 命令发给核心。价格输入框也传原始文本，
//!         解析（以及解析失败得到 NaN）完全由核心负责。
//!
//!         Submit 发出 SubmitDraft 命令：核心把草稿追加到菜单并跳回
//!         菜单页。草稿不会被清空，这是有意保留的行为。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!




mod filter;
mod form;
mod menu;

use dishlist_core::{Command, Screen};

use crate::message::AppMessage;
use crate::model::App;
use crate::model::state::FormState;




/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Navigate(screen) => {
            navigate(app, screen);
        }

        AppMessage::GoBack => {
            go_back(app);
        }

        AppMessage::Menu(menu_msg) => {
            menu::update(app, menu_msg);
        }

        AppMessage::Form(form_msg) => {
            form::update(app, form_msg);
        }

        AppMessage::Filter(filter_msg) => {
            filter::update(app, filter_msg);
        }

        AppMessage::Noop => {}
    }
}

/// 跳转到指定页面
fn navigate(app: &mut App, screen: Screen) {
    if screen == Screen::AddDish {
        // 进入表单页时从核心草稿重建输入缓冲（草稿可能带着上次的输入）
        app.form = FormState::from_draft(app.controller.state().draft_dish());
    }

    app.controller.apply(Command::NavigateTo(screen));
    app.clear_status(); // 切换页面时清除状态消息
}

/// 返回上一页
fn go_back(app: &mut App) {
    let target = match app.controller.state().current_screen() {
        // 起始页没有上一页
        Screen::Start => None,
        Screen::Menu => Some(Screen::Start),
        Screen::AddDish | Screen::FilterDishes | Screen::DishDetails => Some(Screen::Menu),
    };

    if let Some(screen) = target {
        app.controller.apply(Command::NavigateTo(screen));
        app.clear_status();
    }
}

#[cfg(test)]
mod tests {
    use dishlist_core::{DishField, Screen};

    use crate::message::{AppMessage, FilterMessage, FormMessage, MenuMessage};
    use crate::model::App;

    use super::update;

    fn app_on(screen: Screen) -> App {
        let mut app = App::new();
        update(&mut app, AppMessage::Navigate(screen));
        app
    }

    #[test]
    fn quit_sets_the_exit_flag() {
        let mut app = App::new();
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn navigate_reaches_the_menu() {
        let mut app = App::new();
        update(&mut app, AppMessage::Navigate(Screen::Menu));
        assert_eq!(app.controller.state().current_screen(), Screen::Menu);
    }

    #[test]
    fn go_back_walks_menu_to_start() {
        let mut app = app_on(Screen::Menu);
        update(&mut app, AppMessage::GoBack);
        assert_eq!(app.controller.state().current_screen(), Screen::Start);
    }

    #[test]
    fn go_back_from_the_form_lands_on_menu() {
        let mut app = app_on(Screen::AddDish);
        update(&mut app, AppMessage::GoBack);
        assert_eq!(app.controller.state().current_screen(), Screen::Menu);
    }

    #[test]
    fn go_back_on_start_stays_put() {
        let mut app = App::new();
        update(&mut app, AppMessage::GoBack);
        assert_eq!(app.controller.state().current_screen(), Screen::Start);
    }

    #[test]
    fn form_input_streams_into_the_core_draft() {
        let mut app = app_on(Screen::AddDish);
        for ch in "Tart".chars() {
            update(&mut app, AppMessage::Form(FormMessage::Input(ch)));
        }
        assert_eq!(app.controller.state().draft_dish().name, "Tart");

        update(&mut app, AppMessage::Form(FormMessage::Backspace));
        assert_eq!(app.controller.state().draft_dish().name, "Tar");
    }

    #[test]
    fn price_buffer_reaches_the_core_as_a_number() {
        let mut app = app_on(Screen::AddDish);
        for _ in 0..3 {
            update(&mut app, AppMessage::Form(FormMessage::NextField));
        }
        assert_eq!(app.form.focused_field(), DishField::Price);

        // 价格缓冲初始为 "0"，先清掉再输入
        update(&mut app, AppMessage::Form(FormMessage::Backspace));
        for ch in "7.5".chars() {
            update(&mut app, AppMessage::Form(FormMessage::Input(ch)));
        }
        assert_eq!(app.form.price, "7.5");
        assert_eq!(app.controller.state().draft_dish().price, 7.5);
    }

    #[test]
    fn submit_appends_and_lands_on_menu() {
        let mut app = app_on(Screen::AddDish);
        for ch in "Cake".chars() {
            update(&mut app, AppMessage::Form(FormMessage::Input(ch)));
        }
        update(&mut app, AppMessage::Form(FormMessage::Submit));

        let state = app.controller.state();
        assert_eq!(state.current_screen(), Screen::Menu);
        assert_eq!(state.dishes().len(), 4);
        assert_eq!(state.dishes()[3].name, "Cake");
    }

    #[test]
    fn reentering_the_form_restores_the_stale_draft() {
        let mut app = app_on(Screen::AddDish);
        for ch in "Cake".chars() {
            update(&mut app, AppMessage::Form(FormMessage::Input(ch)));
        }
        update(&mut app, AppMessage::Form(FormMessage::Submit));

        // 草稿在提交后不会重置，重新进入表单时缓冲带回上次的输入
        update(&mut app, AppMessage::Navigate(Screen::AddDish));
        assert_eq!(app.form.name, "Cake");
        assert_eq!(app.form.focus, 0);
    }

    #[test]
    fn remove_clamps_the_menu_cursor() {
        let mut app = app_on(Screen::Menu);
        update(&mut app, AppMessage::Menu(MenuMessage::SelectLast));
        assert_eq!(app.menu.selected, 2);

        update(&mut app, AppMessage::Menu(MenuMessage::RemoveSelected));
        assert_eq!(app.controller.state().dishes().len(), 2);
        assert_eq!(app.menu.selected, 1);
    }

    #[test]
    fn confirm_heads_into_the_unwired_details_screen() {
        let mut app = app_on(Screen::Menu);
        update(&mut app, AppMessage::Menu(MenuMessage::Confirm));

        let state = app.controller.state();
        assert_eq!(state.current_screen(), Screen::DishDetails);
        // 选中的菜品被拷入草稿
        assert_eq!(state.draft_dish().name, "Pizza");
    }

    #[test]
    fn filter_apply_snapshots_the_selected_course() {
        let mut app = app_on(Screen::FilterDishes);
        update(&mut app, AppMessage::Filter(FilterMessage::SelectNext)); // Mains
        update(&mut app, AppMessage::Filter(FilterMessage::Apply));

        let state = app.controller.state();
        assert_eq!(state.last_filter_course(), Some("Main"));
        assert_eq!(state.filtered_dishes().len(), 3);
    }
}
