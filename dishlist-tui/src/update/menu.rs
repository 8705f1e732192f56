//! 菜单页面更新逻辑
//!
//! 处理菜单列表中的光标移动和菜品操作

use dishlist_core::Command;

use crate::message::MenuMessage;
use crate::model::App;

/// 处理菜单页面消息
pub fn update(app: &mut App, msg: MenuMessage) {
    match msg {
        // ========== 列表导航 ==========
        MenuMessage::SelectPrevious => {
            app.menu.select_previous();
        }
        MenuMessage::SelectNext => {
            let len = app.controller.state().dishes().len();
            app.menu.select_next(len);
        }
        MenuMessage::SelectFirst => {
            app.menu.select_first();
        }
        MenuMessage::SelectLast => {
            let len = app.controller.state().dishes().len();
            app.menu.select_last(len);
        }
        MenuMessage::Confirm => {
            handle_confirm(app);
        }

        // ========== 菜品操作 ==========
        MenuMessage::RemoveSelected => {
            handle_remove_selected(app);
        }
    }
}

/// 进入选中菜品的详情跳转
fn handle_confirm(app: &mut App) {
    if app.controller.state().dishes().is_empty() {
        app.set_status("No dish selected");
        return;
    }

    app.controller.apply(Command::SelectDish(app.menu.selected));
    // 详情页没有专属渲染分支，会落到兜底页
    log::warn!("dish details screen is not wired up, showing fallback page");
}

/// 移除选中的菜品（同名的一并移除）
fn handle_remove_selected(app: &mut App) {
    let Some(dish) = app.controller.state().dishes().get(app.menu.selected) else {
        app.set_status("No dish selected");
        return;
    };

    let name = dish.name.clone();
    app.controller.apply(Command::RemoveDish(name.clone()));

    // 列表变短后把光标收回来
    app.menu.clamp(app.controller.state().dishes().len());
    app.set_status(format!("Removed: {}", name));
}
