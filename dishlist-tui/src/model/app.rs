//! 应用主状态结构

use dishlist_core::MenuController;

use super::state::{FilterState, FormState, MenuPageState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 核心菜单控制器（菜品数据的唯一真相来源）
    pub controller: MenuController,

    /// 状态栏消息
    pub status_message: Option<String>,

    // === 各页面状态 ===
    /// 菜单页面状态
    pub menu: MenuPageState,
    /// 添加菜品表单状态
    pub form: FormState,
    /// 筛选页面状态
    pub filter: FilterState,
}

impl App {
    /// 创建新的应用实例
    pub fn new() -> Self {
        let controller = MenuController::new();
        // 输入缓冲从核心草稿初始化（名称/描述/课程为空，价格为 0）
        let form = FormState::from_draft(controller.state().draft_dish());

        Self {
            should_quit: false,
            controller,
            status_message: None,
            menu: MenuPageState::new(),
            form,
            filter: FilterState::new(),
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
