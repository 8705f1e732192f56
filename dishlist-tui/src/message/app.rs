//! 应用主消息枚举

use dishlist_core::Screen;

use super::{FilterMessage, FormMessage, MenuMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 跳转到指定页面
    Navigate(Screen),

    /// 返回上一页
    GoBack,

    /// 菜单页面相关消息
    Menu(MenuMessage),

    /// 添加菜品表单相关消息
    Form(FormMessage),

    /// 筛选页面相关消息
    Filter(FilterMessage),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
