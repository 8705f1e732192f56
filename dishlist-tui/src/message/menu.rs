//! 菜单页面消息
//!
//! 处理菜单列表中的操作，如光标移动、查看、移除菜品

/// 菜单页面消息
#[derive(Debug, Clone)]
pub enum MenuMessage {
    // ========== 列表导航 ==========
    /// 选择上一道菜品
    SelectPrevious,
    /// 选择下一道菜品
    SelectNext,
    /// 跳转到第一道菜品
    SelectFirst,
    /// 跳转到最后一道菜品
    SelectLast,
    /// 确认选择（进入菜品详情跳转）
    Confirm,

    // ========== 菜品操作 ==========
    /// 移除当前选中的菜品（同名菜品一并移除）
    RemoveSelected,
}
