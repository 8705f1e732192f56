//! 菜单页面状态

/// 菜单页面状态
///
/// 菜品列表本身存放在核心（`MenuController`）中，
/// 这里只保存光标位置这类纯界面状态，
/// 所以移动方法都要传入当前的列表长度。
#[derive(Debug, Default)]
pub struct MenuPageState {
    /// 当前光标位置
    pub selected: usize,
}

impl MenuPageState {
    /// 创建新的菜单页面状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self, len: usize) {
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self, len: usize) {
        if len > 0 {
            self.selected = len - 1;
        }
    }

    /// 把光标收拢到列表长度以内（移除菜品后调用）
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}
