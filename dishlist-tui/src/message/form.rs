//! 添加菜品表单消息

/// 添加菜品表单消息
#[derive(Debug, Clone)]
pub enum FormMessage {
    /// 焦点移到下一个输入框
    NextField,
    /// 焦点移到上一个输入框
    PrevField,
    /// 在焦点输入框中追加字符
    Input(char),
    /// 删除焦点输入框末尾的字符
    Backspace,
    /// 提交表单（把草稿加入菜单）
    Submit,
}
