//! 筛选页面消息

/// 筛选页面消息
#[derive(Debug, Clone)]
pub enum FilterMessage {
    /// 选择上一个课程选项
    SelectPrevious,
    /// 选择下一个课程选项
    SelectNext,
    /// 按当前选项执行筛选
    Apply,
}
