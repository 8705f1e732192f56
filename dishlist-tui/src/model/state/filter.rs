//! 筛选页面状态

/// 课程筛选选项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CourseFilter {
    #[default]
    Starters,
    Mains,
    Desserts,
}

impl CourseFilter {
    /// 获取选项的显示标签
    pub fn label(&self) -> &'static str {
        match self {
            CourseFilter::Starters => "Show Starters",
            CourseFilter::Mains => "Show Mains",
            CourseFilter::Desserts => "Show Desserts",
        }
    }

    /// 获取选项对应的课程值（筛选命令的参数）
    pub fn course(&self) -> &'static str {
        match self {
            CourseFilter::Starters => "Starter",
            CourseFilter::Mains => "Main",
            CourseFilter::Desserts => "Dessert",
        }
    }

    /// 获取所有选项
    pub fn all() -> &'static [CourseFilter] {
        &[
            CourseFilter::Starters,
            CourseFilter::Mains,
            CourseFilter::Desserts,
        ]
    }

    /// 切换到下一个选项
    pub fn next(&self) -> CourseFilter {
        match self {
            CourseFilter::Starters => CourseFilter::Mains,
            CourseFilter::Mains => CourseFilter::Desserts,
            CourseFilter::Desserts => CourseFilter::Starters,
        }
    }

    /// 切换到上一个选项
    pub fn prev(&self) -> CourseFilter {
        match self {
            CourseFilter::Starters => CourseFilter::Desserts,
            CourseFilter::Mains => CourseFilter::Starters,
            CourseFilter::Desserts => CourseFilter::Mains,
        }
    }
}

/// 筛选页面状态
#[derive(Debug, Default)]
pub struct FilterState {
    /// 当前选中的筛选选项
    pub current: CourseFilter,
}

impl FilterState {
    /// 创建新的筛选页面状态
    pub fn new() -> Self {
        Self::default()
    }
}
