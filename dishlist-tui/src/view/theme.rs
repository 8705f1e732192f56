//! 主题和样式定义

use ratatui::style::{Color, Modifier, Style};

/// 获取当前主题的颜色方案
pub fn colors() -> ThemeColors {
    ThemeColors::dark()
}

/// 主题颜色
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// 主要文字颜色
    pub fg: Color,
    /// 边框颜色
    pub border: Color,
    /// 高亮/操作色
    pub highlight: Color,
    /// 选中项文字颜色
    pub selected_fg: Color,
    /// 成功/新增色
    pub success: Color,
    /// 危险/删除色
    pub error: Color,
    /// 次要文字颜色
    pub muted: Color,
}

impl ThemeColors {
    /// 深色主题
    pub fn dark() -> Self {
        Self {
            fg: Color::Rgb(212, 212, 212),
            border: Color::Rgb(62, 62, 62),
            highlight: Color::Rgb(0, 123, 255),
            selected_fg: Color::White,
            success: Color::Rgb(40, 167, 69),
            error: Color::Rgb(220, 53, 69),
            muted: Color::Rgb(128, 128, 128),
        }
    }
}

/// 常用样式
pub struct Styles;

impl Styles {
    /// 状态栏样式
    pub fn statusbar() -> Style {
        let c = colors();
        Style::default().fg(c.muted)
    }

    /// 快捷键提示中按键部分的样式
    pub fn hint_key() -> Style {
        let c = colors();
        Style::default()
            .fg(c.highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键提示中描述部分的样式
    pub fn hint_desc() -> Style {
        let c = colors();
        Style::default().fg(c.fg)
    }
}
