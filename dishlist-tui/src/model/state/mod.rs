//! 页面状态模块
//!
//! 定义各个页面的界面局部状态（光标、焦点、输入缓冲）

mod filter;
mod form;
mod menu;

pub use filter::{CourseFilter, FilterState};
pub use form::{FORM_FIELD_COUNT, FormState};
pub use menu::MenuPageState;
