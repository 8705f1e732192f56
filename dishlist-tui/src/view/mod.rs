//! View 层：界面渲染
//!
//! 根据 Model 的当前状态绘制整个界面。
//! View 层只读取状态，永远不修改；
//! 当前显示哪个页面由核心的 Screen 状态决定。

mod components;
mod layout;
mod pages;

pub mod theme;

pub use layout::render;
