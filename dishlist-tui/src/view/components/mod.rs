//! 可复用的界面组件

pub mod statusbar;
