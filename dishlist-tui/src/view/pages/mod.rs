//! 页面视图模块

pub mod add_dish;
pub mod fallback;
pub mod filter_dishes;
pub mod menu;
pub mod start;
