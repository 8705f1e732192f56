//! 添加菜品表单状态

use dishlist_core::{Dish, DishField};

use crate::util::fmt_price;

/// 表单的输入框总数
pub const FORM_FIELD_COUNT: usize = 4;

/// 添加菜品表单状态
///
/// 每个输入框持有自己的文本缓冲；每次击键后，Update 层会把
/// 焦点输入框的整个缓冲写回核心草稿（`EditDraftField` 命令）。
#[derive(Debug)]
pub struct FormState {
    /// 当前聚焦的输入框（0 = 名称，1 = 描述，2 = 课程，3 = 价格）
    pub focus: usize,
    /// 菜品名称缓冲
    pub name: String,
    /// 描述缓冲
    pub description: String,
    /// 课程缓冲
    pub course: String,
    /// 价格缓冲（原始文本，解析交给核心）
    pub price: String,
}

impl FormState {
    /// 从核心草稿重建输入缓冲
    ///
    /// 进入添加页面时调用。草稿不会在提交后重置，
    /// 所以缓冲会带回上一次留下的输入。
    pub fn from_draft(draft: &Dish) -> Self {
        Self {
            focus: 0,
            name: draft.name.clone(),
            description: draft.description.clone().unwrap_or_default(),
            course: draft.course.clone(),
            price: fmt_price(draft.price),
        }
    }

    /// 焦点移到下一个输入框（循环）
    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % FORM_FIELD_COUNT;
    }

    /// 焦点移到上一个输入框（循环）
    pub fn prev_field(&mut self) {
        self.focus = (self.focus + FORM_FIELD_COUNT - 1) % FORM_FIELD_COUNT;
    }

    /// 焦点输入框对应的草稿字段
    pub fn focused_field(&self) -> DishField {
        match self.focus {
            0 => DishField::Name,
            1 => DishField::Description,
            2 => DishField::Course,
            _ => DishField::Price,
        }
    }

    /// 焦点输入框的文本缓冲
    pub fn buffer(&self) -> &str {
        match self.focus {
            0 => &self.name,
            1 => &self.description,
            2 => &self.course,
            _ => &self.price,
        }
    }

    /// 焦点输入框的可变文本缓冲
    pub fn buffer_mut(&mut self) -> &mut String {
        match self.focus {
            0 => &mut self.name,
            1 => &mut self.description,
            2 => &mut self.course,
            _ => &mut self.price,
        }
    }
}
