//! 添加菜品表单更新逻辑
//!
//! 输入缓冲的每次变化都会把整个文本写回核心草稿

use dishlist_core::Command;

use crate::message::FormMessage;
use crate::model::App;

/// 处理表单消息
pub fn update(app: &mut App, msg: FormMessage) {
    match msg {
        FormMessage::NextField => {
            app.form.next_field();
        }
        FormMessage::PrevField => {
            app.form.prev_field();
        }
        FormMessage::Input(ch) => {
            app.form.buffer_mut().push(ch);
            sync_focused_field(app);
        }
        FormMessage::Backspace => {
            app.form.buffer_mut().pop();
            sync_focused_field(app);
        }
        FormMessage::Submit => {
            handle_submit(app);
        }
    }
}

/// 把焦点输入框的完整文本写回核心草稿
///
/// 价格输入框也传原始文本，解析（含失败得 NaN）由核心负责。
fn sync_focused_field(app: &mut App) {
    let field = app.form.focused_field();
    let value = app.form.buffer().to_string();
    app.controller.apply(Command::EditDraftField(field, value));
}

/// 提交表单
fn handle_submit(app: &mut App) {
    let name = app.controller.state().draft_dish().name.clone();
    app.controller.apply(Command::SubmitDraft);
    app.set_status(format!("Added: {}", name));
}
