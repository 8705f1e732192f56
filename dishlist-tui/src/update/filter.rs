//! 筛选页面更新逻辑

use dishlist_core::Command;

use crate::message::FilterMessage;
use crate::model::App;

/// 处理筛选页面消息
pub fn update(app: &mut App, msg: FilterMessage) {
    match msg {
        FilterMessage::SelectPrevious => {
            app.filter.current = app.filter.current.prev();
        }

        FilterMessage::SelectNext => {
            app.filter.current = app.filter.current.next();
        }

        FilterMessage::Apply => {
            handle_apply(app);
        }
    }
}

/// 按当前选项执行筛选
fn handle_apply(app: &mut App) {
    let course = app.filter.current.course();
    app.controller
        .apply(Command::FilterByCourse(course.to_string()));

    let count = app.controller.state().filtered_dishes().len();
    app.set_status(format!("{} dishes match {}", count, course));
}
