//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ MenuMsg   │               ▼               │   │
//！│  │   ┌─────────┐          │ FormMsg   │          ┌──────────┐         │   │
//！│  │   │  View   │          │ FilterMsg │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 命令 / 读取       │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌───────────────────┐     │
//！│      │  终端   │                                │  dishlist-core    │     │
//！│      │ (Util)  │                                │ (MenuController)  │     │
//！│      └─────────┘                                └───────────────────┘     │
//！└─────────────────────────────────────────────────────────────────────────────┘

//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁
//! 所有的用户操作都通过 Message 来表达。
//! 相当于将形形色色的 Events 翻译成 Update 能够看懂的 Messages
//! Update 层根据 Message 来更新 Model（并向核心发出命令）。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;
//!         mod menu;
//!         mod form;
//!         mod filter;
//!
//!         pub use app::AppMessage;
//!         pub use menu::MenuMessage;
//!         pub use form::FormMessage;
//!         pub use filter::FilterMessage;
//!
//!
//!     在 app::AppMessage 中进行主消息的枚举：
//!         #[derive{Debug , Clone}]
//!
//!         pub enum AppMessage {
//!             Quit,                       // 退出应用
//!             Navigate(Screen),           // 跳转到指定页面
//!             GoBack,                     // 返回上一页
//!             Menu(MenuMessage),          // 菜单页面子消息，与主消息分离
//!             Form(FormMessage),          // 添加菜品表单子消息
//!             Filter(FilterMessage),      // 筛选页面子消息
//!             Noop,                       // 无操作，用于代替 Option::None
//!         }
//!
//!
//!     分别分出
//!         menu.rs             专门处理在菜单列表页中的子消息
//!         form.rs             专门处理添加菜品表单的子消息
//!         filter.rs           专门处理课程筛选页的子消息
//!
//!     它们都作为 app::AppMessage 的载荷出现。
//!
//!
//!
//!     在 src/event/handler.rs 中，有：
//!         pub fn handle_event(event: Event, app: &App) -> AppMessage {
//!             ...                                          ↑↑↑↑↑↑↑↑↑↑
//!             ...                                          返回一个 AppMessage 类型
//!             match event {
//!                 Event::Key(key)
//!                 if key.code == ... => {
//!                     ...
//!                     return AppMessage::...          // 在此从 message 获取、创建一个枚举值并返回
//!                            ↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑          // 于是 “创建” 了 一条消息
//!                 }
//!                 _ => AppMessage::Noop
//!             }
//!         }
//!
//!
//! 最后，Event 将从 Message 处获取的消息传入 Update 层进行处理。
//!     —— 去往 src/update/mod.rs 吧
//!

mod app;
mod filter;
mod form;
mod menu;

pub use app::AppMessage;
pub use filter::FilterMessage;
pub use form::FormMessage;
pub use menu::MenuMessage;
