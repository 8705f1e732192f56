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
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是界面状态的 “唯一真相来源”。
//! 这一层只包含纯数据结构，不包含任何业务逻辑。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!
//!         pub mod state;      // 页面局部状态
//!
//!     值得一提的是，本应用没有本地的 Page 枚举：
//!         - 当前页面由核心的 Screen 状态机持有（dishlist_core::Screen），
//!             页面跳转是一条核心命令（NavigateTo），而非界面局部状态；
//!         - state/ 里只放界面自己的东西：光标位置、输入缓冲、筛选选项，
//!             菜品列表永远不会复制到这里。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/app.rs 中定义：
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub controller: MenuController,     // 核心控制器（菜品数据在这里）
//!             pub status_message: Option<String>, // 状态栏消息（可选）
//!
//!             // 以及各页面状态：
//!             pub menu: MenuPageState,            // 菜单页面状态
//!             pub form: FormState,                // 添加菜品表单状态
//!             pub filter: FilterState,            // 筛选页面状态
//!         }
//!
//!     使用：
//!         - 在 main.rs 中创建：let mut app = model::App::new();
//!         - 在 update/mod.rs 中修改：app.should_quit = true;
//!         - 在 view/mod.rs 中读取：pub fn render(app: &App, ...)
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、页面路由（Screen，来自 dishlist-core）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     核心定义了五个页面：
//!         - Start          起始页（平均价格）
//!         - Menu           菜单列表页
//!         - AddDish        添加菜品表单页
//!         - FilterDishes   课程筛选页
//!         - DishDetails    菜品详情（没有接线的跳转目标，渲染为兜底页）
//!
//!     数据流：
//!         用户触发跳转（如起始页按 Enter）
//!             ↓
//!         event/handler.rs 返回 AppMessage::Navigate(Screen::Menu)
//!             ↓
//!         update/mod.rs 发出 Command::NavigateTo(Screen::Menu)
//!             ↓
//!         view/layout.rs 根据 controller.state().current_screen() 渲染对应页面
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、页面局部状态（state/）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/state/ 中定义：
//!
//!         MenuPageState   菜单页的光标位置
//!             - selected: usize
//!             - select_previous() / select_next(len) / clamp(len)
//!
//!         FormState       添加菜品表单的焦点和四个输入缓冲
//!             - focus: usize（0 = 名称，1 = 描述，2 = 课程，3 = 价格）
//!             - from_draft()：进入表单页时从核心草稿重建缓冲
//!             - buffer_mut()：焦点输入框的文本缓冲
//!
//!         FilterState     筛选页的当前选项
//!             - current: CourseFilter（Starters / Mains / Desserts）
//!
//!     这些结构里没有菜品数据。菜品列表、筛选快照和草稿都
//!     通过 app.controller.state() 的读取访问器获得。
//!
//!
//! Model 层的数据被 Update 层修改，然后被 View 层读取并渲染成 UI。
//!

mod app;

pub mod state;

pub use app::App;
pub use state::{CourseFilter, FilterState, FormState, MenuPageState};
