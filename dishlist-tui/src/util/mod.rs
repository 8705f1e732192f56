//！┌─────────────────────────────────────────────────────────────────────────┐
//！│                           主循环 (app.rs)                                │
//！│                                                                         │
//！│    ┌─────────┐     ┌─────────┐     ┌──────────┐     ┌─────────┐         │
//！│    │ 用户按键 │ ─▶ │  Event  │ ─▶ │ Message  │ ──▶ │ Update  │         │
//！│    └─────────┘     │  层     │     │   层     │     │   层    │          │
//！│         ▲          └─────────┘     └──────────┘     └────┬────┘         │
//！│         │                                                │              │
//！│         │          ┌─────────┐     ┌──────────┐          ▼              │
//！│         │          │  Util   │     │  Model   │ ◀───────────           │
//！│         │          │  层     │     │   层     │                         │
//！│         │          └─────────┘     └────┬─────┘                         │
//！│         │                               │                               │
//！│         │          ┌─────────┐          ▼                               │
//！│         └──────────│  View   │ ◀── 读取状态                             │
//！│           屏幕输出  │   层    │                                          │
//！│                    └─────────┘                                          │
//！└─────────────────────────────────────────────────────────────────────────┘

//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码，
//! 负责终端的初始化/恢复，以及少量显示格式化辅助。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod terminal;       // 终端初始化和恢复
//!         mod format;         // 显示格式化（价格文本）
//!
//!         pub use terminal::{init_terminal, restore_terminal, Term};
//!         pub use format::fmt_price;
//!
//!
//!     终端类型定义：
//!         在 src/util/terminal.rs 中，有：
//!
//!             // 类型别名，简化长类型名
//!             pub type Term = Terminal<CrosstermBackend<Stdout>>;
//!
//!         这样其他地方就可以写 &mut Term，
//!         而不是完整的 &mut Terminal<CrosstermBackend<Stdout>>。
//!
//!
//!     初始化终端：
//!         在 src/util/terminal.rs 中，有：
//!
//!             pub fn init_terminal() -> Result<Term> {
//!                 enable_raw_mode()?;                              // 1. 启用原始模式
//!                 execute!(io::stdout(), EnterAlternateScreen)?;   // 2. 进入备用屏幕
//!
//!                 let terminal =
//!                     Terminal::new(CrosstermBackend::new(io::stdout()))?;   // 3. 创建终端对象
//!                 Ok(terminal)
//!             }
//!
//!         关键概念：
//!
//!         · Raw Mode（原始模式）
//!             - 关闭行缓冲：无需按 Enter，每个按键立即生效
//!             - 关闭字符回显：按键不会显示在终端上
//!             - 捕获所有按键：包括 Ctrl+C、箭头键等特殊键
//!
//!         · Alternate Screen（备用屏幕）
//!             - 终端有两个缓冲区：主屏幕和备用屏幕
//!             - TUI 应用在备用屏幕运行
//!             - 退出后自动恢复主屏幕内容（不会覆盖原有内容）
//!             - 类似 vim、htop 等工具的行为
//!
//!
//!     恢复终端：
//!         在 src/util/terminal.rs 中，有：
//!
//!             pub fn restore_terminal(terminal: &mut Term) -> Result<()> {
//!                 disable_raw_mode()?;                       // 1. 禁用原始模式
//!                 execute!(terminal.backend_mut(), LeaveAlternateScreen)?;  // 2. 离开备用屏幕
//!                 terminal.show_cursor()?;                   // 3. 显示光标
//!                 Ok(())
//!             }
//!
//!         注意：无论程序是正常退出还是发生错误，都必须调用此函数！
//!               否则终端会保持在原始模式，用户输入不会正常显示。
//!
//!
//!     价格格式化：
//!         在 src/util/format.rs 中，有：
//!
//!             pub fn fmt_price(price: f64) -> String
//!
//!         菜单里的价格展示为最短十进制文本（12 → "12"，7.5 → "7.5"），
//!         解析失败的价格展示为 "NaN"。
//!         View 层的菜单列表和筛选结果都经由它渲染价格。
//!
//!
//! Util 层在应用启动时初始化终端，在应用退出时恢复终端。
//! 主循环在初始化后的终端中运行。
//!     —— 去往 src/app.rs 主循环吧
//!

mod format;
mod terminal;

pub use format::fmt_price;
pub use terminal::{Term, init_terminal, restore_terminal};
