//! UI 模块
//!
//! 采用 MVI (Model-View-Intent) 架构：
//! - Model (state.rs): App 结构体及其状态数据
//! - View (view/): 纯函数，将 State 映射为 UI
//! - Intent (actions.rs): 用户交互与计时器转化为明确的语义化 Action
//! - Update (logic.rs): Action 到状态变更
//! - timers.rs: 装饰行与光标闪烁的周期计时器

pub mod actions;
pub mod input;
pub mod logic;
pub mod state;
pub mod timers;
pub mod view;

// Re-export for convenience
pub use actions::Action;
pub use input::{handle_key_event, handle_mouse_event};
pub use state::App;
pub use timers::Schedule;
pub use view::render;
