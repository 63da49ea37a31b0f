//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//! 弹窗打开时弹窗优先，其次全局快捷键（数字键 0-5 直达操作），
//! 最后按焦点面板分发。

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
