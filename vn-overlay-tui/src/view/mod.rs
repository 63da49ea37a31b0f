//! View 层：UI 渲染
//!
//! 只读取 Model，不做任何状态修改。

mod components;
mod layout;
pub mod theme;

pub use layout::render;
