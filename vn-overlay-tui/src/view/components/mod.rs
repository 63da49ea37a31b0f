//! UI 组件

pub mod actions;
pub mod devices;
pub mod modal;
pub mod statusbar;
