//! Message 层：事件消息定义
//!
//! Event 层把原始输入翻译成这里定义的消息，Update 层消费消息并修改 Model。
//! 后端入站事件同样走消息通道（`AppMessage::Inbound`）。

mod actions;
mod app;
mod devices;
mod modal;

pub use actions::ActionMessage;
pub use app::AppMessage;
pub use devices::DeviceMessage;
pub use modal::ModalMessage;
