//! Model 层：应用状态定义
//!
//! 应用状态的唯一真相来源。这一层只包含数据结构和对它们的小修改方法，
//! 所有状态变更都由 Update 层触发。

mod app;
mod devices;
mod focus;
pub mod state;

pub use app::App;
pub use devices::{DeviceRow, DevicesState};
pub use focus::FocusPanel;
pub use state::{ActionsState, Modal, ModalState, OverlayAction};
