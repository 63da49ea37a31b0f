//! 面板与弹窗数据状态

mod actions;
mod modal;

pub use actions::{ActionsState, OverlayAction};
pub use modal::{Modal, ModalState};
