//! 操作面板子消息

use crate::model::OverlayAction;

/// 操作面板消息
#[derive(Debug, Clone, Copy)]
pub enum ActionMessage {
    /// 上一项
    SelectPrevious,
    /// 下一项
    SelectNext,
    /// 执行光标所在操作
    InvokeCurrent,
    /// 执行指定操作（数字键直达）
    Invoke(OverlayAction),
}
