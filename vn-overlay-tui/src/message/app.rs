//! 主消息定义

use vn_overlay_core::InboundEvent;

use super::{ActionMessage, DeviceMessage, ModalMessage};

/// 应用主消息
#[derive(Debug)]
pub enum AppMessage {
    /// 退出应用
    Quit,
    /// 切换焦点面板
    ToggleFocus,
    /// 设备面板子消息
    Devices(DeviceMessage),
    /// 操作面板子消息
    Actions(ActionMessage),
    /// 弹窗子消息
    Modal(ModalMessage),
    /// 后端入站事件
    Inbound(InboundEvent),
    /// 撤掉全部高亮
    ClearHighlight,
    /// 重新高亮已知设备
    HighlightDevices,
    /// 显示帮助
    ShowHelp,
    /// 清除状态栏消息
    ClearStatus,
    /// 无操作
    Noop,
}
