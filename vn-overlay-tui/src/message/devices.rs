//! 设备面板子消息

/// 设备面板消息
#[derive(Debug, Clone, Copy)]
pub enum DeviceMessage {
    /// 上一项
    SelectPrevious,
    /// 下一项
    SelectNext,
    /// 切换光标所在设备的选中状态
    ToggleSelected,
}
