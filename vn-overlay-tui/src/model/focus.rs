//! 焦点状态定义

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 左侧设备面板
    #[default]
    Devices,
    /// 右侧操作面板
    Actions,
}

impl FocusPanel {
    /// 切换到另一个面板
    pub fn toggle(&self) -> Self {
        match self {
            FocusPanel::Devices => FocusPanel::Actions,
            FocusPanel::Actions => FocusPanel::Devices,
        }
    }

    /// 是否是设备面板
    pub fn is_devices(&self) -> bool {
        matches!(self, FocusPanel::Devices)
    }

    /// 是否是操作面板
    pub fn is_actions(&self) -> bool {
        matches!(self, FocusPanel::Actions)
    }
}
