//! 应用主状态结构

use vn_overlay_core::VnOverlay;

use crate::backend::ChannelSink;

use super::{ActionsState, DevicesState, FocusPanel, ModalState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 设备面板状态
    pub devices: DevicesState,

    /// 操作面板状态
    pub actions: ActionsState,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 弹窗状态
    pub modal: ModalState,

    /// 覆盖层调度器（响应注册表 + 当前选择 + 出站通道）
    pub overlay: VnOverlay<ChannelSink>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(sink: ChannelSink) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Devices,
            devices: DevicesState::new(),
            actions: ActionsState::new(),
            status_message: None,
            modal: ModalState::new(),
            overlay: VnOverlay::new(sink),
        }
    }

    /// 覆盖层激活：高亮已知设备
    pub fn activate(&mut self) {
        match self.overlay.highlight_devices() {
            Ok(flash) => self.set_status(flash),
            Err(err) => log::debug!("highlight on activate failed: {err}"),
        }
    }

    /// 覆盖层停用：撤掉全部高亮
    pub fn deactivate(&mut self) {
        if let Err(err) = self.overlay.clear_highlighting() {
            log::debug!("clear on deactivate failed: {err}");
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
