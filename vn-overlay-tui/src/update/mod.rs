//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model。
//! 是唯一可以修改 Model 的地方；复杂的子消息委托给子模块处理。

mod actions;
mod devices;
mod modal;
mod overlay;

use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Devices(device_msg) => {
            devices::update(app, device_msg);
        }

        AppMessage::Actions(action_msg) => {
            actions::update(app, action_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::Inbound(event) => {
            overlay::handle_inbound(app, &event);
        }

        AppMessage::ClearHighlight => match app.overlay.clear_highlighting() {
            Ok(flash) => app.set_status(flash),
            Err(err) => app.set_status(err.to_string()),
        },

        AppMessage::HighlightDevices => match app.overlay.highlight_devices() {
            Ok(flash) => app.set_status(flash),
            Err(err) => app.set_status(err.to_string()),
        },

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}
