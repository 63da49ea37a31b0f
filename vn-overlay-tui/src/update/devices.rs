//! 设备面板更新逻辑

use crate::message::DeviceMessage;
use crate::model::App;

/// 处理设备面板消息
pub fn update(app: &mut App, msg: DeviceMessage) {
    match msg {
        DeviceMessage::SelectPrevious => {
            app.devices.select_previous();
        }

        DeviceMessage::SelectNext => {
            app.devices.select_next();
        }

        DeviceMessage::ToggleSelected => {
            app.devices.toggle_current();
            // 选择变化需要同步给覆盖层，端点操作据此发消息
            app.overlay.selection_changed(app.devices.selection());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::ChannelSink;
    use tokio::sync::mpsc;
    use vn_overlay_core::Selection;

    #[test]
    fn toggling_devices_updates_the_overlay_selection() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = App::new(ChannelSink::new(tx));

        update(&mut app, DeviceMessage::ToggleSelected);
        update(&mut app, DeviceMessage::SelectNext);
        update(&mut app, DeviceMessage::ToggleSelected);

        assert!(matches!(app.overlay.selection(), Selection::Multi(_)));
        assert_eq!(app.overlay.selection().ids(), ["RT1", "RT2"]);
    }
}
