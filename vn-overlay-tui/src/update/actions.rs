//! 操作面板更新逻辑

use vn_overlay_core::OverlayResult;

use crate::message::ActionMessage;
use crate::model::{App, OverlayAction};

/// 处理操作面板消息
pub fn update(app: &mut App, msg: ActionMessage) {
    match msg {
        ActionMessage::SelectPrevious => {
            app.actions.select_previous();
        }

        ActionMessage::SelectNext => {
            app.actions.select_next();
        }

        ActionMessage::InvokeCurrent => {
            if let Some(action) = app.actions.current() {
                invoke(app, action);
            }
        }

        ActionMessage::Invoke(action) => {
            invoke(app, action);
        }
    }
}

/// 执行一个覆盖层操作
fn invoke(app: &mut App, action: OverlayAction) {
    match action {
        OverlayAction::QueryPath => apply_flash(app, |app| app.overlay.request_query()),
        OverlayAction::RemovePath => apply_flash(app, |app| app.overlay.request_removal()),
        OverlayAction::UpdatePath => apply_flash(app, |app| app.overlay.request_update()),

        OverlayAction::SetSource => apply_flashes(app, |app| app.overlay.set_source()),
        OverlayAction::SetDestination => apply_flashes(app, |app| app.overlay.set_destination()),

        OverlayAction::CreatePath => {
            app.modal.show_setup();
        }
    }
}

fn apply_flash(app: &mut App, f: impl FnOnce(&mut App) -> OverlayResult<String>) {
    match f(app) {
        Ok(flash) => app.set_status(flash),
        Err(err) => app.set_status(err.to_string()),
    }
}

/// 多条 flash 依次产生；状态栏一次只放得下一行，拼接展示
fn apply_flashes(app: &mut App, f: impl FnOnce(&mut App) -> OverlayResult<Vec<String>>) {
    match f(app) {
        // 空选择是刻意的静默：不发消息也不提示
        Ok(flashes) if flashes.is_empty() => {}
        Ok(flashes) => app.set_status(flashes.join(" · ")),
        Err(err) => app.set_status(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::ChannelSink;
    use crate::model::Modal;
    use tokio::sync::mpsc;
    use vn_overlay_core::Selection;

    fn app_with_channel() -> (App, mpsc::UnboundedReceiver<vn_overlay_core::OutboundEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (App::new(ChannelSink::new(tx)), rx)
    }

    #[test]
    fn query_action_sends_and_flashes() {
        let (mut app, mut rx) = app_with_channel();
        update(&mut app, ActionMessage::Invoke(OverlayAction::QueryPath));

        assert_eq!(app.status_message.as_deref(), Some("VN query message"));
        assert_eq!(rx.try_recv().unwrap().event_type(), "vnQuerymsg");
    }

    #[test]
    fn source_action_with_empty_selection_is_silent() {
        let (mut app, mut rx) = app_with_channel();
        update(&mut app, ActionMessage::Invoke(OverlayAction::SetSource));

        assert!(app.status_message.is_none());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn source_action_sends_per_selected_node() {
        let (mut app, mut rx) = app_with_channel();
        app.overlay
            .selection_changed(Selection::from_ids(vec!["RT1".into(), "RT2".into()]));

        update(&mut app, ActionMessage::Invoke(OverlayAction::SetSource));

        assert_eq!(
            app.status_message.as_deref(),
            Some("Source node: RT1 · Source node: RT2")
        );
        assert_eq!(rx.try_recv().unwrap().event_type(), "pceTopovSetSrc");
        assert_eq!(rx.try_recv().unwrap().event_type(), "pceTopovSetSrc");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn create_path_opens_the_setup_dialog() {
        let (mut app, _rx) = app_with_channel();
        update(&mut app, ActionMessage::Invoke(OverlayAction::CreatePath));

        assert!(matches!(app.modal.active, Some(Modal::Setup(_))));
    }
}
