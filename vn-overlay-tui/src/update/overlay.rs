//! 后端入站事件处理

use vn_overlay_core::{DialogRequest, InboundEvent};

use crate::model::App;

/// 把入站事件交给覆盖层调度器，按结果打开对应弹窗
pub fn handle_inbound(app: &mut App, event: &InboundEvent) {
    match app.overlay.on_inbound(event) {
        Ok(Some(DialogRequest::Candidates(form))) => {
            app.modal.show_candidates(form);
        }
        Ok(Some(DialogRequest::Constraints(form))) => {
            app.modal.show_constraints(form);
        }
        // 没有等待者的事件直接丢弃
        Ok(None) => {}
        Err(err) => {
            log::debug!("inbound event rejected: {err}");
            app.set_status(format!("Ignored reply: {err}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::ChannelSink;
    use crate::model::Modal;
    use serde_json::json;
    use tokio::sync::mpsc;
    use vn_overlay_core::{InboundKind, OutboundEvent};

    fn app_with_channel() -> (App, mpsc::UnboundedReceiver<OutboundEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (App::new(ChannelSink::new(tx)), rx)
    }

    #[test]
    fn registered_reply_opens_the_candidate_dialog() {
        let (mut app, _rx) = app_with_channel();
        app.overlay.request_query().unwrap();

        let event = InboundEvent::new(InboundKind::QueryCandidates, json!({ "a": ["123"] }));
        handle_inbound(&mut app, &event);

        assert!(matches!(app.modal.active, Some(Modal::Candidates(_))));
    }

    #[test]
    fn unregistered_reply_leaves_the_ui_alone() {
        let (mut app, _rx) = app_with_channel();

        let event = InboundEvent::new(InboundKind::QueryCandidates, json!({ "a": ["123"] }));
        handle_inbound(&mut app, &event);

        assert!(app.modal.active.is_none());
        assert!(app.status_message.is_none());
    }

    #[test]
    fn malformed_reply_surfaces_in_the_status_bar() {
        let (mut app, _rx) = app_with_channel();
        app.overlay.request_query().unwrap();

        let event = InboundEvent::new(InboundKind::QueryCandidates, json!({}));
        handle_inbound(&mut app, &event);

        assert!(app.modal.active.is_none());
        assert!(app
            .status_message
            .as_deref()
            .is_some_and(|s| s.starts_with("Ignored reply:")));
    }
}
