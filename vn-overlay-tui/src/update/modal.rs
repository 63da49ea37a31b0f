//! 弹窗更新逻辑

use vn_overlay_core::{BandwidthUnit, ConstraintField, CostType, SetupForm};

use crate::message::ModalMessage;
use crate::model::{App, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Candidates(_) => handle_candidates(app, msg),
        Modal::Setup(_) => handle_setup(app, msg),
        Modal::Constraints(_) => handle_constraints(app, msg),
        Modal::Help => handle_help(app, msg),
    }
}

/// 候选 VN 列表弹窗
fn handle_candidates(app: &mut App, msg: ModalMessage) {
    let Some(Modal::Candidates(ref mut form)) = app.modal.active else {
        return;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
            app.clear_status();
        }

        ModalMessage::CursorUp => form.cursor_up(),
        ModalMessage::CursorDown => form.cursor_down(),
        ModalMessage::Toggle => form.toggle_current(),

        ModalMessage::Confirm => {
            let form = form.clone();
            app.modal.close();

            match app.overlay.confirm_candidates(&form) {
                // 没有勾选任何行：刻意的静默关闭
                Ok(flashes) if flashes.is_empty() => {}
                Ok(flashes) => app.set_status(flashes.join(" · ")),
                Err(err) => app.set_status(err.to_string()),
            }
        }

        _ => {}
    }
}

/// 新建路径弹窗
///
/// 字段索引：0 带宽开关, 1 带宽值, 2 带宽单位, 3 代价开关, 4 代价类型, 5 名称
fn handle_setup(app: &mut App, msg: ModalMessage) {
    let Some(Modal::Setup(ref mut form)) = app.modal.active else {
        return;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
            app.clear_status();
        }

        ModalMessage::NextField => form.focus_next(),
        ModalMessage::PrevField => form.focus_prev(),

        ModalMessage::Toggle => match form.focus {
            0 => form.bandwidth_enabled = !form.bandwidth_enabled,
            2 => form.bandwidth_unit = flip_unit(form.bandwidth_unit),
            3 => form.cost_enabled = !form.cost_enabled,
            4 => form.cost_type = flip_cost(form.cost_type),
            _ => {}
        },

        ModalMessage::Input(ch) => match form.focus {
            // 带宽值只收数字
            1 if ch.is_ascii_digit() => form.bandwidth_value.push(ch),
            5 => form.name.push(ch),
            _ => {}
        },

        ModalMessage::Backspace => match form.focus {
            1 => {
                form.bandwidth_value.pop();
            }
            5 => {
                form.name.pop();
            }
            _ => {}
        },

        ModalMessage::Confirm => {
            let form = form.clone();
            app.modal.close();
            submit_setup(app, &form);
        }

        _ => {}
    }
}

fn submit_setup(app: &mut App, form: &SetupForm) {
    match app.overlay.submit_setup(form) {
        Ok(flash) => app.set_status(flash),
        Err(err) => app.set_status(err.to_string()),
    }
}

/// 约束编辑弹窗
fn handle_constraints(app: &mut App, msg: ModalMessage) {
    let Some(Modal::Constraints(ref mut form)) = app.modal.active else {
        return;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
            app.clear_status();
        }

        ModalMessage::NextField => form.focus_next(),
        ModalMessage::PrevField => form.focus_prev(),

        ModalMessage::Toggle => match form.focused_field() {
            Some(ConstraintField::BandwidthToggle) => {
                if let Some(group) = form.bandwidth.as_mut() {
                    group.enabled = !group.enabled;
                }
            }
            Some(ConstraintField::BandwidthUnit) => {
                if let Some(group) = form.bandwidth.as_mut() {
                    group.unit = flip_unit(group.unit);
                }
            }
            Some(ConstraintField::CostToggle) => {
                if let Some(group) = form.cost.as_mut() {
                    group.enabled = !group.enabled;
                }
            }
            Some(ConstraintField::CostValue) => {
                if let Some(group) = form.cost.as_mut() {
                    group.cost_type = flip_cost(group.cost_type);
                }
            }
            Some(ConstraintField::Src(i)) => {
                if let Some(entry) = form.src_entries.get_mut(i) {
                    entry.checked = !entry.checked;
                }
            }
            Some(ConstraintField::Dst(i)) => {
                if let Some(entry) = form.dst_entries.get_mut(i) {
                    entry.checked = !entry.checked;
                }
            }
            _ => {}
        },

        ModalMessage::Input(ch) => {
            if form.focused_field() == Some(ConstraintField::BandwidthValue) && ch.is_ascii_digit()
            {
                if let Some(group) = form.bandwidth.as_mut() {
                    group.value.push(ch);
                }
            }
        }

        ModalMessage::Backspace => {
            if form.focused_field() == Some(ConstraintField::BandwidthValue) {
                if let Some(group) = form.bandwidth.as_mut() {
                    group.value.pop();
                }
            }
        }

        ModalMessage::Confirm => {
            let form = form.clone();
            app.modal.close();

            match app.overlay.confirm_constraints(&form) {
                Ok(flash) => app.set_status(flash),
                Err(err) => app.set_status(err.to_string()),
            }
        }

        _ => {}
    }
}

/// 帮助弹窗
fn handle_help(app: &mut App, msg: ModalMessage) {
    if matches!(msg, ModalMessage::Close | ModalMessage::Confirm) {
        app.modal.close();
    }
}

fn flip_unit(unit: BandwidthUnit) -> BandwidthUnit {
    match unit {
        BandwidthUnit::Kbps => BandwidthUnit::Mbps,
        BandwidthUnit::Mbps => BandwidthUnit::Kbps,
    }
}

fn flip_cost(cost: CostType) -> CostType {
    match cost {
        CostType::Igp => CostType::Te,
        CostType::Te => CostType::Igp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::ChannelSink;
    use serde_json::json;
    use tokio::sync::mpsc;
    use vn_overlay_core::{InboundEvent, InboundKind, OutboundEvent};

    fn app_with_channel() -> (App, mpsc::UnboundedReceiver<OutboundEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (App::new(ChannelSink::new(tx)), rx)
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<OutboundEvent>) -> Vec<OutboundEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    #[test]
    fn setup_confirm_sends_the_path_and_closes() {
        let (mut app, mut rx) = app_with_channel();
        app.modal.show_setup();

        // 名称字段在索引 5
        for _ in 0..5 {
            update(&mut app, ModalMessage::NextField);
        }
        update(&mut app, ModalMessage::Input('n'));
        update(&mut app, ModalMessage::Input('1'));
        update(&mut app, ModalMessage::Confirm);

        assert!(app.modal.active.is_none());
        assert_eq!(app.status_message.as_deref(), Some("create path message"));

        let sent = drain(&mut rx);
        assert_eq!(sent.len(), 1);
        assert_eq!(
            sent[0].payload(),
            json!({ "bw": null, "bwtype": null, "ctype": null, "vnName": "n1" })
        );
    }

    #[test]
    fn bandwidth_value_rejects_non_digits() {
        let (mut app, _rx) = app_with_channel();
        app.modal.show_setup();

        update(&mut app, ModalMessage::NextField); // 带宽值
        update(&mut app, ModalMessage::Input('2'));
        update(&mut app, ModalMessage::Input('x'));
        update(&mut app, ModalMessage::Input('0'));

        let Some(Modal::Setup(ref form)) = app.modal.active else {
            panic!("setup dialog should still be open");
        };
        assert_eq!(form.bandwidth_value, "20");
    }

    #[test]
    fn candidate_confirm_sends_one_message_per_checked_row() {
        let (mut app, mut rx) = app_with_channel();
        app.overlay.request_removal().unwrap();
        drain(&mut rx);

        let event = InboundEvent::new(
            InboundKind::RemovalCandidates,
            json!({ "a": ["123", "456", "789"] }),
        );
        crate::update::overlay::handle_inbound(&mut app, &event);

        update(&mut app, ModalMessage::Toggle); // 123
        update(&mut app, ModalMessage::CursorDown);
        update(&mut app, ModalMessage::CursorDown);
        update(&mut app, ModalMessage::Toggle); // 789
        update(&mut app, ModalMessage::Confirm);

        assert!(app.modal.active.is_none());
        assert_eq!(
            app.status_message.as_deref(),
            Some("remove VN path message · remove VN path message")
        );

        let sent = drain(&mut rx);
        assert_eq!(
            sent.iter()
                .map(OutboundEvent::event_type)
                .collect::<Vec<_>>(),
            ["vnRemovemsgHandle", "vnRemovemsgHandle"]
        );
    }

    #[test]
    fn candidate_confirm_with_nothing_checked_just_closes() {
        let (mut app, mut rx) = app_with_channel();
        app.overlay.request_query().unwrap();
        drain(&mut rx);

        let event = InboundEvent::new(InboundKind::QueryCandidates, json!({ "a": ["123"] }));
        crate::update::overlay::handle_inbound(&mut app, &event);

        update(&mut app, ModalMessage::Confirm);

        assert!(app.modal.active.is_none());
        assert!(app.status_message.is_none());
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn constraint_confirm_sends_endpoints_then_constraints() {
        let (mut app, mut rx) = app_with_channel();
        app.overlay.request_update().unwrap();
        drain(&mut rx);

        let candidates = InboundEvent::new(InboundKind::UpdateCandidates, json!({ "a": ["123"] }));
        crate::update::overlay::handle_inbound(&mut app, &candidates);
        update(&mut app, ModalMessage::Toggle);
        update(&mut app, ModalMessage::Confirm);
        drain(&mut rx);

        let constraints = InboundEvent::new(
            InboundKind::UpdateConstraints,
            json!({ "a": ["BandWidth", "200", "CostType", "TE", "SRC", "RT1", "DST", "RT2"] }),
        );
        crate::update::overlay::handle_inbound(&mut app, &constraints);
        update(&mut app, ModalMessage::Confirm);

        assert_eq!(app.status_message.as_deref(), Some("update VN path message"));
        assert_eq!(
            drain(&mut rx)
                .iter()
                .map(OutboundEvent::event_type)
                .collect::<Vec<_>>(),
            ["pceTopovSetSrc", "pceTopovSetDst", "vnUpdatemsgHandleConstr"]
        );
    }
}
