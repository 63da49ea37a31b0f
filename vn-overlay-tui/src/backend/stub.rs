//! 模拟后端服务
//!
//! 对出站事件返回固定数据，覆盖四条响应路径：
//! 三种候选列表和约束 token 流。其余事件只收不回。

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use vn_overlay_core::{InboundEvent, InboundKind, OutboundEvent, QueryMode};

/// 后端服务 trait
#[async_trait]
pub trait VnBackend: Send + Sync {
    /// 处理一条出站事件，必要时产生回复
    async fn handle(&self, event: OutboundEvent) -> Option<InboundEvent>;
}

/// 固定数据的模拟后端
pub struct StubVnBackend;

impl StubVnBackend {
    pub fn new() -> Self {
        Self
    }

    fn candidates() -> serde_json::Value {
        json!({ "a": ["123", "456", "789"] })
    }

    fn constraint_tokens() -> serde_json::Value {
        json!({
            "a": [
                "VnName", "MaheshNetwork",
                "BandWidth", "200",
                "CostType", "TE",
                "SRC", "RT1", "RT2", "RT3",
                "DST", "RT1", "RT2", "RT3",
            ]
        })
    }
}

impl Default for StubVnBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VnBackend for StubVnBackend {
    async fn handle(&self, event: OutboundEvent) -> Option<InboundEvent> {
        match event {
            OutboundEvent::Query { mode } => {
                let kind = match mode {
                    QueryMode::Show => InboundKind::QueryCandidates,
                    QueryMode::Remove => InboundKind::RemovalCandidates,
                    QueryMode::Update => InboundKind::UpdateCandidates,
                };
                Some(InboundEvent::new(kind, Self::candidates()))
            }

            OutboundEvent::UpdateHandle { vnid } => {
                log::debug!("stub: constraint round trip for vn {vnid}");
                Some(InboundEvent::new(
                    InboundKind::UpdateConstraints,
                    Self::constraint_tokens(),
                ))
            }

            other => {
                log::debug!("stub: consumed {}", other.event_type());
                None
            }
        }
    }
}

/// 后端任务主循环：消费出站事件，把回复送回 UI
pub async fn serve<B: VnBackend>(
    backend: B,
    mut out_rx: UnboundedReceiver<OutboundEvent>,
    in_tx: UnboundedSender<InboundEvent>,
) {
    while let Some(event) = out_rx.recv().await {
        if let Some(reply) = backend.handle(event).await {
            if in_tx.send(reply).is_err() {
                // UI 端已关闭
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_modes_map_to_their_reply_kinds() {
        let backend = StubVnBackend::new();

        let cases = [
            (QueryMode::Show, InboundKind::QueryCandidates),
            (QueryMode::Remove, InboundKind::RemovalCandidates),
            (QueryMode::Update, InboundKind::UpdateCandidates),
        ];
        for (mode, expected) in cases {
            let reply = tokio_test::block_on(backend.handle(OutboundEvent::Query { mode }))
                .expect("query must produce a reply");
            assert_eq!(reply.kind, expected);
        }
    }

    #[test]
    fn update_handle_produces_the_constraint_tokens() {
        let backend = StubVnBackend::new();

        let reply = tokio_test::block_on(backend.handle(OutboundEvent::UpdateHandle {
            vnid: "123".to_string(),
        }))
        .expect("update handle must produce a reply");

        assert_eq!(reply.kind, InboundKind::UpdateConstraints);
        assert_eq!(
            reply.payload.get("a").and_then(|a| a.as_array()).map(Vec::len),
            Some(14)
        );
    }

    #[test]
    fn fire_and_forget_events_get_no_reply() {
        let backend = StubVnBackend::new();

        assert!(tokio_test::block_on(backend.handle(OutboundEvent::Clear)).is_none());
        assert!(tokio_test::block_on(backend.handle(OutboundEvent::DeviceHighlight)).is_none());
    }
}
