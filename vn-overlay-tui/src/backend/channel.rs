//! 出站 / 入站消息通道

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use vn_overlay_core::{EventSink, InboundEvent, OutboundEvent, OverlayError, OverlayResult};

use super::stub::{serve, StubVnBackend};

/// 把出站事件写入 tokio 通道的 [`EventSink`] 实现
///
/// 发送不阻塞；通道关闭（后端任务退出）时返回错误。
#[derive(Clone)]
pub struct ChannelSink {
    tx: UnboundedSender<OutboundEvent>,
}

impl ChannelSink {
    pub fn new(tx: UnboundedSender<OutboundEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelSink {
    fn send(&self, event: OutboundEvent) -> OverlayResult<()> {
        log::debug!("outbound {}: {}", event.event_type(), event.payload());
        self.tx.send(event).map_err(|_| OverlayError::ChannelClosed)
    }
}

/// 建立通道并在运行时上启动后端任务
pub fn connect(handle: &Handle) -> (ChannelSink, UnboundedReceiver<InboundEvent>) {
    let (out_tx, out_rx) = mpsc::unbounded_channel();
    let (in_tx, in_rx) = mpsc::unbounded_channel();

    handle.spawn(serve(StubVnBackend::new(), out_rx, in_tx));

    (ChannelSink::new(out_tx), in_rx)
}
