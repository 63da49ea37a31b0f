//! 应用主循环
//!
//! 每次循环：渲染 UI → 处理后端入站事件 → 轮询键盘事件（100ms 超时）。
//! 入站事件不阻塞 UI：通道里没有消息就继续轮询键盘。

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;
use vn_overlay_core::InboundEvent;

use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, inbound: &mut UnboundedReceiver<InboundEvent>) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 先消费后端入站事件
        while let Ok(event) = inbound.try_recv() {
            update::update(app, AppMessage::Inbound(event));
        }

        // 4. 轮询键盘事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 5. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 6. 更新状态
            update::update(app, msg);
        }
    }

    Ok(())
}
