//! Backend 层：消息通道与服务
//!
//! 与 UI 完全解耦。出站事件经 [`ChannelSink`] 进入 tokio 通道，
//! 由运行时上的后端任务消费；入站事件从同一任务流回 UI 主循环。
//!
//! 真实部署里后端任务会接网络连接；当前实现是一个进程内的
//! 模拟服务（[`StubVnBackend`]），返回固定的候选与约束数据。

mod channel;
mod config_service;
mod stub;

pub use channel::{connect, ChannelSink};
pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use stub::{StubVnBackend, VnBackend};
