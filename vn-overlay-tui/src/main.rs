//! VN Path Overlay TUI
//!
//! Elm Architecture (TEA) layout:
//! - **Model**: application state (`model/`)
//! - **Message**: event messages (`message/`)
//! - **Update**: state transitions (`update/`)
//! - **View**: UI rendering (`view/`)
//! - **Event**: input handling (`event/`)
//! - **Backend**: messaging channel and services (`backend/`)
//!
//! Startup order: terminal first, then the backend channel, then the app;
//! the terminal is restored no matter how the main loop ends.

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;

use backend::{ConfigService, LocalConfigService};
use util::{init_terminal, restore_terminal};
use view::theme;

fn main() -> Result<(), anyhow::Error> {
    // 1. 加载配置（主题等）
    let config = LocalConfigService::new().load()?;
    theme::set_theme_index(config.theme_index());

    // 2. 后台任务需要运行时；UI 主循环保持同步
    let runtime = tokio::runtime::Runtime::new()?;
    let (sink, mut inbound) = backend::connect(runtime.handle());

    // 3. 初始化终端
    let mut terminal = init_terminal()?;

    // 4. 创建应用实例
    let mut app = model::App::new(sink);
    app.activate();

    // 5. 运行主循环
    let result = app::run(&mut terminal, &mut app, &mut inbound);

    // 6. 离开前撤掉所有高亮
    app.deactivate();

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    result
}
