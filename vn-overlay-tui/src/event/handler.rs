//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{ActionMessage, AppMessage, DeviceMessage, ModalMessage};
use crate::model::{App, Modal, OverlayAction};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        Event::Resize(_, _) => AppMessage::Noop,                   // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key)
        || (key.modifiers.is_empty() && key.code == KeyCode::Char('?'))
    {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::CLEAR_HIGHLIGHT.matches(&key) {
        return AppMessage::ClearHighlight;
    }

    if DefaultKeymap::HIGHLIGHT_DEVICES.matches(&key) {
        return AppMessage::HighlightDevices;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::ClearStatus;
    }

    // 数字键 0-5: 直达覆盖层操作
    if key.modifiers.is_empty() {
        if let KeyCode::Char(ch) = key.code {
            if let Some(action) = OverlayAction::from_digit(ch) {
                return AppMessage::Actions(ActionMessage::Invoke(action));
            }
        }
    }

    // Tab / ←→: 切换焦点面板
    if key.modifiers.is_empty() && key.code == KeyCode::Tab {
        return AppMessage::ToggleFocus;
    }
    if DefaultKeymap::FOCUS_LEFT.matches(&key) || DefaultKeymap::FOCUS_RIGHT.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    // 根据焦点位置处理按键
    if app.focus.is_devices() {
        handle_device_keys(key)
    } else {
        handle_action_keys(key)
    }
}

/// 处理设备面板的按键
fn handle_device_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Devices(DeviceMessage::SelectPrevious),

        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Devices(DeviceMessage::SelectNext),

        // 空格 或 Enter: 切换选中
        KeyCode::Char(' ') | KeyCode::Enter => AppMessage::Devices(DeviceMessage::ToggleSelected),

        _ => AppMessage::Noop,
    }
}

/// 处理操作面板的按键
fn handle_action_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Actions(ActionMessage::SelectPrevious),

        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Actions(ActionMessage::SelectNext),

        // Enter: 执行
        KeyCode::Enter => AppMessage::Actions(ActionMessage::InvokeCurrent),

        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        (KeyModifiers::NONE, KeyCode::Esc) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        _ => {}
    }

    // 根据弹窗类型处理按键
    let Some(ref modal) = app.modal.active else {
        return AppMessage::Noop;
    };

    match modal {
        Modal::Candidates(_) => handle_candidate_keys(key),
        Modal::Setup(_) | Modal::Constraints(_) => handle_form_keys(key),
        Modal::Help => {
            // 帮助弹窗只响应关闭按键
            match key.code {
                KeyCode::Enter | KeyCode::Esc => AppMessage::Modal(ModalMessage::Close),
                _ => AppMessage::Noop,
            }
        }
    }
}

/// 处理候选列表弹窗的按键
fn handle_candidate_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Modal(ModalMessage::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Modal(ModalMessage::CursorDown),
        KeyCode::Char(' ') => AppMessage::Modal(ModalMessage::Toggle),
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        _ => AppMessage::Noop,
    }
}

/// 处理表单类弹窗（新建路径 / 约束编辑）的按键
fn handle_form_keys(key: KeyEvent) -> AppMessage {
    match (key.modifiers, key.code) {
        // Tab / Shift+Tab: 字段间移动
        (KeyModifiers::NONE, KeyCode::Tab) | (KeyModifiers::NONE, KeyCode::Down) => {
            AppMessage::Modal(ModalMessage::NextField)
        }
        (KeyModifiers::SHIFT, KeyCode::BackTab) | (KeyModifiers::NONE, KeyCode::Up) => {
            AppMessage::Modal(ModalMessage::PrevField)
        }

        // 空格: 切换复选框 / 选项
        (KeyModifiers::NONE, KeyCode::Char(' ')) => AppMessage::Modal(ModalMessage::Toggle),

        // Enter: 确认
        (KeyModifiers::NONE, KeyCode::Enter) => AppMessage::Modal(ModalMessage::Confirm),

        // 退格
        (KeyModifiers::NONE, KeyCode::Backspace) => AppMessage::Modal(ModalMessage::Backspace),

        // 字符输入
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(ch)) => {
            AppMessage::Modal(ModalMessage::Input(ch))
        }

        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::ChannelSink;
    use tokio::sync::mpsc;

    fn test_app() -> App {
        let (tx, _rx) = mpsc::unbounded_channel();
        App::new(ChannelSink::new(tx))
    }

    #[test]
    fn digits_jump_straight_to_overlay_actions() {
        let app = test_app();
        let key = Event::Key(KeyEvent::new(KeyCode::Char('4'), KeyModifiers::NONE));

        assert!(matches!(
            handle_event(key, &app),
            AppMessage::Actions(ActionMessage::Invoke(OverlayAction::RemovePath))
        ));
    }

    #[test]
    fn digits_are_swallowed_while_a_modal_is_open() {
        let mut app = test_app();
        app.modal.show_help();
        let key = Event::Key(KeyEvent::new(KeyCode::Char('4'), KeyModifiers::NONE));

        assert!(matches!(handle_event(key, &app), AppMessage::Noop));
    }
}
