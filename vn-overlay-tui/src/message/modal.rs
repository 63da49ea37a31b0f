//! 弹窗子消息

/// 弹窗消息
#[derive(Debug, Clone, Copy)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,
    /// 下一个字段
    NextField,
    /// 上一个字段
    PrevField,
    /// 上移光标（候选列表）
    CursorUp,
    /// 下移光标（候选列表）
    CursorDown,
    /// 切换复选框 / 选项
    Toggle,
    /// 字符输入
    Input(char),
    /// 退格
    Backspace,
    /// 确认
    Confirm,
}
