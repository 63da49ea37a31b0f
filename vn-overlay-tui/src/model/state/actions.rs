//! 操作面板状态

/// 覆盖层提供的操作，数字键 0-5 可直接触发
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayAction {
    QueryPath,
    SetSource,
    SetDestination,
    CreatePath,
    RemovePath,
    UpdatePath,
}

impl OverlayAction {
    /// 面板显示顺序，同时也是数字键顺序
    pub fn all() -> Vec<OverlayAction> {
        vec![
            Self::QueryPath,
            Self::SetSource,
            Self::SetDestination,
            Self::CreatePath,
            Self::RemovePath,
            Self::UpdatePath,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::QueryPath => "Query the path",
            Self::SetSource => "Set sources",
            Self::SetDestination => "Set destinations",
            Self::CreatePath => "Set path",
            Self::RemovePath => "Remove path",
            Self::UpdatePath => "Update path",
        }
    }

    pub fn digit(self) -> char {
        match self {
            Self::QueryPath => '0',
            Self::SetSource => '1',
            Self::SetDestination => '2',
            Self::CreatePath => '3',
            Self::RemovePath => '4',
            Self::UpdatePath => '5',
        }
    }

    pub fn from_digit(ch: char) -> Option<Self> {
        match ch {
            '0' => Some(Self::QueryPath),
            '1' => Some(Self::SetSource),
            '2' => Some(Self::SetDestination),
            '3' => Some(Self::CreatePath),
            '4' => Some(Self::RemovePath),
            '5' => Some(Self::UpdatePath),
            _ => None,
        }
    }
}

/// 操作面板状态
pub struct ActionsState {
    pub items: Vec<OverlayAction>,
    pub cursor: usize,
}

impl ActionsState {
    pub fn new() -> Self {
        Self {
            items: OverlayAction::all(),
            cursor: 0,
        }
    }

    pub fn select_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.cursor + 1 < self.items.len() {
            self.cursor += 1;
        }
    }

    pub fn current(&self) -> Option<OverlayAction> {
        self.items.get(self.cursor).copied()
    }
}

impl Default for ActionsState {
    fn default() -> Self {
        Self::new()
    }
}
