//! 设备面板状态

use vn_overlay_core::Selection;

/// 设备列表中的一行
#[derive(Debug, Clone)]
pub struct DeviceRow {
    pub id: String,
    pub selected: bool,
}

/// 设备面板状态
///
/// `order` 记录勾选顺序：端点消息按用户勾选的先后发送。
pub struct DevicesState {
    pub items: Vec<DeviceRow>,
    pub cursor: usize,
    order: Vec<String>,
}

impl DevicesState {
    pub fn new() -> Self {
        let mut state = Self {
            items: Vec::new(),
            cursor: 0,
            order: Vec::new(),
        };

        // 开发阶段：加载拓扑模拟数据
        state.load_mock_data();

        state
    }

    /// 加载模拟拓扑节点
    fn load_mock_data(&mut self) {
        self.items = ["RT1", "RT2", "RT3", "RT4", "RT5", "RT6"]
            .into_iter()
            .map(|id| DeviceRow {
                id: id.to_string(),
                selected: false,
            })
            .collect();
    }

    pub fn select_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.cursor + 1 < self.items.len() {
            self.cursor += 1;
        }
    }

    /// 切换光标所在设备的选中状态，同时维护勾选顺序
    pub fn toggle_current(&mut self) {
        let Some(row) = self.items.get_mut(self.cursor) else {
            return;
        };
        row.selected = !row.selected;

        if row.selected {
            self.order.push(row.id.clone());
        } else {
            self.order.retain(|id| *id != row.id);
        }
    }

    /// 当前选择，按勾选顺序
    pub fn selection(&self) -> Selection {
        Selection::from_ids(self.order.clone())
    }
}

impl Default for DevicesState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_follows_toggle_order() {
        let mut devices = DevicesState::new();
        devices.select_next();
        devices.select_next();
        devices.toggle_current(); // RT3
        devices.cursor = 0;
        devices.toggle_current(); // RT1

        assert_eq!(devices.selection().ids(), ["RT3", "RT1"]);
    }

    #[test]
    fn untoggling_removes_from_the_order() {
        let mut devices = DevicesState::new();
        devices.toggle_current();
        devices.toggle_current();

        assert!(devices.selection().is_empty());
    }
}
