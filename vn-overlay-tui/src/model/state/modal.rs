//! 弹窗/对话框状态

use vn_overlay_core::{CandidateForm, ConstraintForm, SetupForm};

/// 弹窗枚举：每种弹窗携带自己的全部数据
pub enum Modal {
    /// 候选 VN 列表（查询 / 移除 / 更新共用）
    Candidates(CandidateForm),
    /// 约束编辑（更新流程第二步）
    Constraints(ConstraintForm),
    /// 新建路径
    Setup(SetupForm),
    /// 帮助
    Help,
}

/// 弹窗容器：管理当前活动的弹窗
pub struct ModalState {
    /// None = 无弹窗，Some = 有弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self { active: None }
    }

    pub fn show(&mut self, modal: Modal) {
        self.active = Some(modal);
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn show_candidates(&mut self, form: CandidateForm) {
        self.show(Modal::Candidates(form));
    }

    pub fn show_constraints(&mut self, form: ConstraintForm) {
        self.show(Modal::Constraints(form));
    }

    pub fn show_setup(&mut self) {
        self.show(Modal::Setup(SetupForm::new()));
    }

    pub fn show_help(&mut self) {
        self.show(Modal::Help);
    }
}

impl Default for ModalState {
    fn default() -> Self {
        Self::new()
    }
}
