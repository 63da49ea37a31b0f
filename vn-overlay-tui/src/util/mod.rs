//! Util 层：终端初始化和恢复

mod terminal;

pub use terminal::{init_terminal, restore_terminal, Term};
