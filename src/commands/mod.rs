//! CLI commands for tagmatch

pub mod dispatch;
pub mod list;
pub mod recommend;
pub mod score;
