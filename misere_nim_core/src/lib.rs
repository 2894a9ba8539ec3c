//! # 反向取石子（Misère Nim）核心逻辑库
//!
//! 这个 `core` crate 包含游戏状态、走子规则、补充池机制、
//! 电脑的选子策略以及客户端-服务器之间的消息定义。
//! 它不做任何 I/O，也不持有全局状态：所有操作都显式接收一个 `GameState`，
//! 随机数来源也由调用方传入，方便服务器和测试复用。

mod config;
mod error;
mod logic;
mod message;
mod policy;
mod search;
mod state;

pub use config::*;

pub use error::*;

pub use logic::*;

pub use message::*;

pub use policy::*;

pub use search::*;

pub use state::*;
