use thiserror::Error;

/// 走子被拒绝的原因。全部是调用方错误，发生时游戏状态保持不变。
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("Game is over")]
    GameAlreadyFinished,
    #[error("Not your turn")]
    WrongTurn,
    #[error("Invalid pile index")]
    InvalidPileIndex,
    #[error("Invalid remove count")]
    InvalidRemoveCount,
    #[error("Not enough stones")]
    InsufficientStones,
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    Move(#[from] MoveError),
    /// 所有堆都已为空却要求电脑走子，说明调用方的流程有 bug
    #[error("no legal move available: every pile is empty")]
    NoLegalMove,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("pile_count must be at least 1")]
    NoPiles,
    #[error("pile_count {count} exceeds the limit of {max}")]
    TooManyPiles { count: usize, max: usize },
    #[error("pile range is empty: min {min} > max {max}")]
    EmptyPileRange { min: u32, max: u32 },
    #[error("max_remove must be at least 1")]
    ZeroMaxRemove,
    #[error("pile_max + initial_reserve = {height} exceeds the limit of {max}")]
    PilesTooHigh { height: u32, max: u32 },
}
