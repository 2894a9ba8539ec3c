use crate::logic::MoveOutcome;
use crate::state::{GameState, MoveKind, Side};
use serde::{Deserialize, Serialize};

// --- 客户端 -> 服务器 ---

/// 人类走子请求。用有符号整数接收，越界由规则层判定。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    pub pile: i64,
    pub remove: i64,
}

// --- 服务器 -> 客户端 ---

/// 对外展示的胜者，沿用前端使用的 "player" / "computer"
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Player,
    Computer,
}

impl From<Side> for Winner {
    fn from(side: Side) -> Self {
        match side {
            Side::Human => Winner::Player,
            Side::Computer => Winner::Computer,
        }
    }
}

/// 电脑刚走的那一步
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerMoveView {
    pub pile: usize,
    pub remove: u32,
    pub kind: MoveKind,
}

/// 每个接口返回的局面快照
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    pub piles: Vec<u32>,
    pub reserve: u32,
    pub player_turn: bool,
    pub game_over: bool,
    pub winner: Option<Winner>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computer_move: Option<ComputerMoveView>,
}

impl GameView {
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// 附上电脑这一步的信息，人类走子的结果不会附加
    pub fn with_computer_move(mut self, outcome: &MoveOutcome) -> Self {
        if let (Side::Computer, Some(kind)) = (outcome.record.actor, outcome.record.kind) {
            self.computer_move = Some(ComputerMoveView {
                pile: outcome.record.pile,
                remove: outcome.record.removed,
                kind,
            });
        }
        self
    }
}

impl From<&GameState> for GameView {
    fn from(state: &GameState) -> Self {
        GameView {
            piles: state.piles.clone(),
            reserve: state.reserve,
            player_turn: state.turn == Side::Human,
            game_over: state.is_finished(),
            winner: state.winner.map(Winner::from),
            message: None,
            computer_move: None,
        }
    }
}
