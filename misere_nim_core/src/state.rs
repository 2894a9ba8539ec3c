use crate::config::GameConfig;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// 对局双方
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    /// 对手
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Finished,
}

/// 电脑走子的来源：随机策略或搜索策略
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MoveKind {
    Random,
    Smart,
}

/// 一步已完成的走子记录，写入后不再修改
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoveRecord {
    pub actor: Side,
    pub pile: usize,
    pub removed: u32,
    // 人类走子为 None
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<MoveKind>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub piles: Vec<u32>,
    pub reserve: u32, // 补充池剩余石子
    pub turn: Side,   // 下一步该谁走
    pub status: GameStatus,
    // 只有 status == Finished 时才有值
    pub winner: Option<Side>,
    pub history: Vec<MoveRecord>,
    // 单步最多可取的石子数，跟随开局配置
    pub max_remove: u32,
}

impl GameState {
    /// 按配置开一局新游戏
    ///
    /// - 每堆石子数在 `[pile_min, pile_max]` 内独立均匀抽取。
    /// - 补充池设为 `initial_reserve`。
    /// - 先手方随机决定。
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Self {
        let piles = (0..config.pile_count)
            .map(|_| rng.random_range(config.pile_min..=config.pile_max))
            .collect();
        let turn = if rng.random_bool(0.5) { Side::Human } else { Side::Computer };

        GameState::with_piles(piles, config.initial_reserve, turn, config.max_remove)
    }

    /// 用给定的局面构造一局进行中的游戏，主要给测试和回放使用
    pub fn with_piles(piles: Vec<u32>, reserve: u32, turn: Side, max_remove: u32) -> Self {
        GameState {
            piles,
            reserve,
            turn,
            status: GameStatus::InProgress,
            winner: None,
            history: Vec::new(),
            max_remove,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    pub fn total_stones(&self) -> u32 {
        self.piles.iter().sum()
    }
}
