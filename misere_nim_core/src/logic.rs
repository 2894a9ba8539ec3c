use crate::config::GameConfig;
use crate::error::{EngineError, MoveError};
use crate::policy::choose_computer_move;
use crate::state::*;
use rand::Rng;

/// 通过合法性检查的走子
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidMove {
    pub pile: usize,
    pub remove: u32,
}

/// 一步走子执行后的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub record: MoveRecord,
    pub replenished: bool, // 本步是否从补充池补了一颗
    pub finished: bool,    // 本步是否结束了对局
}

// --- 核心规则函数 ---

/// 所有堆都为空即为终局。补充池不参与判断。
pub fn is_terminal(piles: &[u32]) -> bool {
    piles.iter().all(|&p| p == 0)
}

/// 检查 `side` 从第 `pile` 堆取 `remove` 颗是否合法
///
/// 人类和电脑的走子都经过这里。参数使用有符号整数，
/// 这样 `-1` 之类的输入能被当作越界下标拒绝，而不是在更外层出错。
/// 本函数不修改任何状态。
pub fn check_move(state: &GameState, side: Side, pile: i64, remove: i64) -> Result<ValidMove, MoveError> {
    if state.is_finished() {
        return Err(MoveError::GameAlreadyFinished);
    }
    if state.turn != side {
        return Err(MoveError::WrongTurn);
    }
    let pile = usize::try_from(pile)
        .ok()
        .filter(|&i| i < state.piles.len())
        .ok_or(MoveError::InvalidPileIndex)?;
    if remove < 1 || remove > state.max_remove as i64 {
        return Err(MoveError::InvalidRemoveCount);
    }
    let remove = remove as u32;
    if remove > state.piles[pile] {
        return Err(MoveError::InsufficientStones);
    }
    Ok(ValidMove { pile, remove })
}

/// 从补充池给刚走过的那一堆补一颗石子。补充池为空时什么都不做。
///
/// 返回是否发生了补充。
pub fn replenish(piles: &mut [u32], reserve: &mut u32, pile: usize) -> bool {
    if *reserve == 0 {
        return false;
    }
    piles[pile] += 1;
    *reserve -= 1;
    true
}

/// 执行一步走子
///
/// 这是唯一会修改 `GameState` 的函数。先做合法性检查，
/// 检查失败时状态保持原样。之后依次：
/// - 从指定堆取走石子；
/// - 补充池非空时给同一堆补一颗；
/// - 记录走子；
/// - 终局时判走子方的对手获胜（取走最后一颗的人输），否则交换行动方。
pub fn apply_move(
    state: &mut GameState,
    side: Side,
    pile: i64,
    remove: i64,
    kind: Option<MoveKind>,
) -> Result<MoveOutcome, MoveError> {
    let ValidMove { pile, remove } = check_move(state, side, pile, remove)?;

    state.piles[pile] -= remove;
    let replenished = replenish(&mut state.piles, &mut state.reserve, pile);

    let record = MoveRecord { actor: side, pile, removed: remove, kind };
    state.history.push(record.clone());

    let finished = is_terminal(&state.piles);
    if finished {
        state.status = GameStatus::Finished;
        state.winner = Some(side.opponent());
    } else {
        state.turn = side.opponent();
    }

    Ok(MoveOutcome { record, replenished, finished })
}

/// 让电脑走一步：选子后仍走 `apply_move`，与人类共用同一套检查
pub fn computer_turn<R: Rng + ?Sized>(
    state: &mut GameState,
    config: &GameConfig,
    rng: &mut R,
) -> Result<MoveOutcome, EngineError> {
    if state.is_finished() {
        return Err(MoveError::GameAlreadyFinished.into());
    }
    if state.turn != Side::Computer {
        return Err(MoveError::WrongTurn.into());
    }

    let chosen = choose_computer_move(&state.piles, state.max_remove, config.memo_threshold, rng)?;
    let outcome = apply_move(
        state,
        Side::Computer,
        chosen.pile as i64,
        chosen.remove as i64,
        Some(chosen.kind),
    )?;
    Ok(outcome)
}

// --- 单元测试 ---
