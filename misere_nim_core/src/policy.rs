use crate::error::EngineError;
use crate::logic::is_terminal;
use crate::search::{child, legal_moves, minimax, SearchCache};
use crate::state::MoveKind;
use rand::Rng;
use rand::seq::IndexedRandom;

/// 电脑选出的走子，尚未执行
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChosenMove {
    pub pile: usize,
    pub remove: u32,
    pub kind: MoveKind,
}

/// 随机策略：在非空的堆中均匀选一堆，再在 `[1, min(max_remove, 堆大小)]` 中均匀选取子数
pub fn random_move<R: Rng + ?Sized>(piles: &[u32], max_remove: u32, rng: &mut R) -> Result<ChosenMove, EngineError> {
    let candidates: Vec<usize> = piles.iter().enumerate().filter(|&(_, &p)| p > 0).map(|(i, _)| i).collect();
    let &pile = candidates.choose(rng).ok_or(EngineError::NoLegalMove)?;
    let remove = rng.random_range(1..=piles[pile].min(max_remove));

    Ok(ChosenMove { pile, remove, kind: MoveKind::Random })
}

/// 搜索策略：按 (堆下标, 取子数) 升序逐个评估，取第一个达到最大值的走法
///
/// 石子总数不超过 `memo_threshold` 时用原始递归，否则用记忆化搜索，两者结果相同。
pub fn smart_move(piles: &[u32], max_remove: u32, memo_threshold: u32) -> Result<ChosenMove, EngineError> {
    if is_terminal(piles) {
        return Err(EngineError::NoLegalMove);
    }

    let total: u32 = piles.iter().sum();
    let mut cache = (total > memo_threshold).then(|| SearchCache::new(max_remove));

    let mut best: Option<(i8, usize, u32)> = None;
    for (i, r) in legal_moves(piles, max_remove) {
        let next = child(piles, i, r);
        let value = match cache.as_mut() {
            Some(cache) => cache.value(&next, false),
            None => minimax(&next, false, max_remove),
        };
        // 严格大于才替换，相同分值保留先枚举到的走法
        if best.is_none_or(|(v, _, _)| value > v) {
            best = Some((value, i, r));
        }
    }

    let (_, pile, remove) = best.ok_or(EngineError::NoLegalMove)?;
    Ok(ChosenMove { pile, remove, kind: MoveKind::Smart })
}

/// 电脑的选子策略：先抽一次随机数决定用哪个策略，一半概率随机，一半概率搜索
pub fn choose_computer_move<R: Rng + ?Sized>(
    piles: &[u32],
    max_remove: u32,
    memo_threshold: u32,
    rng: &mut R,
) -> Result<ChosenMove, EngineError> {
    if rng.random_bool(0.5) {
        random_move(piles, max_remove, rng)
    } else {
        smart_move(piles, max_remove, memo_threshold)
    }
}
