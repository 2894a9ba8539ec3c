//! 穷举搜索
//!
//! 搜索只看石子堆本身，不模拟补充池，也不看历史记录。
//! 终局时按"轮到最大化方 → -1，轮到最小化方 → +1"打分。
//!
//! `minimax` 是不带任何剪枝和缓存的原始定义，石子总数一大就会指数爆炸。
//! `SearchCache` 对同一定义做了记忆化：局面的值只取决于各堆数目构成的多重集合
//! 和当前是哪一方，所以用排序后的堆作为键，结果与 `minimax` 完全相同。

use crate::logic::is_terminal;
use std::collections::HashMap;

/// 枚举所有合法走子，顺序为堆下标升序、取子数升序
pub fn legal_moves(piles: &[u32], max_remove: u32) -> impl Iterator<Item = (usize, u32)> + '_ {
    piles
        .iter()
        .enumerate()
        .flat_map(move |(i, &p)| (1..=p.min(max_remove)).map(move |r| (i, r)))
}

/// 复制一份局面并走一步，不修改原局面
pub fn child(piles: &[u32], pile: usize, remove: u32) -> Vec<u32> {
    let mut next = piles.to_vec();
    next[pile] -= remove;
    next
}

fn terminal_value(maximizing: bool) -> i8 {
    if maximizing { -1 } else { 1 }
}

/// 原始的极小化极大搜索
pub fn minimax(piles: &[u32], maximizing: bool, max_remove: u32) -> i8 {
    if is_terminal(piles) {
        return terminal_value(maximizing);
    }

    let values = legal_moves(piles, max_remove).map(|(i, r)| minimax(&child(piles, i, r), !maximizing, max_remove));
    if maximizing {
        values.max().unwrap_or(i8::MIN)
    } else {
        values.min().unwrap_or(i8::MAX)
    }
}

/// 记忆化版本的搜索，适用于较大的石子堆
#[derive(Debug, Default)]
pub struct SearchCache {
    max_remove: u32,
    table: HashMap<(Vec<u32>, bool), i8>,
}

impl SearchCache {
    pub fn new(max_remove: u32) -> Self {
        SearchCache { max_remove, table: HashMap::new() }
    }

    /// 已缓存的局面数
    #[cfg(test)]
    fn len(&self) -> usize {
        self.table.len()
    }

    pub fn value(&mut self, piles: &[u32], maximizing: bool) -> i8 {
        if is_terminal(piles) {
            return terminal_value(maximizing);
        }

        let mut key = piles.to_vec();
        key.sort_unstable();
        if let Some(&v) = self.table.get(&(key.clone(), maximizing)) {
            return v;
        }

        // 在排序后的局面上展开即可，子局面的值同样与顺序无关
        let mut best = if maximizing { i8::MIN } else { i8::MAX };
        let moves: Vec<(usize, u32)> = legal_moves(&key, self.max_remove).collect();
        for (i, r) in moves {
            let v = self.value(&child(&key, i, r), !maximizing);
            best = if maximizing { best.max(v) } else { best.min(v) };
        }

        self.table.insert((key, maximizing), best);
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legal_moves_order() {
        let moves: Vec<_> = legal_moves(&[2, 0, 4], 3).collect();
        assert_eq!(moves, vec![(0, 1), (0, 2), (2, 1), (2, 2), (2, 3)]);
        assert_eq!(legal_moves(&[0, 0], 3).count(), 0);
    }

    #[test]
    fn test_child_does_not_touch_parent() {
        let parent = vec![3, 4, 5];
        let next = child(&parent, 1, 2);
        assert_eq!(parent, vec![3, 4, 5]);
        assert_eq!(next, vec![3, 2, 5]);
    }

    #[test]
    fn test_terminal_values() {
        assert_eq!(minimax(&[0, 0, 0], true, 3), -1);
        assert_eq!(minimax(&[0, 0, 0], false, 3), 1);
    }

    #[test]
    fn test_small_positions() {
        // 最大化方只能走到空局面，轮到最小化方 → +1
        assert_eq!(minimax(&[1, 0, 0], true, 3), 1);
        assert_eq!(minimax(&[1, 0, 0], false, 3), -1);
        // 两堆各一颗：先走的一方只能留下一颗给对手
        assert_eq!(minimax(&[1, 1, 0], false, 3), 1);
        assert_eq!(minimax(&[0, 1, 1], true, 3), -1);
        // 单堆三颗，最大化方可以一次取完
        assert_eq!(minimax(&[3, 0, 0], true, 3), 1);
        // 单堆四颗取不完，也无法逼出好的结果
        assert_eq!(minimax(&[4], true, 3), -1);
    }

    #[test]
    fn test_cache_agrees_with_plain_search() {
        let mut cache = SearchCache::new(3);
        for a in 0..=4 {
            for b in 0..=4 {
                for c in 0..=2 {
                    let piles = [a, b, c];
                    for maximizing in [true, false] {
                        assert_eq!(
                            cache.value(&piles, maximizing),
                            minimax(&piles, maximizing, 3),
                            "piles {:?}, maximizing {}", piles, maximizing
                        );
                    }
                }
            }
        }
        assert!(cache.len() > 0);
    }

    #[test]
    fn test_cache_handles_full_size_board() {
        let mut cache = SearchCache::new(3);
        let v = cache.value(&[3, 5, 7], true);
        assert!(v == 1 || v == -1);
        // 换个顺序命中同一条缓存
        let size = cache.len();
        assert_eq!(cache.value(&[7, 3, 5], true), v);
        assert_eq!(cache.len(), size);
    }
}
