use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// 最多几堆
pub const MAX_PILE_COUNT: usize = 5;
/// 单堆开局石子数加上补充池的上限。超过后搜索的局面数增长过快，
/// 电脑一步就会占住服务器线程很久。
pub const MAX_PILE_HEIGHT: u32 = 20;

/// 开局参数
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    pub pile_count: usize,
    pub pile_min: u32, // 每堆最少石子数（含）
    pub pile_max: u32, // 每堆最多石子数（含）
    pub initial_reserve: u32,
    pub max_remove: u32, // 单步最多取几颗
    /// 场上石子总数超过该值时，搜索改用带缓存的版本。
    /// 两种搜索结果完全一致，缓存只影响耗时。
    pub memo_threshold: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            pile_count: 3,
            pile_min: 3,
            pile_max: 7,
            initial_reserve: 5,
            max_remove: 3,
            memo_threshold: 12,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pile_count == 0 {
            return Err(ConfigError::NoPiles);
        }
        if self.pile_count > MAX_PILE_COUNT {
            return Err(ConfigError::TooManyPiles { count: self.pile_count, max: MAX_PILE_COUNT });
        }
        if self.pile_min > self.pile_max {
            return Err(ConfigError::EmptyPileRange { min: self.pile_min, max: self.pile_max });
        }
        if self.max_remove == 0 {
            return Err(ConfigError::ZeroMaxRemove);
        }
        // 补充池只会补到刚走过的那一堆，单堆最高不会超过 pile_max + initial_reserve
        let height = self.pile_max.saturating_add(self.initial_reserve);
        if height > MAX_PILE_HEIGHT {
            return Err(ConfigError::PilesTooHigh { height, max: MAX_PILE_HEIGHT });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_configs() {
        let no_piles = GameConfig { pile_count: 0, ..GameConfig::default() };
        assert!(matches!(no_piles.validate(), Err(ConfigError::NoPiles)));

        let inverted = GameConfig { pile_min: 8, pile_max: 2, ..GameConfig::default() };
        assert!(matches!(inverted.validate(), Err(ConfigError::EmptyPileRange { min: 8, max: 2 })));

        let zero_cap = GameConfig { max_remove: 0, ..GameConfig::default() };
        assert!(matches!(zero_cap.validate(), Err(ConfigError::ZeroMaxRemove)));
    }

    #[test]
    fn test_rejects_oversized_boards() {
        let many = GameConfig { pile_count: MAX_PILE_COUNT + 1, ..GameConfig::default() };
        assert!(matches!(many.validate(), Err(ConfigError::TooManyPiles { count: 6, max: 5 })));

        let tall = GameConfig { pile_max: 1000, ..GameConfig::default() };
        assert!(matches!(tall.validate(), Err(ConfigError::PilesTooHigh { height: 1005, max: 20 })));

        // 堆本身不高，但补充池太大
        let deep_reserve = GameConfig { initial_reserve: 14, ..GameConfig::default() };
        assert!(matches!(deep_reserve.validate(), Err(ConfigError::PilesTooHigh { height: 21, .. })));

        let overflow = GameConfig { pile_max: u32::MAX, initial_reserve: u32::MAX, ..GameConfig::default() };
        assert!(matches!(overflow.validate(), Err(ConfigError::PilesTooHigh { height: u32::MAX, .. })));

        // 正好在上限上
        let edge = GameConfig { pile_count: MAX_PILE_COUNT, pile_max: 15, initial_reserve: 5, ..GameConfig::default() };
        assert!(edge.validate().is_ok());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"pile_count": 4, "initial_reserve": 0}"#).unwrap();
        assert_eq!(config.pile_count, 4);
        assert_eq!(config.initial_reserve, 0);
        assert_eq!(config.pile_max, 7);
        assert_eq!(config.max_remove, 3);
    }
}
