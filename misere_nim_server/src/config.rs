//! 启动参数，全部来自环境变量
//!
//! | 变量 | 默认值 |
//! |------|--------|
//! | `NIM_HOST` | `0.0.0.0` |
//! | `NIM_PORT` | `5000` |
//! | `NIM_STATIC_DIR` | `static` |
//! | `NIM_SEED` | 无（使用系统熵） |
//! | `NIM_PILE_COUNT` / `NIM_PILE_MIN` / `NIM_PILE_MAX` / `NIM_RESERVE` | 见 `GameConfig::default` |
//!
//! 堆数不能超过 `MAX_PILE_COUNT`，`NIM_PILE_MAX + NIM_RESERVE` 不能超过 `MAX_PILE_HEIGHT`，否则启动失败。

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use misere_nim_core::{ConfigError, GameConfig};

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
    pub seed: Option<u64>, // 固定种子便于复现对局
    pub game: GameConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 5000,
            static_dir: PathBuf::from("static"),
            seed: None,
            game: GameConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源读取配置。无法解析的值退回默认值。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
            lookup(key).and_then(|v| v.trim().parse().ok())
        }

        let defaults = ServerConfig::default();
        let mut game = defaults.game;
        game.pile_count = parsed(&lookup, "NIM_PILE_COUNT").unwrap_or(game.pile_count);
        game.pile_min = parsed(&lookup, "NIM_PILE_MIN").unwrap_or(game.pile_min);
        game.pile_max = parsed(&lookup, "NIM_PILE_MAX").unwrap_or(game.pile_max);
        game.initial_reserve = parsed(&lookup, "NIM_RESERVE").unwrap_or(game.initial_reserve);
        game.validate()?;

        Ok(ServerConfig {
            host: parsed(&lookup, "NIM_HOST").unwrap_or(defaults.host),
            port: parsed(&lookup, "NIM_PORT").unwrap_or(defaults.port),
            static_dir: lookup("NIM_STATIC_DIR").map(PathBuf::from).unwrap_or(defaults.static_dir),
            seed: parsed(&lookup, "NIM_SEED"),
            game,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.addr(), "0.0.0.0:5000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.seed, None);
        assert_eq!(config.game, GameConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("NIM_HOST", "127.0.0.1"),
            ("NIM_PORT", "8080"),
            ("NIM_SEED", "42"),
            ("NIM_PILE_COUNT", "4"),
            ("NIM_RESERVE", "0"),
            ("NIM_STATIC_DIR", "/srv/nim"),
        ]))
        .unwrap();

        assert_eq!(config.addr(), "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.game.pile_count, 4);
        assert_eq!(config.game.initial_reserve, 0);
        assert_eq!(config.static_dir, PathBuf::from("/srv/nim"));
    }

    #[test]
    fn test_unparsable_values_fall_back() {
        let config = ServerConfig::from_lookup(lookup_from(&[("NIM_PORT", "abc"), ("NIM_SEED", "x")])).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_invalid_pile_range_rejected() {
        let result = ServerConfig::from_lookup(lookup_from(&[("NIM_PILE_MIN", "9"), ("NIM_PILE_MAX", "4")]));
        assert!(matches!(result, Err(ConfigError::EmptyPileRange { min: 9, max: 4 })));
    }

    #[test]
    fn test_oversized_board_rejected() {
        let result = ServerConfig::from_lookup(lookup_from(&[("NIM_PILE_MAX", "1000")]));
        assert!(matches!(result, Err(ConfigError::PilesTooHigh { height: 1005, .. })));

        let result = ServerConfig::from_lookup(lookup_from(&[("NIM_PILE_COUNT", "64")]));
        assert!(matches!(result, Err(ConfigError::TooManyPiles { count: 64, .. })));
    }
}
