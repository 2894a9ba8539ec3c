//! HTTP 服务：把核心库的规则函数包装成几个 JSON 接口
//!
//! | Method | Path | 说明 |
//! |--------|------|------|
//! | POST | `/start` | 开一局新游戏 |
//! | POST | `/move` | 人类走子，body 为 `{pile, remove}` |
//! | POST | `/computer-move` | 让电脑走一步 |
//! | GET | `/status` | 当前局面 |
//! | GET | `/health` | 健康检查 |
//!
//! 其他路径按静态文件处理。

pub mod config;
pub mod error;

use std::path::Path;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::{get, post},
};
use parking_lot::Mutex;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::{debug, info};

use misere_nim_core::{GameConfig, GameState, GameView, MoveRequest, Side, apply_move, computer_turn};

use crate::error::ApiError;

// 整个进程只有一局游戏
struct Session {
    game: GameState,
    rng: StdRng,
}

/// 服务器全局状态
// 每个请求在整个"检查-执行-返回"过程中都持有 session 锁
pub struct AppState {
    session: Mutex<Session>,
    config: GameConfig,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    /// 按配置立即开一局。`seed` 为空时使用系统熵。
    pub fn new(config: GameConfig, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let game = GameState::new(&config, &mut rng);
        AppState::with_game(config, game, rng)
    }

    /// 从指定局面开始，便于复现某个对局
    pub fn with_game(config: GameConfig, game: GameState, rng: StdRng) -> Self {
        AppState {
            session: Mutex::new(Session { game, rng }),
            config,
        }
    }

    /// 当前游戏状态的一份拷贝
    pub fn snapshot(&self) -> GameState {
        self.session.lock().game.clone()
    }
}

pub fn create_router(state: SharedState, static_dir: impl AsRef<Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/start", post(handle_start))
        .route("/move", post(handle_human_move))
        .route("/computer-move", post(handle_computer_move))
        .route("/status", get(handle_status))
        .route("/health", get(handle_health_check))
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .with_state(state)
}

async fn handle_health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "OK" }))
}

async fn handle_start(State(state): State<SharedState>) -> Json<GameView> {
    let mut session = state.session.lock();
    let Session { game, rng } = &mut *session;
    *game = GameState::new(&state.config, rng);

    info!(
        "新对局开始: 石子堆 {:?} (共 {} 颗), 补充池 {}, 先手 {:?}",
        game.piles,
        game.total_stones(),
        game.reserve,
        game.turn
    );
    let message = match game.turn {
        Side::Human => "You start first!",
        Side::Computer => "Computer starts first!",
    };
    Json(GameView::from(&*game).with_message(message))
}

async fn handle_human_move(
    State(state): State<SharedState>,
    body: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<GameView>, ApiError> {
    // 缺字段、非整数或超出 i64 的值都按非法走子返回 400
    let Json(req) = body?;
    let mut session = state.session.lock();
    let outcome = apply_move(&mut session.game, Side::Human, req.pile, req.remove, None)?;
    debug!("人类走子: 第 {} 堆取 {} 颗, 补充 {}", outcome.record.pile, outcome.record.removed, outcome.replenished);

    let message = if outcome.finished {
        info!("对局结束: 人类取走最后一颗，电脑获胜");
        "Computer wins! You took the last stone."
    } else {
        "Your move completed!"
    };
    Ok(Json(GameView::from(&session.game).with_message(message)))
}

async fn handle_computer_move(State(state): State<SharedState>) -> Result<Json<GameView>, ApiError> {
    let mut session = state.session.lock();
    let Session { game, rng } = &mut *session;
    let outcome = computer_turn(game, &state.config, rng)?;
    debug!(
        "电脑走子: 第 {} 堆取 {} 颗 ({:?}), 补充 {}",
        outcome.record.pile, outcome.record.removed, outcome.record.kind, outcome.replenished
    );

    let message = if outcome.finished {
        info!("对局结束: 电脑取走最后一颗，人类获胜");
        "You win! Computer took the last stone."
    } else {
        "Computer moved!"
    };
    Ok(Json(GameView::from(&*game).with_computer_move(&outcome).with_message(message)))
}

async fn handle_status(State(state): State<SharedState>) -> Json<GameView> {
    Json(GameView::from(&state.session.lock().game))
}
