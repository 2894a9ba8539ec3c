use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use url::Url;

use misere_nim_core::{GameView, MoveRequest, Winner};

/// 对服务器 HTTP 接口的简单封装
struct NimClient {
    http: reqwest::Client,
    base: Url,
}

impl NimClient {
    async fn post(&self, path: &str, body: Option<&MoveRequest>) -> Result<GameView, Box<dyn std::error::Error>> {
        let mut request = self.http.post(self.base.join(path)?);
        if let Some(body) = body {
            request = request.json(body);
        }
        Self::read_view(request.send().await?).await
    }

    async fn status(&self) -> Result<GameView, Box<dyn std::error::Error>> {
        Self::read_view(self.http.get(self.base.join("status")?).send().await?).await
    }

    async fn read_view(resp: reqwest::Response) -> Result<GameView, Box<dyn std::error::Error>> {
        if resp.status().is_success() {
            return Ok(resp.json::<GameView>().await?);
        }
        // 服务器的错误体为 {"error": "..."}
        let status = resp.status();
        let body: serde_json::Value = resp.json().await.unwrap_or_default();
        let message = body["error"].as_str().map(str::to_string).unwrap_or_else(|| status.to_string());
        Err(message.into())
    }
}

fn display(view: &GameView) {
    println!("\n============================");
    println!(" 补充池: 剩余 {} 颗", view.reserve);
    println!("============================");
    for (i, pile) in view.piles.iter().enumerate() {
        println!("第 {} 堆: {:<3} {}", i + 1, pile, "●".repeat(*pile as usize));
    }
    println!("============================");
    if let Some(m) = &view.computer_move {
        println!("电脑从第 {} 堆取走 {} 颗 ({:?})", m.pile + 1, m.remove, m.kind);
    }
    if let Some(message) = &view.message {
        println!("{}", message);
    }
    match view.winner {
        Some(Winner::Player) => println!("*** 你赢了！ ***"),
        Some(Winner::Computer) => println!("*** 电脑赢了 ***"),
        None if view.player_turn => println!("轮到你了"),
        None => println!("轮到电脑"),
    }
}

/// 解析 `take <堆号> <数量>` 的参数。界面上堆号从 1 开始，请求里从 0 开始。
/// 任意整数都照原样交给服务器判定，这里只保证换算不溢出。
fn parse_take(args: &[&str]) -> Option<MoveRequest> {
    match args {
        [pile, remove] => Some(MoveRequest {
            pile: pile.parse::<i64>().ok()?.saturating_sub(1),
            remove: remove.parse().ok()?,
        }),
        _ => None,
    }
}

/// 轮到电脑时替它请求一步
async fn let_computer_play(client: &NimClient, view: GameView) -> GameView {
    if view.player_turn || view.game_over {
        return view;
    }
    match client.post("computer-move", None).await {
        Ok(next) => {
            display(&next);
            next
        }
        Err(e) => {
            eprintln!("电脑走子失败: {}", e);
            view
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let server = std::env::var("NIM_SERVER_URL").unwrap_or_else(|_| "http://127.0.0.1:5000/".to_string());
    let mut base = Url::parse(&server)?;
    if !base.path().ends_with('/') {
        base.set_path(&format!("{}/", base.path()));
    }
    let client = NimClient { http: reqwest::Client::new(), base };

    println!("正在连接到: {}", client.base);
    match client.status().await {
        Ok(view) => display(&view),
        Err(e) => eprintln!("无法获取当前局面: {}", e),
    }

    let mut stdin = BufReader::new(tokio::io::stdin()).lines();

    println!("--- 反向取石子客户端 ---");
    println!("可用命令:");
    println!("  start                     - 开始新的一局");
    println!("  status                    - 查看当前局面");
    println!("  take <堆号> <数量>        - 从某一堆取 1~3 颗");
    println!("  cpu                       - 让电脑走一步");
    println!("  exit                      - 退出");

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = stdin.next_line().await? else { break };
        let parts: Vec<&str> = line.split_whitespace().collect();

        let result = match parts.first().copied() {
            Some("start") => client.post("start", None).await,
            Some("status") => client.status().await,
            Some("cpu") => client.post("computer-move", None).await,
            Some("take") => match parse_take(&parts[1..]) {
                Some(req) => client.post("move", Some(&req)).await,
                None => {
                    println!("用法: take <堆号> <数量>");
                    continue;
                }
            },
            Some("exit") => break,
            None => continue,
            Some(_) => {
                println!("未知命令: {}", line);
                continue;
            }
        };

        match result {
            Ok(view) => {
                display(&view);
                let_computer_play(&client, view).await;
            }
            Err(e) => println!("错误: {}", e),
        }
    }

    println!("再见!");
    Ok(())
}
