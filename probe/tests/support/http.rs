use std::{io, net::SocketAddr};

use axum::Router;
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};

/// テスト用のスタブHTTPサービス
pub struct StubServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<Result<(), io::Error>>,
}

impl StubServer {
    /// `/health` の完全なURLを返す
    pub fn health_url(&self) -> String {
        format!("http://{}/health", self.addr)
    }

    /// サーバーを停止し、バックグラウンドタスクの終了を待つ
    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        let _ = self.handle.await;
    }
}

/// 任意のRouterを実ポートにバインドして起動する
pub async fn spawn_stub(router: Router) -> StubServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async {
                let _ = rx.await;
            })
            .await
    });

    StubServer {
        addr,
        shutdown: Some(tx),
        handle,
    }
}

/// 誰もlistenしていないURLを返す（ポートを確保してすぐ解放する）
pub fn unreachable_health_url() -> String {
    let listener =
        std::net::TcpListener::bind("127.0.0.1:0").expect("failed to reserve test port");
    let port = listener
        .local_addr()
        .expect("failed to read test port")
        .port();
    drop(listener);
    format!("http://127.0.0.1:{}/health", port)
}
