//! TCP を使った Transport 実装
//!
//! ## 責務
//!
//! - 受け付けた `TcpStream` を保持し、ペイロードを書き込む
//! - 書き込み前にピアの切断（0 バイト読み込み）を検出する
//! - 送信タイムアウトを適用する
//!
//! クライアントからサーバーへ送られるデータは想定していないため、
//! 読み込んだバイトは破棄します。

use std::{io, time::Duration};

use async_trait::async_trait;
use tokio::{io::AsyncWriteExt, net::TcpStream, sync::Mutex};

use crate::domain::{DeliveryError, Transport};

/// Upper bound on inbound reads discarded per send, so a chatty peer cannot
/// keep the probe spinning.
const MAX_PROBE_READS: usize = 16;

/// Transport over one accepted TCP connection.
pub struct TcpTransport {
    /// `None` once closed
    stream: Mutex<Option<TcpStream>>,
    send_timeout: Duration,
}

impl TcpTransport {
    pub fn new(stream: TcpStream, send_timeout: Duration) -> Self {
        Self {
            stream: Mutex::new(Some(stream)),
            send_timeout,
        }
    }
}

#[async_trait]
impl Transport for TcpTransport {
    async fn send(&self, payload: &[u8]) -> Result<(), DeliveryError> {
        let mut guard = self.stream.lock().await;
        let stream = guard.as_mut().ok_or(DeliveryError::Closed)?;

        probe_peer_hangup(stream)?;

        match tokio::time::timeout(self.send_timeout, stream.write_all(payload)).await {
            Ok(result) => result.map_err(DeliveryError::from),
            Err(_) => Err(DeliveryError::Timeout(self.send_timeout)),
        }
    }

    async fn close(&self) {
        let mut guard = self.stream.lock().await;
        if let Some(mut stream) = guard.take() {
            // The peer may already be gone; the socket is released on drop either way.
            if let Err(e) = stream.shutdown().await {
                tracing::debug!("Shutdown of subscriber socket failed: {}", e);
            }
        }
    }
}

/// Detect an orderly hang-up by the peer without blocking.
///
/// A write to a socket whose peer has closed usually succeeds once before
/// the reset is observed; checking for EOF first lets the very next send
/// after the hang-up fail.
///
/// A subscriber that shuts down only its write half still reads EOF here and
/// is dropped as well. Subscribers never send, so a read-side EOF is taken
/// as a full close.
fn probe_peer_hangup(stream: &TcpStream) -> Result<(), DeliveryError> {
    let mut scratch = [0u8; 512];
    for _ in 0..MAX_PROBE_READS {
        match stream.try_read(&mut scratch) {
            Ok(0) => return Err(DeliveryError::PeerClosed),
            Ok(n) => tracing::trace!("Discarded {} unexpected bytes from subscriber", n),
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => return Ok(()),
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::{io::AsyncReadExt, net::TcpListener};

    async fn connected_pair() -> (TcpTransport, TcpStream) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let client = TcpStream::connect(addr).await.unwrap();
        let (server_side, _peer) = listener.accept().await.unwrap();
        (TcpTransport::new(server_side, Duration::from_secs(5)), client)
    }

    #[tokio::test]
    async fn test_send_writes_payload() {
        // テスト項目: send したペイロードがそのままクライアントに届く
        // given (前提条件):
        let (transport, mut client) = connected_pair().await;

        // when (操作):
        let result = transport.send("A – B\njazz\nhttp://x".as_bytes()).await;

        // then (期待する結果):
        assert!(result.is_ok());
        let mut buf = vec![0u8; 21];
        client.read_exact(&mut buf).await.unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "A – B\njazz\nhttp://x");
    }

    #[tokio::test]
    async fn test_send_after_close_fails() {
        // テスト項目: close 後の send は Closed エラーになる
        // given (前提条件):
        let (transport, _client) = connected_pair().await;
        transport.close().await;

        // when (操作):
        let result = transport.send(b"payload").await;

        // then (期待する結果):
        assert!(matches!(result, Err(DeliveryError::Closed)));
    }

    #[tokio::test]
    async fn test_close_is_idempotent_and_client_sees_eof() {
        // テスト項目: close を 2 回呼んでも問題なく、クライアントは EOF を受け取る
        // given (前提条件):
        let (transport, mut client) = connected_pair().await;

        // when (操作):
        transport.close().await;
        transport.close().await;

        // then (期待する結果):
        let mut buf = [0u8; 8];
        let n = tokio::time::timeout(Duration::from_secs(2), client.read(&mut buf))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(n, 0);
    }

    #[tokio::test]
    async fn test_send_fails_after_peer_hangup() {
        // テスト項目: ピアが切断した後の send は失敗する
        // given (前提条件):
        let (transport, client) = connected_pair().await;
        drop(client);
        tokio::time::sleep(Duration::from_millis(100)).await;

        // when (操作):
        let first = transport.send(b"one").await;
        let second = transport.send(b"two").await;

        // then (期待する結果):
        // 切断の検出は最初の送信で行われるのが通常だが、遅くとも 2 回目には失敗する
        assert!(first.is_err() || second.is_err());
    }

    #[tokio::test]
    async fn test_half_closed_peer_is_treated_as_closed() {
        // テスト項目: 書き込み側だけを閉じたピアも切断済みとして扱われる
        // given (前提条件):
        let (transport, mut client) = connected_pair().await;
        client.shutdown().await.unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;

        // when (操作):
        let result = transport.send(b"one").await;

        // then (期待する結果):
        assert!(matches!(result, Err(DeliveryError::PeerClosed)));
    }
}
