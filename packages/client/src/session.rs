//! TCP client session.

use std::time::Duration;

use songcast_shared::{protocol::SongPayload, time::Clock};
use tokio::{
    io::{AsyncRead, AsyncReadExt},
    net::TcpStream,
};

use crate::{
    assembler::RecordAssembler,
    config::ClientConfig,
    domain::{FavoriteFilter, Verdict},
    error::ClientError,
    formatter::SongFormatter,
};

/// Read buffer size; a record fits in one read in practice
const READ_BUFFER_SIZE: usize = 1024;

/// Connect to the server and print songs until the user exits or the
/// connection is lost.
///
/// Returns `Ok(())` when the user pressed Ctrl+C. `clock` stamps each
/// received song.
pub async fn run_client_session(
    config: &ClientConfig,
    clock: &dyn Clock,
) -> Result<(), ClientError> {
    let server_addr = config.server_addr();
    let stream = TcpStream::connect(&server_addr)
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

    tracing::info!("Connected to song server at {}", server_addr);
    print!(
        "{}",
        SongFormatter::format_connected(&server_addr, &config.favorite_genre)
    );

    let filter = FavoriteFilter::new(config.favorite_genre.clone(), config.only_favorites);
    let mut hidden = 0usize;

    let receive = receive_records(stream, config.quiet_period, |payload| {
        match render_record(&payload, &filter, clock) {
            Some(output) => print!("{}", output),
            None => {
                hidden += 1;
                tracing::debug!("Skipped '{}' ({} hidden so far)", payload.info, hidden);
            }
        }
    });

    tokio::select! {
        error = receive => Err(error),
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Interrupted");
            Ok(())
        }
    }
}

/// Text shown for one received song, or `None` when the filter hides it.
pub fn render_record(
    payload: &SongPayload,
    filter: &FavoriteFilter,
    clock: &dyn Clock,
) -> Option<String> {
    match filter.classify(payload) {
        Verdict::Hidden => None,
        verdict => Some(SongFormatter::format_now_playing(
            payload,
            verdict,
            clock.now_millis(),
        )),
    }
}

/// Read records from `reader` and hand each one to `on_record`.
///
/// Bytes are buffered until `quiet_period` passes without new data, then
/// flushed as one record. Runs until the stream ends and returns why:
/// [`ClientError::Disconnected`] on EOF (after flushing anything buffered),
/// [`ClientError::ReadFailed`] on a read error.
pub async fn receive_records<R, F>(
    mut reader: R,
    quiet_period: Duration,
    mut on_record: F,
) -> ClientError
where
    R: AsyncRead + Unpin,
    F: FnMut(SongPayload),
{
    let mut assembler = RecordAssembler::new();
    let mut buf = [0u8; READ_BUFFER_SIZE];

    loop {
        let read = if assembler.is_empty() {
            reader.read(&mut buf).await
        } else {
            match tokio::time::timeout(quiet_period, reader.read(&mut buf)).await {
                Ok(read) => read,
                Err(_) => {
                    if let Some(payload) = assembler.flush() {
                        on_record(payload);
                    }
                    continue;
                }
            }
        };

        match read {
            Ok(0) => {
                if let Some(payload) = assembler.flush() {
                    on_record(payload);
                }
                return ClientError::Disconnected;
            }
            Ok(n) => assembler.push(&buf[..n]),
            Err(e) => {
                tracing::warn!("Read error: {}", e);
                return ClientError::ReadFailed(e.to_string());
            }
        }
    }
}
