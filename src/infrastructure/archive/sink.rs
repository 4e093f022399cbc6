use std::io::{self, Write};

use bytes::Bytes;
use tokio::sync::mpsc;

/// `Write` adapter that forwards archive bytes into a bounded tokio channel.
///
/// The channel bound is the backpressure mechanism: when the HTTP consumer
/// is slow, `blocking_send` parks the producing thread until capacity frees
/// up. A dropped receiver (client disconnect) surfaces as `BrokenPipe`, which
/// aborts the in-progress batch.
///
/// Must be driven from a blocking thread (`spawn_blocking`); `blocking_send`
/// panics on an async runtime worker.
pub struct ChannelSink {
    tx: mpsc::Sender<Result<Bytes, io::Error>>,
}

impl ChannelSink {
    pub fn new(tx: mpsc::Sender<Result<Bytes, io::Error>>) -> Self {
        Self { tx }
    }
}

impl Write for ChannelSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.tx
            .blocking_send(Ok(Bytes::copy_from_slice(buf)))
            .map_err(|_| {
                io::Error::new(io::ErrorKind::BrokenPipe, "archive consumer disconnected")
            })?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
