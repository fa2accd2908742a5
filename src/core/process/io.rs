// forge-env: Environment-loading shim for forge
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Output capture for child processes.
//!
//! ```text
//! capture_child()
//!   try_join!( child.wait(), read_to_end(stdout), read_to_end(stderr) )
//!   --> ProcessOutput { termination, stdout, stderr }
//! ```
//!
//! Both pipes are drained while waiting so a child that fills one of them
//! cannot block on write.

use std::io;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Child;
use tracing::trace;

use super::builder::ProcessOutput;

/// Waits for `child` to exit and collects everything it wrote.
pub(super) async fn capture_child(name: &str, child: &mut Child) -> io::Result<ProcessOutput> {
    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    let (status, stdout, stderr) = tokio::try_join!(
        child.wait(),
        read_stream(stdout, name, "stdout"),
        read_stream(stderr, name, "stderr"),
    )?;

    Ok(ProcessOutput::new(status.into(), stdout, stderr))
}

/// Reads a stream to EOF. A stream that was not piped reads as empty.
async fn read_stream<R>(
    reader: Option<R>,
    process_name: &str,
    stream_name: &str,
) -> io::Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let mut buffer = Vec::new();
    if let Some(mut reader) = reader {
        let n = reader.read_to_end(&mut buffer).await?;
        trace!(process = %process_name, stream = %stream_name, bytes = n, "drained");
    }
    Ok(buffer)
}
