use crate::error::TransformResult;
use crate::event::Event;
use crate::pipeline::stats::PipelineStats;
use crate::transformer::Transformer;
use log::{debug, info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

// Lines that do not decode to a JSON object, including invalid UTF-8, are
// skipped. Only I/O failures end the run.
pub async fn run<T, R, W>(
    transformer: &T,
    mut reader: R,
    mut writer: W,
) -> TransformResult<PipelineStats>
where
    T: Transformer + ?Sized,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut stats = PipelineStats::default();
    let mut line = Vec::new();
    let mut line_number: u64 = 0;

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line).await? == 0 {
            break;
        }
        line_number += 1;
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        stats.received += 1;

        let event = match Event::from_slice(&line) {
            Ok(event) => event,
            Err(e) => {
                warn!("Skipping line {}: {}", line_number, e);
                stats.skipped += 1;
                continue;
            }
        };

        let output = transformer.transform(event);
        if output.len() > 1 {
            stats.fanned_out += 1;
        }

        for record in output {
            match record.to_message() {
                Some(message) => {
                    writer.write_all(message.to_json_line()?.as_bytes()).await?;
                    stats.emitted += 1;
                }
                None => {
                    debug!("Dropping unrouted record from line {}", line_number);
                    stats.unrouted += 1;
                }
            }
        }
    }

    writer.flush().await?;
    info!("Pipeline finished: {}", stats);
    Ok(stats)
}
