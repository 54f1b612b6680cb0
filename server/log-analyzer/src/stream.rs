//! JSON-lines processing: one record per input line, one JSON line out.
//!
//! Lines are read as raw bytes so a line that is not valid UTF-8 is just
//! another rejected record. Only failures of the streams themselves stop
//! processing.

use std::io::{BufRead, Write};

use crate::alert::{dispatch, AlertSink};
use crate::decode::decode_record;
use crate::error::AnalyzerError;
use crate::types::ErrorOutput;
use crate::analyze;

/// Counters for one run over a stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
  pub processed: u64,
  pub alerted: u64,
  pub rejected: u64,
}

/// Analyze every non-blank line of `input`, writing one result or error line
/// per record to `output`.
pub fn process_lines<R, W>(
  mut input: R,
  mut output: W,
  sink: &dyn AlertSink,
) -> Result<StreamStats, AnalyzerError>
where
  R: BufRead,
  W: Write,
{
  let mut stats = StreamStats::default();
  let mut buf = Vec::new();

  loop {
    buf.clear();
    if input.read_until(b'\n', &mut buf)? == 0 {
      break;
    }

    let line = buf.trim_ascii();
    if line.is_empty() {
      continue;
    }

    match decode_record(line) {
      Ok(record) => {
        let result = analyze(&record);
        dispatch(&result, sink);
        write_json(&mut output, &result)?;
        stats.processed += 1;
        if result.is_alert() {
          stats.alerted += 1;
        }
      }
      Err(e) => {
        tracing::debug!(error = %e, "rejected input line");
        write_json(&mut output, &ErrorOutput::new(e.to_string()))?;
        stats.rejected += 1;
      }
    }
  }

  output.flush()?;
  Ok(stats)
}

fn write_json<W, T>(output: &mut W, value: &T) -> Result<(), AnalyzerError>
where
  W: Write,
  T: serde::Serialize,
{
  serde_json::to_writer(&mut *output, value).map_err(|e| AnalyzerError::Io(e.into()))?;
  writeln!(output)?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::{self, Cursor};

  fn no_alerts(_: &str, _: &str) {}

  fn run(input: &[u8]) -> (StreamStats, Vec<String>) {
    let mut out = Vec::new();
    let stats = process_lines(Cursor::new(input), &mut out, &no_alerts).unwrap();
    let lines = String::from_utf8(out)
      .unwrap()
      .lines()
      .map(str::to_string)
      .collect();
    (stats, lines)
  }

  #[test]
  fn blank_lines_are_skipped() {
    let (stats, lines) = run(b"\n  \n{\"device_id\":\"a\"}\n\r\n");
    assert_eq!(stats.processed, 1);
    assert_eq!(lines.len(), 1);
  }

  #[test]
  fn last_line_without_newline_is_processed() {
    let (stats, lines) = run(br#"{"level":"ERROR","device_id":"a"}"#);
    assert_eq!(stats, StreamStats { processed: 1, alerted: 1, rejected: 0 });
    assert_eq!(lines.len(), 1);
  }

  #[test]
  fn invalid_utf8_line_is_rejected_and_stream_continues() {
    let mut input = Vec::new();
    input.extend_from_slice(b"{\"device_id\":\"a\"}\n");
    input.extend_from_slice(b"{\"level\":\"ERROR\",\"device_id\":\"b\",\"message\":\"\xff\xfe\"}\n");
    input.extend_from_slice(b"{\"level\":\"ERROR\",\"device_id\":\"c\",\"message\":\"boom\"}\n");

    let (stats, lines) = run(&input);
    assert_eq!(stats, StreamStats { processed: 2, alerted: 1, rejected: 1 });
    assert_eq!(lines.len(), 3);

    let err: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
    assert_eq!(err["error"], true);
    assert!(err["message"].as_str().unwrap().starts_with("invalid JSON"));

    let last: serde_json::Value = serde_json::from_str(&lines[2]).unwrap();
    assert_eq!(last["device_id"], "c");
    assert_eq!(last["alerts"][0], "Error detected: boom");
  }

  struct BrokenPipe;

  impl Write for BrokenPipe {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
      Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
      Ok(())
    }
  }

  #[test]
  fn output_failure_is_io_error() {
    let err = process_lines(Cursor::new(&b"{}\n"[..]), BrokenPipe, &no_alerts).unwrap_err();
    assert!(matches!(err, AnalyzerError::Io(_)), "{err}");
    assert!(!err.is_client_error());
  }

  struct FailingReader;

  impl io::Read for FailingReader {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
      Err(io::Error::new(io::ErrorKind::Other, "device gone"))
    }
  }

  #[test]
  fn input_failure_is_io_error() {
    let input = io::BufReader::new(FailingReader);
    let err = process_lines(input, Vec::new(), &no_alerts).unwrap_err();
    assert!(matches!(err, AnalyzerError::Io(_)), "{err}");
  }
}
