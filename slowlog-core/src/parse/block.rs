use crate::error::{HeaderField, SlowlogError};
use crate::parse::numeric::{parse_float, parse_int};
use crate::parse::{ParseOptions, TrailingBlock};
use crate::record::SlowlogRecord;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Lines every block starts with: id, timestamp, duration, command.
pub const HEADER_LINES: usize = 4;

/// Streaming parser yielding one record per block.
///
/// Iteration ends after the first error.
pub struct BlockParser<R> {
    reader: R,
    path: PathBuf,
    options: ParseOptions,
    buf: Vec<u8>,
    line_no: usize,
    // lines consumed by the block in progress
    position: usize,
    current: SlowlogRecord,
    done: bool,
}

/// Opens `path` and returns a parser over its lines.
pub fn parse_file(
    path: &Path,
    options: ParseOptions,
) -> Result<BlockParser<BufReader<File>>, SlowlogError> {
    let file = File::open(path).map_err(|e| SlowlogError::open(path, e))?;
    Ok(BlockParser::new(BufReader::new(file), path, options))
}

/// Parser over in-memory or otherwise unnamed input.
pub fn parse_reader<R: BufRead>(reader: R, options: ParseOptions) -> BlockParser<R> {
    BlockParser::new(reader, "<input>", options)
}

impl<R: BufRead> BlockParser<R> {
    /// `path` only labels diagnostics; nothing is opened.
    pub fn new(reader: R, path: impl Into<PathBuf>, options: ParseOptions) -> Self {
        Self {
            reader,
            path: path.into(),
            options,
            buf: Vec::new(),
            line_no: 0,
            position: 0,
            current: SlowlogRecord::default(),
            done: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of lines read so far.
    pub fn line_number(&self) -> usize {
        self.line_no
    }

    fn read_line(&mut self) -> Result<Option<String>, SlowlogError> {
        self.buf.clear();
        let n = self
            .reader
            .read_until(b'\n', &mut self.buf)
            .map_err(|e| SlowlogError::read(&self.path, e))?;

        if n == 0 {
            return Ok(None);
        }
        self.line_no += 1;

        let line = self.buf.strip_suffix(b"\n").unwrap_or(&self.buf[..]);
        let line = line.strip_suffix(b"\r").unwrap_or(line);

        Ok(Some(String::from_utf8_lossy(line).into_owned()))
    }

    fn feed(&mut self, line: String) -> Result<Option<SlowlogRecord>, SlowlogError> {
        if self.position >= HEADER_LINES {
            if let Some(next_id) = parse_int(&line).filter(|v| self.is_adjacent_id(*v)) {
                let finished = std::mem::take(&mut self.current);
                tracing::debug!(
                    path = %self.path.display(),
                    line = self.line_no,
                    id = finished.id,
                    next_id,
                    "block boundary"
                );

                self.current.id = next_id;
                self.position = 1;
                return Ok(Some(finished));
            }
        }

        self.position += 1;
        match self.position {
            1 => self.current.id = self.header(&line, HeaderField::Id, parse_int)?,
            2 => self.current.timestamp = self.header(&line, HeaderField::Timestamp, parse_int)?,
            3 => {
                self.current.duration_micros =
                    self.header(&line, HeaderField::Duration, parse_float)?
            }
            4 => self.current.command = line,
            _ => self.current.push_argument(line),
        }

        Ok(None)
    }

    fn is_adjacent_id(&self, value: i64) -> bool {
        let id = self.current.id;
        id.checked_sub(1) == Some(value) || id.checked_add(1) == Some(value)
    }

    fn header<T>(
        &self,
        line: &str,
        field: HeaderField,
        parse: fn(&str) -> Option<T>,
    ) -> Result<T, SlowlogError> {
        parse(line).ok_or_else(|| SlowlogError::InvalidField {
            path: self.path.clone(),
            line: self.line_no,
            field,
            text: line.to_string(),
        })
    }

    fn finish(&mut self) -> Option<SlowlogRecord> {
        let consumed = std::mem::take(&mut self.position);
        let last = std::mem::take(&mut self.current);

        if consumed == 0 {
            return None;
        }

        if consumed < HEADER_LINES {
            tracing::debug!(
                path = %self.path.display(),
                lines = consumed,
                "dropping incomplete block at end of input"
            );
            return None;
        }

        match self.options.trailing_block {
            TrailingBlock::Flush => Some(last),
            TrailingBlock::Drop => {
                tracing::debug!(
                    path = %self.path.display(),
                    id = last.id,
                    "dropping trailing block"
                );
                None
            }
        }
    }
}

impl<R: BufRead> Iterator for BlockParser<R> {
    type Item = Result<SlowlogRecord, SlowlogError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let line = match self.read_line() {
                Ok(Some(line)) => line,
                Ok(None) => {
                    self.done = true;
                    return self.finish().map(Ok);
                }
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            };

            match self.feed(line) {
                Ok(Some(record)) => return Some(Ok(record)),
                Ok(None) => {}
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }
    }
}
