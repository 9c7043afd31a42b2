/*!
# Reading & Writing

Input parsing is fail-fast: the first malformed line aborts the whole read and no
requests are returned. The outcome file is only ever appended to.
*/

use crate::{
    errors::{CsvError, CsvResult},
    schemas::{
        format_outcome_line, TokenAmount, TransferRequest, INPUT_DELIMITER, OUTPUT_SEPARATOR,
    },
};
use csv::{Position, ReaderBuilder, StringRecord};
use solana_sdk::signature::Signature;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, LineWriter, Read, Write};
use std::path::Path;
use std::str::FromStr;

// ================================================================================================
// Input
// ================================================================================================

/// Read every transfer request from a distribution input file
pub fn read_transfer_requests<P: AsRef<Path>>(path: P) -> CsvResult<Vec<TransferRequest>> {
    let file = File::open(path)?;
    read_transfer_requests_from(file)
}

/// Read transfer requests from any reader, in input order
pub fn read_transfer_requests_from<R: Read>(mut reader: R) -> CsvResult<Vec<TransferRequest>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut rdr = ReaderBuilder::new()
        .delimiter(INPUT_DELIMITER)
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut requests = Vec::new();
    let mut record = StringRecord::new();

    while rdr.read_record(&mut record)? {
        let (line, raw_line) = source_line(&text, record.position());
        requests.push(parse_request(&record, raw_line, line)?);
    }

    Ok(requests)
}

/// Line number and text (without terminator) of the record starting at `position`.
///
/// The reader stamps a record with the offset where it started scanning, which lies
/// before any blank lines it skipped on the way.
fn source_line<'t>(text: &'t str, position: Option<&Position>) -> (u64, &'t str) {
    let (mut line, mut start) = position
        .map(|p| (p.line(), p.byte() as usize))
        .unwrap_or((1, 0));

    let bytes = text.as_bytes();
    while let Some(&b) = bytes.get(start) {
        match b {
            b'\n' => line += 1,
            b'\r' => {}
            _ => break,
        }
        start += 1;
    }

    let rest = &text[start..];
    let raw = &rest[..rest.find('\n').unwrap_or(rest.len())];
    (line, raw.strip_suffix('\r').unwrap_or(raw))
}

fn parse_request(record: &StringRecord, raw_line: &str, line: u64) -> CsvResult<TransferRequest> {
    if record.len() != 2 {
        return Err(CsvError::InvalidFormat {
            line,
            reason: format!(
                "expected 2 fields separated by '{}', found {}",
                INPUT_DELIMITER as char,
                record.len()
            ),
        });
    }

    let amount_str = &record[1];
    let amount = TokenAmount::from_str(amount_str).map_err(|_| CsvError::InvalidAmount {
        line,
        value: amount_str.to_string(),
    })?;

    Ok(TransferRequest {
        recipient: record[0].to_string(),
        amount,
        raw_line: raw_line.to_string(),
        line,
    })
}

// ================================================================================================
// Output
// ================================================================================================

/// Append-only sink for outcome lines.
///
/// Each line reaches the file before `append` returns, so an interrupted run still
/// leaves a record of every transfer it attempted.
pub struct OutcomeWriter {
    inner: LineWriter<File>,
    lines_written: usize,
}

impl OutcomeWriter {
    /// Open (creating if needed) `path` in append mode
    pub fn open_append<P: AsRef<Path>>(path: P) -> CsvResult<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            inner: LineWriter::new(file),
            lines_written: 0,
        })
    }

    pub fn append(&mut self, transaction_id: Option<&str>, raw_line: &str) -> CsvResult<()> {
        writeln!(self.inner, "{}", format_outcome_line(transaction_id, raw_line))?;
        self.inner.flush()?;
        self.lines_written += 1;
        Ok(())
    }

    /// Lines appended through this writer (not counting earlier runs)
    pub fn lines_written(&self) -> usize {
        self.lines_written
    }
}

/// One line of a previously written outcome file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedOutcome {
    pub transaction_id: Option<Signature>,
    pub raw_line: String,
    pub line: u64,
}

/// Read back an outcome file so its transaction ids can be re-checked
pub fn read_recorded_outcomes<P: AsRef<Path>>(path: P) -> CsvResult<Vec<RecordedOutcome>> {
    let reader = BufReader::new(File::open(path)?);
    let mut outcomes = Vec::new();

    for (index, text) in reader.lines().enumerate() {
        let text = text?;
        let line = index as u64 + 1;
        let text = text.strip_suffix('\r').unwrap_or(&text);
        if text.is_empty() {
            continue;
        }

        // The echoed input line may itself contain the separator; only the first one counts.
        let (id, raw_line) = text
            .split_once(OUTPUT_SEPARATOR)
            .ok_or_else(|| CsvError::InvalidFormat {
                line,
                reason: format!("missing '{OUTPUT_SEPARATOR}' separator"),
            })?;

        let transaction_id = if id.is_empty() {
            None
        } else {
            Some(
                Signature::from_str(id).map_err(|_| CsvError::InvalidTransactionId {
                    line,
                    value: id.to_string(),
                })?,
            )
        };

        outcomes.push(RecordedOutcome {
            transaction_id,
            raw_line: raw_line.to_string(),
            line,
        });
    }

    Ok(outcomes)
}

// ================================================================================================
// Tests
// ================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::signature::{Keypair, Signer};
    use std::fs;
    use tempfile::NamedTempFile;

    fn input_file(contents: &str) -> NamedTempFile {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), contents).unwrap();
        file
    }

    #[test]
    fn test_read_preserves_order_and_raw_lines() {
        let file = input_file("acct1;100\nacct2;9999999999999999999\n");
        let requests = read_transfer_requests(file.path()).unwrap();

        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].recipient, "acct1");
        assert_eq!(requests[0].amount, TokenAmount::from(100u64));
        assert_eq!(requests[0].raw_line, "acct1;100");
        assert_eq!(requests[0].line, 1);
        assert_eq!(requests[1].recipient, "acct2");
        assert_eq!(requests[1].amount.to_string(), "9999999999999999999");
        assert_eq!(requests[1].raw_line, "acct2;9999999999999999999");
        assert_eq!(requests[1].line, 2);
    }

    #[test]
    fn test_reread_is_identical() {
        let file = input_file("a;1\nb;2\nc;3");
        let first = read_transfer_requests(file.path()).unwrap();
        let second = read_transfer_requests(file.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_crlf_and_blank_lines() {
        let file = input_file("a;1\r\n\r\nb;2\r\n");
        let requests = read_transfer_requests(file.path()).unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].raw_line, "a;1");
        assert_eq!(requests[1].raw_line, "b;2");
        assert_eq!(requests[1].line, 3);
    }

    #[test]
    fn test_line_numbers_count_skipped_blank_lines() {
        let file = input_file("a;1\n\n\nb;2\n\nbroken\n");
        let err = read_transfer_requests(file.path()).unwrap_err();
        assert!(matches!(err, CsvError::InvalidFormat { line: 6, .. }), "{err}");
    }

    #[test]
    fn test_raw_line_is_the_source_text() {
        let requests = read_transfer_requests_from("\r\nacct;007\r\n x;1".as_bytes()).unwrap();
        assert_eq!(requests[0].raw_line, "acct;007");
        assert_eq!(requests[0].line, 2);
        assert_eq!(requests[0].amount, TokenAmount::from(7u64));
        assert_eq!(requests[1].raw_line, " x;1");
        assert_eq!(requests[1].recipient, " x");
    }

    #[test]
    fn test_quotes_are_kept_verbatim() {
        let file = input_file("\"acct\";7\n");
        let requests = read_transfer_requests(file.path()).unwrap();
        assert_eq!(requests[0].recipient, "\"acct\"");
        assert_eq!(requests[0].raw_line, "\"acct\";7");
    }

    #[test]
    fn test_missing_delimiter_fails_whole_read() {
        let file = input_file("a;1\nbroken\nc;3\n");
        let err = read_transfer_requests(file.path()).unwrap_err();
        assert!(matches!(err, CsvError::InvalidFormat { line: 2, .. }), "{err}");
    }

    #[test]
    fn test_extra_field_fails() {
        let file = input_file("a;1;2\n");
        let err = read_transfer_requests(file.path()).unwrap_err();
        assert!(matches!(err, CsvError::InvalidFormat { line: 1, .. }));
    }

    #[test]
    fn test_non_numeric_amount_fails() {
        let file = input_file("a;1\nb;12x\n");
        let err = read_transfer_requests(file.path()).unwrap_err();
        match err {
            CsvError::InvalidAmount { line, value } => {
                assert_eq!(line, 2);
                assert_eq!(value, "12x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_transfer_requests(dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, CsvError::Io(_)));
    }

    #[test]
    fn test_writer_appends_across_opens() {
        let file = NamedTempFile::new().unwrap();

        for _ in 0..2 {
            let mut writer = OutcomeWriter::open_append(file.path()).unwrap();
            writer.append(Some("sig"), "acct1;100").unwrap();
            writer.append(None, "acct2;5").unwrap();
            assert_eq!(writer.lines_written(), 2);
        }

        let contents = fs::read_to_string(file.path()).unwrap();
        assert_eq!(contents, "sig,acct1;100\n,acct2;5\nsig,acct1;100\n,acct2;5\n");
    }

    #[test]
    fn test_read_recorded_outcomes() {
        let signature = Keypair::new().sign_message(b"airdrop");
        let file = input_file(&format!("{signature},a;1\n,b;2\n\n{signature},c,d;3\n"));

        let outcomes = read_recorded_outcomes(file.path()).unwrap();
        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].transaction_id, Some(signature));
        assert_eq!(outcomes[0].raw_line, "a;1");
        assert_eq!(outcomes[1].transaction_id, None);
        assert_eq!(outcomes[2].raw_line, "c,d;3");
        assert_eq!(outcomes[2].line, 4);
    }

    #[test]
    fn test_read_recorded_outcomes_rejects_garbage_id() {
        let file = input_file("not-a-signature,a;1\n");
        let err = read_recorded_outcomes(file.path()).unwrap_err();
        assert!(matches!(err, CsvError::InvalidTransactionId { line: 1, .. }));
    }
}
