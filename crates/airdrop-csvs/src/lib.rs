/*!
# Airdrop File Formats

Input and output formats of the batch airdrop tool.

## Input file

UTF-8, one transfer per line, no header:

```text
<recipient>;<amount>
```

- `recipient`: destination account, kept verbatim
- `amount`: non-negative decimal integer of any size

Empty lines are ignored. Any other malformed line fails the whole read.

## Output file

Appended on every run, one line per input line processed:

```text
<transaction id or empty>,<original input line>
```

## Usage

```rust,no_run
use airdrop_csvs::{read_transfer_requests, CsvResult, OutcomeWriter};

fn example() -> CsvResult<()> {
    let requests = read_transfer_requests("recipients.csv")?;
    let mut writer = OutcomeWriter::open_append("outcomes.csv")?;

    for request in &requests {
        writer.append(None, &request.raw_line)?;
    }

    Ok(())
}
```
*/

pub mod errors;
pub mod files;
pub mod schemas;

pub use errors::{CsvError, CsvResult};
pub use files::{
    read_recorded_outcomes, read_transfer_requests, read_transfer_requests_from,
    OutcomeWriter, RecordedOutcome,
};
pub use schemas::{
    format_outcome_line, ParseTokenAmountError, TokenAmount, TransferRequest, INPUT_DELIMITER,
    OUTPUT_SEPARATOR,
};
