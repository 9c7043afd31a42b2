/*!
# Record Definitions

Records read from the distribution input file and written to the outcome file.

## Input (`<recipient>;<amount>`)

One transfer per line, no header. The recipient is kept verbatim; the amount is a
non-negative decimal integer of arbitrary size.

## Output (`<transaction id or empty>,<original input line>`)

One line per processed input line, appended. The original line is echoed byte for
byte, so the output mixes `,` and `;` delimiters.
*/

use num_bigint::BigUint;
use num_traits::Zero;
use std::fmt;
use std::str::FromStr;

/// Field delimiter of the input file
pub const INPUT_DELIMITER: u8 = b';';

/// Separator between the transaction id and the echoed input line
pub const OUTPUT_SEPARATOR: char = ',';

// ================================================================================================
// Token Amount
// ================================================================================================

/// Arbitrary-precision, non-negative token amount.
///
/// Distribution amounts routinely exceed `u64::MAX` once token decimals are applied,
/// so the value is never narrowed to a fixed-width integer. Encoders that need a
/// fixed width use [`TokenAmount::to_le_bytes_fixed`], which refuses to truncate.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TokenAmount(BigUint);

impl TokenAmount {
    pub fn new(value: BigUint) -> Self {
        Self(value)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Little-endian encoding padded to `N` bytes, or `None` if the value needs more
    pub fn to_le_bytes_fixed<const N: usize>(&self) -> Option<[u8; N]> {
        let bytes = self.0.to_bytes_le();
        if bytes.len() > N {
            return None;
        }
        let mut out = [0u8; N];
        out[..bytes.len()].copy_from_slice(&bytes);
        Some(out)
    }
}

impl From<u64> for TokenAmount {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<BigUint> for TokenAmount {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTokenAmountError;

impl fmt::Display for ParseTokenAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("amount must be a non-empty string of decimal digits")
    }
}

impl std::error::Error for ParseTokenAmountError {}

impl FromStr for TokenAmount {
    type Err = ParseTokenAmountError;

    /// Accepts decimal digits only: no sign, no separators, no surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseTokenAmountError);
        }
        BigUint::from_str(s)
            .map(Self)
            .map_err(|_| ParseTokenAmountError)
    }
}

// ================================================================================================
// Transfer Request
// ================================================================================================

/// One parsed line of the input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    /// Destination account identifier, exactly as written in the file
    pub recipient: String,

    /// Amount of tokens to transfer
    pub amount: TokenAmount,

    /// The input line without its terminator, echoed into the outcome file
    pub raw_line: String,

    /// 1-based line number in the input file
    pub line: u64,
}

/// Render one outcome line (without terminator)
pub fn format_outcome_line(transaction_id: Option<&str>, raw_line: &str) -> String {
    format!(
        "{}{}{}",
        transaction_id.unwrap_or_default(),
        OUTPUT_SEPARATOR,
        raw_line
    )
}

// ================================================================================================
// Tests
// ================================================================================================
