use ethtx::TxError;

/// Errors reported by the command-line driver.
#[derive(Debug)]
pub enum CliError {
    /// Signing, encoding or decoding failed.
    Tx(TxError),
    /// A flag value could not be parsed.
    InvalidArgument(String),
    /// `--from` does not match the key that signed.
    SenderMismatch { expected: String, actual: String },
    /// JSON output failed.
    Json(serde_json::Error),
}

impl CliError {
    /// Process exit code: the transaction error code, or 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Tx(e) => u8::try_from(e.code()).unwrap_or(1),
            _ => 1,
        }
    }
}

impl From<TxError> for CliError {
    fn from(e: TxError) -> Self {
        Self::Tx(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Tx(e) => write!(f, "{}", e),
            CliError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            CliError::SenderMismatch { expected, actual } => {
                write!(f, "Sender mismatch: expected {}, key signs as {}", expected, actual)
            }
            CliError::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for CliError {}
