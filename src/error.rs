//! Process-level error type.
//!
//! Exit-code conventions used throughout the tool:
//!
//! - `2`: bad input or configuration (missing file, unknown columns, invalid flags)
//! - `3`: not enough usable data to fit
//! - `4`: numerical/fit failure (optimizer never saw a valid candidate, etc.)
//!
//! Numerical faults *inside* the objective are not errors; they are mapped to
//! a penalty cost so a long-running search is never aborted by one bad
//! candidate. `AppError` is reserved for conditions where the run as a whole
//! cannot continue.

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
