/// Exit details a CLI command handler returns to `main`, which styles the
/// message and terminates the process with the code.
#[derive(Debug)]
pub struct CmdExit {
    pub code: i32,
    pub message: Option<String>,
}

impl CmdExit {
    /// A successful exit carrying the given message.
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            code: exitcode::OK,
            message: Some(message.into()),
        }
    }

    /// A failed exit (code 1) carrying the given message.
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            code: 1,
            message: Some(message.into()),
        }
    }
}
