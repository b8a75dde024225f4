use std::io::{self, BufWriter, IsTerminal, StdoutLock};

/// Returns `true` if stderr is a terminal (interactive).
pub fn stderr_is_tty() -> bool {
    io::stderr().is_terminal()
}

pub fn stdout_writer() -> BufWriter<StdoutLock<'static>> {
    BufWriter::new(io::stdout().lock())
}
