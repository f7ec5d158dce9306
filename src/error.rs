use std::sync::atomic::{AtomicBool, Ordering};

use crate::token::{Token, Type};

static HAD_ERROR: AtomicBool = AtomicBool::new(false);
static HAD_RUNTIME_ERROR: AtomicBool = AtomicBool::new(false);

/// Checks if a compile error (scan/parse/resolve) or a runtime error
/// occurred.
pub fn did_error() -> bool {
    HAD_ERROR.load(Ordering::Relaxed) || HAD_RUNTIME_ERROR.load(Ordering::Relaxed)
}

/// Checks if a compile error (scan/parse/resolve) occurred. Used between
/// pipeline phases to decide whether to abort before the next one runs.
pub fn did_compile_error() -> bool {
    HAD_ERROR.load(Ordering::Relaxed)
}

/// Checks if a runtime error occurred. Checked once at file-run exit to
/// decide the process exit code; never reset mid-run (spec.md §9, open
/// question 3).
pub fn did_runtime_error() -> bool {
    HAD_RUNTIME_ERROR.load(Ordering::Relaxed)
}

/// Resets the compile-error flag between REPL lines. The runtime-error
/// flag is intentionally left alone here: spec.md §5 only has the REPL
/// reset the compile-error flag.
pub fn reset_compile_error() {
    HAD_ERROR.store(false, Ordering::Relaxed);
}

/// Resets both sticky flags. Used by the in-process test harness, which
/// runs many independent programs against a fresh `Interpreter` but a
/// process-wide flag pair.
pub fn reset_error() {
    HAD_ERROR.store(false, Ordering::Relaxed);
    HAD_RUNTIME_ERROR.store(false, Ordering::Relaxed);
}

/// Every error type must implement this trait.
pub trait Error {
    /// Prints the error message and sets the appropriate sticky flag.
    fn throw(&self);
}

/// Represents an error that occurs during scanning.
#[derive(Debug)]
pub struct ScanError {
    pub line: usize,
    pub message: String,
}

impl Error for ScanError {
    fn throw(&self) {
        eprintln!("[line {line}] Error: {message}", line = self.line, message = self.message);
        log::debug!("scan error at line {}: {}", self.line, self.message);
        HAD_ERROR.store(true, Ordering::Relaxed);
    }
}

/// Represents an error that occurs during parsing.
#[derive(Debug)]
pub struct ParseError {
    pub token: Token,
    pub message: String,
}

impl Error for ParseError {
    fn throw(&self) {
        if self.token.r#type == Type::EOF {
            eprintln!(
                "[line {line}] Error at end: {message}",
                line = self.token.location.line,
                message = self.message
            );
        } else {
            eprintln!(
                "[line {line}] Error at '{lexeme}': {message}",
                line = self.token.location.line,
                lexeme = self.token.lexeme,
                message = self.message
            );
        }

        log::debug!("parse error near '{}': {}", self.token.lexeme, self.message);
        HAD_ERROR.store(true, Ordering::Relaxed);
    }
}

/// Represents an error that occurs during the resolution pass.
#[derive(Debug)]
pub struct ResolveError {
    pub token: Token,
    pub message: String,
}

impl Error for ResolveError {
    fn throw(&self) {
        eprintln!(
            "[line {line}] Error at '{lexeme}': {message}",
            line = self.token.location.line,
            lexeme = self.token.lexeme,
            message = self.message
        );

        log::debug!("resolve error near '{}': {}", self.token.lexeme, self.message);
        HAD_ERROR.store(true, Ordering::Relaxed);
    }
}

/// Represents an error that occurs during evaluation.
#[derive(Debug, Clone)]
pub struct RuntimeError {
    pub token: Token,
    pub message: String,
}

impl Error for RuntimeError {
    fn throw(&self) {
        eprintln!("{message}\n[line {line}]", message = self.message, line = self.token.location.line);
        log::debug!("runtime error near '{}': {}", self.token.lexeme, self.message);
        HAD_RUNTIME_ERROR.store(true, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::token::Location;

    #[test]
    fn reset_error_clears_both_flags() {
        ScanError { line: 1, message: "boom".to_string() }.throw();
        assert!(did_error());

        reset_error();
        assert!(!did_error());
        assert!(!did_runtime_error());
    }

    #[test]
    fn reset_compile_error_leaves_runtime_flag() {
        reset_error();

        RuntimeError {
            token: Token::new(Type::Identifier, "x".to_string(), None, Location::new(1)),
            message: "bad".to_string(),
        }.throw();
        assert!(did_runtime_error());

        reset_compile_error();
        assert!(did_runtime_error());

        reset_error();
    }
}
