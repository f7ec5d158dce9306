#![allow(clippy::needless_return)]

//! velox is a dynamically typed, lexically scoped scripting language with
//! first-class functions and single-inheritance classes. This crate is a
//! tree-walk interpreter: a hand-written recursive descent parser builds an
//! AST, a resolver pass statically binds every variable reference to a
//! scope distance, and a tree-walking interpreter evaluates the result
//! directly, without compiling to bytecode.
//!
//! ## Scanning
//! The first step in the interpreter is scanning. Scanning is the process of
//! converting a string of characters into a list of tokens. For example,
//! the string `1 + 2` would be converted into the following tokens:
//! ```text
//! [Number(1), Plus, Number(2)]
//! ```
//! The scanner is implemented in the [`scanner`](scanner) module as a state
//! machine over the characters in the source code. It reports lexical
//! errors as a [`ScanError`](error::ScanError) — problems like an
//! unterminated string literal or an unrecognized character — and keeps
//! scanning afterward, so a single run can surface more than one mistake.
//!
//! ## Parsing
//! The second step is parsing: turning the token list into an abstract
//! syntax tree. The parser is implemented in the [`parser`](parser) module
//! as a recursive descent parser. [`Expressions`](expr::Expr) are pieces of
//! code that produce an [`Object`](object::Object); [`statements`](stmt::Stmt)
//! perform a side effect instead. The parser reports syntax errors as a
//! [`ParseError`](error::ParseError) and recovers from them by
//! synchronizing at the next statement boundary, so it can also report more
//! than one syntax error per run.
//!
//! ## Resolving
//! The third step is resolving: a static pass over the AST that computes,
//! for every variable reference, how many enclosing block scopes separate
//! it from its declaration. This has to run after parsing (it needs the
//! whole tree) and before interpreting (the interpreter consults its
//! output). The resolver is implemented in [`resolver`](resolver) and
//! reports semantically-but-not-syntactically invalid programs as a
//! [`ResolveError`](error::ResolveError) — for example, redeclaring a
//! variable in the same block, or using `this` outside a method.
//!
//! ## Interpreting
//! The final step is interpreting: walking the AST and evaluating it. The
//! interpreter is implemented in [`interpreter`](interpreter) and reports
//! errors as a [`RuntimeError`](error::RuntimeError). Most runtime errors —
//! calling something that isn't callable, adding a number to a string —
//! can only be caught here, since they depend on values the earlier passes
//! never compute. The interpreter manages variable scope through the
//! [`environment`](environment) module, a chain of hash maps linked by
//! their enclosing scope.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

pub mod ast;
pub mod class;
pub mod environment;
pub mod error;
pub mod expr;
pub mod function;
pub mod interpreter;
pub mod literal;
pub mod object;
pub mod parser;
pub mod resolver;
pub mod scanner;
pub mod stmt;
pub mod token;

use interpreter::Interpreter;
use parser::Parser;
use resolver::Resolver;
use scanner::Scanner;

/// Drives the scan → parse → resolve → interpret pipeline over a single
/// source, either a whole file or one REPL line.
pub struct Velox {
    interpreter: Interpreter,
}

impl Velox {
    pub fn new() -> Self {
        Velox { interpreter: Interpreter::new() }
    }

    /// Builds a driver that sends `print` output to `output` instead of
    /// stdout. Used by the test harness to assert on program output
    /// in-process, without shelling out to the built binary.
    pub fn with_output(output: Box<dyn Write>) -> Self {
        Velox { interpreter: Interpreter::with_output(output) }
    }

    /// Runs a whole script file and exits the process with the status code
    /// spec.md §6 assigns to each failure class: 65 for a scan/parse/
    /// resolve error, 70 for a runtime error, 0 otherwise.
    pub fn run_file(&mut self, path: &str) {
        let contents = fs::read_to_string(path).unwrap_or_else(|error| {
            eprintln!("Could not read file '{path}': {error}");
            process::exit(74);
        });

        self.run(&contents);

        if error::did_compile_error() {
            process::exit(65);
        }
        if error::did_runtime_error() {
            process::exit(70);
        }
    }

    /// Runs an interactive read-eval-print loop, persisting history to
    /// `~/.velox_history` across sessions the way the teacher crate's REPL
    /// does (rustyline + home, rather than a hand-rolled stdin loop).
    pub fn run_prompt(&mut self) {
        let mut editor = rustyline::Editor::<(), rustyline::history::DefaultHistory>::new()
            .expect("terminal to support line editing");
        let history_path = history_path();

        if let Some(path) = &history_path {
            let _ = editor.load_history(path);
        }

        loop {
            match editor.readline("> ") {
                Ok(line) => {
                    let _ = editor.add_history_entry(line.as_str());
                    self.run(&line);
                    error::reset_compile_error();
                },
                Err(rustyline::error::ReadlineError::Eof)
                | Err(rustyline::error::ReadlineError::Interrupted) => break,
                Err(error) => {
                    log::warn!("REPL input error: {error}");
                    break;
                },
            }
        }

        if let Some(path) = &history_path {
            let _ = editor.save_history(path);
        }
    }

    /// Runs the scan → parse → resolve → interpret pipeline over a single
    /// in-memory source string, short-circuiting between phases on a
    /// compile error. Exposed so integration tests can drive a [`Velox`]
    /// instance directly, without going through file I/O.
    pub fn run(&mut self, source: &str) {
        let mut scanner = Scanner::new(source);
        let tokens = scanner.scan_tokens();

        if error::did_compile_error() {
            return;
        }

        let mut parser = Parser::new(tokens);
        let statements = parser.parse();

        if error::did_compile_error() {
            return;
        }

        let mut resolver = Resolver::new(&mut self.interpreter);
        resolver.resolve(&statements);

        if error::did_compile_error() {
            return;
        }

        self.interpreter.interpret(&statements);
    }
}

impl Default for Velox {
    fn default() -> Self {
        Self::new()
    }
}

fn history_path() -> Option<PathBuf> {
    home::home_dir().map(|mut home| {
        home.push(".velox_history");
        home
    })
}
