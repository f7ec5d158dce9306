use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use velox_lang::error;
use velox_lang::Velox;

/// A `Write` sink that stays readable after being handed off, since
/// `Velox::with_output` takes ownership of a `Box<dyn Write>` that can't be
/// downcast back to the concrete buffer afterward. Cloning is cheap (an `Rc`
/// bump), so the test keeps one handle while `Velox` gets another.
#[derive(Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        SharedBuffer::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.borrow_mut().flush()
    }
}

/// Runs `source` through a fresh interpreter and returns everything it
/// printed. Resets the sticky error flags first so one test's failure can't
/// bleed into the next (the flags are process-global, mirroring the REPL's
/// own `reset_compile_error` between lines).
pub fn run(source: &str) -> String {
    error::reset_error();
    let buffer = SharedBuffer::new();
    let mut velox = Velox::with_output(Box::new(buffer.clone()));
    velox.run(source);
    buffer.contents()
}

pub fn run_err(source: &str) -> (String, bool, bool) {
    error::reset_error();
    let buffer = SharedBuffer::new();
    let mut velox = Velox::with_output(Box::new(buffer.clone()));
    velox.run(source);
    (buffer.contents(), error::did_compile_error(), error::did_runtime_error())
}
