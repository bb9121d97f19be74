use crate::error;
use std::cell::RefCell;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};

#[derive(Debug)]
enum PortKind {
    Input(BufReader<File>),
    Output(BufWriter<File>),
    Closed,
}

/// A shared handle to an open file.
///
/// Ports are aliasable values, so the underlying handle sits behind a
/// `RefCell` and closing a port through one alias is visible to all others.
#[derive(Debug)]
pub struct Port {
    kind: RefCell<PortKind>,
}

impl Port {
    pub fn input(file: File) -> Self {
        Self {
            kind: RefCell::new(PortKind::Input(BufReader::new(file))),
        }
    }

    pub fn output(file: File) -> Self {
        Self {
            kind: RefCell::new(PortKind::Output(BufWriter::new(file))),
        }
    }

    /// Release the handle. Output ports flush first. Closing an already
    /// closed port is a no-op.
    pub fn close(&self) {
        let mut kind = self.kind.borrow_mut();
        if let PortKind::Output(writer) = &mut *kind {
            let _ = writer.flush();
        }
        *kind = PortKind::Closed;
    }

    pub fn read_line(&self) -> crate::Result<String> {
        match &mut *self.kind.borrow_mut() {
            PortKind::Input(reader) => {
                let mut line = String::new();
                let read = reader.read_line(&mut line).map_err(error::io_error)?;
                if read == 0 {
                    Err(error::io_error("unexpected end of file"))
                } else {
                    Ok(line)
                }
            }
            _ => Err(error::default_error("port is not open for input")),
        }
    }

    pub fn write_line(&self, content: &str) -> crate::Result<()> {
        match &mut *self.kind.borrow_mut() {
            PortKind::Output(writer) => {
                writeln!(writer, "{}", content).map_err(error::io_error)
            }
            _ => Err(error::default_error("port is not open for output")),
        }
    }
}

// ports are equal only to themselves
impl PartialEq for Port {
    fn eq(&self, other: &Port) -> bool {
        std::ptr::eq(self, other)
    }
}
