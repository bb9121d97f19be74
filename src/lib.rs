extern crate thiserror;

extern crate nom;

extern crate nom_locate;

pub mod cmd;
pub mod core;
pub mod error;
pub mod interpreter;
pub mod reader;
pub mod repl;
pub mod value;
pub mod writer;

pub use error::Error;
pub use interpreter::Interpreter;
pub use value::Value;

pub type Result<T> = std::result::Result<T, Error>;

pub const ARBOR_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
#[macro_use]
extern crate matches;

#[cfg(test)]
extern crate quickcheck;

#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;
