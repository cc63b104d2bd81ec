//! Password generation.

mod charset;
pub mod entropy;
mod generate;
mod length;

pub use charset::{Charset, LOWERCASE, NBSP, NUMBER, SPACE, SYMBOL, UPPERCASE};
pub use generate::{GeneratedPassword, Generator};
pub use length::{MAX_LENGTH, resolve as resolve_length};
