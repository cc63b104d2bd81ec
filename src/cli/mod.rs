mod context;
mod flags;
mod help;
mod parse;
mod report;

pub use context::Context;
pub use flags::CliFlags;
pub use help::print_help;
pub use parse::parse;
pub use report::{Reporter, fatal};
