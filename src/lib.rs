//! Password generation from selectable character classes, sized by an
//! explicit length or a target entropy in bits.
//!
//! ```no_run
//! use entropass::{Config, Generator, LengthMode};
//!
//! let config = Config {
//!     symbol: true,
//!     length_mode: LengthMode::TargetEntropy,
//!     length_value: 80.0,
//!     ..Default::default()
//! };
//! let password = Generator::detect().generate(&config)?;
//! println!("{} ({} bits)", password.as_str(), password.entropy_display());
//! # Ok::<(), entropass::Error>(())
//! ```

mod error;
pub mod pass;
pub mod rand;
pub mod settings;

pub use error::Error;
pub use pass::{Charset, GeneratedPassword, Generator};
pub use rand::{RandomSource, SecureRandom, Urandom};
pub use settings::{Config, LengthMode};

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;
