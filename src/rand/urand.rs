//! `/dev/urandom` as the secure 32-bit source.

use std::fs::File;
use std::io::Read;

use zeroize::Zeroize;

use super::SecureRandom;
use crate::{Error, Result};

const DEVICE: &str = "/dev/urandom";

/// Reads 32-bit values from the kernel CSPRNG device.
#[derive(Debug)]
pub struct Urandom {
    file: File,
}

impl Urandom {
    /// Open the device; `None` if it cannot be opened.
    pub fn open() -> Option<Self> {
        match File::open(DEVICE) {
            Ok(file) => Some(Self { file }),
            Err(e) => {
                log::debug!("{DEVICE} unavailable: {e}");
                None
            }
        }
    }
}

impl SecureRandom for Urandom {
    fn fill_u32(&self, dest: &mut [u32]) -> Result<()> {
        let mut bytes = vec![0u8; dest.len() * 4];
        (&self.file)
            .read_exact(&mut bytes)
            .map_err(|e| Error::SecureSource(format!("{DEVICE}: {e}")))?;

        for (out, chunk) in dest.iter_mut().zip(bytes.chunks_exact(4)) {
            *out = u32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        bytes.zeroize();
        Ok(())
    }
}
