use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StegoError {
    /// The encrypted blob plus the offset header does not fit in the image.
    PayloadTooLarge {
        payload_bits: usize,
        capacity_bits: usize,
    },
    /// The message contains the reserved end-of-text byte.
    TerminatorInMessage,
    /// Wrong password, wrong image, or corrupted data. Deliberately a single
    /// variant: the caller must not learn which factor failed.
    Integrity,
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StegoError::PayloadTooLarge {
                payload_bits,
                capacity_bits,
            } => write!(
                f,
                "message needs {payload_bits} bits but the image has only {capacity_bits} usable"
            ),
            StegoError::TerminatorInMessage => {
                write!(f, "message must not contain the end-of-text byte (0x04)")
            }
            StegoError::Integrity => write!(f, "incorrect password or no hidden data"),
        }
    }
}

impl std::error::Error for StegoError {}
