use thiserror::Error;

/// Failures raised while building a QR symbol
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The bit stream does not fit the data capacity of the chosen version
    #[error("code length overflow: {bits} bits exceed {capacity} bits available at version {version}")]
    CodeLengthOverflow {
        /// Length of the unpadded bit stream
        bits: usize,
        /// Data capacity of the version in bits
        capacity: usize,
        /// Version the stream was built for
        version: u8,
    },
    /// A forced version outside the supported 1-9 range
    #[error("unsupported QR version {0}, expected 1-9")]
    UnsupportedVersion(u8),
}
