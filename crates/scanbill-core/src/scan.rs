//! # Barcode Decoder Capability
//!
//! Decoding pixels into a payload is an external capability: a native
//! library, a hardware scanner SDK, or nothing at all on hosts where neither
//! is installed. This module only fixes the contract the session relies on.
//!
//! ```text
//! ScanImage ──► BarcodeDecoder::decode ──► Some("0123456789012")
//!                                     └──► None (nothing found)
//!
//! no decoder on this host ──► session reports "scanner not available"
//!                             and keeps manual entry open
//! ```

use std::fmt;

/// A single still image handed over by the capture layer.
///
/// The bytes are whatever the camera produced (PNG, JPEG, raw RGB...); the
/// decoder is responsible for converting them to something it can read.
#[derive(Clone, PartialEq, Eq)]
pub struct ScanImage {
    bytes: Vec<u8>,
}

impl ScanImage {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        ScanImage {
            bytes: bytes.into(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for ScanImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScanImage")
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Reads barcodes and QR codes out of still images.
///
/// Implementations return the **first** payload found, decoded as UTF-8
/// text, or `None` when the image contains nothing readable. They must not
/// panic on unreadable input.
pub trait BarcodeDecoder: Send + Sync {
    fn decode(&self, image: &ScanImage) -> Option<String>;

    /// Returns a name for this decoder (used in logging).
    fn name(&self) -> &str {
        "BarcodeDecoder"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedDecoder(Option<&'static str>);

    impl BarcodeDecoder for FixedDecoder {
        fn decode(&self, _image: &ScanImage) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    #[test]
    fn test_decoder_contract() {
        let image = ScanImage::from_bytes(vec![0u8; 16]);
        assert_eq!(FixedDecoder(Some("4006381333931")).decode(&image).as_deref(), Some("4006381333931"));
        assert_eq!(FixedDecoder(None).decode(&image), None);
        assert_eq!(FixedDecoder(None).name(), "BarcodeDecoder");
    }

    #[test]
    fn test_debug_hides_pixels() {
        let image = ScanImage::from_bytes(vec![1, 2, 3]);
        assert_eq!(format!("{image:?}"), "ScanImage { len: 3 }");
        assert!(!image.is_empty());
    }
}
