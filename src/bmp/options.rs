//! Decoder configuration

/// How headers outside the 24-bit uncompressed profile are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    /// Accept any bit depth / compression and report it as-is.
    #[default]
    Lenient,
    /// Reject anything but 24 bits per pixel with no compression.
    Strict,
}

/// Settings for a single decode call. The default is lenient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    /// Treatment of headers outside the 24-bit uncompressed profile.
    pub profile: Profile,
}

impl DecodeOptions {
    /// Accept and report any bit depth or compression.
    pub const fn lenient() -> Self {
        Self { profile: Profile::Lenient }
    }

    /// Fail with `UnsupportedFormat` unless the header is 24-bit uncompressed.
    pub const fn strict() -> Self {
        Self { profile: Profile::Strict }
    }

    /// Whether the strict profile is selected.
    pub fn is_strict(&self) -> bool {
        self.profile == Profile::Strict
    }
}

impl From<bool> for DecodeOptions {
    /// `true` selects the strict profile.
    fn from(strict: bool) -> Self {
        if strict {
            Self::strict()
        } else {
            Self::lenient()
        }
    }
}
