//! Configuration.

//
// Copyright (c) 2019 Fuzzbed Developers
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use crate::consts;
use failure::Fail;
use fuzzbed_crypto::bignum::Format;
use serde_derive::{Deserialize, Serialize};
use std::fs::File;
use std::io;
use std::io::ErrorKind;
use std::io::Read;
use std::path::Path;
use std::result::Result;
use toml;

/// Configuration root
///
/// Every member of this structure is deserialized from corresponding section
/// of fuzzbed.toml file.
///
/// Don't forget to update fuzzbed.toml.example after adding new options.
///
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Default decimal formatting options.
    pub format: FormatConfig,
    /// Randomized property checks.
    pub checks: ChecksConfig,
}

/// General configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log4RS configuration file
    pub log4rs_config: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            log4rs_config: consts::LOG4RS_CONFIG_FILE_NAME.to_string(),
        }
    }
}

/// Decimal formatter defaults.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct FormatConfig {
    /// Literal text placed before the number.
    pub prefix: String,
    /// Literal text placed after the number.
    pub suffix: String,
    /// Digits after the decimal point.
    pub decimals: u32,
    /// Power of ten applied to the value before placing the point.
    pub exponent: i32,
    /// Keep trailing zeros of the fractional part.
    pub trailing: bool,
}

impl FormatConfig {
    /// Borrow as formatter options. Empty prefix/suffix mean none.
    pub fn as_format(&self) -> Format<'_> {
        Format {
            prefix: Some(self.prefix.as_str()).filter(|s| !s.is_empty()),
            suffix: Some(self.suffix.as_str()).filter(|s| !s.is_empty()),
            decimals: self.decimals,
            exponent: self.exponent,
            trailing: self.trailing,
        }
    }
}

/// Randomized property checks configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ChecksConfig {
    /// Random cases per law.
    pub iterations: u32,
    /// RNG seed, 0 means seed from entropy.
    pub seed: u64,
}

impl Default for ChecksConfig {
    fn default() -> Self {
        ChecksConfig {
            iterations: consts::DEFAULT_CHECK_ITERATIONS,
            seed: 0,
        }
    }
}

/// Error type for wrapping configuration errors.
#[derive(Debug, Fail)]
pub enum ConfigError {
    /// Caused if configuration file is missing.
    #[fail(display = "Configuration file not found.")]
    NotFoundError,
    /// Caused on input/output errors.
    #[fail(display = "Failed to read configuration file: {}.", _0)]
    IOError(io::Error),
    /// Caused by parse errors.
    #[fail(display = "Failed to parse configuration file: {}.", _0)]
    ParseError(toml::de::Error),
}

///
/// Load configuration file
///
/// # Arguments
///
/// * `cfg_path` - A path to configuration file
///
/// # Errors
///
/// Returns ConfigError on error.
///
pub fn from_file<P: AsRef<Path>>(cfg_path: P) -> Result<Config, ConfigError> {
    // Open configuration file
    let mut f = match File::open(cfg_path) {
        // The file is readable
        Ok(f) => f,
        // The file doesn't exists - use defaults
        Err(ref e) if e.kind() == ErrorKind::NotFound => return Err(ConfigError::NotFoundError),
        // Propagate the error
        Err(e) => return Err(ConfigError::IOError(e)),
    };

    // Read the file content
    let mut contents = String::new();
    if let Err(e) = f.read_to_string(&mut contents) {
        return Err(ConfigError::IOError(e));
    }
    drop(f);

    from_str(&contents)
}

/// Parse configuration from TOML text.
pub fn from_str(contents: &str) -> Result<Config, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::ParseError)
}
