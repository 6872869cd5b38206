//! Command-line option parsing.
//!
//! The parser is deliberately hand-written: `-h` means "human-readable
//! sizes" here, and unknown flags either warn or abort depending on whether
//! silent mode was already switched on when they were seen.

use crate::error::Error;
use crate::report::Reporter;

/// Prefix that marks a token as a flag.
pub const FLAG_MARKER: char = '-';
/// Enables magnitude suffixes (`B`, `K`, `M`, `G`, `T`).
pub const SUFFIX_FLAG: &str = "-h";
/// Suppresses every non-fatal message.
pub const SILENT_FLAG: &str = "-s";

/// Settings for one run. Built once by [`Options::parse`], never mutated after.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub work_paths: Vec<String>,
    pub size_suffixes: bool,
    pub silent: bool,
}

impl Options {
    /// Parses every argument after the program name.
    ///
    /// Tokens are classified left to right:
    /// - empty tokens are skipped;
    /// - [`SUFFIX_FLAG`] and [`SILENT_FLAG`] switch their option on;
    /// - any other token starting with [`FLAG_MARKER`] is unknown and gets an
    ///   `Unknown parameter` warning, unless silent mode is already on, in
    ///   which case parsing stops;
    /// - everything else is a work path, kept in order with duplicates.
    ///
    /// Because tokens are handled in order, an unknown flag placed before
    /// `-s` only warns while the same flag placed after `-s` aborts.
    ///
    /// # Errors
    /// Returns [`Error::UnknownFlag`] for an unknown flag met while silent.
    pub fn parse<I, S, R>(args: I, reporter: &mut R) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        R: Reporter + ?Sized,
    {
        let mut options = Options::default();

        for arg in args {
            let arg = arg.as_ref();
            if arg.is_empty() {
                continue;
            }

            if !arg.starts_with(FLAG_MARKER) {
                options.work_paths.push(arg.to_string());
                continue;
            }

            match arg {
                SUFFIX_FLAG => options.size_suffixes = true,
                SILENT_FLAG => options.silent = true,
                unknown if options.silent => return Err(Error::UnknownFlag(unknown.to_string())),
                unknown => reporter.warning(&format!("Unknown parameter {unknown}")),
            }
        }

        Ok(options)
    }
}
