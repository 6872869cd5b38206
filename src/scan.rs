//! Directory traversal and size accumulation.
//!
//! [`Walker`] computes the byte total of a file or directory tree. While it
//! walks it reports one size line per visited entry, in the order the
//! directory listing yields them. Traversal keeps an explicit stack of open
//! directories instead of recursing, so deep trees cannot exhaust the call
//! stack.

use crate::options::Options;
use crate::path::{join_paths, listing_pattern};
use crate::report::Reporter;
use crate::size::format_size;

use log::{debug, trace};
use std::fs;
use std::path::{Path, PathBuf};

/// Display path given to the root of a walk.
pub const ROOT_DISPLAY: &str = ".";

/// A directory whose listing is still being consumed.
///
/// The listing handle lives exactly as long as the frame.
struct Frame {
    path: PathBuf,
    display: String,
    entries: fs::ReadDir,
    total: u64,
}

/// Sums sizes below a path, reporting each entry through a [`Reporter`].
pub struct Walker<'a, R: Reporter + ?Sized> {
    options: &'a Options,
    reporter: &'a mut R,
}

impl<'a, R: Reporter + ?Sized> Walker<'a, R> {
    pub fn new(options: &'a Options, reporter: &'a mut R) -> Self {
        Self { options, reporter }
    }

    /// Walks `path` with [`ROOT_DISPLAY`] as its display path.
    pub fn walk(&mut self, path: &Path) -> u64 {
        self.walk_relative(path, ROOT_DISPLAY)
    }

    /// Returns the total byte size of `path`.
    ///
    /// A regular file yields its length and no output. A directory yields
    /// the sum of all files below it; each descendant gets a size line showing
    /// its path relative to `display`. A subdirectory's line follows the
    /// lines of its own children.
    ///
    /// Failures never propagate: a missing path, an unreadable listing or an
    /// unreadable entry is reported as an error and counts as 0 bytes, and
    /// the walk carries on with the siblings.
    pub fn walk_relative(&mut self, path: &Path, display: &str) -> u64 {
        let meta = match fs::metadata(path) {
            Ok(meta) => meta,
            Err(err) => {
                debug!("stat {} failed: {err}", path.display());
                self.error(&format!("Path {} cannot be found", path.display()));
                return 0;
            }
        };

        if !meta.is_dir() {
            return meta.len();
        }

        let Some(root) = self.open(path.to_path_buf(), display.to_string()) else {
            return 0;
        };
        let mut stack = vec![root];

        while let Some(frame) = stack.last_mut() {
            match frame.entries.next() {
                Some(Ok(entry)) => {
                    let name = entry.file_name();
                    let name = name.to_string_lossy();
                    if name == "." || name == ".." {
                        continue;
                    }
                    let child_display = join_paths(&frame.display, &name);

                    match entry.file_type() {
                        Ok(kind) if kind.is_dir() => {
                            match self.open(entry.path(), child_display.clone()) {
                                Some(child) => stack.push(child),
                                None => self.record(&mut frame.total, 0, &child_display),
                            }
                        }
                        Ok(_) => {
                            let size = match entry.metadata() {
                                Ok(meta) => meta.len(),
                                Err(err) => {
                                    self.error(&format!(
                                        "Cannot read metadata for {}: {err}",
                                        entry.path().display()
                                    ));
                                    0
                                }
                            };
                            self.record(&mut frame.total, size, &child_display);
                        }
                        Err(err) => {
                            self.error(&format!(
                                "Cannot read metadata for {}: {err}",
                                entry.path().display()
                            ));
                            self.record(&mut frame.total, 0, &child_display);
                        }
                    }
                }
                Some(Err(err)) => {
                    self.error(&format!(
                        "Cannot read an entry of {}: {err}",
                        frame.path.display()
                    ));
                }
                None => {
                    let Some(done) = stack.pop() else { break };
                    match stack.last_mut() {
                        Some(parent) => {
                            self.record(&mut parent.total, done.total, &done.display)
                        }
                        None => return done.total,
                    }
                }
            }
        }

        0
    }

    fn open(&mut self, path: PathBuf, display: String) -> Option<Frame> {
        debug!("listing {}", listing_pattern(&path.to_string_lossy()));
        match fs::read_dir(&path) {
            Ok(entries) => Some(Frame {
                path,
                display,
                entries,
                total: 0,
            }),
            Err(err) => {
                self.error(&format!("Cannot list directory {}: {err}", path.display()));
                None
            }
        }
    }

    /// Adds a finished child to its parent's total and prints its line.
    fn record(&mut self, total: &mut u64, size: u64, display: &str) {
        trace!("{display}: {size} bytes");
        *total += size;
        if !self.options.silent {
            let formatted = format_size(size, self.options.size_suffixes);
            self.reporter.size(formatted, display);
        }
    }

    fn error(&mut self, message: &str) {
        if !self.options.silent {
            self.reporter.error(message);
        }
    }
}

/// Convenience wrapper around [`Walker::walk`].
pub fn scan<R: Reporter + ?Sized>(options: &Options, reporter: &mut R, path: &Path) -> u64 {
    Walker::new(options, reporter).walk(path)
}
