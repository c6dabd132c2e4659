//! Output file writing

use std::fs;
use std::io;
use std::path::Path;

/// Write lines to the output file, one per line, replacing its contents.
///
/// An empty slice truncates the file to zero bytes, which is how "no path"
/// and "unknown word" are reported to anything reading the file.
pub fn write_output(path: &Path, lines: &[String]) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, lines.join("\n"))
}
