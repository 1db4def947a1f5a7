use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;
use zip::CompressionMethod;
use zip::write::{SimpleFileOptions, ZipWriter};

use crate::error::Result;

/// One archive entry: target file name plus encoded image bytes.
pub struct ArchiveEntry {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Zero-padding width for sequential page names: the decimal width of the
/// page count, but never fewer than two digits.
pub fn pad_width(count: usize) -> usize {
    let mut digits = 1;
    let mut n = count;
    while n >= 10 {
        digits += 1;
        n /= 10;
    }
    digits.max(2)
}

/// Sequential page name for `index` (zero-based) out of `count` pages:
/// `01.jpg`, `02.jpg`, ...
pub fn sequence_name(index: usize, count: usize, extension: &str) -> String {
    format!("{:0width$}.{extension}", index + 1, width = pad_width(count))
}

/// Write all entries into a stored (uncompressed) zip container; image
/// payloads are already compressed. The file is fully written, flushed, and
/// closed before this returns, so callers may delete sources afterwards.
pub fn write_cbz(output: &Path, entries: &[ArchiveEntry]) -> Result<()> {
    let file = File::create(output)?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    for entry in entries {
        zip.start_file(entry.name.as_str(), options)?;
        zip.write_all(&entry.bytes)?;
    }

    let mut inner = zip.finish()?;
    inner.flush()?;
    info!("Archive written: {:?} ({} entries)", output, entries.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_width_never_drops_below_two() {
        assert_eq!(pad_width(1), 2);
        assert_eq!(pad_width(9), 2);
        assert_eq!(pad_width(11), 2);
        assert_eq!(pad_width(99), 2);
        assert_eq!(pad_width(100), 3);
    }

    #[test]
    fn sequence_names_are_zero_padded() {
        assert_eq!(sequence_name(0, 11, "jpg"), "01.jpg");
        assert_eq!(sequence_name(10, 11, "jpg"), "11.jpg");
        assert_eq!(sequence_name(7, 120, "png"), "008.png");
    }
}
