use crate::config::LineRange;
use crate::error::{MenuError, Result};
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

/// Memory-mapped view of the markup source the menu fragment is cut from.
pub struct SourceReader {
    _file: File,
    // Zero-length files cannot be mapped.
    mmap: Option<Mmap>,
}

impl SourceReader {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let mmap = if file.metadata()?.len() == 0 {
            None
        } else {
            Some(unsafe { Mmap::map(&file)? })
        };

        Ok(SourceReader { _file: file, mmap })
    }

    pub fn as_slice(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or_default()
    }

    pub fn as_str(&self) -> Result<&str> {
        Ok(std::str::from_utf8(self.as_slice())?)
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Cut an inclusive, 1-based line range, keeping line terminators.
    pub fn extract_lines(&self, range: LineRange) -> Result<String> {
        let text = self.as_str()?;
        let lines: Vec<&str> = text.split_inclusive('\n').collect();

        if range.start < 1 || range.end < range.start || range.end > lines.len() {
            return Err(MenuError::LineRange {
                start: range.start,
                end: range.end,
                total: lines.len(),
            });
        }

        Ok(lines[range.start - 1..range.end].concat())
    }

    /// The fragment selected by `range`, or the whole file when no range is given.
    pub fn fragment(&self, range: Option<LineRange>) -> Result<String> {
        match range {
            Some(range) => self.extract_lines(range),
            None => Ok(self.as_str()?.to_string()),
        }
    }
}
