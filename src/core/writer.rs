use crate::core::layout::MenuDocument;
use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writer is responsible for emitting a classified menu document.
pub trait Writer {
    /// Serialize `document` into `out`.
    fn write_to<W: Write>(&self, document: &MenuDocument, out: W) -> Result<()>;

    /// Serialize `document` into a new file at `out_path`, replacing any existing one.
    fn write_document<P: AsRef<Path>>(&self, document: &MenuDocument, out_path: P) -> Result<()> {
        let file = File::create(out_path.as_ref())?;
        let mut out = BufWriter::new(file);
        self.write_to(document, &mut out)?;
        out.flush()?;
        Ok(())
    }
}

/// Pretty-printed UTF-8 JSON with two-space indentation; non-ASCII stays literal.
pub struct JsonWriter;

impl Writer for JsonWriter {
    fn write_to<W: Write>(&self, document: &MenuDocument, mut out: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut out, document)?;
        out.write_all(b"\n")?;
        Ok(())
    }
}

impl JsonWriter {
    pub fn to_string(&self, document: &MenuDocument) -> Result<String> {
        Ok(serde_json::to_string_pretty(document)?)
    }
}
