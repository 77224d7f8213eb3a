use crate::config::{ClassifierOptions, ConvertConfig};
use crate::core::classifier::build_document;
use crate::core::layout::MenuDocument;
use crate::core::parser::{Parser, XamlParser};
use crate::core::writer::{JsonWriter, Writer};
use crate::utils::source_reader::SourceReader;
use anyhow::{Context, Result};
use log::{debug, error, info};
use std::io::Write;

pub struct MenuProcessor {
    parser: XamlParser,
    writer: JsonWriter,
    options: ClassifierOptions,
}

impl Default for MenuProcessor {
    fn default() -> Self {
        Self::new(&ConvertConfig::default())
    }
}

impl MenuProcessor {
    pub fn new(config: &ConvertConfig) -> Self {
        Self {
            parser: XamlParser::new(config.namespaces.clone()),
            writer: JsonWriter,
            options: config.classifier.clone(),
        }
    }

    /// Parse and classify a fragment.
    ///
    /// Malformed markup is reported and yields an empty document rather than a
    /// partial one, so an empty result may mean either "no menu" or "parse failure".
    pub fn process_fragment(&self, fragment: &str) -> MenuDocument {
        debug!("Parsing fragment of {} bytes", fragment.len());
        match self.parser.parse_fragment(fragment) {
            Ok(root) => build_document(&root, &self.options),
            Err(e) => {
                error!("Error parsing XML: {}", e);
                MenuDocument::new()
            }
        }
    }

    /// Run a full conversion: read the source, classify, write JSON, report a summary.
    ///
    /// Returns the document so callers can inspect it; nothing is written when it is empty.
    pub fn run<W: Write>(&self, config: &ConvertConfig, mut report: W) -> Result<MenuDocument> {
        match config.line_range {
            Some(range) => info!(
                "Extracting lines {}-{} from {}...",
                range.start,
                range.end,
                config.input.display()
            ),
            None => info!("Reading {}...", config.input.display()),
        }

        let reader = SourceReader::open(&config.input)
            .with_context(|| format!("Failed to open source file: {}", config.input.display()))?;
        let fragment = reader
            .fragment(config.line_range)
            .with_context(|| format!("Failed to extract menu markup from {}", config.input.display()))?;

        if fragment.trim().is_empty() {
            writeln!(report, "Failed to extract XAML content")?;
            return Ok(MenuDocument::new());
        }

        info!("Parsing extracted XAML content...");
        let document = self.process_fragment(&fragment);

        if document.is_empty() {
            writeln!(report, "No menu structure found")?;
            return Ok(document);
        }

        match &config.output {
            Some(path) => {
                self.writer
                    .write_document(&document, path)
                    .with_context(|| format!("Failed to write JSON to {}", path.display()))?;
                info!("Successfully parsed XAML and wrote to {}", path.display());
                for line in document.summary() {
                    writeln!(report, "{}", line)?;
                }
            }
            None => {
                // Stdout carries the JSON itself, so the summary goes to the log.
                self.writer.write_to(&document, &mut report)?;
                for line in document.summary() {
                    info!("{}", line);
                }
            }
        }

        Ok(document)
    }
}
