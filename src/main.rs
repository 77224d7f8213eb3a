use clap::Parser;
use log::info;
use menu_tree_rs::config::{ClassifierOptions, ConvertConfig, LineRange, DEFAULT_ACTION_MARKER};
use menu_tree_rs::utils::menu_processor::MenuProcessor;
use std::path::PathBuf;

/// Convert a XAML menu tree into hierarchical JSON
#[derive(Debug, Parser)]
#[command(name = "menu-tree", version, about)]
struct Cli {
    /// markup file containing the menu items
    #[arg(short, long, env = "MENU_TREE_INPUT")]
    input: PathBuf,

    /// first line of the menu fragment (1-based, inclusive)
    #[arg(short, long, env = "MENU_TREE_START_LINE", requires = "end_line")]
    start_line: Option<usize>,

    /// last line of the menu fragment (1-based, inclusive)
    #[arg(short, long, env = "MENU_TREE_END_LINE", requires = "start_line")]
    end_line: Option<usize>,

    /// JSON file to write; prints to stdout when omitted
    #[arg(short, long, env = "MENU_TREE_OUTPUT")]
    output: Option<PathBuf>,

    /// `Click` handler that marks a leaf action
    #[arg(short = 'm', long, default_value = DEFAULT_ACTION_MARKER, env = "MENU_TREE_ACTION_MARKER")]
    action_marker: String,

    /// extra namespace declaration for the synthetic root, as prefix=uri
    #[arg(short = 'n', long = "namespace", env = "MENU_TREE_NAMESPACES", value_delimiter = ',')]
    namespaces: Vec<String>,

    /// attach cleaned tooltips to leaf actions
    #[arg(long, env = "MENU_TREE_INCLUDE_TOOLTIPS")]
    include_tooltips: bool,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<ConvertConfig> {
        let mut config = ConvertConfig {
            input: self.input,
            line_range: match (self.start_line, self.end_line) {
                (Some(start), Some(end)) => Some(LineRange { start, end }),
                _ => None,
            },
            output: self.output,
            classifier: ClassifierOptions {
                action_marker: self.action_marker,
                include_tooltips: self.include_tooltips,
            },
            ..Default::default()
        };
        for ns in &self.namespaces {
            config.add_namespace(ns)?;
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let _ = env_logger::try_init();

    let config = Cli::parse().into_config()?;
    let processor = MenuProcessor::new(&config);
    let document = processor.run(&config, std::io::stdout().lock())?;

    info!("Converted {} sections", document.len());
    Ok(())
}
