//! Cardgallery CLI
//!
//! Renders a gallery into a standalone HTML page. Configuration comes from a
//! preset, optionally overlaid with a TOML file; records come from the TOML
//! `[[data]]` tables or a JSON file.
//!
//! ```text
//! cardgallery --preset characters --data heroes.json --search lin -o heroes.html
//! ```
//!
//! Logs go to stderr; the page goes to `--output` or stdout.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use cardgallery::host::Page;
use cardgallery::{init, Config, Event, Preset};

/// Render a searchable card gallery to HTML
#[derive(Parser)]
#[command(name = "cardgallery")]
#[command(version)]
#[command(about = "Render a searchable card gallery to HTML", long_about = None)]
struct Cli {
    /// TOML configuration file applied over the preset
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON file holding an array of records (replaces any `[[data]]` in the config)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Base configuration
    #[arg(short, long, value_enum, default_value = "glossary")]
    preset: PresetArg,

    /// Id of the mount point the gallery renders into
    #[arg(short, long, default_value = "gallery")]
    mount: String,

    /// Initial search text
    #[arg(short, long)]
    search: Option<String>,

    /// Open the detail overlay for the card at this index
    #[arg(long)]
    open: Option<usize>,

    /// Write the page here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log filter when RUST_LOG is unset (e.g. debug, info, warn)
    #[arg(long)]
    trace_level: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum PresetArg {
    Glossary,
    Characters,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Glossary => Self::Glossary,
            PresetArg::Characters => Self::Characters,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    cardgallery::observability::init_tracing(cli.trace_level.as_deref());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> cardgallery::Result<()> {
    let span = tracing::debug_span!("render_page", mount = %cli.mount);
    let _guard = span.entered();

    let preset = Preset::from(cli.preset);
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path, preset)?,
        None => preset.config(),
    };
    if let Some(path) = &cli.data {
        config.data = Some(Config::load_data(path)?);
    }
    tracing::debug!(
        records = config.data.as_ref().map(Vec::len),
        theme = %config.theme,
        "configuration loaded"
    );

    let mut page = Page::new(config.title.clone()).with_mount(cli.mount.clone());
    let mut gallery = init(&mut page, &cli.mount, config)?;

    if let Some(term) = &cli.search {
        gallery.search(&mut page, term);
    }
    if let Some(index) = cli.open {
        if index >= gallery.count() {
            tracing::warn!(index, count = gallery.count(), "no card at index, overlay left closed");
        }
        gallery.dispatch(&mut page, &Event::ActivateCard(index));
    }

    let html = page.to_html();
    match &cli.output {
        Some(path) => fs::write(path, html)?,
        None => std::io::stdout().write_all(html.as_bytes())?,
    }

    tracing::info!(
        visible = gallery.visible_count(),
        total = gallery.count(),
        "gallery rendered"
    );
    Ok(())
}
