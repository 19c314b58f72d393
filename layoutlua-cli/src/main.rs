//! LayoutLua CLI
//!
//! Command-line interface for exporting GUI layouts to Roblox Luau scripts.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use layoutlua_core::{lint, ExportConfig, Exporter, Item, Layout, CONFIG_FILE_NAME};

#[derive(Parser)]
#[command(name = "layoutlua")]
#[command(about = "Export GUI layouts to Roblox Luau scripts")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a layout file to a Luau script
    Export {
        /// Layout file (.json, .yaml or .yml)
        input: PathBuf,

        /// Output path for the script (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Config file (default: layoutlua.toml in the current directory)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Suffix colliding identifiers
        #[arg(long)]
        unique_names: bool,

        /// Pick a safe long-bracket level for text
        #[arg(long)]
        escape_strings: bool,

        /// Prefix identifiers Luau would reject
        #[arg(long)]
        safe_identifiers: bool,
    },

    /// Report items the plain export cannot represent
    Lint {
        /// Layout file (.json, .yaml or .yml)
        input: PathBuf,
    },

    /// Write a starter config and sample layout
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so an exported script can be piped from stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("layoutlua=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Export {
            input,
            output,
            config,
            unique_names,
            escape_strings,
            safe_identifiers,
        } => {
            let mut export_config = load_config(config.as_deref())?;
            export_config.unique_names |= unique_names;
            export_config.escape_long_strings |= escape_strings;
            export_config.safe_identifiers |= safe_identifiers;
            cmd_export(&input, output.as_deref(), export_config)?;
        }
        Commands::Lint { input } => {
            let count = cmd_lint(&input)?;
            if count > 0 {
                std::process::exit(1);
            }
        }
        Commands::Init { path } => {
            let dir = match path {
                Some(p) => p,
                None => std::env::current_dir().context("Failed to read current directory")?,
            };
            cmd_init(&dir)?;
        }
    }

    Ok(())
}

/// Load the explicit config file, or discover one from the current directory
fn load_config(path: Option<&Path>) -> Result<ExportConfig> {
    match path {
        Some(p) => ExportConfig::from_config_file(p),
        None => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            ExportConfig::discover(&cwd)
        }
    }
}

/// Export a layout file
fn cmd_export(input: &Path, output: Option<&Path>, config: ExportConfig) -> Result<()> {
    let layout = Layout::from_file(input)
        .with_context(|| format!("Failed to load layout: {}", input.display()))?;

    tracing::info!("Exporting {} items from {}", layout.items.len(), input.display());
    if let Some(canvas) = layout.canvas_size {
        tracing::debug!("Canvas size {}x{} (not emitted)", canvas.width, canvas.height);
    }

    for diagnostic in lint(&layout) {
        tracing::warn!("{}", diagnostic);
    }

    let exporter = Exporter::new(config);
    let (script, stats) = exporter.export_with_stats(&layout);

    tracing::info!(
        "Exported {} items ({} identifiers altered, {} renamed, {} texts re-bracketed)",
        stats.items_exported,
        stats.identifiers_altered,
        stats.identifiers_renamed,
        stats.texts_rebracketed
    );

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).context("Failed to create output directory")?;
            }
            std::fs::write(path, &script)
                .with_context(|| format!("Failed to write script: {}", path.display()))?;
            tracing::info!("Script written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", script).context("Failed to write script to stdout")?;
        }
    }

    Ok(())
}

/// Print diagnostics for a layout file, returning how many were found
fn cmd_lint(input: &Path) -> Result<usize> {
    let layout = Layout::from_file(input)
        .with_context(|| format!("Failed to load layout: {}", input.display()))?;

    let diagnostics = lint(&layout);
    for diagnostic in &diagnostics {
        println!("{}", diagnostic);
    }

    if diagnostics.is_empty() {
        println!("{}: {} items, no problems found", input.display(), layout.items.len());
    } else {
        println!("\n{} problem(s) found.", diagnostics.len());
        println!("Export with --unique-names, --escape-strings or --safe-identifiers to work around them.");
    }

    Ok(diagnostics.len())
}

/// Write a starter config and sample layout
fn cmd_init(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).context("Failed to create project directory")?;

    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        tracing::warn!("{} already exists, leaving it untouched", config_path.display());
    } else {
        let config = ExportConfig::default().to_toml_string()?;
        std::fs::write(&config_path, config)
            .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;
    }

    let layout_path = dir.join("layout.json");
    if layout_path.exists() {
        tracing::warn!("{} already exists, leaving it untouched", layout_path.display());
    } else {
        let layout = serde_json::to_string_pretty(&sample_layout())?;
        std::fs::write(&layout_path, layout).context("Failed to write layout.json")?;
    }

    println!("Initialized LayoutLua at {}", dir.display());
    println!("\nNext steps:");
    println!("  1. Edit layout.json (or export one from the layout editor)");
    println!("  2. Run: layoutlua export layout.json -o ExportedUI.client.luau");
    println!("  3. Place the script under StarterPlayerScripts");

    Ok(())
}

fn sample_layout() -> Layout {
    let mut panel = Item::new("Frame", "Panel").with_bounds(40.0, 40.0, 320.0, 180.0);
    panel.fill = Some("#1e1e2e".to_string());

    let mut title = Item::new("TextLabel", "Title").with_bounds(60.0, 56.0, 280.0, 40.0);
    title.text = Some("Hello from LayoutLua".to_string());
    title.text_color = Some("#ffffff".to_string());
    title.font_size = Some(24.0);

    let mut icon = Item::new("ImageLabel", "Icon").with_bounds(60.0, 110.0, 64.0, 64.0);
    icon.image_id = Some("rbxassetid://0".to_string());

    Layout {
        canvas_size: None,
        items: vec![panel, title, icon],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_then_export() {
        let temp_dir = TempDir::new().unwrap();
        cmd_init(temp_dir.path()).unwrap();

        let layout_path = temp_dir.path().join("layout.json");
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        assert!(layout_path.exists());
        assert!(config_path.exists());

        let config = load_config(Some(&config_path)).unwrap();
        assert_eq!(config, ExportConfig::default());

        let output_path = temp_dir.path().join("out").join("ui.luau");
        cmd_export(&layout_path, Some(&output_path), config).unwrap();

        let script = std::fs::read_to_string(&output_path).unwrap();
        assert!(script.starts_with("local screenGui = Instance.new(\"ScreenGui\")"));
        assert!(script.contains("local Title = Instance.new(\"TextLabel\")"));
        assert!(script.contains("Title.Text = [[Hello from LayoutLua]]"));
        assert!(script.contains("Icon.Image = \"rbxassetid://0\""));
    }

    #[test]
    fn test_init_keeps_existing_files() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "unique_names = true\n").unwrap();

        cmd_init(temp_dir.path()).unwrap();
        assert_eq!(
            std::fs::read_to_string(&config_path).unwrap(),
            "unique_names = true\n"
        );
    }

    #[test]
    fn test_lint_counts_problems() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dup.json");
        std::fs::write(&path, r#"{ "items": [ { "name": "A" }, { "name": "A" } ] }"#).unwrap();
        assert_eq!(cmd_lint(&path).unwrap(), 1);
    }

    #[test]
    fn test_export_missing_input() {
        let temp_dir = TempDir::new().unwrap();
        let err = cmd_export(
            &temp_dir.path().join("missing.json"),
            None,
            ExportConfig::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Failed to load layout"));
    }
}
