use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use types::Theme;

/// Procedurally generate the skyline badge icon and export it as a PNG
/// and a multi-resolution ICO.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Built-in theme preset (sunset, neon)
    #[arg(long, default_value = "sunset")]
    theme: String,

    /// JSON theme file; takes precedence over --theme
    #[arg(long)]
    theme_file: Option<PathBuf>,

    /// Output PNG path
    #[arg(long, default_value = "assets/icon.png")]
    png: PathBuf,

    /// Output ICO path
    #[arg(long, default_value = "assets/icon.ico")]
    ico: PathBuf,

    /// Monogram text on the badge
    #[arg(long, default_value = "NL")]
    label: String,

    /// Subtitle text on the accent bar
    #[arg(long, default_value = "NocLauncher")]
    subtitle: String,

    /// Grain RNG seed; the fixed default keeps re-runs byte-identical
    #[arg(long, default_value_t = artwork::DEFAULT_SEED)]
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let theme = match &args.theme_file {
        Some(path) => {
            let data = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&data)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => Theme::from_name(&args.theme)?,
    };

    let opts = artwork::RenderOptions {
        theme,
        label: args.label,
        subtitle: args.subtitle,
        seed: args.seed,
    };
    let master = artwork::render(&opts).into_image();

    io::write_png(&master, &args.png)?;
    io::write_ico(&master, &args.ico)?;
    println!("Wrote {}", args.png.display());
    println!("Wrote {}", args.ico.display());
    Ok(())
}
