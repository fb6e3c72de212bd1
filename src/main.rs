//! `volview` command-line viewer.

use std::path::{Path, PathBuf};

use clap::Parser;
use volview::{Options, Viewer, VolviewError};

/// Rotate and zoom a 3D scalar volume with the mouse.
///
/// Left drag rotates through a virtual trackball, middle drag zooms,
/// `R` resets the view and `Escape` quits.
#[derive(Parser, Debug)]
#[command(name = "volview", version, about)]
struct Args {
    /// TOML options file; missing fields use defaults.
    #[arg(long, conflicts_with = "preset")]
    options: Option<PathBuf>,

    /// Named preset, loaded from `<presets-dir>/<NAME>.toml`.
    #[arg(long, value_name = "NAME")]
    preset: Option<String>,

    /// Directory holding option presets.
    #[arg(long, value_name = "DIR", default_value = "presets")]
    presets_dir: PathBuf,

    /// Log the presets found in the presets directory and exit.
    #[arg(long)]
    list_presets: bool,

    /// Write the resolved options to a TOML file and exit.
    #[arg(long, value_name = "PATH")]
    save_options: Option<PathBuf>,

    /// Volume resolution along x, y and z.
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"])]
    size: Option<Vec<u32>>,

    /// Initial window width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Initial window height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Window title.
    #[arg(long, default_value = "volview")]
    title: String,
}

fn resolve_options(args: &Args) -> Result<Options, VolviewError> {
    let mut options = match (&args.options, &args.preset) {
        (Some(path), _) => Options::load(path)?,
        (None, Some(name)) => Options::load_preset(&args.presets_dir, name)?,
        (None, None) => Options::default(),
    };

    if let Some(width) = args.width {
        options.viewport.width = width;
    }
    if let Some(height) = args.height {
        options.viewport.height = height;
    }
    if let Some([x, y, z]) = args.size.as_deref() {
        options.volume.resolution = [*x, *y, *z];
    }

    options.validate()?;
    Ok(options)
}

fn list_presets(dir: &Path) {
    let presets = Options::list_presets(dir);
    if presets.is_empty() {
        log::warn!("no presets in {}", dir.display());
    }
    for name in presets {
        log::info!("preset: {name}");
    }
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let args = Args::parse();
    if args.list_presets {
        list_presets(&args.presets_dir);
        return;
    }

    let options = match resolve_options(&args) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    if let Some(path) = &args.save_options {
        if let Err(e) = options.save(path) {
            log::error!("{e}");
            std::process::exit(1);
        }
        log::info!("saved options to {}", path.display());
        return;
    }

    log::info!(
        "viewing {:?} volume in a {}x{} window",
        options.volume.resolution,
        options.viewport.width,
        options.viewport.height
    );

    let viewer = Viewer::builder()
        .with_options(options)
        .with_title(args.title)
        .build();

    if let Err(e) = viewer.run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
