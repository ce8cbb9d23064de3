// File: crates/graph-assets/src/lib.rs
// Summary: Placeholder chart generation: prepare the public folder, then render and save each chart.

pub mod config;
pub mod logging;
pub mod plots;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::RenderOptions;
use tracing::info;

pub use config::{Args, Config};
pub use plots::{chart_specs, ChartSpec};

/// Create `<root>/frontend/public` if absent and return it.
pub fn prepare_output_dir(root: &Path) -> Result<PathBuf> {
    let dir = Config::new(root).output_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("creating output folder {}", dir.display()))?;
    Ok(dir)
}

/// Render every chart into the output folder, writing status lines to `status`.
/// The folder is prepared before anything is rendered; the first failure aborts.
pub fn run(config: &Config, status: &mut impl Write) -> Result<Vec<PathBuf>> {
    writeln!(status, ">>> Starting image generation...")?;

    let dir = prepare_output_dir(&config.root)?;
    writeln!(status, ">>> Using output folder: {}", dir.display())?;

    let opts = RenderOptions::default();
    let mut written = Vec::new();
    for spec in chart_specs() {
        let path = dir.join(spec.file_name);
        let chart = (spec.build)().with_context(|| format!("building {}", spec.file_name))?;
        writeln!(status, ">>> Saving: {}", path.display())?;
        chart.render_to_png(&opts, &path)?;
        info!(path = %path.display(), "saved chart");
        written.push(path);
    }

    writeln!(status, ">>> DONE. Check the 'public' folder.")?;
    Ok(written)
}
