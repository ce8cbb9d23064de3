// File: crates/graph-assets/src/config.rs
// Summary: Command-line arguments and the resolved output location.

use std::path::{Path, PathBuf};

use clap::Parser;

/// Output folder, relative to the root, that the frontend serves static files from.
pub const PUBLIC_SUBDIR: &str = "frontend/public";

#[derive(Debug, Parser)]
#[command(name = "generate-images", about = "Render the placeholder chart images for the frontend")]
pub struct Args {
    /// Project root; images land in <ROOT>/frontend/public.
    #[arg(long, env = "GRAPH_ASSETS_ROOT", default_value = ".")]
    pub root: PathBuf,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub root: PathBuf,
}

impl Config {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a relative root against the current directory so status lines show
    /// where files actually went.
    pub fn from_args(args: Args) -> anyhow::Result<Self> {
        let root = if args.root.is_absolute() {
            args.root
        } else {
            std::env::current_dir()?.join(args.root)
        };
        // Re-collecting components drops `.` segments (`/cwd/.` becomes `/cwd`).
        Ok(Self { root: root.components().collect() })
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.join(Path::new(PUBLIC_SUBDIR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_dir_is_frontend_public() {
        let cfg = Config::new("/srv/app");
        assert_eq!(cfg.output_dir(), PathBuf::from("/srv/app/frontend/public"));
    }

    #[test]
    fn root_defaults_to_current_dir() {
        let args = Args::try_parse_from(["generate-images"]).unwrap();
        let cfg = Config::from_args(args).unwrap();
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(cfg.root.as_os_str(), cwd.as_os_str());
        assert_eq!(cfg.output_dir().display().to_string(), cwd.join("frontend/public").display().to_string());
    }

    #[test]
    fn relative_root_drops_current_dir_segments() {
        let args = Args::try_parse_from(["generate-images", "--root", "./site/."]).unwrap();
        let cfg = Config::from_args(args).unwrap();
        let shown = cfg.output_dir().display().to_string();
        assert!(!shown.contains("/./"), "{shown}");
        assert_eq!(cfg.root.as_os_str(), std::env::current_dir().unwrap().join("site").as_os_str());
    }

    #[test]
    fn explicit_root_flag() {
        let args = Args::try_parse_from(["generate-images", "--root", "/tmp/site"]).unwrap();
        assert_eq!(Config::from_args(args).unwrap().root, PathBuf::from("/tmp/site"));
    }
}
