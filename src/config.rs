use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::constants::*;

/// Shows a folder of project screenshots on a rotating 3D carousel.
#[derive(Debug, Parser)]
#[command(name = "carousel3d", version, about)]
pub struct Args {
    /// Directory holding the slide images (and optionally slides.toml)
    pub image_dir: PathBuf,

    /// Slide manifest to use instead of <IMAGE_DIR>/slides.toml
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Milliseconds between automatic slide changes
    #[arg(long, default_value_t = AUTO_ADVANCE_INTERVAL_MS, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_ms: u64,

    /// Initial window width
    #[arg(long, default_value_t = RENDER_WIDTH / 2)]
    pub width: i32,

    /// Initial window height
    #[arg(long, default_value_t = RENDER_HEIGHT / 2)]
    pub height: i32,

    #[arg(long, default_value_t = FPS)]
    pub fps: u32,

    /// Start with auto-play paused
    #[arg(long)]
    pub paused: bool,
}

/// Runtime settings derived from the command line.
#[derive(Debug, Clone)]
pub struct Settings {
    pub image_dir: PathBuf,
    pub manifest: Option<PathBuf>,
    pub interval: Duration,
    pub window_width: i32,
    pub window_height: i32,
    pub fps: u32,
    pub start_paused: bool,
}

impl From<Args> for Settings {
    fn from(args: Args) -> Self {
        Self {
            image_dir: args.image_dir,
            manifest: args.manifest,
            interval: Duration::from_millis(args.interval_ms),
            window_width: args.width.max(1),
            window_height: args.height.max(1),
            fps: args.fps.max(1),
            start_paused: args.paused,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let settings = Settings::from(Args::parse_from(["carousel3d", "shots"]));
        assert_eq!(settings.image_dir, PathBuf::from("shots"));
        assert_eq!(settings.interval, Duration::from_millis(4000));
        assert_eq!(settings.window_width, RENDER_WIDTH / 2);
        assert_eq!(settings.fps, FPS);
        assert!(!settings.start_paused);
        assert!(settings.manifest.is_none());
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "carousel3d",
            "shots",
            "--manifest",
            "alt.toml",
            "--interval-ms",
            "1500",
            "--paused",
        ]);
        let settings = Settings::from(args);
        assert_eq!(settings.manifest, Some(PathBuf::from("alt.toml")));
        assert_eq!(settings.interval, Duration::from_millis(1500));
        assert!(settings.start_paused);
    }

    #[test]
    fn zero_interval_is_rejected() {
        assert!(Args::try_parse_from(["carousel3d", "shots", "--interval-ms", "0"]).is_err());
    }
}
