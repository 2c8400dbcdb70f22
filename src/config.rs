//! Session configuration from the environment.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `DUNGEON_MAP` | map file | `map` |
//! | `DUNGEON_SEED` | treasure RNG seed | from the clock |
//! | `DUNGEON_VIEW_DEPTH` | cells drawn ahead | 5 |
//! | `DUNGEON_REAR_CLOSURE` | seal wall cells from behind (`1`/`true`/`0`/`false`) | on |
//! | `DUNGEON_LOG_PATH` | append log lines to this file | no logging |
//! | `DUNGEON_LOG_LEVEL` | `error` … `trace` | `info` |
//!
//! Unparsable values fall back to the default. The first command line
//! argument, if any, replaces `DUNGEON_MAP`.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use log::LevelFilter;

use crate::engine::SweepOptions;
use crate::types::VIEW_DEPTH;

pub const DEFAULT_MAP_PATH: &str = "map";

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub map_path: PathBuf,
    pub seed: u32,
    pub view_depth: i32,
    pub rear_closure: bool,
    pub log_path: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            map_path: PathBuf::from(DEFAULT_MAP_PATH),
            seed: clock_seed(),
            view_depth: VIEW_DEPTH,
            rear_closure: true,
            log_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl SessionConfig {
    /// Create from `DUNGEON_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from any key lookup, e.g. a map in tests
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let map_path = var("DUNGEON_MAP")
            .map(PathBuf::from)
            .unwrap_or(defaults.map_path);

        let seed = var("DUNGEON_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.seed);

        let view_depth = var("DUNGEON_VIEW_DEPTH")
            .and_then(|s| s.parse().ok())
            .filter(|d: &i32| *d >= 0)
            .unwrap_or(defaults.view_depth);

        let rear_closure = var("DUNGEON_REAR_CLOSURE")
            .and_then(|s| parse_flag(&s))
            .unwrap_or(defaults.rear_closure);

        let log_path = var("DUNGEON_LOG_PATH").map(PathBuf::from);

        let log_level = var("DUNGEON_LOG_LEVEL")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.log_level);

        Self {
            map_path,
            seed,
            view_depth,
            rear_closure,
            log_path,
            log_level,
        }
    }

    /// Apply command line arguments (program name already skipped)
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Some(path) = args.into_iter().next() {
            self.map_path = PathBuf::from(path.into());
        }
        self
    }

    pub fn sweep_options(&self) -> SweepOptions {
        SweepOptions {
            view_depth: self.view_depth,
            rear_closure: self.rear_closure,
            ..SweepOptions::default()
        }
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.to_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

fn clock_seed() -> u32 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (now.as_secs() as u32) ^ now.subsec_nanos()
}
