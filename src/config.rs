//! Runtime configuration for the terminal runner.
//!
//! Layers, later wins: built-in defaults, `BLOCKS_*` environment variables,
//! then command-line flags.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use crate::types::DEFAULT_DROP_INTERVAL_MS;

pub const USAGE: &str = "\
usage: falling-blocks [--seed N] [--drop-ms N] [--no-ghost] [--music] [--help]

  --seed N      seed for the piece generator (default: clock)
  --drop-ms N   automatic fall interval in milliseconds (default: 1000)
  --no-ghost    start with the landing preview hidden
  --music       start with background music playing

environment: BLOCKS_SEED, BLOCKS_DROP_MS, BLOCKS_GHOST, BLOCKS_MUSIC";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: u32,
    pub drop_interval_ms: u32,
    pub show_ghost: bool,
    pub music: bool,
}

/// What the binary should do after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Launch {
    Play(Config),
    Help,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            drop_interval_ms: DEFAULT_DROP_INTERVAL_MS,
            show_ghost: true,
            music: false,
        }
    }
}

impl Config {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        if let Some(v) = var("BLOCKS_SEED") {
            config.seed = parse_seed("BLOCKS_SEED", &v)?;
        }
        if let Some(v) = var("BLOCKS_DROP_MS") {
            config.drop_interval_ms = parse_interval("BLOCKS_DROP_MS", &v)?;
        }
        if let Some(v) = var("BLOCKS_GHOST") {
            config.show_ghost = parse_flag("BLOCKS_GHOST", &v)?;
        }
        if let Some(v) = var("BLOCKS_MUSIC") {
            config.music = parse_flag("BLOCKS_MUSIC", &v)?;
        }
        Ok(config)
    }

    /// Apply command-line flags (without the program name).
    pub fn apply_args(mut self, args: &[String]) -> Result<Launch> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --seed"))?;
                    self.seed = parse_seed("--seed", v)?;
                }
                "--drop-ms" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --drop-ms"))?;
                    self.drop_interval_ms = parse_interval("--drop-ms", v)?;
                }
                "--no-ghost" => self.show_ghost = false,
                "--music" => self.music = true,
                "-h" | "--help" => return Ok(Launch::Help),
                other => return Err(anyhow!("unknown argument: {}", other)),
            }
            i += 1;
        }
        Ok(Launch::Play(self))
    }

    /// Environment, then `args`.
    pub fn load(args: &[String]) -> Result<Launch> {
        Self::from_env()?.apply_args(args)
    }
}

fn parse_seed(name: &str, v: &str) -> Result<u32> {
    v.parse::<u32>()
        .map_err(|_| anyhow!("invalid {} value: {}", name, v))
}

fn parse_interval(name: &str, v: &str) -> Result<u32> {
    match v.parse::<u32>() {
        Ok(ms) if ms > 0 => Ok(ms),
        _ => Err(anyhow!("invalid {} value: {} (expected milliseconds > 0)", name, v)),
    }
}

fn parse_flag(name: &str, v: &str) -> Result<bool> {
    match v.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(anyhow!("invalid {} value: {} (expected true/false)", name, v)),
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
