//! Runtime configuration: environment first, then command-line flags.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use crate::types::TICK_MS;

pub const USAGE: &str = "\
Usage: blockfall [OPTIONS]

Options:
  --seed N       piece sequence seed (default: from the clock)
  --tick-ms N    frame timestep in milliseconds (default: 16)
  --log PATH     append a JSON-lines event journal to PATH
  -h, --help     print this help

Environment:
  BLOCKFALL_SEED, BLOCKFALL_TICK_MS, BLOCKFALL_LOG_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Fixed seed; `None` picks one from the clock at session start.
    pub seed: Option<u32>,
    pub tick_ms: u32,
    pub log_path: Option<String>,
    /// `--help` was given; the caller prints [`USAGE`] and exits.
    pub show_help: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tick_ms: TICK_MS,
            log_path: None,
            show_help: false,
        }
    }
}

impl RunConfig {
    /// Read `BLOCKFALL_*` variables. Unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("BLOCKFALL_SEED").and_then(|s| s.trim().parse().ok());

        let tick_ms = lookup("BLOCKFALL_TICK_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(TICK_MS)
            .max(1);

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            seed,
            tick_ms,
            log_path,
            show_help: false,
        }
    }

    /// Override with flags (program name already stripped).
    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    let v = flag_value(args, &mut i, "--seed")?;
                    let seed = v
                        .parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
                    self.seed = Some(seed);
                }
                "--tick-ms" => {
                    let v = flag_value(args, &mut i, "--tick-ms")?;
                    let tick = v
                        .parse::<u32>()
                        .map_err(|_| anyhow!("invalid --tick-ms value: {}", v))?;
                    self.tick_ms = tick.max(1);
                }
                "--log" => {
                    let v = flag_value(args, &mut i, "--log")?;
                    let v = v.trim();
                    self.log_path = if v.is_empty() { None } else { Some(v.to_string()) };
                }
                "-h" | "--help" => self.show_help = true,
                other => return Err(anyhow!("unknown argument: {}", other)),
            }
            i += 1;
        }
        Ok(())
    }

    /// The configured seed, or one derived from the system clock.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

fn flag_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing value for {}", flag))
}

fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    // Fold the high bits in so consecutive launches still differ.
    (nanos ^ (nanos >> 32)) as u32
}
