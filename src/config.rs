//! Runtime configuration.
//!
//! Resolved in two layers: environment variables first, then command-line flags.
//!
//! - `RPS_SEED`: fixed opponent seed (default: seeded from the OS)
//! - `RPS_ON_INVALID`: `reprompt` or `forfeit` (default: `reprompt`)
//! - `RPS_NO_COLOR` / `NO_COLOR`: any non-empty value disables colors
//!
//! Round count and the set of moves are fixed and deliberately not configurable.

use clap::Parser;

use crate::engine::InvalidInputPolicy;

/// Play five rounds of rock-paper-scissors against the computer.
#[derive(Parser, Debug, Default)]
#[command(name = "rps")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Seed for the computer's moves (default: random)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// What to do with input that is not a move: reprompt or forfeit
    #[arg(long, value_parser = parse_policy)]
    pub on_invalid: Option<InvalidInputPolicy>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Read plain lines from stdin even on a terminal
    #[arg(long)]
    pub plain_input: bool,

    /// Log more (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn parse_policy(s: &str) -> Result<InvalidInputPolicy, String> {
    InvalidInputPolicy::from_str(s)
        .ok_or_else(|| format!("unknown policy {s:?} (expected reprompt or forfeit)"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: Option<u64>,
    pub on_invalid: InvalidInputPolicy,
    pub color: bool,
    pub plain_input: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            on_invalid: InvalidInputPolicy::Reprompt,
            color: true,
            plain_input: false,
        }
    }
}

impl Config {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("RPS_SEED")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .and_then(|s| match s.parse() {
                Ok(seed) => Some(seed),
                Err(_) => {
                    log::warn!("ignoring RPS_SEED={s:?}: not an unsigned integer");
                    None
                }
            });

        let on_invalid = lookup("RPS_ON_INVALID")
            .and_then(|s| {
                let policy = InvalidInputPolicy::from_str(&s);
                if policy.is_none() {
                    log::warn!("ignoring RPS_ON_INVALID={s:?}");
                }
                policy
            })
            .unwrap_or(defaults.on_invalid);

        let no_color = ["RPS_NO_COLOR", "NO_COLOR"]
            .into_iter()
            .any(|key| lookup(key).is_some_and(|v| !v.is_empty()));

        Self {
            seed,
            on_invalid,
            color: !no_color,
            plain_input: defaults.plain_input,
        }
    }

    /// Flags win over the environment.
    pub fn with_args(mut self, args: &Args) -> Self {
        if args.seed.is_some() {
            self.seed = args.seed;
        }
        if let Some(policy) = args.on_invalid {
            self.on_invalid = policy;
        }
        if args.no_color {
            self.color = false;
        }
        if args.plain_input {
            self.plain_input = true;
        }
        self
    }
}
