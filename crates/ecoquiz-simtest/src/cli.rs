use std::path::{Path, PathBuf};

use clap::Parser;
use ecoquiz_logic::indicator::IndicatorPolicy;

#[derive(Parser)]
#[command(author, version, about = "Runs sample quiz submissions through the footprint engine", long_about = None)]
pub struct Args {
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    #[arg(short, long, help = "JSON file of sample submissions (defaults to the bundled set)")]
    profiles: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = PolicyArg::Legacy, help = "Indicator dot lighting policy")]
    policy: PolicyArg,

    #[arg(long, default_value_t = false, help = "Print the rendered results screen for each sample")]
    report: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum PolicyArg {
    Legacy,
    Monotonic,
}

impl From<PolicyArg> for IndicatorPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Legacy => IndicatorPolicy::Legacy,
            PolicyArg::Monotonic => IndicatorPolicy::Monotonic,
        }
    }
}

impl Args {
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn profiles(&self) -> Option<&Path> {
        self.profiles.as_deref()
    }

    pub fn policy(&self) -> IndicatorPolicy {
        self.policy.into()
    }

    pub fn report(&self) -> bool {
        self.report
    }
}
