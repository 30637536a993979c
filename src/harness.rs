//! Runs change-making strategies side by side, times them and renders an
//! aligned text report.
//!
//! # Example
//! ```
//! use change_making::cs::dynamic::coin_change::SearchLimits;
//! use change_making::harness::{render_report, run_strategies, Strategy};
//!
//! let runs = run_strategies(&Strategy::ALL, &[1, 5, 10, 25, 100], 189, &SearchLimits::default());
//! assert_eq!(runs.len(), Strategy::ALL.len());
//! let report = render_report(&runs);
//! assert!(report.starts_with("greedy:"));
//! ```
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use log::info;

use crate::cs::dynamic::coin_change::{
    change_direct_with_limits, change_greedy, change_memoized_with_limits,
    change_simplex, change_simplex_fast_with_limits, change_tabulated_with_limits, Composition,
    SearchLimits,
};
use crate::error::{Error, Result};

/// The strategies the harness knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Greedy,
    Tabulated,
    Memoized,
    Direct,
    Simplex,
    SimplexFast,
}

impl Strategy {
    pub const ALL: [Strategy; 6] = [
        Strategy::Greedy,
        Strategy::Tabulated,
        Strategy::Memoized,
        Strategy::Direct,
        Strategy::Simplex,
        Strategy::SimplexFast,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Greedy => "greedy",
            Strategy::Tabulated => "tabulated",
            Strategy::Memoized => "memoized",
            Strategy::Direct => "direct",
            Strategy::Simplex => "simplex",
            Strategy::SimplexFast => "simplex_fast",
        }
    }

    /// Runs the strategy and reports its answer as a count vector.
    pub fn solve(
        self,
        denominations: &[u64],
        target: u64,
        limits: &SearchLimits,
    ) -> Result<Composition> {
        match self {
            Strategy::Greedy => change_greedy(denominations, target),
            Strategy::Tabulated => change_tabulated_with_limits(denominations, target, limits),
            Strategy::Memoized => change_memoized_with_limits(denominations, target, limits)
                .and_then(|coins| Composition::from_coins(denominations, &coins)),
            Strategy::Direct => change_direct_with_limits(denominations, target, limits),
            Strategy::Simplex => change_simplex(denominations, target),
            Strategy::SimplexFast => {
                change_simplex_fast_with_limits(denominations, target, limits)
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| Error::InvalidInput(format!("unknown strategy `{}`", s)))
    }
}

/// One timed strategy call.
#[derive(Debug, Clone)]
pub struct Run {
    pub strategy: Strategy,
    pub elapsed: Duration,
    pub outcome: Result<Composition>,
}

/// Calls each strategy once, in order, and records wall time and outcome.
///
/// Failures, including exhausted limits, are kept as outcomes; nothing here panics.
pub fn run_strategies(
    strategies: &[Strategy],
    denominations: &[u64],
    target: u64,
    limits: &SearchLimits,
) -> Vec<Run> {
    strategies
        .iter()
        .map(|&strategy| {
            let start = Instant::now();
            let outcome = strategy.solve(denominations, target, limits);
            let elapsed = start.elapsed();
            info!("{} finished in {:?}", strategy, elapsed);
            Run {
                strategy,
                elapsed,
                outcome,
            }
        })
        .collect()
}

/// `1234567` -> `"1,234,567"`.
fn group_thousands(n: u128) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// One line per run: `name:` padded left, `1,234 ns` padded right, then the
/// composition with its coin count or the error.
pub fn render_report(runs: &[Run]) -> String {
    let rows: Vec<(String, String, String)> = runs
        .iter()
        .map(|run| {
            let outcome = match &run.outcome {
                Ok(comp) => format!("{} ({} coins)", comp, comp.coin_count()),
                Err(e) => e.to_string(),
            };
            (
                format!("{}:", run.strategy),
                format!("{} ns", group_thousands(run.elapsed.as_nanos())),
                outcome,
            )
        })
        .collect();

    let left = rows.iter().map(|r| r.0.len()).max().unwrap_or(0);
    let right = rows.iter().map(|r| r.1.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(name, time, outcome)| format!("{name:<left$} {time:>right$}  {outcome}\n"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Resource;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_parse_strategy() {
        assert_eq!("simplex_fast".parse::<Strategy>(), Ok(Strategy::SimplexFast));
        assert!("bogus".parse::<Strategy>().is_err());
        for strategy in Strategy::ALL {
            assert_eq!(strategy.name().parse::<Strategy>(), Ok(strategy));
        }
    }

    #[test]
    fn test_exhaustion_is_reported_not_raised() {
        let limits = SearchLimits::default().with_max_depth(10);
        let runs = run_strategies(&[Strategy::Memoized, Strategy::Greedy], &[1], 100, &limits);
        assert_eq!(
            runs[0].outcome,
            Err(Error::ResourceExhausted {
                resource: Resource::RecursionDepth,
                limit: 10
            })
        );
        assert_eq!(runs[1].outcome.as_ref().map(|c| c.coin_count()), Ok(100));
    }

    #[test]
    fn test_report_alignment() {
        let runs = vec![
            Run {
                strategy: Strategy::Direct,
                elapsed: Duration::from_nanos(1_500),
                outcome: Ok(Composition::new(vec![1, 2])),
            },
            Run {
                strategy: Strategy::SimplexFast,
                elapsed: Duration::from_nanos(12),
                outcome: Err(Error::Infeasible { target: 3 }),
            },
        ];
        let report = render_report(&runs);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "direct:       1,500 ns  [1, 2] (3 coins)");
        assert_eq!(lines[1], "simplex_fast:    12 ns  no combination of coins sums to 3");
    }
}
