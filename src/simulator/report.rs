//! Simulation report generation.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Statistics for one simulated session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub victories: u32,
    pub defeats: u32,
    pub final_level: u32,
    pub final_gold: u32,
    pub items_owned: u32,
    pub total_rounds: u64,
    pub longest_streak: u32,
    /// Battle number of the first defeat, if there was one
    pub first_defeat: Option<u32>,
}

impl RunStats {
    pub fn battles(&self) -> u32 {
        self.victories + self.defeats
    }
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub total_battles: u64,
    pub win_rate: f64,
    pub avg_final_level: f64,
    pub avg_final_gold: f64,
    pub avg_rounds_per_battle: f64,
    pub avg_items_owned: f64,
    pub best_streak: u32,
    /// Runs that never lost
    pub flawless_runs: u32,
    /// Final level -> number of runs ending there
    pub level_distribution: BTreeMap<u32, u32>,

    // Individual run stats for detailed analysis
    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = f64::from(num_runs.max(1));

        let total_battles: u64 = runs.iter().map(|r| u64::from(r.battles())).sum();
        let total_victories: u64 = runs.iter().map(|r| u64::from(r.victories)).sum();
        let total_rounds: u64 = runs.iter().map(|r| r.total_rounds).sum();

        let win_rate = if total_battles > 0 {
            total_victories as f64 / total_battles as f64
        } else {
            0.0
        };
        let avg_rounds_per_battle = if total_battles > 0 {
            total_rounds as f64 / total_battles as f64
        } else {
            0.0
        };

        let mut level_distribution = BTreeMap::new();
        for run in &runs {
            *level_distribution.entry(run.final_level).or_insert(0) += 1;
        }

        Self {
            num_runs,
            total_battles,
            win_rate,
            avg_final_level: runs.iter().map(|r| f64::from(r.final_level)).sum::<f64>() / divisor,
            avg_final_gold: runs.iter().map(|r| f64::from(r.final_gold)).sum::<f64>() / divisor,
            avg_rounds_per_battle,
            avg_items_owned: runs.iter().map(|r| f64::from(r.items_owned)).sum::<f64>() / divisor,
            best_streak: runs.iter().map(|r| r.longest_streak).max().unwrap_or(0),
            flawless_runs: runs.iter().filter(|r| r.first_defeat.is_none()).count() as u32,
            level_distribution,
            run_stats: runs,
        }
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for SimReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "═══════════════════════════════════════════════════════")?;
        writeln!(f, "                 ARENA SIMULATION REPORT")?;
        writeln!(f, "═══════════════════════════════════════════════════════")?;
        writeln!(
            f,
            "Runs: {}   Battles: {}   Flawless runs: {}\n",
            self.num_runs, self.total_battles, self.flawless_runs
        )?;

        writeln!(f, "── OUTCOMES ───────────────────────────────────────────")?;
        writeln!(f, "  Win Rate:            {:.1}%", self.win_rate * 100.0)?;
        writeln!(f, "  Avg Rounds/Battle:   {:.2}", self.avg_rounds_per_battle)?;
        writeln!(f, "  Best Win Streak:     {}\n", self.best_streak)?;

        writeln!(f, "── PROGRESSION ────────────────────────────────────────")?;
        writeln!(f, "  Avg Final Level:     {:.1}", self.avg_final_level)?;
        writeln!(f, "  Avg Final Gold:      {:.1}", self.avg_final_gold)?;
        writeln!(f, "  Avg Items Owned:     {:.2}\n", self.avg_items_owned)?;

        writeln!(f, "── FINAL LEVELS ───────────────────────────────────────")?;
        for (level, count) in &self.level_distribution {
            let pct = f64::from(*count) / f64::from(self.num_runs.max(1)) * 100.0;
            let bar = "█".repeat((pct / 5.0) as usize);
            writeln!(f, "  Level {:3}: {:>5.1}% {}", level, pct, bar)?;
        }
        write!(f, "═══════════════════════════════════════════════════════")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(victories: u32, defeats: u32, level: u32) -> RunStats {
        RunStats {
            victories,
            defeats,
            final_level: level,
            final_gold: 10 * victories,
            items_owned: 1,
            total_rounds: u64::from(victories + defeats) * 5,
            longest_streak: victories,
            first_defeat: (defeats > 0).then_some(victories + 1),
        }
    }

    #[test]
    fn test_report_aggregates() {
        let report = SimReport::from_runs(vec![run(3, 1, 3), run(4, 0, 4), run(1, 3, 3)]);
        assert_eq!(report.num_runs, 3);
        assert_eq!(report.total_battles, 12);
        assert!((report.win_rate - 8.0 / 12.0).abs() < 1e-9);
        assert!((report.avg_final_level - 10.0 / 3.0).abs() < 1e-9);
        assert!((report.avg_rounds_per_battle - 5.0).abs() < 1e-9);
        assert_eq!(report.best_streak, 4);
        assert_eq!(report.flawless_runs, 1);
        assert_eq!(report.level_distribution.get(&3), Some(&2));
        assert_eq!(report.level_distribution.get(&4), Some(&1));
    }

    #[test]
    fn test_empty_report_has_no_nan() {
        let report = SimReport::from_runs(Vec::new());
        assert_eq!(report.num_runs, 0);
        assert_eq!(report.win_rate, 0.0);
        assert_eq!(report.avg_final_level, 0.0);
        assert!(report.to_string().contains("Runs: 0"));
    }

    #[test]
    fn test_text_report() {
        let report = SimReport::from_runs(vec![run(2, 2, 2)]);
        let text = report.to_string();
        assert!(text.contains("ARENA SIMULATION REPORT"));
        assert!(text.contains("Win Rate:            50.0%"));
        assert!(text.contains("Level   2: 100.0%"));
    }

    #[test]
    fn test_json_report_skips_run_details() {
        let report = SimReport::from_runs(vec![run(2, 0, 2)]);
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["num_runs"], 1);
        assert_eq!(json["total_battles"], 2);
        assert_eq!(json["level_distribution"]["2"], 1);
        assert!(json.get("run_stats").is_none());
    }
}
