//! Text output formatter for human-readable display
//!
//! This module provides:
//! - A block per target and routing engine with model, version and release track
//! - The list of services disrupted by ISSU/ICU, or the advisory notice
//! - Explicit lines for unreachable devices, non-SRX models and unparseable versions
//! - A compact one-line-per-engine mode for --quiet

use crate::compat::Classification;
use crate::domain::{Assessment, EngineReport, LimitationSet, TargetReport};
use crate::orchestrator::RunResult;
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Rule printed between targets
const SEPARATOR: &str = "--------------------";

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            color: true,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    fn bold(&self, s: &str) -> String {
        if self.color {
            s.bold().to_string()
        } else {
            s.to_string()
        }
    }

    fn red(&self, s: &str) -> String {
        if self.color {
            s.red().bold().to_string()
        } else {
            s.to_string()
        }
    }

    fn yellow(&self, s: &str) -> String {
        if self.color {
            s.yellow().to_string()
        } else {
            s.to_string()
        }
    }

    fn green(&self, s: &str) -> String {
        if self.color {
            s.green().to_string()
        } else {
            s.to_string()
        }
    }

    fn dimmed(&self, s: &str) -> String {
        if self.color {
            s.dimmed().to_string()
        } else {
            s.to_string()
        }
    }

    /// `RE0` or `RE0 (node0)`
    fn engine_title(report: &EngineReport) -> String {
        match &report.engine.name {
            Some(name) => format!("RE{} ({})", report.index, name),
            None => format!("RE{}", report.index),
        }
    }

    /// Write the ISSU verdict for a limitation set
    fn format_limitations(
        &self,
        set: LimitationSet,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Verbose {
            writeln!(writer, "\tRelease range: {}", set.name())?;
        }

        if let Some(notice) = set.notice() {
            let notice = if set.forbids_issu() {
                self.red(notice)
            } else {
                self.green(notice)
            };
            writeln!(writer)?;
            writeln!(writer, "\t{}", notice)?;
            return Ok(());
        }

        let services = set.services();
        writeln!(writer)?;
        writeln!(
            writer,
            "\tThe following {} services are not supported in ISSU/ICU:",
            services.len()
        )?;
        writeln!(writer)?;
        writeln!(writer, "\t{}", self.yellow(&services.join(", ")))
    }

    /// Write the full block for one routing engine
    fn format_engine(&self, report: &EngineReport, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(writer, "{}:", self.bold(&Self::engine_title(report)))?;
        writeln!(writer, "\tModel: {}", report.engine.model)?;

        match &report.assessment {
            Assessment::UnsupportedModel => writeln!(
                writer,
                "\t{}",
                self.red(&format!(
                    "This device doesn't look to be an SRX ({}). Skipped.",
                    report.engine.model
                ))
            ),
            Assessment::InvalidVersion { error } => {
                writeln!(writer, "\tJUNOS Version: {}", report.engine.version)?;
                writeln!(writer, "\t{}", self.red(&format!("Cannot classify: {}", error)))
            }
            Assessment::Classified {
                version,
                classification,
            } => {
                writeln!(writer, "\tJUNOS Version: {}", report.engine.version)?;
                writeln!(
                    writer,
                    "\tSoftware Release Information: {}",
                    version.release.label()
                )?;
                match classification {
                    Classification::Limited(set) => self.format_limitations(*set, writer),
                    Classification::NotCovered => {
                        writeln!(writer)?;
                        writeln!(
                            writer,
                            "\t{}",
                            self.yellow("No ISSU limitation data for this release (not covered by KB17946)")
                        )
                    }
                }
            }
        }
    }

    /// One summary line per routing engine
    fn format_engine_line(
        &self,
        host: &str,
        report: &EngineReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let verdict = match &report.assessment {
            Assessment::UnsupportedModel => self.red("not an SRX"),
            Assessment::InvalidVersion { error } => self.red(&error.to_string()),
            Assessment::Classified {
                classification: Classification::NotCovered,
                ..
            } => self.yellow("not covered"),
            Assessment::Classified {
                classification: Classification::Limited(set),
                ..
            } => match set.notice() {
                Some(notice) if set.forbids_issu() => self.red(notice),
                Some(notice) => self.green(notice),
                None => {
                    let count = set.services().len();
                    let noun = if count == 1 { "service" } else { "services" };
                    self.yellow(&format!("{} {} affected", count, noun))
                }
            },
        };

        writeln!(
            writer,
            "{} {} {} {}: {}",
            host,
            Self::engine_title(report),
            report.engine.model,
            report.engine.version,
            verdict
        )
    }

    /// Write the report block for one target
    fn format_target(&self, target: &TargetReport, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Quiet {
            if let Some(error) = &target.error {
                return writeln!(writer, "{}: {}", target.host, self.red(error));
            }
            for report in &target.engines {
                self.format_engine_line(&target.host, report, writer)?;
            }
            return Ok(());
        }

        if let Some(error) = &target.error {
            writeln!(writer, "SRX {}: {}", self.bold(&target.host), self.red(error))?;
        } else {
            writeln!(
                writer,
                "SRX {} has {} routing-engines",
                self.bold(&target.host),
                target.engines.len()
            )?;
            writeln!(writer)?;
            for report in &target.engines {
                self.format_engine(report, writer)?;
            }
        }

        writeln!(writer, "{}", SEPARATOR)?;
        writeln!(writer)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, result: &RunResult, writer: &mut dyn Write) -> std::io::Result<()> {
        for target in &result.targets {
            self.format_target(target, writer)?;
        }

        if self.verbosity == Verbosity::Verbose {
            writeln!(
                writer,
                "{}",
                self.dimmed(&format!(
                    "Checked {} device(s) at {}, {} unreachable",
                    result.targets.len(),
                    result.checked_at.format("%Y/%m/%d %H:%M:%S UTC"),
                    result.failed_targets()
                ))
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RoutingEngine;
    use chrono::Utc;

    fn render(verbosity: Verbosity, targets: Vec<TargetReport>) -> String {
        let result = RunResult {
            checked_at: Utc::now(),
            targets,
        };
        let mut out = Vec::new();
        TextFormatter::with_color(verbosity, false)
            .format(&result, &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    fn single(host: &str, model: &str, version: &str) -> TargetReport {
        TargetReport::checked(
            host,
            vec![EngineReport::assess(0, RoutingEngine::new(model, version))],
        )
    }

    #[test]
    fn test_service_list() {
        let out = render(
            Verbosity::Normal,
            vec![single("srx240-1", "srx240h", "12.1X44-D10.4")],
        );
        assert!(out.contains("SRX srx240-1 has 1 routing-engines"));
        assert!(out.contains("RE0:"));
        assert!(out.contains("\tModel: srx240h"));
        assert!(out.contains("\tJUNOS Version: 12.1X44-D10.4"));
        assert!(out.contains("Special (eXception) release software"));
        assert!(out.contains("The following 2 services are not supported in ISSU/ICU:"));
        assert!(out.contains("\tJFLOW, GPRS/GTP\n"));
        assert!(out.contains(SEPARATOR));
    }

    #[test]
    fn test_do_not_use_notice() {
        let out = render(Verbosity::Normal, vec![single("old", "srx650", "10.4R3.4")]);
        assert!(out.contains("\tDo not use ISSU\n"));
        assert!(!out.contains("The following"));
    }

    #[test]
    fn test_no_limitations_notice() {
        let out = render(Verbosity::Normal, vec![single("new", "srx550", "12.1X46-D10")]);
        assert!(out.contains("\tNo limitations\n"));
    }

    #[test]
    fn test_not_covered_is_explicit() {
        let out = render(Verbosity::Normal, vec![single("srx", "srx550", "15.1X49-D100")]);
        assert!(out.contains("No ISSU limitation data for this release"));
    }

    #[test]
    fn test_unsupported_model() {
        let out = render(Verbosity::Normal, vec![single("mx", "mx480", "12.1R1")]);
        assert!(out.contains("This device doesn't look to be an SRX (mx480). Skipped."));
        assert!(!out.contains("JUNOS Version"));
    }

    #[test]
    fn test_invalid_version() {
        let out = render(Verbosity::Normal, vec![single("srx", "srx240h", "banana")]);
        assert!(out.contains("Cannot classify: unrecognized version string 'banana'"));
    }

    #[test]
    fn test_failed_target() {
        let out = render(
            Verbosity::Normal,
            vec![TargetReport::failed("srx-down", "failed to connect to srx-down: refused")],
        );
        assert!(out.contains("SRX srx-down: failed to connect"));
    }

    #[test]
    fn test_cluster_node_names() {
        let target = TargetReport::checked(
            "cluster",
            vec![
                EngineReport::assess(0, RoutingEngine::new("srx1400", "11.4R5").with_name("node0")),
                EngineReport::assess(1, RoutingEngine::new("srx1400", "11.4R5").with_name("node1")),
            ],
        );
        let out = render(Verbosity::Normal, vec![target]);
        assert!(out.contains("SRX cluster has 2 routing-engines"));
        assert!(out.contains("RE0 (node0):"));
        assert!(out.contains("RE1 (node1):"));
        assert!(out.contains("VPN, GRE/IPIP, Multicast, JFLOW, GPRS/GTP/SCTP"));
    }

    #[test]
    fn test_verbose_shows_range_and_footer() {
        let out = render(Verbosity::Verbose, vec![single("srx", "srx240h", "11.4R4")]);
        assert!(out.contains("\tRelease range: 11.4 R1-4"));
        assert!(out.contains("Checked 1 device(s)"));
    }

    #[test]
    fn test_quiet_one_line_per_engine() {
        let out = render(
            Verbosity::Quiet,
            vec![
                single("a", "srx240h", "12.1X45-D10"),
                single("b", "srx240h", "10.4R1"),
                single("d", "srx240h", "12.1X44-D10"),
                TargetReport::failed("c", "timeout while talking to c"),
            ],
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "a RE0 srx240h 12.1X45-D10: 1 service affected",
                "b RE0 srx240h 10.4R1: Do not use ISSU",
                "d RE0 srx240h 12.1X44-D10: 2 services affected",
                "c: timeout while talking to c",
            ]
        );
    }

    #[test]
    fn test_new_uses_color() {
        let formatter = TextFormatter::new(Verbosity::Normal);
        assert!(formatter.color);
    }
}
