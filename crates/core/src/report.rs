use console::style;

/// Accumulates check outcomes for a whole run. One instance lives for the
/// process; every scenario records into it and the orchestrator reads it once
/// at the end.
#[derive(Debug, Default)]
pub struct TestReport {
    passed: u32,
    failed: u32,
    failures: Vec<String>,
}

impl TestReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a passing check and prints its confirmation line.
    pub fn success(&mut self, label: &str) {
        self.passed += 1;
        println!("{} {label}", style("PASS").green().bold());
    }

    /// Records a failing check, keeping `label: detail` for the summary.
    pub fn failure(&mut self, label: &str, detail: &str) {
        self.failed += 1;
        self.failures.push(format!("{label}: {detail}"));
        println!("{} {label}: {detail}", style("FAIL").red().bold());
    }

    /// Prints the pass/total line and, when anything failed, the ordered list
    /// of failure descriptions.
    pub fn summary(&self) {
        let total = self.passed + self.failed;
        println!(
            "\n{} {}/{} checks passed",
            style("Summary:").bold(),
            self.passed,
            total
        );
        if !self.failures.is_empty() {
            println!("\n{}", style("Failures:").red().bold());
            for failure in &self.failures {
                println!("  - {failure}");
            }
        }
    }

    pub fn passed(&self) -> u32 {
        self.passed
    }

    pub fn failed(&self) -> u32 {
        self.failed
    }

    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}
