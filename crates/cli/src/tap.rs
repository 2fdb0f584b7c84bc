//! TAP (Test Anything Protocol) v14 report for the conformance runner.

use std::io::{self, Write};

#[derive(Debug, Default)]
pub struct Tap {
    results: Vec<TapResult>,
}

#[derive(Debug)]
struct TapResult {
    desc: String,
    /// `None` on success; diagnostics on failure.
    failure: Option<String>,
}

impl Tap {
    pub fn new() -> Self {
        Tap::default()
    }

    pub fn ok(&mut self, desc: impl Into<String>) {
        self.results.push(TapResult {
            desc: desc.into(),
            failure: None,
        });
    }

    pub fn not_ok(&mut self, desc: impl Into<String>, diagnostics: impl Into<String>) {
        self.results.push(TapResult {
            desc: desc.into(),
            failure: Some(diagnostics.into()),
        });
    }

    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| r.failure.is_some()).count()
    }

    /// Print the report to stdout.
    pub fn finish(self) {
        let stdout = io::stdout();
        let _ = self.write_to(&mut stdout.lock());
    }

    fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "TAP version 14")?;
        writeln!(out, "1..{}", self.results.len())?;
        for (i, result) in self.results.iter().enumerate() {
            match &result.failure {
                None => writeln!(out, "ok {} - {}", i + 1, result.desc)?,
                Some(diag) => {
                    writeln!(out, "not ok {} - {}", i + 1, result.desc)?;
                    for line in diag.lines() {
                        writeln!(out, "  # {}", line)?;
                    }
                }
            }
        }
        let failed = self.failure_count();
        writeln!(out, "# tests {}", self.results.len())?;
        writeln!(out, "# pass  {}", self.results.len() - failed)?;
        writeln!(out, "# fail  {}", failed)
    }
}
