// ─────────────────────────────────────────────────────────────────────
// Nuclide Analyzer — Terminal Session
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Menu, interactive loop and batch printout over any reader/writer pair.

use nuclide_core::batch::analyze_all;
use nuclide_core::catalogue::PREDEFINED_ISOTOPES;
use nuclide_core::series::PlotSeries;
use nuclide_core::NuclideCalculator;
use nuclide_types::error::NuclideResult;
use nuclide_types::nuclide::NumericInput;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Sentinel that ends the interactive loop.
const QUIT: &str = "q";

pub struct Session<'c, R, W> {
    calculator: &'c NuclideCalculator,
    input: R,
    output: W,
}

impl<'c, R: BufRead, W: Write> Session<'c, R, W> {
    pub fn new(calculator: &'c NuclideCalculator, input: R, output: W) -> Self {
        Session {
            calculator,
            input,
            output,
        }
    }

    /// Print `prompt` and read one trimmed line. `None` on end of input.
    fn prompt(&mut self, prompt: &str) -> NuclideResult<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Read a Z or A value; `None` when the user quits or input ends.
    fn prompt_value(&mut self, prompt: &str) -> NuclideResult<Option<String>> {
        Ok(self
            .prompt(prompt)?
            .filter(|v| !v.eq_ignore_ascii_case(QUIT)))
    }

    /// Top-level menu: 1 interactive, 2 batch, 3 exit.
    pub fn run_menu(&mut self, series_path: Option<&str>) -> NuclideResult<()> {
        writeln!(self.output, "NUCLEUS ANALYZER")?;
        writeln!(self.output, "1 - Interactive mode")?;
        writeln!(self.output, "2 - Analyse predefined isotopes")?;
        writeln!(self.output, "3 - Exit")?;

        loop {
            let Some(choice) = self.prompt("\nSelect mode (1-3): ")? else {
                break;
            };
            match choice.as_str() {
                "1" => self.run_interactive()?,
                "2" => self.run_batch(series_path)?,
                "3" => {
                    writeln!(self.output, "Exiting")?;
                    break;
                }
                _ => writeln!(self.output, "Invalid choice. Please enter 1, 2 or 3")?,
            }
        }
        Ok(())
    }

    /// Repeatedly read Z and A and print the analysis until 'q' or end of input.
    pub fn run_interactive(&mut self) -> NuclideResult<()> {
        writeln!(self.output, "\n=== INTERACTIVE NUCLEUS ANALYSIS ===")?;
        loop {
            writeln!(self.output, "\n{}", "=".repeat(50))?;
            writeln!(self.output, "Enter nucleus parameters (or '{QUIT}' to quit):")?;

            let Some(z) = self.prompt_value("Atomic number Z: ")? else {
                break;
            };
            let Some(a) = self.prompt_value("Mass number A: ")? else {
                break;
            };

            let z = NumericInput::parse(&z);
            let a = NumericInput::parse(&a);
            debug!(?z, ?a, "interactive request");
            match self.calculator.analyze(z, a) {
                Ok(report) => writeln!(self.output, "\n{report}")?,
                Err(e) => writeln!(self.output, "Input error: {e}")?,
            }
        }
        Ok(())
    }

    /// Analyse the predefined isotopes; optionally write plot series JSON.
    pub fn run_batch(&mut self, series_path: Option<&str>) -> NuclideResult<()> {
        writeln!(self.output, "NUCLEUS ANALYSIS")?;
        let outcome = analyze_all(self.calculator, &PREDEFINED_ISOTOPES);

        for report in &outcome.reports {
            writeln!(self.output, "\n{report}")?;
        }
        for skipped in &outcome.skipped {
            writeln!(self.output, "Analysis of {} failed: {}", skipped.name, skipped.error)?;
        }

        if let Some(path) = series_path {
            match PlotSeries::from_reports(&outcome.reports, self.calculator.config().r0_fm) {
                Ok(series) => {
                    series.write_json(path)?;
                    info!(path, "plot series written");
                    writeln!(self.output, "\nPlot series written to {path}")?;
                }
                Err(e) => writeln!(self.output, "No plot series: {e}")?,
            }
        }
        Ok(())
    }
}
