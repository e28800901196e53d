// ─────────────────────────────────────────────────────────────────────
// Nuclide Analyzer — CLI Arguments
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

pub const USAGE: &str = "\
Usage: nuclide-analyzer [MODE] [OPTIONS]

Modes:
  (none)        menu: choose interactive or batch mode
  interactive   read Z and A repeatedly, 'q' to quit
  batch         analyse the predefined isotopes

Options:
  --config <path>   load coefficients from a JSON file
  --series <path>   (batch) write plot series JSON to <path>
  -h, --help        show this message";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Menu,
    Interactive,
    Batch,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub mode: Mode,
    pub config: Option<String>,
    pub series: Option<String>,
}

impl Args {
    pub fn parse<I, S>(raw: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = Args {
            mode: Mode::Menu,
            config: None,
            series: None,
        };
        let mut mode_set = false;
        let mut it = raw.into_iter().map(Into::into);

        while let Some(arg) = it.next() {
            match arg.as_str() {
                "-h" | "--help" => args.mode = Mode::Help,
                "--config" => {
                    args.config = Some(it.next().ok_or("--config requires a path")?);
                }
                "--series" => {
                    args.series = Some(it.next().ok_or("--series requires a path")?);
                }
                "interactive" | "batch" if !mode_set => {
                    mode_set = true;
                    if args.mode != Mode::Help {
                        args.mode = if arg == "interactive" {
                            Mode::Interactive
                        } else {
                            Mode::Batch
                        };
                    }
                }
                other => return Err(format!("unexpected argument '{other}'")),
            }
        }

        if args.series.is_some() && !matches!(args.mode, Mode::Batch | Mode::Help) {
            return Err("--series is only valid in batch mode".to_string());
        }
        Ok(args)
    }
}
