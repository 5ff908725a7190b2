use colored::Colorize;
use std::path::Path;
use std::time::{Duration, Instant};

use crate::adder::{sum_sequential, ParallelAdder};
use crate::config::SumConfig;
use crate::error::SumError;
use crate::report::{Report, Summary};
use crate::sequence::Sequence;
use crate::variant::Variant;

/// Outcome: the three arrays of one run plus how the sum went
#[derive(Debug, Clone)]
pub struct Outcome {
    pub config: SumConfig,
    pub a: Sequence,
    pub b: Sequence,
    pub c: Sequence,
    pub workers: usize,
    pub elapsed: Duration,
    pub matches_reference: bool,
}

impl Outcome {
    pub fn report(&self) -> Report<'_> {
        Report::new(self.config.display_count())
            .array("a", &self.a)
            .array("b", &self.b)
            .array("c", &self.c)
            .summary(Summary {
                len: self.config.len(),
                workers: self.workers,
                chunk_size: self.config.chunk_size().get(),
                elapsed: self.elapsed,
                matches_reference: self.matches_reference,
            })
    }
}

/// Fills both inputs with the config's formulas, adds them in parallel and
/// checks the result against a plain sequential loop.
pub fn run(config: &SumConfig) -> Result<Outcome, SumError> {
    let variant = config.variant();
    let a = variant.fill_a(config.len());
    let b = variant.fill_b(config.len());

    let adder = ParallelAdder::new(config);
    let mut c = Sequence::zeroed(config.len());

    let start = Instant::now();
    adder.sum_into(&a, &b, c.as_mut_slice())?;
    let elapsed = start.elapsed();

    let matches_reference = c.bit_eq(&sum_sequential(&a, &b)?);

    Ok(Outcome {
        config: *config,
        a,
        b,
        c,
        workers: adder.workers(),
        elapsed,
        matches_reference,
    })
}

/// Shared `main` of the demo binaries. The only accepted argument is an
/// optional TOML file overriding the variant's constants.
pub fn main_with_args(variant: Variant, args: impl IntoIterator<Item = String>) -> i32 {
    let mut args = args.into_iter();
    let program = args.next().unwrap_or_else(|| "sum_arrays".to_string());
    let path = args.next();
    if args.next().is_some() {
        eprintln!("{} {} [config.toml]", "usage:".yellow().bold(), program);
        return 2;
    }

    let config = match path {
        Some(path) => match SumConfig::load_with(Path::new(&path), variant) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{} {}", "error:".red().bold(), err);
                return 1;
            }
        },
        None => variant.config(),
    };

    match run(&config) {
        Ok(outcome) => {
            outcome.report().print();
            0
        }
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_run_secondary_preset() {
        let config = Variant::Secondary.config();
        let outcome = run(&config).unwrap();

        assert_eq!(outcome.c.len(), 10_000);
        assert!(outcome.matches_reference);
        assert_eq!(outcome.a.head(4), &[0.0, 10.0, 20.0, 30.0]);

        let text = outcome.report().render();
        assert!(text.starts_with("Adding arrays in parallel!\n"));
        assert!(text.contains("Printing the first 8 values of array c:\n9 - 22.6 - 36.2 - 49.8 - "));
    }

    #[test]
    fn test_run_empty() {
        let config = SumConfig::builder().len(0).build().unwrap();
        let outcome = run(&config).unwrap();
        assert!(outcome.c.is_empty());
        assert!(outcome.matches_reference);
    }

    #[test]
    fn test_main_without_args_succeeds() {
        let args = vec!["sum_arrays".to_string()];
        assert_eq!(main_with_args(Variant::Primary, args), 0);
    }

    #[test]
    fn test_main_with_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "len = 30\nchunk_size = 4\nworkers = 2").unwrap();
        let args = vec![
            "sum_arrays".to_string(),
            file.path().display().to_string(),
        ];
        assert_eq!(main_with_args(Variant::Primary, args), 0);
    }

    #[test]
    fn test_run_fills_missing_keys_from_binary_variant() {
        let config = SumConfig::from_toml_str_with("chunk_size = 64", Variant::Secondary).unwrap();
        let outcome = run(&config).unwrap();

        assert_eq!(outcome.c.len(), 10_000);
        assert_eq!(outcome.config.display_count(), 8);
        assert_eq!(outcome.a[1], 10.0);
        assert!(outcome.matches_reference);
    }

    #[test]
    fn test_run_uses_formulas_of_file_variant() {
        let config =
            SumConfig::from_toml_str_with("variant = \"secondary\"", Variant::Primary).unwrap();
        let outcome = run(&config).unwrap();

        assert_eq!(outcome.a.head(3), &[0.0, 10.0, 20.0]);
        assert_eq!(outcome.b.head(1), &[Variant::Secondary.b_at(0)]);
        assert_eq!(outcome.c.len(), 10_000);
    }

    #[test]
    fn test_main_rejects_extra_arguments() {
        let args = vec![
            "sum_arrays".to_string(),
            "run.toml".to_string(),
            "extra".to_string(),
        ];
        assert_eq!(main_with_args(Variant::Primary, args), 2);
    }

    #[test]
    fn test_main_with_bad_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "chunk_size = 0").unwrap();
        let args = vec![
            "sum_arrays".to_string(),
            file.path().display().to_string(),
        ];
        assert_eq!(main_with_args(Variant::Primary, args), 1);
    }
}
