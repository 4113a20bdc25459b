use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use cfgnorm::load::GrammarLoadExt;
use cfgnorm::transform::{EpsilonPolicy, NormalizeOptions, Normalizer, Stage};
use cfgnorm::Grammar;

/// Normalizes a context-free grammar: removes epsilon and chain rules, direct
/// left recursion, and factors common leading symbols.
#[derive(Parser, Debug)]
#[command(name = "cfgnorm", version)]
struct Cli {
    /// BNF file to read, or `-` for standard input.
    file: PathBuf,
    /// Which nonterminals keep an empty alternative.
    #[arg(long, value_enum, default_value_t = EpsilonPolicyArg::StartOnly)]
    epsilon_policy: EpsilonPolicyArg,
    /// Largest number of nullable occurrences in one alternative.
    #[arg(long, default_value_t = 16, conflicts_with = "no_limit")]
    max_nullable: usize,
    /// Disables the nullable occurrence limit.
    #[arg(long)]
    no_limit: bool,
    /// Stops after the given stage.
    #[arg(long, value_enum)]
    stop_after: Option<StageArg>,
    /// Prints the grammar after every stage.
    #[arg(long)]
    trace: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum EpsilonPolicyArg {
    StartOnly,
    AllNullable,
    Discard,
}

impl EpsilonPolicyArg {
    fn to_core(self) -> EpsilonPolicy {
        match self {
            EpsilonPolicyArg::StartOnly => EpsilonPolicy::StartOnly,
            EpsilonPolicyArg::AllNullable => EpsilonPolicy::AllNullable,
            EpsilonPolicyArg::Discard => EpsilonPolicy::Discard,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum StageArg {
    Epsilon,
    Chain,
    LeftRecursion,
    LeftFactor,
}

impl StageArg {
    fn to_core(self) -> Stage {
        match self {
            StageArg::Epsilon => Stage::Epsilon,
            StageArg::Chain => Stage::ChainRules,
            StageArg::LeftRecursion => Stage::LeftRecursion,
            StageArg::LeftFactor => Stage::LeftFactoring,
        }
    }
}

impl Cli {
    fn options(&self) -> NormalizeOptions {
        let limit = if self.no_limit {
            None
        } else {
            Some(self.max_nullable)
        };
        NormalizeOptions::new()
            .epsilon_policy(self.epsilon_policy.to_core())
            .max_nullable_occurrences(limit)
            .stop_after(self.stop_after.map(StageArg::to_core))
    }

    fn read_input(&self) -> Result<String> {
        if self.file.as_os_str() == "-" {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read standard input")?;
            Ok(text)
        } else {
            fs::read_to_string(&self.file)
                .with_context(|| format!("failed to read `{}`", self.file.display()))
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let text = cli.read_input()?;
    let grammar = Grammar::load(&text)
        .with_context(|| format!("failed to load `{}`", cli.file.display()))?;
    info!(
        "loaded {} nonterminals with {} alternatives",
        grammar.num_nonterminals(),
        grammar.num_productions()
    );

    let normalizer = Normalizer::new(cli.options());
    if cli.trace {
        println!("# input\n{}", grammar);
        let stages = normalizer
            .run_traced(&grammar)
            .context("normalization failed")?;
        for (stage, result) in stages {
            println!("# after {}\n{}", stage, result);
        }
    } else {
        let result = normalizer.run(&grammar).context("normalization failed")?;
        print!("{}", result);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(args: &[&str]) -> NormalizeOptions {
        Cli::try_parse_from(args).unwrap().options()
    }

    #[test]
    fn test_defaults() {
        assert_eq!(options(&["cfgnorm", "grammar.bnf"]), NormalizeOptions::default());
    }

    #[test]
    fn test_no_limit_and_stop_after() {
        let parsed = options(&[
            "cfgnorm",
            "--no-limit",
            "--stop-after",
            "chain",
            "grammar.bnf",
        ]);
        assert_eq!(parsed.max_nullable_occurrences, None);
        assert_eq!(parsed.stop_after, Some(Stage::ChainRules));
    }

    #[test]
    fn test_policy_and_limit() {
        let parsed = options(&[
            "cfgnorm",
            "--epsilon-policy",
            "all-nullable",
            "--max-nullable",
            "4",
            "--stop-after",
            "left-factor",
            "-",
        ]);
        assert_eq!(parsed.epsilon_policy, EpsilonPolicy::AllNullable);
        assert_eq!(parsed.max_nullable_occurrences, Some(4));
        assert_eq!(parsed.stop_after, Some(Stage::LeftFactoring));
    }

    #[test]
    fn test_limit_conflicts_with_no_limit() {
        let args = ["cfgnorm", "--no-limit", "--max-nullable", "4", "grammar.bnf"];
        assert!(Cli::try_parse_from(args).is_err());
    }
}
