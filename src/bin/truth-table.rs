//! Truth-table generator - Command Line Interface
//!
//! Prints the truth table and classification of propositional formulas over
//! `p`, `q` and `r`.

use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::io;
use std::path::PathBuf;
use std::process;
use truth_table::{generate_table, BatchEntry, TableResult, ValidationError};

const INSTRUCTIONS: &str = "\
COMO USAR O GERADOR DE TABELAS-VERDADE

1. DIGITE SUA PROPOSIÇÃO:
   • Use as variáveis: p, q, r
   • Operadores disponíveis:
     ¬ ou !   Negação
     ∧ ou &   Conjunção (E)
     ∨ ou |   Disjunção (OU)
     → ou =>  Condicional
     ↔ ou <=> Bicondicional

2. EXEMPLOS VÁLIDOS:
   • p ∧ q
   • (p ∨ q) → r
   • ¬p ↔ (q ∧ r)

3. RESULTADOS:
   • Tabela com todas combinações possíveis
   • Classificação como:
     - Tautologia (sempre verdadeira)
     - Contradição (sempre falsa)
     - Contingência (depende dos valores)";

#[derive(Parser, Debug)]
#[command(name = "truth-table")]
#[command(about = "Truth tables and tautology checking for formulas over p, q and r", long_about = None)]
#[command(version)]
struct Args {
    /// Formula to tabulate (formulas are read from stdin, one per line, if omitted)
    #[arg(value_name = "EXPRESSION", conflicts_with = "file")]
    expression: Option<String>,

    /// Read formulas from a file, one per line ('#' starts a comment line)
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    file: Option<PathBuf>,

    /// Print usage instructions and exit
    #[arg(long)]
    instructions: bool,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// User-facing message for each failure
fn describe(error: &ValidationError) -> String {
    match error {
        ValidationError::UnbalancedParentheses => {
            "Parênteses desbalanceados! Verifique sua expressão.".to_string()
        }
        ValidationError::InvalidCharacterSet => "Expressão inválida!\n\n\
             Operadores permitidos:\n\
             ¬ ou ! (Negação)\n\
             ∧ ou & (E)\n\
             ∨ ou | (OU)\n\
             → ou => (Condicional)\n\
             ↔ ou <=> (Bicondicional)\n\n\
             Use apenas as variáveis p, q, r"
            .to_string(),
        ValidationError::EvaluationFailure(e) => {
            format!("Não foi possível avaliar a expressão: {}", e)
        }
    }
}

fn print_result(result: &TableResult) {
    println!("{}", result);
}

/// Print every entry; returns whether all of them succeeded
fn print_batch(entries: &[BatchEntry]) -> bool {
    let mut all_ok = true;
    for (idx, entry) in entries.iter().enumerate() {
        if idx > 0 {
            println!();
        }
        println!("{}", entry.expression());
        match entry.outcome() {
            Ok(result) => print_result(result),
            Err(e) => {
                all_ok = false;
                eprintln!("Linha {}: {}", entry.line(), describe(e));
            }
        }
    }
    all_ok
}

fn main() {
    let args = Args::parse();

    if let Err(e) = TermLogger::init(
        args.log_level(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Failed to initialise logging: {}", e);
    }

    if args.instructions {
        println!("{}", INSTRUCTIONS);
        return;
    }

    let ok = if let Some(ref expression) = args.expression {
        match generate_table(expression) {
            Ok(result) => {
                print_result(&result);
                true
            }
            Err(e) => {
                eprintln!("Erro: {}", describe(&e));
                false
            }
        }
    } else {
        let entries = match args.file {
            Some(ref path) => {
                info!("reading formulas from {}", path.display());
                truth_table::generate_tables_from_file(path).map_err(|e| {
                    eprintln!("Error reading file '{}': {}", path.display(), e);
                    e
                })
            }
            None => {
                info!("reading formulas from stdin");
                truth_table::generate_tables_from_reader(io::stdin().lock()).map_err(|e| {
                    eprintln!("Error reading stdin: {}", e);
                    e
                })
            }
        };
        match entries {
            Ok(entries) => print_batch(&entries),
            Err(_) => false,
        }
    };

    if !ok {
        process::exit(1);
    }
}
