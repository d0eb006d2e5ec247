use anyhow::{anyhow, Result};
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;

use matrix_algebra::config::{
    AlgebraConfig, DeterminantStrategy, PolynomialStrategy, PowerStrategy,
};
use matrix_cli::commands::{load_config, load_matrix, parse_coefficients, run, Operation};

fn matrix_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .help(help)
        .required(true)
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

fn strategy_arg(values: [&'static str; 2]) -> Arg {
    Arg::new("strategy")
        .short('s')
        .long("strategy")
        .help("Override the algorithm strategy from the JSON config.")
        .value_parser(values)
        .value_hint(ValueHint::Other)
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(
            env_logger::Env::default()
                .filter_or("MATRIX_LOG", "error,matrix_algebra=info,matrix_cli=info"),
        )
        .init();

    let matches = Command::new("matrix-cli")
        .version(clap::crate_version!())
        .about("Dense matrix algebra on JSON matrices")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a JSON algebra configuration file")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the result as JSON instead of the plain display format.")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("add")
                .about("Element-wise sum A + B")
                .arg(matrix_arg("a", "Path to the left matrix"))
                .arg(matrix_arg("b", "Path to the right matrix")),
        )
        .subcommand(
            Command::new("sub")
                .about("Element-wise difference A - B")
                .arg(matrix_arg("a", "Path to the left matrix"))
                .arg(matrix_arg("b", "Path to the right matrix")),
        )
        .subcommand(
            Command::new("mul")
                .about("Matrix product A * B")
                .arg(matrix_arg("a", "Path to the left matrix"))
                .arg(matrix_arg("b", "Path to the right matrix")),
        )
        .subcommand(
            Command::new("scale")
                .about("Multiply every element by a scalar")
                .arg(matrix_arg("a", "Path to the matrix"))
                .arg(
                    Arg::new("lambda")
                        .short('l')
                        .long("lambda")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f64)),
                ),
        )
        .subcommand(
            Command::new("transpose")
                .about("Swap rows and columns")
                .arg(matrix_arg("a", "Path to the matrix")),
        )
        .subcommand(
            Command::new("power")
                .about("Raise a square matrix to a non-negative integer power")
                .arg(matrix_arg("a", "Path to the matrix"))
                .arg(
                    Arg::new("exponent")
                        .short('n')
                        .long("exponent")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(i32)),
                )
                .arg(strategy_arg(["linear", "squaring"])),
        )
        .subcommand(
            Command::new("det")
                .about("Determinant of a square matrix")
                .arg(matrix_arg("a", "Path to the matrix"))
                .arg(strategy_arg(["cofactor", "elimination"])),
        )
        .subcommand(
            Command::new("poly")
                .about("Evaluate c0*I + c1*A + ... + cn*A^n")
                .arg(matrix_arg("a", "Path to the matrix"))
                .arg(
                    Arg::new("coefficients")
                        .short('k')
                        .long("coefficients")
                        .help("Comma-separated coefficients, lowest degree first")
                        .required(true)
                        .allow_hyphen_values(true),
                )
                .arg(strategy_arg(["direct", "horner"])),
        )
        .get_matches();

    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            log::info!("Using config: {:?}", path);
            load_config(path)?
        }
        None => AlgebraConfig::default(),
    };

    let (name, sub_m) = matches
        .subcommand()
        .ok_or_else(|| anyhow!("Subcommand is required by CLI configuration"))?;
    let operation = build_operation(name, sub_m, &mut config)?;
    log::debug!("Running {} with {:?}", name, config);

    let outcome = run(&operation, &config)?;
    print!("{}", outcome.render(matches.get_flag("json"))?);
    Ok(())
}

fn build_operation(name: &str, m: &ArgMatches, config: &mut AlgebraConfig) -> Result<Operation> {
    let matrix = |id: &str| -> Result<_> { load_matrix(required::<PathBuf>(m, id)?) };

    let operation = match name {
        "add" => Operation::Add(matrix("a")?, matrix("b")?),
        "sub" => Operation::Sub(matrix("a")?, matrix("b")?),
        "mul" => Operation::Mul(matrix("a")?, matrix("b")?),
        "scale" => Operation::Scale {
            lambda: *required::<f64>(m, "lambda")?,
            matrix: matrix("a")?,
        },
        "transpose" => Operation::Transpose(matrix("a")?),
        "power" => {
            if let Some(s) = m.get_one::<String>("strategy") {
                config.power = PowerStrategy::from_str(s).map_err(anyhow::Error::msg)?;
            }
            Operation::Power {
                matrix: matrix("a")?,
                exponent: *required::<i32>(m, "exponent")?,
            }
        }
        "det" => {
            if let Some(s) = m.get_one::<String>("strategy") {
                config.determinant = DeterminantStrategy::from_str(s).map_err(anyhow::Error::msg)?;
            }
            Operation::Determinant(matrix("a")?)
        }
        "poly" => {
            if let Some(s) = m.get_one::<String>("strategy") {
                config.polynomial = PolynomialStrategy::from_str(s).map_err(anyhow::Error::msg)?;
            }
            Operation::Polynomial {
                matrix: matrix("a")?,
                coefficients: parse_coefficients(required::<String>(m, "coefficients")?)?,
            }
        }
        other => return Err(anyhow!("Unknown subcommand: {}", other)),
    };
    Ok(operation)
}

fn required<'a, T>(m: &'a ArgMatches, id: &str) -> Result<&'a T>
where
    T: Clone + Send + Sync + 'static,
{
    m.get_one::<T>(id)
        .ok_or_else(|| anyhow!("Missing required argument: {}", id))
}
