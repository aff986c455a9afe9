use std::{error::Error, process::ExitCode};

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use church::{
    DEFAULT_RECURSION_LIMIT, EvalResult,
    convert::{from_integer, from_integers, to_bool, to_integer, to_integers},
    demo::{double_fn, run_demo},
    encoding::{
        ChurchBool, Encoding, Numeral,
        arithmetic::{self, add, add_fn, is_even_fn, multiply},
        higher_order::{filter_with_limit, fold_with_limit, map_with_limit},
        list_ops::{length_with_limit, reverse_with_limit},
    },
};

#[derive(Parser)]
#[command(name = "church")]
#[command(about = "Evaluate Church-encoded arithmetic and list programs")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Nested unfoldings allowed for each fixed point a command runs
    #[arg(
        long,
        global = true,
        env = "CHURCH_RECURSION_LIMIT",
        default_value_t = DEFAULT_RECURSION_LIMIT
    )]
    recursion_limit: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the canonical examples
    Demo {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Apply a binary numeral operation
    #[command(allow_negative_numbers = true)]
    Arith { op: ArithOp, m: i64, n: i64 },
    /// Factorial through the fixed-point combinator
    #[command(allow_negative_numbers = true)]
    Factorial { n: i64 },
    /// Run a list operation over numerals
    #[command(allow_negative_numbers = true)]
    List {
        op: ListOp,
        #[arg(required = true)]
        values: Vec<i64>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ArithOp {
    Add,
    Mul,
    Sub,
    Pow,
    Div,
    Rem,
    Eq,
    Lt,
    Le,
    Min,
    Max,
}

#[derive(Clone, Copy, ValueEnum)]
enum ListOp {
    Double,
    Evens,
    Sum,
    Reverse,
    Length,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, Box<dyn Error>> {
    match &cli.command {
        Command::Demo { json } => {
            let report = run_demo(cli.recursion_limit)?;
            if *json {
                Ok(serde_json::to_string_pretty(&report)?)
            } else {
                Ok(report.to_string())
            }
        }
        Command::Arith { op, m, n } => Ok(run_arith(*op, *m, *n, cli.recursion_limit)?),
        Command::Factorial { n } => {
            let n = from_integer(*n)?;
            let result = arithmetic::factorial_with_limit(&n, cli.recursion_limit)?;
            Ok(to_integer(&result)?.to_string())
        }
        Command::List { op, values } => Ok(run_list(*op, values, cli.recursion_limit)?),
    }
}

fn run_arith(op: ArithOp, m: i64, n: i64, limit: usize) -> EvalResult<String> {
    let (m, n) = (from_integer(m)?, from_integer(n)?);
    log::debug!("arith {:?}", op);

    let numeral = |result: Numeral| -> EvalResult<String> { Ok(to_integer(&result)?.to_string()) };
    let boolean =
        |result: ChurchBool| -> EvalResult<String> { Ok(to_bool(&result)?.to_string()) };

    match op {
        ArithOp::Add => numeral(add(&m, &n)),
        ArithOp::Mul => numeral(multiply(&m, &n)),
        ArithOp::Sub => numeral(arithmetic::subtract(&m, &n)?),
        ArithOp::Pow => numeral(arithmetic::power(&m, &n)?),
        ArithOp::Div => numeral(arithmetic::divide_with_limit(&m, &n, limit)?),
        ArithOp::Rem => numeral(arithmetic::remainder_with_limit(&m, &n, limit)?),
        ArithOp::Min => numeral(arithmetic::min(&m, &n)?),
        ArithOp::Max => numeral(arithmetic::max(&m, &n)?),
        ArithOp::Eq => boolean(arithmetic::equal(&m, &n)?),
        ArithOp::Lt => boolean(arithmetic::less_than(&m, &n)?),
        ArithOp::Le => boolean(arithmetic::less_or_equal(&m, &n)?),
    }
}

fn run_list(op: ListOp, values: &[i64], limit: usize) -> EvalResult<String> {
    let list = from_integers(values)?;
    let render = |items: Vec<i64>| {
        let items: Vec<String> = items.iter().map(|i| i.to_string()).collect();
        format!("[{}]", items.join(", "))
    };

    match op {
        ListOp::Double => {
            let doubled = map_with_limit(&double_fn(), &list, limit)?;
            Ok(render(to_integers(&doubled)?))
        }
        ListOp::Evens => {
            let evens = filter_with_limit(&is_even_fn(), &list, limit)?;
            Ok(render(to_integers(&evens)?))
        }
        ListOp::Sum => {
            let total = fold_with_limit(&add_fn(), from_integer(0)?.into(), &list, limit)?;
            Ok(to_integer(&Numeral::from_value(total)?)?.to_string())
        }
        ListOp::Reverse => Ok(render(to_integers(&reverse_with_limit(&list, limit)?)?)),
        ListOp::Length => Ok(to_integer(&length_with_limit(&list, limit)?)?.to_string()),
    }
}
