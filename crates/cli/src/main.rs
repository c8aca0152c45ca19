use anyhow::Result;
use clap::{Parser, Subcommand};
use planar::rand::{DirectionParams, DirectionSampler};
use planar::ApproxCfg;
use serde::Serialize;
use tracing_subscriber::fmt::SubscriberBuilder;

mod eval;

#[derive(Parser)]
#[command(name = "planar-cli")]
#[command(about = "Evaluate 2D vector operations and sample random directions")]
struct Cmd {
    /// Tolerance for `approx_eq` (absolute and relative)
    #[arg(long, global = true)]
    eps: Option<f64>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Evaluate one coordinate-pair function, e.g. `eval rotate 3.14159 1 0`
    Eval {
        op: String,
        #[arg(allow_negative_numbers = true)]
        args: Vec<f64>,
    },
    /// Apply a vector operator to operands written as `x,y` or a number
    Apply {
        /// One of + - * / neg
        operator: String,
        #[arg(allow_hyphen_values = true)]
        lhs: String,
        #[arg(allow_hyphen_values = true)]
        rhs: Option<String>,
    },
    /// Sample random directions with length in [min, max]
    Random {
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        min: f64,
        /// Defaults to `min`
        #[arg(long, allow_negative_numbers = true)]
        max: Option<f64>,
        #[arg(long, default_value_t = 1)]
        count: usize,
        /// Seed for reproducible draws; random if omitted
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print version and the list of evaluable ops
    Report,
}

#[derive(Serialize)]
struct Sample {
    index: u64,
    x: f64,
    y: f64,
    len: f64,
    angle: f64,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the JSON result.
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let out = run(Cmd::parse())?;
    println!("{out}");
    Ok(())
}

/// Execute one command and return its JSON output.
fn run(cmd: Cmd) -> Result<String> {
    let cfg = cmd.eps.map(ApproxCfg::uniform).unwrap_or_default();
    match cmd.action {
        Action::Eval { op, args } => eval_op(op, args, cfg),
        Action::Apply { operator, lhs, rhs } => apply(operator, lhs, rhs),
        Action::Random {
            min,
            max,
            count,
            seed,
        } => random(min, max.unwrap_or(min), count, seed),
        Action::Report => report(),
    }
}

fn eval_op(op: String, args: Vec<f64>, cfg: ApproxCfg) -> Result<String> {
    tracing::info!(op, nargs = args.len(), eps = cfg.eps_abs, "eval");
    let result = eval::eval(&op, &args, cfg)?;
    let obj = serde_json::json!({
        "op": op,
        "args": args,
        "result": result,
    });
    Ok(serde_json::to_string_pretty(&obj)?)
}

fn apply(operator: String, lhs: String, rhs: Option<String>) -> Result<String> {
    tracing::info!(operator, lhs, rhs = ?rhs, "apply");
    let l = eval::parse_operand(&lhs)?;
    let r = rhs.as_deref().map(eval::parse_operand).transpose()?;
    let result = eval::apply(&operator, l, r)?;
    let obj = serde_json::json!({
        "operator": operator,
        "lhs": l.to_string(),
        "rhs": r.map(|o| o.to_string()),
        "result": result,
    });
    Ok(serde_json::to_string_pretty(&obj)?)
}

/// `len` and `angle` are the drawn values: `len` may be negative when
/// `min < 0`, so they are not the canonical polar form of `(x, y)`.
fn random(min: f64, max: f64, count: usize, seed: Option<u64>) -> Result<String> {
    let seed = seed.unwrap_or_else(rand::random);
    tracing::info!(min, max, count, seed, "random");
    let sampler = DirectionSampler::new(DirectionParams::new(min, max), seed)?;
    let samples: Vec<Sample> = (0..count as u64)
        .map(|index| {
            let (angle, len) = sampler.regenerate_polar(index);
            let v = sampler.regenerate(index);
            tracing::debug!(index, x = v.x, y = v.y, "sample");
            Sample {
                index,
                x: v.x,
                y: v.y,
                len,
                angle,
            }
        })
        .collect();
    Ok(serde_json::to_string_pretty(&samples)?)
}

fn report() -> Result<String> {
    let ops: Vec<&str> = eval::OPS.iter().map(|&(name, _)| name).collect();
    let obj = serde_json::json!({
        "name": "planar",
        "version": planar::VERSION,
        "ops": ops,
        "operators": ["+", "-", "*", "/", "neg"],
    });
    Ok(serde_json::to_string_pretty(&obj)?)
}
