//! Command-line evaluation of `planar::pair` functions and runtime-typed operators.

use anyhow::{bail, Context, Result};
use planar::{pair, ApproxCfg, Operand, Vector};
use serde::Serialize;

/// Evaluable pair functions and their argument counts.
pub const OPS: &[(&str, usize)] = &[
    ("add", 4),
    ("sub", 4),
    ("permul", 4),
    ("mul", 3),
    ("div", 3),
    ("idiv", 3),
    ("dot", 4),
    ("det", 4),
    ("cross", 4),
    ("eq", 4),
    ("lt", 4),
    ("le", 4),
    ("approx_eq", 4),
    ("len2", 2),
    ("len", 2),
    ("dist2", 4),
    ("dist", 4),
    ("from_polar", 2),
    ("to_polar", 2),
    ("normalize", 2),
    ("rotate", 3),
    ("perpendicular", 2),
    ("project", 4),
    ("mirror", 4),
    ("trim", 3),
    ("angle_to", 4),
    ("angle", 2),
    ("str", 2),
];

/// Result of one evaluation, rendered natively in JSON.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Output {
    Scalar(f64),
    Pair(f64, f64),
    Bool(bool),
    Text(String),
}

impl From<Operand> for Output {
    fn from(o: Operand) -> Self {
        match o {
            Operand::Scalar(s) => Output::Scalar(s),
            Operand::Vector(v) => Output::Pair(v.x, v.y),
        }
    }
}

pub fn arity(op: &str) -> Option<usize> {
    OPS.iter().find(|(name, _)| *name == op).map(|&(_, n)| n)
}

/// Evaluate `op` on positional arguments, in the pair API's argument order.
pub fn eval(op: &str, args: &[f64], cfg: ApproxCfg) -> Result<Output> {
    let n = arity(op).with_context(|| format!("unknown op `{op}`"))?;
    if args.len() != n {
        bail!("{op}: expected {n} arguments, got {}", args.len());
    }
    let a = args;
    let out = match op {
        "add" => pair_out(pair::add(a[0], a[1], a[2], a[3])),
        "sub" => pair_out(pair::sub(a[0], a[1], a[2], a[3])),
        "permul" => pair_out(pair::permul(a[0], a[1], a[2], a[3])),
        "mul" => pair_out(pair::mul(a[0], a[1], a[2])),
        "div" => pair_out(pair::div(a[0], a[1], a[2])),
        "idiv" => pair_out(pair::idiv(a[0], a[1], a[2])),
        "dot" => Output::Scalar(pair::dot(a[0], a[1], a[2], a[3])),
        "det" => Output::Scalar(pair::det(a[0], a[1], a[2], a[3])),
        "cross" => Output::Scalar(pair::cross(a[0], a[1], a[2], a[3])),
        "eq" => Output::Bool(pair::eq(a[0], a[1], a[2], a[3])),
        "lt" => Output::Bool(pair::lt(a[0], a[1], a[2], a[3])),
        "le" => Output::Bool(pair::le(a[0], a[1], a[2], a[3])),
        "approx_eq" => Output::Bool(pair::approx_eq(a[0], a[1], a[2], a[3], cfg)),
        "len2" => Output::Scalar(pair::len2(a[0], a[1])),
        "len" => Output::Scalar(pair::len(a[0], a[1])),
        "dist2" => Output::Scalar(pair::dist2(a[0], a[1], a[2], a[3])),
        "dist" => Output::Scalar(pair::dist(a[0], a[1], a[2], a[3])),
        "from_polar" => pair_out(pair::from_polar(a[0], a[1])),
        "to_polar" => pair_out(pair::to_polar(a[0], a[1])),
        "normalize" => pair_out(pair::normalize(a[0], a[1])),
        "rotate" => pair_out(pair::rotate(a[0], a[1], a[2])),
        "perpendicular" => pair_out(pair::perpendicular(a[0], a[1])),
        "project" => pair_out(pair::project(a[0], a[1], a[2], a[3])),
        "mirror" => pair_out(pair::mirror(a[0], a[1], a[2], a[3])),
        "trim" => pair_out(pair::trim(a[0], a[1], a[2])),
        "angle_to" => Output::Scalar(pair::angle_to(a[0], a[1], a[2], a[3])),
        "angle" => Output::Scalar(pair::angle(a[0], a[1])),
        "str" => Output::Text(pair::to_string(a[0], a[1])),
        _ => bail!("unknown op `{op}`"),
    };
    Ok(out)
}

fn pair_out((x, y): (f64, f64)) -> Output {
    Output::Pair(x, y)
}

/// Parse `"x,y"` / `"(x,y)"` as a vector, anything else as a number.
pub fn parse_operand(s: &str) -> Result<Operand> {
    let t = s.trim();
    if !t.contains(',') {
        let v: f64 = t.parse().with_context(|| format!("invalid number `{s}`"))?;
        return Ok(Operand::Scalar(v));
    }
    let inner = t.trim_start_matches('(').trim_end_matches(')');
    let (x, y) = inner
        .split_once(',')
        .with_context(|| format!("invalid vector `{s}`"))?;
    let x: f64 = x.trim().parse().with_context(|| format!("invalid x in `{s}`"))?;
    let y: f64 = y.trim().parse().with_context(|| format!("invalid y in `{s}`"))?;
    Ok(Operand::Vector(Vector::new(x, y)))
}

/// Apply a vector operator (`+ - * / neg`) to runtime-typed operands.
pub fn apply(operator: &str, lhs: Operand, rhs: Option<Operand>) -> Result<Output> {
    let out = match (operator, rhs) {
        ("neg", None) => lhs.neg()?,
        ("neg", Some(_)) => bail!("neg takes a single operand"),
        (_, None) => bail!("{operator}: missing right operand"),
        ("+", Some(r)) => lhs.add(r)?,
        ("-", Some(r)) => lhs.sub(r)?,
        ("*", Some(r)) => lhs.mul(r)?,
        ("/", Some(r)) => lhs.div(r)?,
        (other, Some(_)) => bail!("unknown operator `{other}` (expected + - * / neg)"),
    };
    Ok(out.into())
}
