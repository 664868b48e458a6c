use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use segfold::algebra::{Combiner, Max, Min, Monoid};
use segfold::SegmentTree;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "segfold", about = "Range aggregation over integer sequences")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a tree and apply queries and updates in order.
    Run {
        #[command(flatten)]
        source: Source,
        /// Operations: `q:L:R` query, `u:I:V` update, `p` print.
        ops: Vec<Op>,
    },
    /// Build a tree and dump its structure.
    Print {
        #[command(flatten)]
        source: Source,
    },
}

#[derive(clap::Args, Debug)]
struct Source {
    /// Combining operation.
    #[arg(long, value_enum, default_value_t = CombinerKind::Sum)]
    combiner: CombinerKind,
    /// Comma-separated elements, e.g. `1,2,3`.
    #[arg(long, conflicts_with = "input")]
    data: Option<String>,
    /// File of elements separated by commas or whitespace.
    #[arg(long)]
    input: Option<PathBuf>,
}

/// Integer combiners selectable from the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum CombinerKind {
    Sum,
    Product,
    Min,
    Max,
}

// Sum and product saturate so that user input cannot overflow.
impl Combiner<i64> for CombinerKind {
    fn combine(&self, left: &i64, right: &i64) -> i64 {
        match self {
            CombinerKind::Sum => left.saturating_add(*right),
            CombinerKind::Product => left.saturating_mul(*right),
            CombinerKind::Min => Min.combine(left, right),
            CombinerKind::Max => Max.combine(left, right),
        }
    }
}

impl Monoid<i64> for CombinerKind {
    fn identity(&self) -> i64 {
        match self {
            CombinerKind::Sum => 0,
            CombinerKind::Product => 1,
            CombinerKind::Min => Monoid::<i64>::identity(&Min),
            CombinerKind::Max => Monoid::<i64>::identity(&Max),
        }
    }
}

/// One step of a `run` script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Query { left: usize, right: usize },
    Update { index: usize, value: i64 },
    Print,
}

impl FromStr for Op {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let fields: Vec<&str> = s.split(':').collect();
        match fields.as_slice() {
            ["p"] => Ok(Op::Print),
            ["q", left, right] => Ok(Op::Query {
                left: left.parse().with_context(|| format!("invalid left bound '{left}'"))?,
                right: right
                    .parse()
                    .with_context(|| format!("invalid right bound '{right}'"))?,
            }),
            ["u", index, value] => Ok(Op::Update {
                index: index.parse().with_context(|| format!("invalid index '{index}'"))?,
                value: value.parse().with_context(|| format!("invalid value '{value}'"))?,
            }),
            _ => bail!("unrecognised operation '{s}' (expected q:L:R, u:I:V or p)"),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Query { left, right } => write!(f, "q:{left}:{right}"),
            Op::Update { index, value } => write!(f, "u:{index}:{value}"),
            Op::Print => f.write_str("p"),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { source, ops } => run_ops(&source, &ops)?,
        Commands::Print { source } => {
            let tree = build_tree(&source)?;
            print!("{tree}");
        }
    }

    Ok(())
}

fn build_tree(source: &Source) -> Result<SegmentTree<i64, CombinerKind>> {
    let data = match (&source.data, &source.input) {
        (Some(list), _) => parse_elements(list).context("failed to parse --data")?,
        (None, Some(path)) => read_elements_file(path)?,
        (None, None) => bail!("either --data or --input is required"),
    };
    info!(len = data.len(), combiner = ?source.combiner, "building tree");
    Ok(SegmentTree::with_monoid(&data, source.combiner))
}

fn run_ops(source: &Source, ops: &[Op]) -> Result<()> {
    let mut tree = build_tree(source)?;

    for (idx, op) in ops.iter().enumerate() {
        match *op {
            Op::Query { left, right } => {
                let value = tree
                    .query(left, right)
                    .with_context(|| format!("operation {} ({op}) failed", idx + 1))?;
                println!("{value}");
            }
            Op::Update { index, value } => tree
                .update(index, value)
                .with_context(|| format!("operation {} ({op}) failed", idx + 1))?,
            Op::Print => print!("{tree}"),
        }
    }

    Ok(())
}

fn parse_elements(text: &str) -> Result<Vec<i64>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(pos, token)| {
            token
                .parse::<i64>()
                .map_err(|e| anyhow!("element {} ('{}'): {}", pos + 1, token, e))
        })
        .collect()
}

fn read_elements_file(path: &Path) -> Result<Vec<i64>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read elements from {}", path.display()))?;
    parse_elements(&contents).with_context(|| format!("invalid elements in {}", path.display()))
}
