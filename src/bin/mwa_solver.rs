use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
    str::FromStr,
    time::{Duration, Instant},
};

use ::log::{LevelFilter, info, warn};
use anyhow::{Context, bail};
use mwa::{log::build_logger_for_verbosity, prelude::*};
use serde::Serialize;
use structopt::StructOpt;

#[derive(StructOpt)]
struct Opts {
    /// Instance file; read from stdin if omitted
    #[structopt(short = "i", long)]
    instance: Option<PathBuf>,

    /// Write the result to this file instead of stdout
    #[structopt(short = "o", long)]
    output: Option<PathBuf>,

    /// Overrides the (1-based) root given in the header
    #[structopt(short = "r", long)]
    root: Option<Node>,

    #[structopt(short = "s", long, default_value = "sequential")]
    strategy: ContractionStrategy,

    /// Give up after this many milliseconds
    #[structopt(short = "t", long)]
    timeout_ms: Option<u64>,

    /// Additionally store the instance graph in DOT format
    #[structopt(long)]
    dot: Option<PathBuf>,

    /// Parse weights as floating point numbers; otherwise weights must be integers
    #[structopt(short = "f", long)]
    float: bool,

    /// Emit a JSON report instead of the bare weight
    #[structopt(long)]
    json: bool,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

#[derive(Serialize)]
struct Report<W> {
    n: NumNodes,
    m: NumEdges,
    root: Node,
    weight: Option<W>,
    iterations: usize,
    elapsed_ms: u64,
    strategy: String,
}

fn load_instance<W: Weight + FromStr>(path: &Option<PathBuf>) -> anyhow::Result<MwaInstance<W>> {
    if let Some(path) = path {
        MwaInstance::try_read_mwa_file(path)
            .with_context(|| format!("Cannot read instance {}", path.display()))
    } else {
        let stdin = std::io::stdin().lock();
        Ok(MwaInstance::try_read_mwa(stdin)?)
    }
}

fn solve<W: Weight>(opts: &Opts, mut instance: MwaInstance<W>) -> anyhow::Result<Report<W>> {
    if let Some(root) = opts.root {
        if root == 0 {
            bail!("Root must be at least 1");
        }
        instance.root = root - 1;
    }
    instance.is_correct()?;

    info!(
        "Instance with n={} m={} root={} loaded; strategy: {}",
        instance.graph.number_of_nodes(),
        instance.graph.number_of_edges(),
        instance.root + 1,
        opts.strategy
    );

    if let Some(path) = &opts.dot {
        let writer = BufWriter::new(File::create(path)?);
        instance.graph.try_write_dot(writer)?;
    }

    let n = instance.graph.number_of_nodes();
    let m = instance.graph.number_of_edges();
    let root = instance.root;

    let start = Instant::now();
    let mut algo = ChuLiuEdmonds::new(instance.graph, root).with_strategy(opts.strategy);
    let outcome = if let Some(ms) = opts.timeout_ms {
        algo.run_until_timeout(Duration::from_millis(ms));
        algo.best_known_solution()
    } else {
        algo.run_to_completion()
    };
    let elapsed = start.elapsed();

    let Some(outcome) = outcome else {
        bail!("Timeout after {} rounds", algo.iterations());
    };

    match &outcome {
        Ok(weight) => info!("Minimum arborescence has weight {weight}"),
        Err(e) => warn!("{e}"),
    }
    info!(
        "Finished after {} rounds in {}ms",
        algo.iterations(),
        elapsed.as_millis()
    );

    Ok(Report {
        n,
        m,
        root: root + 1,
        weight: outcome.ok(),
        iterations: algo.iterations(),
        elapsed_ms: elapsed.as_millis() as u64,
        strategy: opts.strategy.to_string(),
    })
}

fn write_report<W: Weight + Serialize, O: Write>(
    opts: &Opts,
    report: &Report<W>,
    mut writer: O,
) -> anyhow::Result<()> {
    if opts.json {
        serde_json::to_writer_pretty(&mut writer, report)?;
        writeln!(writer)?;
    } else if let Some(weight) = report.weight {
        writeln!(writer, "{weight}")?;
    } else {
        writeln!(writer, "{NO_ARBORESCENCE}")?;
    }

    writer.flush()?;
    Ok(())
}

fn run<W: Weight + FromStr + Serialize>(opts: &Opts) -> anyhow::Result<()> {
    let instance = load_instance::<W>(&opts.instance)?;
    let report = solve(opts, instance)?;

    match &opts.output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("Cannot create {}", path.display()))?;
            write_report(opts, &report, BufWriter::new(file))
        }
        None => write_report(opts, &report, BufWriter::new(std::io::stdout().lock())),
    }
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::from_args();
    build_logger_for_verbosity(LevelFilter::Warn, opts.verbose);

    if opts.float {
        run::<f64>(&opts)
    } else {
        run::<i64>(&opts)
    }
}
