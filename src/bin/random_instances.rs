use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use ::log::{LevelFilter, info, warn};
use mwa::{arborescence::naive::naive_min_arborescence_weight, log, prelude::*};
use rand::{Rng, SeedableRng, distributions::Uniform};
use rand_pcg::Pcg64;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
struct Opt {
    /// Maximum number of nodes; each instance draws its size from [1, n]
    #[structopt(short, default_value = "7")]
    n: NumNodes,

    /// Maximum number of edges per node
    #[structopt(short, default_value = "3")]
    m: NumEdges,

    /// Draw Gilbert graphs in which each edge exists with this probability (ignores -m)
    #[structopt(short, long)]
    density: Option<f64>,

    #[structopt(short, long, default_value = "10000")]
    repeats: u64,

    #[structopt(short, long, default_value = "1234")]
    seed: u64,

    /// Store mismatching instances in instances/mismatch/
    #[structopt(short = "w", long)]
    write: bool,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

const NAIVE_MAX_NODES: NumNodes = 7;

#[derive(Default)]
struct Timings {
    sequential: Duration,
    batch: Duration,
    naive: Duration,
}

fn timed<T>(total: &mut Duration, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let result = f();
    *total += start.elapsed();
    result
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();
    log::build_logger_for_verbosity(LevelFilter::Info, opt.verbose);

    if let Some(p) = opt.density {
        anyhow::ensure!((0.0..=1.0).contains(&p), "Density {p} is not in [0, 1]");
    }

    let weights = Uniform::new_inclusive(0u64, 100);
    let mut timings = Timings::default();
    let mut mismatches = 0u64;
    let mut feasible = 0u64;

    for repeat in 0..opt.repeats {
        let mut rng = Pcg64::seed_from_u64(opt.seed.wrapping_add(repeat));
        let n = rng.gen_range(1..=opt.n.max(1));
        let m = rng.gen_range(0..=opt.m * n as NumEdges);
        let root = rng.gen_range(0..n);

        let graph = if let Some(p) = opt.density {
            WeightedDigraph::<u64>::random_gnp(&mut rng, n, p, &weights)
        } else if rng.gen_bool(0.5) {
            WeightedDigraph::<u64>::random_feasible(&mut rng, n, m, root, &weights)
        } else {
            WeightedDigraph::<u64>::random_gnm(&mut rng, n, m, &weights)
        };

        let sequential = timed(&mut timings.sequential, || {
            min_arborescence_weight_with(&graph, root, ContractionStrategy::Sequential).ok()
        });
        let batch = timed(&mut timings.batch, || {
            min_arborescence_weight_with(&graph, root, ContractionStrategy::Batch).ok()
        });
        let naive = (n <= NAIVE_MAX_NODES).then(|| {
            timed(&mut timings.naive, || {
                naive_min_arborescence_weight(&graph, root)
            })
        });

        feasible += sequential.is_some() as u64;

        let mismatched = sequential != batch || naive.is_some_and(|naive| naive != sequential);
        if !mismatched {
            continue;
        }

        mismatches += 1;
        warn!(
            "Mismatch for seed {} with n={n} m={} root={}: sequential={sequential:?} batch={batch:?} naive={naive:?}",
            opt.seed.wrapping_add(repeat),
            graph.number_of_edges(),
            root + 1
        );

        if opt.write {
            let path = PathBuf::from(format!(
                "instances/mismatch/seed{:>08}_n{n:>03}_m{:>04}.mwa",
                opt.seed.wrapping_add(repeat),
                graph.number_of_edges()
            ));
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir)?;
            }
            MwaInstance::new(graph, root).try_write_mwa_file(&path)?;
            info!("Wrote {}", path.display());
        }
    }

    info!(
        "Completed {} instances ({feasible} feasible) with {mismatches} mismatches",
        opt.repeats
    );
    info!(
        "Time sequential: {:>8}ms batch: {:>8}ms naive: {:>8}ms",
        timings.sequential.as_millis(),
        timings.batch.as_millis(),
        timings.naive.as_millis()
    );

    if mismatches > 0 {
        anyhow::bail!("Found {mismatches} mismatching instances");
    }

    Ok(())
}
