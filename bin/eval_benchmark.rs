use clap::Parser;
use log::info;
use math_optim_benchmarks::{Benchmark, BenchmarkConfig, FunctionRegistry};
use ndarray::Array1;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::process;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(
    name = "eval_benchmark",
    about = "Evaluate a benchmark function at a point or on sampled candidates"
)]
struct Cli {
    /// Name of the benchmark function (use --list-functions to see available options)
    #[arg(long)]
    function: Option<String>,

    /// JSON configuration file; command line flags override its values
    #[arg(long)]
    config: Option<String>,

    /// Point to evaluate, comma separated (e.g. "1,1" or "-1,2")
    #[arg(long, allow_hyphen_values = true)]
    point: Option<String>,

    /// Lower bound of every coordinate
    #[arg(long, allow_hyphen_values = true)]
    lower: Option<f64>,

    /// Upper bound of every coordinate
    #[arg(long, allow_hyphen_values = true)]
    upper: Option<f64>,

    /// Dimension of sampled candidates
    #[arg(long)]
    dim: Option<usize>,

    /// Number of uniformly sampled candidates to evaluate
    #[arg(long)]
    samples: Option<usize>,

    /// Random seed for sampling
    #[arg(long)]
    seed: Option<u64>,

    /// Evaluate sampled candidates sequentially
    #[arg(long, default_value_t = false)]
    no_parallel: bool,

    /// Print the LaTeX formulas of the benchmark
    #[arg(long, default_value_t = false)]
    latex: bool,

    /// List registered benchmark functions and exit
    #[arg(long, default_value_t = false)]
    list_functions: bool,
}

fn parse_point(s: &str) -> Result<Vec<f64>, Box<dyn std::error::Error>> {
    let cleaned = s.trim_matches(|c| c == '\'' || c == '"' || c == '[' || c == ']');
    if cleaned.trim().is_empty() {
        return Ok(Vec::new());
    }
    let parts: Vec<&str> = if cleaned.contains(',') {
        cleaned.split(',').collect()
    } else {
        cleaned.split_whitespace().collect()
    };
    let mut values = Vec::with_capacity(parts.len());
    for p in parts {
        values.push(p.trim().parse::<f64>()?);
    }
    Ok(values)
}

fn merge_config(cli: &Cli) -> Result<BenchmarkConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => BenchmarkConfig::from_file(path)?,
        None => BenchmarkConfig::default(),
    };
    if let Some(f) = &cli.function {
        config.function = f.clone();
    }
    if let Some(l) = cli.lower {
        config.lower = l;
    }
    if let Some(u) = cli.upper {
        config.upper = u;
    }
    if let Some(d) = cli.dim {
        config.dimension = d;
    }
    if let Some(n) = cli.samples {
        config.samples = n;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.no_parallel {
        config.parallel.enabled = false;
    }
    Ok(config)
}

fn run_samples(bench: &Benchmark, config: &BenchmarkConfig) {
    let mut rng: StdRng = match config.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let population = bench
        .bounds()
        .sample_uniform(config.dimension, config.samples, &mut rng);

    let t0 = Instant::now();
    let values = bench.evaluate_population(&population, &config.parallel);
    info!(
        "evaluated {} candidates in {}ms",
        values.len(),
        t0.elapsed().as_millis()
    );

    let best = values
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.total_cmp(b.1));
    if let Some((idx, &f)) = best {
        let x: Vec<String> = population
            .row(idx)
            .iter()
            .map(|v| format!("{:.4}", v))
            .collect();
        let mean = values.sum() / values.len() as f64;
        println!(
            "{} samples in D={}: best f = {:.6e} at [{}], mean f = {:.6e}",
            values.len(),
            config.dimension,
            f,
            x.join(", "),
            mean
        );
    }
}

fn main() {
    pretty_env_logger::init();
    let cli = Cli::parse();
    let registry = FunctionRegistry::new();

    if cli.list_functions {
        for name in registry.names() {
            println!("{}", name);
        }
        return;
    }

    let config = match merge_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    };

    let bench = match config.to_benchmark(&registry) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    };
    info!(
        "using {} on [{}, {}]",
        bench.name(),
        bench.lower(),
        bench.upper()
    );

    if cli.latex {
        let latex = bench.latex();
        println!("Inline:   {}", latex.inline);
        println!("Equation: {}", latex.equation);
        println!("Domain:   {}", latex.domain);
    }

    if let Some(point) = &cli.point {
        let x = match parse_point(point) {
            Ok(v) => Array1::from(v),
            Err(e) => {
                eprintln!("Error: invalid --point '{}': {}", point, e);
                process::exit(2);
            }
        };
        if !bench.contains(&x) {
            log::warn!("point lies outside [{}, {}]", bench.lower(), bench.upper());
        }
        println!("f({:?}) = {}", x.to_vec(), bench.evaluate(&x));
    }

    if config.samples > 0 {
        run_samples(&bench, &config);
    } else if cli.point.is_none() && !cli.latex {
        let (x, f) = bench.global_minimum(config.dimension);
        println!(
            "{}: global minimum f = {} at {:?} (use --point or --samples to evaluate)",
            bench.name(),
            f,
            x.to_vec()
        );
    }
}
