use clap::Parser;
use directories::ProjectDirs;
use log::{info, warn};
use math_optim_benchmarks::{Benchmark, Bounds, FunctionRegistry};
use ndarray::Array1;
use plotly::common::{ColorScale, ColorScalePalette, Marker, Mode, Title};
use plotly::contour::Contour;
use plotly::{Layout, Plot, Scatter};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;

/// CLI arguments for plotting benchmark landscapes
#[derive(Parser)]
#[command(name = "plot_functions")]
#[command(about = "Plot benchmark functions using contour plots with Plotly")]
struct Args {
    /// Height of the plot in pixels
    #[arg(short = 'H', long, default_value = "800")]
    height: usize,

    /// Width of the plot in pixels
    #[arg(short = 'W', long, default_value = "800")]
    width: usize,

    /// Number of points along x-axis
    #[arg(short = 'x', long, default_value = "100")]
    xn: usize,

    /// Number of points along y-axis
    #[arg(short = 'y', long, default_value = "100")]
    yn: usize,

    /// Plot bounds (min,max); defaults to the benchmark bounds
    #[arg(long, allow_hyphen_values = true)]
    bounds: Option<String>,

    /// Output directory for HTML and JSON files
    #[arg(short, long)]
    output_dir: Option<String>,

    /// Comma-separated list of functions to plot; plots all if empty
    #[arg(short, long)]
    functions: Option<String>,

    /// Plot log10(1 + f) instead of f
    #[arg(long, default_value_t = false)]
    log_scale: bool,
}

fn parse_bounds(bounds_str: &str) -> Result<Bounds, Box<dyn std::error::Error>> {
    let cleaned = bounds_str.trim_matches(|c| c == '\'' || c == '"');
    let parts: Vec<&str> = if cleaned.contains(',') {
        cleaned.split(',').collect()
    } else {
        cleaned.split_whitespace().collect()
    };

    if parts.len() != 2 {
        return Err("Bounds must be in format 'min,max' or 'min max'".into());
    }

    let min = parts[0].trim().parse::<f64>()?;
    let max = parts[1].trim().parse::<f64>()?;
    Ok(Bounds::new(min, max)?)
}

fn default_output_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let proj_dirs = ProjectDirs::from("org", "math-optim", "benchmarks")
        .ok_or("Failed to determine project directories")?;
    Ok(proj_dirs.cache_dir().join("functions"))
}

/// Evenly spaced grid of `n` points over `bounds` (n >= 2)
fn linspace(bounds: Bounds, n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| bounds.lower() + bounds.width() * i as f64 / (n - 1) as f64)
        .collect()
}

fn create_plot(bench: &Benchmark, plot_bounds: Bounds, args: &Args) -> Plot {
    let x_vals = linspace(plot_bounds, args.xn);
    let y_vals = linspace(plot_bounds, args.yn);

    let mut z_vals = Vec::with_capacity(args.yn);
    for &y in &y_vals {
        let mut row = Vec::with_capacity(args.xn);
        for &x in &x_vals {
            let z = bench.evaluate(&Array1::from(vec![x, y]));
            row.push(if args.log_scale { z.ln_1p() / std::f64::consts::LN_10 } else { z });
        }
        z_vals.push(row);
    }

    let contour = Contour::new(x_vals, y_vals, z_vals)
        .color_scale(ColorScale::Palette(ColorScalePalette::Viridis))
        .color_bar(
            plotly::common::ColorBar::new()
                .len_mode(plotly::common::ThicknessMode::Pixels)
                .len(60 * args.height / 100)
                .y_anchor(plotly::common::Anchor::Bottom)
                .y(0.0),
        );

    let title = if args.log_scale {
        format!("Function: {} (log10(1 + f))", bench.name())
    } else {
        format!("Function: {}", bench.name())
    };
    let layout = Layout::new()
        .title(Title::with_text(title))
        .width(args.width)
        .height(args.height)
        .x_axis(plotly::layout::Axis::new().title(Title::with_text("x1")))
        .y_axis(plotly::layout::Axis::new().title(Title::with_text("x2")));

    let mut plot = Plot::new();
    plot.add_trace(contour);

    let (minimum, _) = bench.global_minimum(2);
    if plot_bounds.contains(&minimum) {
        let global_minimum_trace = Scatter::new(vec![minimum[0]], vec![minimum[1]])
            .mode(Mode::Markers)
            .name("Global Minimum")
            .marker(
                Marker::new()
                    .color("rgba(255, 255, 255, 1.0)")
                    .size(10)
                    .line(
                        plotly::common::Line::new()
                            .color("rgba(255, 0, 255, 1.0)")
                            .width(3.0),
                    )
                    .symbol(plotly::common::MarkerSymbol::Diamond),
            );
        plot.add_trace(global_minimum_trace);
    }

    plot.set_layout(layout);
    plot
}

fn save_plot(plot: &Plot, output_dir: &Path, function_name: &str) -> Result<(), std::io::Error> {
    let stem = function_name.replace(' ', "_");

    let mut file = File::create(output_dir.join(format!("{}.json", stem)))?;
    file.write_all(plot.to_json().as_bytes())?;

    plot.write_html(output_dir.join(format!("{}.html", stem)));
    Ok(())
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    if args.xn < 2 || args.yn < 2 {
        eprintln!("Error: grid needs at least 2 points per axis");
        process::exit(2);
    }

    let output_dir = match &args.output_dir {
        Some(dir) => PathBuf::from(dir),
        None => match default_output_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
    };
    if let Err(e) = std::fs::create_dir_all(&output_dir) {
        eprintln!("Error: cannot create {}: {}", output_dir.display(), e);
        process::exit(1);
    }

    let cli_bounds = match args.bounds.as_deref().map(parse_bounds).transpose() {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Error: invalid --bounds: {}", e);
            process::exit(2);
        }
    };

    let registry = FunctionRegistry::new();
    let names: Vec<String> = match &args.functions {
        Some(list) => list.split(',').map(|s| s.trim().to_string()).collect(),
        None => registry.names(),
    };

    let mut saved = 0;
    for name in names {
        let bench = match registry.benchmark(&name, Bounds::default()) {
            Ok(b) => b,
            Err(e) => {
                warn!("skipping '{}': {}", name, e);
                continue;
            }
        };
        let plot_bounds = cli_bounds.unwrap_or(bench.bounds());
        info!(
            "plotting {} on [{}, {}]^2 with {}x{} grid",
            name,
            plot_bounds.lower(),
            plot_bounds.upper(),
            args.xn,
            args.yn
        );

        let plot = create_plot(&bench, plot_bounds, &args);
        match save_plot(&plot, &output_dir, &name) {
            Ok(()) => {
                println!("Saved plot for '{}'", name);
                saved += 1;
            }
            Err(e) => eprintln!("Warning: Failed to save plot for '{}': {}", name, e),
        }
    }

    println!("{} plots saved to {}", saved, output_dir.display());
}
