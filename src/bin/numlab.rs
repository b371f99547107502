//! Command-line front end: one subcommand per classroom demo.

use std::f64::consts::PI;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use num_complex::Complex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal, Uniform};
use serde::Serialize;
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

use numlab::prelude::*;

#[derive(Debug, Parser)]
#[command(
    name = "numlab",
    about = "Classic numerical methods, one demo per subcommand",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
struct Cli {
    /// Global: print results as JSON
    #[arg(long = "json", action = ArgAction::SetTrue, global = true)]
    json: bool,

    /// Global: raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
enum NodeKind {
    Equispaced,
    #[default]
    Chebyshev,
}

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
enum SequenceKind {
    /// x_{n+1} = x_n^2 + c
    #[default]
    Orbit,
    /// (-1)^(n+1) / n with partial sums and mean
    Harmonic,
}

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
enum NoiseKind {
    #[default]
    Uniform,
    Normal,
}

#[derive(Debug, Args)]
struct RenderArgs {
    /// Image width in pixels
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    width: usize,

    /// Image height in pixels
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    height: usize,

    /// Iteration limit per pixel
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    depth: u32,

    /// Visible region: x_min x_max y_min y_max
    #[arg(long, num_args = 4, value_names = ["X_MIN", "X_MAX", "Y_MIN", "Y_MAX"], allow_hyphen_values = true)]
    region: Option<Vec<f64>>,

    /// Use the banded colour gradient instead of grayscale
    #[arg(long, action = ArgAction::SetTrue)]
    gradient: bool,

    /// Render rows in parallel (needs the `parallel` feature)
    #[arg(long, action = ArgAction::SetTrue)]
    parallel: bool,

    /// Write a binary PPM image here
    #[arg(short = 'o', long = "out", value_name = "FILE")]
    out: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Integer powers by repeated multiplication
    Power {
        #[arg(allow_hyphen_values = true)]
        base: f64,
        #[arg(allow_hyphen_values = true)]
        power: i32,
        /// Use the variant that returns 0 for negative powers
        #[arg(long, action = ArgAction::SetTrue)]
        unsigned: bool,
    },

    /// Factorial of n and binomial coefficient C(n, k)
    Binomial { n: u32, k: u32 },

    /// Taylor series of sin against the library sine
    Sin {
        #[arg(long, default_value_t = -PI, allow_hyphen_values = true)]
        start: f64,
        #[arg(long, default_value_t = PI, allow_hyphen_values = true)]
        end: f64,
        #[arg(long, default_value_t = 13)]
        count: usize,
        #[arg(long, default_value_t = DEFAULT_TERMS)]
        terms: usize,
        /// Reduce the argument into [-pi/2, pi/2] first
        #[arg(long, action = ArgAction::SetTrue)]
        periodic: bool,
    },

    /// Jacobi (or Gauss-Seidel) iteration on 7x1 - x2 = 5, 3x1 - 5x2 = -7
    Jacobi {
        /// Use Gauss-Seidel updates
        #[arg(long, action = ArgAction::SetTrue)]
        seidel: bool,
        #[arg(long, default_value_t = 9)]
        iterations: usize,
        /// Stop early once the largest change drops below this
        #[arg(long)]
        tol: Option<f64>,
    },

    /// Newton's method on x^x = target
    Newton {
        #[arg(long, default_value_t = 100.0)]
        target: f64,
        #[arg(long, default_value_t = 1.0)]
        x0: f64,
        #[arg(long, default_value_t = 1e-8)]
        tol: f64,
        /// Stop on step length instead of residual
        #[arg(long, action = ArgAction::SetTrue)]
        step: bool,
        /// Print every iterate
        #[arg(long, action = ArgAction::SetTrue)]
        trace: bool,
    },

    /// Square root by Heron's iteration
    Sqrt {
        value: f64,
        #[arg(long, default_value_t = 1e-12)]
        tol: f64,
    },

    /// Fixed points of x^2 + c and their stability
    Stability {
        #[arg(long, default_value_t = -1.0, allow_hyphen_values = true)]
        c: f64,
    },

    /// Print a sequence
    Sequence {
        #[arg(long, value_enum, default_value_t = SequenceKind::Orbit)]
        kind: SequenceKind,
        #[arg(long, default_value_t = 9)]
        len: usize,
        #[arg(long, default_value_t = -1.5, allow_hyphen_values = true)]
        x0: f64,
        #[arg(long, default_value_t = -1.0, allow_hyphen_values = true)]
        c: f64,
    },

    /// Render the Mandelbrot set
    Mandelbrot {
        #[command(flatten)]
        render: RenderArgs,
        /// Zoom into [-0.75, -0.73] x [0.2, 0.22]
        #[arg(long, action = ArgAction::SetTrue, conflicts_with = "region")]
        zoom: bool,
    },

    /// Render a Julia set
    Julia {
        #[command(flatten)]
        render: RenderArgs,
        #[arg(long, default_value_t = -0.8, allow_hyphen_values = true)]
        re: f64,
        #[arg(long, default_value_t = 0.156, allow_hyphen_values = true)]
        im: f64,
    },

    /// Interpolate the Runge function
    Interp {
        #[arg(long, value_enum, default_value_t = NodeKind::Chebyshev)]
        nodes: NodeKind,
        /// Polynomial degree (15 equispaced, 32 Chebyshev by default)
        #[arg(long)]
        degree: Option<usize>,
        #[arg(long, default_value_t = 201)]
        samples: usize,
        /// Write t, f(t), p(t) columns here
        #[arg(long, value_name = "FILE")]
        dat: Option<PathBuf>,
    },

    /// Trapezoidal integral of exp(cos^3 x) over [0, 2 pi]
    Integrate {
        #[arg(long, default_value_t = 100)]
        panels: usize,
        /// Refine by doubling until estimates agree within this
        #[arg(long)]
        tol: Option<f64>,
    },

    /// Least-squares line through noisy samples of y = 0.5 x + 0.5
    FitLine {
        #[arg(long, default_value_t = 20)]
        n: usize,
        #[arg(long, default_value_t = 1.0)]
        noise: f64,
        #[arg(long, value_enum, default_value_t = NoiseKind::Uniform)]
        distribution: NoiseKind,
        #[arg(long, default_value_t = 2024)]
        seed: u64,
    },

    /// Fit an implicit conic to a noisy ellipse and trace its outline
    FitConic {
        #[arg(long, default_value_t = 100)]
        n: usize,
        #[arg(long, default_value_t = 0.25)]
        noise: f64,
        #[arg(long, default_value_t = 0.05)]
        step: f64,
        #[arg(long, default_value_t = 1e-4)]
        threshold: f64,
        #[arg(long, default_value_t = 2024)]
        seed: u64,
        /// Write the hull vertices here
        #[arg(long, value_name = "FILE")]
        dat: Option<PathBuf>,
    },

    /// Convex hull of a point set
    Hull {
        /// Coordinates x1 y1 x2 y2 ... (defaults to the classroom set)
        #[arg(num_args = 0.., allow_hyphen_values = true)]
        coords: Vec<f64>,
    },

    /// Maximize 143x + 60y under the classroom constraints
    Optimize {
        /// Use a grid step of 1/20 instead of 1
        #[arg(long, action = ArgAction::SetTrue)]
        fine: bool,
        /// Also solve exactly by vertex enumeration
        #[arg(long, action = ArgAction::SetTrue)]
        exact: bool,
        /// Write the feasible grid points here
        #[arg(long, value_name = "FILE")]
        dat: Option<PathBuf>,
    },

    /// Explicit Euler for a cascade of first-order lags
    Euler {
        #[arg(long, default_value_t = 0.1)]
        dt: f64,
        /// Steps; samples run from t = 0 to t = n * dt inclusive
        #[arg(long, default_value_t = 100)]
        n: usize,
        #[arg(long, default_value_t = 1.5)]
        a: f64,
        #[arg(long, default_value_t = 2)]
        stages: usize,
        /// Write t, u, x1, x2, ... columns here
        #[arg(long, value_name = "FILE")]
        dat: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let json = cli.json;
    match cli.cmd {
        Command::Power {
            base,
            power,
            unsigned,
        } => run_power(base, power, unsigned, json),
        Command::Binomial { n, k } => run_binomial(n, k, json),
        Command::Sin {
            start,
            end,
            count,
            terms,
            periodic,
        } => run_sin(start, end, count, terms, periodic, json),
        Command::Jacobi {
            seidel,
            iterations,
            tol,
        } => run_jacobi(seidel, iterations, tol, json),
        Command::Newton {
            target,
            x0,
            tol,
            step,
            trace,
        } => run_newton(target, x0, tol, step, trace, json),
        Command::Sqrt { value, tol } => run_sqrt(value, tol, json),
        Command::Stability { c } => run_stability(c, json),
        Command::Sequence { kind, len, x0, c } => run_sequence(kind, len, x0, c, json),
        Command::Mandelbrot { render, zoom } => {
            let region = if zoom {
                Some(Region::new(-0.75, -0.73, 0.2, 0.22)?)
            } else {
                None
            };
            run_escape(Mandelbrot, &render, region, json)
        }
        Command::Julia { render, re, im } => {
            run_escape(Julia { c: Complex::new(re, im) }, &render, None, json)
        }
        Command::Interp {
            nodes,
            degree,
            samples,
            dat,
        } => run_interp(nodes, degree, samples, dat.as_deref(), json),
        Command::Integrate { panels, tol } => run_integrate(panels, tol, json),
        Command::FitLine {
            n,
            noise,
            distribution,
            seed,
        } => run_fit_line(n, noise, distribution, seed, json),
        Command::FitConic {
            n,
            noise,
            step,
            threshold,
            seed,
            dat,
        } => run_fit_conic(n, noise, step, threshold, seed, dat.as_deref(), json),
        Command::Hull { coords } => run_hull(&coords, json),
        Command::Optimize { fine, exact, dat } => run_optimize(fine, exact, dat.as_deref(), json),
        Command::Euler {
            dt,
            n,
            a,
            stages,
            dat,
        } => run_euler(dt, n, a, stages, dat.as_deref(), json),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<S: Serialize>(value: &S) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    Ok(BufWriter::new(file))
}

fn save_table(path: &Path, headers: &[&str], columns: &[&[f64]]) -> Result<()> {
    let table = Table::new(headers, columns)?;
    let mut out = create(path)?;
    write_table(&table, &mut out).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), rows = table.rows(), "table written");
    Ok(())
}

// ============================================================================
// Powers and Series
// ============================================================================

fn run_power(base: f64, power: i32, unsigned: bool, json: bool) -> Result<()> {
    let value = if unsigned {
        raise_power_unsigned(base, power)
    } else {
        raise_power(base, power)
    };
    if json {
        return print_json(&json!({ "base": base, "power": power, "value": value }));
    }
    println!("{base}^{power} = {value}");
    Ok(())
}

fn run_binomial(n: u32, k: u32, json: bool) -> Result<()> {
    let factorial = factorial(n).ok();
    let c = binomial(n, k)?;
    if json {
        return print_json(&json!({ "n": n, "k": k, "factorial": factorial, "binomial": c }));
    }
    match factorial {
        Some(f) => println!("{n}! = {f}"),
        None => println!("{n}! does not fit in 64 bits"),
    }
    println!("C({n}, {k}) = {c}");
    Ok(())
}

fn run_sin(start: f64, end: f64, count: usize, terms: usize, periodic: bool, json: bool) -> Result<()> {
    let table = sin_table(start, end, count, terms, periodic);
    if json {
        return print_json(&table);
    }
    println!("{:>12} {:>14} {:>14} {:>12}", "x", "series", "sin", "error");
    for s in &table {
        println!(
            "{:>12.6} {:>14.10} {:>14.10} {:>12.3e}",
            s.x,
            s.series,
            s.exact,
            s.error()
        );
    }
    Ok(())
}

// ============================================================================
// Iterative Solvers
// ============================================================================

fn run_jacobi(seidel: bool, iterations: usize, tol: Option<f64>, json: bool) -> Result<()> {
    let system = LinearSystem::new(2, vec![7.0, -1.0, 3.0, -5.0], vec![5.0, -7.0])?;
    let mut builder = FixedPoint::new()
        .method(if seidel { GaussSeidel } else { Jacobi })
        .max_iterations(iterations);
    if let Some(tol) = tol {
        builder = builder.tolerance(tol);
    }
    let result = builder.build()?.solve(&system)?;
    let exact = system.solve_direct()?;

    if json {
        return print_json(&json!({ "result": result, "direct": exact }));
    }
    print!("{:.6}", result.trace);
    println!("direct solution: {exact:?}");
    if tol.is_some() {
        println!("converged after {} sweeps", result.iterations);
    }
    Ok(())
}

fn run_newton(target: f64, x0: f64, tol: f64, step: bool, trace: bool, json: bool) -> Result<()> {
    let solver = Newton::new()
        .tolerance(tol)
        .criterion(if step { Criterion::Step } else { Criterion::Residual })
        .build()?;
    let root = solver.solve(
        |x: f64| x.powf(x) - target,
        |x: f64| x.powf(x) * (x.ln() + 1.0),
        x0,
    )?;

    if json {
        return print_json(&root);
    }
    if trace {
        for (k, x) in root.trace.iter().enumerate() {
            println!("{k:>4} {x:>20.12}");
        }
    }
    println!(
        "x = {:.9} after {} iterations (x^x - {target} = {:.3e})",
        root.x, root.iterations, root.residual
    );
    Ok(())
}

fn run_sqrt(value: f64, tol: f64, json: bool) -> Result<()> {
    let root = sqrt_newton(value, tol)?;
    if json {
        return print_json(&json!({ "value": value, "sqrt": root, "library": value.sqrt() }));
    }
    println!("sqrt({value}) = {root:.15} (library {:.15})", value.sqrt());
    Ok(())
}

fn run_stability(c: f64, json: bool) -> Result<()> {
    let Some((lo, hi)) = quadratic_fixed_points(c) else {
        if json {
            return print_json(&json!({ "c": c, "fixed_points": [] }));
        }
        println!("x^2 + {c} has no real fixed points");
        return Ok(());
    };
    let points = [(lo, fixed_point_stability(lo)), (hi, fixed_point_stability(hi))];
    if json {
        return print_json(&json!({ "c": c, "fixed_points": points }));
    }
    for (x, s) in points {
        println!("x* = {x:>12.8}  |f'(x*)| = {:>10.6}  {s:?}", (2.0 * x).abs());
    }
    Ok(())
}

fn run_sequence(kind: SequenceKind, len: usize, x0: f64, c: f64, json: bool) -> Result<()> {
    let (values, sums) = match kind {
        SequenceKind::Orbit => (quadratic_orbit(x0, c, len), None),
        SequenceKind::Harmonic => {
            let v = alternating_harmonic(len);
            let s = partial_sums(&v);
            (v, Some(s))
        }
    };
    // Divergent orbits have no mean.
    let average = mean(&values).ok();

    if json {
        return print_json(&json!({ "values": values, "partial_sums": sums, "mean": average }));
    }
    for (k, v) in values.iter().enumerate() {
        match &sums {
            Some(s) => println!("{k:>4} {v:>14.8} {:>14.8}", s[k]),
            None => println!("{k:>4} {v:>14.8}"),
        }
    }
    match average {
        Some(m) => println!("mean = {m:.8}"),
        None => println!("mean undefined (orbit diverged)"),
    }
    Ok(())
}

// ============================================================================
// Escape Time
// ============================================================================

fn run_escape(
    fractal: Fractal<f64>,
    args: &RenderArgs,
    preset: Option<Region<f64>>,
    json: bool,
) -> Result<()> {
    let region = match (&args.region, preset) {
        (Some(r), _) => Region::new(r[0], r[1], r[2], r[3])?,
        (None, Some(r)) => r,
        (None, None) => Region::default(),
    };
    let renderer = Escape::new()
        .fractal(fractal)
        .region(region)
        .resolution(args.width, args.height)
        .max_depth(args.depth)
        .parallel(args.parallel)
        .build()?;
    let depths = renderer.render()?;

    if let Some(path) = &args.out {
        let colormap = if args.gradient { Gradient } else { Grayscale };
        let image = colormap.paint(&depths)?;
        let mut out = create(path)?;
        write_ppm(&image, &mut out).with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "image written");
    }

    let bounded = depths.bounded_count();
    if json {
        return print_json(&json!({
            "width": depths.width(),
            "height": depths.height(),
            "max_depth": depths.max_depth(),
            "bounded": bounded,
        }));
    }
    println!(
        "{}x{} pixels, {} bounded after {} iterations",
        depths.width(),
        depths.height(),
        bounded,
        depths.max_depth()
    );
    if args.out.is_none() {
        print_depth_preview(&depths)?;
    }
    Ok(())
}

/// Coarse character preview of a depth map.
fn print_depth_preview(depths: &DepthMap) -> Result<()> {
    let cols = DEFAULT_COLUMNS.min(depths.width());
    let rows = (DEFAULT_ROWS * 2).min(depths.height());
    let shades = [' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];
    let max = f64::from(depths.max_depth().max(1));
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for r in 0..rows {
        let row = r * depths.height() / rows;
        let line: String = (0..cols)
            .map(|c| {
                let col = c * depths.width() / cols;
                match depths.get(col, row) {
                    Some(0) | None => '@',
                    Some(n) => {
                        let level = (f64::from(n) / max * (shades.len() - 2) as f64) as usize;
                        shades[level.min(shades.len() - 2)]
                    }
                }
            })
            .collect();
        writeln!(out, "{line}")?;
    }
    Ok(())
}

// ============================================================================
// Interpolation and Quadrature
// ============================================================================

fn run_interp(
    kind: NodeKind,
    degree: Option<usize>,
    samples: usize,
    dat: Option<&Path>,
    json: bool,
) -> Result<()> {
    let (family, default_degree) = match kind {
        NodeKind::Equispaced => (Equispaced, 15),
        NodeKind::Chebyshev => (Chebyshev, 32),
    };
    let degree = degree.unwrap_or(default_degree);
    let nodes = Nodes::<f64>::family(family, degree)?;
    let interpolant = BarycentricInterpolant::from_fn(nodes, runge)?;
    let max_error = interpolant.max_error(runge, -1.0, 1.0, samples)?;

    if let Some(path) = dat {
        let t = linspace(-1.0, 1.0, samples);
        let f: Vec<f64> = t.iter().map(|&x| runge(x)).collect();
        let p = interpolant.evaluate_many(&t);
        save_table(path, &["t", "f", "p"], &[&t[..], &f[..], &p[..]])?;
    }

    if json {
        return print_json(&json!({
            "nodes": format!("{family:?}"),
            "degree": degree,
            "max_error": max_error,
        }));
    }
    println!("{family:?} nodes, degree {degree}: max |p - f| = {max_error:.6e}");
    Ok(())
}

fn run_integrate(panels: usize, tol: Option<f64>, json: bool) -> Result<()> {
    let f = |x: f64| x.cos().powi(3).exp();
    let b = 2.0 * PI;

    match tol {
        Some(tol) => {
            let refined = trapezoid_refined(f, 0.0, b, tol, 30)?;
            if json {
                return print_json(&refined);
            }
            for (level, v) in refined.history.iter().enumerate() {
                println!("{:>8} {v:>20.14}", 1usize << level);
            }
            println!("I = {:.14} with {} panels", refined.value, refined.panels);
        }
        None => {
            let value = trapezoid(f, 0.0, b, panels)?;
            if json {
                return print_json(&json!({ "panels": panels, "value": value }));
            }
            println!("I = {value:.14} with {panels} panels");
        }
    }
    Ok(())
}

// ============================================================================
// Least Squares and Geometry
// ============================================================================

fn run_fit_line(n: usize, noise: f64, kind: NoiseKind, seed: u64, json: bool) -> Result<()> {
    if n == 0 {
        bail!("need at least one interval");
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let x = linspace(0.0, 10.0, n + 1);
    let truth: Vec<f64> = x.iter().map(|&xi| 0.5 * xi + 0.5).collect();
    let y: Vec<f64> = match kind {
        NoiseKind::Uniform => {
            let dist = Uniform::new_inclusive(-noise, noise)?;
            truth.iter().map(|&t| t + dist.sample(&mut rng)).collect()
        }
        NoiseKind::Normal => {
            let dist = Normal::new(0.0, noise)?;
            truth.iter().map(|&t| t + dist.sample(&mut rng)).collect()
        }
    };

    let fit = fit_line(&x, &y)?;
    if json {
        return print_json(&json!({ "x": x, "y": y, "fit": fit }));
    }

    let fitted: Vec<f64> = x.iter().map(|&xi| fit.predict(xi)).collect();
    let mut canvas = AsciiCanvas::fitted(DEFAULT_COLUMNS, DEFAULT_ROWS, &x, &[&y[..], &fitted[..]])?;
    canvas.draw_axes();
    canvas.plot(&x, &fitted, '.');
    canvas.plot(&x, &y, '*');
    print!("{canvas}");
    println!(
        "y = {:.6} x + {:.6}   rss = {:.6}   r^2 = {:.6}",
        fit.slope, fit.intercept, fit.rss, fit.r_squared
    );
    Ok(())
}

fn run_fit_conic(
    n: usize,
    noise: f64,
    step: f64,
    threshold: f64,
    seed: u64,
    dat: Option<&Path>,
    json: bool,
) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    let shape = EllipseShape::default();
    let points = if noise > 0.0 {
        let dist = Uniform::new_inclusive(-noise, noise)?;
        ellipse_samples(&shape, n, |_| (dist.sample(&mut rng), dist.sample(&mut rng)))
    } else {
        ellipse_samples(&shape, n, |_| (0.0, 0.0))
    };

    let conic = fit_conic(&points)?;
    let region = Region::new(-0.5, 4.5, -2.5, 2.5)?;
    let curve = implicit_curve(&conic, &region, step, threshold)?;
    let outline = if curve.len() >= 3 {
        convex_hull(&curve)?
    } else {
        Vec::new()
    };

    if let Some(path) = dat {
        let xs: Vec<f64> = outline.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = outline.iter().map(|p| p.y).collect();
        save_table(path, &["x", "y"], &[&xs[..], &ys[..]])?;
    }

    let kind = conic.kind(1e-9);
    if json {
        return print_json(&json!({
            "conic": conic,
            "kind": kind,
            "curve_points": curve.len(),
            "hull": outline,
        }));
    }
    println!(
        "{:.6} x^2 + {:.6} y^2 + {:.6} xy + {:.6} x + {:.6} y = 1",
        conic.a, conic.b, conic.c, conic.d, conic.e
    );
    println!("discriminant {:.6}: {kind:?}", conic.discriminant());
    if let Some(center) = conic.center() {
        println!("centre ({:.4}, {:.4})", center.x, center.y);
    }
    println!(
        "{} grid points on the curve, hull of {} vertices, area {:.4}",
        curve.len(),
        outline.len(),
        polygon_area(&outline)
    );
    Ok(())
}

fn run_hull(coords: &[f64], json: bool) -> Result<()> {
    let points: Vec<Point2<f64>> = if coords.is_empty() {
        vec![
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 3.0),
            Point2::new(2.0, 2.0),
            Point2::new(3.0, 2.0),
        ]
    } else {
        if coords.len() % 2 != 0 {
            bail!("coordinates come in x y pairs, got {} numbers", coords.len());
        }
        coords
            .chunks_exact(2)
            .map(|p| Point2::new(p[0], p[1]))
            .collect()
    };

    let hull = convex_hull(&points)?;
    if json {
        return print_json(&hull);
    }
    for p in &hull {
        println!("({}, {})", p.x, p.y);
    }
    println!("area {}", polygon_area(&hull));
    Ok(())
}

// ============================================================================
// Optimization and ODEs
// ============================================================================

fn run_optimize(fine: bool, exact: bool, dat: Option<&Path>, json: bool) -> Result<()> {
    let program = LinearProgram::new(143.0, 60.0)
        .constraint(120.0, 210.0, 15000.0)
        .constraint(110.0, 30.0, 4000.0)
        .constraint(1.0, 1.0, 75.0);

    let solver = GridSearch::new()
        .step(if fine { 1.0 / 20.0 } else { 1.0 })
        .keep_points(dat.is_some())
        .build()?;
    let result = solver.solve(&program)?;

    if let (Some(path), Some(points)) = (dat, &result.points) {
        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
        save_table(path, &["x", "y"], &[&xs[..], &ys[..]])?;
    }

    let vertex = if exact {
        Some(solve_vertices(&program)?)
    } else {
        None
    };

    if json {
        return print_json(&json!({
            "best": result.best,
            "value": result.value,
            "feasible": result.feasible_count,
            "exact": vertex,
        }));
    }
    println!(
        "grid: x = {}, y = {}, value = {} ({} feasible points)",
        result.best.x, result.best.y, result.value, result.feasible_count
    );
    if let Some(v) = vertex {
        println!(
            "exact: x = {:.6}, y = {:.6}, value = {:.6}",
            v.point.x, v.point.y, v.value
        );
    }
    Ok(())
}

fn run_euler(dt: f64, n: usize, a: f64, stages: usize, dat: Option<&Path>, json: bool) -> Result<()> {
    let t: Vec<f64> = (0..=n).map(|k| k as f64 * dt).collect();
    let u: Vec<f64> = t.iter().map(|&tk| (-(tk - 5.0).powi(10)).exp()).collect();
    let outputs = euler_cascade(&u, a, 0.0, dt, stages)?;

    if let Some(path) = dat {
        let names: Vec<String> = (1..=stages).map(|s| format!("x{s}")).collect();
        let mut headers = vec!["t", "u"];
        headers.extend(names.iter().map(String::as_str));
        let mut columns: Vec<&[f64]> = vec![t.as_slice(), u.as_slice()];
        columns.extend(outputs.iter().map(Vec::as_slice));
        save_table(path, &headers, &columns)?;
    }

    if json {
        return print_json(&json!({ "t": t, "u": u, "x": outputs }));
    }
    for (s, x) in outputs.iter().enumerate() {
        let (k, peak) = x
            .iter()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |m, (k, &v)| if v > m.1 { (k, v) } else { m });
        println!("stage {}: peak {peak:.6} at t = {:.1}", s + 1, k as f64 * dt);
    }
    for (k, (tk, uk)) in t.iter().zip(&u).enumerate().step_by((n / 10).max(1)) {
        let xs: Vec<String> = outputs.iter().map(|x| format!("{:>10.6}", x[k])).collect();
        println!("{tk:>6.2} {uk:>10.6} {}", xs.join(" "));
    }
    Ok(())
}
