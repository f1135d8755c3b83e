//! Inspect stored classification evaluation results.
//!
//! Usage:
//!   classeval <COMMAND> <RESULTS.json> [OPTIONS]
//!
//! Commands:
//!   report   Per-class precision/recall/F1 table
//!   metrics  Accuracy, precision, recall, F-beta and support as JSON
//!   matrix   Confusion matrix as a text grid
//!   plot     Display-trimmed confusion matrix with "other"/missing columns

use anyhow::{Context, Result, anyhow, bail};
use classeval::evaluation::parameters::{
    ConfusionMatrixParameters, MetricsParameters, PlotParameters, ReportParameters,
};
use classeval::evaluation::{
    Average, ConfusionMatrixPlot, ConfusionMatrixRenderer, EvaluationResults, TextTableRenderer,
};
use std::env;
use std::process;
use std::str::FromStr;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "report" | "r" => run_report(&args[2..]),
        "metrics" | "m" => run_metrics(&args[2..]),
        "matrix" | "cm" => run_matrix(&args[2..]),
        "plot" | "p" => run_plot(&args[2..]),
        "help" | "-h" | "--help" => {
            print_usage();
            Ok(())
        }
        "version" | "-V" | "--version" => {
            println!("classeval {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn print_usage() {
    println!(
        r#"classeval - classification evaluation results

USAGE:
    classeval <COMMAND> <RESULTS.json> [OPTIONS]

COMMANDS:
    report, r      Per-class precision/recall/F1 table
    metrics, m     Aggregate metrics as JSON
    matrix, cm     Confusion matrix
    plot, p        Display-trimmed confusion matrix
    help           Print this help message
    version        Print version

OPTIONS:
    --classes a,b,c      Restrict to these classes (in this order)
    --digits N           Decimals in the report (default 2)
    --average MODE       micro | macro | weighted (default micro)
    --beta B             F-beta weight (default 1.0)
    --include-other      Add an "other" row/column to the matrix
    --no-other           Plot without "other"/missing columns
    --other-label NAME   Label of the plot's "other" column
    --text               Print metrics as "name: value" lines
"#
    );
}

#[derive(Default)]
struct Options {
    path: Option<String>,
    classes: Option<Vec<String>>,
    digits: Option<usize>,
    average: Option<Average>,
    beta: Option<f64>,
    include_other: bool,
    no_other: bool,
    other_label: Option<String>,
    text: bool,
}

fn parse_options(args: &[String]) -> Result<Options> {
    let mut opts = Options::default();
    let mut it = args.iter();
    while let Some(arg) = it.next() {
        let mut value = |flag: &str| {
            it.next()
                .cloned()
                .ok_or_else(|| anyhow!("missing value for {flag}"))
        };
        match arg.as_str() {
            "--classes" => {
                let v = value("--classes")?;
                opts.classes = Some(
                    v.split(',')
                        .map(str::trim)
                        .filter(|c| !c.is_empty())
                        .map(str::to_string)
                        .collect(),
                );
            }
            "--digits" => {
                let v = value("--digits")?;
                opts.digits = Some(v.parse().with_context(|| format!("invalid --digits {v}"))?);
            }
            "--average" => {
                let v = value("--average")?;
                opts.average =
                    Some(Average::from_str(&v).with_context(|| format!("invalid --average {v}"))?);
            }
            "--beta" => {
                let v = value("--beta")?;
                opts.beta = Some(v.parse().with_context(|| format!("invalid --beta {v}"))?);
            }
            "--other-label" => opts.other_label = Some(value("--other-label")?),
            "--include-other" => opts.include_other = true,
            "--no-other" => opts.no_other = true,
            "--text" => opts.text = true,
            flag if flag.starts_with("--") => bail!("unknown option {flag}"),
            path => {
                if opts.path.replace(path.to_string()).is_some() {
                    bail!("expected a single results file");
                }
            }
        }
    }
    Ok(opts)
}

fn load(opts: &Options) -> Result<EvaluationResults<String>> {
    let path = opts
        .path
        .as_deref()
        .ok_or_else(|| anyhow!("missing results file"))?;
    EvaluationResults::read_json(path).with_context(|| format!("failed to load {path}"))
}

fn run_report(args: &[String]) -> Result<()> {
    let opts = parse_options(args)?;
    let results = load(&opts)?;
    let params = ReportParameters {
        digits: opts.digits.unwrap_or(ReportParameters::default().digits),
    };
    results.print_report(opts.classes.as_deref(), params.digits)?;
    Ok(())
}

fn run_metrics(args: &[String]) -> Result<()> {
    let opts = parse_options(args)?;
    let results = load(&opts)?;
    let defaults = MetricsParameters::default();
    let params = MetricsParameters {
        average: opts.average.unwrap_or(defaults.average),
        beta: opts.beta.unwrap_or(defaults.beta),
    };
    let metrics = results.metrics_with(opts.classes.as_deref(), &params)?;
    if opts.text {
        for m in metrics.to_measurements() {
            println!("{m:.4}");
        }
    } else {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
    }
    Ok(())
}

fn run_matrix(args: &[String]) -> Result<()> {
    let opts = parse_options(args)?;
    let results = load(&opts)?;
    let params = ConfusionMatrixParameters {
        include_other: opts.include_other,
    };
    let plot = ConfusionMatrixPlot {
        matrix: results.confusion_matrix(opts.classes.as_deref(), params.include_other)?,
        info: results.info().clone(),
    };
    let text = TextTableRenderer::default().render(plot)?;
    print!("{text}");
    Ok(())
}

fn run_plot(args: &[String]) -> Result<()> {
    let opts = parse_options(args)?;
    let results = load(&opts)?;
    let params = PlotParameters {
        include_other: !opts.no_other,
        other_label: opts.other_label.clone(),
    };
    let text = results.plot_confusion_matrix(
        &TextTableRenderer::default(),
        opts.classes.as_deref(),
        params.include_other,
        params.other_label,
    )?;
    print!("{text}");
    Ok(())
}
