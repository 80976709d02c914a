mod args;
mod output;

use std::{fs::File, io, io::BufWriter, path::Path, process::ExitCode};

use clap::Parser;
use color_eyre::{Result, eyre::WrapErr};
use regula::{
    Observer, Session,
    observers::{IterationRecord, TraceObserver, bracket_details},
    solvers::{
        diagnostics::WorkabilityReport,
        equation::false_position::{Action, Event, Solution},
    },
};
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use self::{args::Args, output::PlotFile};

fn main() -> Result<ExitCode> {
    install_tracing();
    color_eyre::install()?;

    let args = Args::parse();
    let settings = args.settings()?;
    let precision = settings.precision;

    let mut session = Session::with_settings(settings);
    session
        .set_expression(&args.expression)
        .wrap_err("invalid expression")?;

    let (a, b) = (args.lower, args.upper);
    let report = session.is_workable(a, b)?;
    print!("{}", output::report(&report));

    let mut records = Vec::new();
    let solution = if report.workable {
        println!("Starting False Position Method...");
        let solution = solve(&session, &args, precision, &mut records)?;
        print!("{}", output::results(&solution, precision));
        Some(solution)
    } else {
        None
    };

    if let Some(path) = &args.plot {
        let solved = Solved {
            report: &report,
            solution: solution.as_ref(),
            iterations: &records,
        };
        write_plot(&session, &args, &solved, path)?;
        info!(path = %path.display(), "wrote plot points");
    }

    Ok(if report.workable {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Solves on the interval from `args`, showing each iteration as it happens
/// and keeping a record of it in `records`.
fn solve(
    session: &Session,
    args: &Args,
    precision: usize,
    records: &mut Vec<IterationRecord>,
) -> Result<Solution> {
    let mut trace = TraceObserver::new(precision);
    if args.verbose {
        trace = trace.detailed();
    }

    let observer = |event: &Event| -> Option<Action> {
        let record = IterationRecord::from_event(event);
        records.push(record);

        if args.log_iterations {
            return trace.observe(event);
        }
        print!("{}", output::iteration(&record, precision));
        if args.verbose {
            println!("{}\n", bracket_details(event, precision));
        }
        None
    };

    session
        .solve(args.lower, args.upper, observer)
        .wrap_err("false position method failed")
}

/// Everything known about the interval once the run is over.
struct Solved<'a> {
    report: &'a WorkabilityReport,
    solution: Option<&'a Solution>,
    iterations: &'a [IterationRecord],
}

fn write_plot(session: &Session, args: &Args, solved: &Solved<'_>, path: &Path) -> Result<()> {
    let (xs, ys) = session
        .get_plot_points(args.lower, args.upper, None)
        .wrap_err("failed to sample plot points")?;

    let plot = PlotFile {
        expression: &args.expression,
        interval: [args.lower, args.upper],
        report: solved.report,
        solution: solved.solution,
        iterations: solved.iterations,
        xs,
        ys,
    };

    let file = File::create(path)
        .wrap_err_with(|| format!("failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &plot)?;
    Ok(())
}

fn install_tracing() {
    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer().with_target(false).with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();
}
