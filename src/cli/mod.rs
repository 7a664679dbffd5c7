//! Terminal front end over a [`Session`]: tables by default, JSON with `--json`.

mod args;

pub use args::*;

use crate::*;
use clap::Parser;
use colored::Colorize;
use serde::Serialize;

pub fn run() -> anyhow::Result<()> {
    let args = Args::parse();
    let policy = match (args.neutral, args.policy.as_ref()) {
        (true, _) => Policy::neutral(),
        (false, Some(path)) => Policy::load(path)?,
        (false, None) => Policy::default(),
    };
    let session = Session::new(policy, Dataset::load(&args.data)?);
    let json = args.json;
    match args.query {
        Query::Periods => emit(json, &session.periods(), |periods| {
            periods.iter().map(|p| p.to_string()).collect::<Vec<_>>().join("\n")
        }),
        Query::Report { period, multiplier } => {
            emit(json, &session.report(period, multiplier), report)
        }
        Query::Tipping { period } => {
            let periods = period.map(|p| vec![p]).unwrap_or_else(|| session.periods());
            let points = periods
                .into_iter()
                .map(|p| (p, session.tipping(p)))
                .collect::<Vec<(Period, Option<TippingPoint>)>>();
            emit(json, &points, |p| tipping(p))
        }
        Query::Trend { multiplier } => emit(json, &session.trend(multiplier), |c| trend(c)),
        Query::Sweep { period } => emit(json, &session.sweep(period), |c| sweep(c)),
        Query::Tree {
            period,
            pair,
            multiplier,
            perspective,
        } => match session.tree(period, pair, multiplier, perspective) {
            Some(tree) => emit(json, &tree, |t| t.to_string()),
            None => Err(anyhow::anyhow!("no observations for {} in {}", pair, period)),
        },
    }
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl Fn(&T) -> String) -> anyhow::Result<()> {
    match json {
        true => println!("{}", serde_json::to_string_pretty(value)?),
        false => println!("{}", text(value)),
    }
    Ok(())
}

fn report(report: &Report) -> String {
    let headline = format!("{} @ {:.2}x", report.period, report.multiplier).bold();
    let structure = match report.classification {
        Classification::Coordination => report.classification.to_string().green(),
        Classification::PrisonersDilemma => report.classification.to_string().red(),
        _ => report.classification.to_string().yellow(),
    };
    let robust = match report.robust {
        Some(true) => "robust".green(),
        Some(false) => "fragile".red(),
        None => "n/a".dimmed(),
    };
    let mut out = format!("{}\n{}\n{}\n", headline, report.matrix, report.analysis);
    if let Some(mixed) = report.solution.mixed() {
        out.push_str(&format!("{}\n", mixed));
    }
    out.push_str(&format!("{}\n", report.solution.recommendation().italic()));
    out.push_str(&format!("structure  {}\n", structure));
    if let Some(gap) = report.welfare.shortfall() {
        out.push_str(&format!("shortfall  {}\n", Crores(gap)));
    }
    out.push_str(&format!("robust     {}\n", robust));
    if let Some(verification) = report.verification.as_ref() {
        out.push_str(&format!("{}", verification));
    }
    match report.tipping.as_ref() {
        Some(point) => out.push_str(&format!("tipping    {}", point.to_string().cyan())),
        None => out.push_str(&format!("tipping    {}", "none".dimmed())),
    }
    out
}

fn tipping(points: &[(Period, Option<TippingPoint>)]) -> String {
    points
        .iter()
        .map(|(period, point)| match point {
            Some(point) => point.to_string().cyan().to_string(),
            None => format!("{}: holds", period).dimmed().to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[rustfmt::skip]
fn trend(curve: &[Trend]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:>6} │ {:>12} │ {:>12} │ {:>12}", "period", "HD", "MD", "LD").bold().to_string());
    out.push('\n');
    for point in curve {
        let [a, m, c] = point.values;
        out.push_str(&format!("{:>6} │ {:>12} │ {:>12} │ {:>12}\n", point.period, Crores(a), Crores(m), Crores(c)));
    }
    out
}

#[rustfmt::skip]
fn sweep(curve: &[Sweep]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:>6} │ {:>12} │ {:>12} │ {:>12} │ {}", "x", "HD", "MD", "LD", "best").bold().to_string());
    out.push('\n');
    for point in curve {
        let [a, m, c] = point.values;
        out.push_str(&format!("{:>6.2} │ {:>12} │ {:>12} │ {:>12} │ {}\n", point.multiplier, Crores(a), Crores(m), Crores(c), point.optimal.code()));
    }
    out
}
