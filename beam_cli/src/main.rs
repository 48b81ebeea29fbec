//! # Beam CLI
//!
//! Terminal front end for `beam_core`. Loads a case file (or prompts for the
//! inputs), then prints the shear, moment and deflection diagrams as tables
//! followed by their JSON form.
//!
//! ```text
//! beam_cli [CASE.beam.json] [--save PATH] [--segments N] [--json-only]
//! ```
//!
//! Log verbosity is controlled with `RUST_LOG` (default `beam_core=info,beam_cli=info`).

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use beam_core::calculations::{
    AnalysisCondition, Beam, Diagram, Equation, Quantity, DEFAULT_SEGMENT_COUNT,
};
use beam_core::{load_case, save_case, BeamCase, CalcError, CalcResult, Material};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Default)]
struct Args {
    case_path: Option<PathBuf>,
    save_path: Option<PathBuf>,
    segments: Option<usize>,
    json_only: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--save" => {
                let path = iter.next().ok_or("--save needs a path")?;
                args.save_path = Some(PathBuf::from(path));
            }
            "--segments" => {
                let value = iter.next().ok_or("--segments needs a number")?;
                let n = value
                    .parse::<usize>()
                    .map_err(|_| format!("invalid segment count '{}'", value))?;
                args.segments = Some(n);
            }
            "--json-only" => args.json_only = true,
            "-h" | "--help" => return Err(usage()),
            other if other.starts_with("--") => {
                return Err(format!("unknown option '{}'\n{}", other, usage()))
            }
            path => args.case_path = Some(PathBuf::from(path)),
        }
    }

    Ok(args)
}

fn usage() -> String {
    "usage: beam_cli [CASE.beam.json] [--save PATH] [--segments N] [--json-only]".to_string()
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn prompt_condition() -> AnalysisCondition {
    println!("Support conditions:");
    for (i, c) in AnalysisCondition::ALL.iter().enumerate() {
        println!("  {}) {}", i + 1, c);
    }
    prompt_line("Select condition [2]: ")
        .and_then(|s| s.parse::<usize>().ok())
        .and_then(|i| i.checked_sub(1))
        .and_then(|i| AnalysisCondition::ALL.get(i).copied())
        .unwrap_or(AnalysisCondition::TwoSpanUnequal)
}

fn prompt_case() -> CalcResult<BeamCase> {
    let condition = prompt_condition();
    let primary = prompt_f64("Primary span L1 (m) [4.0]: ", 4.0);
    let secondary = match condition {
        AnalysisCondition::SimplySupported => 0.0,
        AnalysisCondition::TwoSpanUnequal => prompt_f64("Secondary span L2 (m) [6.0]: ", 6.0),
    };
    let load = prompt_f64("Uniform load w (kN/m) [5.0]: ", 5.0);
    let ei = prompt_f64("Flexural rigidity EI [1.0e9]: ", 1.0e9);
    let j2 = prompt_f64("Scaling factor j2 [1.0]: ", 1.0);
    println!();

    let material = Arc::new(Material::new("CLI material", [("EI", ei), ("j2", j2)]));
    let beam = Beam::new(primary, secondary, material)?;
    let case = BeamCase::new("CLI", beam, load, condition);
    case.validate()?;
    Ok(case)
}

fn print_header(case: &BeamCase) {
    let beam = &case.beam;
    println!("═══════════════════════════════════════");
    println!("  BEAM DIAGRAMS: {}", case.condition);
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    if !case.meta.label.is_empty() {
        println!("  Label:    {}", case.meta.label);
    }
    println!("  L1:       {:.3} m", beam.primary_span);
    if case.condition == AnalysisCondition::TwoSpanUnequal {
        println!("  L2:       {:.3} m", beam.secondary_span);
    }
    println!("  w:        {:.3} kN/m", case.load);
    println!("  Material: {}", beam.material.name);
    for (key, value) in beam.material.properties() {
        println!("    {:<4} = {}", key, value);
    }
    println!("  Segments: {}", case.settings.segment_count);
    println!();
}

fn print_reactions(equation: &Equation) {
    if let Equation::TwoSpanUnequal(eq) = equation {
        let r = eq.reactions;
        println!("Reactions:");
        println!("  M1 = {:>12.4}", r.m1);
        println!("  R1 = {:>12.4}", r.r1);
        println!("  R2 = {:>12.4}", r.r2);
        println!("  R3 = {:>12.4}", r.r3);
        println!();
    }
}

fn print_diagram(diagram: &Diagram, formula: &str) {
    let q = diagram.quantity;
    println!("{} ({})", q, q.symbol());
    println!("  {}", formula);
    println!("  {:>10}  {:>14}", "x", q.symbol());
    println!("  {:->10}  {:->14}", "", "");
    for p in &diagram.points {
        println!("  {:>10.4}  {:>14.4}", p.x, p.y);
    }
    println!(
        "  max {:.4} at x = {:.4}, min {:.4} at x = {:.4}",
        diagram.max.y, diagram.max.x, diagram.min.y, diagram.min.x
    );
    println!();
}

fn run(args: Args) -> CalcResult<()> {
    let mut case = match &args.case_path {
        Some(path) => load_case(path)?,
        None => {
            println!("Beam CLI - Shear, Moment and Deflection Diagrams");
            println!("================================================");
            println!();
            prompt_case()?
        }
    };

    if let Some(n) = args.segments {
        case = case.with_segment_count(n);
        case.validate()?;
    }

    let mut diagrams = Vec::with_capacity(Quantity::ALL.len());
    for quantity in Quantity::ALL {
        let result = case.analyze(quantity)?;
        let diagram = result.diagram(case.settings.segment_count)?;
        diagrams.push((result.equation, diagram));
    }

    if !args.json_only {
        print_header(&case);
        if let Some((equation, _)) = diagrams.first() {
            print_reactions(equation);
        }
        for (equation, diagram) in &diagrams {
            print_diagram(diagram, equation.formula());
        }
        println!("JSON Output:");
    }

    let json: Vec<&Diagram> = diagrams.iter().map(|(_, d)| d).collect();
    println!("{}", serde_json::to_string_pretty(&json)?);

    if let Some(path) = &args.save_path {
        case.touch();
        save_case(&case, path)?;
        if !args.json_only {
            println!();
            println!("Saved case to {}", path.display());
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "beam_core=info,beam_cli=info".into()),
        )
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}", message);
            return ExitCode::from(2);
        }
    };

    tracing::debug!(?args, default_segments = DEFAULT_SEGMENT_COUNT, "starting");

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_error(&e),
    }
}

fn report_error(e: &CalcError) -> ExitCode {
    tracing::error!(code = e.error_code(), "{}", e);
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
    ExitCode::FAILURE
}
