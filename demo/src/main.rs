//! AROGYA Triage Runtime — Demo CLI
//!
//! Runs canned walk-through scenarios or ad-hoc analyses against the real
//! AROGYA components (knowledge base, triage engine, risk engine, wire
//! verifier).
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- analyze "severe headache for days"
//!   cargo run -p demo -- risk --age 45 --bmi 28.5 --smoker
//!   cargo run -p demo -- verify result.json

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use arogya_contracts::error::{ArogyaError, ArogyaResult};
use arogya_contracts::risk::RiskProfile;
use arogya_contracts::triage::TriageResult;
use arogya_knowledge::KnowledgeBase;
use arogya_risk::assess;
use arogya_triage::{identify_red_flags, TriageEngine};
use arogya_verify::ContractVerifier;

// ── CLI definition ────────────────────────────────────────────────────────────

/// AROGYA — rule-based symptom triage runtime demo.
///
/// Each subcommand exercises the triage pipeline, the risk engine, or the
/// wire-contract verifier over the bundled knowledge tables.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "AROGYA triage runtime demo",
    long_about = "Runs AROGYA demo scenarios showing emergency short-circuiting,\n\
                  symptom extraction, severity scoring, risk assessment, and\n\
                  wire-contract verification."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run all canned scenarios in sequence.
    RunAll,
    /// Triage a free-text symptom description and print the wire document.
    Analyze {
        /// Free-text symptom description.
        text: String,
        /// Load knowledge tables from a TOML file instead of the bundled set.
        #[arg(long)]
        knowledge: Option<PathBuf>,
    },
    /// Score a patient profile and print the risk report.
    Risk {
        #[arg(long, default_value_t = 30)]
        age: u32,
        #[arg(long, default_value_t = 25.0)]
        bmi: f64,
        #[arg(long, default_value_t = 120)]
        systolic: u32,
        #[arg(long, default_value_t = 80)]
        diastolic: u32,
        #[arg(long, default_value_t = 200.0)]
        cholesterol: f64,
        #[arg(long)]
        smoker: bool,
        #[arg(long)]
        diabetic: bool,
        /// Family history entries (repeatable).
        #[arg(long = "family")]
        family_history: Vec<String>,
    },
    /// Verify a serialized triage document (file path or stdin).
    Verify {
        /// Path to a JSON document; reads stdin when omitted.
        file: Option<PathBuf>,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::RunAll => run_all(),
        Command::Analyze { text, knowledge } => cmd_analyze(&text, knowledge.as_deref()),
        Command::Risk {
            age,
            bmi,
            systolic,
            diastolic,
            cholesterol,
            smoker,
            diabetic,
            family_history,
        } => cmd_risk(RiskProfile {
            age,
            bmi,
            systolic,
            diastolic,
            cholesterol,
            smoker,
            diabetic,
            family_history,
        }),
        Command::Verify { file } => cmd_verify(file.as_deref()),
    };

    match result {
        Ok(()) => {}
        Err(e) => {
            eprintln!("demo error: {}", e);
            std::process::exit(1);
        }
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

fn cmd_analyze(text: &str, knowledge: Option<&std::path::Path>) -> ArogyaResult<()> {
    let engine = match knowledge {
        Some(path) => TriageEngine::new(Arc::new(KnowledgeBase::from_file(path)?)),
        None => TriageEngine::with_builtin_knowledge(),
    };

    let result = engine.analyze(text);
    print_result(&result);

    let flags = identify_red_flags(text);
    if !flags.is_empty() {
        println!("  Red flags:       {}", flags.join(", "));
    }

    println!();
    println!(
        "{}",
        serde_json::to_string_pretty(&result.to_document())
            .expect("wire document must serialize")
    );
    Ok(())
}

fn cmd_risk(profile: RiskProfile) -> ArogyaResult<()> {
    let report = assess(&profile);

    println!("Risk assessment");
    println!("  Total score:     {:.2}", report.total_score);
    println!("  Risk band:       {}", report.band);
    println!("  Factor breakdown:");
    println!("    age             {:.2}", report.factors.age);
    println!("    bmi             {:.2}", report.factors.bmi);
    println!("    blood pressure  {:.2}", report.factors.blood_pressure);
    println!("    cholesterol     {:.2}", report.factors.cholesterol);
    println!("    lifestyle       {:.2}", report.factors.lifestyle);
    println!("    family history  {:.2}", report.factors.family_history);
    println!("  Recommendations:");
    for recommendation in &report.recommendations {
        println!("    - {}", recommendation);
    }
    Ok(())
}

fn cmd_verify(file: Option<&std::path::Path>) -> ArogyaResult<()> {
    let contents = match file {
        Some(path) => std::fs::read_to_string(path).map_err(|e| ArogyaError::InvalidDocument {
            reason: format!("failed to read '{}': {}", path.display(), e),
        })?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| ArogyaError::InvalidDocument {
                    reason: format!("failed to read stdin: {}", e),
                })?;
            buffer
        }
    };

    let document: serde_json::Value =
        serde_json::from_str(&contents).map_err(|e| ArogyaError::InvalidDocument {
            reason: format!("not valid JSON: {}", e),
        })?;

    let report = ContractVerifier::new().verify(&document);
    if report.passed {
        println!("Document conforms to the triage wire contract.");
        Ok(())
    } else {
        println!("Document violates the triage wire contract:");
        for failure in &report.failures {
            println!("  [{}] {}", failure.rule_id, failure.message);
        }
        std::process::exit(1);
    }
}

// ── Canned scenarios ──────────────────────────────────────────────────────────

fn run_all() -> ArogyaResult<()> {
    print_banner();
    scenario_emergency();
    scenario_primary_match();
    scenario_no_match();
    scenario_risk();
    scenario_verification();
    println!("All scenarios completed.");
    Ok(())
}

fn scenario_emergency() {
    println!("=== Scenario 1: Emergency short-circuit ===");
    println!();

    let engine = TriageEngine::with_builtin_knowledge();
    let input = "unbearable chest pain that started suddenly";
    println!("  Input: \"{}\"", input);
    println!("  Note:  'unbearable' and 'suddenly' would score 55 points,");
    println!("         but the emergency check runs first and wins.");

    let result = engine.analyze(input);
    print_result(&result);
    println!("  RESULT: emergency (expected)");
    println!();
}

fn scenario_primary_match() {
    println!("=== Scenario 2: Primary-match classification ===");
    println!();

    let engine = TriageEngine::with_builtin_knowledge();
    for input in [
        "I have had a severe headache for days",
        "mild headache",
        "Persistent cough with phlegm",
        "severe unbearable stomach pain for days",
    ] {
        println!("  Input: \"{}\"", input);
        let result = engine.analyze(input);
        print_result(&result);
        let flags = identify_red_flags(input);
        if !flags.is_empty() {
            println!("  Red flags:       {}", flags.join(", "));
        }
        println!();
    }
}

fn scenario_no_match() {
    println!("=== Scenario 3: No-match fallback ===");
    println!();

    let engine = TriageEngine::with_builtin_knowledge();
    let input = "general tiredness after travel";
    println!("  Input: \"{}\"", input);

    let result = engine.analyze(input);
    print_result(&result);
    println!("  RESULT: generic fallback (expected)");
    println!();
}

fn scenario_risk() {
    println!("=== Scenario 4: Health risk assessment ===");
    println!();

    let profile = RiskProfile {
        age: 45,
        bmi: 28.5,
        systolic: 135,
        diastolic: 88,
        cholesterol: 220.0,
        smoker: true,
        diabetic: false,
        family_history: vec!["heart_disease".to_string(), "diabetes".to_string()],
    };
    println!("  Profile: 45y, BMI 28.5, BP 135/88, cholesterol 220, smoker,");
    println!("           family history of heart disease and diabetes");

    let report = assess(&profile);
    println!("  Total score:     {:.2}", report.total_score);
    println!("  Risk band:       {}", report.band);
    println!("  Top advice:      {}", report.recommendations[0]);
    println!();
}

fn scenario_verification() {
    println!("=== Scenario 5: Wire-contract verification ===");
    println!();

    let engine = TriageEngine::with_builtin_knowledge();
    let verifier = ContractVerifier::new();

    // A freshly produced document conforms.
    let document = engine.analyze("fever and cough").to_document();
    let report = verifier.verify(&document);
    println!("  Engine-produced document:   {}", pass_fail(report.passed));

    // A tampered document does not: emergency flag without the invariant.
    let mut tampered = document;
    tampered["emergency"] = serde_json::Value::Bool(true);
    let report = verifier.verify(&tampered);
    println!("  Tampered emergency flag:    {}", pass_fail(report.passed));
    for failure in &report.failures {
        println!("    [{}] {}", failure.rule_id, failure.message);
    }
    println!();
}

// ── Output helpers ────────────────────────────────────────────────────────────

fn print_result(result: &TriageResult) {
    println!("  Condition:       {}", result.condition);
    println!(
        "  Severity:        {} ({})",
        result.severity, result.urgency
    );
    println!("  Confidence:      {}", result.confidence);
    println!("  Emergency:       {}", result.is_emergency);
    if result.medicines.is_empty() {
        println!("  Medicines:       (none)");
    } else {
        println!("  Medicines:       {}", result.medicines.join(", "));
    }
    println!("  Recommendations:");
    for recommendation in &result.recommendations {
        println!("    - {}", recommendation);
    }
}

fn pass_fail(passed: bool) -> &'static str {
    if passed {
        "PASS"
    } else {
        "FAIL (expected for tampered input)"
    }
}

fn print_banner() {
    println!();
    println!("AROGYA — Rule-based Symptom Triage Runtime");
    println!("==========================================");
    println!();
    println!("Triage pipeline per analysis:");
    println!("  [1] Normalize input (lowercase, nothing else)");
    println!("  [2] Emergency phrase check — any match short-circuits the pipeline");
    println!("  [3] Symptom extraction in knowledge-table order");
    println!("  [4] Additive severity scoring over the whole input");
    println!("  [5] Result assembly: condition, medicines, recommendations");
    println!();
    println!("Not a diagnostic system. For emergencies call 102 or 108.");
    println!();
}
