//! Command-line interface for vhdlstyle
//! This binary analyzes VHDL files against the shipped style rules and,
//! optionally, rewrites them with the violations fixed.
//!
//! Usage:
//!   vhdlstyle `<path>` [--config `<profile>`] [--format `<format>`]  - Report style violations
//!   vhdlstyle `<path>` --fix                                         - Fix violations in place
//!
//! Exit codes: 0 clean, 1 violations reported, 2 configuration, I/O, or
//! classification errors.

use std::fs;
use std::path::Path;
use std::process;

use clap::{Arg, ArgAction, Command};

use vhdlstyle_parser::vhdl::SourceFile;
use vhdlstyle_rules::{rules, Engine, RuleReport};

fn main() {
    let matches = Command::new("vhdlstyle")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A style analyzer and auto-formatter for VHDL files")
        .arg(
            Arg::new("path")
                .help("Path to the VHDL file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("fix")
                .long("fix")
                .help("Apply fixes to the file in place instead of reporting")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Style profile layered over the built-in defaults"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Report format: text or json")
                .default_value("text"),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").expect("path is required");
    let config_path = matches.get_one::<String>("config").map(Path::new);
    let format = matches
        .get_one::<String>("format")
        .expect("format has a default");

    let config = vhdlstyle_config::Loader::new()
        .load(config_path)
        .unwrap_or_else(|e| {
            eprintln!("Configuration error: {}", e);
            process::exit(2);
        });

    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("{}: {}", path, e);
        process::exit(2);
    });

    let mut file = SourceFile::parse(&source).unwrap_or_else(|e| {
        eprintln!("{}: {}", path, e);
        process::exit(2);
    });

    let mut engine = Engine::with_rules(rules::all_rules(config.indent_width));
    engine.configure(config.rule_settings());

    if matches.get_flag("fix") {
        handle_fix_command(&mut engine, &mut file, path);
    } else {
        handle_check_command(&mut engine, &file, path, format);
    }
}

/// Rewrite the file in place, reporting what was corrected.
fn handle_fix_command(engine: &mut Engine, file: &mut SourceFile, path: &str) {
    let reports = engine.fix(file);
    fs::write(path, file.render()).unwrap_or_else(|e| {
        eprintln!("{}: {}", path, e);
        process::exit(2);
    });
    let fixed: usize = reports.iter().map(|r| r.violations.len()).sum();
    println!("{}: fixed {} violation(s)", path, fixed);
}

/// Report violations without mutating anything.
fn handle_check_command(engine: &mut Engine, file: &SourceFile, path: &str, format: &str) {
    let reports = engine.analyze(file);
    match format {
        "json" => {
            let rendered = serde_json::to_string_pretty(&reports).unwrap_or_else(|e| {
                eprintln!("Report serialization error: {}", e);
                process::exit(2);
            });
            println!("{}", rendered);
        }
        "text" => print_text_report(path, &reports),
        other => {
            eprintln!("Unknown format '{}'; expected text or json", other);
            process::exit(2);
        }
    }
    if reports.iter().any(|r| !r.violations.is_empty()) {
        process::exit(1);
    }
}

fn print_text_report(path: &str, reports: &[RuleReport]) {
    let mut total = 0;
    for report in reports {
        for violation in &report.violations {
            println!(
                "{}:{}: {} [{}] {}",
                path,
                violation.line_number(),
                report.severity,
                report.rule_id,
                report.solution
            );
            total += 1;
        }
    }
    if total == 0 {
        println!("{}: no style violations found", path);
    } else {
        println!("{}: {} violation(s) found", path, total);
    }
}
