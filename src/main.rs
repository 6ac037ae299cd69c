use chrono::Utc;
use std::env;
use std::fs;
use stepflow::prelude::*;

fn main() {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: cargo run -- <path/to/workflow.json> [--layout]");
        std::process::exit(1);
    }

    let workflow_path = &args[1];
    let apply_layout = match args.get(2).map(String::as_str) {
        None => false,
        Some("--layout") => true,
        Some(other) => {
            eprintln!("Unknown option '{}'. Supported options: --layout", other);
            std::process::exit(1);
        }
    };

    println!("Loading workflow from: {}", workflow_path);
    let text = match fs::read_to_string(workflow_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Failed to read workflow file '{}': {}", workflow_path, e);
            std::process::exit(1);
        }
    };

    let mut editor = WorkflowEditor::new();
    if let Err(e) = editor.import_json(&text) {
        eprintln!("Failed to load workflow: {}", e);
        std::process::exit(1);
    }
    println!(
        "Loaded {} steps and {} connections.",
        editor.graph().steps().len(),
        editor.graph().connections().len()
    );

    if apply_layout {
        editor.auto_layout();
        println!("Applied auto layout.");
    }

    // Simulation phase
    println!("\nRunning Simulation...");
    let report = editor.run_simulation().clone();

    if report.errors.is_empty() {
        println!("No structural errors found.");
    } else {
        println!("Structural errors:");
        for error in &report.errors {
            println!("  -> {}", error);
        }
    }

    println!("\nExecution trace:");
    for entry in &report.trace {
        println!("  Step {}: {}", entry.step, entry.message);
    }

    let annotated: Vec<_> = editor
        .graph()
        .steps()
        .iter()
        .filter_map(|step| editor.annotations().get(&step.id).map(|a| (step, a)))
        .collect();
    if !annotated.is_empty() {
        println!("\nStep annotations:");
        for (step, annotation) in annotated {
            println!("  {} [{}]:", step.display_name(), annotation.severity);
            for message in &annotation.messages {
                println!("    - {}", message);
            }
        }
    }

    // Write the laid-out workflow back out
    if apply_layout {
        let now = Utc::now();
        let file_name = editor.export_file_name(now);
        let json = match editor.export_json(now) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Export failed: {}", e);
                std::process::exit(1);
            }
        };
        if let Err(e) = fs::write(&file_name, json) {
            eprintln!("Failed to write '{}': {}", file_name, e);
            std::process::exit(1);
        }
        println!("\nWrote laid-out workflow to '{}'", file_name);
    }
}
