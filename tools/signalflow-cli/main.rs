use clap::{Parser, Subcommand};
use serde::Deserialize;
use signalflow::prelude::*;
use std::fs;
use std::io::{self, Write};

// --- Replay Script Format ---
// A script is a JSON array of steps applied to the canvas in order.

#[derive(Deserialize, Debug)]
#[serde(tag = "action", rename_all = "camelCase")]
enum Step {
    Drop {
        #[serde(rename = "type")]
        node_type: String,
        x: f64,
        y: f64,
    },
    Connect(Connection),
    Move { id: String, x: f64, y: f64 },
    RemoveNode { id: String },
    RemoveEdge { id: String },
    Toggle { id: String },
}

/// Assemble and validate signal flows from the command line
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Start from a snapshot JSON file instead of the example flow
    #[arg(short, long, global = true)]
    snapshot: Option<String>,

    /// Start from an empty canvas
    #[arg(long, global = true, conflicts_with = "snapshot")]
    empty: bool,

    /// Run in interactive mode, typing gestures at a prompt
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List palette entries and their connection rules
    Palette,
    /// Render every node card and list the edges
    Show,
    /// Apply a JSON script of gestures, reporting each outcome
    Replay {
        script_path: String,
        /// Print the resulting snapshot JSON afterwards
        #[arg(long)]
        export: bool,
    },
    /// Print the canvas as snapshot JSON
    Export,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let mut canvas = load_canvas(&cli);

    if cli.human {
        run_interactive(&mut canvas);
        return;
    }

    match cli.command.unwrap_or(Command::Show) {
        Command::Palette => print_palette(),
        Command::Show => print_canvas(&canvas),
        Command::Replay {
            script_path,
            export,
        } => {
            run_replay(&mut canvas, &script_path);
            if export {
                print_snapshot(&canvas);
            }
        }
        Command::Export => print_snapshot(&canvas),
    }
}

fn load_canvas(cli: &Cli) -> Canvas {
    if let Some(path) = &cli.snapshot {
        let json = fs::read_to_string(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to read snapshot file '{}': {}", path, e))
        });
        let snapshot = GraphSnapshot::from_json(&json)
            .unwrap_or_else(|e| exit_with_error(&format!("Invalid snapshot: {}", e)));
        Canvas::from_snapshot(snapshot)
            .unwrap_or_else(|e| exit_with_error(&format!("Invalid snapshot: {}", e)))
    } else {
        Canvas::builder()
            .with_seed_graph(!cli.empty)
            .build()
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to build canvas: {}", e)))
    }
}

fn print_palette() {
    println!("--- Palette ---");
    for entry in palette() {
        let rule = rule_for(entry.drag_payload());
        let connects_to = rule
            .map(|r| {
                r.can_connect_to
                    .iter()
                    .map(|c| c.tag())
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default();
        let max_outgoing = match rule.map(|r| r.max_outgoing) {
            Some(Limit::AtMost(n)) => n.to_string(),
            Some(Limit::Unbounded) | None => "unbounded".to_string(),
        };
        println!(
            "{:<18} {:<18} -> [{}] (max out: {}, inputs: {})",
            entry.label,
            entry.drag_payload(),
            connects_to,
            max_outgoing,
            rule.map(|r| r.required_inputs).unwrap_or(0)
        );
    }
}

fn print_canvas(canvas: &Canvas) {
    println!("--- Nodes ({}) ---", canvas.nodes().len());
    for node in canvas.nodes() {
        println!(
            "\n[{}] {} at ({}, {})",
            node.id, node.node_type, node.position.x, node.position.y
        );
        match canvas.render_node(&node.id) {
            Some(card) => println!("{}", card),
            None => println!("(no renderer for type '{}')", node.node_type),
        }
    }

    println!("\n--- Edges ({}) ---", canvas.edges().len());
    for edge in canvas.edges() {
        println!(
            "{:<28} {}.{} -> {}.{}",
            edge.id, edge.source, edge.source_handle, edge.target, edge.target_handle
        );
    }
}

fn print_snapshot(canvas: &Canvas) {
    let json = canvas
        .snapshot()
        .to_json()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize canvas: {}", e)));
    println!("{}", json);
}

fn run_replay(canvas: &mut Canvas, script_path: &str) {
    let script_json = fs::read_to_string(script_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read script file '{}': {}",
            script_path, e
        ))
    });
    let steps: Vec<Step> = serde_json::from_str(&script_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse script JSON: {}", e)));

    for (i, step) in steps.into_iter().enumerate() {
        println!("{:03}: {}", i, apply_step(canvas, step));
    }
}

fn apply_step(canvas: &mut Canvas, step: Step) -> String {
    match step {
        Step::Drop { node_type, x, y } => {
            match canvas.drop_palette_entry(&node_type, Position::new(x, y)) {
                Some(id) => format!("dropped '{}' as '{}'", node_type, id),
                None => "ignored empty drop".to_string(),
            }
        }
        Step::Connect(connection) => {
            let label = format!("{} -> {}", connection.source, connection.target);
            match canvas.connect(connection) {
                Ok(edge_id) => format!("connected {} as '{}'", label, edge_id),
                Err(e) => format!("rejected {}: {}", label, e),
            }
        }
        Step::Move { id, x, y } => {
            canvas.apply_node_changes(vec![NodeChange::Position {
                id: id.clone(),
                position: Position::new(x, y),
            }]);
            format!("moved '{}'", id)
        }
        Step::RemoveNode { id } => {
            canvas.apply_node_changes(vec![NodeChange::Remove { id: id.clone() }]);
            format!("removed node '{}'", id)
        }
        Step::RemoveEdge { id } => {
            canvas.apply_edge_changes(vec![EdgeChange::Remove { id: id.clone() }]);
            format!("removed edge '{}'", id)
        }
        Step::Toggle { id } => match canvas.toggle_expanded(&id) {
            Some(expanded) => format!("'{}' expanded: {}", id, expanded),
            None => format!("'{}' is not a rate of change node", id),
        },
    }
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive(canvas: &mut Canvas) {
    println!("--- Signal Flow Interactive Mode ---");
    println!("Commands: drop <type> <x> <y> | connect <source> <target> | remove <id>");
    println!("          toggle <id> | show | palette | export | quit");

    loop {
        let line = prompt_for_input("Command");
        let parts: Vec<&str> = line.split_whitespace().collect();
        let outcome = match parts.as_slice() {
            ["quit"] | ["exit"] => break,
            ["show"] => {
                print_canvas(canvas);
                continue;
            }
            ["palette"] => {
                print_palette();
                continue;
            }
            ["export"] => {
                print_snapshot(canvas);
                continue;
            }
            ["drop", node_type, x, y] => match (x.parse(), y.parse()) {
                (Ok(x), Ok(y)) => apply_step(
                    canvas,
                    Step::Drop {
                        node_type: node_type.to_string(),
                        x,
                        y,
                    },
                ),
                _ => "coordinates must be numbers".to_string(),
            },
            ["connect", source, target] => {
                apply_step(canvas, Step::Connect(Connection::new(*source, *target)))
            }
            ["remove", id] => apply_step(canvas, Step::RemoveNode { id: id.to_string() }),
            ["toggle", id] => apply_step(canvas, Step::Toggle { id: id.to_string() }),
            [] => continue,
            _ => "unrecognised command".to_string(),
        };
        println!("  -> {}", outcome);
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str) -> String {
    let mut line = String::new();

    print!("> {}: ", prompt_text);
    if io::stdout().flush().is_err() {
        exit_with_error("Failed to write to the terminal");
    }
    match io::stdin().read_line(&mut line) {
        // End of input ends the session.
        Ok(0) => return "quit".to_string(),
        Ok(_) => {}
        Err(e) => exit_with_error(&format!("Failed to read line: {}", e)),
    }
    line.trim().to_string()
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
