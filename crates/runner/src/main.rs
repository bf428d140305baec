use ladder_runner::{Scenario, ScenarioRunner};
use log::info;

fn print_help() {
    eprintln!(
        r#"Ladder Runner - replay take-profit ladder scenarios

USAGE:
    ladder-runner [OPTIONS] <SCENARIO>

ARGS:
    <SCENARIO>          JSON scenario file (context, config, actions)

OPTIONS:
    --compact           Print the report as single-line JSON
    --help              Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG            Log level filter (default: info)

EXAMPLES:
    ladder-runner scenario.json
    RUST_LOG=debug ladder-runner --compact scenario.json
"#
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut scenario_path: Option<String> = None;
    let mut compact = false;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--compact" => compact = true,
            flag if flag.starts_with('-') => {
                eprintln!("Unknown argument: {}", flag);
                print_help();
                std::process::exit(1);
            }
            path => {
                if scenario_path.replace(path.to_string()).is_some() {
                    eprintln!("Error: only one scenario file may be given");
                    std::process::exit(1);
                }
            }
        }
    }

    let Some(path) = scenario_path else {
        print_help();
        std::process::exit(1);
    };

    info!("Loading scenario from: {}", path);
    let scenario = Scenario::from_file(&path)?;
    info!("Actions: {}", scenario.actions.len());

    let report = ScenarioRunner::run(&scenario)?;

    let output = if compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    println!("{}", output);

    Ok(())
}
