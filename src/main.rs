use chart2svg::{parse_chart, render_to_string, ChartError, Layout};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

fn print_help() {
    println!("chart2svg - Render a JSON chart configuration as SVG");
    println!();
    println!("Usage: chart2svg [OPTIONS] [CONFIG]");
    println!();
    println!("Reads the chart configuration from CONFIG or stdin and writes the chart to stdout.");
    println!();
    println!("Options:");
    println!("  -h, --help              Show this help message");
    println!("  -o, --output PATH       Write the chart to PATH");
    println!("  -d, --export-dir DIR    Write the chart to DIR/<hex timestamp>.svg (.html for composite)");
    println!();
    println!("Example:");
    println!("  chart2svg chart.json > chart.svg");
    println!("  cat chart.json | chart2svg -d out/");
}

/// Where the rendered chart goes
enum Target {
    Stdout,
    File(PathBuf),
    ExportDir(PathBuf),
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_help();
        return;
    }

    let mut target = Target::Stdout;
    let mut config_path = None;
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-o" | "--output" | "-d" | "--export-dir" => {
                let Some(value) = iter.next() else {
                    eprintln!("Error: {} needs a value", arg);
                    std::process::exit(1);
                };
                target = if arg == "-o" || arg == "--output" {
                    Target::File(PathBuf::from(value))
                } else {
                    Target::ExportDir(PathBuf::from(value))
                };
            }
            _ => config_path = Some(PathBuf::from(arg)),
        }
    }

    if let Err(e) = run(config_path, target) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config_path: Option<PathBuf>, target: Target) -> Result<(), ChartError> {
    let input = match config_path {
        Some(path) => fs::read_to_string(path).map_err(ChartError::InputRead)?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(ChartError::InputRead)?;
            buf
        }
    };

    let chart = parse_chart(&input)?;
    let output = render_to_string(&chart)?;

    match target {
        Target::Stdout => println!("{}", output),
        Target::File(path) => fs::write(path, output)?,
        Target::ExportDir(dir) => {
            let path = dir.join(export_file_name(chart.layout()));
            fs::write(&path, output)?;
            println!("{}", path.display());
        }
    }
    Ok(())
}

/// Hex unix timestamp named file, `.html` for composite documents
fn export_file_name(layout: Layout) -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let extension = match layout {
        Layout::Minimal => "svg",
        Layout::Composite => "html",
    };
    format!("{:x}.{}", secs, extension)
}
