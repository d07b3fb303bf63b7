// triage: run the alert triage pipeline over a JSON file and print the report.
//
// Usage: triage [FILE] [--severity S] [--service S] [--minutes N]

use std::process::ExitCode;

use triage_core::{parse_alerts, render_report, FilterParams};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(msg) => {
            eprintln!("{}", msg);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<Vec<String>, String> {
    let (path, params) = parse_args(args)?;

    let doc = std::fs::read_to_string(&path).map_err(|e| format!("{}: {}", path, e))?;
    let alerts = parse_alerts(&doc).map_err(|e| e.to_string())?;
    render_report(&alerts, &params).map_err(|e| e.to_string())
}

fn parse_args(args: &[String]) -> Result<(String, FilterParams), String> {
    let mut path = None;
    let mut params = FilterParams::default();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--severity" => {
                params.severity = Some(
                    iter.next()
                        .ok_or("--severity requires a value")?
                        .to_string(),
                );
            }
            "--service" => {
                params.service =
                    Some(iter.next().ok_or("--service requires a value")?.to_string());
            }
            "--minutes" => {
                let raw = iter.next().ok_or("--minutes requires a value")?;
                params.minutes = Some(
                    raw.parse()
                        .map_err(|_| format!("--minutes: not a number: {}", raw))?,
                );
            }
            flag if flag.starts_with("--") => {
                return Err(format!("unknown flag: {}", flag));
            }
            file => {
                if path.replace(file.to_string()).is_some() {
                    return Err("only one input file may be given".to_string());
                }
            }
        }
    }

    Ok((
        path.unwrap_or_else(|| "sample_alerts.json".to_string()),
        params,
    ))
}
