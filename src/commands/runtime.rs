use crate::cli::{Cli, Commands, DEMO_SAMPLE};
use crate::domain::models::{InspectReport, JsonOut};
use crate::extrema;
use crate::services::input::gather_values;
use crate::services::output::print_one;
use std::collections::HashSet;

pub fn handle_runtime_commands(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        None | Some(Commands::Demo) => {
            let second = extrema::second_largest(&DEMO_SAMPLE);
            print_one(cli.json, second, render_second)?;
        }
        Some(Commands::Find { values, file }) => {
            let sequence = gather_values(values, file.as_deref())?;
            let second = extrema::second_largest(&sequence);
            print_one(cli.json, second, render_second)?;
        }
        Some(Commands::Inspect { values, file }) => {
            let sequence = gather_values(values, file.as_deref())?;
            let extremes = extrema::scan(&sequence);
            let distinct = sequence.iter().collect::<HashSet<_>>().len();
            let report = InspectReport {
                count: sequence.len(),
                distinct,
                largest: extremes.largest,
                second_largest: extremes.second_largest,
            };
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: report
                    })?
                );
            } else {
                println!("count: {}", report.count);
                println!("distinct: {}", report.distinct);
                println!("largest: {}", render_value(report.largest));
                println!("second largest: {}", render_value(report.second_largest));
            }
        }
    }

    Ok(())
}

fn render_second(second: &Option<i32>) -> String {
    match second {
        Some(value) => format!("Second largest element is {}", value),
        None => "No second largest element".to_string(),
    }
}

fn render_value(value: Option<i32>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "n/a".to_string())
}
