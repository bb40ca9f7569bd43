use crate::*;

pub fn handle_runtime_commands(cli: &Cli, config: &ConfigFile) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Scan {
            input,
            output,
            on_malformed,
        } => {
            let mode = resolve_on_malformed(*on_malformed, config);
            let report = scan_file(input, mode)?;
            let lines: Vec<String> = report
                .entries
                .iter()
                .filter_map(|e| e.line.clone())
                .collect();
            if let Some(path) = output {
                write_output_file(path, &lines)?;
            }
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: report
                    })?
                );
            } else {
                for entry in &report.entries {
                    if let Some(reason) = &entry.reason {
                        eprintln!("entry {}: {}", entry.index, reason);
                    }
                }
                match output {
                    Some(path) => println!(
                        "wrote {} of {} entries to {}",
                        lines.len(),
                        report.scanned,
                        path
                    ),
                    None => {
                        for line in &lines {
                            println!("{}", line);
                        }
                    }
                }
            }
        }
        Commands::Decode {
            top,
            middle,
            bottom,
        } => {
            let rows = vec![top.clone(), middle.clone(), bottom.clone()];
            let number = ocr::decode_entry(&rows)?;
            let report = DecodeReport {
                digits: number.digits().to_string(),
                status: number.status().to_string(),
                line: number.output_line(),
            };
            print_one(cli.json, report, |r| r.line.clone())?;
        }
        Commands::Check { digits } => {
            if digits.is_empty()
                || !digits
                    .chars()
                    .all(|c| c.is_ascii_digit() || c == ocr::ILLEGIBLE)
            {
                anyhow::bail!(
                    "digits must contain only 0-9 or '{}': {}",
                    ocr::ILLEGIBLE,
                    digits
                );
            }
            let number = ocr::PolicyNumber::new(digits.clone());
            let report = CheckReport {
                digits: digits.clone(),
                valid_checksum: number.valid_checksum(),
                status: number.status().to_string(),
                line: number.output_line(),
            };
            print_one(cli.json, report, |r| r.line.clone())?;
        }
        Commands::Validate { input } => {
            let entries = validate_file(input)?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: entries
                    })?
                );
            } else {
                println!("input valid ({} entries)", entries);
            }
        }
    }

    Ok(())
}
