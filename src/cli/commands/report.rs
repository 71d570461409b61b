use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::{Core, reader};
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::BuildRecord;
use crate::ui::messages::{info, warning};
use crate::utils::format_total;
use crate::utils::table::{Column, Table};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let lines = reader::read_lines(&cli.log_file)?;
    let strict = cli.strict || cfg.strict;

    let mut outcome = Core::scan_lines(&lines, strict)?;

    for d in &outcome.dropped {
        warning(format!(
            "Skipping line {}: invalid duration '{}'",
            d.line, d.token
        ));
    }

    if outcome.records.is_empty() {
        println!(
            "No build time information found in {}.",
            cli.log_file.display()
        );
    } else {
        Core::sort_records(&mut outcome.records);

        print!("{}", render_report(&outcome.records, cfg));

        if !outcome.dropped.is_empty() {
            warning(format!(
                "{} timing line(s) skipped because of an invalid duration",
                outcome.dropped.len()
            ));
        }
    }

    // an empty result still produces a file (header only / empty array)
    if let Some(path) = &cli.export {
        ExportLogic::export(&outcome.records, &cli.format, path, cli.force)?;
        info(format!(
            "{} export completed ({} records): {}",
            cli.format.as_str().to_uppercase(),
            outcome.records.len(),
            path.display()
        ));
    }

    Ok(())
}

/// Table of already sorted records followed by the total line.
pub fn render_report(records: &[BuildRecord], cfg: &Config) -> String {
    let mut table = Table::new(
        vec![
            Column::new("Module", cfg.module_width),
            Column::new("Status", cfg.status_width),
            Column::new("Time", 12),
        ],
        cfg.separator(),
    );

    for r in records {
        table.add_row(vec![r.name.clone(), r.status.clone(), r.raw_time.clone()]);
    }

    let mut out = table.render();
    out.push_str(&format_total(Core::total_seconds(records)));
    out.push('\n');
    out
}
