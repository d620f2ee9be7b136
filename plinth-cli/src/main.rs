//! Plinth CLI
//!
//! Arranges a JSON block description under a constraint and reports the
//! resulting size, bounds and content area.

mod args;
mod description;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use owo_colors::OwoColorize;
use plinth_block::{ApproximateSurface, Constraint, Rect, Size};
use serde::Serialize;

use args::{AxisArg, Origin};
use description::BlockDescription;

#[derive(Parser, Debug)]
#[command(name = "plinth")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Arrange a block with no outer constraint
    plinth legend.json

    # Force the width, let the height follow the content
    plinth legend.json --width fixed:200

    # Clamp both axes and print JSON
    plinth legend.json --width range:50..300 --height range:20.. --format json

    # Place the arranged block at (40, 25)
    plinth legend.json --at 40,25

AXIS CONSTRAINTS:
    none            use the natural size
    fixed:V         exactly V
    range:LO..HI    natural size clamped into [LO, HI]
    range:LO..      natural size, at least LO
"#)]
struct Cli {
    /// Path to a JSON block description
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// Parse a JSON block description directly instead of a file
    #[arg(long, value_name = "JSON", conflicts_with = "path")]
    json: Option<String>,

    /// Width constraint
    #[arg(long, value_name = "AXIS", default_value = "none")]
    width: AxisArg,

    /// Height constraint
    #[arg(long, value_name = "AXIS", default_value = "none")]
    height: AxisArg,

    /// Top-left corner of the arranged block
    #[arg(long, value_name = "X,Y", default_value = "0,0")]
    at: Origin,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    id: Option<&'a str>,
    constraint: Constraint,
    size: Size,
    bounds: Rect,
    content_area: Rect,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let source = match (&cli.path, &cli.json) {
        (_, Some(json)) => json.clone(),
        (Some(path), None) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        (None, None) => bail!("no block description given; pass a FILE or --json"),
    };

    let description: BlockDescription =
        serde_json::from_str(&source).context("failed to parse block description")?;
    let mut block = description.build().context("invalid block description")?;

    let constraint = Constraint::new(cli.width.0, cli.height.0)?;
    let size = block
        .arrange(&ApproximateSurface, &constraint)
        .context("failed to arrange block")?;
    let bounds = Rect::from_origin_size(cli.at.x, cli.at.y, size);
    block.set_bounds(bounds);

    let report = Report {
        id: block.id(),
        constraint,
        size,
        bounds,
        content_area: block.content_area(bounds),
    };

    match cli.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        Format::Text => print_report(&report),
    }
    Ok(())
}

fn print_report(report: &Report<'_>) {
    println!("{}", "=== Arranged Block ===".bold());
    if let Some(id) = report.id {
        println!("id:           {}", id.cyan());
    }
    println!("constraint:   {}", report.constraint);
    println!(
        "size:         {}",
        format!("{} x {}", report.size.width, report.size.height).green()
    );
    println!("bounds:       {}", format_rect(&report.bounds));
    println!("content area: {}", format_rect(&report.content_area));
}

fn format_rect(rect: &Rect) -> String {
    format!("({}, {}) {} x {}", rect.x, rect.y, rect.width, rect.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_constraints() {
        let cli = Cli::try_parse_from([
            "plinth",
            "block.json",
            "--width",
            "fixed:200",
            "--height",
            "range:10..",
            "--at",
            "5,6",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.width.0, plinth_block::AxisConstraint::Fixed(200.0));
        assert_eq!(cli.at, Origin { x: 5.0, y: 6.0 });
        assert_eq!(cli.format, Format::Json);
    }

    #[test]
    fn test_cli_rejects_file_and_json_together() {
        let parsed = Cli::try_parse_from(["plinth", "block.json", "--json", "{}"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_format_rect() {
        assert_eq!(
            format_rect(&Rect::new(1.0, 2.5, 30.0, 4.0)),
            "(1, 2.5) 30 x 4"
        );
    }
}
