// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ScenarioGraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Scenario Graph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Scenario Graph CLI entrypoint.
//!
//! Loads a project file (or the built-in demo), validates it and prints the issue list.
//! Optionally prints the computed layout and writes the export projection.

use std::error::Error;
use std::path::Path;

use scenario_graph::layout::{node_rect, GridConfig};
use scenario_graph::model::Route;
use scenario_graph::store::{load_grid_config, record_schema, ProjectFile, WriteDurability};
use scenario_graph::Project;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <project.json> [--grid-config <path>] [--export <path>] [--layout] [--durable-writes]\n  {program} --demo [--grid-config <path>] [--export <path>] [--layout] [--durable-writes]\n  {program} --schema\n\nValidates the project and prints every issue; exits with status 1 when errors exist.\n--grid-config reads pixel constants from a JSON file (missing fields keep defaults).\n--export writes the labelled export projection to <path>.\n--layout prints the computed position of every node.\n--schema prints the JSON schema of a project file.\n\n--durable-writes opts into slower, best-effort durable persistence (fsync/sync where supported).\nSet RUST_LOG (e.g. RUST_LOG=debug) for diagnostics on stderr."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    project: Option<String>,
    demo: bool,
    schema: bool,
    grid_config: Option<String>,
    export: Option<String>,
    layout: bool,
    durable_writes: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--schema" => {
                if options.schema {
                    return Err(());
                }
                options.schema = true;
            }
            "--grid-config" => {
                if options.grid_config.is_some() {
                    return Err(());
                }
                options.grid_config = Some(args.next().ok_or(())?);
            }
            "--export" => {
                if options.export.is_some() {
                    return Err(());
                }
                options.export = Some(args.next().ok_or(())?);
            }
            "--layout" => {
                if options.layout {
                    return Err(());
                }
                options.layout = true;
            }
            "--durable-writes" => {
                if options.durable_writes {
                    return Err(());
                }
                options.durable_writes = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.project.is_some() {
                    return Err(());
                }
                options.project = Some(arg);
            }
        }
    }

    if options.schema {
        let alone = CliOptions {
            schema: true,
            ..CliOptions::default()
        };
        return if options == alone { Ok(options) } else { Err(()) };
    }

    if options.demo == options.project.is_some() {
        return Err(());
    }

    Ok(options)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn print_layout(project: &Project) {
    let columns = project.columns();
    let rows = project.rows();
    println!(
        "layout: {} x {} px",
        columns.total_width(),
        rows.total_height()
    );
    for (route, row) in rows.iter() {
        println!(
            "  row {route}: y={} height={} branches={}{}",
            row.start_y,
            row.height,
            row.max_branch + 1,
            if row.has_routine { " +routine" } else { "" }
        );
    }
    for node in project.nodes() {
        let rect = node_rect(node, columns, rows);
        let position = node.grid_position();
        println!(
            "  {} {} {} {} branch={} sort={}{} at ({}, {})",
            node.scenario_id(),
            position.day,
            position.time,
            position.route,
            node.branch_index(),
            node.sort_index(),
            if node.is_routine() { " routine" } else { "" },
            rect.x,
            rect.y
        );
    }
}

fn main() {
    let result = (|| -> Result<bool, Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "scenario-graph".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        if options.schema {
            println!("{}", serde_json::to_string_pretty(&record_schema())?);
            return Ok(true);
        }

        init_logging();

        let config = match &options.grid_config {
            Some(path) => load_grid_config(path)?,
            None => GridConfig::default(),
        };
        let durability = if options.durable_writes {
            WriteDurability::Durable
        } else {
            WriteDurability::BestEffort
        };

        let mut project = Project::new(Route::defaults(), config);
        let file = match &options.project {
            Some(path) => {
                let file = ProjectFile::new(path).with_durability(durability);
                project.import_nodes(file.load_nodes()?);
                file
            }
            None => {
                project.load_sample_data();
                ProjectFile::new("demo.json").with_durability(durability)
            }
        };
        info!(nodes = project.nodes().len(), "project loaded");

        let report = project.report();
        for issue in report.issues() {
            let scenario = project
                .node(&issue.node_id)
                .map(|n| n.scenario_id().to_string())
                .unwrap_or_default();
            println!("{} {scenario} ({}): {}", issue.severity, issue.node_id, issue.message);
        }
        println!(
            "{} nodes, {} errors, {} warnings",
            project.nodes().len(),
            report.error_count(),
            report.warning_count()
        );

        if options.layout {
            print_layout(&project);
        }

        if let Some(path) = &options.export {
            file.save_export(Path::new(path), project.nodes())?;
            info!(path = %path, "export written");
        }

        Ok(!report.has_errors())
    })();

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("scenario-graph: {err}");
            std::process::exit(1);
        }
    }
}
