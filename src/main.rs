// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! domwalk CLI
//!
//! Parses an HTML file and runs one navigation query against it.

use std::env;
use std::process::ExitCode;

use anyhow::{anyhow, Context};
use tracing::debug;

use domwalk::{
    parse_html_file, Document, Element, ElementExt, ElementSummary, NodeExt, NodeType,
    ParserConfig,
};

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("domwalk=info".parse().expect("static directive")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args: Vec<String> = env::args().collect();
    let json = match args.iter().position(|a| a == "--json") {
        Some(pos) => {
            args.remove(pos);
            true
        }
        None => false,
    };

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let result = match args[1].as_str() {
        "children" => match args.get(2) {
            Some(file) => list_children(file, json),
            None => usage_error("Usage: domwalk children <file>"),
        },
        "find-tag" | "find-all" | "find-id" => match (args.get(2), args.get(3)) {
            (Some(file), Some(query)) => find(&args[1], file, query, json),
            _ => usage_error(&format!("Usage: domwalk {} <file> <query>", args[1])),
        },
        "--help" | "-h" | "help" => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        "--version" | "-v" | "version" => {
            println!("domwalk {}", domwalk::VERSION);
            return ExitCode::SUCCESS;
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            return ExitCode::from(1);
        }
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"domwalk - DOM navigation helpers

USAGE:
    domwalk <COMMAND> <file> [query] [--json]

COMMANDS:
    children <file>         List the document's top-level nodes
    find-tag <file> <tag>   First element with the tag, searched depth-first
    find-all <file> <tag>   Children of the document element with the tag
    find-id <file> <id>     Element with the given id
    help                    Show this help message
    version                 Show version information

Searches start at the document element. --json prints results as JSON.
Set RUST_LOG=domwalk=debug for parser diagnostics.
"#
    );
}

fn usage_error(message: &str) -> anyhow::Result<bool> {
    eprintln!("{}", message);
    Ok(false)
}

fn load(file: &str) -> anyhow::Result<Document> {
    let doc = parse_html_file(file, &ParserConfig::default())
        .with_context(|| format!("failed to load {}", file))?;
    debug!(file, nodes = doc.node_count(), "document loaded");
    Ok(doc)
}

fn list_children(file: &str, json: bool) -> anyhow::Result<bool> {
    let doc = load(file)?;

    let children = doc.child_nodes();
    if json {
        let entries: Vec<serde_json::Value> = children
            .iter()
            .map(|node| {
                serde_json::json!({
                    "node_type": node.node_type().as_u8(),
                    "kind": node.node_type().name(),
                    "name": node.tag_name(),
                    "text": match node.node_type() {
                        NodeType::Comment | NodeType::Text => Some(node.text_content()),
                        _ => None,
                    },
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for (index, node) in children.iter().enumerate() {
            let label = match node.node_type() {
                NodeType::Element => node.tag_name().unwrap_or_default(),
                NodeType::Comment | NodeType::Text => format!("{:?}", node.text_content()),
                _ => String::new(),
            };
            let node_type = node.node_type();
            println!("#{} [{}] {} {}", index, node_type.as_u8(), node_type.name(), label);
        }
    }

    Ok(true)
}

fn find(command: &str, file: &str, query: &str, json: bool) -> anyhow::Result<bool> {
    let doc = load(file)?;
    let root = doc
        .document_element()
        .ok_or_else(|| anyhow!("{} has no document element", file))?;

    let found: Vec<Element> = match command {
        "find-tag" => root.find_element_by_tag_name(query).into_iter().collect(),
        "find-all" => root.find_all_elements_by_tag_name(query),
        _ => root.find_element_by_id(query).into_iter().collect(),
    };

    let summaries: Vec<ElementSummary> = found.iter().map(Element::summary).collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else if summaries.is_empty() {
        eprintln!("No match for {:?}", query);
    } else {
        for summary in &summaries {
            let attrs: Vec<String> = summary
                .attributes
                .iter()
                .map(|(k, v)| format!("{}={:?}", k, v))
                .collect();
            println!(
                "<{}> {} ({} children)",
                summary.tag_name,
                attrs.join(" "),
                summary.child_count
            );
        }
    }

    Ok(!summaries.is_empty())
}
