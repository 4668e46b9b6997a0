//! wsdl2openapi CLI
//!
//! Command-line interface for converting WSDL service descriptions into
//! OpenAPI 3.0 specifications.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use std::path::{Path, PathBuf};
use wsdl2openapi_common::ConverterError;
use wsdl2openapi_generator::OpenApiGenerator;
use wsdl2openapi_parser::WsdlParser;

#[derive(Parser)]
#[command(name = "wsdl2openapi")]
#[command(version, about = "Convert WSDL service descriptions to OpenAPI 3.0", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a WSDL document to an OpenAPI specification
    #[command(after_help = "EXAMPLES:\n  \
        # Convert a local WSDL file to JSON on stdout\n  \
        wsdl2openapi convert service.wsdl\n\n  \
        # Convert a remote WSDL to YAML\n  \
        wsdl2openapi convert https://example.com/service?wsdl --format yaml\n\n  \
        # Write the result to a file\n  \
        wsdl2openapi convert service.wsdl --output openapi.json")]
    Convert {
        /// Path or http(s) URL of the WSDL document
        input: String,

        /// Output format
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Parse a WSDL document and display the extracted service descriptor
    #[command(after_help = "EXAMPLES:\n  \
        # Inspect a local WSDL file\n  \
        wsdl2openapi inspect service.wsdl")]
    Inspect {
        /// Path or http(s) URL of the WSDL document
        input: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Block-style YAML
    Yaml,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            format,
            output,
        } => convert_command(&input, format, output.as_deref(), cli.verbose),
        Commands::Inspect { input } => inspect_command(&input, cli.verbose),
    }
}

fn convert_command(
    input: &str,
    format: OutputFormat,
    output: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    let content = load_input(input)?;

    if verbose {
        println!("  Input: {}", input);
        println!("  Size: {} bytes", content.len());
    }

    let descriptor = WsdlParser::from_xml(&content)
        .context("Failed to parse WSDL document")?
        .parse();

    eprintln!(
        "{} Parsed service {} ({} operations, {} types)",
        "✓".green(),
        descriptor.name.yellow(),
        descriptor.operations.len(),
        descriptor.types.len()
    );

    let document = OpenApiGenerator::new(&descriptor).generate();
    let rendered = match format {
        OutputFormat::Json => document.to_json()?,
        OutputFormat::Yaml => document.to_yaml()?,
    };

    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("{} Wrote {}", "✓".green(), path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

fn inspect_command(input: &str, verbose: bool) -> Result<()> {
    let content = load_input(input)?;
    let descriptor = WsdlParser::from_xml(&content)
        .context("Failed to parse WSDL document")?
        .parse();

    println!("{}", "Service Descriptor:".bold());
    println!("  Name: {}", descriptor.name.yellow());
    println!("  Description: {}", descriptor.description);
    if let Some(ns) = &descriptor.target_namespace {
        println!("  Target namespace: {}", ns);
    }
    println!("  Operations: {}", descriptor.operations.len());
    println!("  Types: {}", descriptor.types.len());
    println!("  Bindings: {}", descriptor.bindings.len());
    println!("  Services: {}", descriptor.services.len());

    if verbose {
        println!("\n{}", "Operations:".bold());
        for operation in &descriptor.operations {
            let input_name = operation
                .input
                .as_ref()
                .map(|m| m.name.as_str())
                .unwrap_or("-");
            let output_name = operation
                .output
                .as_ref()
                .map(|m| m.name.as_str())
                .unwrap_or("-");
            println!(
                "  • {} (in: {}, out: {}, faults: {})",
                operation.name.cyan(),
                input_name,
                output_name,
                operation.faults.len()
            );
        }

        println!("\n{}", "Endpoints:".bold());
        for service in &descriptor.services {
            for port in &service.ports {
                let location = if port.location.is_empty() {
                    "-"
                } else {
                    port.location.as_str()
                };
                println!("  • {} → {}", port.name.cyan(), location);
            }
        }
    }

    Ok(())
}

/// Read the WSDL document from a file path or an http(s) URL
///
/// Fetch failures are reported as `ConverterError::Fetch`, keeping them
/// distinguishable from parse errors.
fn load_input(input: &str) -> Result<String> {
    if input.starts_with("http://") || input.starts_with("https://") {
        eprintln!("{} Fetching WSDL from: {}", "→".cyan(), input);

        let response = reqwest::blocking::get(input)
            .map_err(|e| ConverterError::Fetch(e.to_string()))?;
        if !response.status().is_success() {
            return Err(ConverterError::Fetch(format!(
                "{} returned HTTP {}",
                input,
                response.status()
            ))
            .into());
        }

        Ok(response
            .text()
            .map_err(|e| ConverterError::Fetch(e.to_string()))?)
    } else {
        eprintln!("{} Reading WSDL from: {}", "→".cyan(), input);
        std::fs::read_to_string(input)
            .map_err(ConverterError::from)
            .with_context(|| format!("Failed to read {}", input))
    }
}
