//! # Printslip CLI
//!
//! Command-line interface for rendering and printing receipts.
//!
//! ## Usage
//!
//! ```bash
//! # List available receipts
//! printslip print
//!
//! # Render a receipt to PNG
//! printslip print --png slip.png sales-slip
//!
//! # Render on wide paper with a TrueType font and a logo
//! printslip print --paper large --font DejaVuSans.ttf --logo logo.png --png slip.png sales-slip
//!
//! # Submit to a print service
//! printslip print --service http://127.0.0.1:8080 print-test
//!
//! # Print once per line on stdin, debounced
//! printslip trigger --config printslip.json print-test
//! ```

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use image::RgbaImage;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use printslip::{
    PaperWidth, PrintslipError, Receipt,
    font::{FontMetrics, SpleenFont, TtfFont},
    receipt,
    transport::{ClientConfig, HttpPrintService, PrintClient},
    trigger::TriggerGuard,
};

/// Printslip - Receipt raster layout and printing
#[derive(Parser, Debug)]
#[command(name = "printslip")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a receipt and save or print it
    Print {
        /// Receipt to print (omit to see available options)
        name: Option<String>,

        /// List available receipts
        #[arg(long)]
        list: bool,

        /// Output to PNG file instead of printing
        #[arg(long, value_name = "FILE")]
        png: Option<PathBuf>,

        #[command(flatten)]
        render: RenderArgs,

        #[command(flatten)]
        client: ClientArgs,
    },
    /// Print a receipt for every line read from stdin, debounced
    Trigger {
        /// Receipt to print on each trigger
        #[arg(default_value = "print-test")]
        name: String,

        /// Minimum interval between prints in milliseconds (overrides config)
        #[arg(long)]
        debounce_ms: Option<u64>,

        #[command(flatten)]
        render: RenderArgs,

        #[command(flatten)]
        client: ClientArgs,
    },
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Paper width: normal (384) or large (576)
    #[arg(long, value_parser = PaperWidth::parse)]
    paper: Option<PaperWidth>,

    /// Device model; models containing CPOS use large paper
    #[arg(long)]
    device_model: Option<String>,

    /// TrueType font file (defaults to the built-in bitmap font)
    #[arg(long, value_name = "FILE")]
    font: Option<PathBuf>,

    /// TrueType font file for bold text
    #[arg(long, value_name = "FILE", requires = "font")]
    bold_font: Option<PathBuf>,

    /// Logo image drawn at the top of receipts that have one
    #[arg(long, value_name = "FILE")]
    logo: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ClientArgs {
    /// Print service base URL (overrides config)
    #[arg(long)]
    service: Option<String>,

    /// Client configuration file (JSON)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), PrintslipError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Print {
            name,
            list,
            png,
            render,
            client,
        } => {
            let Some(name) = name.filter(|_| !list) else {
                println!("Available receipts:");
                for name in receipt::list_receipts() {
                    println!("  {}", name);
                }
                return Ok(());
            };

            let config = load_config(&client)?;
            let rendered = render_receipt(&name, &render, &config)?;

            if let Some(png_path) = png {
                rendered.save_png(&png_path)?;
                println!(
                    "Saved {}x{} receipt to {}",
                    rendered.width(),
                    rendered.height(),
                    png_path.display()
                );
                return Ok(());
            }

            let encoded = rendered.to_base64()?;
            let mut print_client = PrintClient::new(HttpPrintService::new(&config.service_url)?, config.retry);
            print_client.connect().await?;

            println!("Printing {} receipt...", name);
            let accepted = print_client.submit(&encoded).await;
            print_client.disconnect().await;
            if !accepted {
                return Err(PrintslipError::Transport(
                    "print service did not accept the receipt".to_string(),
                ));
            }
            println!("Printed successfully!");
        }
        Commands::Trigger {
            name,
            debounce_ms,
            render,
            client,
        } => {
            let config = load_config(&client)?;
            if !receipt::is_receipt(&name) {
                return Err(unknown_receipt(&name));
            }

            let debounce = debounce_ms
                .map(std::time::Duration::from_millis)
                .unwrap_or_else(|| config.debounce());
            let mut guard = TriggerGuard::new(debounce);
            let mut print_client = PrintClient::new(HttpPrintService::new(&config.service_url)?, config.retry);
            if let Err(e) = print_client.connect().await {
                warn!(error = %e, "starting without a print service connection");
            }

            info!(receipt = %name, debounce_ms = debounce.as_millis() as u64, "waiting for triggers on stdin");
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while lines.next_line().await?.is_some() {
                if !guard.try_fire() {
                    continue;
                }
                let encoded = render_receipt(&name, &render, &config)?.to_base64()?;
                if print_client.submit(&encoded).await {
                    println!("Printed successfully!");
                } else {
                    println!("Print failed");
                }
            }
            print_client.disconnect().await;
        }
    }

    Ok(())
}

fn load_config(args: &ClientArgs) -> Result<ClientConfig, PrintslipError> {
    let mut config = match &args.config {
        Some(path) => ClientConfig::from_file(path)?,
        None => ClientConfig::default(),
    };
    if let Some(url) = &args.service {
        config.service_url = url.clone();
    }
    Ok(config)
}

/// `--paper` wins, then `--device-model`, then the configured device model.
fn resolve_paper(args: &RenderArgs, config: &ClientConfig) -> PaperWidth {
    args.paper.unwrap_or_else(|| match &args.device_model {
        Some(model) => PaperWidth::from_device_model(model),
        None => config.paper(),
    })
}

fn load_font(args: &RenderArgs) -> Result<Box<dyn FontMetrics>, PrintslipError> {
    let Some(path) = &args.font else {
        return Ok(Box::new(SpleenFont));
    };
    let mut font = TtfFont::from_path(path)?;
    if let Some(bold) = &args.bold_font {
        font = font.with_bold_path(bold)?;
    }
    Ok(Box::new(font))
}

fn load_logo(path: &Path) -> Result<RgbaImage, PrintslipError> {
    image::open(path)
        .map(|img| img.to_rgba8())
        .map_err(|e| PrintslipError::Image(format!("Failed to load {}: {}", path.display(), e)))
}

fn render_receipt(name: &str, args: &RenderArgs, config: &ClientConfig) -> Result<Receipt, PrintslipError> {
    let paper = resolve_paper(args, config);
    let font = load_font(args)?;
    let logo = args.logo.as_deref().map(load_logo).transpose()?;

    receipt::by_name(name, paper, font, logo.as_ref()).ok_or_else(|| unknown_receipt(name))
}

fn unknown_receipt(name: &str) -> PrintslipError {
    PrintslipError::Config(format!(
        "Unknown receipt '{}'. Run without arguments to see available options.",
        name
    ))
}
