//! shareqr CLI entrypoint

use clap::Parser;
use serde_json::json;
use shareqr::{
    Error, GeneratedQr, QrDecoder, QrGenerator, Result, SessionState, ShareqrConfig, logging,
    session::QrRequest,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "shareqr",
    version,
    about = "PHI-aware URL-to-QR generator for shareable links"
)]
struct Cli {
    /// URL to encode (omit when using --interactive)
    url: Option<String>,

    /// Optional configuration file (toml/yaml). Defaults to shareqr.{toml,yaml} in cwd/XDG config.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the output directory for exported images
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Override the minimum side length of the rendered surface in pixels
    #[arg(long, value_name = "PX")]
    size: Option<u32>,

    /// Override the error correction level (l, m, q, h)
    #[arg(long, value_name = "LEVEL")]
    ecc: Option<String>,

    /// Validate the URL and report the outcome without rendering anything
    #[arg(long)]
    check: bool,

    /// Decode the written image and confirm it scans back to the encoded URL
    #[arg(long)]
    verify: bool,

    /// Output results as formatted JSON instead of human-readable text
    #[arg(long)]
    json: bool,

    /// Read URLs from stdin in a prompt loop (':new' resets, ':quit' exits)
    #[arg(long)]
    interactive: bool,
}

struct OutputSinks {
    json: bool,
}

impl OutputSinks {
    fn new(json: bool) -> Self {
        Self { json }
    }

    fn emit_generated(&self, generated: &GeneratedQr, verified: bool) -> Result<()> {
        if self.json {
            let payload = json!({
                "url": generated.surface.encoded_str(),
                "stem": generated.stem,
                "path": generated.path,
                "side_px": generated.surface.side(),
                "verified": verified,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        } else {
            println!("QR code written to {}", generated.path.display());
            println!("  Encoded: {}", generated.surface.encoded_str());
            println!(
                "  Surface: {s}x{s} px",
                s = generated.surface.side()
            );
            if verified {
                println!("  Verified: image scans back to the encoded URL");
            }
        }
        Ok(())
    }

    fn emit_valid(&self, url: &str) -> Result<()> {
        if self.json {
            let payload = json!({ "url": url, "valid": true });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        } else {
            println!("URL is valid and contains no blocked tokens.");
        }
        Ok(())
    }

    fn emit_error(&self, message: &str) -> Result<()> {
        if self.json {
            let payload = json!({ "error": message });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        } else {
            println!("{message}");
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ShareqrConfig::load(cli.config.as_deref())?;

    if let Some(ref dir) = cli.out {
        config.output.dir = dir.clone();
    }

    if let Some(size) = cli.size {
        config.render.size = size.max(1);
    }

    if let Some(ref ecc) = cli.ecc {
        config.render.ecc = ecc.parse().map_err(Error::Config)?;
    }

    logging::init(&config.logging)?;

    let generator = QrGenerator::new(&config);
    let sinks = OutputSinks::new(cli.json);

    if cli.interactive {
        return run_interactive(&generator, &sinks, cli.verify);
    }

    let url = match cli.url {
        Some(ref url) => url.clone(),
        None => {
            return Err(Error::Config(
                "A URL argument is required unless --interactive is set".to_string(),
            ));
        }
    };

    if cli.check {
        return handle_check(&url, &sinks);
    }

    handle_generate(&generator, &url, &sinks, cli.verify)
}

fn handle_check(url: &str, sinks: &OutputSinks) -> Result<()> {
    match shareqr::validate(url) {
        Ok(valid) => sinks.emit_valid(valid.as_str()),
        Err(err) => {
            sinks.emit_error(&err.to_string())?;
            std::process::exit(1);
        }
    }
}

fn handle_generate(
    generator: &QrGenerator,
    url: &str,
    sinks: &OutputSinks,
    verify: bool,
) -> Result<()> {
    match generate_one(generator, url, verify) {
        Ok(generated) => sinks.emit_generated(&generated, verify),
        Err(err) => {
            sinks.emit_error(&err.to_string())?;
            std::process::exit(1);
        }
    }
}

/// Run the full pipeline for one URL, optionally re-reading the written file
/// to confirm it scans back to the encoded string.
fn generate_one(generator: &QrGenerator, url: &str, verify: bool) -> Result<GeneratedQr> {
    let generated = generator.generate(url)?;

    if verify {
        let written = image::open(&generated.path)?;
        QrDecoder::new().verify(&written, generated.surface.encoded_str())?;
        info!(path = %generated.path.display(), "Verified exported QR image");
    }

    Ok(generated)
}

fn run_interactive(generator: &QrGenerator, sinks: &OutputSinks, verify: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut request = QrRequest::new();

    println!("Enter a URL to generate a QR code (':new' to reset, ':quit' to exit).");
    println!(
        "Please do not include any personal identifiers (e.g. name, DOB, email, patient ID) in the URL."
    );

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let input = line.trim();
        match input {
            ":quit" | ":q" => break,
            ":new" => {
                request.reset();
                println!("Ready for a new QR code.");
                continue;
            }
            _ => {}
        }

        request.edit(input);
        match request.submit() {
            SessionState::Idle => continue,
            SessionState::Invalid | SessionState::PhiFlagged => {
                if let Some(message) = request.last_error() {
                    sinks.emit_error(message)?;
                }
            }
            SessionState::Displayed => {
                if let Some(url) = request.rendered_url() {
                    match generate_one(generator, url.as_str(), verify) {
                        Ok(generated) => sinks.emit_generated(&generated, verify)?,
                        Err(err) => sinks.emit_error(&err.to_string())?,
                    }
                }
            }
        }
    }

    Ok(())
}
