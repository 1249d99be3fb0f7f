//! Generate a QR code for a shareable link and save it next to the binary
//!
//! Usage: cargo run --example generate_qr

use shareqr::{QrGenerator, ShareqrConfig};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let generator = QrGenerator::new(&ShareqrConfig::default());

    let generated = generator.generate("https://unc.edu/health")?;
    println!("✓ QR code generated and saved to {}", generated.path.display());
    println!("  Encoded: {}", generated.surface.encoded_str());

    // A blocked URL is rejected before anything is rendered
    match generator.generate("https://example.com/patient/42") {
        Ok(_) => println!("unexpected: PHI URL was accepted"),
        Err(err) => println!("✓ Blocked as expected: {err}"),
    }

    Ok(())
}
