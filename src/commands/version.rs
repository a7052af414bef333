//! Version command implementation

use crate::error::Result;
use crate::tools::Toolchain;

/// Run version command
pub fn run() -> Result<()> {
    let toolchain = Toolchain::from_env();

    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Profile: {}", build_profile());
    println!();
    println!("External tools:");
    println!("  zip: {}", toolchain.zip);
    println!("  gsutil: {}", toolchain.gsutil);
    println!("  gcloud: {}", toolchain.gcloud);

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
