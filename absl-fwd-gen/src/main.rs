//! Generator for the `includes/absl` forwarding headers.
//!
//! Each header forwards a short name such as `flat_hash_map.hpp` into the
//! vendored `third-party/abseil-cpp` tree. Run it before building:
//!
//! ```sh
//! cargo run -p absl-fwd-gen
//! ```

use anyhow::Result;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let absl_dir = absl_fwd_gen::output_dir()?;

    let report = absl_fwd_gen::generate(&absl_dir)?;

    println!(
        "Generated {} abseil headers at {} ({} already present)",
        report.created_count(),
        absl_dir.display(),
        report.skipped_count()
    );
    Ok(())
}
