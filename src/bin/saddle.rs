//! Saddle Point Binary
//!
//! Analyzes catalog games or a matrix supplied as JSON.

fn main() -> anyhow::Result<()> {
    saddlepoint::cli::CLI::run()
}
