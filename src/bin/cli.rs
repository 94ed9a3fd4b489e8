// src/bin/cli.rs
use streamers_edge::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::config::HookBuilder::default()
        .display_location_section(false)
        .display_env_section(false)
        .install()?;
    cli::run()
}
