//! Show-config command - print the effective configuration

use crate::cli::output::print_output;
use crate::cli::OutputFormat;
use crate::core::config::SearchConfig;
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the show-config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also show resolved XDG paths
    #[arg(long, short = 'p')]
    pub paths: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub data_dir: String,
    pub search: SearchConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<PathsResponse>,
}

#[derive(Debug, Serialize)]
pub struct PathsResponse {
    pub config_file: String,
    pub xdg_data_dir: String,
}

/// Execute the show-config command
pub async fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = &services.config;

    let paths = args.paths.then(|| {
        let xdg = XdgDirs::new();
        PathsResponse {
            config_file: xdg.config_file().to_string_lossy().into_owned(),
            xdg_data_dir: xdg.data_dir.to_string_lossy().into_owned(),
        }
    });

    let response = ConfigResponse {
        data_dir: config.data.dir.to_string_lossy().into_owned(),
        search: config.search.clone(),
        paths,
    };

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  data_dir: {}", response.data_dir);
            println!("  search:");
            println!(
                "    default_max_results: {}",
                response.search.default_max_results
            );
            println!("    max_results: {}", response.search.max_results);
            println!(
                "    max_keyword_length: {}",
                response.search.max_keyword_length
            );
            println!(
                "    max_filter_length: {}",
                response.search.max_filter_length
            );
            if let Some(paths) = &response.paths {
                println!("  paths:");
                println!("    config_file: {}", paths.config_file);
                println!("    xdg_data_dir: {}", paths.xdg_data_dir);
            }
        }
        OutputFormat::Json => print_output(&response, format),
    }

    Ok(())
}
