//! CLI command implementations

use std::fmt::Write as _;

use clap::Subcommand;
use marquee_core::catalog::{CatalogEntry, TypeFilter};
use marquee_core::config::{MarqueeConfig, SearchDefaults};
use marquee_core::screen::ScreenView;
use marquee_core::{Result, spawn_search_screen};

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,
        /// Catalog API key (overrides MARQUEE_OMDB_API_KEY)
        #[arg(long)]
        api_key: Option<String>,
    },
    /// Search the catalog once and print the results
    Search {
        /// Title to search for
        text: String,
        /// Restrict results to one type
        #[arg(short = 't', long = "type", default_value = "all")]
        filter: TypeFilter,
        /// Catalog API key (overrides MARQUEE_OMDB_API_KEY)
        #[arg(long)]
        api_key: Option<String>,
    },
}

/// Handle the CLI command
///
/// # Errors
/// Returns appropriate error based on the command that fails
pub async fn handle_command(command: Commands) -> Result<()> {
    let mut config = MarqueeConfig::from_env();

    match command {
        Commands::Serve {
            host,
            port,
            api_key,
        } => {
            apply_overrides(&mut config, host, port, api_key);
            serve(config).await
        }
        Commands::Search {
            text,
            filter,
            api_key,
        } => {
            apply_overrides(&mut config, None, None, api_key);
            search(config, text, filter).await
        }
    }
}

/// Command-line flags take precedence over the environment.
fn apply_overrides(
    config: &mut MarqueeConfig,
    host: Option<String>,
    port: Option<u16>,
    api_key: Option<String>,
) {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(api_key) = api_key {
        config.catalog.api_key = Some(api_key);
    }
}

/// Run the browser search UI
///
/// # Errors
/// - `MarqueeError::Catalog` - Missing API key or invalid catalog URL
/// - `MarqueeError::Io` - Failed to bind the listener
pub async fn serve(config: MarqueeConfig) -> Result<()> {
    let catalog = marquee_search::catalog_from_config(&config.catalog)?;
    marquee_web::run_server(config, catalog).await
}

/// Search once through a search screen and print the settled view
///
/// # Errors
/// - `MarqueeError::Catalog` - Missing API key or invalid catalog URL
/// - `MarqueeError::Screen` - The screen stopped before settling
pub async fn search(config: MarqueeConfig, text: String, filter: TypeFilter) -> Result<()> {
    let catalog = marquee_search::catalog_from_config(&config.catalog)?;
    tracing::info!("Searching {} for '{}' ({})", catalog.name(), text, filter);

    let defaults = SearchDefaults {
        default_query: text,
        default_filter: filter,
    };

    let screen = spawn_search_screen(catalog, &defaults);
    let snapshot = screen.settled().await?;
    let _ = screen.shutdown().await;

    print!("{}", render_view(&snapshot.view));
    Ok(())
}

/// Renders a settled view as plain text cards.
fn render_view(view: &ScreenView) -> String {
    match view {
        ScreenView::Loading => "Searching...\n".to_string(),
        ScreenView::Success(entries) if entries.is_empty() => "No results.\n".to_string(),
        ScreenView::Success(entries) => {
            let mut out = String::new();
            for entry in entries {
                out.push_str(&text_card(entry));
            }
            let _ = writeln!(out, "{} results", entries.len());
            out
        }
        ScreenView::Failure(message) => format!("Search failed: {message}\n"),
    }
}

fn text_card(entry: &CatalogEntry) -> String {
    format!(
        "{} ({}) [{}]\n  id:     {}\n  poster: {}\n\n",
        entry.title, entry.year, entry.kind, entry.id, entry.poster_url
    )
}

#[cfg(test)]
mod tests {
    use marquee_core::catalog::sample_entries;

    use super::*;

    #[test]
    fn test_flags_override_environment_config() {
        let mut config = MarqueeConfig::default();
        config.catalog.api_key = Some("from-env".to_string());

        apply_overrides(
            &mut config,
            Some("0.0.0.0".to_string()),
            Some(8080),
            Some("from-flag".to_string()),
        );

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.catalog.api_key.as_deref(), Some("from-flag"));
    }

    #[test]
    fn test_missing_flags_keep_config() {
        let mut config = MarqueeConfig::default();
        apply_overrides(&mut config, None, None, None);

        assert_eq!(config.server.port, 3000);
        assert!(config.catalog.api_key.is_none());
    }

    #[test]
    fn test_render_results_as_text_cards() {
        let text = render_view(&ScreenView::Success(sample_entries("panda", 2)));

        assert!(text.contains("panda 0 (2000) [movie]"));
        assert!(text.contains("poster: https://img.example.com/panda-1.jpg"));
        assert!(text.ends_with("2 results\n"));
    }

    #[test]
    fn test_render_empty_and_failure() {
        assert_eq!(render_view(&ScreenView::Success(Vec::new())), "No results.\n");
        assert_eq!(
            render_view(&ScreenView::Failure("catalog down".to_string())),
            "Search failed: catalog down\n"
        );
    }

    #[tokio::test]
    async fn test_search_without_api_key_is_user_error() {
        let mut config = MarqueeConfig::for_testing();
        config.catalog.api_key = None;

        let error = search(config, "panda".to_string(), TypeFilter::All)
            .await
            .unwrap_err();

        assert!(error.is_user_error());
    }
}
