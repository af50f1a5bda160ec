//! OSINTFox CLI
//!
//! Runs the aggregation gateway, or a single search in-process.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use fox_core::{
    is_free_mail, select_services, services_for, Applies, Query, QueryType, Vendor, AUTO_TYPE,
};
use fox_runtime::{build_aggregator, serve, GatewayConfig, MemoryCache};

#[derive(Parser)]
#[command(name = "osintfox")]
#[command(author, version, about = "OSINTFox: OSINT aggregation gateway", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level (0-3)
    #[arg(short, long, default_value = "1")]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP gateway
    Serve {
        /// Listen address, overrides the config file
        #[arg(short, long)]
        bind: Option<String>,

        /// TOML config file
        #[arg(short, long, env = "OSINTFOX_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Run one search and print the result envelope
    Query {
        /// Query type (ip, domain, email, username, phone, hash, password, keyword, origin, auto)
        #[arg(short = 't', long = "type", default_value = AUTO_TYPE)]
        query_type: String,

        /// The value to search for
        #[arg(short, long)]
        query: String,

        /// TOML config file
        #[arg(short, long, env = "OSINTFOX_CONFIG")]
        config: Option<PathBuf>,

        /// Print JSON on a single line
        #[arg(long)]
        compact: bool,
    },

    /// Show which services a query would consult
    Services {
        #[arg(short = 't', long = "type")]
        query_type: String,

        /// Sample value; applies the free-mail branch for e-mail queries
        #[arg(short, long)]
        query: Option<String>,

        /// TOML config file, for the free-mail provider list
        #[arg(short, long, env = "OSINTFOX_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Report which vendor credentials are configured
    Status {
        /// TOML config file
        #[arg(short, long, env = "OSINTFOX_CONFIG")]
        config: Option<PathBuf>,
    },
}

fn init_logging(verbose: u8) {
    let builder = FmtSubscriber::builder()
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .compact();

    if std::env::var_os("RUST_LOG").is_some() {
        builder.with_env_filter(EnvFilter::from_default_env()).init();
    } else {
        let log_level = match verbose {
            0 => Level::ERROR,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        builder.with_max_level(log_level).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Serve { bind, config } => {
            let mut config = GatewayConfig::load(config.as_deref())?;
            if let Some(bind) = bind {
                config.server.bind = bind;
            }
            serve(config).await?;
        }
        Commands::Query {
            query_type,
            query,
            config,
            compact,
        } => {
            run_query(&query_type, &query, config, compact).await?;
        }
        Commands::Services {
            query_type,
            query,
            config,
        } => {
            show_services(&query_type, query.as_deref(), config)?;
        }
        Commands::Status { config } => {
            check_status(config)?;
        }
    }

    Ok(())
}

async fn run_query(
    query_type: &str,
    value: &str,
    config_path: Option<PathBuf>,
    compact: bool,
) -> Result<()> {
    let config = GatewayConfig::load(config_path.as_deref())?;
    let query = Query::from_params([("type", query_type), ("query", value)])?;

    let aggregator = build_aggregator(&config, Arc::new(MemoryCache::new()))?;
    let outcome = aggregator.search(&query).await?;

    let envelope = json!({ "success": true, "results": outcome.results });
    let rendered = if compact {
        serde_json::to_string(&envelope)?
    } else {
        serde_json::to_string_pretty(&envelope)?
    };
    println!("{}", rendered);
    Ok(())
}

fn show_services(query_type: &str, value: Option<&str>, config_path: Option<PathBuf>) -> Result<()> {
    let providers = GatewayConfig::load(config_path.as_deref())?.free_mail_providers;

    let query = value
        .map(|value| Query::from_params([("type", query_type), ("query", value)]))
        .transpose()?;

    let (query_type, specs) = match &query {
        Some(query) => (query.query_type, select_services(query, &providers)),
        None => {
            if query_type.trim().eq_ignore_ascii_case(AUTO_TYPE) {
                bail!("type=auto needs a sample value (-q)");
            }
            let query_type: QueryType = query_type.parse()?;
            (query_type, services_for(query_type).iter().collect())
        }
    };

    println!("🔍 Services for {} queries:\n", query_type);
    for spec in specs {
        let condition = match spec.applies {
            Applies::Always => "",
            Applies::CorporateDomain => "  (corporate domains only)",
            Applies::FreeMailDomain => "  (free-mail domains only)",
        };
        println!(
            "   {:<24} → {:<18} [{}]{}",
            spec.service.name(),
            spec.category.key(),
            spec.service.vendor(),
            condition
        );
    }

    if let Some((domain, kind)) = query.as_ref().and_then(|q| domain_treatment(q, &providers)) {
        println!("\n📧 {} is treated as a {} domain", domain, kind);
    }
    Ok(())
}

/// How an e-mail query's domain is classified; `None` for other types
fn domain_treatment(query: &Query, providers: &[String]) -> Option<(String, &'static str)> {
    let domain = query.email_domain()?;
    let kind = if is_free_mail(&domain, providers) {
        "free-mail"
    } else {
        "corporate"
    };
    Some((domain, kind))
}

fn check_status(config_path: Option<PathBuf>) -> Result<()> {
    let config = GatewayConfig::load(config_path.as_deref())?;

    println!("🔑 Vendor credentials:\n");
    for vendor in Vendor::ALL {
        let status = if config.credentials.key(vendor).is_some() {
            "✅ configured"
        } else {
            "❌ missing"
        };
        println!("   {:<18} {}", vendor.name(), status);
    }

    println!("\n🌐 Bind: {}", config.server.bind);
    match config.cache.ttl() {
        Some(ttl) if config.cache.enabled => println!("🗄️  Cache: in-memory, TTL {}s", ttl.as_secs()),
        None if config.cache.enabled => println!("🗄️  Cache: in-memory, no expiry"),
        _ => println!("🗄️  Cache: disabled"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_treatment_uses_given_providers() {
        let providers = vec!["corp-mail.example".to_string()];
        let query = Query::new(QueryType::Email, "a@corp-mail.example").unwrap();
        assert_eq!(
            domain_treatment(&query, &providers),
            Some(("corp-mail.example".to_string(), "free-mail"))
        );

        let gmail = Query::new(QueryType::Email, "a@gmail.com").unwrap();
        assert_eq!(domain_treatment(&gmail, &providers).unwrap().1, "corporate");
    }

    #[test]
    fn test_domain_treatment_only_for_email() {
        let providers = fox_core::default_free_mail_providers();
        let keyword = Query::new(QueryType::Keyword, "leak@gmail.com").unwrap();
        assert_eq!(domain_treatment(&keyword, &providers), None);
    }

    #[test]
    fn test_cli_parses_services_with_config() {
        let cli = Cli::try_parse_from([
            "osintfox", "services", "-t", "email", "-q", "a@b.io", "-c", "gw.toml",
        ])
        .unwrap();
        match cli.command {
            Commands::Services { config, .. } => {
                assert_eq!(config, Some(PathBuf::from("gw.toml")));
            }
            _ => panic!("expected services"),
        }
    }
}
