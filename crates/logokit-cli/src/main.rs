//! LogoKit CLI - Command-line interface for resolving logos

use clap::{Parser, Subcommand, ValueEnum};
use logokit::{check_domain, LogoResolver, LogoResult, ResolveOptions, ResolverBuilder};
use std::io::{self, Write};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Output format for resolve subcommand
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    /// URL with YAML frontmatter
    #[default]
    Md,
    /// JSON format
    Json,
}

/// LogoKit - find a logo for a topic or company name
#[derive(Parser, Debug)]
#[command(name = "logokit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve one or more queries to logo URLs
    Resolve {
        /// Queries to resolve, e.g. "Learn Python"
        #[arg(required = true)]
        queries: Vec<String>,

        /// Output format
        #[arg(long, short, default_value = "md")]
        output: OutputFormat,

        /// Probe public icon CDNs before the suggestion service
        #[arg(long)]
        cdn_icons: bool,

        #[command(flatten)]
        http: HttpArgs,
    },
    /// Print raw company suggestions for a query as JSON
    Suggest {
        /// Query to look up
        query: String,

        #[command(flatten)]
        http: HttpArgs,
    },
    /// Check logo and favicon availability for domains
    Check {
        /// Domains to check, e.g. python.org
        #[arg(required = true)]
        domains: Vec<String>,

        #[command(flatten)]
        http: HttpArgs,
    },
}

/// Request settings shared by all subcommands
#[derive(clap::Args, Debug, Clone)]
struct HttpArgs {
    /// Custom User-Agent
    #[arg(long)]
    user_agent: Option<String>,

    /// Suggestion lookup timeout in milliseconds
    #[arg(long)]
    lookup_timeout_ms: Option<u64>,

    /// Existence check timeout in milliseconds
    #[arg(long)]
    check_timeout_ms: Option<u64>,
}

impl HttpArgs {
    fn builder(&self) -> ResolverBuilder {
        let mut builder = LogoResolver::builder();
        if let Some(ref ua) = self.user_agent {
            builder = builder.user_agent(ua.clone());
        }
        if let Some(ms) = self.lookup_timeout_ms {
            builder = builder.lookup_timeout(Duration::from_millis(ms));
        }
        if let Some(ms) = self.check_timeout_ms {
            builder = builder.check_timeout(Duration::from_millis(ms));
        }
        builder
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Resolve {
            queries,
            output,
            cdn_icons,
            http,
        } => {
            let resolver = http.builder().cdn_icons(cdn_icons).build();
            run_resolve(&resolver, &queries, output).await;
        }
        Commands::Suggest { query, http } => {
            run_suggest(&http.builder().build(), &query).await;
        }
        Commands::Check { domains, http } => {
            let resolver = http.builder().build();
            run_check(resolver.options(), &domains).await;
        }
    }
}

/// Log to stderr; RUST_LOG wins over -v
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

async fn run_resolve(resolver: &LogoResolver, queries: &[String], output: OutputFormat) {
    let mut results = Vec::with_capacity(queries.len());
    for query in queries {
        results.push((query.as_str(), resolver.resolve(query).await));
    }

    match output {
        OutputFormat::Md => {
            let blocks: Vec<String> = results
                .iter()
                .map(|(query, result)| format_md_with_frontmatter(query, result))
                .collect();
            writeln_safe(&blocks.join("\n"));
        }
        OutputFormat::Json => {
            let entries: Vec<serde_json::Value> = results
                .iter()
                .map(|(query, result)| result_json(query, result))
                .collect();
            let value = if entries.len() == 1 {
                entries.into_iter().next().unwrap_or_default()
            } else {
                serde_json::Value::Array(entries)
            };
            print_json(&value);
        }
    }
}

async fn run_suggest(resolver: &LogoResolver, query: &str) {
    match resolver.client().suggest(query.trim()).await {
        Ok(suggestions) => print_json(&suggestions),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

async fn run_check(options: &ResolveOptions, domains: &[String]) {
    let mut reports = Vec::with_capacity(domains.len());
    for domain in domains {
        reports.push(check_domain(domain, options).await);
    }
    print_json(&reports);
}

/// Result as JSON, with the input query alongside
fn result_json(query: &str, result: &LogoResult) -> serde_json::Value {
    let mut value = serde_json::to_value(result).unwrap_or_default();
    if let Some(map) = value.as_object_mut() {
        map.insert(
            "input".to_string(),
            serde_json::Value::String(query.to_string()),
        );
    }
    value
}

/// Format a result as the URL with YAML frontmatter
fn format_md_with_frontmatter(query: &str, result: &LogoResult) -> String {
    let mut output = String::new();

    output.push_str("---\n");
    output.push_str(&format!("query: {}\n", query.trim()));
    match result {
        LogoResult::Found(found) => {
            output.push_str("status: found\n");
            output.push_str(&format!("tier: {}\n", found.tier));
            output.push_str(&format!("kind: {}\n", found.kind));
            output.push_str(&format!("matched_query: {}\n", found.query));
            output.push_str("---\n");
            output.push_str(&found.url);
        }
        LogoResult::NotFound => {
            output.push_str("status: not_found\n");
            output.push_str("---");
        }
    }

    output
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
    let json = serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Error serializing output: {}", e);
        std::process::exit(1);
    });
    writeln_safe(&json);
}

/// Write to stdout, exit silently on broken pipe
fn writeln_safe(s: &str) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", s) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
        eprintln!("Error writing to stdout: {}", e);
        std::process::exit(1);
    }
}
