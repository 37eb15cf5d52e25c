use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use textsum_client::{FormController, HttpTransport, NoticeKind};
use textsum_common::{logger, AppConfig, SummaryFormat, SummaryLength, SummaryTone};

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    match find_project_root().map(|root| root.join(".env")) {
        Some(env_path) if env_path.exists() => {
            dotenv::from_path(&env_path).ok();
        }
        _ => {
            dotenv::dotenv().ok();
        }
    }
}

#[derive(Parser)]
#[command(name = "textsum")]
#[command(about = "textsum - AI text summarization proxy", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,
    },

    /// Summarize a file (or stdin) through a running server
    Summarize {
        /// Server base URL
        #[arg(long, default_value = "http://127.0.0.1:8080")]
        server: String,

        /// Target length: concise, balanced or detailed
        #[arg(long, default_value = "concise")]
        length: SummaryLength,

        /// Layout: paragraph, bullets, numbered or outline
        #[arg(long, default_value = "paragraph")]
        format: SummaryFormat,

        /// Register: casual, professional or academic
        #[arg(long, default_value = "professional")]
        tone: SummaryTone,

        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
    },
}

#[actix_web::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    load_dotenv_from_project_root();

    match cli.command {
        Some(Commands::Serve { host, port }) => {
            let mut config = AppConfig::from_env()?;
            if let Some(host) = host {
                config.server_host = host;
            }
            if let Some(port) = port {
                config.server_port = port;
            }
            config.validate()?;
            serve(config).await?;
        }
        Some(Commands::Summarize {
            server,
            length,
            format,
            tone,
            file,
        }) => {
            let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
            logger::setup_console_logging(&log_level)?;

            let text = read_input(file.as_ref())?;
            summarize(&server, text, length, format, tone).await?;
        }
        None => {
            // Default: start server with environment configuration
            let config = AppConfig::from_env()?;
            serve(config).await?;
        }
    }

    Ok(())
}

async fn serve(config: AppConfig) -> Result<()> {
    logger::setup_logging(&config.log_dir, &config.log_level)?;

    tracing::info!("textsum starting...");
    tracing::info!("  Bind: {}", config.server_bind_address());
    tracing::info!("  Model: {}", config.ai_model);
    if !config.is_inference_configured() {
        tracing::warn!("Cloudflare credentials or gateway id missing; summary requests will fail");
    }

    println!("Server listening on http://{}", config.server_bind_address());

    textsum_server::start_server(config).await?;
    Ok(())
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

async fn summarize(
    server: &str,
    text: String,
    length: SummaryLength,
    format: SummaryFormat,
    tone: SummaryTone,
) -> Result<()> {
    let mut form = FormController::new(HttpTransport::new(server)?);
    form.set_text(text);
    form.set_length(length);
    form.set_format(format);
    form.set_tone(tone);

    let notice = form.submit().await;
    if form.last_outcome().is_some() {
        println!("{}", form.summary());
    }
    eprintln!("{}: {}", notice.title, notice.description);

    if notice.kind == NoticeKind::Destructive {
        anyhow::bail!("{}", notice.title);
    }

    eprintln!(
        "Text length: {} words, summary length: {} words",
        form.input_word_count(),
        form.summary_word_count()
    );

    Ok(())
}
