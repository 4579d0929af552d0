//! Starsmith - command-line star system generator.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use starsmith_engine::infrastructure::settings::EngineSettings;
use starsmith_engine::use_cases::SystemInput;
use starsmith_engine::App;

#[derive(Parser, Debug)]
#[command(name = "starsmith")]
#[command(about = "Generate a star system around a primary world and print it as JSON")]
struct Args {
    /// Star system id (a fresh UUID if not specified)
    #[arg(long)]
    system_id: Option<String>,

    /// Primary world id (a fresh UUID if not specified)
    #[arg(long)]
    world_id: Option<String>,

    /// Primary world name
    #[arg(long)]
    world_name: String,

    /// Tech level of the primary world (0-20)
    #[arg(short, long)]
    tech_level: i64,

    /// Random seed (overrides STARSMITH_SEED; random if neither is set)
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Logs go to stderr so stdout stays clean JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "starsmith_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut settings = EngineSettings::from_env()?;
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    tracing::info!(
        seed = ?settings.seed,
        orbit_slots = settings.orbit_slots,
        "Starting Starsmith"
    );

    let app = App::new(settings);
    let system = app.use_cases.system.execute(SystemInput {
        star_system_id: args
            .system_id
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
        world_id: args
            .world_id
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
        world_name: args.world_name,
        tech_level: args.tech_level,
    })?;

    println!("{}", serde_json::to_string_pretty(&system)?);
    Ok(())
}

/// Load `.env.local` then `.env` from the repository root, if present.
fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
