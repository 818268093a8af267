//! Skill ranker: rank postings for a candidate from profile and posting files

use clap::Parser;
use log::{debug, error, info};
use skill_ranker::cli::{self, Cli, Commands, ConfigAction, ScoreAction};
use skill_ranker::config::Config;
use skill_ranker::error::{Result, SkillRankerError};
use skill_ranker::input::InputManager;
use skill_ranker::output::formatter::{save_report_to_file, ReportGenerator};
use skill_ranker::output::RankingReport;
use skill_ranker::processing::performance::PerformanceScorer;
use skill_ranker::processing::trust::TrustScorer;
use skill_ranker::processing::Ranker;
use std::path::Path;
use std::process;
use std::time::Instant;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level)
    ).init();

    // Load configuration
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config, cli.config.as_deref()).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            Config::load_from(path)
        }
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config, config_path: Option<&Path>) -> Result<()> {
    match command {
        Commands::Rank {
            candidate,
            postings,
            output,
            top,
            detailed,
            save,
        } => {
            let output_format = match output {
                Some(format) => cli::parse_output_format(&format)
                    .map_err(SkillRankerError::InvalidInput)?,
                None => config.output.format,
            };

            info!("Ranking postings from {} for {}", postings.display(), candidate.display());

            let mut input_manager = InputManager::new();
            let candidate = input_manager.load_candidate(&candidate).await?;
            let postings = input_manager.load_postings(&postings).await?;

            let start_time = Instant::now();
            let ranker = Ranker::from_config(&config).with_max_results(top.or(config.ranking.max_results));
            let results = ranker.rank(&candidate, &postings);
            let elapsed_ms = start_time.elapsed().as_millis() as u64;

            let report = RankingReport::new(&candidate, postings.len(), results, elapsed_ms);
            let generator = ReportGenerator::with_options(
                config.output.color_output && save.is_none(),
                detailed || config.output.detailed,
                true,
                true,
            );
            let rendered = generator.generate_report(&report, &output_format)?;

            match save {
                Some(path) => {
                    save_report_to_file(&rendered, &path)?;
                    info!("Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Score { action } => match action {
            ScoreAction::Vsps {
                accuracy,
                speed,
                skip_penalty,
            } => {
                let scorer = PerformanceScorer::from_config(&config.scoring);
                println!("{:.3}", scorer.score(accuracy, speed, skip_penalty));
            }
            ScoreAction::Recency { days } => {
                let scorer = TrustScorer::from_config(&config.scoring);
                println!("{:.3}", scorer.normalize_recency(Some(days)));
            }
        },

        Commands::Config { action } => {
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration\n");
                    let content = toml::to_string_pretty(&config).map_err(|e| {
                        SkillRankerError::Configuration(format!("Failed to serialize config: {}", e))
                    })?;
                    println!("{}", content);
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    let default_config = Config::default();
                    match config_path {
                        Some(path) => default_config.save_to(path)?,
                        None => default_config.save()?,
                    }
                    println!("✅ Configuration reset successfully!");
                }

                Some(ConfigAction::Path) => {
                    let path = config_path
                        .map(Path::to_path_buf)
                        .unwrap_or_else(Config::config_path);
                    println!("{}", path.display());
                }
            }
        }
    }

    Ok(())
}
