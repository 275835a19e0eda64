use std::num::NonZeroUsize;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::game::QUESTIONS_PER_GAME;
use quiz_core::model::{Difficulty, Region};
use services::{
    API_KEY_VAR, ChatQuestionSource, GameLoopService, QuestionSupplier, SupplyRequest,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const LOG_ENV: &str = "QUIZ_LOG";

/// Sauce Chef Quiz - guess the dish, keep the chef out of the sauce
#[derive(Parser, Debug)]
#[command(name = "sauce-chef")]
#[command(about = "Culinary geography quiz", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the desktop game (default)
    Ui,
    /// Supply one batch of questions and print it as JSON
    Preview {
        /// easy, medium or hard
        #[arg(long, default_value_t = Difficulty::Medium)]
        difficulty: Difficulty,

        /// Afrique, Europe, Asie, Amériques, Océanie or Monde
        #[arg(long, default_value_t = Region::World)]
        region: Region,

        #[arg(long, default_value_t = default_count())]
        count: NonZeroUsize,
    },
}

fn default_count() -> NonZeroUsize {
    NonZeroUsize::new(QUESTIONS_PER_GAME).unwrap_or(NonZeroUsize::MIN)
}

struct DesktopApp {
    game_loop: Arc<GameLoopService>,
}

impl UiApp for DesktopApp {
    fn game_loop(&self) -> Arc<GameLoopService> {
        Arc::clone(&self.game_loop)
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Generated questions get their options shuffled so the answer is not always
/// listed first.
fn build_supplier() -> Result<QuestionSupplier, Box<dyn std::error::Error>> {
    let source = ChatQuestionSource::from_env()?;
    if source.enabled() {
        info!("question generator enabled");
    } else {
        warn!("{API_KEY_VAR} is not set; serving the built-in questions");
    }
    Ok(QuestionSupplier::new(Arc::new(source)).with_shuffle_options(true))
}

async fn preview(
    supplier: &QuestionSupplier,
    difficulty: Difficulty,
    region: Region,
    count: NonZeroUsize,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = SupplyRequest::new(count, difficulty, Some(region));
    let questions = supplier.supply(&request).await;
    println!("{}", serde_json::to_string_pretty(questions.as_slice())?);
    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging();

    let supplier = build_supplier()?;

    match cli.command.unwrap_or(Command::Ui) {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                game_loop: Arc::new(GameLoopService::new(supplier)),
            });
            let context = build_app_context(&app);

            // Some dev setups default to an always-on-top window.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Sauce Chef Quiz")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Preview {
            difficulty,
            region,
            count,
        } => preview(&supplier, difficulty, region, count).await,
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // Binary glue: print once and exit.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_ui() {
        let cli = Cli::try_parse_from(["sauce-chef"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn preview_parses_difficulty_and_region() {
        let cli = Cli::try_parse_from([
            "sauce-chef",
            "preview",
            "--difficulty",
            "hard",
            "--region",
            "Afrique",
            "--count",
            "3",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Preview {
                difficulty,
                region,
                count,
            }) => {
                assert_eq!(difficulty, Difficulty::Hard);
                assert_eq!(region, Region::Africa);
                assert_eq!(count.get(), 3);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn preview_defaults_to_a_full_world_game() {
        let cli = Cli::try_parse_from(["sauce-chef", "preview"]).unwrap();
        let Some(Command::Preview {
            difficulty,
            region,
            count,
        }) = cli.command
        else {
            panic!("expected preview");
        };
        assert_eq!(difficulty, Difficulty::Medium);
        assert_eq!(region, Region::World);
        assert_eq!(count.get(), QUESTIONS_PER_GAME);
    }

    #[test]
    fn preview_rejects_unknown_region() {
        assert!(Cli::try_parse_from(["sauce-chef", "preview", "--region", "Atlantide"]).is_err());
    }
}
