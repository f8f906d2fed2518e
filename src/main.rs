use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_boss::cli::{handle_classify_command, handle_plan_command, PlanArgs};
use budget_boss::config::{paths::BudgetPaths, settings::Settings};
use budget_boss::logging;

#[derive(Parser)]
#[command(
    name = "budget",
    author = "Kaylee Beyene",
    version,
    about = "AI-assisted monthly budget planner",
    long_about = "Budget Boss turns your income and expenses into a personalized \
                  monthly budget. It checks that your fixed costs and savings goal \
                  fit your income, asks an AI financial advisor for a plan, and lines \
                  the plan up against what you spend today."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Generate a budget plan from the command line
    Plan(PlanArgs),

    /// Show how expense categories are classified
    Classify {
        /// Category names
        #[arg(required = true)]
        categories: Vec<String>,
    },

    /// Write default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Tui) => {
            logging::init_file(&paths.log_file())?;
            let runtime = tokio::runtime::Runtime::new()?;
            budget_boss::tui::run_tui(runtime.handle().clone(), settings)?;
        }
        Some(Commands::Plan(args)) => {
            logging::init_cli();
            let runtime = tokio::runtime::Runtime::new()?;
            handle_plan_command(&runtime, &settings, args)?;
        }
        Some(Commands::Classify { categories }) => {
            logging::init_cli();
            handle_classify_command(&categories)?;
        }
        Some(Commands::Init) => {
            println!("Initializing Budget Boss at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Settings written to {}", paths.settings_file().display());
            println!("Set GEMINI_API_KEY before running 'budget plan' or 'budget tui'.");
        }
        Some(Commands::Config) => {
            println!("Budget Boss Configuration");
            println!("=========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!(
                "Initialized:      {}",
                if paths.is_initialized() { "yes" } else { "no" }
            );
            println!();
            println!("Settings:");
            println!("  Model:           {}", settings.model);
            println!("  API base URL:    {}", settings.api_base_url);
            println!("  Temperature:     {}", settings.temperature);
            println!("  Request timeout: {}s", settings.request_timeout_secs);
            println!("  Default mode:    {}", settings.default_mode);
            println!("  Seed rows:       {}", settings.seed_default_rows);
            println!("  Currency symbol: {}", settings.currency_symbol);
        }
        None => {
            println!("Budget Boss - AI-assisted monthly budgeting");
            println!();
            println!("Run 'budget --help' for usage information.");
            println!("Run 'budget tui' to launch the interactive interface.");
        }
    }

    Ok(())
}
