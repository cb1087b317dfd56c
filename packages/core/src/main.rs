use std::io;

use clap::Parser;
use dotenvy::dotenv;

use hh_vacancy_tracker::cli::{Cli, Command};
use hh_vacancy_tracker::config::Config;
use hh_vacancy_tracker::error::AppError;
use hh_vacancy_tracker::logging::init_logging;
use hh_vacancy_tracker::services::hh::HeadHunterClient;
use hh_vacancy_tracker::session::run_interactive;
use hh_vacancy_tracker::store::{JsonVacancyStore, VacancyStore};
use hh_vacancy_tracker::vacancy::HeadHunterSource;

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_logging();

    let cli = Cli::parse();

    let config = load_config(&cli).unwrap_or_else(|err| {
        tracing::error!("{}", err);
        std::process::exit(1);
    });

    tracing::debug!("Starting with config: {:?}", config);

    if let Err(err) = run(cli.command, config).await {
        tracing::error!("{}", err);
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<Config, AppError> {
    let mut config = Config::from_env().map_err(AppError::Config)?;
    config.apply_cli(cli).map_err(AppError::Config)?;
    Ok(config)
}

async fn run(command: Option<Command>, config: Config) -> Result<(), AppError> {
    let store = JsonVacancyStore::new(&config.store_path);

    match command {
        None => {
            let client = HeadHunterClient::new(config.api_url.clone(), &config.user_agent)?;
            let source = HeadHunterSource::new(client, config.area, config.fetch_limit);

            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();
            run_interactive(&mut input, &mut output, &source, &store).await
        }
        Some(Command::Query { min_salary }) => {
            println!("{}", store.query_by_min_salary(min_salary)?);
            Ok(())
        }
        Some(Command::Delete { url }) => {
            println!("{}", store.delete(&url)?);
            Ok(())
        }
        Some(Command::List) => {
            let records = store.all()?;
            if records.is_empty() {
                println!("Сохранённых вакансий нет.");
            }
            for record in records {
                println!("{}", record);
            }
            Ok(())
        }
    }
}
