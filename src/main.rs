use cooperated_server::dtos::{CooperatedDTO, CreateCooperatedDTO, PaginationOptions};
use cooperated_server::{AppState, Config};
use std::env;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: cooperated-server <import FILE.json | validate DOCUMENT | list [PAGE] [LIMIT]>";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(command) = args.first() else {
        return Err(USAGE.into());
    };

    // Inizializza la configurazione
    let config = Config::from_env()?;
    config.print_info();

    let pool = cooperated_server::connect(&config).await?;
    let state = AppState::new(pool, &config);

    match command.as_str() {
        "import" => {
            let path = args.get(1).ok_or(USAGE)?;
            let raw = tokio::fs::read_to_string(path).await?;
            let rows: Vec<CreateCooperatedDTO> = serde_json::from_str(&raw)?;
            let inserted = state.cooperated.create_bulk(rows).await?;
            println!("{}", serde_json::json!({ "inserted": inserted }));
        }
        "validate" => {
            let document = args.get(1).ok_or(USAGE)?;
            let summary = state.cooperated.validate_document(document).await?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        "list" => {
            let defaults = PaginationOptions::default();
            let page = args.get(1).map_or(Ok(defaults.page), |p| p.parse())?;
            let limit = args.get(2).map_or(Ok(defaults.limit), |l| l.parse())?;
            let members: Vec<CooperatedDTO> = state
                .cooperated
                .find_many_with_pagination(PaginationOptions::new(page, limit))
                .await?
                .into_iter()
                .map(CooperatedDTO::from)
                .collect();
            println!("{}", serde_json::to_string_pretty(&members)?);
        }
        _ => return Err(USAGE.into()),
    }

    Ok(())
}
