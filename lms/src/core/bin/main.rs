use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;
use lms_fees::core::controller::{AppState, handle_line};
use lms_fees::core::domain::Configuration;
use lms_fees::core::library::LibraryResult;
use lms_fees::utils::logs::setup_tracing;

const CONFIG_ENV: &str = "LMS_CONFIG";

fn load_config() -> LibraryResult<Configuration> {
    match std::env::var(CONFIG_ENV) {
        Ok(path) => Configuration::from_json_file(path),
        Err(_) => Ok(Configuration::default()),
    }
}

#[tokio::main]
async fn main() -> LibraryResult<()> {
    setup_tracing();

    let config = load_config()?;
    info!(branch_id = config.branch_id.as_str(), "library desk started");
    let state = AppState::new(config);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let response = handle_line(&state, line.as_str()).await;
        stdout.write_all(format!("{}\n", response).as_bytes()).await?;
        stdout.flush().await?;
    }
    Ok(())
}
