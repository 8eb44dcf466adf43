use database::{DatabaseGenerator, DatabaseLoader};
use env_logger::Env;
use league::TimeEstimation;
use log::info;
use web::{AppData, LeagueServer, ServerSettings};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let settings = ServerSettings::from_env();

    let (database, estimated) = match &settings.data_path {
        Some(path) => TimeEstimation::estimate(|| DatabaseLoader::load_from_path(path)),
        None => TimeEstimation::estimate(DatabaseLoader::load),
    };
    let database = database?;

    info!("database loaded: {} ms", estimated);

    let league_data = DatabaseGenerator::generate(&database);

    LeagueServer::new(AppData::new(league_data), settings).run().await?;

    Ok(())
}
