use color_eyre::eyre::{Result, WrapErr};
use database::{DatabaseGenerator, DatabaseLoader};
use env_logger::Env;
use football_core::utils::TimeEstimation;
use football_core::{SeasonProgress, SeasonSimulator, SimulationSettings};
use log::info;
use std::env;

#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

const DEFAULT_SEASONS: u16 = 3;

fn main() -> Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let seed = env_value("SEED")?.unwrap_or_else(|| SimulationSettings::default().seed);
    let seasons = env_value("SEASONS")?.unwrap_or(DEFAULT_SEASONS);

    let (database, estimated) = TimeEstimation::estimate(DatabaseLoader::load);
    let database = database.wrap_err("failed to load database")?;

    info!("database loaded: {} ms", estimated);

    let state = DatabaseGenerator::generate(&database, SimulationSettings::default().with_seed(seed))
        .wrap_err("failed to generate world")?;

    let mut simulator = SeasonSimulator::new(state);

    for _ in 0..seasons {
        let (result, estimated) = TimeEstimation::estimate(|| {
            simulator.simulate_season_with_progress(&mut |progress| {
                if let SeasonProgress::CompetitionFinished {
                    index,
                    total,
                    competition_id,
                    champion,
                } = progress
                {
                    info!(
                        "🏆 [{}/{}] {}: {}",
                        index + 1,
                        total,
                        competition_id,
                        champion.map(|c| c.to_string()).unwrap_or_else(|| "-".to_string())
                    );
                }
            })
        });

        let result = result.wrap_err("season failed")?;

        info!(
            "📅 season {} done in {} ms: {} matches, {} transfers ({:.0} in fees), {} moves, {} graduates, {} retired",
            result.season,
            estimated,
            result.match_count(),
            result.transfers.completed.len(),
            result.transfers.total_fees(),
            result.transitions.applied.len(),
            result.youth_revealed.len(),
            result.retired.len()
        );
    }

    Ok(())
}

fn env_value<T: std::str::FromStr>(name: &str) -> Result<Option<T>>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => Ok(Some(
            value
                .trim()
                .parse()
                .wrap_err_with(|| format!("{} is not a valid value: {}", name, value))?,
        )),
        Err(_) => Ok(None),
    }
}
