//! Simulation session: owns one kingdom run and publishes its progress

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tokio::sync::mpsc;

use crate::core::config::KingdomConfig;
use crate::core::error::{KingdomError, Result};
use crate::core::types::Year;
use crate::kingdom::events::{EventLog, GenerationEvent};
use crate::kingdom::noble::NobleSnapshot;
use crate::kingdom::output::{KingdomSnapshot, SimulationOutput};
use crate::kingdom::systems;
use crate::kingdom::world::Kingdom;

/// What an observer sees after each simulated year
///
/// Year 0 is the founding: its events are the initial coronation.
pub struct YearReport<'a> {
    pub year: Year,
    /// Events emitted during this year only
    pub events: &'a [GenerationEvent],
    pub kingdom: &'a Kingdom,
    pub generating: bool,
}

/// Receives a report after every simulated year
pub trait YearObserver {
    fn on_year(&mut self, report: YearReport<'_>);
}

impl<F> YearObserver for F
where
    F: FnMut(YearReport<'_>),
{
    fn on_year(&mut self, report: YearReport<'_>) {
        self(report)
    }
}

/// Owned per-year report for the async driver
#[derive(Clone, Debug, Serialize)]
pub struct YearUpdate {
    pub year: Year,
    pub events: Vec<GenerationEvent>,
    pub living_nobles: usize,
    pub ruler: Option<NobleSnapshot>,
    pub active_wars: usize,
}

pub struct Simulation {
    config: KingdomConfig,
    kingdom: Option<Kingdom>,
    events: EventLog,
    generating: bool,
    seed: u64,
    elapsed: Duration,
}

impl Simulation {
    /// Validates the configuration
    pub fn new(config: KingdomConfig) -> Result<Self> {
        config.validate()?;
        let seed = config.seed.unwrap_or_default();
        Ok(Self {
            config,
            kingdom: None,
            events: EventLog::new(),
            generating: false,
            seed,
            elapsed: Duration::ZERO,
        })
    }

    pub fn config(&self) -> &KingdomConfig {
        &self.config
    }

    pub fn kingdom(&self) -> Option<&Kingdom> {
        self.kingdom.as_ref()
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    /// Year of the kingdom, 0 before the first run
    pub fn current_year(&self) -> Year {
        self.kingdom.as_ref().map_or(0, |k| k.year)
    }

    /// Seed of the most recent run
    ///
    /// Unseeded configurations draw a fresh seed at the start of every run.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Run a full history without observation
    pub fn generate_kingdom(&mut self) -> Result<()> {
        self.generate_kingdom_with(&mut |_: YearReport<'_>| {})
    }

    /// Run a full history, reporting to `observer` after the founding and every year
    pub fn generate_kingdom_with(&mut self, observer: &mut dyn YearObserver) -> Result<()> {
        let start = Instant::now();
        self.begin()?;
        self.report(0, observer);

        for _ in 0..self.config.years_to_simulate {
            let mark = self.events.len();
            self.advance();
            self.report(mark, observer);
        }

        self.finish(start);
        Ok(())
    }

    /// Run a full history, yielding to the runtime between years
    ///
    /// Each year's update is pushed onto `tx`. A full queue applies
    /// backpressure; a dropped receiver stops publishing but the run
    /// still completes. `pace` sleeps between years instead of yielding.
    pub async fn generate_kingdom_async(
        &mut self,
        tx: mpsc::Sender<YearUpdate>,
        pace: Option<Duration>,
    ) -> Result<()> {
        let start = Instant::now();
        self.begin()?;
        let mut tx = Some(tx);
        self.publish(&mut tx, 0).await;

        for _ in 0..self.config.years_to_simulate {
            let mark = self.events.len();
            self.advance();
            self.publish(&mut tx, mark).await;

            match pace {
                Some(delay) => tokio::time::sleep(delay).await,
                None => tokio::task::yield_now().await,
            }
        }

        self.finish(start);
        Ok(())
    }

    pub fn snapshot(&self) -> Option<KingdomSnapshot> {
        self.kingdom.as_ref().map(KingdomSnapshot::new)
    }

    /// Final state, full event log and statistics of the last run
    pub fn output(&self) -> Result<SimulationOutput> {
        let kingdom = self.kingdom.as_ref().ok_or(KingdomError::NotGenerated)?;
        Ok(SimulationOutput::new(
            kingdom,
            self.events.as_slice(),
            self.seed,
            self.elapsed,
        ))
    }

    fn begin(&mut self) -> Result<()> {
        self.seed = self.config.seed.unwrap_or_else(rand::random);
        tracing::info!(
            "Generating kingdom: {} years, {} houses, seed {}",
            self.config.years_to_simulate,
            self.config.noble_house_names.len(),
            self.seed
        );

        self.events = EventLog::new();
        self.kingdom = None;
        self.generating = true;

        let rng = ChaCha8Rng::seed_from_u64(self.seed);
        match systems::initialize_kingdom(&self.config, rng, &mut self.events) {
            Ok(kingdom) => {
                self.kingdom = Some(kingdom);
                Ok(())
            }
            Err(e) => {
                self.generating = false;
                Err(e)
            }
        }
    }

    fn advance(&mut self) {
        if let Some(kingdom) = self.kingdom.as_mut() {
            systems::advance_year(kingdom, &mut self.events, &self.config);
        }
    }

    fn report(&self, mark: usize, observer: &mut dyn YearObserver) {
        if let Some(kingdom) = &self.kingdom {
            observer.on_year(YearReport {
                year: kingdom.year,
                events: self.events.since(mark),
                kingdom,
                generating: self.generating,
            });
        }
    }

    async fn publish(&self, tx: &mut Option<mpsc::Sender<YearUpdate>>, mark: usize) {
        let (Some(sender), Some(kingdom)) = (tx.as_ref(), self.kingdom.as_ref()) else {
            return;
        };
        let update = YearUpdate {
            year: kingdom.year,
            events: self.events.since(mark).to_vec(),
            living_nobles: kingdom.living_population(),
            ruler: kingdom.ruler().map(|r| r.snapshot()),
            active_wars: kingdom.war_list.len(),
        };
        if sender.send(update).await.is_err() {
            tracing::debug!("Update receiver dropped in year {}", kingdom.year);
            *tx = None;
        }
    }

    fn finish(&mut self, start: Instant) {
        self.generating = false;
        self.elapsed = start.elapsed();
        if let Some(kingdom) = &self.kingdom {
            tracing::info!(
                "Kingdom generated in {:?}: {} events, {} rulers, {} living nobles",
                self.elapsed,
                self.events.len(),
                kingdom.ruler_list.len(),
                kingdom.living_population()
            );
        }
    }
}
