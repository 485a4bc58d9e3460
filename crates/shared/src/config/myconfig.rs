use super::calendar::AcademicCalendar;
use anyhow::{Context, Result, anyhow};
use std::str::FromStr;

pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 60;
pub const MAX_TOKEN_TTL_MINUTES: i64 = 60 * 24 * 365;
pub const DEFAULT_CURRENT_YEAR: i32 = 2025;
pub const DEFAULT_CURRENT_TERM: &str = "SPRING";

/// Which rows the average score is divided by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AverageDivisor {
    /// Every returned row; an ungraded row adds 0 to the sum.
    #[default]
    AllRows,
    /// Only rows with a posted score.
    ScoredRows,
}

impl FromStr for AverageDivisor {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rows" => Ok(AverageDivisor::AllRows),
            "scored" => Ok(AverageDivisor::ScoredRows),
            other => Err(anyhow!(
                "AVG_SCORE_DIVISOR must be 'rows' or 'scored', got '{other}'"
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub run_migrations: bool,
    pub port: u16,
    pub token_ttl_minutes: i64,
    pub calendar: AcademicCalendar,
    pub average_divisor: AverageDivisor,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| lookup(key).with_context(|| format!("Missing env: {key}"));

        let database_url = required("DATABASE_URL")?;
        let jwt_secret = required("JWT_SECRET")?;
        let run_migrations_str = required("RUN_MIGRATIONS")?;
        let port_str = required("PORT")?;

        let run_migrations = match run_migrations_str.as_str() {
            "true" => true,
            "false" => false,
            other => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{other}'",
                ));
            }
        };

        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let token_ttl_minutes = match lookup("TOKEN_TTL_MINUTES") {
            Some(raw) => raw
                .parse::<i64>()
                .ok()
                .filter(|v| (1..=MAX_TOKEN_TTL_MINUTES).contains(v))
                .with_context(|| {
                    format!("TOKEN_TTL_MINUTES must be between 1 and {MAX_TOKEN_TTL_MINUTES}")
                })?,
            None => DEFAULT_TOKEN_TTL_MINUTES,
        };

        let current_year = match lookup("CURRENT_YEAR") {
            Some(raw) => raw
                .parse::<i32>()
                .context("CURRENT_YEAR must be a valid integer")?,
            None => DEFAULT_CURRENT_YEAR,
        };

        let current_term = lookup("CURRENT_TERM")
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_CURRENT_TERM.to_string());

        let average_divisor = match lookup("AVG_SCORE_DIVISOR") {
            Some(raw) => raw.parse::<AverageDivisor>()?,
            None => AverageDivisor::default(),
        };

        Ok(Self {
            database_url,
            jwt_secret,
            run_migrations,
            port,
            token_ttl_minutes,
            calendar: AcademicCalendar::new(current_year, current_term),
            average_divisor,
        })
    }
}
