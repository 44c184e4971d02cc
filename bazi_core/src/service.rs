//! Facade tying the pillar and decade-cycle calculators together.

use crate::config::Config;
use crate::dayun::{self, FixedStartAge, StartAgeProvider};
use crate::pillars;
use crate::solar_terms::{FixedBoundary, SolarTermBoundary};
use crate::types::{BaziResult, BirthInput};
use crate::{Error, Result};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

/// Chart calculation service.
///
/// Holds the boundary and start-age providers; everything else is stateless,
/// so one service can serve any number of concurrent callers.
pub struct BaziService {
    boundary: Box<dyn SolarTermBoundary + Send + Sync>,
    start_age: Box<dyn StartAgeProvider + Send + Sync>,
}

impl Default for BaziService {
    fn default() -> Self {
        Self {
            boundary: Box::new(FixedBoundary::default()),
            start_age: Box::new(FixedStartAge::default()),
        }
    }
}

impl BaziService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a service with the providers a configuration selects.
    pub fn from_config(config: &Config) -> Self {
        Self {
            boundary: Box::new(FixedBoundary {
                day: config.solar_terms.li_chun_day,
            }),
            start_age: Box::new(FixedStartAge(config.da_yun.start_age)),
        }
    }

    /// Build a service with explicit providers (e.g. an ephemeris-backed
    /// boundary).
    pub fn with_providers(
        boundary: Box<dyn SolarTermBoundary + Send + Sync>,
        start_age: Box<dyn StartAgeProvider + Send + Sync>,
    ) -> Self {
        Self {
            boundary,
            start_age,
        }
    }

    /// Compute a full chart from raw birth input.
    ///
    /// Fails with [`Error::InvalidInput`] when the date or time string does
    /// not parse or names an impossible moment (February 30th, hour 24).
    /// On success every field of the result is populated; there is no
    /// partial result.
    pub fn calculate(&self, input: &BirthInput) -> Result<BaziResult> {
        let date = NaiveDate::parse_from_str(input.birth_date.trim(), "%Y-%m-%d").map_err(
            |_| {
                Error::InvalidInput(format!(
                    "birth date '{}' is not a valid YYYY-MM-DD date",
                    input.birth_date
                ))
            },
        )?;
        let time = NaiveTime::parse_from_str(input.birth_time.trim(), "%H:%M").map_err(|_| {
            Error::InvalidInput(format!(
                "birth time '{}' is not a valid HH:MM time",
                input.birth_time
            ))
        })?;

        let year_pillar = pillars::year_pillar(date.year());
        let month_pillar = pillars::month_pillar(
            date.year(),
            date.month(),
            date.day(),
            self.boundary.as_ref(),
        );
        let day_pillar = pillars::day_pillar(date);
        let hour_pillar = pillars::hour_pillar(date, time.hour())?;

        let direction = dayun::direction(input.gender, year_pillar.stem);
        let first_da_yun = dayun::first_da_yun(month_pillar, direction)?;

        tracing::info!(
            "Chart for {} {}: {} {} {} {}, first Da Yun {} ({})",
            date,
            input.gender,
            year_pillar,
            month_pillar,
            day_pillar,
            hour_pillar,
            first_da_yun,
            direction
        );

        Ok(BaziResult {
            year_pillar,
            month_pillar,
            day_pillar,
            hour_pillar,
            first_da_yun,
            start_age: self.start_age.start_age(),
            birth_year: date.year(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Gender;

    fn input(date: &str, time: &str, gender: Gender) -> BirthInput {
        BirthInput {
            birth_date: date.to_string(),
            birth_time: time.to_string(),
            birth_place: "北京".to_string(),
            gender,
            name: None,
        }
    }

    #[test]
    fn test_calculate_golden_chart() {
        let service = BaziService::new();
        let result = service
            .calculate(&input("1990-05-15", "14:30", Gender::Male))
            .unwrap();

        assert_eq!(result.year_pillar.to_string(), "庚午");
        assert_eq!(result.month_pillar.to_string(), "辛巳");
        assert_eq!(result.day_pillar.to_string(), "庚午");
        assert_eq!(result.hour_pillar.to_string(), "癸未");
        // 庚 is Yang and the subject is male, so the cycles run forward.
        assert_eq!(result.first_da_yun.to_string(), "壬午");
        assert_eq!(result.start_age, 1);
        assert_eq!(result.birth_year, 1990);
    }

    #[test]
    fn test_calculate_backward_for_female_yang_year() {
        let service = BaziService::new();
        let result = service
            .calculate(&input("1990-05-15", "14:30", Gender::Female))
            .unwrap();
        assert_eq!(result.first_da_yun.to_string(), "庚辰");
    }

    #[test]
    fn test_calculate_is_idempotent() {
        let service = BaziService::new();
        let birth = input("1984-02-03", "23:40", Gender::Female);
        let first = service.calculate(&birth).unwrap();
        let second = service.calculate(&birth).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_impossible_date_is_rejected() {
        let service = BaziService::new();
        let err = service
            .calculate(&input("1990-02-30", "10:00", Gender::Male))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_malformed_strings_are_rejected() {
        let service = BaziService::new();
        for (date, time) in [
            ("not-a-date", "10:00"),
            ("1990-05-15", "25:00"),
            ("1990-05-15", "ten thirty"),
            ("", "10:00"),
        ] {
            let err = service
                .calculate(&input(date, time, Gender::Male))
                .unwrap_err();
            assert!(matches!(err, Error::InvalidInput(_)), "{} {}", date, time);
        }
    }

    #[test]
    fn test_explicit_providers() {
        let service = BaziService::with_providers(
            Box::new(FixedBoundary { day: 5 }),
            Box::new(FixedStartAge(2)),
        );
        let result = service
            .calculate(&input("1990-05-15", "14:30", Gender::Male))
            .unwrap();
        assert_eq!(result.start_age, 2);
        assert_eq!(result.month_pillar.to_string(), "辛巳");
    }

    #[test]
    fn test_configured_start_age_flows_through() {
        let mut config = Config::default();
        config.da_yun.start_age = 3;
        let service = BaziService::from_config(&config);
        let result = service
            .calculate(&input("1990-05-15", "14:30", Gender::Male))
            .unwrap();
        assert_eq!(result.start_age, 3);
    }
}
