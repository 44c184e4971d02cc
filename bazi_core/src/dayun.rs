//! Decade-cycle (Da Yun) derivation.
//!
//! Direction depends only on gender and year-stem polarity; the stepped
//! pillars then walk the sexagenary cycle one position per decade, starting
//! from the month pillar.

use crate::cycle;
use crate::types::{DaYunDirection, Gender, Pillar, Polarity, Stem};
use crate::Result;

/// Direction of the decade cycles.
///
/// Classical rule: Yang-stem male and Yin-stem female run forward, the
/// complementary pairings run backward. Nothing else influences this.
pub fn direction(gender: Gender, year_stem: Stem) -> DaYunDirection {
    let yang_year = year_stem.polarity() == Polarity::Yang;
    let forward = match gender {
        Gender::Male => yang_year,
        Gender::Female => !yang_year,
    };
    if forward {
        DaYunDirection::Forward
    } else {
        DaYunDirection::Backward
    }
}

/// First decade pillar: one cycle step from the month pillar.
///
/// The month pillar may come from manual entry rather than the calculator,
/// so its cycle membership is re-checked here.
pub fn first_da_yun(month_pillar: Pillar, direction: DaYunDirection) -> Result<Pillar> {
    let month_index = cycle::index_of(month_pillar)?;
    Ok(cycle::pillar_at(step_index(month_index, direction, 1)))
}

/// The stepped decade pillars; step `k` sits `k` cycle positions from the
/// month pillar in the chosen direction. Each step spans ten years.
pub fn sequence(
    month_pillar: Pillar,
    direction: DaYunDirection,
    steps: u32,
) -> Result<Vec<Pillar>> {
    let month_index = cycle::index_of(month_pillar)?;
    tracing::debug!(
        "Stepping {} decade pillars {} from cycle index {}",
        steps,
        direction,
        month_index
    );
    Ok((1..=steps as usize)
        .map(|k| cycle::pillar_at(step_index(month_index, direction, k)))
        .collect())
}

fn step_index(month_index: usize, direction: DaYunDirection, k: usize) -> usize {
    let offset = match direction {
        DaYunDirection::Forward => k as i64,
        DaYunDirection::Backward => -(k as i64),
    };
    (month_index as i64 + offset).rem_euclid(60) as usize
}

/// Provider of the age at which the first decade cycle begins.
pub trait StartAgeProvider {
    /// Age in whole years, always >= 1.
    fn start_age(&self) -> u32;
}

/// Placeholder provider returning a fixed start age.
///
/// The classical rule measures the day distance from birth to the nearest
/// solar-term boundary and converts three days into one year of age. That
/// needs real solar-term instants and a decided rounding policy for the
/// division; this provider has neither and returns a constant until an
/// ephemeris-backed implementation replaces it.
#[derive(Clone, Copy, Debug)]
pub struct FixedStartAge(pub u32);

impl Default for FixedStartAge {
    fn default() -> Self {
        Self(1)
    }
}

impl StartAgeProvider for FixedStartAge {
    fn start_age(&self) -> u32 {
        self.0.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Branch;
    use crate::Error;

    #[test]
    fn test_direction_truth_table() {
        // 庚 is Yang, 辛 is Yin.
        assert_eq!(
            direction(Gender::Male, Stem::Geng),
            DaYunDirection::Forward
        );
        assert_eq!(
            direction(Gender::Female, Stem::Geng),
            DaYunDirection::Backward
        );
        assert_eq!(direction(Gender::Male, Stem::Xin), DaYunDirection::Backward);
        assert_eq!(
            direction(Gender::Female, Stem::Xin),
            DaYunDirection::Forward
        );
    }

    #[test]
    fn test_direction_for_every_yang_stem_male() {
        for stem in [Stem::Jia, Stem::Bing, Stem::Wu, Stem::Geng, Stem::Ren] {
            assert_eq!(direction(Gender::Male, stem), DaYunDirection::Forward);
            assert_eq!(direction(Gender::Female, stem), DaYunDirection::Backward);
        }
    }

    #[test]
    fn test_first_da_yun_steps_one_position() {
        for index in [0, 17, 59] {
            let month = cycle::pillar_at(index);
            let forward = first_da_yun(month, DaYunDirection::Forward).unwrap();
            let backward = first_da_yun(month, DaYunDirection::Backward).unwrap();
            assert_eq!(cycle::index_of(forward).unwrap(), (index + 1) % 60);
            assert_eq!(cycle::index_of(backward).unwrap(), (index + 59) % 60);
        }
    }

    #[test]
    fn test_sequence_walks_the_cycle() {
        let month = cycle::pillar_at(17); // 辛巳
        let forward = sequence(month, DaYunDirection::Forward, 10).unwrap();
        assert_eq!(forward.len(), 10);
        assert_eq!(forward[0].to_string(), "壬午");
        assert_eq!(cycle::index_of(forward[9]).unwrap(), 27);

        let backward = sequence(month, DaYunDirection::Backward, 10).unwrap();
        assert_eq!(backward[0].to_string(), "庚辰");
        assert_eq!(cycle::index_of(backward[9]).unwrap(), 7);
    }

    #[test]
    fn test_sequence_wraps_around_either_end() {
        let last = cycle::pillar_at(59);
        let wrapped = sequence(last, DaYunDirection::Forward, 2).unwrap();
        assert_eq!(cycle::index_of(wrapped[0]).unwrap(), 0);

        let first = cycle::pillar_at(0);
        let wrapped = sequence(first, DaYunDirection::Backward, 2).unwrap();
        assert_eq!(cycle::index_of(wrapped[0]).unwrap(), 59);
        assert_eq!(cycle::index_of(wrapped[1]).unwrap(), 58);
    }

    #[test]
    fn test_invalid_month_pillar_is_rejected() {
        let invalid = Pillar::new(Stem::Jia, Branch::Chou);
        assert!(matches!(
            first_da_yun(invalid, DaYunDirection::Forward),
            Err(Error::PillarNotFound(_))
        ));
    }

    #[test]
    fn test_fixed_start_age_clamps_to_one() {
        assert_eq!(FixedStartAge::default().start_age(), 1);
        assert_eq!(FixedStartAge(0).start_age(), 1);
        assert_eq!(FixedStartAge(3).start_age(), 3);
    }
}
