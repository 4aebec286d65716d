use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use uuid::Uuid;

use super::errors::ParticipantError;
use super::model::Participant;
use crate::domain::logger::Logger;

/// Multiplier used for guests and for anyone whose age is unknown.
pub const DEFAULT_MULTIPLIER: f64 = 1.0;

/// Whole years between `birthdate` and `today`.
pub fn age_in_years(birthdate: NaiveDate, today: NaiveDate) -> Result<u32, ParticipantError> {
    let mut years = today.year() - birthdate.year();
    if (today.month(), today.day()) < (birthdate.month(), birthdate.day()) {
        years -= 1;
    }

    u32::try_from(years).map_err(|_| ParticipantError::NegativeAge { birthdate, today })
}

/// Consumption multiplier of one participant.
///
/// Age brackets, first match wins:
/// - 0-4 -> 0.4
/// - 5-10 -> 0.7
/// - 11-14 -> 1.0
/// - 15-23 -> 1.2
/// - 24 and older -> 1.0
///
/// A missing birthdate counts as an adult portion.
pub fn portion_multiplier(
    birthdate: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<f64, ParticipantError> {
    let Some(birthdate) = birthdate else {
        return Ok(DEFAULT_MULTIPLIER);
    };

    let multiplier = match age_in_years(birthdate, today)? {
        0..=4 => 0.4,
        5..=10 => 0.7,
        11..=14 => 1.0,
        15..=23 => 1.2,
        _ => 1.0,
    };
    Ok(multiplier)
}

/// Multipliers of every participant of one event, computed once per request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortionTable {
    multipliers: HashMap<Uuid, f64>,
}

impl PortionTable {
    pub fn build(participants: &[Participant], today: NaiveDate) -> Result<Self, ParticipantError> {
        let mut multipliers = HashMap::with_capacity(participants.len());
        for participant in participants {
            let multiplier = portion_multiplier(participant.birthdate, today).map_err(|_| {
                ParticipantError::InvalidBirthdate {
                    participant_id: participant.id,
                    birthdate: participant.birthdate.unwrap_or(today),
                }
            })?;
            multipliers.insert(participant.id, multiplier);
        }
        Ok(Self { multipliers })
    }

    pub fn get(&self, participant_id: &Uuid) -> Option<f64> {
        self.multipliers.get(participant_id).copied()
    }

    pub fn len(&self) -> usize {
        self.multipliers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.multipliers.is_empty()
    }

    /// Sum of the multipliers of `eaters`; unknown ids count as 1.0.
    pub fn sum_for<'a>(
        &self,
        eaters: impl IntoIterator<Item = &'a Uuid>,
        logger: &dyn Logger,
    ) -> f64 {
        eaters
            .into_iter()
            .map(|id| {
                self.get(id).unwrap_or_else(|| {
                    logger.debug(&format!(
                        "No participant data for eater {}, using default portion",
                        id
                    ));
                    DEFAULT_MULTIPLIER
                })
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn participant(birthdate: Option<NaiveDate>) -> Participant {
        Participant {
            id: Uuid::new_v4(),
            name: "Alex".to_string(),
            birthdate,
            group: String::new(),
        }
    }

    #[test]
    fn should_count_whole_years_only() {
        let today = date(2025, 7, 1);

        assert_eq!(age_in_years(date(2015, 7, 1), today).unwrap(), 10);
        assert_eq!(age_in_years(date(2015, 7, 2), today).unwrap(), 9);
        assert_eq!(age_in_years(date(2025, 7, 1), today).unwrap(), 0);
    }

    #[test]
    fn should_apply_age_brackets() {
        let today = date(2025, 7, 1);
        let born_years_ago = |years: i32| Some(date(2025 - years, 1, 1));

        assert_eq!(portion_multiplier(born_years_ago(0), today).unwrap(), 0.4);
        assert_eq!(portion_multiplier(born_years_ago(4), today).unwrap(), 0.4);
        assert_eq!(portion_multiplier(born_years_ago(5), today).unwrap(), 0.7);
        assert_eq!(portion_multiplier(born_years_ago(10), today).unwrap(), 0.7);
        assert_eq!(portion_multiplier(born_years_ago(11), today).unwrap(), 1.0);
        assert_eq!(portion_multiplier(born_years_ago(14), today).unwrap(), 1.0);
        assert_eq!(portion_multiplier(born_years_ago(15), today).unwrap(), 1.2);
        assert_eq!(portion_multiplier(born_years_ago(23), today).unwrap(), 1.2);
        assert_eq!(portion_multiplier(born_years_ago(24), today).unwrap(), 1.0);
        assert_eq!(portion_multiplier(born_years_ago(70), today).unwrap(), 1.0);
    }

    #[test]
    fn should_default_to_adult_portion_when_birthdate_missing() {
        assert_eq!(portion_multiplier(None, date(2025, 7, 1)).unwrap(), 1.0);
    }

    #[test]
    fn should_reject_birthdate_in_the_future() {
        let result = portion_multiplier(Some(date(2026, 1, 1)), date(2025, 7, 1));

        assert!(matches!(
            result.unwrap_err(),
            ParticipantError::NegativeAge { .. }
        ));
    }

    #[test]
    fn should_build_table_and_sum_multipliers() {
        let today = date(2025, 7, 1);
        let child = participant(Some(date(2018, 3, 1)));
        let teen = participant(Some(date(2008, 3, 1)));
        let table = PortionTable::build(&[child.clone(), teen.clone()], today).unwrap();
        let mut logger = MockLog::new();
        logger.expect_debug().never();

        let sum = table.sum_for([&child.id, &teen.id], &logger);

        assert_eq!(table.len(), 2);
        assert!((sum - 1.9).abs() < 1e-9);
    }

    #[test]
    fn should_default_unknown_eaters_to_one() {
        let table = PortionTable::default();
        let mut logger = MockLog::new();
        logger.expect_debug().times(2).returning(|_| ());

        let sum = table.sum_for([&Uuid::new_v4(), &Uuid::new_v4()], &logger);

        assert_eq!(sum, 2.0);
    }

    #[test]
    fn should_name_participant_with_impossible_birthdate() {
        let today = date(2025, 7, 1);
        let unborn = participant(Some(date(2030, 1, 1)));

        let result = PortionTable::build(std::slice::from_ref(&unborn), today);

        assert_eq!(
            result.unwrap_err(),
            ParticipantError::InvalidBirthdate {
                participant_id: unborn.id,
                birthdate: date(2030, 1, 1),
            }
        );
    }
}
