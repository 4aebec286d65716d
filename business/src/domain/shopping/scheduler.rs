use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use crate::domain::event::model::Event;

use super::model::{DayPurchaseList, DemandLine, MultiDayPurchasePlan};

/// Demand that cannot be bought on the first day of the event.
#[derive(Debug, Clone)]
struct DeferredDemand {
    needed_on: NaiveDate,
    shelf_life_days: i64,
    line: DemandLine,
}

impl DeferredDemand {
    /// Earliest purchase date from which the item stays fresh until needed.
    fn last_safe_purchase(&self) -> NaiveDate {
        self.needed_on - Duration::days(self.shelf_life_days)
    }

    /// Must be bought on `candidate`: waiting for a later trip would leave
    /// less than its shelf life, or it is needed on that very day.
    fn is_due_on(&self, candidate: NaiveDate) -> bool {
        self.last_safe_purchase() < candidate || self.needed_on <= candidate
    }
}

/// Result of a scheduling run.
#[derive(Debug, Clone)]
pub struct ScheduleReport {
    pub plan: MultiDayPurchasePlan,
    pub iterations: usize,
    /// Set when the iteration cap stopped the greedy loop.
    pub cap_reached: bool,
    /// Lines bought on their day needed after the cap was reached.
    pub forced: Vec<(NaiveDate, DemandLine)>,
}

/// Assigns per-day demand to purchase dates.
///
/// Everything that stays fresh from the first day of the event until it is
/// needed is bought on that first day. The rest is bought in trips: each trip
/// happens on the earliest outstanding deadline and takes every deferred item
/// that would spoil if it waited for a later trip.
pub fn schedule_purchases(
    event: &Event,
    demand_by_day: &BTreeMap<NaiveDate, Vec<DemandLine>>,
) -> ScheduleReport {
    let duration = event.duration_days();
    let mut plan = MultiDayPurchasePlan::new(event.id);
    let mut first_day = Vec::new();
    let mut deferred = Vec::new();

    for (needed_on, lines) in demand_by_day {
        for line in lines {
            let shelf_life = line
                .shelf_life_days()
                .map(i64::from)
                .unwrap_or(i64::MAX);
            let days_from_start = event.days_from_start(*needed_on);

            if shelf_life > duration || days_from_start <= shelf_life {
                first_day.push(line.clone());
            } else {
                deferred.push(DeferredDemand {
                    needed_on: *needed_on,
                    shelf_life_days: shelf_life,
                    line: line.clone(),
                });
            }
        }
    }

    if !first_day.is_empty() {
        buy_on(&mut plan, event.start, first_day);
    }

    let cap = usize::try_from(duration).unwrap_or(usize::MAX).saturating_add(1);
    let mut iterations = 0;
    while iterations < cap {
        let Some(candidate) = earliest_outstanding_deadline(&deferred) else {
            break;
        };
        iterations += 1;

        let (due, remaining): (Vec<_>, Vec<_>) = deferred
            .into_iter()
            .partition(|demand| demand.is_due_on(candidate));
        deferred = remaining;

        buy_on(
            &mut plan,
            candidate,
            due.into_iter().map(|demand| demand.line).collect(),
        );
    }

    let cap_reached = !deferred.is_empty();
    let mut forced = Vec::with_capacity(deferred.len());
    for demand in deferred {
        forced.push((demand.needed_on, demand.line.clone()));
        buy_on(&mut plan, demand.needed_on, vec![demand.line]);
    }

    ScheduleReport {
        plan,
        iterations,
        cap_reached,
        forced,
    }
}

/// The earliest day any deferred item is needed on.
fn earliest_outstanding_deadline(deferred: &[DeferredDemand]) -> Option<NaiveDate> {
    deferred.iter().map(|demand| demand.needed_on).min()
}

/// Adds `lines` to the purchase list of `date`, merging by ingredient and unit.
fn buy_on(plan: &mut MultiDayPurchasePlan, date: NaiveDate, lines: Vec<DemandLine>) {
    let day = plan.days.entry(date).or_insert_with(|| DayPurchaseList {
        date,
        lines: Vec::new(),
    });

    for line in lines {
        let key = line.key();
        match day.lines.iter_mut().find(|existing| existing.key() == key) {
            Some(existing) => existing.amount += line.amount,
            None => day.lines.push(line),
        }
    }

    day.lines.sort_by_key(|line| line.name().to_lowercase());
}
