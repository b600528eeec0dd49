use super::{Engine, Violation, ViolationKind};
use crate::calendar::classify;
use crate::model::{Schedule, SlotKind, SlotOutcome};
use std::collections::HashMap;

/// Revalide un tableau existant contre l'ensemble de contraintes et la
/// classification des jours. Rejoue la même notion de « dernière personne
/// affectée » que le moteur : un créneau vide ne contraint personne.
pub(super) fn audit(engine: &Engine, schedule: &Schedule) -> Vec<Violation> {
    let mut out = Vec::new();
    let mut last_day: Option<String> = None;
    let mut last_night: Option<String> = None;
    let mut day_counts: HashMap<String, u32> = HashMap::new();

    for entry in &schedule.entries {
        let spec = classify(entry.date, &engine.holidays);

        let day_is_not_required = matches!(entry.day_shift, SlotOutcome::NotRequired);
        if spec.requires_day_shift == day_is_not_required {
            out.push(Violation {
                date: entry.date,
                slot: SlotKind::Day,
                person: None,
                kind: ViolationKind::RequirementMismatch,
            });
        }
        if matches!(entry.night_shift, SlotOutcome::NotRequired) {
            out.push(Violation {
                date: entry.date,
                slot: SlotKind::Night,
                person: None,
                kind: ViolationKind::RequirementMismatch,
            });
        }

        if let Some(name) = entry.day_shift.assignee() {
            if engine.roster.by_name(name).is_none() {
                out.push(Violation {
                    date: entry.date,
                    slot: SlotKind::Day,
                    person: Some(name.to_owned()),
                    kind: ViolationKind::UnknownPerson,
                });
            }
            if last_day.as_deref() == Some(name) {
                out.push(Violation {
                    date: entry.date,
                    slot: SlotKind::Day,
                    person: Some(name.to_owned()),
                    kind: ViolationKind::RepeatAssignee,
                });
            }
            let count = day_counts.entry(name.to_owned()).or_insert(0);
            *count += 1;
            if *count > engine.opts.day_shift_cap {
                out.push(Violation {
                    date: entry.date,
                    slot: SlotKind::Day,
                    person: Some(name.to_owned()),
                    kind: ViolationKind::CapExceeded,
                });
            }
        }
        match &entry.day_shift {
            SlotOutcome::Assigned(name) => last_day = Some(name.clone()),
            SlotOutcome::Unfilled => last_day = None,
            SlotOutcome::NotRequired => {}
        }

        if let Some(name) = entry.night_shift.assignee() {
            match engine.roster.by_name(name) {
                None => out.push(Violation {
                    date: entry.date,
                    slot: SlotKind::Night,
                    person: Some(name.to_owned()),
                    kind: ViolationKind::UnknownPerson,
                }),
                Some(p) if !p.night_eligible() => out.push(Violation {
                    date: entry.date,
                    slot: SlotKind::Night,
                    person: Some(name.to_owned()),
                    kind: ViolationKind::IneligibleNight,
                }),
                Some(_) => {}
            }
            if last_night.as_deref() == Some(name) {
                out.push(Violation {
                    date: entry.date,
                    slot: SlotKind::Night,
                    person: Some(name.to_owned()),
                    kind: ViolationKind::RepeatAssignee,
                });
            }
            if entry.day_shift.assignee() == Some(name) {
                out.push(Violation {
                    date: entry.date,
                    slot: SlotKind::Night,
                    person: Some(name.to_owned()),
                    kind: ViolationKind::BothShiftsSameDay,
                });
            }
        }
        last_night = entry.night_shift.assignee().map(str::to_owned);
    }

    out
}
