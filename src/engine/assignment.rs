use super::state::EngineState;
use super::types::{EngineError, ExhaustionPolicy};
use super::{constraints, Engine};
use crate::calendar::{classify, DaySpec};
use crate::model::{AssignmentRecord, Schedule, SlotKind, SlotOutcome};
use anyhow::Context;
use chrono::NaiveDate;
use rand::Rng;

/// Déroule une exécution complète : jours en ordre strictement croissant,
/// état construit au départ et avancé au fil des affectations.
pub(super) fn run<R: Rng>(
    engine: &Engine,
    start: NaiveDate,
    end: NaiveDate,
    rng: &mut R,
) -> Result<Schedule, EngineError> {
    if start > end {
        return Err(EngineError::InvalidRange);
    }
    if engine.roster.is_empty() {
        return Err(EngineError::EmptyRoster);
    }

    let mut state = EngineState::new();
    let mut entries = Vec::new();
    let mut current = start;

    while current <= end {
        let spec = classify(current, &engine.holidays);
        entries.push(process_day(engine, &spec, &mut state, rng)?);
        current = current.succ_opt().context("date overflow")?;
    }

    Ok(Schedule::new(start, end, entries))
}

/// Au plus deux remplissages par jour : le jour d'abord (si requis), la nuit
/// ensuite, qui voit l'affectation de jour du même jour.
fn process_day<R: Rng>(
    engine: &Engine,
    spec: &DaySpec,
    state: &mut EngineState,
    rng: &mut R,
) -> Result<AssignmentRecord, EngineError> {
    let day_shift = if spec.requires_day_shift {
        let chosen = fill_slot(engine, SlotKind::Day, state, None, rng);
        state.note_day_shift(chosen.as_deref());
        resolve(engine, SlotKind::Day, spec.date, chosen)?
    } else {
        SlotOutcome::NotRequired
    };

    let chosen = fill_slot(engine, SlotKind::Night, state, day_shift.assignee(), rng);
    state.note_night_shift(chosen.as_deref());
    let night_shift = resolve(engine, SlotKind::Night, spec.date, chosen)?;

    Ok(AssignmentRecord {
        date: spec.date,
        class: spec.class,
        day_shift,
        night_shift,
    })
}

/// Échantillonnage par rejet : tirage uniforme dans l'effectif complet,
/// premier candidat valide accepté, abandon après `max_draws` tirages.
fn fill_slot<R: Rng>(
    engine: &Engine,
    kind: SlotKind,
    state: &EngineState,
    same_day_day_shift: Option<&str>,
    rng: &mut R,
) -> Option<String> {
    let people = engine.roster.all();

    for _ in 0..engine.opts.max_draws {
        let candidate = &people[rng.gen_range(0..people.len())];
        let ok = match kind {
            SlotKind::Day => constraints::day_slot_ok(candidate, state, engine.opts),
            SlotKind::Night => constraints::night_slot_ok(candidate, state, same_day_day_shift),
        };
        if ok {
            return Some(candidate.name.clone());
        }
    }

    None
}

fn resolve(
    engine: &Engine,
    kind: SlotKind,
    date: NaiveDate,
    chosen: Option<String>,
) -> Result<SlotOutcome, EngineError> {
    match chosen {
        Some(name) => Ok(SlotOutcome::Assigned(name)),
        None => match engine.opts.on_exhausted {
            ExhaustionPolicy::RecordUnfilled => Ok(SlotOutcome::Unfilled),
            ExhaustionPolicy::Fail => Err(EngineError::SlotExhausted {
                slot: kind,
                date,
                attempts: engine.opts.max_draws,
            }),
        },
    }
}
