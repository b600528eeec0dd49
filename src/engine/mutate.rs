use super::{audit, Engine, EngineError};
use crate::model::{AssignmentRecord, Schedule, SlotKind, SlotOutcome};
use chrono::NaiveDate;

/// Échange les personnes affectées à un même type de créneau entre deux
/// jours du tableau. L'échange est annulé s'il introduit une violation.
pub(super) fn swap(
    engine: &Engine,
    schedule: &mut Schedule,
    date_a: NaiveDate,
    date_b: NaiveDate,
    kind: SlotKind,
) -> Result<(), EngineError> {
    if date_a == date_b {
        return Err(EngineError::SwapInvalid("dates must differ"));
    }

    let pos_a = position(schedule, date_a)?;
    let pos_b = position(schedule, date_b)?;

    for pos in [pos_a, pos_b] {
        if slot(&schedule.entries[pos], kind).assignee().is_none() {
            return Err(EngineError::SwapInvalid("slot is not assigned"));
        }
    }

    let before = audit::audit(engine, schedule).len();
    exchange(schedule, pos_a, pos_b, kind);

    if audit::audit(engine, schedule).len() > before {
        exchange(schedule, pos_a, pos_b, kind); // rollback
        return Err(EngineError::SwapInvalid("introduces a constraint violation"));
    }
    Ok(())
}

fn position(schedule: &Schedule, date: NaiveDate) -> Result<usize, EngineError> {
    schedule
        .entries
        .iter()
        .position(|e| e.date == date)
        .ok_or(EngineError::UnknownDate(date))
}

fn slot(entry: &AssignmentRecord, kind: SlotKind) -> &SlotOutcome {
    match kind {
        SlotKind::Day => &entry.day_shift,
        SlotKind::Night => &entry.night_shift,
    }
}

fn slot_mut(entry: &mut AssignmentRecord, kind: SlotKind) -> &mut SlotOutcome {
    match kind {
        SlotKind::Day => &mut entry.day_shift,
        SlotKind::Night => &mut entry.night_shift,
    }
}

fn exchange(schedule: &mut Schedule, a: usize, b: usize, kind: SlotKind) {
    let tmp = slot(&schedule.entries[a], kind).clone();
    *slot_mut(&mut schedule.entries[a], kind) = slot(&schedule.entries[b], kind).clone();
    *slot_mut(&mut schedule.entries[b], kind) = tmp;
}
