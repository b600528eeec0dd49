use crate::model::SlotKind;
use chrono::NaiveDate;
use thiserror::Error;

/// Comportement quand la limite de tirages est atteinte pour un créneau.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExhaustionPolicy {
    /// Consigne `Unfilled` et continue (défaut).
    RecordUnfilled,
    /// Interrompt l'exécution avec `SlotExhausted`.
    Fail,
}

/// Options du moteur d'affectation
#[derive(Debug, Clone, Copy)]
pub struct EngineOptions {
    /// Nombre maximal de gardes de jour par personne sur une exécution.
    pub day_shift_cap: u32,
    /// Limite de tirages aléatoires par créneau.
    pub max_draws: u32,
    pub on_exhausted: ExhaustionPolicy,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            day_shift_cap: 1,
            max_draws: 100,
            on_exhausted: ExhaustionPolicy::RecordUnfilled,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// Même personne sur deux créneaux consécutifs du même type.
    RepeatAssignee,
    /// Jour et nuit du même jour tenus par la même personne.
    BothShiftsSameDay,
    /// Garde de nuit tenue par une personne inéligible.
    IneligibleNight,
    /// Plafond de gardes de jour dépassé.
    CapExceeded,
    /// Créneau incohérent avec la classification du jour.
    RequirementMismatch,
    /// Affectation à un nom absent de l'effectif.
    UnknownPerson,
}

#[derive(Debug, Clone)]
pub struct Violation {
    pub date: NaiveDate,
    pub slot: SlotKind,
    pub person: Option<String>,
    pub kind: ViolationKind,
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid date range: end must not precede start")]
    InvalidRange,
    #[error("empty roster: no slot can ever be filled")]
    EmptyRoster,
    #[error("no valid candidate for {slot} shift on {date} after {attempts} draws")]
    SlotExhausted {
        slot: SlotKind,
        date: NaiveDate,
        attempts: u32,
    },
    #[error("no schedule entry for date: {0}")]
    UnknownDate(NaiveDate),
    #[error("swap invalid: {0}")]
    SwapInvalid(&'static str),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
