mod assignment;
mod audit;
mod constraints;
mod mutate;
mod state;
mod types;

pub use types::{EngineError, EngineOptions, ExhaustionPolicy, Violation, ViolationKind};

use crate::calendar::HolidaySet;
use crate::model::{Roster, Schedule, SlotKind};
use chrono::NaiveDate;
use rand::Rng;

/// Moteur d'affectation : effectif, fériés et options figés pour la durée
/// d'une exécution. Tout l'état mutable vit dans l'exécution elle-même.
#[derive(Debug)]
pub struct Engine {
    roster: Roster,
    holidays: HolidaySet,
    opts: EngineOptions,
}

impl Engine {
    pub fn new(roster: Roster, holidays: HolidaySet, opts: EngineOptions) -> Self {
        Self {
            roster,
            holidays,
            opts,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }

    pub fn options(&self) -> EngineOptions {
        self.opts
    }

    /// Génère un tableau pour la période inclusive `[start, end]`.
    ///
    /// Échoue d'emblée (sans travail partiel) si la période est inversée ou
    /// si l'effectif est vide. La source d'aléa est injectée : un appelant
    /// qui veut un résultat reproductible passe un générateur initialisé
    /// (`StdRng::seed_from_u64`).
    pub fn generate<R: Rng>(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        rng: &mut R,
    ) -> Result<Schedule, EngineError> {
        assignment::run(self, start, end, rng)
    }

    /// Revalide un tableau (généré ou retouché) contre les contraintes.
    pub fn audit(&self, schedule: &Schedule) -> Vec<Violation> {
        audit::audit(self, schedule)
    }

    /// Échange un créneau entre deux jours, avec annulation si l'échange
    /// introduit une violation.
    pub fn swap(
        &self,
        schedule: &mut Schedule,
        date_a: NaiveDate,
        date_b: NaiveDate,
        kind: SlotKind,
    ) -> Result<(), EngineError> {
        mutate::swap(self, schedule, date_a, date_b, kind)
    }
}
