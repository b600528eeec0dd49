use super::{state::EngineState, EngineOptions};
use crate::model::Person;

/// Règles d'acceptation d'un candidat pour une garde de jour, évaluées sur
/// l'état tel qu'il est juste avant l'affectation du créneau :
/// - pas deux gardes de jour consécutives pour la même personne ;
/// - plafond de gardes de jour par personne non atteint.
///
/// L'exclusivité jour/nuit d'un même jour est contrôlée au remplissage de la
/// nuit, le créneau de jour étant toujours pourvu en premier.
pub(super) fn day_slot_ok(candidate: &Person, state: &EngineState, opts: EngineOptions) -> bool {
    if state.last_day_shift.as_deref() == Some(candidate.name.as_str()) {
        return false;
    }
    if state.day_count(&candidate.name) >= opts.day_shift_cap {
        return false;
    }
    true
}

/// Règles d'acceptation d'un candidat pour une garde de nuit :
/// - pas deux nuits consécutives pour la même personne ;
/// - personne non inéligible aux nuits ;
/// - pas la personne qui tient déjà la garde de jour du même jour.
pub(super) fn night_slot_ok(
    candidate: &Person,
    state: &EngineState,
    same_day_day_shift: Option<&str>,
) -> bool {
    if state.last_night_shift.as_deref() == Some(candidate.name.as_str()) {
        return false;
    }
    if !candidate.night_eligible() {
        return false;
    }
    if same_day_day_shift == Some(candidate.name.as_str()) {
        return false;
    }
    true
}
