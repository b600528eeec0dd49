use crate::calendar::{DayClass, HolidaySet};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Attribut d'éligibilité porté par une personne.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityTag {
    /// Exclut la personne de toute garde de nuit.
    NightShiftIneligible,
    Custom(String),
}

impl std::fmt::Display for EligibilityTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EligibilityTag::NightShiftIneligible => f.write_str("night-ineligible"),
            EligibilityTag::Custom(s) => f.write_str(s),
        }
    }
}

/// Personne (membre du tableau de permanence)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<EligibilityTag>,
}

impl Person {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            tags: BTreeSet::new(),
        }
    }

    pub fn with_tag<N: Into<String>>(name: N, tag: EligibilityTag) -> Self {
        let mut p = Self::new(name);
        p.tags.insert(tag);
        p
    }

    pub fn has_tag(&self, tag: &EligibilityTag) -> bool {
        self.tags.contains(tag)
    }

    pub fn night_eligible(&self) -> bool {
        !self.has_tag(&EligibilityTag::NightShiftIneligible)
    }
}

/// Effectif complet : collection ordonnée, dédupliquée par nom.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    people: Vec<Person>,
}

impl Roster {
    /// Construit l'effectif en ne gardant que la première occurrence de
    /// chaque nom. L'ordre d'arrivée est préservé.
    pub fn from_people(people: Vec<Person>) -> Self {
        let mut seen = BTreeSet::new();
        let people = people
            .into_iter()
            .filter(|p| seen.insert(p.name.clone()))
            .collect();
        Self { people }
    }

    pub fn all(&self) -> &[Person] {
        &self.people
    }

    pub fn by_name<'a>(&'a self, name: &str) -> Option<&'a Person> {
        self.people.iter().find(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

/// Type de créneau : garde de jour ou de nuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    Day,
    Night,
}

impl std::fmt::Display for SlotKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlotKind::Day => f.write_str("day"),
            SlotKind::Night => f.write_str("night"),
        }
    }
}

/// Résultat d'un créneau pour un jour donné.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotOutcome {
    Assigned(String),
    /// Aucun candidat valide dans la limite de tirages.
    Unfilled,
    /// Jour ordinaire : pas de garde de jour à pourvoir.
    NotRequired,
}

impl SlotOutcome {
    pub fn assignee(&self) -> Option<&str> {
        match self {
            SlotOutcome::Assigned(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_unfilled(&self) -> bool {
        matches!(self, SlotOutcome::Unfilled)
    }

    /// Représentation en cellule de tableau ou d'export CSV.
    pub fn cell(&self) -> &str {
        match self {
            SlotOutcome::Assigned(name) => name,
            SlotOutcome::Unfilled => "(unfilled)",
            SlotOutcome::NotRequired => "-",
        }
    }
}

/// Affectations d'un jour. Invariant : `day_shift == NotRequired` si et
/// seulement si le jour est ordinaire ; `night_shift` n'est jamais
/// `NotRequired`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    pub date: NaiveDate,
    pub class: DayClass,
    pub day_shift: SlotOutcome,
    pub night_shift: SlotOutcome,
}

/// Identifiant fort pour Schedule
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduleId(String);

impl ScheduleId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Tableau de permanence produit par le moteur : une entrée par jour de la
/// période, en ordre chronologique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub id: ScheduleId,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub entries: Vec<AssignmentRecord>,
}

impl Schedule {
    pub fn new(start: NaiveDate, end: NaiveDate, entries: Vec<AssignmentRecord>) -> Self {
        Self {
            id: ScheduleId::random(),
            start,
            end,
            entries,
        }
    }

    pub fn entry(&self, date: NaiveDate) -> Option<&AssignmentRecord> {
        self.entries.iter().find(|e| e.date == date)
    }

    /// Nombre de créneaux restés sans affectation.
    pub fn unfilled_slots(&self) -> usize {
        self.entries
            .iter()
            .map(|e| {
                usize::from(e.day_shift.is_unfilled()) + usize::from(e.night_shift.is_unfilled())
            })
            .sum()
    }
}

/// État persisté par la CLI entre deux commandes (effectif, fériés, dernier
/// tableau généré). Le moteur lui-même ne conserve rien entre deux exécutions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Plan {
    #[serde(default)]
    pub people: Vec<Person>,
    #[serde(default)]
    pub holidays: HolidaySet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Schedule>,
}
