use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Classification d'un jour calendaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayClass {
    Ordinary,
    Weekend,
    Holiday,
}

impl std::fmt::Display for DayClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DayClass::Ordinary => "ordinary",
            DayClass::Weekend => "weekend",
            DayClass::Holiday => "holiday",
        };
        f.write_str(s)
    }
}

/// Spécification dérivée d'un jour : classification + créneaux requis.
///
/// Recalculée à chaque exécution, jamais persistée.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySpec {
    pub date: NaiveDate,
    pub class: DayClass,
    pub requires_day_shift: bool,
    /// Toujours vrai : chaque jour exige exactement une garde de nuit.
    pub requires_night_shift: bool,
}

/// Ensemble de jours fériés désignés (insertion idempotente).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidaySet(BTreeSet<NaiveDate>);

impl HolidaySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insère une date ; renvoie `false` si elle était déjà présente.
    pub fn insert(&mut self, date: NaiveDate) -> bool {
        self.0.insert(date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.0.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NaiveDate> {
        self.0.iter()
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Libellé canonique d'une date (ISO-8601, stable et unique par jour).
pub fn date_label(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Classifie un jour : férié si présent dans `holidays`, sinon week-end
/// (samedi/dimanche), sinon ordinaire. Fonction pure.
pub fn classify(date: NaiveDate, holidays: &HolidaySet) -> DaySpec {
    let class = if holidays.contains(date) {
        DayClass::Holiday
    } else if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
        DayClass::Weekend
    } else {
        DayClass::Ordinary
    };

    DaySpec {
        date,
        class,
        requires_day_shift: class != DayClass::Ordinary,
        requires_night_shift: true,
    }
}
