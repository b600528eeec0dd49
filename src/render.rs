use crate::calendar::date_label;
use crate::model::Schedule;

/// Permet de customiser le rendu du tableau (texte brut, HTML, etc.).
pub trait ScheduleRenderer {
    fn render(&self, schedule: &Schedule) -> String;
}

/// Tableau texte simple : une ligne par jour, colonnes date / jour de
/// semaine / classe / garde de jour / garde de nuit.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextTable;

impl ScheduleRenderer for TextTable {
    fn render(&self, schedule: &Schedule) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{:<10} | {:<3} | {:<8} | {:<12} | {}\n",
            "date", "wd", "class", "day", "night"
        ));
        for entry in &schedule.entries {
            out.push_str(&format!(
                "{:<10} | {:<3} | {:<8} | {:<12} | {}\n",
                date_label(entry.date),
                entry.date.format("%a").to_string(),
                entry.class.to_string(),
                entry.day_shift.cell(),
                entry.night_shift.cell(),
            ));
        }
        out
    }
}
