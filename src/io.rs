use crate::model::{EligibilityTag, Person, Schedule};
use anyhow::{bail, Context};
use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import de personnes depuis CSV: header `name[,tags]` — tags séparés
/// par `;`. La déduplication par nom est faite par `Roster::from_people`.
pub fn import_people_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Person>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        if name.is_empty() {
            bail!("invalid people row (empty name)");
        }
        let mut person = Person::new(name);
        if let Some(tags) = rec.get(1) {
            let tags = tags.trim();
            if !tags.is_empty() {
                person.tags = parse_tags(tags);
            }
        }
        out.push(person);
    }
    Ok(out)
}

fn parse_tags(raw: &str) -> std::collections::BTreeSet<EligibilityTag> {
    raw.split(';')
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(parse_tag)
        .collect()
}

/// Tout libellé non reconnu devient un tag libre.
pub fn parse_tag(raw: &str) -> EligibilityTag {
    match raw {
        "night-ineligible" | "night_ineligible" => EligibilityTag::NightShiftIneligible,
        other => EligibilityTag::Custom(other.to_owned()),
    }
}

/// Parse une date au format `YYYY-MM-DD` (fériés, bornes de période).
pub fn parse_date(raw: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .with_context(|| format!("invalid date (expected YYYY-MM-DD): {raw}"))
}

/// Export JSON du tableau (jolie mise en forme)
pub fn export_schedule_json<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(schedule)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV du tableau: header `date,weekday,class,day_shift,night_shift`
pub fn export_schedule_csv<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["date", "weekday", "class", "day_shift", "night_shift"])?;
    for entry in &schedule.entries {
        let date = crate::calendar::date_label(entry.date);
        let weekday = entry.date.format("%a").to_string();
        let class = entry.class.to_string();
        w.write_record([
            date.as_str(),
            weekday.as_str(),
            class.as_str(),
            entry.day_shift.cell(),
            entry.night_shift.cell(),
        ])?;
    }
    w.flush()?;
    Ok(())
}
