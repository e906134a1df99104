//! Text and CSV views of the site data, as printed by the CLI.

use crate::core::calculator::{CalculatorOutcome, Selection};
use crate::core::links::ContactLinks;
use crate::domain::model::{
    AboutInfo, Activity, City, ComparisonCell, ComparisonTable, FaqEntry, Plan, SubmissionReceipt,
};
use crate::utils::error::{Result, SiteError};
use serde::Serialize;
use std::fmt::Write as _;
use std::io;

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

/// Runs a CSV writer against an in-memory buffer and returns the text.
pub fn csv_to_string<F>(write: F) -> Result<String>
where
    F: FnOnce(&mut Vec<u8>) -> Result<()>,
{
    let mut buffer = Vec::new();
    write(&mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|e| SiteError::IoError(io::Error::new(io::ErrorKind::InvalidData, e)))
}

pub fn plans_text(plans: &[Plan]) -> String {
    let mut out = String::new();
    for plan in plans {
        let badge = if plan.highlighted { "  [MAIS POPULAR]" } else { "" };
        let _ = writeln!(out, "{}{}", plan.name, badge);
        let _ = writeln!(out, "  {} Mega  ·  R$ {}/mês", plan.speed_mbps, plan.price);
        for feature in &plan.features {
            let _ = writeln!(out, "  - {}", feature);
        }
        out.push('\n');
    }
    out
}

pub fn write_plans_csv<W: io::Write>(plans: &[Plan], writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["name", "speed_mbps", "price", "highlighted", "features"])?;
    for plan in plans {
        csv.write_record([
            plan.name.clone(),
            plan.speed_mbps.to_string(),
            plan.price.to_string(),
            plan.highlighted.to_string(),
            plan.features.join("; "),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

pub fn activities_text(activities: &[Activity]) -> String {
    let mut out = String::new();
    for activity in activities {
        let _ = writeln!(
            out,
            "{:<12} {:>5} Mbps  {}",
            activity.id, activity.bandwidth_weight, activity.label
        );
    }
    out
}

pub fn comparison_text(table: &ComparisonTable) -> String {
    let feature_width = table
        .rows
        .iter()
        .map(|row| row.feature.chars().count())
        .chain(std::iter::once("Recurso".len()))
        .max()
        .unwrap_or(0);

    let column_widths: Vec<usize> = table
        .columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            table
                .rows
                .iter()
                .map(|row| row.cells[i].to_string().chars().count())
                .chain(std::iter::once(column.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    out.push_str(&pad("Recurso", feature_width));
    for (column, width) in table.columns.iter().zip(&column_widths) {
        out.push_str(" | ");
        out.push_str(&pad(column, *width));
    }
    out.push('\n');

    for row in &table.rows {
        out.push_str(&pad(&row.feature, feature_width));
        for (cell, width) in row.cells.iter().zip(&column_widths) {
            out.push_str(" | ");
            out.push_str(&pad(&cell.to_string(), *width));
        }
        out.push('\n');
    }
    out
}

pub fn write_comparison_csv<W: io::Write>(table: &ComparisonTable, writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);

    let mut header = vec!["feature".to_string()];
    header.extend(table.columns.iter().cloned());
    csv.write_record(&header)?;

    for row in &table.rows {
        let mut record = vec![row.feature.clone()];
        record.extend(row.cells.iter().map(|cell| match cell {
            ComparisonCell::Included(included) => included.to_string(),
            ComparisonCell::Text(text) => text.clone(),
        }));
        csv.write_record(&record)?;
    }
    csv.flush()?;
    Ok(())
}

pub fn outcome_text(selection: &Selection, outcome: &CalculatorOutcome<'_>) -> String {
    let mut out = String::new();
    match outcome {
        CalculatorOutcome::Placeholder => {
            out.push_str(
                "Selecione suas atividades e quantidade de dispositivos para ver o plano ideal para você\n",
            );
        }
        CalculatorOutcome::Recommended { required_mbps, plan } => {
            let activities: Vec<&str> = selection.activity_ids().iter().map(String::as_str).collect();
            let _ = writeln!(
                out,
                "Atividades: {}  ·  Dispositivos: {}",
                activities.join(", "),
                selection.device_count()
            );
            let _ = writeln!(out, "Velocidade recomendada: {} MEGA", required_mbps);
            let _ = writeln!(out, "Plano recomendado para você: {}", plan.name);
            let _ = writeln!(out, "  {} MEGA  ·  R$ {}/mês", plan.speed_mbps, plan.price);
            for feature in &plan.features {
                let _ = writeln!(out, "  - {}", feature);
            }
        }
    }
    out
}

pub fn coverage_text(city: &City) -> String {
    let mut out = format!("Cobertura em {}\n", city.name);
    for neighborhood in &city.neighborhoods {
        let _ = writeln!(out, "  - {}", neighborhood);
    }
    out
}

pub fn faq_text(entries: &[FaqEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(out, "{}\n  {}\n", entry.question, entry.answer);
    }
    out
}

pub fn about_text(about: &AboutInfo) -> String {
    let mut out = String::new();
    if !about.summary.is_empty() {
        let _ = writeln!(out, "{}\n", about.summary);
    }
    for paragraph in &about.history {
        let _ = writeln!(out, "{}\n", paragraph);
    }
    for pillar in &about.pillars {
        let _ = writeln!(out, "{}\n  {}\n", pillar.title, pillar.description);
    }
    if !about.stats.is_empty() {
        let stats: Vec<String> = about
            .stats
            .iter()
            .map(|stat| format!("{} {}", stat.value, stat.label))
            .collect();
        let _ = writeln!(out, "{}\n", stats.join("  ·  "));
    }
    if !about.benefits.is_empty() {
        out.push_str("Por que escolher a MundialNet?\n");
        for benefit in &about.benefits {
            let _ = writeln!(out, "  - {}: {}", benefit.title, benefit.description);
        }
    }
    out
}

pub fn receipt_text(receipt: &SubmissionReceipt) -> String {
    let mut out = format!("{}\n{}\nProtocolo: {}\n", receipt.title, receipt.description, receipt.reference);
    if let Some(redirect) = &receipt.redirect {
        let _ = writeln!(out, "Voltar para: {}", redirect);
    }
    out
}

pub fn links_text(links: &ContactLinks) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "WhatsApp:  {}", links.whatsapp);
    let _ = writeln!(out, "Telefone:  {} ({})", links.phone_display, links.phone);
    let _ = writeln!(out, "E-mail:    {}", links.email);
    if let Some(facebook) = &links.facebook {
        let _ = writeln!(out, "Facebook:  {}", facebook);
    }
    if let Some(instagram) = &links.instagram {
        let _ = writeln!(out, "Instagram: {}", instagram);
    }
    out
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}
