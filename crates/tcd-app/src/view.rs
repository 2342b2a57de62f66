//! Plain-text renderings of reports and reference data.

use tcd_indices::Lindegaard;
use tcd_reference::{
    LINDEGAARD_NORMAL_UPPER, LINDEGAARD_SEVERE_LOWER, LindegaardGrade, PI_NORMAL, RI_NORMAL,
    ReferenceCatalog,
};
use tcd_report::{COLUMNS, Report};

pub const EMPTY_REPORT_HINT: &str = "No measurements yet. Submit a reading to start the report.";

fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let line = |cells: &[&str]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:<w$}", cell, w = *w))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let rule_cells: Vec<&str> = rule.iter().map(String::as_str).collect();

    let mut out = line(headers);
    out.push('\n');
    out.push_str(&line(&rule_cells));
    out.push('\n');
    for row in rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push_str(&line(&cells));
        out.push('\n');
    }
    out
}

/// The report as an aligned table, or a hint when it is empty.
pub fn render_report_table(report: &Report) -> String {
    if report.is_empty() {
        return format!("{EMPTY_REPORT_HINT}\n");
    }

    let rows: Vec<Vec<String>> = report
        .iter()
        .map(|r| {
            vec![
                r.artery.clone(),
                format!("{}", r.vps_cm_s),
                format!("{}", r.vfd_cm_s),
                format!("{:.2}", r.vm_cm_s),
                format!("{:.2}", r.pi),
                format!("{:.2}", r.ri),
                match r.lindegaard {
                    Lindegaard::Ratio(ratio) => format!("{ratio:.2}"),
                    Lindegaard::NotApplicable => Lindegaard::NOT_APPLICABLE_LABEL.to_string(),
                },
                r.status.clone(),
            ]
        })
        .collect();

    render_table(&COLUMNS, &rows)
}

/// Horizontal bar chart of Vm per artery, scaled to `width` characters.
pub fn render_vm_chart(report: &Report, width: usize) -> String {
    let series = report.vm_series();
    if series.is_empty() {
        return format!("{EMPTY_REPORT_HINT}\n");
    }

    let label_width = series
        .iter()
        .map(|(artery, _)| artery.chars().count())
        .max()
        .unwrap_or(0);
    let max_vm = series
        .iter()
        .map(|(_, vm)| *vm)
        .fold(0.0_f64, f64::max);

    let mut out = String::from("Vm comparison (cm/s)\n");
    for (artery, vm) in series {
        let filled = if max_vm > 0.0 {
            ((vm / max_vm) * width as f64).round() as usize
        } else {
            0
        };
        out.push_str(&format!(
            "{:<label_width$}  {}{} {:.2}\n",
            artery,
            "#".repeat(filled),
            " ".repeat(width.saturating_sub(filled)),
            vm
        ));
    }
    out
}

/// Reference velocities per artery followed by the index normality notes.
pub fn render_references(catalog: &ReferenceCatalog) -> String {
    let rows: Vec<Vec<String>> = catalog
        .entries()
        .iter()
        .map(|e| {
            vec![
                e.id.clone(),
                e.group.label().to_string(),
                format!("{}", e.vps_cm_s),
                format!("{}", e.vfd_cm_s),
                format!("{}", e.vm_cm_s),
            ]
        })
        .collect();

    let mut out = String::from("Average reference values (cm/s):\n");
    out.push_str(&render_table(&["Artery", "Group", "VPS", "VFD", "Vm"], &rows));
    out.push_str("\nNormal ranges:\n");
    out.push_str(&format!(
        "  PI (pulsatility): {} - {}\n",
        PI_NORMAL.low, PI_NORMAL.high
    ));
    out.push_str(&format!(
        "  RI (resistance):  {} - {}\n",
        RI_NORMAL.low, RI_NORMAL.high
    ));
    out.push_str(&format!(
        "  Lindegaard: < {:.1} {}, {:.0}-{:.0} {}, > {:.0} {}\n",
        LINDEGAARD_NORMAL_UPPER,
        LindegaardGrade::Normal.label(),
        LINDEGAARD_NORMAL_UPPER,
        LINDEGAARD_SEVERE_LOWER,
        LindegaardGrade::MildModerateVasospasm.label(),
        LINDEGAARD_SEVERE_LOWER,
        LindegaardGrade::SevereVasospasm.label(),
    ));
    out
}

/// Per-artery notes: PI/RI outside their normal ranges and the Lindegaard
/// grade for MCA rows. Empty when the report is empty.
pub fn render_index_notes(report: &Report) -> String {
    let mut out = String::new();
    for r in report {
        let mut notes = Vec::new();
        if !PI_NORMAL.contains(r.pi) {
            notes.push(format!(
                "PI {:.2} outside {}-{}",
                r.pi, PI_NORMAL.low, PI_NORMAL.high
            ));
        }
        if !RI_NORMAL.contains(r.ri) {
            notes.push(format!(
                "RI {:.2} outside {}-{}",
                r.ri, RI_NORMAL.low, RI_NORMAL.high
            ));
        }
        if let Some(ratio) = r.lindegaard.ratio() {
            notes.push(format!(
                "Lindegaard {:.2}: {}",
                ratio,
                LindegaardGrade::from_ratio(ratio).label()
            ));
        }
        if !notes.is_empty() {
            out.push_str(&format!("  {}: {}\n", r.artery, notes.join("; ")));
        }
    }
    out
}

/// Artery ids matching `query` (all when empty), with display names.
pub fn render_artery_list(catalog: &ReferenceCatalog, query: &str) -> String {
    let matches = catalog.search(query);
    if matches.is_empty() {
        return format!("No arteries match '{}'\n", query);
    }

    let mut out = String::new();
    for e in matches {
        out.push_str(&format!("  {} - {}", e.id, e.display_name));
        if !e.aliases.is_empty() {
            out.push_str(&format!(" (aliases: {})", e.aliases.join(", ")));
        }
        out.push('\n');
    }
    out
}
