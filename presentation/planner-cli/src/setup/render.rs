use std::fmt::Write;

use business::domain::ingredient::formatting::format_amount;
use business::domain::shopping::category::CategoryGroup;
use business::domain::shopping::model::{DemandLine, GroupDemand, MultiDayPurchasePlan};

fn push_line(out: &mut String, line: &DemandLine) {
    let _ = write!(out, "  - {} {}", format_amount(line.amount, &line.unit), line.name());
    if !line.note.trim().is_empty() {
        let _ = write!(out, " ({})", line.note.trim());
    }
    out.push('\n');
}

pub fn demand_text(lines: &[DemandLine]) -> String {
    let mut out = String::new();
    for line in lines {
        push_line(&mut out, line);
    }
    out
}

pub fn categories_text(groups: &[CategoryGroup]) -> String {
    let mut out = String::new();
    for group in groups {
        let _ = writeln!(out, "{}", group.title);
        for line in &group.lines {
            push_line(&mut out, line);
        }
    }
    out
}

pub fn groups_text(groups: &[GroupDemand]) -> String {
    let mut out = String::new();
    for group in groups {
        let _ = writeln!(
            out,
            "{} ({} participants, {} guests)",
            group.group, group.participant_count, group.guest_count
        );
        for line in &group.lines {
            push_line(&mut out, line);
        }
    }
    out
}

pub fn plan_text(plan: &MultiDayPurchasePlan) -> String {
    let mut out = String::new();
    for (date, day) in &plan.days {
        let _ = writeln!(out, "{}", date.format("%Y-%m-%d"));
        for line in &day.lines {
            push_line(&mut out, line);
        }
    }
    out
}
