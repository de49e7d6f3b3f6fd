//! Plain-text rendering of controller state for the terminal.

use models::{BodyStyle, Gym, Member};

use crate::notification::Notification;

const HEADERS: [&str; 8] = [
    "#", "Gym", "CPF", "Name", "Weight", "Height", "Age", "Body style",
];

fn member_row(index: usize, member: &Member) -> [String; 8] {
    [
        (index + 1).to_string(),
        member.gym.clone().unwrap_or_else(|| member.gym_id.clone()),
        member.tax_id.clone(),
        member.name.clone(),
        member.weight.clone().unwrap_or_default(),
        member.height.clone().unwrap_or_default(),
        member.age.clone().unwrap_or_default(),
        body_style_cell(member),
    ]
}

/// Label for known styles, the raw value otherwise.
fn body_style_cell(member: &Member) -> String {
    match member.body_style() {
        Some(BodyStyle::Other(_)) | None => member.style.clone().unwrap_or_default(),
        Some(style) => style.label().to_string(),
    }
}

/// Renders members as an aligned table with a 1-based row number.
pub fn member_table(members: &[&Member]) -> String {
    if members.is_empty() {
        return "No members to show.".to_string();
    }

    let rows: Vec<[String; 8]> = members
        .iter()
        .enumerate()
        .map(|(index, member)| member_row(index, member))
        .collect();

    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_line(HEADERS.iter().copied(), &widths));
    lines.push(
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in &rows {
        lines.push(format_line(row.iter().map(String::as_str), &widths));
    }

    lines.join("\n")
}

fn format_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, width)| {
            let padding = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(padding))
        })
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

pub fn gym_list(gyms: &[Gym]) -> String {
    if gyms.is_empty() {
        return "No gyms available.".to_string();
    }

    gyms.iter()
        .map(|gym| format!("{}  {}", gym.id, gym.name))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn notifications(notifications: &[Notification]) -> String {
    notifications
        .iter()
        .map(Notification::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
