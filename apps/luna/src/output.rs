use luna::cards::Card;
use luna::reading::{BodyPlacement, CompatibilityReading, NatalReading};
use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

fn print_heading(title: &str) {
    println!("\n■ {}", title);
}

fn print_listing(rows: &[BodyPlacement]) {
    let width = rows
        .iter()
        .map(|row| row.body.name_ja().chars().count())
        .max()
        .unwrap_or(0);
    for row in rows {
        let name = row.body.name_ja();
        let pad = width - name.chars().count();
        // Full-width names take two columns
        println!("  {}{}  {}", name, "　".repeat(pad), row.text);
    }
}

/// Who the reading is for, the entered name and the two instants
pub fn reading_header(reading: &NatalReading) -> Vec<String> {
    let mut lines = vec![format!("鑑定対象：{}", reading.target_label)];
    if !reading.input.name.is_empty() {
        lines.push(format!("名前：{}", reading.input.name));
    }
    lines.push(format!(
        "出生: {} {:02}:{:02} ({})",
        reading.input.birth_date,
        reading.input.hour,
        reading.input.minute,
        reading.input.timezone.label_ja()
    ));
    lines.push(format!("トランジット: {} 12:00", reading.transit_date));
    lines
}

pub fn print_reading(reading: &NatalReading) {
    for line in reading_header(reading) {
        println!("{}", line);
    }

    print_heading("太陽");
    println!("{}", reading.sun.text);
    println!("{}", reading.sun_message);

    print_heading("月");
    println!("{}", reading.moon.text);
    println!("{}", reading.moon_message);

    print_heading("今日の流れ");
    println!("{}", reading.sun_comparison);
    println!("{}", reading.moon_comparison);
    for major in &reading.major_transits {
        println!("  {}: {}", major.body.name_ja(), major.text);
    }

    print_heading("惑星");
    for note in &reading.planets {
        println!("{}: {}", note.placement.body.name_ja(), note.placement.text);
        println!("  {}", note.message);
    }

    print_heading("ハウス");
    for line in &reading.house_messages {
        println!("{}", line);
    }

    print_heading("ネイタル");
    print_listing(&reading.natal_listing);
    print_heading("トランジット");
    print_listing(&reading.transit_listing);
}

pub fn print_compatibility(reading: &CompatibilityReading) {
    for partner in [&reading.first, &reading.second] {
        println!(
            "{} ({}): 太陽 {} / 月 {}",
            partner.display_name, partner.birth_date, partner.sun, partner.moon
        );
    }
    println!();
    println!("{}", reading.message);
}

pub fn print_card(card: &Card) {
    println!("カード：{}", card.name);
    println!("{}", card.message);
}
