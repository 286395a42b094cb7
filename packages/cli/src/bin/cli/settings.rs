use colored::*;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};

use payday_settings::{PayFrequency, TimeOfDay, UserSettings};
use payday_storage::FileStore;

pub fn show_settings(store: &FileStore) -> Result<(), Box<dyn std::error::Error>> {
    let settings = UserSettings::load(store);

    println!("{}", "Payday settings".blue().bold());
    println!();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec!["Setting", "Value"]);
    table.add_row(vec!["Currency".to_string(), settings.currency.clone()]);
    table.add_row(vec!["Rate".to_string(), settings.rate.to_string()]);
    table.add_row(vec![
        "Frequency".to_string(),
        format!("per {}", settings.frequency.as_str()),
    ]);
    table.add_row(vec![
        "Start time".to_string(),
        settings.start_time.to_string(),
    ]);
    table.add_row(vec!["End time".to_string(), settings.end_time.to_string()]);

    println!("{}", table);
    println!("{}", format!("Store: {}", store.path().display()).dimmed());

    Ok(())
}

pub fn set_settings(
    store: &mut FileStore,
    currency: Option<String>,
    rate: Option<f64>,
    frequency: Option<PayFrequency>,
    start: Option<TimeOfDay>,
    end: Option<TimeOfDay>,
) -> Result<(), Box<dyn std::error::Error>> {
    if currency.is_none()
        && rate.is_none()
        && frequency.is_none()
        && start.is_none()
        && end.is_none()
    {
        println!("{}", "Nothing to update".yellow());
        println!(
            "{}",
            "Pass at least one of --currency, --rate, --frequency, --start, --end".dimmed()
        );
        return Ok(());
    }

    let mut settings = UserSettings::load(store);
    if let Some(currency) = currency {
        settings.currency = currency;
    }
    if let Some(rate) = rate {
        settings.rate = rate;
    }
    if let Some(frequency) = frequency {
        settings.frequency = frequency;
    }
    if let Some(start) = start {
        settings.start_time = start;
    }
    if let Some(end) = end {
        settings.end_time = end;
    }
    settings.save(store)?;

    println!("{}", "Settings saved".green());
    Ok(())
}

pub fn reset_settings(store: &mut FileStore) -> Result<(), Box<dyn std::error::Error>> {
    UserSettings::default().save(store)?;
    println!("{}", "Settings reset to defaults".green());
    Ok(())
}
