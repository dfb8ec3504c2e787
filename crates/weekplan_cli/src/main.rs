//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `weekplan_core` linkage.
//! - Run one add/lay-out cycle against the in-memory adapter for quick
//!   local sanity checks.

use chrono::{Days, Local};
use weekplan_core::{CalendarService, ColorTag, MemoryStorage, NewEntryRequest, TimeOfDay};

fn main() {
    println!("weekplan_core version={}", weekplan_core::core_version());

    let service = CalendarService::new(MemoryStorage::new());
    let now = Local::now().naive_local();
    let Some(tomorrow) = now.date().checked_add_days(Days::new(1)) else {
        eprintln!("calendar overflow computing tomorrow's date");
        return;
    };
    let (Some(start), Some(end)) = (TimeOfDay::new(12, 0), TimeOfDay::new(13, 0)) else {
        return;
    };

    let request = NewEntryRequest {
        plan_id: "demo".to_string(),
        title: "Lunch".to_string(),
        date: tomorrow,
        start_time: start,
        end_time: end,
        color: ColorTag::Blue,
        sub_label: None,
    };

    match service.add_entry(&request) {
        Ok(id) => println!("added entry id={id}"),
        Err(err) => {
            eprintln!("add failed: {err}");
            return;
        }
    }

    match service.day_view("demo", tomorrow, now) {
        Ok(view) => {
            for block in &view.blocks {
                println!(
                    "block title={} top={} height={}",
                    block.title, block.top, block.height
                );
            }
        }
        Err(err) => eprintln!("day view failed: {err}"),
    }
}
