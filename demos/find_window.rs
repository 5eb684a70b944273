//! Example demonstrating shared-window planning for a small crew.
//!
//! Run with: `cargo run --example find_window`

use std::collections::HashMap;

use rendezvous::{plan, BusySchedule, TimePeriod, WorkingHours};

fn main() {
    let mut schedule: BusySchedule = HashMap::new();
    schedule.insert(
        "ursula".into(),
        vec![
            TimePeriod::new("ПН 12:00+5", "ПН 17:00+5"),
            TimePeriod::new("ВТ 13:00+5", "ВТ 16:00+5"),
        ],
    );
    schedule.insert(
        "mike".into(),
        vec![TimePeriod::new("ПН 09:00+5", "ПН 14:00+5")],
    );
    schedule.insert(
        "sally".into(),
        vec![
            TimePeriod::new("ВТ 11:30+5", "ВТ 13:30+5"),
            TimePeriod::new("СР 10:00+5", "СР 11:00+5"),
        ],
    );
    let working_hours = WorkingHours::new("10:00+5", "18:00+5");

    println!("=== Shared Window Planner ===\n");
    println!("Crew of {} against bank hours 10:00-18:00 (+5)", schedule.len());

    match plan(&schedule, 90, &working_hours) {
        Ok(mut moment) => {
            if moment.exists() {
                println!("\nEarliest 90-minute window: {}", moment.format("%DD %HH:%MM"));

                println!("\n--- Later alternatives ---");
                let mut shown = 0;
                while shown < 5 && moment.try_later() {
                    println!("Also possible: {}", moment.format("%DD %HH:%MM"));
                    shown += 1;
                }
            } else {
                println!("\nNo shared 90-minute window within the three days");
            }
        }
        Err(e) => println!("Invalid schedule: {e}"),
    }
}
