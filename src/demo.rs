//! Demo rosters and forecasts.
//!
//! `sample_roster` and `sample_forecast` mirror a small quick-service
//! store. The `random_*` generators build seeded inputs of arbitrary
//! size for stress runs and invariant checks; the same seed always gives
//! the same data.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::models::{Day, Employee, ForecastEntry, Role};

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bob", "Charlie", "Dana", "Eve", "Frank", "Grace", "Hiro", "Ines", "Jonas",
];

const LAST_NAMES: &[&str] = &[
    "Johnson", "Smith", "Davis", "Lee", "Garcia", "Novak", "Okafor", "Tanaka",
];

/// Four-person store roster: one manager and three crew.
pub fn sample_roster() -> Vec<Employee> {
    vec![
        Employee::new("emp-1", Role::Manager)
            .with_name("Alice Johnson")
            .with_max_hours(40.0)
            .with_rate(28.0)
            .with_availability(Day::Monday, 8, 16),
        Employee::new("emp-2", Role::Crew)
            .with_name("Bob Smith")
            .with_max_hours(30.0)
            .with_rate(15.0)
            .with_availability(Day::Monday, 10, 18),
        Employee::new("emp-3", Role::Crew)
            .with_name("Charlie Davis")
            .with_max_hours(20.0)
            .with_rate(15.0)
            .with_availability(Day::Monday, 12, 20),
        Employee::new("emp-4", Role::Crew)
            .with_name("Dana Lee")
            .with_max_hours(25.0)
            .with_rate(16.0)
            .with_availability(Day::Monday, 6, 14),
    ]
}

/// Two staff every hour from 08:00 to 22:00, all week.
pub fn sample_forecast() -> Vec<ForecastEntry> {
    Day::ALL
        .iter()
        .flat_map(|&day| (8..22).map(move |hour| ForecastEntry::new(day, hour, 2).with_sales(500.0)))
        .collect()
}

/// Seeded random roster of `size` employees.
///
/// Each employee gets one to three windows per available day, drawn from
/// whole-block and partial-block shapes so that some slots are fillable
/// and some are not.
pub fn random_roster(seed: u64, size: usize) -> Vec<Employee> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size)
        .map(|i| {
            let role = *Role::ALL.choose(&mut rng).unwrap_or(&Role::Crew);
            let first = FIRST_NAMES.choose(&mut rng).unwrap_or(&"Sam");
            let last = LAST_NAMES.choose(&mut rng).unwrap_or(&"Doe");
            let mut employee = Employee::new(format!("emp-{i}"), role)
                .with_name(format!("{first} {last}"))
                .with_max_hours(f64::from(rng.random_range(0..=6u32) * 8))
                .with_rate(f64::from(rng.random_range(1200..3200u32)) / 100.0);

            for day in Day::ALL {
                if !rng.random_bool(0.6) {
                    continue;
                }
                for _ in 0..rng.random_range(1..=3) {
                    let start = rng.random_range(0..20u32);
                    let end = rng.random_range(start + 1..=24);
                    employee = employee.with_availability(day, start, end);
                }
            }
            employee
        })
        .collect()
}

/// Seeded random weekly forecast; some days may be missing or quiet.
pub fn random_forecast(seed: u64) -> Vec<ForecastEntry> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut forecast = Vec::new();
    for day in Day::ALL {
        if rng.random_bool(0.15) {
            continue;
        }
        let peak = rng.random_range(0..=4u32);
        for hour in 6..23 {
            let staff = rng.random_range(0..=peak);
            let sales = f64::from(staff) * rng.random_range(100.0..300.0);
            forecast.push(ForecastEntry::new(day, hour, staff).with_sales(sales));
        }
    }
    forecast
}
