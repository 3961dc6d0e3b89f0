#[cfg(test)]
mod tests {
    use crate::generator::{generate_plan, shift_future_appointments};
    use crate::models::{PlanAppointment, PlanDetail};
    use chrono::{Duration, NaiveDate};
    use proptest::prelude::*;
    use salonify_common::models::{Client, Service};
    use std::collections::HashMap;

    fn base_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
    }

    fn service(id: &str, cost: i64) -> Service {
        Service {
            id: id.to_string(),
            name: format!("Service {}", id),
            category: "Hair".to_string(),
            cost,
            duration_minutes: 30,
            tier_prices: None,
        }
    }

    fn client() -> Client {
        Client {
            id: "c56a4180-65aa-42ec-a945-5fd21dec0538".to_string(),
            name: "Test Client".to_string(),
            email: None,
            phone: None,
        }
    }

    proptest! {
        // The n-th occurrence of a service falls on first_date + n * f * 7
        // days, for every n within the window.
        #[test]
        fn occurrences_follow_the_weekly_step(
            frequency in 1u32..52,
            start_offset in -100i64..300,
            cost in 1i64..100_000,
        ) {
            let first_date = base_date() + Duration::days(start_offset);
            let services = vec![service("a", cost)];
            let mut details = HashMap::new();
            details.insert("a".to_string(), PlanDetail {
                first_date: Some(first_date),
                frequency_weeks: Some(frequency),
            });

            let draft = generate_plan(
                &services, &details, &client(), "s-1", "Robin", None, base_date(), 365,
            );

            let step = i64::from(frequency) * 7;
            for (n, appointment) in draft.appointments.iter().enumerate() {
                let expected = first_date + Duration::days(n as i64 * step);
                prop_assert_eq!(appointment.date, expected);
            }

            // Count matches the window arithmetic exactly.
            let plan_end = base_date() + Duration::days(365);
            let expected_count = if first_date <= plan_end {
                (plan_end - first_date).num_days() / step + 1
            } else {
                0
            };
            prop_assert_eq!(draft.total_yearly_appointments as i64, expected_count);
            prop_assert_eq!(draft.total_cost, expected_count * cost);
        }

        // Merging never double-counts or drops costs, dates come out strictly
        // ascending, and the average times the count recovers the total.
        #[test]
        fn aggregates_are_consistent_under_merging(
            freq_a in 1u32..12,
            freq_b in 1u32..12,
            offset_b in 0i64..60,
            cost_a in 1i64..50_000,
            cost_b in 1i64..50_000,
        ) {
            let services = vec![service("a", cost_a), service("b", cost_b)];
            let mut details = HashMap::new();
            details.insert("a".to_string(), PlanDetail {
                first_date: Some(base_date()),
                frequency_weeks: Some(freq_a),
            });
            details.insert("b".to_string(), PlanDetail {
                first_date: Some(base_date() + Duration::days(offset_b)),
                frequency_weeks: Some(freq_b),
            });

            let draft = generate_plan(
                &services, &details, &client(), "s-1", "Robin", None, base_date(), 365,
            );

            let merged_sum: i64 = draft.appointments.iter().map(|a| a.day_cost()).sum();
            prop_assert_eq!(merged_sum, draft.total_cost);

            for pair in draft.appointments.windows(2) {
                prop_assert!(pair[0].date < pair[1].date);
            }
            for appointment in &draft.appointments {
                prop_assert!(!appointment.services.is_empty());
            }

            if draft.total_yearly_appointments > 0 {
                let recovered =
                    draft.average_appointment_cost * draft.total_yearly_appointments as f64;
                prop_assert!((recovered - draft.total_cost as f64).abs() < 1e-6);
            } else {
                prop_assert_eq!(draft.average_appointment_cost, 0.0);
            }
            prop_assert!(
                (draft.average_monthly_spend - draft.total_cost as f64 / 12.0).abs() < 1e-9
            );
        }

        // Identical inputs produce identical drafts.
        #[test]
        fn generation_is_idempotent(
            frequency in 1u32..26,
            cost in 1i64..10_000,
        ) {
            let services = vec![service("a", cost)];
            let mut details = HashMap::new();
            details.insert("a".to_string(), PlanDetail {
                first_date: Some(base_date()),
                frequency_weeks: Some(frequency),
            });

            let first = generate_plan(
                &services, &details, &client(), "s-1", "Robin", None, base_date(), 365,
            );
            let second = generate_plan(
                &services, &details, &client(), "s-1", "Robin", None, base_date(), 365,
            );
            prop_assert_eq!(first, second);
        }

        // Appointments before the recommended date never move; the rest shift
        // by exactly the booking offset.
        #[test]
        fn offset_propagation_is_a_uniform_suffix_shift(
            day_count in 1usize..20,
            pivot in 0usize..20,
            offset_days in -30i64..30,
        ) {
            let appointments: Vec<PlanAppointment> = (0..day_count)
                .map(|n| PlanAppointment {
                    date: base_date() + Duration::days(n as i64 * 7),
                    services: vec![service("a", 100)],
                })
                .collect();

            let recommended = base_date() + Duration::days(pivot.min(day_count - 1) as i64 * 7);
            let booked = recommended + Duration::days(offset_days);

            let shifted = shift_future_appointments(&appointments, recommended, booked);
            prop_assert_eq!(shifted.len(), appointments.len());

            for (before, after) in appointments.iter().zip(shifted.iter()) {
                if before.date >= recommended {
                    prop_assert_eq!(after.date, before.date + Duration::days(offset_days));
                } else {
                    prop_assert_eq!(after.date, before.date);
                }
                prop_assert_eq!(&after.services, &before.services);
            }
        }
    }
}
