use intervu_core::{AddOn, AddOns, Difficulty, Duration};

/// Base price per session length, in cents
pub fn base_price_cents(duration: Duration) -> i32 {
    match duration {
        Duration::Min15 => 1_000,
        Duration::Min30 => 2_000,
        Duration::Min45 => 3_500,
        Duration::Min60 => 5_000,
    }
}

/// Multiplier applied to the base price per difficulty level
pub fn difficulty_multiplier(difficulty: Difficulty) -> f64 {
    match difficulty {
        Difficulty::Junior => 1.0,
        Difficulty::Mid => 1.2,
        Difficulty::Senior => 1.5,
        Difficulty::Lead => 1.8,
    }
}

/// Fixed surcharge per add-on, in cents
pub fn surcharge_cents(add_on: AddOn) -> i32 {
    match add_on {
        AddOn::AiFollowUp => 500,
        AddOn::PerformanceReport => 1_000,
        AddOn::VideoRecording => 800,
        AddOn::ExpertReview => 2_500,
    }
}

/// Total price in cents: base price scaled by the difficulty multiplier,
/// plus a fixed surcharge for every enabled add-on. Pure and deterministic;
/// callers with an incomplete configuration treat the price as zero instead
/// of calling this.
pub fn calculate_total(duration: Duration, difficulty: Difficulty, add_ons: &AddOns) -> i32 {
    let base = base_price_cents(duration);
    let mut total = (f64::from(base) * difficulty_multiplier(difficulty)).round() as i32;

    for add_on in AddOn::ALL {
        if add_ons.is_enabled(add_on) {
            total += surcharge_cents(add_on);
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use intervu_core::Difficulty::*;

    #[test]
    fn total_without_addons_is_base_times_multiplier() {
        for duration in Duration::ALL {
            for difficulty in [Junior, Mid, Senior, Lead] {
                let expected = (f64::from(base_price_cents(duration))
                    * difficulty_multiplier(difficulty))
                .round() as i32;
                assert_eq!(
                    calculate_total(duration, difficulty, &AddOns::default()),
                    expected
                );
            }
        }
    }

    #[test]
    fn each_addon_adds_exactly_its_surcharge() {
        // Additive with no interaction terms, regardless of what else is on.
        let mut add_ons = AddOns::default();
        let mut expected = calculate_total(Duration::Min60, Lead, &add_ons);

        for add_on in AddOn::ALL {
            add_ons.set(add_on, true);
            expected += surcharge_cents(add_on);
            assert_eq!(calculate_total(Duration::Min60, Lead, &add_ons), expected);
        }
    }

    #[test]
    fn mid_forty_five_minutes_is_forty_two_dollars() {
        let total = calculate_total(Duration::Min45, Mid, &AddOns::default());
        assert_eq!(total, 4_200);
    }

    #[test]
    fn ai_follow_up_brings_it_to_forty_seven() {
        let add_ons = AddOns {
            ai_follow_up: true,
            ..AddOns::default()
        };
        assert_eq!(calculate_total(Duration::Min45, Mid, &add_ons), 4_700);
    }

    #[test]
    fn junior_multiplier_is_identity() {
        assert_eq!(
            calculate_total(Duration::Min15, Junior, &AddOns::default()),
            base_price_cents(Duration::Min15)
        );
    }
}
