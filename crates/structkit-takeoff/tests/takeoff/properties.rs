use proptest::prelude::*;
use structkit_designer::{builtin_templates, PlannerConfig, PlannerKind, RoofStyle, RoomSpec};
use structkit_takeoff::{calculate, PriceBook};

fn roof_style() -> impl Strategy<Value = RoofStyle> {
    prop_oneof![
        Just(RoofStyle::Gable),
        Just(RoofStyle::Hip),
        Just(RoofStyle::Gambrel),
        Just(RoofStyle::Flat),
    ]
}

#[test]
fn test_templates_are_deterministic() {
    let book = PriceBook::default();
    for template in builtin_templates() {
        let config = template.instantiate();
        assert_eq!(calculate(&config, &book), calculate(&config, &book), "{}", template.id);
    }
}

proptest! {
    #[test]
    fn prop_garage_bill_is_well_formed(
        width in 8.0f64..60.0,
        length in 8.0f64..60.0,
        height in 7.0f64..16.0,
        pitch in 0.0f64..14.0,
        style in roof_style(),
        electrical in any::<bool>(),
        insulation in any::<bool>(),
    ) {
        let mut room = RoomSpec::new(width, length, height);
        room.roof_style = style;
        room.roof_pitch = pitch;
        room.include_electrical = electrical;
        room.include_insulation = insulation;
        let config = PlannerConfig::new(PlannerKind::Garage, room);
        let bill = calculate(&config, &PriceBook::default());

        prop_assert!(bill.line_items.iter().all(|l| l.quantity > 0));
        let categories = bill.categories();
        prop_assert!(categories.windows(2).all(|w| w[0] < w[1]));

        let sum: f64 = bill.subtotals().iter().map(|s| s.subtotal).sum();
        prop_assert!((bill.total() - sum).abs() < 0.005);
        prop_assert_eq!(bill, calculate(&config, &PriceBook::default()));
    }

    #[test]
    fn prop_bigger_slab_never_needs_less_concrete(width in 8.0f64..60.0, extra in 0.0f64..20.0) {
        let book = PriceBook::default();
        let small = PlannerConfig::new(PlannerKind::Garage, RoomSpec::new(width, 20.0, 9.0));
        let large = PlannerConfig::new(PlannerKind::Garage, RoomSpec::new(width + extra, 20.0, 9.0));
        let concrete = |c: &PlannerConfig| calculate(c, &book).find("concrete-yd").map(|l| l.quantity);
        prop_assert!(concrete(&large) >= concrete(&small));
    }
}
