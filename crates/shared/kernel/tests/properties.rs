use proptest::prelude::*;
use wayfarer_kernel::prelude::*;

proptest! {
    #[test]
    fn header_raised_iff_above_fifty(offset in 0.0f64..10_000.0) {
        let raised = HeaderElevation::at(offset, 50.0) == HeaderElevation::Raised;
        prop_assert_eq!(raised, offset > 50.0);
    }

    #[test]
    fn scroll_top_shown_iff_above_three_hundred(offset in 0.0f64..10_000.0) {
        prop_assert_eq!(scroll_top_visible(offset, 300.0), offset > 300.0);
    }

    #[test]
    fn reveal_never_reverts(
        viewport in 200.0f64..2000.0,
        frames in proptest::collection::vec(proptest::collection::vec(-3000.0f64..6000.0, 4), 1..20),
    ) {
        let mut tracker = RevealTracker::new(4, 100.0);
        let mut seen = [false; 4];

        for tops in frames {
            tracker.evaluate(viewport, tops.iter().copied().enumerate());
            for (i, was) in seen.iter_mut().enumerate() {
                if *was {
                    prop_assert!(tracker.is_revealed(i));
                }
                *was = tracker.is_revealed(i);
            }
        }
    }

    #[test]
    fn required_blank_always_yields_required(
        blank in "[ \t]{0,6}",
        kind in prop_oneof![Just(FieldKind::Email), Just(FieldKind::Tel), Just(FieldKind::Other)],
    ) {
        let field = Field::new(kind, &blank).required();
        prop_assert_eq!(validate_field(&field), Err(FieldError::Required));
    }

    #[test]
    fn well_formed_email_passes(
        local in "[a-z0-9._%+-]{1,16}",
        domain in "[a-z0-9-]{1,16}",
        tld in "[a-z]{1,6}",
    ) {
        let email = format!("{local}@{domain}.{tld}");
        prop_assert_eq!(validate_field(&Field::new(FieldKind::Email, &email)), Ok(()));
    }

    #[test]
    fn email_without_at_fails(value in "[a-z0-9.]{1,24}") {
        prop_assert_eq!(
            validate_field(&Field::new(FieldKind::Email, &value)),
            Err(FieldError::InvalidEmail)
        );
    }

    #[test]
    fn email_without_dot_after_at_fails(local in "[a-z0-9.]{1,12}", domain in "[a-z0-9]{1,12}") {
        let email = format!("{local}@{domain}");
        prop_assert_eq!(
            validate_field(&Field::new(FieldKind::Email, &email)),
            Err(FieldError::InvalidEmail)
        );
    }

    #[test]
    fn phone_charset_passes(value in "[0-9 ()+-]{1,20}") {
        prop_assert_eq!(validate_field(&Field::new(FieldKind::Tel, &value)), Ok(()));
    }

    #[test]
    fn phone_with_foreign_char_fails(
        prefix in "[0-9 ()+-]{0,8}",
        bad in "[a-zA-Z#*./]",
        suffix in "[0-9 ()+-]{0,8}",
    ) {
        let value = format!("{prefix}{bad}{suffix}");
        prop_assert_eq!(
            validate_field(&Field::new(FieldKind::Tel, &value)),
            Err(FieldError::InvalidPhone)
        );
    }

    #[test]
    fn lazy_source_hands_over_once(flags in proptest::collection::vec(any::<bool>(), 0..32)) {
        let mut img = LazySource::new("/img/halong.jpg");
        let handed = flags.iter().filter_map(|f| img.on_intersection(*f)).count();
        prop_assert_eq!(handed, usize::from(flags.iter().any(|f| *f)));
    }
}
