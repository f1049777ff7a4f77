use ayurdiet::constitution::Dosha;
use ayurdiet::recommendations::{
    RecommendationError, RecommendationResolver, ReferenceTable, Season,
};

#[test]
fn insights_ignore_concern_order() {
    let resolver = RecommendationResolver::standard();
    let forward = resolver
        .generate_insights(Dosha::Vata, ["sleep", "digestion"])
        .expect("insights resolve");
    let reverse = resolver
        .generate_insights(Dosha::Vata, ["digestion", "sleep"])
        .expect("insights resolve");
    assert_eq!(forward, reverse);
}

#[test]
fn adding_a_concern_only_appends() {
    let resolver = RecommendationResolver::standard();
    let keys = ["digestion", "sleep", "stress", "weight", "energy"];

    for dosha in Dosha::ordered() {
        let mut selected: Vec<&str> = Vec::new();
        let mut previous = resolver
            .generate_insights(dosha, &selected)
            .expect("base insights resolve");

        for key in keys.into_iter().rev() {
            selected.push(key);
            let next = resolver
                .generate_insights(dosha, &selected)
                .expect("insights resolve");
            assert_eq!(next.len(), previous.len() + 1, "{dosha} + {key}");
            assert!(previous.iter().all(|line| next.contains(line)));
            previous = next;
        }

        let repeated = resolver
            .generate_insights(dosha, selected.iter().chain(selected.iter()))
            .expect("insights resolve");
        assert_eq!(repeated, previous, "duplicates add nothing");
    }
}

#[test]
fn unknown_concerns_are_ignored() {
    let resolver = RecommendationResolver::standard();
    let base = resolver
        .generate_insights(Dosha::Kapha, Vec::<String>::new())
        .expect("base insights");
    let with_unknown = resolver
        .generate_insights(Dosha::Kapha, ["hair", "Digestion"])
        .expect("unknown keys ignored");
    assert_eq!(base, with_unknown);
}

#[test]
fn seasonal_guidance_resolves_every_pair() {
    let resolver = RecommendationResolver::standard();
    for dosha in Dosha::ordered() {
        for season in Season::ordered() {
            let by_key = resolver
                .seasonal_guidance(dosha.label(), season.label())
                .expect("every pair has guidance");
            assert_eq!(
                by_key,
                resolver
                    .seasonal_guidance_for(dosha, season)
                    .expect("typed lookup")
            );
            assert!(!by_key.is_empty());

            let tip = resolver
                .seasonal_tip(dosha.label(), season.key())
                .expect("every pair has a tip");
            assert_eq!(
                tip,
                resolver.seasonal_tip_for(dosha, season).expect("typed tip")
            );
            assert_ne!(tip, by_key);
        }
    }
}

#[test]
fn misses_surface_reference_data_not_found() {
    let resolver = RecommendationResolver::standard();

    match resolver.seasonal_guidance("Vata", "Monsoon") {
        Err(RecommendationError::ReferenceDataNotFound { table, key }) => {
            assert_eq!(table, ReferenceTable::Seasonal);
            assert_eq!(key, "monsoon");
        }
        other => panic!("expected reference miss, got {other:?}"),
    }

    assert!(matches!(
        resolver.food_advice_for("Ether"),
        Err(RecommendationError::ReferenceDataNotFound {
            table: ReferenceTable::FoodAdvice,
            ..
        })
    ));
}

#[test]
fn recommend_bundles_every_section() {
    let resolver = RecommendationResolver::standard();
    let bundle = resolver
        .recommend(Dosha::Pitta, Some(Season::Summer), ["stress"])
        .expect("bundle resolves");

    assert_eq!(bundle.dosha, Dosha::Pitta);
    assert!(!bundle.foods.to_eat.is_empty());
    assert!(!bundle.foods.to_avoid.is_empty());
    assert!(bundle.seasonal_guidance.is_some());
    let base = resolver
        .generate_insights(Dosha::Pitta, Vec::<&str>::new())
        .expect("base insights");
    assert_eq!(bundle.insights.len(), base.len() + 1);
    assert_eq!(
        bundle.seasonal_tip,
        Some("Maximize cooling; avoid heat exposure")
    );
    assert_eq!(
        &bundle.daily_routine,
        resolver.daily_routine(Dosha::Pitta).expect("routine")
    );
    assert_eq!(
        bundle.quick_remedies.as_slice(),
        resolver.quick_remedies(Dosha::Pitta).expect("remedies")
    );
}
