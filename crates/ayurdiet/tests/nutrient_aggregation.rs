use ayurdiet::nutrition::{
    DoshaSuitability, Ingredient, NutrientAggregator, NutrientAnalysis, NutrientTable,
    NutrientTotals,
};

fn aggregate(table: &NutrientTable, ingredients: &[Ingredient]) -> NutrientTotals {
    NutrientAggregator::new(table)
        .aggregate(ingredients)
        .expect("aggregation succeeds")
}

#[test]
fn doubling_rice_gives_exactly_412_calories() {
    let table = NutrientTable::standard();
    let totals = aggregate(&table, &[Ingredient::new("rice", 2.0)]);
    assert_eq!(totals.calories, 412);
}

#[test]
fn aggregation_is_order_independent() {
    let table = NutrientTable::standard();
    let forward = aggregate(
        &table,
        &[Ingredient::new("rice", 1.0), Ingredient::new("ghee", 2.0)],
    );
    let reverse = aggregate(
        &table,
        &[Ingredient::new("ghee", 2.0), Ingredient::new("rice", 1.0)],
    );
    assert_eq!(forward, reverse);
}

fn permutations(lines: &[Ingredient]) -> Vec<Vec<Ingredient>> {
    if lines.len() <= 1 {
        return vec![lines.to_vec()];
    }
    let mut all = Vec::new();
    for (index, first) in lines.iter().enumerate() {
        let mut rest = lines.to_vec();
        rest.remove(index);
        for mut tail in permutations(&rest) {
            tail.insert(0, first.clone());
            all.push(tail);
        }
    }
    all
}

#[test]
fn fractional_quantities_match_in_every_order() {
    let table = NutrientTable::standard();
    let lines = [
        Ingredient::new("rice", 0.1),
        Ingredient::new("ghee", 0.2),
        Ingredient::new("wheat", 0.3),
        Ingredient::new("Lentil", 0.7),
    ];
    let orders = permutations(&lines);
    assert_eq!(orders.len(), 24);

    let expected = aggregate(&table, &lines);
    let expected_suitability = DoshaSuitability::from_totals(&expected);
    for order in &orders {
        let totals = aggregate(&table, order);
        assert_eq!(totals, expected, "order {order:?}");
        assert_eq!(DoshaSuitability::from_totals(&totals), expected_suitability);
    }
}

#[test]
fn unknown_ingredients_contribute_zero() {
    let table = NutrientTable::standard();
    assert_eq!(
        aggregate(&table, &[Ingredient::new("unobtainium", 5.0)]),
        NutrientTotals::default()
    );

    let known = aggregate(&table, &[Ingredient::new("spinach", 1.0)]);
    let mixed = aggregate(
        &table,
        &[
            Ingredient::new("spinach", 1.0),
            Ingredient::new("unobtainium", 5.0),
        ],
    );
    assert_eq!(known, mixed);
}

#[test]
fn imported_rows_override_builtin_entries() {
    let csv = "key,name,quantity,calories,protein,carbs,fat,fiber,calcium,iron,magnesium,vata,pitta,kapha\n\
               rice,Brown Rice (1 cup cooked),195g,216,5,45,1.8,3.5,20,0.8,84,-1,0,1\n\
               millet,Millet (1 cup cooked),174g,207,6.1,41.2,1.7,2.3,5,1.1,77,1,0,-1\n";
    let mut table = NutrientTable::standard();
    let before = table.len();
    table.merge(NutrientTable::from_reader(csv.as_bytes()).expect("csv imports"));

    assert_eq!(table.len(), before + 1);
    assert_eq!(aggregate(&table, &[Ingredient::new("Rice", 1.0)]).calories, 216);
    assert_eq!(aggregate(&table, &[Ingredient::new("millet", 1.0)]).magnesium, 77);
    assert!(table
        .available_ingredients()
        .iter()
        .any(|option| option.value == "millet" && option.label.starts_with("Millet")));
}

#[test]
fn analysis_and_suitability_read_the_totals() {
    let table = NutrientTable::standard();
    let totals = aggregate(&table, &[Ingredient::new("rice", 2.0)]);

    let analysis = NutrientAnalysis::from_totals(&totals);
    assert_eq!(analysis.daily_intake_percent, 21);

    let suitability = DoshaSuitability::from_totals(&totals);
    assert_eq!(suitability.vata, "Excellent for Vata pacification");
    assert_eq!(suitability.kapha, "Consider for Kapha");
}
