use structkit_designer::find_template;
use structkit_takeoff::{calculate, Category, MaterialsOutput, PriceBook};

#[test]
fn test_template_kitchen_categories() {
    let config = find_template("kitchen-l-shaped").unwrap().instantiate();
    let bill = calculate(&config, &PriceBook::default());
    let categories = bill.categories();
    assert_eq!(categories.first(), Some(&Category::Cabinets));
    assert_eq!(categories.last(), Some(&Category::Installation));
    assert!(categories.contains(&Category::Countertops));
    assert!(categories.contains(&Category::Appliances));
    assert!(!categories.contains(&Category::Foundation));
}

#[test]
fn test_cabinet_lines_match_item_counts() {
    let config = find_template("kitchen-island").unwrap().instantiate();
    let bill = calculate(&config, &PriceBook::default());
    let cabinet_items = config
        .items
        .iter()
        .filter(|i| i.kind().cabinet_type().is_some())
        .count() as u32;
    let cabinet_lines: u32 = bill.items_in(Category::Cabinets).map(|l| l.quantity).sum();
    assert_eq!(cabinet_lines, cabinet_items);
}

#[test]
fn test_catalog_price_wins_over_price_book() {
    let config = find_template("kitchen-galley").unwrap().instantiate();
    let first = config.items[0].item.clone();
    let mut book = PriceBook::default();
    book.set_price(first.id.clone(), 1.0);

    let bill = calculate(&config, &book);
    let line = bill.find(&first.id).unwrap();
    assert_eq!(line.unit_price, first.unit_price);
}

#[test]
fn test_materials_output_total_matches_bill() {
    let config = find_template("kitchen-galley").unwrap().instantiate();
    let output = MaterialsOutput::from_config(&config, &PriceBook::default());
    let subtotal_sum: f64 = calculate(&config, &PriceBook::default())
        .subtotals()
        .iter()
        .map(|s| s.subtotal)
        .sum();
    assert!((output.total_cost - subtotal_sum).abs() < 0.005);
    assert!(output.total_cost > 0.0);
}
