//! Built-in food catalog, available at startup and read-only for the session.
//! Values are per 100g (or 100ml for drinks; per unit for eggs).

use lazy_static::lazy_static;

use super::catalog::{FoodOption, FoodRecord};

type Row = (&'static str, &'static str, f64, f64, f64, f64, &'static str, &'static str);

#[rustfmt::skip]
const ROWS: &[Row] = &[
    // id, name, calories, proteins, carbs, fats, category, portion
    ("1", "Poulet (blanc, grillé)", 165.0, 31.0, 0.0, 3.6, "Viandes", "100g"),
    ("2", "Bœuf (steak haché 5%)", 141.0, 21.0, 0.0, 5.0, "Viandes", "100g"),
    ("3", "Porc (côtelette)", 231.0, 25.0, 0.0, 14.0, "Viandes", "100g"),
    ("4", "Dinde (escalope)", 135.0, 29.0, 0.0, 2.0, "Viandes", "100g"),

    ("5", "Saumon (frais)", 208.0, 22.0, 0.0, 13.0, "Poissons", "100g"),
    ("6", "Thon (en conserve)", 128.0, 29.0, 0.0, 1.0, "Poissons", "100g"),
    ("7", "Cabillaud", 82.0, 18.0, 0.0, 0.7, "Poissons", "100g"),

    ("8", "Œuf entier", 72.0, 6.3, 0.4, 4.8, "Œufs et Produits laitiers", "1 unité"),
    ("9", "Yaourt nature", 59.0, 3.8, 4.7, 3.2, "Œufs et Produits laitiers", "100g"),
    ("10", "Fromage blanc 0%", 43.0, 7.5, 4.0, 0.2, "Œufs et Produits laitiers", "100g"),
    ("11", "Mozzarella", 280.0, 22.0, 2.2, 21.0, "Œufs et Produits laitiers", "100g"),

    ("12", "Riz blanc (cuit)", 130.0, 2.7, 28.0, 0.3, "Céréales et Féculents", "100g"),
    ("13", "Pâtes (cuites)", 158.0, 5.8, 31.0, 0.9, "Céréales et Féculents", "100g"),
    ("14", "Pain complet", 247.0, 9.4, 41.3, 3.3, "Céréales et Féculents", "100g"),
    ("15", "Quinoa (cuit)", 120.0, 4.4, 21.3, 1.9, "Céréales et Féculents", "100g"),

    ("16", "Brocoli (cuit)", 35.0, 2.4, 7.2, 0.4, "Légumes", "100g"),
    ("17", "Carottes (crues)", 41.0, 0.9, 9.6, 0.2, "Légumes", "100g"),
    ("18", "Épinards (cuits)", 23.0, 2.9, 3.6, 0.4, "Légumes", "100g"),
    ("19", "Pomme de terre (cuite)", 87.0, 1.9, 20.1, 0.1, "Légumes", "100g"),
    ("20", "Avocat", 160.0, 2.0, 8.5, 14.7, "Légumes", "100g"),

    ("21", "Banane", 89.0, 1.1, 22.8, 0.3, "Fruits", "100g"),
    ("22", "Pomme", 52.0, 0.3, 14.0, 0.2, "Fruits", "100g"),
    ("23", "Orange", 47.0, 0.9, 11.8, 0.1, "Fruits", "100g"),
    ("24", "Fraises", 32.0, 0.7, 7.7, 0.3, "Fruits", "100g"),

    ("25", "Lentilles (cuites)", 116.0, 9.0, 20.0, 0.4, "Légumineuses", "100g"),
    ("26", "Pois chiches (cuits)", 164.0, 8.9, 27.0, 2.6, "Légumineuses", "100g"),
    ("27", "Haricots rouges (cuits)", 127.0, 8.7, 23.0, 0.5, "Légumineuses", "100g"),

    ("28", "Amandes", 579.0, 21.0, 22.0, 49.0, "Noix et Graines", "100g"),
    ("29", "Noix", 654.0, 15.0, 14.0, 65.0, "Noix et Graines", "100g"),
    ("30", "Graines de chia", 486.0, 17.0, 42.0, 31.0, "Noix et Graines", "100g"),

    ("31", "Pain de mie", 265.0, 8.0, 49.0, 3.2, "Produits transformés", "100g"),
    ("32", "Céréales petit-déjeuner", 379.0, 7.0, 84.0, 0.8, "Produits transformés", "100g"),
    ("33", "Pizza Margherita", 266.0, 11.0, 33.0, 10.0, "Produits transformés", "100g"),

    ("34", "Lait demi-écrémé", 46.0, 3.3, 4.8, 1.5, "Boissons", "100ml"),
    ("35", "Jus d'orange", 45.0, 0.7, 10.4, 0.2, "Boissons", "100ml"),
    ("36", "Smoothie banane", 89.0, 1.1, 20.2, 0.3, "Boissons", "100ml"),

    ("37", "Huile d'olive", 884.0, 0.0, 0.0, 100.0, "Sauces et Condiments", "100ml"),
    ("38", "Mayonnaise", 680.0, 1.0, 0.6, 75.0, "Sauces et Condiments", "100g"),
    ("39", "Ketchup", 112.0, 1.2, 26.0, 0.2, "Sauces et Condiments", "100g"),
    ("40", "Moutarde", 66.0, 4.4, 6.4, 3.8, "Sauces et Condiments", "100g"),
];

lazy_static! {
    static ref PREDEFINED: Vec<FoodOption> = ROWS
        .iter()
        .map(|&(id, name, calories, proteins, carbs, fats, category, portion)| {
            FoodOption::Predefined {
                id: id.to_string(),
                category: category.to_string(),
                portion: portion.to_string(),
                food: FoodRecord::new(name, calories, proteins, carbs, fats),
            }
        })
        .collect();
}

pub fn foods() -> &'static [FoodOption] {
    &PREDEFINED
}
