use crate::catalog::activity::{ActivityFactor, Category};

/// Life-cycle emission factors, kilograms of CO₂e per kilogram of food.
pub static FOOD: &[ActivityFactor] = &[
    ActivityFactor::new("beef", "Beef", 27.0, "consumer_goods-type_meat_products_beef", Category::RedMeat),
    ActivityFactor::new("lamb", "Lamb", 39.2, "consumer_goods-type_meat_products_lamb", Category::RedMeat),
    ActivityFactor::new("pork", "Pork", 12.1, "consumer_goods-type_meat_products_pork", Category::RedMeat),
    ActivityFactor::new("chicken", "Chicken", 6.9, "consumer_goods-type_meat_products_poultry", Category::Poultry),
    ActivityFactor::new("fish", "Fish", 6.1, "consumer_goods-type_fish_products", Category::Seafood),
    ActivityFactor::new("eggs", "Eggs", 4.8, "consumer_goods-type_eggs", Category::Poultry),
    ActivityFactor::new("cheese", "Cheese", 13.5, "consumer_goods-type_dairy_products_cheese", Category::Dairy),
    ActivityFactor::new("milk", "Milk", 1.9, "consumer_goods-type_dairy_products_milk", Category::Dairy),
    ActivityFactor::new("rice", "Rice", 2.7, "consumer_goods-type_rice", Category::Grain),
    ActivityFactor::new("beans", "Beans", 2.0, "consumer_goods-type_legumes", Category::PlantProtein),
    ActivityFactor::new("tofu", "Tofu", 2.0, "consumer_goods-type_soy_products", Category::PlantProtein),
    ActivityFactor::new("vegetables", "Vegetables", 2.0, "consumer_goods-type_vegetables", Category::Produce),
    ActivityFactor::new("fruits", "Fruits", 1.1, "consumer_goods-type_fruits", Category::Produce),
];
