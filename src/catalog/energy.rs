use crate::catalog::activity::{ActivityFactor, Category};

/// Brazilian interconnected grid average, kilograms of CO₂e per kilowatt-hour.
const GRID_FACTOR: f64 = 0.0385;

const GRID_ACTIVITY_ID: &str = "electricity-supply_grid-source_supplier_mix";

const fn appliance(
    id: &'static str,
    display_name: &'static str,
    category: Category,
    average_power_watts: f64,
) -> ActivityFactor {
    ActivityFactor::new(id, display_name, GRID_FACTOR, GRID_ACTIVITY_ID, category)
        .with_average_power(average_power_watts)
}

pub static APPLIANCES: &[ActivityFactor] = &[
    appliance("geladeira", "Refrigerator", Category::Refrigeration, 150.0),
    appliance("freezer", "Freezer", Category::Refrigeration, 200.0),
    appliance("ar_condicionado", "Air conditioner", Category::Cooling, 1400.0),
    appliance("ventilador", "Fan", Category::Cooling, 100.0),
    appliance("chuveiro_eletrico", "Electric shower", Category::WaterHeating, 5500.0),
    appliance("aquecedor_eletrico", "Electric water heater", Category::WaterHeating, 2000.0),
    appliance("micro_ondas", "Microwave oven", Category::Kitchen, 1200.0),
    appliance("forno_eletrico", "Electric oven", Category::Kitchen, 1500.0),
    appliance("air_fryer", "Air fryer", Category::Kitchen, 1400.0),
    appliance("maquina_lavar", "Washing machine", Category::Laundry, 500.0),
    appliance("secadora", "Tumble dryer", Category::Laundry, 2500.0),
    appliance("ferro_passar", "Clothes iron", Category::Laundry, 1000.0),
    appliance("televisao", "Television", Category::Electronics, 100.0),
    appliance("computador", "Desktop computer", Category::Electronics, 300.0),
    appliance("notebook", "Laptop", Category::Electronics, 60.0),
    appliance("lampada_incandescente", "Incandescent bulb", Category::Lighting, 60.0),
    appliance("lampada_led", "LED bulb", Category::Lighting, 9.0),
];
