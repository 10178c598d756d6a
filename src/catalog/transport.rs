use crate::catalog::activity::{ActivityFactor, Category};

/// Per-passenger emission factors, kilograms of CO₂e per kilometre.
pub static TRANSPORT: &[ActivityFactor] = &[
    ActivityFactor::new(
        "car_gasoline",
        "Car (gasoline)",
        0.192,
        "passenger_vehicle-vehicle_type_car-fuel_source_petrol-engine_size_na-vehicle_age_na-vehicle_weight_na",
        Category::Car,
    ),
    ActivityFactor::new(
        "car_diesel",
        "Car (diesel)",
        0.171,
        "passenger_vehicle-vehicle_type_car-fuel_source_diesel-engine_size_na-vehicle_age_na-vehicle_weight_na",
        Category::Car,
    ),
    ActivityFactor::new(
        "car_ethanol",
        "Car (ethanol)",
        0.070,
        "passenger_vehicle-vehicle_type_car-fuel_source_bio_ethanol-engine_size_na-vehicle_age_na-vehicle_weight_na",
        Category::Car,
    ),
    ActivityFactor::new(
        "car_electric",
        "Car (electric)",
        0.020,
        "passenger_vehicle-vehicle_type_car-fuel_source_bev-engine_size_na-vehicle_age_na-vehicle_weight_na",
        Category::Car,
    ),
    ActivityFactor::new(
        "motorcycle",
        "Motorcycle",
        0.103,
        "passenger_vehicle-vehicle_type_motorbike-fuel_source_na-engine_size_na-vehicle_age_na-vehicle_weight_na",
        Category::Motorcycle,
    ),
    ActivityFactor::new(
        "bus",
        "Bus",
        0.089,
        "passenger_vehicle-vehicle_type_bus-fuel_source_na-distance_na-engine_size_na",
        Category::PublicTransport,
    ),
    ActivityFactor::new(
        "subway",
        "Subway",
        0.028,
        "passenger_train-route_type_underground-fuel_source_na",
        Category::PublicTransport,
    ),
    ActivityFactor::new(
        "train",
        "Train",
        0.035,
        "passenger_train-route_type_national_rail-fuel_source_na",
        Category::PublicTransport,
    ),
    ActivityFactor::new(
        "plane_domestic",
        "Plane (domestic)",
        0.246,
        "passenger_flight-route_type_domestic-aircraft_type_na-distance_na-class_na-rf_included-distance_uplift_included",
        Category::Air,
    ),
    ActivityFactor::new(
        "bicycle",
        "Bicycle",
        0.0,
        "passenger_vehicle-vehicle_type_bicycle-fuel_source_na-engine_size_na-vehicle_age_na-vehicle_weight_na",
        Category::Active,
    ),
    ActivityFactor::new(
        "walking",
        "Walking",
        0.0,
        "passenger_vehicle-vehicle_type_walking-fuel_source_na-engine_size_na-vehicle_age_na-vehicle_weight_na",
        Category::Active,
    ),
];
