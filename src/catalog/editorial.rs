use serde::Serialize;

use crate::catalog::activity::{ActivityFactor, Category};

/// Benefits and drawbacks of switching to an activity.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Editorial {
    pub benefits: &'static [&'static str],
    pub drawbacks: &'static [&'static str],
}

impl Editorial {
    pub const GENERIC: Self = Self {
        benefits: &["Lower CO₂ emissions than your current choice"],
        drawbacks: &["May require changing your habits"],
    };
}

static BY_ACTIVITY: &[(&str, Editorial)] = &[
    (
        "bicycle",
        Editorial {
            benefits: &["Zero direct emissions", "Good for your health", "No fuel or parking costs"],
            drawbacks: &["Weather dependent", "Limited range", "Needs safe cycling routes"],
        },
    ),
    (
        "walking",
        Editorial {
            benefits: &["Zero direct emissions", "Good for your health", "Free"],
            drawbacks: &["Only practical for short distances", "Slow"],
        },
    ),
    (
        "car_electric",
        Editorial {
            benefits: &["No tailpipe emissions", "Cheaper per kilometre", "Quiet"],
            drawbacks: &["Higher purchase price", "Charging infrastructure is still scarce"],
        },
    ),
    (
        "car_ethanol",
        Editorial {
            benefits: &["Renewable fuel", "Widely available in Brazil"],
            drawbacks: &["Higher consumption per kilometre"],
        },
    ),
    (
        "lampada_led",
        Editorial {
            benefits: &["Uses a fraction of the energy", "Lasts many years"],
            drawbacks: &["Higher upfront price"],
        },
    ),
    (
        "ventilador",
        Editorial {
            benefits: &["Uses much less energy than air conditioning", "Cheap to buy"],
            drawbacks: &["Does not lower the room temperature"],
        },
    ),
    (
        "tofu",
        Editorial {
            benefits: &["High in protein", "Low emissions"],
            drawbacks: &["Unfamiliar to many people"],
        },
    ),
];

/// Category-level text, [`None`] falls through to [`Editorial::GENERIC`].
const fn by_category(category: Category) -> Option<Editorial> {
    match category {
        Category::PublicTransport => Some(Editorial {
            benefits: &["Lower emissions per passenger", "No parking needed", "Cheaper than driving"],
            drawbacks: &["Fixed schedules and routes", "Can be crowded"],
        }),
        Category::Active => Some(Editorial {
            benefits: &["Zero direct emissions", "Good for your health"],
            drawbacks: &["Limited range"],
        }),
        Category::Car => Some(Editorial {
            benefits: &["Flexible and door to door"],
            drawbacks: &["Traffic and parking costs"],
        }),
        Category::Motorcycle => Some(Editorial {
            benefits: &["Lower fuel consumption than a car", "Easy to park"],
            drawbacks: &["Higher accident risk", "Exposed to the weather"],
        }),
        Category::Poultry | Category::Seafood => Some(Editorial {
            benefits: &["Much lower emissions than red meat", "Lean source of protein"],
            drawbacks: &["Still an animal product"],
        }),
        Category::PlantProtein => Some(Editorial {
            benefits: &["Very low emissions", "Rich in fibre and protein"],
            drawbacks: &["Requires new recipes"],
        }),
        Category::Produce => Some(Editorial {
            benefits: &["Very low emissions", "Rich in vitamins"],
            drawbacks: &["Lower in protein"],
        }),
        Category::Dairy => Some(Editorial {
            benefits: &["Lower emissions than red meat"],
            drawbacks: &["Cheese remains emission-intensive"],
        }),
        Category::Cooling => Some(Editorial {
            benefits: &["Lower electricity bill"],
            drawbacks: &["Less cooling power"],
        }),
        Category::Lighting => Some(Editorial {
            benefits: &["Lower electricity bill"],
            drawbacks: &["Different light color"],
        }),
        Category::Refrigeration | Category::WaterHeating | Category::Laundry => Some(Editorial {
            benefits: &["Lower electricity bill"],
            drawbacks: &["May require replacing the appliance"],
        }),
        Category::RedMeat
        | Category::Grain
        | Category::Air
        | Category::Kitchen
        | Category::Electronics => None,
    }
}

pub fn editorial_for(activity: &ActivityFactor) -> Editorial {
    BY_ACTIVITY
        .iter()
        .find(|(id, _)| *id == activity.id)
        .map(|(_, editorial)| *editorial)
        .or_else(|| by_category(activity.category))
        .unwrap_or(Editorial::GENERIC)
}
