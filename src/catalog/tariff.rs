use serde::Serialize;

use crate::quantity::rate::KilowattHourRate;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ConsumerClass {
    #[default]
    Residential,
    Commercial,
    Industrial,
}

#[must_use]
#[derive(Debug, PartialEq, Serialize)]
pub struct TariffEntry {
    /// Brazilian federative unit code, for example `SP`.
    pub region_code: &'static str,

    pub provider_name: &'static str,

    pub residential_rate: KilowattHourRate,
    pub commercial_rate: KilowattHourRate,
    pub industrial_rate: KilowattHourRate,
}

impl TariffEntry {
    const fn new(
        region_code: &'static str,
        provider_name: &'static str,
        residential: f64,
        commercial: f64,
        industrial: f64,
    ) -> Self {
        Self {
            region_code,
            provider_name,
            residential_rate: KilowattHourRate(residential),
            commercial_rate: KilowattHourRate(commercial),
            industrial_rate: KilowattHourRate(industrial),
        }
    }

    pub const fn rate(&self, class: ConsumerClass) -> KilowattHourRate {
        match class {
            ConsumerClass::Residential => self.residential_rate,
            ConsumerClass::Commercial => self.commercial_rate,
            ConsumerClass::Industrial => self.industrial_rate,
        }
    }
}

/// Average electricity rates including taxes, one entry per state.
pub static TARIFFS: &[TariffEntry] = &[
    TariffEntry::new("AC", "Energisa Acre", 0.870, 0.810, 0.720),
    TariffEntry::new("AL", "Equatorial Alagoas", 0.840, 0.790, 0.700),
    TariffEntry::new("AM", "Amazonas Energia", 0.880, 0.830, 0.740),
    TariffEntry::new("AP", "CEA Equatorial", 0.790, 0.740, 0.650),
    TariffEntry::new("BA", "Neoenergia Coelba", 0.830, 0.780, 0.690),
    TariffEntry::new("CE", "Enel CE", 0.820, 0.770, 0.680),
    TariffEntry::new("DF", "Neoenergia Brasília", 0.760, 0.710, 0.630),
    TariffEntry::new("ES", "EDP Espírito Santo", 0.790, 0.740, 0.650),
    TariffEntry::new("GO", "Equatorial Goiás", 0.800, 0.750, 0.660),
    TariffEntry::new("MA", "Equatorial Maranhão", 0.850, 0.800, 0.710),
    TariffEntry::new("MG", "Cemig", 0.860, 0.810, 0.720),
    TariffEntry::new("MS", "Energisa Mato Grosso do Sul", 0.900, 0.850, 0.750),
    TariffEntry::new("MT", "Energisa Mato Grosso", 0.910, 0.860, 0.760),
    TariffEntry::new("PA", "Equatorial Pará", 0.950, 0.890, 0.790),
    TariffEntry::new("PB", "Energisa Paraíba", 0.780, 0.730, 0.650),
    TariffEntry::new("PE", "Neoenergia Pernambuco", 0.810, 0.760, 0.670),
    TariffEntry::new("PI", "Equatorial Piauí", 0.870, 0.820, 0.730),
    TariffEntry::new("PR", "Copel", 0.740, 0.700, 0.620),
    TariffEntry::new("RJ", "Light", 0.920, 0.870, 0.770),
    TariffEntry::new("RN", "Neoenergia Cosern", 0.770, 0.720, 0.640),
    TariffEntry::new("RO", "Energisa Rondônia", 0.820, 0.770, 0.680),
    TariffEntry::new("RR", "Roraima Energia", 0.760, 0.710, 0.630),
    TariffEntry::new("RS", "CEEE Equatorial", 0.800, 0.750, 0.660),
    TariffEntry::new("SC", "Celesc", 0.700, 0.660, 0.590),
    TariffEntry::new("SE", "Energisa Sergipe", 0.780, 0.730, 0.650),
    TariffEntry::new("SP", "Enel SP", 0.760, 0.710, 0.630),
    TariffEntry::new("TO", "Energisa Tocantins", 0.880, 0.830, 0.740),
];
