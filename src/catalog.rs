//! Static emission factors, electricity tariffs, and editorial text.
//!
//! Everything here is immutable and lives for the whole process.
//! Lookups never fail: an absent key yields [`None`] or an empty iterator.

pub mod activity;
pub mod editorial;
mod energy;
mod food;
mod tariff;
mod transport;

use enumset::EnumSet;

pub use self::{
    activity::{ActivityFactor, Domain, Metric},
    editorial::editorial_for,
    tariff::{ConsumerClass, TariffEntry},
};
use self::{energy::APPLIANCES, food::FOOD, tariff::TARIFFS, transport::TRANSPORT};

pub const fn factors_for(domain: Domain) -> &'static [ActivityFactor] {
    match domain {
        Domain::Transport => TRANSPORT,
        Domain::Food => FOOD,
        Domain::Energy => APPLIANCES,
    }
}

pub fn factors_in(domains: EnumSet<Domain>) -> impl Iterator<Item = &'static ActivityFactor> {
    domains.into_iter().flat_map(factors_for)
}

pub fn find(id: &str) -> Option<&'static ActivityFactor> {
    factors_in(EnumSet::all()).find(|activity| activity.id == id)
}

pub fn find_in(domain: Domain, id: &str) -> Option<&'static ActivityFactor> {
    factors_for(domain).iter().find(|activity| activity.id == id)
}

pub const fn tariffs() -> &'static [TariffEntry] {
    TARIFFS
}

pub fn tariff_for(region_code: &str) -> Option<&'static TariffEntry> {
    let region_code = region_code.trim();
    TARIFFS.iter().find(|entry| entry.region_code.eq_ignore_ascii_case(region_code))
}
