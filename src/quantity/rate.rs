quantity!(
    /// Brazilian reais per kilowatt-hour.
    KilowattHourRate, suffix: "R$/kWh", precision: 3
);
