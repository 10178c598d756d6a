quantity!(
    /// Food weight, not to be confused with the emitted CO₂ mass.
    Kilograms, suffix: "kg", precision: 3
);
