quantity!(Kilometers, suffix: "km", precision: 1);
