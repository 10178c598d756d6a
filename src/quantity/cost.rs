quantity!(
    /// Brazilian reais.
    Cost, suffix: "R$", precision: 2
);

impl Cost {
    pub const ONE_CENT: Self = Self(0.01);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Cost(12.3456).to_string(), "12.35 R$");
        assert_eq!(format!("{:?}", Cost(1.5)), "1.5R$");
    }

    #[test]
    fn test_ordering() {
        assert!(Cost::ONE_CENT > Cost::ZERO);
        assert_eq!(Cost(0.01), Cost::ONE_CENT);
    }
}
