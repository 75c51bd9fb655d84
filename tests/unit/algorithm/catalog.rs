//! Tests for piece sizes and catalog ordering

#[cfg(test)]
mod tests {
    use brickmosaic::MosaicError;
    use brickmosaic::algorithm::{PieceCatalog, PieceSpec};

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(matches!(
            PieceSpec::new(0, 2),
            Err(MosaicError::Configuration { .. })
        ));
        assert!(matches!(
            PieceSpec::new(2, 0),
            Err(MosaicError::Configuration { .. })
        ));
    }

    #[test]
    fn test_spec_geometry() {
        let Ok(spec) = PieceSpec::new(2, 4) else {
            unreachable!("2x4 is a valid piece");
        };
        assert_eq!(spec.swapped().height(), 4);
        assert_eq!(spec.swapped().width(), 2);
        assert_eq!(spec.area(), 8);
        assert!(!spec.is_square());
        assert_eq!(spec.swapped().canonical(), spec);
        assert_eq!(spec.to_string(), "2x4");
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(
            PieceCatalog::new(Vec::new()),
            Err(MosaicError::Configuration { .. })
        ));
    }

    // Catalog order is the attempt order and must survive construction
    #[test]
    fn test_order_preserved() {
        let Ok(catalog) = PieceCatalog::from_dimensions(&[(1, 1), (2, 4), (1, 2)]) else {
            unreachable!("Catalog should build");
        };
        let dims: Vec<_> = catalog
            .pieces()
            .iter()
            .map(|spec| (spec.height(), spec.width()))
            .collect();
        assert_eq!(dims, vec![(1, 1), (2, 4), (1, 2)]);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_contains_unit() {
        let Ok(with_unit) = PieceCatalog::from_dimensions(&[(2, 2), (1, 1)]) else {
            unreachable!("Catalog should build");
        };
        let Ok(without_unit) = PieceCatalog::from_dimensions(&[(2, 2), (1, 2)]) else {
            unreachable!("Catalog should build");
        };
        assert!(with_unit.contains_unit());
        assert!(!without_unit.contains_unit());
    }

    #[test]
    fn test_from_dimensions_propagates_zero() {
        assert!(PieceCatalog::from_dimensions(&[(1, 1), (0, 3)]).is_err());
    }
}
