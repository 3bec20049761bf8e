//! Validation helpers shared by the sync services and mobile clients

use rust_decimal::Decimal;

use crate::types::GpsCoordinates;

/// Validate severity is on the 0-100 scale
pub fn validate_severity(severity: Decimal) -> Result<(), &'static str> {
    if severity < Decimal::ZERO || severity > Decimal::from(100) {
        return Err("Severity must be between 0 and 100");
    }
    Ok(())
}

/// Validate an observation quantity is non-negative
pub fn validate_quantity(quantity: i32) -> Result<(), &'static str> {
    if quantity < 0 {
        return Err("Quantity cannot be negative");
    }
    Ok(())
}

/// Validate a latitude/longitude pair is on the globe
pub fn validate_coordinates(point: &GpsCoordinates) -> Result<(), &'static str> {
    if point.latitude < Decimal::from(-90) || point.latitude > Decimal::from(90) {
        return Err("Latitude must be between -90 and 90");
    }
    if point.longitude < Decimal::from(-180) || point.longitude > Decimal::from(180) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

/// Validate a plot polygon: either absent or at least three vertices
pub fn validate_polygon(polygon: &[GpsCoordinates]) -> Result<(), &'static str> {
    if polygon.is_empty() {
        return Ok(());
    }
    if polygon.len() < 3 {
        return Err("Polygon needs at least 3 vertices");
    }
    for vertex in polygon {
        validate_coordinates(vertex)?;
    }
    Ok(())
}

/// Validate an entity name is present
pub fn validate_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Name cannot be empty");
    }
    Ok(())
}

/// Validate a declared area
pub fn validate_area(area: Decimal) -> Result<(), &'static str> {
    if area < Decimal::ZERO {
        return Err("Area cannot be negative");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_validate_severity_valid() {
        assert!(validate_severity(Decimal::ZERO).is_ok());
        assert!(validate_severity(dec("55.5")).is_ok());
        assert!(validate_severity(Decimal::from(100)).is_ok());
    }

    #[test]
    fn test_validate_severity_invalid() {
        assert!(validate_severity(dec("-0.01")).is_err());
        assert!(validate_severity(dec("100.01")).is_err());
        assert!(validate_severity(Decimal::from(250)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(42).is_ok());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_coordinates_valid() {
        assert!(validate_coordinates(&GpsCoordinates::new(dec("-23.5505"), dec("-46.6333"))).is_ok());
        assert!(validate_coordinates(&GpsCoordinates::new(Decimal::from(90), Decimal::from(180))).is_ok());
        assert!(validate_coordinates(&GpsCoordinates::new(Decimal::from(-90), Decimal::from(-180))).is_ok());
    }

    #[test]
    fn test_validate_coordinates_invalid() {
        assert!(validate_coordinates(&GpsCoordinates::new(dec("90.1"), Decimal::ZERO)).is_err());
        assert!(validate_coordinates(&GpsCoordinates::new(Decimal::ZERO, dec("-180.5"))).is_err());
    }

    #[test]
    fn test_validate_polygon_empty_is_ok() {
        assert!(validate_polygon(&[]).is_ok());
    }

    #[test]
    fn test_validate_polygon_too_few_vertices() {
        let polygon = vec![
            GpsCoordinates::new(dec("-23.55"), dec("-46.63")),
            GpsCoordinates::new(dec("-23.56"), dec("-46.64")),
        ];
        assert!(validate_polygon(&polygon).is_err());
    }

    #[test]
    fn test_validate_polygon_valid_triangle() {
        let polygon = vec![
            GpsCoordinates::new(dec("-23.55"), dec("-46.63")),
            GpsCoordinates::new(dec("-23.56"), dec("-46.64")),
            GpsCoordinates::new(dec("-23.57"), dec("-46.62")),
        ];
        assert!(validate_polygon(&polygon).is_ok());
    }

    #[test]
    fn test_validate_polygon_rejects_bad_vertex() {
        let polygon = vec![
            GpsCoordinates::new(dec("-23.55"), dec("-46.63")),
            GpsCoordinates::new(dec("95.0"), dec("-46.64")),
            GpsCoordinates::new(dec("-23.57"), dec("-46.62")),
        ];
        assert!(validate_polygon(&polygon).is_err());
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Fazenda Santa Rita").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
    }

    #[test]
    fn test_validate_area() {
        assert!(validate_area(Decimal::ZERO).is_ok());
        assert!(validate_area(dec("120.5")).is_ok());
        assert!(validate_area(dec("-3")).is_err());
    }
}
