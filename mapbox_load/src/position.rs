//! Types and functions for working with positions.

/// Geographical position with latitude and longitude.
pub type Position = geo_types::Point;

/// Geographical extent, e.g. of a layer.
pub type Extent = geo_types::Rect;

/// Construct `Position` from latitude and longitude.
pub fn lat_lon(lat: f64, lon: f64) -> Position {
    Position::new(lon, lat)
}

/// Construct `Position` from longitude and latitude. Note that it is common standard to write
/// coordinates starting with the latitude instead, but TileJSON and GeoJSON both put longitude
/// first.
pub fn lon_lat(lon: f64, lat: f64) -> Position {
    Position::new(lon, lat)
}

/// Map center with named fields, as found in normalized TileJSON.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Center {
    pub lat: f64,
    pub lon: f64,
}

impl Center {
    pub fn position(&self) -> Position {
        lat_lon(self.lat, self.lon)
    }
}

impl From<Position> for Center {
    fn from(position: Position) -> Self {
        Self {
            lat: position.y(),
            lon: position.x(),
        }
    }
}

/// Smallest extent containing both `a` and `b`.
pub fn union(a: Extent, b: Extent) -> Extent {
    Extent::new(
        geo_types::coord! { x: a.min().x.min(b.min().x), y: a.min().y.min(b.min().y) },
        geo_types::coord! { x: a.max().x.max(b.max().x), y: a.max().y.max(b.max().y) },
    )
}

/// Smallest extent containing all `positions`, or `None` if there are none.
pub fn extent_of(positions: impl IntoIterator<Item = Position>) -> Option<Extent> {
    positions
        .into_iter()
        .map(|p| Extent::new(p.0, p.0))
        .reduce(union)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn center_and_position_agree() {
        let center = Center {
            lat: 51.1,
            lon: 17.03,
        };
        let position = center.position();
        assert_relative_eq!(position.x(), 17.03);
        assert_relative_eq!(position.y(), 51.1);
        assert_eq!(Center::from(position), center);
    }

    #[test]
    fn extent_of_positions() {
        assert!(extent_of([]).is_none());

        let extent = extent_of([lon_lat(10.0, 50.0), lon_lat(-5.0, 52.0), lon_lat(3.0, 49.0)])
            .expect("there are positions");
        assert_relative_eq!(extent.min().x, -5.0);
        assert_relative_eq!(extent.min().y, 49.0);
        assert_relative_eq!(extent.max().x, 10.0);
        assert_relative_eq!(extent.max().y, 52.0);

        let center = extent.center();
        assert_relative_eq!(center.x, 2.5);
        assert_relative_eq!(center.y, 50.5);
    }
}
