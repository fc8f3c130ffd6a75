use geom::{path_length, wkt, Distance, GeometryError, LonLat};

use crate::History;

/// What's shown while a drawing doesn't have enough points to be a line yet.
const INCOMPLETE_WKT: &str = "LINESTRING()";

/// A route being drawn by clicking points on a map. Every change is undoable.
#[derive(Clone, Debug, Default)]
pub struct RouteDrawing {
    history: History<Vec<LonLat>>,
}

impl RouteDrawing {
    pub fn new() -> RouteDrawing {
        RouteDrawing::default()
    }

    pub fn points(&self) -> &[LonLat] {
        self.history.current()
    }

    /// Extends the route to a new point.
    pub fn add_point(&mut self, pt: LonLat) {
        let mut pts = self.history.current().clone();
        pts.push(pt);
        self.history.commit(pts);
    }

    /// Removes every point. This can be undone.
    pub fn clear(&mut self) {
        if self.points().is_empty() {
            return;
        }
        self.history.commit(Vec::new());
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// The unrounded great-circle length of the route so far.
    pub fn length(&self) -> Distance {
        path_length(self.points())
    }

    /// Exports the route. Fails until there are at least two points.
    pub fn to_wkt(&self) -> Result<String, GeometryError> {
        wkt::to_linestring(self.points())
    }

    /// Like `to_wkt`, but shows an empty LINESTRING for incomplete drawings instead of failing.
    pub fn wkt_preview(&self) -> String {
        self.to_wkt().unwrap_or_else(|_| INCOMPLETE_WKT.to_string())
    }
}
