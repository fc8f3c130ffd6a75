use geom::{path_length, wkt, Distance, GeometryError, LonLat, Malformed};

/// A text field where a route is typed or pasted as WKT. It's parsed after every change, so the
/// text is expected to be invalid most of the time while someone is still typing.
#[derive(Clone, Debug, Default)]
pub struct GeometryInput {
    text: String,
    // Only set while the current text parses
    pts: Option<Vec<LonLat>>,
    error: Option<GeometryError>,
}

impl GeometryInput {
    pub fn new() -> GeometryInput {
        GeometryInput::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the text and parses it again. Blank text resets everything without being an
    /// error. Invalid text clears the points, so nothing stale is shown.
    pub fn set_text<I: Into<String>>(&mut self, text: I) {
        self.text = text.into();
        self.pts = None;
        self.error = None;
        if self.text.trim().is_empty() {
            return;
        }

        // Skip the full parse for text that isn't even shaped like a LINESTRING
        let result = if wkt::looks_like_linestring(&self.text) {
            wkt::parse_linestring(&self.text)
        } else {
            Err(Malformed::NotLineString.into())
        };
        match result {
            Ok(pts) => {
                self.pts = Some(pts);
            }
            Err(err) => {
                debug!("Can't use {:?} yet: {}", self.text, err);
                self.error = Some(err);
            }
        }
    }

    /// The points of the current text, if it parses.
    pub fn points(&self) -> Option<&[LonLat]> {
        self.pts.as_deref()
    }

    /// What's wrong with the current text, if anything.
    pub fn error(&self) -> Option<&GeometryError> {
        self.error.as_ref()
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none() && self.pts.is_some()
    }

    /// The length of the route described by the current text, if it's valid.
    pub fn estimated_length(&self) -> Option<Distance> {
        if !self.is_valid() {
            return None;
        }
        self.points().map(path_length)
    }

    /// Produces the WKT to store, without any SRID prefix.
    pub fn submit(&self) -> Result<String, GeometryError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        if self.pts.is_none() {
            return Err(Malformed::NotLineString.into());
        }
        Ok(wkt::strip_srid(&self.text).to_string())
    }
}
