//! State behind the interactive parts of sharing a route: drawing one point-by-point with
//! undo/redo, and typing one in as WKT.

#[macro_use]
extern crate log;

mod drawing;
mod history;
mod input;

pub use crate::drawing::RouteDrawing;
pub use crate::history::History;
pub use crate::input::GeometryInput;
