//! Reading and writing routes as WKT, like `SRID=4326;LINESTRING(23.721 37.983, 23.723 37.985)`.
//!
//! WKT lists each point as X Y, so longitude comes first. Only LINESTRINGs are supported. An SRID
//! prefix is recognized and thrown away; no reprojection happens.

use std::fmt::Write;

use crate::{GeometryError, LonLat, Malformed};

const SRID: &str = "SRID=";
const LINESTRING: &str = "LINESTRING";

/// Removes an optional `SRID=<digits>;` prefix and surrounding whitespace. Anything else is
/// returned trimmed, but otherwise untouched.
pub fn strip_srid(text: &str) -> &str {
    let text = text.trim();
    if let Some(rest) = strip_prefix_ignore_case(text, SRID) {
        if let Some((digits, body)) = rest.split_once(';') {
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                return body.trim();
            }
        }
    }
    text
}

/// A cheap check that the text starts like a LINESTRING. The points aren't examined. When this is
/// false, `parse_linestring` always fails with `Malformed::NotLineString`.
pub fn looks_like_linestring(text: &str) -> bool {
    strip_prefix_ignore_case(strip_srid(text), LINESTRING)
        .map(|rest| {
            let rest = rest.trim_start();
            rest.starts_with('(') || rest.eq_ignore_ascii_case("EMPTY")
        })
        .unwrap_or(false)
}

/// Parses a LINESTRING with at least two valid points, optionally prefixed by an SRID. Either
/// every point parses, or the error describes the first problem.
pub fn parse_linestring(text: &str) -> Result<Vec<LonLat>, GeometryError> {
    let body = linestring_body(strip_srid(text))?;
    if body.trim().is_empty() {
        return Err(Malformed::Empty.into());
    }

    let mut pts = Vec::new();
    for (idx, pair) in body.split(',').enumerate() {
        pts.push(parse_pt(idx, pair.trim())?);
    }
    if pts.len() == 1 {
        return Err(Malformed::SinglePoint.into());
    }
    Ok(pts)
}

/// Writes `LINESTRING(lon1 lat1, lon2 lat2, ...)`. Incomplete lines can't be exported. Numbers
/// are written with enough precision to parse back to exactly the same points.
pub fn to_linestring(pts: &[LonLat]) -> Result<String, GeometryError> {
    if pts.len() < 2 {
        return Err(GeometryError::InvalidGeometry { num_pts: pts.len() });
    }

    let mut out = String::from("LINESTRING(");
    for (idx, pt) in pts.iter().enumerate() {
        if idx != 0 {
            out.push_str(", ");
        }
        write!(out, "{} {}", pt.longitude(), pt.latitude()).unwrap();
    }
    out.push(')');
    Ok(out)
}

/// Returns whatever's between the parentheses.
fn linestring_body(text: &str) -> Result<&str, Malformed> {
    let rest = strip_prefix_ignore_case(text, LINESTRING)
        .ok_or(Malformed::NotLineString)?
        .trim_start();
    if rest.eq_ignore_ascii_case("EMPTY") {
        return Err(Malformed::Empty);
    }
    let inner = rest.strip_prefix('(').ok_or(Malformed::NotLineString)?;
    let inner = inner.strip_suffix(')').ok_or(Malformed::Unbalanced)?;
    if inner.contains(&['(', ')'][..]) {
        return Err(Malformed::Unbalanced);
    }
    Ok(inner)
}

fn parse_pt(idx: usize, pair: &str) -> Result<LonLat, Malformed> {
    // A third Z or M value isn't supported, rather than silently dropped
    let tokens: Vec<&str> = pair.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(Malformed::WrongArity {
            idx,
            pair: pair.to_string(),
        });
    }
    let lon = parse_number(idx, tokens[0])?;
    let lat = parse_number(idx, tokens[1])?;
    LonLat::checked(lon, lat).map_err(|problem| Malformed::OutOfRange { idx, problem })
}

fn parse_number(idx: usize, token: &str) -> Result<f64, Malformed> {
    match token.parse::<f64>() {
        // "inf" and "NaN" parse, but aren't coordinates
        Ok(x) if x.is_finite() => Ok(x),
        _ => Err(Malformed::NotANumber {
            idx,
            token: token.to_string(),
        }),
    }
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    // The prefixes are ASCII, so a match always ends on a char boundary
    let n = prefix.len();
    if text.len() >= n && text.as_bytes()[..n].eq_ignore_ascii_case(prefix.as_bytes()) {
        Some(&text[n..])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_xorshift::XorShiftRng;

    use super::*;
    use crate::BadLonLat;

    fn malformed(text: &str) -> Malformed {
        match parse_linestring(text) {
            Err(GeometryError::MalformedGeometry(problem)) => problem,
            x => panic!("{} should be malformed, but got {:?}", text, x),
        }
    }

    #[test]
    fn axis_order() {
        let pts = parse_linestring("LINESTRING(23.7 37.9, 23.8 38.0)").unwrap();
        assert_eq!(2, pts.len());
        assert_eq!(37.9, pts[0].latitude());
        assert_eq!(23.7, pts[0].longitude());
        assert_eq!(38.0, pts[1].latitude());
        assert_eq!(23.8, pts[1].longitude());
    }

    #[test]
    fn srid_is_ignored() {
        assert_eq!(
            parse_linestring("LINESTRING(1 2, 3 4)").unwrap(),
            parse_linestring("SRID=4326;LINESTRING(1 2, 3 4)").unwrap()
        );
        assert_eq!(
            vec![LonLat::new(23.721, 37.983), LonLat::new(23.723, 37.985)],
            parse_linestring("SRID=4326;LINESTRING(23.721 37.983, 23.723 37.985)").unwrap()
        );
    }

    #[test]
    fn forgiving_whitespace_and_case() {
        let expected = vec![
            LonLat::new(1.0, 2.0),
            LonLat::new(3.0, 4.0),
            LonLat::new(-5.5, 6.0),
        ];
        for input in [
            "LINESTRING(1 2,3 4,-5.5 6)",
            "  linestring (1   2 , 3 4,  -5.5  6 )  ",
            "srid=4326;LineString\t(1 2, 3 4, -5.5 6)",
            " SRID=3857; LINESTRING(1 2, 3 4, -5.5 6)\n",
            "LINESTRING(1.0 2e0, +3 4, -5.50 6)",
        ] {
            assert_eq!(expected, parse_linestring(input).unwrap(), "{}", input);
        }
    }

    #[test]
    fn rejections() {
        assert_eq!(Malformed::SinglePoint, malformed("LINESTRING(1 2)"));
        assert_eq!(Malformed::NotLineString, malformed("POLYGON((0 0))"));
        assert_eq!(Malformed::NotLineString, malformed("POINT(1 2)"));
        assert_eq!(Malformed::NotLineString, malformed(""));
        assert_eq!(Malformed::NotLineString, malformed("LINESTRING"));
        assert_eq!(Malformed::NotLineString, malformed("LINESTRINGS(1 2, 3 4)"));
        assert_eq!(Malformed::Empty, malformed("LINESTRING()"));
        assert_eq!(Malformed::Empty, malformed("LINESTRING( )"));
        assert_eq!(Malformed::Empty, malformed("LINESTRING EMPTY"));
        assert_eq!(Malformed::Unbalanced, malformed("LINESTRING(1 2, 3 4"));
        assert_eq!(Malformed::Unbalanced, malformed("LINESTRING((1 2, 3 4))"));
        assert_eq!(Malformed::Unbalanced, malformed("LINESTRING(1 2, 3 4))"));
        // A bad SRID isn't stripped, so the rest doesn't look like a LINESTRING
        assert_eq!(
            Malformed::NotLineString,
            malformed("SRID=abc;LINESTRING(1 2, 3 4)")
        );
        assert_eq!(
            Malformed::NotLineString,
            malformed("SRID=;LINESTRING(1 2, 3 4)")
        );
        // No whitespace allowed inside the prefix
        assert_eq!(
            Malformed::NotLineString,
            malformed("SRID=4326 ;LINESTRING(1 2, 3 4)")
        );
        // The closing parenthesis has to end the text
        assert_eq!(
            Malformed::Unbalanced,
            malformed("LINESTRING(1 2, 3 4) junk")
        );
    }

    #[test]
    fn rejections_point_at_the_problem() {
        assert_eq!(
            Malformed::OutOfRange {
                idx: 0,
                problem: BadLonLat::LongitudeOutOfRange(200.0)
            },
            malformed("LINESTRING(200 2, 3 4)")
        );
        assert_eq!(
            Malformed::OutOfRange {
                idx: 1,
                problem: BadLonLat::LatitudeOutOfRange(-91.0)
            },
            malformed("LINESTRING(1 2, 3 -91)")
        );
        assert_eq!(
            Malformed::WrongArity {
                idx: 1,
                pair: "3 4 5".to_string()
            },
            malformed("LINESTRING(1 2, 3 4 5)")
        );
        assert_eq!(
            Malformed::WrongArity {
                idx: 1,
                pair: "3".to_string()
            },
            malformed("LINESTRING(1 2, 3, 4 5)")
        );
        assert_eq!(
            Malformed::WrongArity {
                idx: 1,
                pair: "".to_string()
            },
            malformed("LINESTRING(1 2,, 3 4)")
        );
        assert_eq!(
            Malformed::NotANumber {
                idx: 2,
                token: "x".to_string()
            },
            malformed("LINESTRING(1 2, 3 4, x 5)")
        );
        assert_eq!(
            Malformed::NotANumber {
                idx: 0,
                token: "NaN".to_string()
            },
            malformed("LINESTRING(1 NaN, 3 4)")
        );
        assert_eq!(
            Malformed::NotANumber {
                idx: 1,
                token: "inf".to_string()
            },
            malformed("LINESTRING(1 2, inf 4)")
        );

        let msg = parse_linestring("LINESTRING(1 2, 3 4, x 5)")
            .unwrap_err()
            .to_string();
        assert!(msg.contains("point 2"), "{}", msg);
        assert!(msg.contains("\"x\""), "{}", msg);
    }

    #[test]
    fn serialize() {
        assert_eq!(
            "LINESTRING(23.721 37.983, 23.723 37.985)",
            to_linestring(&[LonLat::new(23.721, 37.983), LonLat::new(23.723, 37.985)]).unwrap()
        );
        assert_eq!(
            GeometryError::InvalidGeometry { num_pts: 0 },
            to_linestring(&[]).unwrap_err()
        );
        assert_eq!(
            GeometryError::InvalidGeometry { num_pts: 1 },
            to_linestring(&[LonLat::new(1.0, 2.0)]).unwrap_err()
        );
    }

    #[test]
    fn round_trip() {
        let mut rng = XorShiftRng::seed_from_u64(42);
        for _ in 0..100 {
            let num_pts = rng.gen_range(2..50);
            let pts: Vec<LonLat> = (0..num_pts)
                .map(|_| {
                    LonLat::new(
                        rng.gen_range(-180.0..=180.0),
                        rng.gen_range(-90.0..=90.0),
                    )
                })
                .collect();
            let text = to_linestring(&pts).unwrap();
            let parsed = parse_linestring(&text).unwrap();
            assert_eq!(pts.len(), parsed.len());
            for (pt1, pt2) in pts.iter().zip(parsed.iter()) {
                assert!((pt1.longitude() - pt2.longitude()).abs() < 1e-9, "{}", text);
                assert!((pt1.latitude() - pt2.latitude()).abs() < 1e-9, "{}", text);
            }
        }

        // Extremes and tiny values don't switch to scientific notation that fails to parse
        let pts = vec![
            LonLat::new(-180.0, -90.0),
            LonLat::new(180.0, 90.0),
            LonLat::new(1e-12, -0.0),
        ];
        assert_eq!(
            pts,
            parse_linestring(&to_linestring(&pts).unwrap()).unwrap()
        );
    }

    #[test]
    fn helpers() {
        assert_eq!(
            "LINESTRING(1 2, 3 4)",
            strip_srid("  SRID=4326;LINESTRING(1 2, 3 4) ")
        );
        assert_eq!("LINESTRING(1 2, 3 4)", strip_srid("LINESTRING(1 2, 3 4)"));
        assert_eq!("SRID=x;POINT(1 2)", strip_srid("SRID=x;POINT(1 2)"));

        assert!(looks_like_linestring("SRID=4326;linestring (garbage"));
        assert!(!looks_like_linestring("POLYGON((0 0))"));
        assert!(looks_like_linestring("LINESTRING EMPTY"));
        assert!(!looks_like_linestring("LINESTRING EMPTYISH"));
        assert!(!looks_like_linestring("SRID=4326 ;LINESTRING(1 2, 3 4)"));

        // Anything failing the cheap check fails the real parse the same way
        for input in [
            "",
            "POINT(1 2)",
            "LINESTRINGS(1 2, 3 4)",
            "LINESTRING EMPTYISH",
            "SRID=4326 ;LINESTRING(1 2, 3 4)",
        ] {
            assert!(!looks_like_linestring(input), "{}", input);
            assert_eq!(Malformed::NotLineString, malformed(input), "{}", input);
        }
    }
}
