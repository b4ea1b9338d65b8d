//! ASCII STL file parser
//!
//! Implements the standard ASCII STL subset: lines are tokenized by
//! whitespace, runs of lines delimited by `endfacet` (case-insensitive)
//! constitute one facet, and `vertex` lines contribute coordinates.
//! Normals, `outer loop`/`endloop` and solid headers are ignored.

use crate::error::{StlError, StlResult};
use lamina_core::{Facet, Point};
use std::fs;
use std::path::Path;
use tracing::info;

/// ASCII STL importer
#[derive(Debug)]
pub struct StlImporter {
    facets: Vec<Facet>,
}

impl StlImporter {
    /// Create a new importer from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> StlResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            StlError::ReadError(format!(
                "Failed to read file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_string(&content)
    }

    /// Create a new importer from STL text
    pub fn from_string(content: &str) -> StlResult<Self> {
        let facets = Self::parse_facets(content)?;
        info!("Parsed {} facets", facets.len());

        Ok(Self { facets })
    }

    /// Split the file into `endfacet`-delimited runs and parse each one.
    ///
    /// The tail after the last `endfacet` (the `endsolid` footer) is not a
    /// facet run and is ignored.
    fn parse_facets(content: &str) -> StlResult<Vec<Facet>> {
        let mut facets = Vec::new();
        let mut vertices: Vec<Point> = Vec::new();

        for line in content.lines() {
            let mut tokens = line.split_whitespace();
            let Some(first) = tokens.next() else {
                continue;
            };

            if first.eq_ignore_ascii_case("vertex") {
                vertices.push(Self::parse_vertex(line, tokens)?);
            } else if first.eq_ignore_ascii_case("endfacet") {
                if vertices.len() != 3 {
                    return Err(StlError::MalformedFacet(format!(
                        "facet {} has {} vertices, expected 3",
                        facets.len() + 1,
                        vertices.len()
                    )));
                }
                facets.push(Facet::new(vertices[0], vertices[1], vertices[2]));
                vertices.clear();
            }
        }

        Ok(facets)
    }

    /// Parse the three coordinates following a `vertex` token.
    fn parse_vertex<'a, I>(line: &str, mut tokens: I) -> StlResult<Point>
    where
        I: Iterator<Item = &'a str>,
    {
        let mut coords = [0.0f64; 3];
        for coord in coords.iter_mut() {
            let token = tokens.next().ok_or_else(|| {
                StlError::ParseError(format!("vertex line '{}' has fewer than 3 coordinates", line.trim()))
            })?;
            *coord = token.parse().map_err(|_| {
                StlError::ParseError(format!("invalid coordinate '{}' in line '{}'", token, line.trim()))
            })?;
        }
        Ok(Point::new(coords[0], coords[1], coords[2]))
    }

    /// Parsed facets
    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    /// Number of parsed facets
    pub fn facet_count(&self) -> usize {
        self.facets.len()
    }

    /// Consume the importer, yielding the facets
    pub fn into_facets(self) -> Vec<Facet> {
        self.facets
    }
}
