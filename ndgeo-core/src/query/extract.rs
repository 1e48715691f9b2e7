//! Parameter extraction from lowercased query text

use regex::Regex;

use crate::error::Result;

/// Compiled patterns for every number the dispatcher pulls out of a query
#[derive(Debug, Clone)]
pub struct QueryExtractor {
    dimensions: Regex,
    parameter: Regex,
    axes: Regex,
    number: Regex,
    pyramid_base: Regex,
    pyramid_side: Regex,
    number_pair: Regex,
    bounds: Regex,
    area: Regex,
    density: Regex,
    seeds: Regex,
}

fn float(text: &str) -> Option<f64> {
    text.parse().ok()
}

impl QueryExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            // "4d", "4 d", "4 dimensions", "5-dimensional"; the trailing \b keeps
            // "10 density" from reading as ten dimensions
            dimensions: Regex::new(r"\b(\d+)\s*-?\s*d(?:imensions?|imensional)?\b")?,
            parameter: Regex::new(
                r"(?:radius|diameter|side|length)\s*(?:of|=|is)?\s*(\d+(?:\.\d+)?)|(\d+(?:\.\d+)?)\s*(?:radius|diameter|side|length)",
            )?,
            axes: Regex::new(r"(?:semi-axes|axes)\s*(?:of|=|is)?\s*([\d.,\s]+)")?,
            number: Regex::new(r"\b(\d+(?:\.\d+)?)\b")?,
            pyramid_base: Regex::new(r"base\s+(\d+(?:\.\d+)?)\s+height\s+(\d+(?:\.\d+)?)")?,
            pyramid_side: Regex::new(r"side\s+(\d+(?:\.\d+)?)\s+height\s+(\d+(?:\.\d+)?)")?,
            number_pair: Regex::new(r"\b(\d+(?:\.\d+)?)\s+(\d+(?:\.\d+)?)\b")?,
            bounds: Regex::new(r"bounds?\s+(\d+(?:\.\d+)?)\s+(\d+(?:\.\d+)?)")?,
            area: Regex::new(r"(\d+(?:\.\d+)?)x(\d+(?:\.\d+)?)")?,
            density: Regex::new(r"density\s+(\d+(?:\.\d+)?)")?,
            seeds: Regex::new(r"(?:seeds?|points?)\s+(\d+)")?,
        })
    }

    pub fn dimensions(&self, query: &str) -> Option<usize> {
        self.dimensions
            .captures(query)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }

    /// Radius, diameter or side length, whichever is mentioned first
    pub fn parameter(&self, query: &str) -> Option<f64> {
        let caps = self.parameter.captures(query)?;
        caps.get(1).or_else(|| caps.get(2)).and_then(|m| float(m.as_str()))
    }

    /// Numbers after "axes"/"semi-axes", or every standalone number when
    /// there are at least two of them
    pub fn semi_axes(&self, query: &str) -> Vec<f64> {
        if let Some(list) = self.axes.captures(query).and_then(|c| c.get(1)) {
            return list
                .as_str()
                .replace(',', " ")
                .split_whitespace()
                .filter_map(float)
                .collect();
        }

        let all: Vec<f64> = self
            .number
            .captures_iter(query)
            .filter_map(|c| c.get(1).and_then(|m| float(m.as_str())))
            .collect();
        if all.len() >= 2 {
            all
        } else {
            Vec::new()
        }
    }

    /// `(base side, height)` from "base b height h", "side b height h" or
    /// the first pair of adjacent numbers
    pub fn pyramid(&self, query: &str) -> Option<(f64, f64)> {
        [&self.pyramid_base, &self.pyramid_side, &self.number_pair]
            .into_iter()
            .find_map(|re| {
                let caps = re.captures(query)?;
                Some((float(&caps[1])?, float(&caps[2])?))
            })
    }

    /// "bounds a b" applies `[a, b]` to every axis; "WxH" gives
    /// `[[0, W], [0, H]]`
    pub fn bounds(&self, query: &str, dimensions: usize) -> Option<Vec<(f64, f64)>> {
        if let Some(caps) = self.bounds.captures(query) {
            let (min, max) = (float(&caps[1])?, float(&caps[2])?);
            return Some(vec![(min, max); dimensions]);
        }
        let caps = self.area.captures(query)?;
        Some(vec![(0.0, float(&caps[1])?), (0.0, float(&caps[2])?)])
    }

    pub fn density(&self, query: &str) -> Option<f64> {
        let caps = self.density.captures(query)?;
        float(&caps[1])
    }

    pub fn seed_count(&self, query: &str) -> Option<usize> {
        let caps = self.seeds.captures(query)?;
        caps[1].parse().ok()
    }
}
