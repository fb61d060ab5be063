use itertools::Itertools;

use crate::arc::arcs_to_cubics;
use crate::errors::{Error, Result};
use crate::fitter::PathFitter;
use crate::path::{ResolvedSegment, RoughPath};
use crate::types::fstr;
use crate::{Operation, OutputFormat, ProcessConfig};

pub(crate) struct Processor<'a> {
    config: &'a ProcessConfig,
}

impl<'a> Processor<'a> {
    pub fn new(config: &'a ProcessConfig) -> Self {
        Self { config }
    }

    pub fn process(&self, input: &str) -> Result<String> {
        let data = input.trim();
        let path = if self.config.strict {
            RoughPath::try_new(data)?
        } else {
            RoughPath::new(data)
        };

        match self.config.operation {
            Operation::Parse => self.segments(&path),
            Operation::Points => self.points(&path),
            Operation::Arcs => Ok(arcs_to_cubics(&path).iter().join(" ")),
            Operation::Fit { ratio } => {
                if !ratio.is_finite() || ratio < 0. {
                    return Err(Error::InvalidValue("ratio".to_string(), ratio.to_string()));
                }
                let closed = self.config.closed.unwrap_or_else(|| path.closed());
                Ok(PathFitter::new(path.linear_points().to_vec(), closed).fit(ratio))
            }
        }
    }

    fn segments(&self, path: &RoughPath) -> Result<String> {
        match self.config.format {
            OutputFormat::Text => Ok(path.segments().iter().map(segment_line).join("\n")),
            OutputFormat::Json => to_json(&path.segments()),
        }
    }

    fn points(&self, path: &RoughPath) -> Result<String> {
        match self.config.format {
            OutputFormat::Text => Ok(path
                .linear_points()
                .iter()
                .map(|set| {
                    set.iter()
                        .map(|(x, y)| format!("{},{}", fstr(*x), fstr(*y)))
                        .join(" ")
                })
                .join("\n")),
            OutputFormat::Json => to_json(&path.linear_points()),
        }
    }
}

/// e.g. `l 5 5 -> 15,10`, or `Z -> -` where no point was resolved.
fn segment_line(s: &ResolvedSegment) -> String {
    let mut line = s.key().to_string();
    for v in &s.data {
        line.push(' ');
        line.push_str(&fstr(*v));
    }
    match s.point {
        Some((x, y)) => line.push_str(&format!(" -> {},{}", fstr(x), fstr(y))),
        None => line.push_str(" -> -"),
    }
    line
}

#[cfg(feature = "json")]
fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(not(feature = "json"))]
fn to_json<T: ?Sized>(_value: &T) -> Result<String> {
    Err(Error::InvalidValue(
        "format".to_string(),
        "json (requires the `json` feature)".to_string(),
    ))
}
