use std::fs::File;
use std::io::Read;

use anyhow::Context;
use serde::Deserialize;

use crate::problem::graph::{DataFormatError, Graph};

#[derive(Debug, Deserialize)]
pub struct JsonInstance {
    #[serde(rename = "number of vertices")]
    pub num_vertices: usize,
    #[serde(rename = "number of stop vertices")]
    pub num_stops: usize,
    pub graph: Vec<Vec<i64>>,
    #[serde(rename = "stop vertices")]
    pub stop_vertices: Vec<i64>,
}

impl JsonInstance {
    pub fn into_graph(self) -> Result<Graph, DataFormatError> {
        if self.graph.len() != self.num_vertices {
            return Err(DataFormatError::VertexCountMismatch {
                declared: self.num_vertices,
                actual: self.graph.len(),
            });
        }
        Graph::from_matrix(&self.graph, self.num_stops, &self.stop_vertices)
    }
}

pub fn parse_instance(json: &str) -> anyhow::Result<Graph> {
    let instance: JsonInstance =
        serde_json::from_str(json).context("malformed instance json")?;
    Ok(instance.into_graph()?)
}

pub fn load_instance(path: impl Into<String>) -> anyhow::Result<Graph> {
    let path = path.into();
    let mut s = String::new();
    File::open(&path)
        .with_context(|| format!("unable to open instance file '{}'", path))?
        .read_to_string(&mut s)?;
    if s.trim().is_empty() {
        return Err(anyhow::Error::msg(format!("instance file '{}' is empty", path)));
    }
    parse_instance(s.as_str()).with_context(|| format!("while reading '{}'", path))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SCENARIO_A: &str = r#"{
        "number of vertices": 4,
        "number of stop vertices": 2,
        "graph": [[0, 2, 0, 0], [0, 0, 3, 0], [0, 0, 0, 1], [0, 0, 0, 0]],
        "stop vertices": [0, 3]
    }"#;

    #[test]
    fn parses_instance() -> anyhow::Result<()> {
        let graph = parse_instance(SCENARIO_A)?;
        assert_eq!(graph.num_vertices(), 4);
        assert_eq!(graph.num_stops(), 2);
        assert_eq!(graph.weight(1, 2), 3);
        assert!(graph.is_stop(3));
        Ok(())
    }

    #[test]
    fn ignores_unknown_fields() -> anyhow::Result<()> {
        let json = r#"{"number of vertices": 2, "number of stop vertices": 2, "p": 0.5,
            "graph": [[0, 1], [0, 0]], "stop vertices": [1, 0]}"#;
        assert_eq!(parse_instance(json)?.weight(0, 1), 1);
        Ok(())
    }

    #[test]
    fn missing_field_is_an_error() {
        let json = r#"{"number of vertices": 2, "graph": [[0, 1], [0, 0]], "stop vertices": [0, 1]}"#;
        assert!(parse_instance(json).is_err());
    }

    #[test]
    fn declared_vertex_count_must_match() {
        let json = r#"{"number of vertices": 3, "number of stop vertices": 2,
            "graph": [[0, 1], [0, 0]], "stop vertices": [0, 1]}"#;
        let err = parse_instance(json).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DataFormatError>(),
            Some(&DataFormatError::VertexCountMismatch {
                declared: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn negative_weight_is_rejected() {
        let json = r#"{"number of vertices": 2, "number of stop vertices": 2,
            "graph": [[0, -4], [1, 0]], "stop vertices": [0, 1]}"#;
        let err = parse_instance(json).unwrap_err();
        assert!(err.downcast_ref::<DataFormatError>().is_some());
    }

    #[test]
    fn overflowing_segment_weights_are_rejected() {
        let json = format!(
            r#"{{"number of vertices": 4, "number of stop vertices": 2,
            "graph": [[0, {w}, 0, 0], [0, 0, {w}, 0], [0, 0, 0, {w}], [0, 0, 0, 0]],
            "stop vertices": [0, 3]}}"#,
            w = i64::MAX
        );
        let err = parse_instance(&json).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DataFormatError>(),
            Some(&DataFormatError::WeightOverflow {
                max_weight: i64::MAX,
                arcs: 3
            })
        );
    }

    #[test]
    fn loads_from_file() -> anyhow::Result<()> {
        let path = std::env::temp_dir().join(format!("stopover-instance-{}.json", std::process::id()));
        File::create(&path)?.write_all(SCENARIO_A.as_bytes())?;
        let graph = load_instance(path.to_string_lossy())?;
        assert_eq!(graph.num_vertices(), 4);
        std::fs::remove_file(&path)?;
        Ok(())
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_instance("/nonexistent/stopover/instance.json").is_err());
    }
}
