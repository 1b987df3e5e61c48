use dsgraph_core::graph::Backend;

/// One `--edge FROM:TO:WEIGHT` argument
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// Parse backend name from string
pub fn parse_backend(s: &str) -> std::result::Result<Backend, String> {
    s.parse::<Backend>().map_err(|e| e.to_string())
}

/// Parse `FROM:TO:WEIGHT`
pub fn parse_edge(s: &str) -> std::result::Result<EdgeSpec, String> {
    let mut parts = s.rsplitn(2, ':');
    let (Some(weight), Some(ends)) = (parts.next(), parts.next()) else {
        return Err(format!("expected FROM:TO:WEIGHT, got '{}'", s));
    };
    let Some((from, to)) = ends.split_once(':') else {
        return Err(format!("expected FROM:TO:WEIGHT, got '{}'", s));
    };

    let (from, to) = (from.trim(), to.trim());
    if from.is_empty() || to.is_empty() {
        return Err(format!("empty vertex name in '{}'", s));
    }
    if to.contains(':') {
        return Err(format!("vertex names may not contain ':' in '{}'", s));
    }

    let weight: f64 = weight
        .trim()
        .parse()
        .map_err(|_| format!("invalid weight '{}' in '{}'", weight, s))?;
    if !weight.is_finite() {
        return Err(format!("weight must be finite in '{}'", s));
    }

    Ok(EdgeSpec {
        from: from.to_string(),
        to: to.to_string(),
        weight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_edge() {
        let edge = parse_edge("Raleigh:Durham:15").unwrap();
        assert_eq!(edge.from, "Raleigh");
        assert_eq!(edge.to, "Durham");
        assert_eq!(edge.weight, 15.0);

        assert_eq!(parse_edge(" a : b : 2.5 ").unwrap().weight, 2.5);
    }

    #[test]
    fn test_parse_edge_rejects_malformed() {
        assert!(parse_edge("a:b").is_err());
        assert!(parse_edge("a::1").is_err());
        assert!(parse_edge("a:b:heavy").is_err());
        assert!(parse_edge("a:b:inf").is_err());
        assert!(parse_edge("a:b:c:1").unwrap_err().contains("may not contain ':'"));
    }

    #[test]
    fn test_parse_backend() {
        assert_eq!(parse_backend("adjacency-list").unwrap(), Backend::AdjacencyList);
        assert!(parse_backend("nope").unwrap_err().contains("invalid backend"));
    }
}
