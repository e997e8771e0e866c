use graphwalk_core::format::OutputFormat;
use graphwalk_core::graph::Strategy;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse traversal/search strategy from string
pub fn parse_strategy(s: &str) -> std::result::Result<Strategy, String> {
    s.parse::<Strategy>().map_err(|e| e.to_string())
}

/// Parse a `PARENT:CHILD` (or `PARENT,CHILD`) relation of non-negative ids
pub fn parse_pair(s: &str) -> std::result::Result<(i64, i64), String> {
    let (parent, child) = s
        .split_once(':')
        .or_else(|| s.split_once(','))
        .ok_or_else(|| format!("expected PARENT:CHILD, got '{}'", s))?;
    let parse = |part: &str| {
        let part = part.trim();
        match part.parse::<i64>() {
            Ok(id) if id >= 0 => Ok(id),
            Ok(_) => Err(format!("invalid id '{}': must be non-negative", part)),
            Err(e) => Err(format!("invalid id '{}': {}", part, e)),
        }
    };
    Ok((parse(parent)?, parse(child)?))
}
