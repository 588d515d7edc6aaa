use regex::{Captures, Regex};
use std::sync::LazyLock;

/// The one declaration shape the extractor understands:
/// `Route::<verb>('<path>', '<Controller>@<method>')` with an optional
/// `->name('<alias>')` suffix. Verbs are case-insensitive; each string takes
/// either quote style; the handler reference splits on its first `@`.
/// Anything else in a route file simply does not match.
static ROUTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"Route::(?i:get|post|put|delete)\s*\(\s*['"]([^'"]+)['"]\s*,\s*['"]([^@'"]+)@([^'"]+)['"]\s*\)(?:->name\(['"]([^'"]+)['"]\))?"#,
    )
    .expect("route pattern")
});

/// One route declaration as extracted from source text. Controller file and
/// method line are resolved by later stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// Alias from the `->name(...)` binding when present, else the path.
    pub route_name: String,
    pub controller_name: String,
    pub method_name: String,
}

fn route_from_captures(caps: &Captures) -> RouteMatch {
    let path = &caps[1];
    let alias = caps.get(4).map(|m| m.as_str());
    RouteMatch {
        route_name: alias.unwrap_or(path).to_string(),
        controller_name: caps[2].to_string(),
        method_name: caps[3].to_string(),
    }
}

/// Extract every declaration from one file's full content, in text order.
/// The content is treated as a single buffer, so a declaration split across
/// lines still matches as long as the combined text fits the shape.
pub fn extract_routes(content: &str) -> Vec<RouteMatch> {
    ROUTE_RE
        .captures_iter(content)
        .map(|caps| route_from_captures(&caps))
        .collect()
}

/// Match a single line of text against the declaration shape. First match
/// only; `None` when the line holds no recognizable declaration.
pub fn match_route_line(line: &str) -> Option<RouteMatch> {
    ROUTE_RE
        .captures(line)
        .map(|caps| route_from_captures(&caps))
}
