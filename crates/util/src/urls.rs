//! Route and image URL helpers.

/// Resolve an image reference against the API origin.
///
/// - empty or missing references resolve to `None`
/// - references starting with `http` are already absolute and kept verbatim
/// - anything else is a path joined onto `base_origin` with exactly one `/`
pub fn resolve_image_url(reference: Option<&str>, base_origin: &str) -> Option<String> {
    let reference = reference?.trim();
    if reference.is_empty() {
        return None;
    }
    if reference.starts_with("http") {
        return Some(reference.to_string());
    }

    let relative = reference.strip_prefix('/').unwrap_or(reference);
    Some(format!("{}/{}", base_origin.trim_end_matches('/'), relative))
}

/// Build a route from a root and slug segments, e.g. `/services/web/ui-ux`.
pub fn join_route(root: &str, segments: &[&str]) -> String {
    let mut route = root.trim_end_matches('/').to_string();
    for segment in segments {
        route.push('/');
        route.push_str(segment.trim_matches('/'));
    }
    route
}
