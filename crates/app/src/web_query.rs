//! Browser query parameters.

/// Floor from `?floor=<n>`, if present and numeric.
pub fn query_floor() -> Option<i32> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get("floor")?.trim().parse().ok()
}
