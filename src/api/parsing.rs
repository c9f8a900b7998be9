use serde_json::Value;

/// Look up a header value, tolerating inconsistent casing.
///
/// API Gateway may lowercase header names, so the exact key is tried first
/// and a case-insensitive scan second.
pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}

/// Extract the raw request body from an API Gateway proxy event.
///
/// The body must stay byte-exact: signatures are computed over the raw
/// text, never over re-serialized JSON.
pub fn extract_body(payload: &Value) -> Option<&str> {
    payload.get("body").and_then(Value::as_str)
}

/// The request's Content-Type header, if the transport supplied one.
pub fn content_type<'a>(headers: &'a Value) -> Option<&'a str> {
    get_header_value(headers, "Content-Type")
}
