/// Strip JSONP padding, i.e. turn `callback({...});` into `{...}`. Plain JSON is returned as-is.
pub(crate) fn strip_padding(body: &[u8]) -> &[u8] {
    let body = body.trim_ascii();

    if matches!(body.first(), Some(b'{' | b'[')) {
        return body;
    }

    match (
        body.iter().position(|&b| b == b'('),
        body.iter().rposition(|&b| b == b')'),
    ) {
        (Some(open), Some(close)) if open < close => body[open + 1..close].trim_ascii(),
        _ => body,
    }
}
