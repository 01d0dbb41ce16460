/// Ordered key/value pairs as submitted. Keys may repeat.
pub type Params = Vec<(String, String)>;

pub fn parse_query(query: Option<&str>) -> Params {
    query
        .map(|q| parse_form_urlencoded(q.as_bytes()))
        .unwrap_or_default()
}

pub fn parse_form_urlencoded(body: &[u8]) -> Params {
    form_urlencoded::parse(body)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

/// Text fields of a multipart body. File parts are skipped.
pub async fn parse_multipart(content_type: &str, body: bytes::Bytes) -> Result<Params, String> {
    let boundary = multer::parse_boundary(content_type)
        .map_err(|_| "Missing multipart boundary".to_string())?;

    let stream = futures_util::stream::once(async { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut params = Params::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Multipart error: {e}"))?
    {
        if field.file_name().is_some() {
            continue;
        }
        let name = field.name().unwrap_or("unknown").to_string();
        let value = field
            .text()
            .await
            .map_err(|e| format!("Field read error: {e}"))?;
        params.push((name, value));
    }

    Ok(params)
}

/// First value submitted under `key`, or the empty string.
pub fn first<'a>(params: &'a [(String, String)], key: &str) -> &'a str {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .unwrap_or("")
}
