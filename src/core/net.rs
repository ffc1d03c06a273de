use reqwest::header::RETRY_AFTER;

/// Status, `Retry-After` and full body of one response.
pub(crate) struct Received {
    pub(crate) status: u16,
    pub(crate) retry_after: Option<String>,
    pub(crate) body: String,
}

/// Read the response to the end.
pub(crate) async fn read_response(resp: reqwest::Response) -> Result<Received, reqwest::Error> {
    let status = resp.status().as_u16();
    let retry_after = resp
        .headers()
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let body = resp.text().await?;

    Ok(Received {
        status,
        retry_after,
        body,
    })
}
