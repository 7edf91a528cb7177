//! Video identifier extraction from user input.
//!
//! Accepts a bare id, a watch page URL (`...watch?v=<id>&...`) or a short
//! link (`https://youtu.be/<id>`).

/// Errors for input that does not name a video.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VideoIdError {
    #[error("No video id given")]
    Empty,

    #[error("URL has no 'v' query parameter: {0}")]
    MissingParam(String),
}

/// Extract the video identifier from a bare id or a URL.
pub fn video_id_from_input(input: &str) -> Result<String, VideoIdError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(VideoIdError::Empty);
    }

    if !looks_like_url(input) {
        return Ok(input.to_string());
    }

    if let Some(id) = query_param(input, "v") {
        return Ok(id.to_string());
    }

    // Short links carry the id as the first path component
    if let Some(rest) = after_host(input, "youtu.be/") {
        let id = rest.split(['?', '#', '/']).next().unwrap_or("");
        if !id.is_empty() {
            return Ok(id.to_string());
        }
    }

    Err(VideoIdError::MissingParam(input.to_string()))
}

fn looks_like_url(input: &str) -> bool {
    input.contains("://") || input.contains('?') || input.contains('/')
}

/// Value of query parameter `name`, ignoring any fragment.
fn query_param<'a>(url: &'a str, name: &str) -> Option<&'a str> {
    let query = url.split_once('?')?.1;
    let query = query.split('#').next().unwrap_or(query);
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

fn after_host<'a>(url: &'a str, host_and_slash: &str) -> Option<&'a str> {
    url.find(host_and_slash)
        .map(|idx| &url[idx + host_and_slash.len()..])
}
