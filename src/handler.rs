use warp::{http::StatusCode, Rejection, Reply};

type Result<T> = std::result::Result<T, Rejection>;

pub async fn health_handler() -> Result<impl Reply> {
    Ok(StatusCode::OK)
}
