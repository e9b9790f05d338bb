mod error;

/// Newsletter collection endpoints
pub mod newsletters;
/// Section editing endpoints
pub mod sections;
/// Template catalog endpoints
pub mod templates;

pub use error::{RestError, RestResult};

use actix_web::web::Bytes;

use serde::de::DeserializeOwned;

/// Parse an optional JSON body, an empty body meaning all defaults
fn json_or_default<T>(body: &Bytes) -> RestResult<T>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| RestError::ParseError(e.to_string()))
}
