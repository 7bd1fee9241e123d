//! Adapters from a request outcome to typed domain values.
//!
//! Each helper takes the `Result<Option<Value>>` a request resolves to: an
//! upstream error propagates untouched, absence (a 404) stays `None`, and a
//! payload that does not decode becomes [`DraftSportError::Decode`].

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{DraftSportError, Result};

/// A type that can be built from a raw JSON payload.
pub trait Decode: Sized {
    fn decode(raw: Value) -> Result<Self>;
}

impl<T> Decode for T
where
    T: DeserializeOwned,
{
    fn decode(raw: Value) -> Result<Self> {
        serde_json::from_value(raw).map_err(|e| {
            DraftSportError::decode(format!("{}: {e}", std::any::type_name::<T>()))
        })
    }
}

/// Decode the payload object directly.
pub fn decode_one<T: Decode>(payload: Result<Option<Value>>) -> Result<Option<T>> {
    payload?.map(T::decode).transpose()
}

/// Decode element 0 of an array payload.
pub fn decode_single<T: Decode>(payload: Result<Option<Value>>) -> Result<Option<T>> {
    let Some(raw) = payload? else {
        return Ok(None);
    };
    match raw {
        Value::Array(items) => match items.into_iter().next() {
            Some(first) => T::decode(first).map(Some),
            None => Err(DraftSportError::decode(format!(
                "{}: expected a non-empty array",
                std::any::type_name::<T>()
            ))),
        },
        _ => Err(DraftSportError::decode(format!(
            "{}: expected an array",
            std::any::type_name::<T>()
        ))),
    }
}

/// Decode every element of an array payload; the first failure aborts the
/// whole batch.
pub fn decode_many<T: Decode>(payload: Result<Option<Value>>) -> Result<Option<Vec<T>>> {
    let Some(raw) = payload? else {
        return Ok(None);
    };
    match raw {
        Value::Array(items) => items
            .into_iter()
            .map(T::decode)
            .collect::<Result<Vec<_>>>()
            .map(Some),
        _ => Err(DraftSportError::decode(format!(
            "Vec<{}>: expected an array",
            std::any::type_name::<T>()
        ))),
    }
}
