// Request body and path validation for /items
// Author: kelexine (https://github.com/kelexine)
//
// Bodies are checked field by field against a raw JSON value rather than a
// derived struct: a key that is present with the wrong type and a key that is
// absent produce different messages, and the checks run in a fixed order.

use crate::error::{ApiError, Result};
use crate::store::ItemUpdate;
use serde_json::{Map, Number, Value};
use std::num::IntErrorKind;
use tracing::debug;

/// Fields required to create an item
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub quantity: Number,
    pub purchased_status: bool,
}

/// Parse the `{id}` path segment.
///
/// Anything that is not a non-negative integer is rejected. A well-formed
/// integer too large for `u64` can never have been assigned, so it is
/// reported as a missing item rather than a malformed id.
pub fn parse_item_id(raw: &str) -> Result<u64> {
    raw.parse::<u64>().map_err(|e| {
        debug!("Rejected item id segment {:?}", raw);
        match e.kind() {
            IntErrorKind::PosOverflow => ApiError::item_not_found(),
            _ => ApiError::invalid_item_id(),
        }
    })
}

/// Parse a fully-read request body into a JSON object.
///
/// A document that is not JSON, or is JSON `null`, is an invalid payload.
/// Any other non-object document is treated as an object without fields.
fn parse_object(body: &[u8]) -> Result<Map<String, Value>> {
    let value: Value = serde_json::from_slice(body).map_err(|e| {
        debug!("Rejected malformed JSON body: {}", e);
        ApiError::InvalidJson
    })?;

    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Err(ApiError::InvalidJson),
        _ => Ok(Map::new()),
    }
}

fn bad_request(message: &str) -> ApiError {
    debug!("Rejected item payload: {}", message);
    ApiError::BadRequest(message.to_string())
}

/// Validate a create body. Checks run name, quantity, purchasedStatus; the first failure wins.
pub fn validate_new_item(body: &[u8]) -> Result<NewItem> {
    let fields = parse_object(body)?;

    let name = match fields.get("name") {
        Some(Value::String(name)) if !name.is_empty() => name.clone(),
        _ => return Err(bad_request("Name is required and must be a string")),
    };

    let quantity = match fields.get("quantity") {
        Some(Value::Number(quantity)) => quantity.clone(),
        _ => return Err(bad_request("Quantity is required and must be a number")),
    };

    let purchased_status = match fields.get("purchasedStatus") {
        Some(Value::Bool(status)) => *status,
        _ => {
            return Err(bad_request(
                "Purchased status is required and must be a boolean",
            ))
        }
    };

    Ok(NewItem {
        name,
        quantity,
        purchased_status,
    })
}

/// Validate an update body. Every field is optional but must be well-typed when present,
/// and at least one must be supplied.
pub fn validate_item_update(body: &[u8]) -> Result<ItemUpdate> {
    let fields = parse_object(body)?;

    let name = match fields.get("name") {
        None => None,
        Some(Value::String(name)) if name.is_empty() => {
            return Err(bad_request("Name must be a non-empty string"))
        }
        Some(Value::String(name)) => Some(name.clone()),
        Some(_) => return Err(bad_request("Name must be a string")),
    };

    let quantity = match fields.get("quantity") {
        None => None,
        Some(Value::Number(quantity)) => Some(quantity.clone()),
        Some(_) => return Err(bad_request("Quantity must be a number")),
    };

    let purchased_status = match fields.get("purchasedStatus") {
        None => None,
        Some(Value::Bool(status)) => Some(*status),
        Some(_) => return Err(bad_request("Purchased status must be a boolean")),
    };

    let update = ItemUpdate {
        name,
        quantity,
        purchased_status,
    };

    if update.is_empty() {
        return Err(bad_request(
            "At least one field (name, quantity, or purchasedStatus) must be provided",
        ));
    }

    Ok(update)
}
