use schemars::schema::RootSchema;
use schemars::schema_for;

use crate::request::MaskRequest;

/// Emit the JSON Schema for a masking request document.
pub fn request_json_schema() -> RootSchema {
    schema_for!(MaskRequest)
}
