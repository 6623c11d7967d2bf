use wasm_bindgen::prelude::*;

use crate::{decode_document, encode, MIME_TYPE};

/// Decodes a single document and encodes it back in compact form.
#[wasm_bindgen]
pub fn normalize(text: &str) -> Result<String, JsError> {
    let value = decode_document(text)?;

    Ok(encode(&value))
}

#[wasm_bindgen(js_name = mimeType)]
pub fn mime_type() -> String {
    MIME_TYPE.into()
}
