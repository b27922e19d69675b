//! FFI bindings for the branding core
//!
//! C-compatible entry points so a host UI can resolve its network profile
//! without linking a Rust runtime. Strings cross the boundary as
//! NUL-terminated UTF-8; every string handed out must be released with
//! `branding_core_free_string` or `branding_core_free_result`.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use crate::core::resolver::{classify_network, NetworkProfileResolver};
use crate::domain::entities::GatewayAllowList;
use crate::shared::error::BrandingError;
use crate::shared::types::ChainIdentifier;

const MAX_CHAIN_ID_LENGTH: usize = 256;
const MAX_GATEWAY_LENGTH: usize = 64;
const MAX_FILTER_LENGTH: usize = 1024;

// Error codes reported through `BrandingResult::error_code`
const ERROR_INVALID_INPUT: i32 = 1;
const ERROR_SERIALIZATION: i32 = 2;
const ERROR_STRING_CONVERSION: i32 = 3;

/// FFI result wrapper
#[repr(C)]
pub struct BrandingResult {
    success: bool,
    data: *mut c_char,
    error_code: i32,
}

impl BrandingResult {
    fn success(data: String) -> Self {
        match CString::new(data) {
            Ok(c_string) => Self {
                success: true,
                data: c_string.into_raw(),
                error_code: 0,
            },
            Err(_) => Self::error(ERROR_STRING_CONVERSION),
        }
    }

    fn error(error_code: i32) -> Self {
        Self {
            success: false,
            data: ptr::null_mut(),
            error_code,
        }
    }
}

/// Read an optional C string. NULL maps to `None`.
fn read_input<'a>(input: *const c_char, max_length: usize) -> Result<Option<&'a str>, BrandingError> {
    if input.is_null() {
        return Ok(None);
    }

    let input_str = unsafe { CStr::from_ptr(input) }.to_str()?;
    if input_str.len() > max_length {
        return Err(BrandingError::validation("Input too long"));
    }

    Ok(Some(input_str))
}

/// 1 when `chain_id` is the mainnet id, 0 otherwise.
///
/// NULL, oversized or non UTF-8 input counts as testnet.
#[no_mangle]
pub extern "C" fn branding_core_is_primary_network(chain_id: *const c_char) -> i32 {
    match read_input(chain_id, MAX_CHAIN_ID_LENGTH) {
        Ok(Some(id)) => classify_network(&ChainIdentifier::from(id)).is_primary() as i32,
        _ => 0,
    }
}

/// Whether `gateway` may be offered. NULL asks whether any gateway is allowed.
#[no_mangle]
pub extern "C" fn branding_core_allowed_gateway(gateway: *const c_char) -> bool {
    match read_input(gateway, MAX_GATEWAY_LENGTH) {
        Ok(gateway) => GatewayAllowList::allowed_gateway(gateway),
        Err(_) => false,
    }
}

/// Full profile for `chain_id` as JSON
#[no_mangle]
pub extern "C" fn branding_core_profile_json(chain_id: *const c_char) -> BrandingResult {
    let chain_id = match read_input(chain_id, MAX_CHAIN_ID_LENGTH) {
        Ok(Some(id)) => id,
        _ => return BrandingResult::error(ERROR_INVALID_INPUT),
    };

    match NetworkProfileResolver::new(chain_id).snapshot().to_json() {
        Ok(json) => BrandingResult::success(json),
        Err(_) => BrandingResult::error(ERROR_SERIALIZATION),
    }
}

/// Featured markets for `chain_id` as a JSON array.
///
/// `bases` is an optional comma separated filter; NULL or empty returns
/// every pair.
#[no_mangle]
pub extern "C" fn branding_core_featured_markets_json(
    chain_id: *const c_char,
    bases: *const c_char,
) -> BrandingResult {
    let chain_id = match read_input(chain_id, MAX_CHAIN_ID_LENGTH) {
        Ok(Some(id)) => id,
        _ => return BrandingResult::error(ERROR_INVALID_INPUT),
    };
    let bases: Vec<&str> = match read_input(bases, MAX_FILTER_LENGTH) {
        Ok(filter) => filter
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|base| !base.is_empty())
            .collect(),
        Err(_) => return BrandingResult::error(ERROR_INVALID_INPUT),
    };

    let pairs = NetworkProfileResolver::new(chain_id).featured_market_pairs(&bases[..]);
    match serde_json::to_string(&pairs) {
        Ok(json) => BrandingResult::success(json),
        Err(_) => BrandingResult::error(ERROR_SERIALIZATION),
    }
}

/// Free a string returned by this library
#[no_mangle]
pub extern "C" fn branding_core_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}

/// Free the data held by a `BrandingResult`
#[no_mangle]
pub extern "C" fn branding_core_free_result(result: *mut BrandingResult) {
    if !result.is_null() {
        unsafe {
            let result_ref = &mut *result;
            if !result_ref.data.is_null() {
                let _ = CString::from_raw(result_ref.data);
                result_ref.data = ptr::null_mut();
            }
        }
    }
}
