use crate::error::{PcpError, PcpResult};

pub(super) fn validate_pointer_x(pointer_x_px: f64) -> PcpResult<f64> {
    if !pointer_x_px.is_finite() {
        return Err(PcpError::InvalidData("pointer x must be finite".to_owned()));
    }
    Ok(pointer_x_px)
}
