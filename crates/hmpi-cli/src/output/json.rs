use hmpi_core::error::HmpiError;
use serde::Serialize;

pub fn print<T: Serialize>(value: &T) -> Result<(), HmpiError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
