use crate::AppResult;
use anyhow::anyhow;
use soft800_lib::Address;

/// Parse an hexadecimal address written `0x1234`, `#0x1234`, `$1234` or
/// `1234`.
pub fn parse_address(text: &str) -> AppResult<Address> {
    let text = text.trim();
    let digits = text
        .strip_prefix("#0x")
        .or_else(|| text.strip_prefix("0x"))
        .or_else(|| text.strip_prefix('$'))
        .unwrap_or(text);

    if digits.is_empty() || digits.len() > 4 {
        return Err(anyhow!("'{}' is not a 16 bits hexadecimal address", text));
    }

    let padded = format!("{:0>4}", digits);
    let bytes = hex::decode(&padded).map_err(|e| anyhow!("invalid address '{}': {}", text, e))?;

    Ok(Address::from(u16::from_be_bytes([bytes[0], bytes[1]])))
}

/// Format a memory region as a hex dump with both hex and ASCII representation
pub fn format_hex_dump(addr: usize, bytes: &[u8]) -> String {
    let width = 16;
    let mut lines = Vec::new();

    for (index, chunk) in bytes.chunks(width).enumerate() {
        let hex: String = chunk.iter().map(|byte| format!("{:02X} ", byte)).collect();
        let ascii: String = chunk
            .iter()
            .map(|byte| match byte {
                0x20..=0x7e => *byte as char,
                _ => '.',
            })
            .collect();
        lines.push(format!(
            "{:04X} : {: <width$}| {}",
            addr + index * width,
            hex,
            ascii,
            width = width * 3
        ));
    }

    lines.join("\n")
}
