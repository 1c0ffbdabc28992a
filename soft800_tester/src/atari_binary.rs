/*
 * Atari binary (XEX) files
 * A 0xFFFF header followed by segments: start address, end address (both
 * little endian, end included) and the data. Any segment may repeat the
 * 0xFFFF header. Segments loading RUNAD ($02E0) or INITAD ($02E2) carry the
 * run and init addresses.
 */
use crate::AppResult;
use anyhow::{anyhow, Context};
use soft800_lib::Address;
use std::path::Path;

pub const RUNAD: u16 = 0x02e0;
pub const INITAD: u16 = 0x02e2;

#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub address: Address,
    pub data: Vec<u8>,
}

#[derive(Debug, Default)]
pub struct AtariBinary {
    segments: Vec<Segment>,
}

fn read_word(bytes: &[u8], index: usize) -> Option<u16> {
    Some(u16::from_le_bytes([*bytes.get(index)?, *bytes.get(index + 1)?]))
}

impl AtariBinary {
    pub fn parse(bytes: &[u8]) -> AppResult<AtariBinary> {
        if read_word(bytes, 0) != Some(0xffff) {
            let header = bytes.iter().take(2).map(|b| format!("{:02x}", b)).collect::<String>();
            return Err(anyhow!("not an Atari binary, header is '{}' instead of 'ffff'", header));
        }

        let mut segments = Vec::new();
        let mut index = 0;

        while index < bytes.len() {
            if read_word(bytes, index) == Some(0xffff) {
                index += 2;
            }
            let (start, end) = match (read_word(bytes, index), read_word(bytes, index + 2)) {
                (Some(start), Some(end)) => (start, end),
                _ => return Err(anyhow!("truncated segment header at offset {}", index)),
            };
            if end < start {
                return Err(anyhow!(
                    "segment at offset {} ends (${:04X}) before it starts (${:04X})",
                    index,
                    end,
                    start
                ));
            }
            index += 4;
            let length = (end - start) as usize + 1;
            let data = bytes
                .get(index..index + length)
                .ok_or_else(|| anyhow!("segment ${:04X}-${:04X} is truncated", start, end))?;
            segments.push(Segment {
                address: Address::from(start),
                data: data.to_vec(),
            });
            index += length;
        }

        Ok(AtariBinary { segments })
    }

    pub fn from_file(path: &Path) -> AppResult<AtariBinary> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("could not read Atari binary '{}'", path.display()))?;

        AtariBinary::parse(&bytes)
            .with_context(|| format!("could not parse Atari binary '{}'", path.display()))
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Last address written in RUNAD, if any.
    pub fn run_address(&self) -> Option<Address> {
        self.vector(RUNAD)
    }

    /// Last address written in INITAD, if any.
    pub fn init_address(&self) -> Option<Address> {
        self.vector(INITAD)
    }

    fn vector(&self, location: u16) -> Option<Address> {
        self.segments
            .iter()
            .rev()
            .find(|segment| segment.address.as_u16() == location && segment.data.len() >= 2)
            .map(|segment| Address::from(u16::from_le_bytes([segment.data[0], segment.data[1]])))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_binary() -> Vec<u8> {
        vec![
            0xff, 0xff, // header
            0x00, 0x10, 0x04, 0x10, // $1000-$1004
            0x01, 0x01, 0x01, 0x01, 0x01, //
            0xe2, 0x02, 0xe3, 0x02, // INITAD
            0x01, 0x10, //
            0xff, 0xff, // repeated header
            0x00, 0x20, 0x01, 0x20, // $2000-$2001
            0x02, 0x02, //
            0xe0, 0x02, 0xe1, 0x02, // RUNAD
            0x02, 0x20,
        ]
    }

    #[test]
    fn test_segments() {
        let binary = AtariBinary::parse(&get_binary()).unwrap();
        let segments = binary.segments();
        assert_eq!(4, segments.len());
        assert_eq!(
            Segment {
                address: Address::from(0x1000u16),
                data: vec![0x01; 5]
            },
            segments[0]
        );
        assert_eq!(Address::from(0x2000u16), segments[2].address);
        assert_eq!(vec![0x02, 0x02], segments[2].data);
        assert_eq!(Some(Address::from(0x1001u16)), binary.init_address());
        assert_eq!(Some(Address::from(0x2002u16)), binary.run_address());
    }

    #[test]
    fn test_bad_header() {
        let mut bytes = get_binary();
        bytes[0] = 0x00;
        let error = AtariBinary::parse(&bytes).unwrap_err();
        assert!(error.to_string().contains("header is '00ff'"));
    }

    #[test]
    fn test_truncated() {
        let bytes = get_binary();
        let error = AtariBinary::parse(&bytes[..10]).unwrap_err();
        assert!(error.to_string().contains("$1000-$1004 is truncated"));
        let error = AtariBinary::parse(&[0xff, 0xff, 0x00, 0x10, 0x00, 0x0f]).unwrap_err();
        assert!(error.to_string().contains("before it starts"));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demo-app.xex");
        std::fs::write(&path, get_binary()).unwrap();
        let binary = AtariBinary::from_file(&path).unwrap();
        assert_eq!(4, binary.segments().len());
        assert!(AtariBinary::from_file(&dir.path().join("missing.xex")).is_err());
    }
}
