use crate::utils::util::Result;

#[derive(Debug, Clone, PartialEq, Copy)]
pub enum SvType {
    INSERTION,
    DELETION,
    INVERSION,
    DUPLICATION,
    CNV,
    BND,
}

impl SvType {
    /// Parses an SV type label, ignoring ASCII case (`del`, `Del` and `DEL` are all deletions).
    pub fn from_u8(bytes: &[u8]) -> Result<Self> {
        match bytes.to_ascii_uppercase().as_slice() {
            b"INS" => Ok(SvType::INSERTION),
            b"DEL" => Ok(SvType::DELETION),
            b"INV" => Ok(SvType::INVERSION),
            b"DUP" => Ok(SvType::DUPLICATION),
            b"CNV" => Ok(SvType::CNV),
            b"BND" => Ok(SvType::BND),
            _ => Err(crate::svlink_error!(
                "Invalid SV type: {:?}",
                String::from_utf8_lossy(bytes)
            )),
        }
    }
}

impl std::str::FromStr for SvType {
    type Err = crate::error::SvlinkError;
    fn from_str(s: &str) -> Result<Self> {
        Self::from_u8(s.as_bytes())
    }
}

impl std::fmt::Display for SvType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SvType::INSERTION => write!(f, "INS"),
            SvType::DELETION => write!(f, "DEL"),
            SvType::INVERSION => write!(f, "INV"),
            SvType::DUPLICATION => write!(f, "DUP"),
            SvType::CNV => write!(f, "CNV"),
            SvType::BND => write!(f, "BND"),
        }
    }
}
