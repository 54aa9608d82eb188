//! The four Wireworld cell states.

use serde::{Deserialize, Serialize};

/// State of a single grid cell.
///
/// Variants are declared in the order of their numeric codes, so the derived
/// ordering matches [`CellState::code`]. [`CellState::Empty`] is the default
/// and the implicit state of every coordinate that was never written.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    /// Non-conductive background.
    #[default]
    Empty,
    /// Leading cell of an electron signal.
    ElectronHead,
    /// Trailing cell of an electron signal, one generation behind the head.
    ElectronTail,
    /// Wire capable of carrying a signal.
    Conductor,
}

/// Error returned when a state name or code is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCellStateError {
    /// The name does not match any state or alias.
    #[error("unknown cell state name: {0}")]
    UnknownName(String),

    /// The numeric code is outside `0..=3`.
    #[error("unknown cell state code: {0}")]
    UnknownCode(u8),
}

impl CellState {
    /// Every state, in code order.
    pub const ALL: [Self; 4] = [
        Self::Empty,
        Self::ElectronHead,
        Self::ElectronTail,
        Self::Conductor,
    ];

    /// Numeric code of the state (`0` empty, `1` head, `2` tail, `3` conductor).
    pub const fn code(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::ElectronHead => 1,
            Self::ElectronTail => 2,
            Self::Conductor => 3,
        }
    }

    /// Look a state up by its numeric code.
    pub const fn from_code(code: u8) -> Result<Self, ParseCellStateError> {
        match code {
            0 => Ok(Self::Empty),
            1 => Ok(Self::ElectronHead),
            2 => Ok(Self::ElectronTail),
            3 => Ok(Self::Conductor),
            other => Err(ParseCellStateError::UnknownCode(other)),
        }
    }

    /// Whether the cell currently carries part of a signal.
    pub const fn is_electron(self) -> bool {
        matches!(self, Self::ElectronHead | Self::ElectronTail)
    }

    /// Short lowercase name, as accepted by [`str::parse`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::ElectronHead => "head",
            Self::ElectronTail => "tail",
            Self::Conductor => "conductor",
        }
    }
}

impl core::str::FromStr for CellState {
    type Err = ParseCellStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "empty" => Ok(Self::Empty),
            "head" | "electron_head" => Ok(Self::ElectronHead),
            "tail" | "electron_tail" => Ok(Self::ElectronTail),
            "conductor" | "wire" => Ok(Self::Conductor),
            other => Err(ParseCellStateError::UnknownName(other.to_owned())),
        }
    }
}

impl core::fmt::Display for CellState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert_eq!(CellState::default(), CellState::Empty);
    }

    #[test]
    fn ordering_follows_codes() {
        let mut sorted = CellState::ALL;
        sorted.sort();
        assert_eq!(sorted, CellState::ALL);
        for pair in CellState::ALL.windows(2) {
            if let [lo, hi] = pair {
                assert!(lo.code() < hi.code());
            }
        }
    }

    #[test]
    fn code_roundtrip() {
        for state in CellState::ALL {
            assert_eq!(CellState::from_code(state.code()).unwrap(), state);
        }
        assert_eq!(
            CellState::from_code(4),
            Err(ParseCellStateError::UnknownCode(4))
        );
    }

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("head".parse::<CellState>().unwrap(), CellState::ElectronHead);
        assert_eq!(
            "Electron_Tail".parse::<CellState>().unwrap(),
            CellState::ElectronTail
        );
        assert_eq!("wire".parse::<CellState>().unwrap(), CellState::Conductor);
        assert!("plasma".parse::<CellState>().is_err());
    }

    #[test]
    fn only_heads_and_tails_are_electrons() {
        let electrons: Vec<CellState> = CellState::ALL
            .into_iter()
            .filter(|s| s.is_electron())
            .collect();
        assert_eq!(
            electrons,
            vec![CellState::ElectronHead, CellState::ElectronTail]
        );
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&CellState::ElectronHead).unwrap();
        assert_eq!(json, "\"electron_head\"");
        let back: CellState = serde_json::from_str("\"conductor\"").unwrap();
        assert_eq!(back, CellState::Conductor);
    }
}
