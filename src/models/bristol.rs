use serde::Serialize;
use std::fmt;

/// Stool consistency on the Bristol scale (1 = hardest, 7 = liquid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BristolCategory {
    HardLumps,     // 1
    LumpySausage,  // 2
    FirmSausage,   // 3
    SoftSausage,   // 4
    SoftBlobs,     // 5
    MushyPieces,   // 6
    Liquid,        // 7
}

impl BristolCategory {
    pub const ALL: [BristolCategory; 7] = [
        BristolCategory::HardLumps,
        BristolCategory::LumpySausage,
        BristolCategory::FirmSausage,
        BristolCategory::SoftSausage,
        BristolCategory::SoftBlobs,
        BristolCategory::MushyPieces,
        BristolCategory::Liquid,
    ];

    /// Numeric code written to the spreadsheet.
    pub fn code(&self) -> u8 {
        match self {
            BristolCategory::HardLumps => 1,
            BristolCategory::LumpySausage => 2,
            BristolCategory::FirmSausage => 3,
            BristolCategory::SoftSausage => 4,
            BristolCategory::SoftBlobs => 5,
            BristolCategory::MushyPieces => 6,
            BristolCategory::Liquid => 7,
        }
    }

    /// Label shown in the form selector.
    pub fn label(&self) -> &'static str {
        match self {
            BristolCategory::HardLumps => "1. duro e separado",
            BristolCategory::LumpySausage => "2. alongado com caroço",
            BristolCategory::FirmSausage => "3. alongado e firme",
            BristolCategory::SoftSausage => "4. alongado e mole",
            BristolCategory::SoftBlobs => "5. bola mole",
            BristolCategory::MushyPieces => "6. pedaços macios e irregulares",
            BristolCategory::Liquid => "7. diarreia liquida",
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    /// Exact label lookup, as submitted by the form.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Helper for terminal input: accepts the bare code ("4") or a label
    /// in any letter case.
    pub fn from_input(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if let Ok(code) = trimmed.parse::<u8>() {
            return Self::from_code(code);
        }
        let lowered = trimmed.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.label().to_lowercase() == lowered)
    }
}

impl fmt::Display for BristolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
