// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Static reference data: vehicle makes, departments and eligible employees.
//!
//! These sets are closed. Membership in [`Employee`] is the only eligibility
//! check for booking, and every employee belongs to exactly one [`Department`].

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A vehicle make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Make {
    Ford,
    Chevy,
    Toyota,
    Honda,
}

impl Make {
    /// Every make, in declaration order.
    pub const ALL: [Self; 4] = [Self::Ford, Self::Chevy, Self::Toyota, Self::Honda];

    /// Returns the canonical upper-case name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ford => "FORD",
            Self::Chevy => "CHEVY",
            Self::Toyota => "TOYOTA",
            Self::Honda => "HONDA",
        }
    }
}

impl FromStr for Make {
    type Err = DomainError;

    /// Matches case-insensitively against the canonical names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper: String = s.to_uppercase();
        Self::ALL
            .into_iter()
            .find(|make| make.as_str() == upper)
            .ok_or_else(|| DomainError::UnknownMake(s.to_string()))
    }
}

impl std::fmt::Display for Make {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An academic department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Department {
    ComputerScience,
    ElectricalEngineering,
    InformationTechnologyAndInformatics,
    Mathematics,
    BusinessAnalyticsAndInformationTechnology,
}

impl Department {
    /// Every department in the order its section appears in reports.
    pub const ALL: [Self; 5] = [
        Self::BusinessAnalyticsAndInformationTechnology,
        Self::ComputerScience,
        Self::ElectricalEngineering,
        Self::InformationTechnologyAndInformatics,
        Self::Mathematics,
    ];

    /// Returns the human-readable department name used in section headers.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::ComputerScience => "Computer Science",
            Self::ElectricalEngineering => "Electrical Engineering",
            Self::InformationTechnologyAndInformatics => "Information Technology and Informatics",
            Self::Mathematics => "Mathematics",
            Self::BusinessAnalyticsAndInformationTechnology => {
                "Business Analytics and Information Technology"
            }
        }
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// An employee eligible to book vehicles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Employee {
    Patel,
    Lim,
    Zimnes,
    Harper,
    Kaur,
    Taylor,
    Ramesh,
    Ceravolo,
}

impl Employee {
    /// Every eligible employee.
    pub const ALL: [Self; 8] = [
        Self::Patel,
        Self::Lim,
        Self::Zimnes,
        Self::Harper,
        Self::Kaur,
        Self::Taylor,
        Self::Ramesh,
        Self::Ceravolo,
    ];

    /// Returns the canonical upper-case identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Patel => "PATEL",
            Self::Lim => "LIM",
            Self::Zimnes => "ZIMNES",
            Self::Harper => "HARPER",
            Self::Kaur => "KAUR",
            Self::Taylor => "TAYLOR",
            Self::Ramesh => "RAMESH",
            Self::Ceravolo => "CERAVOLO",
        }
    }

    /// Returns the department this employee belongs to.
    #[must_use]
    pub const fn department(&self) -> Department {
        match self {
            Self::Patel | Self::Zimnes => Department::ComputerScience,
            Self::Lim | Self::Harper => Department::ElectricalEngineering,
            Self::Kaur => Department::InformationTechnologyAndInformatics,
            Self::Taylor | Self::Ramesh => Department::Mathematics,
            Self::Ceravolo => Department::BusinessAnalyticsAndInformationTechnology,
        }
    }
}

impl FromStr for Employee {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper: String = s.to_uppercase();
        Self::ALL
            .into_iter()
            .find(|employee| employee.as_str() == upper)
            .ok_or_else(|| DomainError::UnknownEmployee(s.to_string()))
    }
}

impl std::fmt::Display for Employee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
