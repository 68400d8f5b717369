use crate::error::{CoreError, CoreResult};

/// List template the server instantiates for `AddList`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListTemplate {
    GenericList,
    DocumentLibrary,
}

impl ListTemplate {
    /// Template identifier sent on the wire.
    #[must_use]
    pub const fn id(self) -> u32 {
        match self {
            Self::GenericList => 100,
            Self::DocumentLibrary => 101,
        }
    }
}

/// Check-in mode accepted by `CheckInFile`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckinType {
    MinorCheckIn,
    MajorCheckIn,
    OverwriteCheckIn,
}

impl CheckinType {
    pub const ALL: [Self; 3] = [Self::MinorCheckIn, Self::MajorCheckIn, Self::OverwriteCheckIn];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MinorCheckIn => "0",
            Self::MajorCheckIn => "1",
            Self::OverwriteCheckIn => "2",
        }
    }
}

impl std::fmt::Display for CheckinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CheckinType {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim() {
            "0" => Ok(Self::MinorCheckIn),
            "1" => Ok(Self::MajorCheckIn),
            "2" => Ok(Self::OverwriteCheckIn),
            other => Err(CoreError::UnknownCheckinType(other.to_owned())),
        }
    }
}

/// Kind of server object a generated name is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NameCategory {
    List,
    ListItem,
    ContentType,
    Field,
    File,
}

impl NameCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::List => "List",
            Self::ListItem => "ListItem",
            Self::ContentType => "ContentType",
            Self::Field => "Field",
            Self::File => "File",
        }
    }
}

impl std::fmt::Display for NameCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
